use geo::{BooleanOps, Geometry, MultiLineString, MultiPolygon, Polygon};
use tracing::{debug, instrument};

use iso_geom::{GeometryError, OriginMode, RenderContext, RenderableGeometry, DIMETRIC_ANGLE};
use iso_shapes::Renderable;

use crate::occlude::occlude;
use crate::sink::RenderSink;

/// A 3D isometric scene: a shared render context plus an append-only,
/// back-to-front list of renderables. Shapes added later are visually in
/// front of shapes added earlier.
///
/// The scene is the only mutable entity in the pipeline; it is built up
/// by a single caller and treated as read-only once compilation starts.
#[derive(Debug, Clone)]
pub struct Scene {
    context: RenderContext,
    children: Vec<Renderable>,
    clip_to_frame: bool,
}

impl Scene {
    /// Scene with a centroid grid origin, frame clipping enabled, and the
    /// standard dimetric angle.
    pub fn new(frame: Polygon<f64>, grid_pitch: f64) -> Result<Self, GeometryError> {
        Self::with_origin(frame, grid_pitch, OriginMode::Centroid)
    }

    /// Scene with an explicit origin policy.
    pub fn with_origin(
        frame: Polygon<f64>,
        grid_pitch: f64,
        origin: OriginMode,
    ) -> Result<Self, GeometryError> {
        Ok(Self {
            context: RenderContext::new(frame, grid_pitch, DIMETRIC_ANGLE, origin)?,
            children: Vec::new(),
            clip_to_frame: true,
        })
    }

    /// Disable clipping compiled geometry to the frame.
    pub fn without_clipping(mut self) -> Self {
        self.clip_to_frame = false;
        self
    }

    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    pub fn children(&self) -> &[Renderable] {
        &self.children
    }

    /// Append a renderable. Later additions draw in front.
    pub fn add(&mut self, child: impl Into<Renderable>) {
        self.children.push(child.into());
    }

    /// Compile the scene into an ordered, back-to-front list of
    /// flattened, frame-clipped, occluded geometries. Drawing the list in
    /// order reproduces the visible picture. An empty scene compiles to
    /// an empty list.
    #[instrument(skip(self), fields(children = self.children.len()))]
    pub fn compile(&self) -> Vec<RenderableGeometry> {
        let frame = MultiPolygon::new(vec![self.context.frame().clone()]);

        let mut compiled = Vec::new();
        for child in &self.children {
            let flattened = flatten(child.compile(&self.context));
            compiled.extend(
                flattened
                    .into_iter()
                    .map(|renderable| self.clip(&frame, renderable)),
            );
        }
        debug!(geometries = compiled.len(), "scene compiled, occluding");
        occlude(compiled)
    }

    /// Compile and stroke every geometry through the sink in draw order.
    /// Layer 0 is emitted without a visible stroke.
    pub fn render(&self, sink: &mut dyn RenderSink) {
        for renderable in self.compile() {
            if renderable.layer == 0 {
                sink.no_stroke();
            } else {
                sink.stroke(renderable.layer);
            }
            sink.geometry(&renderable.geometry);
        }
    }

    /// Intersect one compiled geometry with the frame. A geometry fully
    /// outside becomes empty but keeps its position in the list, so
    /// occlusion indices stay stable.
    fn clip(&self, frame: &MultiPolygon<f64>, renderable: RenderableGeometry) -> RenderableGeometry {
        if !self.clip_to_frame {
            return renderable;
        }
        let geometry = match renderable.geometry {
            Geometry::Polygon(polygon) => {
                Geometry::MultiPolygon(frame.intersection(&MultiPolygon::new(vec![polygon])))
            }
            Geometry::MultiPolygon(multi) => Geometry::MultiPolygon(frame.intersection(&multi)),
            Geometry::LineString(line) => {
                Geometry::MultiLineString(frame.clip(&MultiLineString::new(vec![line]), false))
            }
            Geometry::MultiLineString(lines) => {
                Geometry::MultiLineString(frame.clip(&lines, false))
            }
            other => other,
        };
        RenderableGeometry {
            geometry,
            layer: renderable.layer,
        }
    }
}

/// Expand heterogeneous collection results into one entry per member
/// geometry, each inheriting the source layer. Order within an expansion
/// is the collection's own member order.
fn flatten(compiled: Vec<RenderableGeometry>) -> Vec<RenderableGeometry> {
    let mut flattened = Vec::new();
    for renderable in compiled {
        match renderable.geometry {
            Geometry::GeometryCollection(collection) => flattened.extend(
                collection
                    .0
                    .into_iter()
                    .map(|member| RenderableGeometry::new(member, renderable.layer)),
            ),
            _ => flattened.push(renderable),
        }
    }
    flattened
}
