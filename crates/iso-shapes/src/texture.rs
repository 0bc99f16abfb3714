use geo::MultiPolygon;
use geo_buf::buffer_polygon;
use serde::{Deserialize, Serialize};

use iso_geom::RenderableGeometry;

use crate::fills::{hatch_fill, line_fill, scan_fill, HatchStyle, DEFAULT_HATCH_ANGLE};

/// A 2D skin applied to a polygon face after projection. Each texture
/// compiles independently against the face's projected outline into one
/// multi-line geometry at the texture's own layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Texture {
    Hatch(HatchTexture),
    Line(LineTexture),
    Fill(FillTexture),
}

impl Texture {
    /// Compile against the face's projected outline. Output lines are
    /// already clipped to the (possibly inset) outline.
    pub fn compile(&self, polygon2d: &geo::Polygon<f64>) -> RenderableGeometry {
        match self {
            Texture::Hatch(hatch) => hatch.compile(polygon2d),
            Texture::Line(line) => line.compile(polygon2d),
            Texture::Fill(fill) => fill.compile(polygon2d),
        }
    }

    pub fn layer(&self) -> i32 {
        match self {
            Texture::Hatch(hatch) => hatch.layer,
            Texture::Line(line) => line.layer,
            Texture::Fill(fill) => fill.layer,
        }
    }
}

/// Parallel hatch lines (single or crossed) across the face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HatchTexture {
    pub pitch: f64,
    pub style: HatchStyle,
    /// Hatch angle in radians from horizontal.
    pub angle: f64,
    /// Inward shrink of the fill region before hatching; 0 disables.
    pub inset: f64,
    pub layer: i32,
}

impl HatchTexture {
    pub fn new(pitch: f64, style: HatchStyle) -> Self {
        Self {
            pitch,
            style,
            angle: DEFAULT_HATCH_ANGLE,
            inset: 0.0,
            layer: 1,
        }
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_inset(mut self, inset: f64) -> Self {
        self.inset = inset;
        self
    }

    pub fn on_layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    fn compile(&self, polygon2d: &geo::Polygon<f64>) -> RenderableGeometry {
        let region = inset_region(polygon2d, self.inset);
        RenderableGeometry::new(
            hatch_fill(&region, self.pitch, self.style, self.angle),
            self.layer,
        )
    }
}

/// Evenly pitched vertical lines across the face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineTexture {
    pub pitch: f64,
    pub inset: f64,
    pub layer: i32,
}

impl LineTexture {
    pub fn new(pitch: f64) -> Self {
        Self {
            pitch,
            inset: 0.0,
            layer: 1,
        }
    }

    pub fn with_inset(mut self, inset: f64) -> Self {
        self.inset = inset;
        self
    }

    pub fn on_layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    fn compile(&self, polygon2d: &geo::Polygon<f64>) -> RenderableGeometry {
        let region = inset_region(polygon2d, self.inset);
        RenderableGeometry::new(line_fill(&region, self.pitch), self.layer)
    }
}

/// Near-solid fill approximated by scan lines at pen-width spacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillTexture {
    /// Approximate pen line width, which sets the scan spacing.
    pub pen_width: f64,
    pub inset: f64,
    pub layer: i32,
}

impl FillTexture {
    pub fn new(pen_width: f64) -> Self {
        Self {
            pen_width,
            inset: 0.0,
            layer: 1,
        }
    }

    pub fn with_inset(mut self, inset: f64) -> Self {
        self.inset = inset;
        self
    }

    pub fn on_layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    fn compile(&self, polygon2d: &geo::Polygon<f64>) -> RenderableGeometry {
        let region = inset_region(polygon2d, self.inset);
        RenderableGeometry::new(scan_fill(&region, self.pen_width), self.layer)
    }
}

/// Shrink the face inward so fill strokes stay clear of the outline.
/// Inset 0 clips against the outline itself.
fn inset_region(polygon2d: &geo::Polygon<f64>, inset: f64) -> MultiPolygon<f64> {
    if inset > 0.0 {
        buffer_polygon(polygon2d, -inset)
    } else {
        MultiPolygon::new(vec![polygon2d.clone()])
    }
}
