use geo::{Centroid, Coord, Geometry, Polygon};

use crate::error::GeometryError;
use crate::Point3;

/// Fixed dimetric viewing angle: 30 degrees from horizontal.
///
/// A named constant rather than ambient state so scenes with different
/// projection angles can coexist; it is passed explicitly into every
/// [`RenderContext`].
pub const DIMETRIC_ANGLE: f64 = std::f64::consts::PI / 6.0;

/// How a render context resolves the grid origin on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OriginMode {
    /// Use the centroid of the clipping frame.
    Centroid,
    /// Use an explicit screen-space point.
    Fixed(Coord<f64>),
}

/// Immutable per-render configuration shared by every shape compilation:
/// the clipping frame, the world-to-screen scale, the dimetric angle, and
/// the resolved grid origin.
#[derive(Debug, Clone)]
pub struct RenderContext {
    frame: Polygon<f64>,
    pub grid_pitch: f64,
    pub dimetric_angle: f64,
    origin: Coord<f64>,
}

impl RenderContext {
    /// Build a context, resolving the origin policy eagerly so projection
    /// stays a pure total function. A frame without a centroid (empty or
    /// fully degenerate ring) is rejected here, never during compile.
    pub fn new(
        frame: Polygon<f64>,
        grid_pitch: f64,
        dimetric_angle: f64,
        origin: OriginMode,
    ) -> Result<Self, GeometryError> {
        let origin = match origin {
            OriginMode::Fixed(point) => point,
            OriginMode::Centroid => frame.centroid().ok_or(GeometryError::DegenerateFrame)?.0,
        };
        Ok(Self {
            frame,
            grid_pitch,
            dimetric_angle,
            origin,
        })
    }

    /// The clipping frame polygon.
    pub fn frame(&self) -> &Polygon<f64> {
        &self.frame
    }

    /// The resolved screen-space grid origin.
    pub fn origin(&self) -> Coord<f64> {
        self.origin
    }

    /// Project a 3D grid point to 2D screen coordinates.
    ///
    /// The world X and Y axes fan out symmetrically around the dimetric
    /// angle; increasing world Z moves up the page (screen Y shrinks).
    pub fn project(&self, point: Point3) -> Coord<f64> {
        let (sin, cos) = self.dimetric_angle.sin_cos();
        let pitch = self.grid_pitch;
        Coord {
            x: self.origin.x + (point.x - point.y) * pitch * cos,
            y: self.origin.y - (point.x + point.y) * pitch * sin - point.z * pitch,
        }
    }
}

/// A compiled 2D geometry paired with the layer it is drawn on.
///
/// Layer 0 is reserved for geometry that is never stroked (fill clip
/// boundaries); any other integer selects an implementation-defined stroke
/// style on the output device.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderableGeometry {
    pub geometry: Geometry<f64>,
    pub layer: i32,
}

impl RenderableGeometry {
    pub fn new(geometry: impl Into<Geometry<f64>>, layer: i32) -> Self {
        Self {
            geometry: geometry.into(),
            layer,
        }
    }
}
