//! Leaf math for the isometric pipeline: orientation planes and rotation
//! axes, point rotation about an explicit pivot, and the shared dimetric
//! projection every shape compiles through.

pub mod error;
pub mod plane;
pub mod render;
pub mod rotation;

pub use error::GeometryError;
pub use plane::{project_to_plane, Plane};
pub use render::{OriginMode, RenderContext, RenderableGeometry, DIMETRIC_ANGLE};
pub use rotation::{rotate_x, rotate_y, rotate_z, Axis, Rotation};

/// 3D point type used throughout the pipeline.
pub type Point3 = nalgebra::Point3<f64>;
