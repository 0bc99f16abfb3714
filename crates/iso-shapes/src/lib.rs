//! The renderable shape model: polygons and groups, parametric volume
//! constructors, and the texture/fill generators that skin projected faces.

pub mod error;
pub mod fills;
pub mod polygon;
pub mod renderable;
pub mod texture;
pub mod volume;

pub use error::ShapeError;
pub use fills::{hatch_fill, line_fill, scan_fill, HatchStyle, DEFAULT_HATCH_ANGLE};
pub use polygon::{Polygon, CIRCLE_SEGMENTS};
pub use renderable::{order_faces_for_depth, DepthOrder, Group, Renderable};
pub use texture::{FillTexture, HatchTexture, LineTexture, Texture};
pub use volume::{cuboid, prism, pyramid, CuboidStyle, FaceStyle, PrismStyle, PyramidStyle};
