//! Scene compositor: owns the render context and the ordered renderable
//! list, and compiles the scene into a flattened, frame-clipped,
//! depth-occluded sequence of 2D geometries ready for stroking.

pub mod occlude;
pub mod scene;
pub mod sink;

pub use occlude::occlude;
pub use scene::Scene;
pub use sink::RenderSink;
