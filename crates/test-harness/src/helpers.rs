//! Error type, frame builders, and canonical scenes shared by tests.

use geo::{coord, Polygon, Rect};

use iso_geom::{GeometryError, Point3};
use iso_scene::Scene;
use iso_shapes::{cuboid, CuboidStyle, ShapeError};

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("scene construction failed: {0}")]
    SceneConstruction(#[from] GeometryError),

    #[error("shape construction failed: {0}")]
    ShapeConstruction(#[from] ShapeError),
}

/// Axis-aligned square frame from (0, 0) to (size, size).
pub fn square_frame(size: f64) -> Polygon<f64> {
    Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: size, y: size }).to_polygon()
}

/// Scene on a [0, 100]^2 frame at unit grid pitch.
pub fn unit_scene() -> Result<Scene, HarnessError> {
    Ok(Scene::new(square_frame(100.0), 1.0)?)
}

/// Scene on a [0, 100]^2 frame at unit grid pitch containing one unit
/// cuboid at the world origin.
pub fn unit_cuboid_scene() -> Result<Scene, HarnessError> {
    let mut scene = unit_scene()?;
    scene.add(cuboid(
        Point3::new(0.0, 0.0, 0.0),
        1.0,
        1.0,
        1.0,
        CuboidStyle::default(),
    ));
    Ok(scene)
}
