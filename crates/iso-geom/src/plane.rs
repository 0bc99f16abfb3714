use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::Point3;

/// The three principal orientation planes a 2D outline can be placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Plane {
    Yz,
    Xz,
    Xy,
}

/// Reverse-project a 2D point onto one of the three principal planes.
///
/// The 2D axes map onto the plane's own axes in name order: XZ places the
/// local y along world Z, YZ places local x along world Y.
pub fn project_to_plane(point: Coord<f64>, plane: Plane) -> Point3 {
    match plane {
        Plane::Xy => Point3::new(point.x, point.y, 0.0),
        Plane::Xz => Point3::new(point.x, 0.0, point.y),
        Plane::Yz => Point3::new(0.0, point.x, point.y),
    }
}
