use nalgebra::{Rotation3, Vector3};
use serde::{Deserialize, Serialize};

use crate::Point3;

/// Rotation axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// A rotation about a principal axis around an explicit pivot point.
///
/// Attached to a polygon at construction time and applied to its vertex
/// values exactly once, before any projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub axis: Axis,
    /// Angle in radians, right-handed about the axis. No domain restriction.
    pub angle: f64,
    /// Pivot the rotation is applied around.
    pub origin: Point3,
}

impl Rotation {
    pub fn new(axis: Axis, angle: f64, origin: Point3) -> Self {
        Self {
            axis,
            angle,
            origin,
        }
    }

    /// Rotate a point around this rotation's pivot.
    ///
    /// The pivot itself, and any point under a zero angle, comes back
    /// bit-for-bit unchanged: the translated vector is exactly zero in the
    /// first case and the rotation matrix exactly the identity in the
    /// second.
    pub fn apply(&self, point: Point3) -> Point3 {
        let axis = match self.axis {
            Axis::X => Vector3::x_axis(),
            Axis::Y => Vector3::y_axis(),
            Axis::Z => Vector3::z_axis(),
        };
        let rotation = Rotation3::from_axis_angle(&axis, self.angle);
        self.origin + rotation * (point - self.origin)
    }
}

/// Rotate `point` about the X axis through `center` by `angle` radians.
pub fn rotate_x(point: Point3, angle: f64, center: Point3) -> Point3 {
    Rotation::new(Axis::X, angle, center).apply(point)
}

/// Rotate `point` about the Y axis through `center` by `angle` radians.
pub fn rotate_y(point: Point3, angle: f64, center: Point3) -> Point3 {
    Rotation::new(Axis::Y, angle, center).apply(point)
}

/// Rotate `point` about the Z axis through `center` by `angle` radians.
pub fn rotate_z(point: Point3, angle: f64, center: Point3) -> Point3 {
    Rotation::new(Axis::Z, angle, center).apply(point)
}
