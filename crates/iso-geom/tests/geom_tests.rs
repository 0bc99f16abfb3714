//! Rotation, plane, and projection behavior.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use approx::assert_relative_eq;
use geo::{coord, Coord, Polygon, Rect};

use iso_geom::{
    project_to_plane, rotate_x, rotate_y, rotate_z, Axis, OriginMode, Plane, Point3,
    RenderContext, Rotation, DIMETRIC_ANGLE,
};

fn origin() -> Point3 {
    Point3::new(0.0, 0.0, 0.0)
}

fn square_frame(size: f64) -> Polygon<f64> {
    Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: size, y: size }).to_polygon()
}

fn context() -> RenderContext {
    RenderContext::new(square_frame(100.0), 1.0, DIMETRIC_ANGLE, OriginMode::Centroid)
        .unwrap()
}

fn assert_point_close(actual: Point3, expected: Point3) {
    assert_relative_eq!(actual.x, expected.x, epsilon = 1e-12);
    assert_relative_eq!(actual.y, expected.y, epsilon = 1e-12);
    assert_relative_eq!(actual.z, expected.z, epsilon = 1e-12);
}

#[test]
fn rotate_z_quarter_turn() {
    let rotated = rotate_z(Point3::new(0.0, 1.0, 0.0), -FRAC_PI_2, origin());
    assert_point_close(rotated, Point3::new(1.0, 0.0, 0.0));
}

#[test]
fn rotate_z_eighth_turn_onto_axis() {
    let rotated = rotate_z(Point3::new(1.0, 1.0, 0.0), FRAC_PI_4, origin());
    assert_point_close(rotated, Point3::new(0.0, 2.0_f64.sqrt(), 0.0));
}

#[test]
fn rotate_x_lifts_y_onto_z() {
    let rotated = rotate_x(Point3::new(0.0, 1.0, 0.0), FRAC_PI_2, origin());
    assert_point_close(rotated, Point3::new(0.0, 0.0, 1.0));
}

#[test]
fn rotate_y_drops_z_onto_x() {
    let rotated = rotate_y(Point3::new(0.0, 0.0, 1.0), FRAC_PI_2, origin());
    assert_point_close(rotated, Point3::new(1.0, 0.0, 0.0));
}

#[test]
fn rotation_about_offset_pivot() {
    // Quarter turn about Z through (1, 0, 0): (2, 0, 0) swings to (1, 1, 0).
    let pivot = Point3::new(1.0, 0.0, 0.0);
    let rotated = rotate_z(Point3::new(2.0, 0.0, 0.0), FRAC_PI_2, pivot);
    assert_point_close(rotated, Point3::new(1.0, 1.0, 0.0));
}

#[test]
fn pivot_point_is_exactly_fixed() {
    let pivot = Point3::new(3.5, -2.25, 7.125);
    let rotated = Rotation::new(Axis::Y, 1.234, pivot).apply(pivot);
    assert_eq!(rotated, pivot);
}

#[test]
fn zero_angle_is_exact_identity() {
    let point = Point3::new(0.1, -0.2, 0.3);
    for axis in [Axis::X, Axis::Y, Axis::Z] {
        let rotated = Rotation::new(axis, 0.0, origin()).apply(point);
        assert_eq!(rotated, point);
    }
}

#[test]
fn opposite_rotations_compose_to_identity() {
    let point = Point3::new(1.0, 2.0, 3.0);
    let pivot = Point3::new(-1.0, 0.5, 2.0);
    let there = rotate_z(point, 0.7, pivot);
    let back = rotate_z(there, -0.7, pivot);
    assert_point_close(back, point);
}

#[test]
fn plane_projection_axis_order() {
    let point = Coord { x: 2.0, y: 3.0 };
    assert_eq!(project_to_plane(point, Plane::Xy), Point3::new(2.0, 3.0, 0.0));
    assert_eq!(project_to_plane(point, Plane::Xz), Point3::new(2.0, 0.0, 3.0));
    assert_eq!(project_to_plane(point, Plane::Yz), Point3::new(0.0, 2.0, 3.0));
}

#[test]
fn world_origin_projects_onto_frame_centroid() {
    let projected = context().project(origin());
    assert_eq!(projected, Coord { x: 50.0, y: 50.0 });
}

#[test]
fn projection_fans_x_and_y_symmetrically() {
    let ctx = context();
    let along_x = ctx.project(Point3::new(1.0, 0.0, 0.0));
    let along_y = ctx.project(Point3::new(0.0, 1.0, 0.0));

    // X goes down-right, Y goes down-left, both by the same amounts.
    assert_relative_eq!(along_x.x - 50.0, DIMETRIC_ANGLE.cos(), epsilon = 1e-12);
    assert_relative_eq!(along_y.x - 50.0, -DIMETRIC_ANGLE.cos(), epsilon = 1e-12);
    assert_relative_eq!(along_x.y, along_y.y, epsilon = 1e-12);
    assert_relative_eq!(50.0 - along_x.y, DIMETRIC_ANGLE.sin(), epsilon = 1e-12);
}

#[test]
fn increasing_z_moves_up_the_page() {
    let ctx = context();
    let raised = ctx.project(Point3::new(0.0, 0.0, 2.0));
    assert_relative_eq!(raised.x, 50.0, epsilon = 1e-12);
    assert_relative_eq!(raised.y, 48.0, epsilon = 1e-12);
}

#[test]
fn grid_pitch_scales_projection() {
    let doubled =
        RenderContext::new(square_frame(100.0), 2.0, DIMETRIC_ANGLE, OriginMode::Centroid)
            .unwrap();
    let unit = context();
    let point = Point3::new(1.0, -1.0, 1.0);
    assert_relative_eq!(
        doubled.project(point).x - 50.0,
        2.0 * (unit.project(point).x - 50.0),
        epsilon = 1e-12
    );
}

#[test]
fn fixed_origin_overrides_centroid() {
    let ctx = RenderContext::new(
        square_frame(100.0),
        1.0,
        DIMETRIC_ANGLE,
        OriginMode::Fixed(Coord { x: 10.0, y: 20.0 }),
    )
    .unwrap();
    assert_eq!(ctx.project(origin()), Coord { x: 10.0, y: 20.0 });
}

#[test]
fn projection_is_deterministic() {
    let ctx = context();
    let point = Point3::new(0.3, 1.7, -2.2);
    assert_eq!(ctx.project(point), ctx.project(point));
}
