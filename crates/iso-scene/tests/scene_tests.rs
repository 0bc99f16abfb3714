//! Scene compilation: ordering, frame clipping, and occlusion.

use approx::assert_relative_eq;
use geo::{coord, Area, Geometry, LineString, Rect};

use iso_geom::{GeometryError, Plane, Point3};
use iso_scene::Scene;
use iso_shapes::{cuboid, CuboidStyle, HatchStyle, HatchTexture, Polygon, Texture};

/// Projected area scale for a face parallel to any principal plane at the
/// standard viewing angle.
const FACE_SCALE: f64 = 0.866_025_403_784_438_6;

fn square_frame(size: f64) -> geo::Polygon<f64> {
    Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: size, y: size }).to_polygon()
}

fn scene() -> Scene {
    Scene::new(square_frame(100.0), 1.0).unwrap()
}

fn origin() -> Point3 {
    Point3::new(0.0, 0.0, 0.0)
}

fn flat_square(center: Point3, side: f64) -> Polygon {
    Polygon::rectangle(center, side, side, Plane::Xy, 1)
}

#[test]
fn empty_scene_compiles_to_nothing() {
    assert!(scene().compile().is_empty());
}

#[test]
fn degenerate_frame_is_rejected() {
    let frame = geo::Polygon::new(LineString::new(Vec::new()), Vec::new());
    assert_eq!(
        Scene::new(frame, 1.0).unwrap_err(),
        GeometryError::DegenerateFrame
    );
}

#[test]
fn added_children_are_kept_in_order() {
    let mut scene = scene();
    for _ in 0..3 {
        scene.add(flat_square(origin(), 1.0));
    }
    assert_eq!(scene.children().len(), 3);
}

#[test]
fn cuboid_compiles_to_three_intact_faces() {
    let mut scene = scene();
    scene.add(cuboid(origin(), 1.0, 1.0, 1.0, CuboidStyle::default()));
    let compiled = scene.compile();

    assert_eq!(compiled.len(), 3);
    for face in &compiled {
        // Faces share edges but no interior, so occlusion removes nothing.
        assert_relative_eq!(face.geometry.unsigned_area(), FACE_SCALE, epsilon = 1e-6);
    }
    let total: f64 = compiled
        .iter()
        .map(|face| face.geometry.unsigned_area())
        .sum();
    assert_relative_eq!(total, 3.0 * FACE_SCALE, epsilon = 1e-6);
}

#[test]
fn nearer_shape_fully_occludes_a_coincident_one() {
    let mut scene = scene();
    scene.add(flat_square(origin(), 10.0));
    scene.add(flat_square(origin(), 10.0));
    let compiled = scene.compile();

    assert_eq!(compiled.len(), 2);
    assert!(compiled[0].geometry.unsigned_area() < 1e-9);
    assert_relative_eq!(
        compiled[1].geometry.unsigned_area(),
        100.0 * FACE_SCALE,
        epsilon = 1e-6
    );
}

#[test]
fn disjoint_shapes_do_not_occlude_each_other() {
    let mut scene = scene();
    scene.add(flat_square(Point3::new(-10.0, -10.0, 0.0), 10.0));
    scene.add(flat_square(Point3::new(10.0, 10.0, 0.0), 10.0));
    let compiled = scene.compile();

    for shape in &compiled {
        assert_relative_eq!(
            shape.geometry.unsigned_area(),
            100.0 * FACE_SCALE,
            epsilon = 1e-6
        );
    }
}

#[test]
fn partial_overlap_bites_a_hole_in_the_back_shape() {
    let mut scene = scene();
    scene.add(flat_square(origin(), 10.0));
    scene.add(flat_square(Point3::new(5.0, 5.0, 0.0), 10.0));
    let compiled = scene.compile();

    let back = compiled[0].geometry.unsigned_area();
    let front = compiled[1].geometry.unsigned_area();
    assert!(back > 1e-6);
    assert!(back < 100.0 * FACE_SCALE - 1e-6);
    assert_relative_eq!(front, 100.0 * FACE_SCALE, epsilon = 1e-6);
}

#[test]
fn geometry_outside_the_frame_clips_empty_but_keeps_its_slot() {
    let mut scene = scene();
    scene.add(flat_square(Point3::new(300.0, -300.0, 0.0), 10.0));
    scene.add(flat_square(origin(), 10.0));
    let compiled = scene.compile();

    assert_eq!(compiled.len(), 2);
    assert!(compiled[0].geometry.unsigned_area() < 1e-9);
    assert_relative_eq!(
        compiled[1].geometry.unsigned_area(),
        100.0 * FACE_SCALE,
        epsilon = 1e-6
    );
}

#[test]
fn clipping_can_be_disabled() {
    let mut scene = scene().without_clipping();
    scene.add(flat_square(Point3::new(300.0, -300.0, 0.0), 10.0));
    let compiled = scene.compile();

    assert_relative_eq!(
        compiled[0].geometry.unsigned_area(),
        100.0 * FACE_SCALE,
        epsilon = 1e-6
    );
}

#[test]
fn fill_lines_are_never_occluded() {
    let mut scene = scene();
    scene.add(
        flat_square(origin(), 10.0)
            .with_texture(Texture::Hatch(HatchTexture::new(1.0, HatchStyle::Hatch))),
    );
    scene.add(flat_square(origin(), 20.0));
    let compiled = scene.compile();

    assert_eq!(compiled.len(), 3);
    // The covered outline is eaten away, but its hatch lines survive.
    assert!(compiled[0].geometry.unsigned_area() < 1e-9);
    match &compiled[1].geometry {
        Geometry::MultiLineString(lines) => assert!(!lines.0.is_empty()),
        other => panic!("expected hatch lines, got {other:?}"),
    }
    assert_relative_eq!(
        compiled[2].geometry.unsigned_area(),
        400.0 * FACE_SCALE,
        epsilon = 1e-6
    );
}
