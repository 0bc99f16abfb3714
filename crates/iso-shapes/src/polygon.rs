use geo::{Coord, LineString};
use serde::{Deserialize, Serialize};

use iso_geom::{project_to_plane, Plane, Point3, RenderContext, RenderableGeometry, Rotation};

use crate::error::ShapeError;
use crate::texture::Texture;

/// Segment count used to approximate a smooth circle.
pub const CIRCLE_SEGMENTS: usize = 64;

/// A single closed face: an ordered ring of at least three 3D vertices
/// with a draw layer, optional surface textures, and rotations that were
/// applied to the vertex values at attachment time.
///
/// The vertex count is fixed at construction; rotations change vertex
/// values, never the count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Point3>,
    layer: i32,
    textures: Vec<Texture>,
    rotations: Vec<Rotation>,
}

impl Polygon {
    /// Build a polygon from explicit vertices.
    pub fn new(vertices: Vec<Point3>, layer: i32) -> Result<Self, ShapeError> {
        if vertices.len() < 3 {
            return Err(ShapeError::DegeneratePolygon {
                count: vertices.len(),
            });
        }
        Ok(Self::from_ring(vertices, layer))
    }

    /// Internal constructor for generated rings whose length is known to
    /// be valid.
    pub(crate) fn from_ring(vertices: Vec<Point3>, layer: i32) -> Self {
        debug_assert!(vertices.len() >= 3);
        Self {
            vertices,
            layer,
            textures: Vec::new(),
            rotations: Vec::new(),
        }
    }

    /// A rectangle of `width` x `height` centered on `origin`, oriented
    /// parallel to the given plane.
    ///
    /// Vertices come back in a fixed corner order, starting at the
    /// minimum corner, identically for all three planes.
    pub fn rectangle(origin: Point3, width: f64, height: f64, plane: Plane, layer: i32) -> Self {
        Self::from_ring(rectangle_vertices(origin, width, height, plane), layer)
    }

    /// A regular `sides`-gon of the given radius centered on `origin`,
    /// reverse-projected onto `plane`.
    pub fn regular(
        origin: Point3,
        sides: usize,
        radius: f64,
        plane: Plane,
        layer: i32,
    ) -> Result<Self, ShapeError> {
        if sides < 3 {
            return Err(ShapeError::TooFewSides { sides });
        }
        Ok(Self::from_ring(
            regular_vertices(origin, sides, radius, plane),
            layer,
        ))
    }

    /// Smooth-circle approximation: a [`CIRCLE_SEGMENTS`]-gon.
    pub fn circle(origin: Point3, radius: f64, plane: Plane, layer: i32) -> Self {
        Self::from_ring(
            regular_vertices(origin, CIRCLE_SEGMENTS, radius, plane),
            layer,
        )
    }

    /// Attach a texture. Textures compile after the bare polygon, in
    /// attachment order.
    pub fn with_texture(mut self, texture: Texture) -> Self {
        self.textures.push(texture);
        self
    }

    /// Apply a rotation to the vertex values. Each attached rotation is
    /// applied exactly once, immediately, before any projection.
    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        for vertex in &mut self.vertices {
            *vertex = rotation.apply(*vertex);
        }
        self.rotations.push(rotation);
        self
    }

    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    pub fn layer(&self) -> i32 {
        self.layer
    }

    pub fn textures(&self) -> &[Texture] {
        &self.textures
    }

    /// Rotations already applied to the vertex values, in order.
    pub fn rotations(&self) -> &[Rotation] {
        &self.rotations
    }

    /// Project the vertex ring to screen space and compile every attached
    /// texture against the projected outline. The bare polygon comes
    /// first, then the texture outputs in attachment order.
    pub fn compile(&self, context: &RenderContext) -> Vec<RenderableGeometry> {
        let ring: Vec<Coord<f64>> = self
            .vertices
            .iter()
            .map(|vertex| context.project(*vertex))
            .collect();
        let polygon2d = geo::Polygon::new(LineString::from(ring), Vec::new());

        let mut compiled = vec![RenderableGeometry::new(polygon2d.clone(), self.layer)];
        compiled.extend(
            self.textures
                .iter()
                .map(|texture| texture.compile(&polygon2d)),
        );
        compiled
    }
}

fn rectangle_vertices(origin: Point3, width: f64, height: f64, plane: Plane) -> Vec<Point3> {
    let (x, y, z) = (origin.x, origin.y, origin.z);
    let hw = width / 2.0;
    let hh = height / 2.0;

    match plane {
        Plane::Yz => vec![
            Point3::new(x, y - hw, z - hh),
            Point3::new(x, y + hw, z - hh),
            Point3::new(x, y + hw, z + hh),
            Point3::new(x, y - hw, z + hh),
        ],
        Plane::Xz => vec![
            Point3::new(x - hw, y, z - hh),
            Point3::new(x - hw, y, z + hh),
            Point3::new(x + hw, y, z + hh),
            Point3::new(x + hw, y, z - hh),
        ],
        Plane::Xy => vec![
            Point3::new(x - hw, y - hh, z),
            Point3::new(x - hw, y + hh, z),
            Point3::new(x + hw, y + hh, z),
            Point3::new(x + hw, y - hh, z),
        ],
    }
}

fn regular_vertices(origin: Point3, sides: usize, radius: f64, plane: Plane) -> Vec<Point3> {
    let step = std::f64::consts::TAU / sides as f64;
    (0..sides)
        .map(|i| {
            let theta = step * i as f64;
            let local = Coord {
                x: theta.cos() * radius,
                y: theta.sin() * radius,
            };
            project_to_plane(local, plane) + origin.coords
        })
        .collect()
}
