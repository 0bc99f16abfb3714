use serde::{Deserialize, Serialize};

use iso_geom::{Plane, Point3};

use crate::error::ShapeError;
use crate::polygon::Polygon;
use crate::renderable::{DepthOrder, Group, Renderable};
use crate::texture::Texture;

/// Textures and stroke layer for one face of a volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceStyle {
    pub textures: Vec<Texture>,
    pub layer: i32,
}

impl Default for FaceStyle {
    fn default() -> Self {
        Self {
            textures: Vec::new(),
            layer: 1,
        }
    }
}

impl FaceStyle {
    pub fn on_layer(layer: i32) -> Self {
        Self {
            textures: Vec::new(),
            layer,
        }
    }

    pub fn textured(textures: Vec<Texture>) -> Self {
        Self { textures, layer: 1 }
    }
}

/// Per-face styling for a cuboid's three visible faces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CuboidStyle {
    pub top: FaceStyle,
    pub left: FaceStyle,
    pub right: FaceStyle,
}

/// The three visible faces of an axis-aligned box centered on `origin`,
/// meeting at the corner facing the viewer: left (YZ), right (XZ), top
/// (XY). Hidden faces are never generated — at the fixed viewing angle
/// they are always self-occluded.
pub fn cuboid(origin: Point3, width: f64, depth: f64, height: f64, style: CuboidStyle) -> Group {
    let (x, y, z) = (origin.x, origin.y, origin.z);
    let hw = width / 2.0;
    let hd = depth / 2.0;
    let hh = height / 2.0;

    let left = styled(
        Polygon::rectangle(
            Point3::new(x - hw, y, z),
            depth,
            height,
            Plane::Yz,
            style.left.layer,
        ),
        style.left.textures,
    );
    let right = styled(
        Polygon::rectangle(
            Point3::new(x, y - hd, z),
            width,
            height,
            Plane::Xz,
            style.right.layer,
        ),
        style.right.textures,
    );
    let top = styled(
        Polygon::rectangle(
            Point3::new(x, y, z + hh),
            width,
            depth,
            Plane::Xy,
            style.top.layer,
        ),
        style.top.textures,
    );

    Group::new(vec![left.into(), right.into(), top.into()])
}

/// Per-face styling for a prism.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrismStyle {
    pub top: FaceStyle,
    pub bottom: FaceStyle,
    /// Style shared by every side face.
    pub side: FaceStyle,
    /// Per-side texture overrides. Empty applies `side.textures` to every
    /// face; a non-empty list must have exactly one entry per side.
    pub side_textures: Vec<Vec<Texture>>,
}

/// An upright regular prism: bottom n-gon, n side quads, top n-gon, with
/// `origin` at the center of the bottom face.
///
/// Side faces are re-ordered back-to-front at compile time; the bottom
/// face always draws first and the top cap always last.
pub fn prism(
    origin: Point3,
    sides: usize,
    radius: f64,
    height: f64,
    style: PrismStyle,
) -> Result<Group, ShapeError> {
    if !style.side_textures.is_empty() && style.side_textures.len() != sides {
        return Err(ShapeError::SideCountMismatch {
            expected: sides,
            actual: style.side_textures.len(),
        });
    }

    let bottom = styled(
        Polygon::regular(origin, sides, radius, Plane::Xy, style.bottom.layer)?,
        style.bottom.textures,
    );
    let top_origin = Point3::new(origin.x, origin.y, origin.z + height);
    let top = styled(
        Polygon::regular(top_origin, sides, radius, Plane::Xy, style.top.layer)?,
        style.top.textures,
    );

    let ring = bottom.vertices().to_vec();
    let mut children: Vec<Renderable> = Vec::with_capacity(sides + 2);
    children.push(bottom.into());
    for k in 0..sides {
        let b0 = ring[k];
        let b1 = ring[(k + 1) % sides];
        let t1 = Point3::new(b1.x, b1.y, b1.z + height);
        let t0 = Point3::new(b0.x, b0.y, b0.z + height);

        let textures = if style.side_textures.is_empty() {
            style.side.textures.clone()
        } else {
            style.side_textures[k].clone()
        };
        let quad = styled(
            Polygon::from_ring(vec![b0, b1, t1, t0], style.side.layer),
            textures,
        );
        children.push(quad.into());
    }
    children.push(top.into());

    Ok(Group::with_order(
        children,
        DepthOrder::Sorted {
            fixed_front: 1,
            fixed_back: 1,
        },
    ))
}

/// Per-face styling for a pyramid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PyramidStyle {
    pub base: FaceStyle,
    /// Style shared by the four triangular faces.
    pub side: FaceStyle,
}

/// A rectangular-based pyramid with four triangular faces meeting at the
/// apex above the base center. `origin` is the center of the base.
///
/// Side faces are re-ordered back-to-front at compile time; the base
/// always draws first.
pub fn pyramid(origin: Point3, width: f64, depth: f64, height: f64, style: PyramidStyle) -> Group {
    let base = styled(
        Polygon::rectangle(origin, width, depth, Plane::Xy, style.base.layer),
        style.base.textures,
    );
    let apex = Point3::new(origin.x, origin.y, origin.z + height);

    let ring = base.vertices().to_vec();
    let mut children: Vec<Renderable> = Vec::with_capacity(5);
    children.push(base.into());
    for k in 0..4 {
        let a = ring[k];
        let b = ring[(k + 1) % 4];
        let triangle = styled(
            Polygon::from_ring(vec![a, b, apex], style.side.layer),
            style.side.textures.clone(),
        );
        children.push(triangle.into());
    }

    Group::with_order(
        children,
        DepthOrder::Sorted {
            fixed_front: 1,
            fixed_back: 0,
        },
    )
}

fn styled(mut polygon: Polygon, textures: Vec<Texture>) -> Polygon {
    for texture in textures {
        polygon = polygon.with_texture(texture);
    }
    polygon
}
