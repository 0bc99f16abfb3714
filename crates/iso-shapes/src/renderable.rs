use serde::{Deserialize, Serialize};

use iso_geom::{RenderContext, RenderableGeometry};

use crate::polygon::Polygon;

/// How a group orders its children at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepthOrder {
    /// Children compile exactly in the order they were assembled.
    AsAdded,
    /// The first `fixed_front` children (the base) compile first and the
    /// last `fixed_back` (the cap) last, regardless of depth; the middle
    /// children — side faces of a closed volume — are re-ordered
    /// back-to-front by projected depth.
    Sorted {
        fixed_front: usize,
        fixed_back: usize,
    },
}

/// Anything the scene can compile: a single face or an ordered group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Renderable {
    Polygon(Polygon),
    Group(Group),
}

impl Renderable {
    /// Compile into projected 2D geometries annotated with draw layers.
    pub fn compile(&self, context: &RenderContext) -> Vec<RenderableGeometry> {
        match self {
            Renderable::Polygon(polygon) => polygon.compile(context),
            Renderable::Group(group) => group.compile(context),
        }
    }

    /// Largest projected screen Y over every vertex in this subtree.
    /// Under the fixed viewing angle, larger means lower on the page,
    /// which means nearer the viewer.
    fn max_projected_y(&self, context: &RenderContext) -> f64 {
        match self {
            Renderable::Polygon(polygon) => polygon
                .vertices()
                .iter()
                .map(|vertex| context.project(*vertex).y)
                .fold(f64::NEG_INFINITY, f64::max),
            Renderable::Group(group) => group
                .children
                .iter()
                .map(|child| child.max_projected_y(context))
                .fold(f64::NEG_INFINITY, f64::max),
        }
    }
}

impl From<Polygon> for Renderable {
    fn from(polygon: Polygon) -> Self {
        Renderable::Polygon(polygon)
    }
}

impl From<Group> for Renderable {
    fn from(group: Group) -> Self {
        Renderable::Group(group)
    }
}

/// An ordered collection of renderables compiled as one unit. Volumes are
/// plain groups built by constructor functions; there is no subclassing
/// and no open extension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    children: Vec<Renderable>,
    order: DepthOrder,
}

impl Group {
    /// Group compiled in assembly order.
    pub fn new(children: Vec<Renderable>) -> Self {
        Self {
            children,
            order: DepthOrder::AsAdded,
        }
    }

    /// Group with an explicit compile-time ordering policy.
    pub fn with_order(children: Vec<Renderable>, order: DepthOrder) -> Self {
        Self { children, order }
    }

    pub fn children(&self) -> &[Renderable] {
        &self.children
    }

    pub fn order(&self) -> DepthOrder {
        self.order
    }

    /// Compile children and concatenate their results in draw order. No
    /// deduplication, no flattening; the scene handles both.
    pub fn compile(&self, context: &RenderContext) -> Vec<RenderableGeometry> {
        match self.order {
            DepthOrder::AsAdded => self
                .children
                .iter()
                .flat_map(|child| child.compile(context))
                .collect(),
            DepthOrder::Sorted {
                fixed_front,
                fixed_back,
            } => {
                let len = self.children.len();
                let front = fixed_front.min(len);
                let back = fixed_back.min(len - front);

                let mut compiled = Vec::new();
                for child in &self.children[..front] {
                    compiled.extend(child.compile(context));
                }
                for child in order_faces_for_depth(&self.children[front..len - back], context) {
                    compiled.extend(child.compile(context));
                }
                for child in &self.children[len - back..] {
                    compiled.extend(child.compile(context));
                }
                compiled
            }
        }
    }
}

/// Order side faces back-to-front for the fixed viewing angle.
///
/// Faces are keyed by the maximum screen Y of their projected bounding
/// box: larger sits lower on the page, nearer the viewer, and must draw
/// later. Ascending stable sort; ties keep their original relative order.
pub fn order_faces_for_depth<'a>(
    faces: &'a [Renderable],
    context: &RenderContext,
) -> Vec<&'a Renderable> {
    let mut keyed: Vec<(f64, &Renderable)> = faces
        .iter()
        .map(|face| (face.max_projected_y(context), face))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.into_iter().map(|(_, face)| face).collect()
}
