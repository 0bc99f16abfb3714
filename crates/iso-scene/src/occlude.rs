use geo::{BooleanOps, BoundingRect, Geometry, Intersects, MultiPolygon};
use rstar::primitives::{GeomWithData, Rectangle};
use rstar::{RTree, AABB};
use tracing::debug;

use iso_geom::RenderableGeometry;

type IndexedBounds = GeomWithData<Rectangle<(f64, f64)>, usize>;

/// Painter's-algorithm occlusion over a back-to-front geometry list:
/// every polygonal geometry bites a hole in each polygonal geometry
/// behind it (at a strictly lower index) that it overlaps.
///
/// The spatial index and the exact intersection tests both run against
/// the original geometries, while subtraction accumulates on the output
/// list. By the time geometry `i` is processed, everything behind it has
/// already been holed by every nearer shape processed before `i`, so a
/// valid back-to-front input order yields the correct cumulative
/// silhouette. Indices are never removed; a fully-subtracted geometry
/// stays in place as an empty multi-polygon.
pub fn occlude(renderables: Vec<RenderableGeometry>) -> Vec<RenderableGeometry> {
    let originals: Vec<Geometry<f64>> = renderables
        .iter()
        .map(|renderable| renderable.geometry.clone())
        .collect();

    let bounds: Vec<IndexedBounds> = originals
        .iter()
        .enumerate()
        .filter_map(|(index, geometry)| {
            geometry.bounding_rect().map(|rect| {
                GeomWithData::new(
                    Rectangle::from_corners(
                        (rect.min().x, rect.min().y),
                        (rect.max().x, rect.max().y),
                    ),
                    index,
                )
            })
        })
        .collect();
    let tree = RTree::bulk_load(bounds);

    let mut occluded = renderables;
    let mut subtractions = 0usize;
    for (i, geometry) in originals.iter().enumerate() {
        let Some(front) = polygonal(geometry) else {
            continue;
        };
        if front.0.is_empty() {
            continue;
        }
        let Some(rect) = geometry.bounding_rect() else {
            continue;
        };
        let envelope =
            AABB::from_corners((rect.min().x, rect.min().y), (rect.max().x, rect.max().y));

        // Candidate order out of the tree is arbitrary; sort so the
        // subtraction sequence is deterministic.
        let mut behind: Vec<usize> = tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|item| item.data)
            .filter(|&j| j < i && originals[j].intersects(geometry))
            .collect();
        behind.sort_unstable();

        for j in behind {
            if let Some(target) = polygonal(&occluded[j].geometry) {
                occluded[j].geometry = Geometry::MultiPolygon(target.difference(&front));
                subtractions += 1;
            }
        }
    }
    debug!(
        geometries = occluded.len(),
        subtractions, "occlusion pass complete"
    );
    occluded
}

/// View a geometry as a multi-polygon. Lines and multi-lines are not
/// polygonal: they never occlude and are never occluded.
fn polygonal(geometry: &Geometry<f64>) -> Option<MultiPolygon<f64>> {
    match geometry {
        Geometry::Polygon(polygon) => Some(MultiPolygon::new(vec![polygon.clone()])),
        Geometry::MultiPolygon(multi) => Some(multi.clone()),
        _ => None,
    }
}
