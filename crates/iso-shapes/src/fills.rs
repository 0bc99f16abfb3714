use std::f64::consts::PI;

use geo::{BooleanOps, BoundingRect, LineString, MultiLineString, MultiPolygon, Rect};
use serde::{Deserialize, Serialize};

/// Default hatch angle: 45 degrees.
pub const DEFAULT_HATCH_ANGLE: f64 = std::f64::consts::FRAC_PI_4;

/// Mirrored cross-hatch families closer than this to the primary family
/// collapse into it and are not emitted twice.
const MIRRORED_FAMILY_EPS: f64 = 1e-9;

/// Single or crossed hatch family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HatchStyle {
    Hatch,
    CrossHatch,
}

/// Parallel hatch lines at `angle`, clipped to `region`.
///
/// The unclipped family spans the region's full bounding diagonal so that
/// coverage reaches the boundary after clipping. Angles are normalized
/// into [0, PI); half-turn multiples come out horizontal. Cross hatching
/// adds the mirrored family at PI - angle. A non-positive pitch yields an
/// empty fill.
pub fn hatch_fill(
    region: &MultiPolygon<f64>,
    pitch: f64,
    style: HatchStyle,
    angle: f64,
) -> MultiLineString<f64> {
    let Some(bounds) = fill_bounds(region, pitch) else {
        return MultiLineString::new(Vec::new());
    };

    let angle = normalize_hatch_angle(angle);
    let mut lines = hatch_family(bounds, pitch, angle);

    if style == HatchStyle::CrossHatch {
        let mirrored = normalize_hatch_angle(PI - angle);
        if (mirrored - angle).abs() > MIRRORED_FAMILY_EPS {
            lines.extend(hatch_family(bounds, pitch, mirrored));
        }
    }

    region.clip(&MultiLineString::new(lines), false)
}

/// Vertical lines pitch-stepped across the horizontal extent, clipped to
/// `region`.
pub fn line_fill(region: &MultiPolygon<f64>, pitch: f64) -> MultiLineString<f64> {
    let Some(bounds) = fill_bounds(region, pitch) else {
        return MultiLineString::new(Vec::new());
    };
    let (min, max) = (bounds.min(), bounds.max());

    let mut lines = Vec::new();
    let mut x = min.x + pitch;
    while x < max.x {
        lines.push(LineString::from(vec![(x, min.y), (x, max.y)]));
        x += pitch;
    }
    region.clip(&MultiLineString::new(lines), false)
}

/// Near-solid coverage: horizontal lines at approximately pen-width
/// spacing, clipped to `region`.
pub fn scan_fill(region: &MultiPolygon<f64>, pen_width: f64) -> MultiLineString<f64> {
    let Some(bounds) = fill_bounds(region, pen_width) else {
        return MultiLineString::new(Vec::new());
    };
    let (min, max) = (bounds.min(), bounds.max());

    let mut lines = Vec::new();
    let mut y = min.y + pen_width / 2.0;
    while y < max.y {
        lines.push(LineString::from(vec![(min.x, y), (max.x, y)]));
        y += pen_width;
    }
    region.clip(&MultiLineString::new(lines), false)
}

/// Wrap hatch angles into [0, PI). Out-of-range values fold back in
/// rather than erroring.
fn normalize_hatch_angle(angle: f64) -> f64 {
    angle.rem_euclid(PI)
}

/// Bounding extent of the fill region, or None when the region is empty
/// or the pitch cannot make progress.
fn fill_bounds(region: &MultiPolygon<f64>, pitch: f64) -> Option<Rect<f64>> {
    if !(pitch > 0.0) {
        return None;
    }
    region.bounding_rect()
}

/// One family of parallel lines covering `bounds` at the given angle.
///
/// Lines run along the hatch direction and the family steps perpendicular
/// to it, so the line count is bounded by the bounding diagonal over the
/// pitch at every angle, including near-horizontal ones.
fn hatch_family(bounds: Rect<f64>, pitch: f64, angle: f64) -> Vec<LineString<f64>> {
    let center = bounds.center();
    let half_diagonal = bounds.width().hypot(bounds.height()) / 2.0;
    let (sin, cos) = angle.sin_cos();

    let mut lines = Vec::new();
    let mut offset = -half_diagonal;
    while offset <= half_diagonal {
        // Anchor on the perpendicular through the center, then extend
        // along the hatch direction far enough to cross the whole extent.
        let (ax, ay) = (center.x - offset * sin, center.y + offset * cos);
        lines.push(LineString::from(vec![
            (ax - half_diagonal * cos, ay - half_diagonal * sin),
            (ax + half_diagonal * cos, ay + half_diagonal * sin),
        ]));
        offset += pitch;
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::coord;

    fn square(side: f64) -> MultiPolygon<f64> {
        MultiPolygon::new(vec![Rect::new(
            coord! { x: 0.0, y: 0.0 },
            coord! { x: side, y: side },
        )
        .to_polygon()])
    }

    #[test]
    fn horizontal_hatch_lines_stay_horizontal() {
        let fill = hatch_fill(&square(10.0), 2.0, HatchStyle::Hatch, 0.0);
        assert!(!fill.0.is_empty());
        for line in &fill {
            for segment in line.lines() {
                assert_eq!(segment.start.y, segment.end.y);
            }
        }
    }

    #[test]
    fn half_turn_angle_matches_zero_angle() {
        let at_zero = hatch_fill(&square(10.0), 2.0, HatchStyle::Hatch, 0.0);
        let at_pi = hatch_fill(&square(10.0), 2.0, HatchStyle::Hatch, PI);
        assert_eq!(at_zero.0.len(), at_pi.0.len());
    }

    #[test]
    fn near_horizontal_angle_keeps_the_family_small() {
        // The family steps perpendicular to the lines, so a tiny slope
        // must not inflate the line count beyond diagonal / pitch.
        let fill = hatch_fill(&square(10.0), 2.0, HatchStyle::Hatch, 1e-4);
        assert!(!fill.0.is_empty());
        assert!(fill.0.len() <= 16);

        let steep = hatch_fill(&square(10.0), 2.0, HatchStyle::Hatch, 1e-7);
        assert!(steep.0.len() <= 16);
    }

    #[test]
    fn non_positive_pitch_is_empty() {
        assert!(hatch_fill(&square(10.0), 0.0, HatchStyle::Hatch, 1.0)
            .0
            .is_empty());
        assert!(line_fill(&square(10.0), -1.0).0.is_empty());
    }

    #[test]
    fn cross_hatch_emits_more_lines_than_single() {
        let single = hatch_fill(&square(10.0), 2.0, HatchStyle::Hatch, DEFAULT_HATCH_ANGLE);
        let crossed = hatch_fill(
            &square(10.0),
            2.0,
            HatchStyle::CrossHatch,
            DEFAULT_HATCH_ANGLE,
        );
        assert!(crossed.0.len() > single.0.len());
    }

    #[test]
    fn empty_region_yields_empty_fill() {
        let empty = MultiPolygon::<f64>::new(Vec::new());
        assert!(hatch_fill(&empty, 1.0, HatchStyle::Hatch, 1.0).0.is_empty());
        assert!(scan_fill(&empty, 0.5).0.is_empty());
    }
}
