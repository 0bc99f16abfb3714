//! Assertion helpers with diagnostic messages.
//!
//! Each assertion returns `Result<(), HarnessError>` so scenario tests
//! can chain them with `?` and get a descriptive failure message that
//! names the scene context being checked.

use geo::{Area, BoundingRect, Geometry, Rect};

use iso_geom::RenderableGeometry;

use crate::helpers::HarnessError;

fn fail(detail: String) -> HarnessError {
    HarnessError::AssertionFailed { detail }
}

/// Unsigned 2D area of any compiled geometry. Lines have zero area.
pub fn geometry_area(geometry: &Geometry<f64>) -> f64 {
    geometry.unsigned_area()
}

/// Assert the geometry's unsigned area is within `tol` of `expected`.
pub fn assert_area_close(
    geometry: &Geometry<f64>,
    expected: f64,
    tol: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    let actual = geometry_area(geometry);
    if (actual - expected).abs() > tol {
        return Err(fail(format!(
            "[{ctx}] expected area {expected} (tol {tol}), got {actual}"
        )));
    }
    Ok(())
}

/// Assert the geometry has been fully occluded or clipped away.
pub fn assert_empty(geometry: &Geometry<f64>, ctx: &str) -> Result<(), HarnessError> {
    let area = geometry_area(geometry);
    if area > 1e-9 {
        return Err(fail(format!(
            "[{ctx}] expected empty geometry, got area {area}"
        )));
    }
    Ok(())
}

/// Assert the geometry's bounding rectangle lies inside `bounds`,
/// expanded by `tol` on every side. A geometry with no bounding
/// rectangle (empty) passes trivially.
pub fn assert_within_bounds(
    geometry: &Geometry<f64>,
    bounds: Rect<f64>,
    tol: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    let Some(rect) = geometry.bounding_rect() else {
        return Ok(());
    };
    let inside = rect.min().x >= bounds.min().x - tol
        && rect.min().y >= bounds.min().y - tol
        && rect.max().x <= bounds.max().x + tol
        && rect.max().y <= bounds.max().y + tol;
    if !inside {
        return Err(fail(format!(
            "[{ctx}] expected bounds within ({:?}, {:?}), got ({:?}, {:?})",
            bounds.min(),
            bounds.max(),
            rect.min(),
            rect.max()
        )));
    }
    Ok(())
}

/// Assert the compiled list carries exactly the given layer sequence.
pub fn assert_layers(
    compiled: &[RenderableGeometry],
    expected: &[i32],
    ctx: &str,
) -> Result<(), HarnessError> {
    let actual: Vec<i32> = compiled.iter().map(|renderable| renderable.layer).collect();
    if actual != expected {
        return Err(fail(format!(
            "[{ctx}] expected layers {expected:?}, got {actual:?}"
        )));
    }
    Ok(())
}
