//! Mapping from simulation space to viewport pixels.

use crate::body::Body;

/// Largest absolute coordinate (`max(|x|, |y|)`) over all bodies.
///
/// Returns `0.0` for an empty slice.
pub fn max_abs_coordinate(bodies: &[Body]) -> f64 {
    bodies
        .iter()
        .map(Body::max_abs_coordinate)
        .fold(0.0, f64::max)
}

/// Pixel distance from the viewport center for the outermost body:
/// half of the smaller viewport dimension.
pub fn target_extent(width: f64, height: f64) -> f64 {
    0.5 * width.min(height)
}

/// Computes the pixels-per-unit scale that places the outermost body
/// `target_extent` pixels from the viewport center.
///
/// When every body sits at the origin (or the extent is not finite) the
/// mapping is undefined, and `fallback` is returned unchanged.
///
/// The scale is a snapshot of the current positions. It is not kept in
/// sync as bodies move, so long runs can drift out of view.
///
/// ### Parameters
/// - `bodies` - Bodies whose current positions define the extent.
/// - `target_extent` - Pixel radius the outermost body should land on.
/// - `fallback` - Scale to keep when no extent can be derived.
///
/// ### Returns
/// `target_extent / max_abs_coordinate`, or `fallback`.
pub fn compute_scale(bodies: &[Body], target_extent: f64, fallback: f64) -> f64 {
    let max = max_abs_coordinate(bodies);
    if max > 0.0 && max.is_finite() {
        target_extent / max
    } else {
        log::warn!("bodies have no spatial extent, keeping scale {fallback}");
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::BodyKind;
    use glam::DVec2;

    fn at(x: f64, y: f64) -> Body {
        Body::new(BodyKind::Planet, 1.0, "white", 1.0, DVec2::new(x, y), DVec2::ZERO).unwrap()
    }

    #[test]
    fn outermost_coordinate_sets_the_scale() {
        let bodies = [at(0.0, 0.0), at(3.0, 0.0), at(0.0, -5.0)];
        assert_eq!(compute_scale(&bodies, 400.0, 1.0), 80.0);
    }

    #[test]
    fn all_bodies_at_origin_keep_the_fallback() {
        let bodies = [at(0.0, 0.0), at(0.0, 0.0)];
        assert_eq!(compute_scale(&bodies, 400.0, 2.5), 2.5);
    }

    #[test]
    fn empty_system_keeps_the_fallback() {
        assert_eq!(max_abs_coordinate(&[]), 0.0);
        assert_eq!(compute_scale(&[], 400.0, 1.0), 1.0);
    }

    #[test]
    fn target_extent_is_half_the_smaller_side() {
        assert_eq!(target_extent(1000.0, 900.0), 450.0);
        assert_eq!(target_extent(640.0, 800.0), 320.0);
    }
}
