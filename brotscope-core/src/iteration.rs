use crate::bounds::ViewBounds;

/// Lowest iteration cap ever used, reached at (and above) the reference width.
pub const MIN_ITERATIONS: u32 = 50;
/// Upper bound on per-pixel work, whatever the zoom depth.
pub const MAX_ITERATIONS: u32 = 2000;
/// Extra iterations for every halving of the view width.
pub const ITERATIONS_PER_OCTAVE: f64 = 25.0;

/// Derive the iteration cap from the real span of the view.
///
/// `clamp(50 + 25·log2(3.5 / scale), 50, 2000)`, truncated toward zero.
/// A collapsed span (`scale == 0`) saturates at the maximum; NaN falls to the
/// minimum.
pub fn iteration_cap(scale: f64) -> u32 {
    let raw = MIN_ITERATIONS as f64
        + ITERATIONS_PER_OCTAVE * (ViewBounds::REFERENCE_WIDTH / scale).log2();
    // `as` saturates on overflow and maps NaN to 0.
    (raw as i64).clamp(MIN_ITERATIONS as i64, MAX_ITERATIONS as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_width_gives_minimum() {
        assert_eq!(iteration_cap(3.5), 50);
    }

    #[test]
    fn wider_views_stay_at_minimum() {
        assert_eq!(iteration_cap(10.0), 50);
        assert_eq!(iteration_cap(1000.0), 50);
    }

    #[test]
    fn hundredfold_zoom() {
        // 50 + 25·log2(100) = 216.09…
        assert_eq!(iteration_cap(0.035), 216);
    }

    #[test]
    fn one_octave_adds_25() {
        assert_eq!(iteration_cap(1.75), 75);
    }

    #[test]
    fn extreme_zoom_is_capped() {
        assert_eq!(iteration_cap(1e-40), MAX_ITERATIONS);
        assert_eq!(iteration_cap(0.0), MAX_ITERATIONS);
    }

    #[test]
    fn nan_scale_falls_to_minimum() {
        assert_eq!(iteration_cap(f64::NAN), MIN_ITERATIONS);
    }

    #[test]
    fn cap_is_monotonic_in_zoom() {
        let mut scale = 3.5;
        let mut last = iteration_cap(scale);
        for _ in 0..200 {
            scale *= 0.9;
            let cap = iteration_cap(scale);
            assert!(cap >= last);
            assert!((MIN_ITERATIONS..=MAX_ITERATIONS).contains(&cap));
            last = cap;
        }
    }
}
