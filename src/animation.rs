/// Animation timing for the page turn
///
/// The flip and the text fade are fixed-duration transitions. Nothing here is
/// data-dependent: the durations and the easing curve are configuration
/// constants, sampled against how long the current transition has been
/// running.

use std::time::Duration;

/// How long the page rotation runs.
pub const FLIP_DURATION: Duration = Duration::from_millis(1200);

/// How long the right-page text takes to fade out once a turn is requested.
pub const FADE_DURATION: Duration = Duration::from_millis(700);

/// Easing applied to the page rotation. Steep ease-in-out: the page lingers
/// at rest, sweeps quickly through the vertical, and settles slowly.
pub const FLIP_CURVE: CubicBezier = CubicBezier::new(0.85, 0.0, 0.15, 1.0);

/// Eased rotation progress (0.0..=1.0) for a flip that has been running for
/// `elapsed`.
pub fn flip_progress(elapsed: Duration) -> f32 {
    FLIP_CURVE.eval(fraction_of(elapsed, FLIP_DURATION))
}

/// Linear fade progress (0.0..=1.0) for a fade that has been running for
/// `elapsed`.
pub fn fade_progress(elapsed: Duration) -> f32 {
    fraction_of(elapsed, FADE_DURATION)
}

fn fraction_of(elapsed: Duration, total: Duration) -> f32 {
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

/// A cubic bezier easing curve anchored at (0, 0) and (1, 1), parameterized
/// by its two control points the same way CSS `cubic-bezier()` is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Map a time fraction `x` (0.0..=1.0) to the eased output fraction.
    pub fn eval(&self, x: f32) -> f32 {
        let x = x.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }

        let t = self.solve_t(x);
        Self::axis(self.y1, self.y2, t)
    }

    /// Find the curve parameter whose horizontal component equals `x`.
    ///
    /// Newton-Raphson converges in a handful of steps for control points
    /// inside the unit square; bisection picks up the rare flat-slope case.
    fn solve_t(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..8 {
            let err = Self::axis(self.x1, self.x2, t) - x;
            if err.abs() < 1e-5 {
                return t;
            }
            let slope = Self::axis_slope(self.x1, self.x2, t);
            if slope.abs() < 1e-6 {
                break;
            }
            t = (t - err / slope).clamp(0.0, 1.0);
        }

        // The horizontal component is monotone, so bisection always lands
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        for _ in 0..32 {
            t = (lo + hi) / 2.0;
            if Self::axis(self.x1, self.x2, t) < x {
                lo = t;
            } else {
                hi = t;
            }
        }
        t
    }

    /// One axis of the curve, endpoints pinned at 0 and 1.
    fn axis(c1: f32, c2: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * c1 * u * u * t + 3.0 * c2 * u * t * t + t * t * t
    }

    /// Derivative of `axis` with respect to `t`.
    fn axis_slope(c1: f32, c2: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * c1 * u * (1.0 - 3.0 * t) + 3.0 * c2 * t * (2.0 - 3.0 * t) + 3.0 * t * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_pinned() {
        assert_eq!(FLIP_CURVE.eval(0.0), 0.0);
        assert_eq!(FLIP_CURVE.eval(1.0), 1.0);
    }

    #[test]
    fn test_curve_is_monotone() {
        let mut last = 0.0_f32;
        for i in 0..=100 {
            let y = FLIP_CURVE.eval(i as f32 / 100.0);
            assert!(y >= last - 1e-4, "curve dipped at sample {}: {} < {}", i, y, last);
            last = y;
        }
    }

    #[test]
    fn test_symmetric_midpoint() {
        // (0.85, 0) and (0.15, 1) mirror around (0.5, 0.5)
        assert!((FLIP_CURVE.eval(0.5) - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_eases_in_and_out() {
        assert!(FLIP_CURVE.eval(0.15) < 0.05);
        assert!(FLIP_CURVE.eval(0.85) > 0.95);
    }

    #[test]
    fn test_progress_clamps_to_unit_range() {
        assert_eq!(flip_progress(Duration::ZERO), 0.0);
        assert_eq!(flip_progress(FLIP_DURATION), 1.0);
        assert_eq!(flip_progress(Duration::from_secs(5)), 1.0);

        assert_eq!(fade_progress(Duration::ZERO), 0.0);
        assert!((fade_progress(Duration::from_millis(350)) - 0.5).abs() < 1e-6);
        assert_eq!(fade_progress(FADE_DURATION), 1.0);
    }
}
