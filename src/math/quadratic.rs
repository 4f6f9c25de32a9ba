use crate::error::{GeometryError, Result};

use super::TOLERANCE;

/// Relative size below which a computed value is floating-point noise.
pub const ROUNDOFF: f64 = 8.0 * f64::EPSILON;

/// Returns `value`, or zero when it is no larger than the rounding error
/// accumulated while summing terms of total absolute size `magnitude`.
#[must_use]
pub fn flush_cancellation(value: f64, magnitude: f64) -> f64 {
    if value.abs() <= ROUNDOFF * magnitude {
        0.0
    } else {
        value
    }
}

/// Solves `a*t^2 + b*t + c = 0` for its real roots, returned ascending.
///
/// The roots do not change when all three coefficients are scaled, so the
/// triple is first normalised by its largest magnitude and every zero test
/// is made against that scale.
///
/// Uses the cancellation-free form of the quadratic formula: the root with
/// the larger magnitude is computed first as `q / a` with
/// `q = -(b + sign(b) * sqrt(disc)) / 2`, and the other follows as `c / q`.
///
/// A discriminant within a relative tolerance of zero is a tangency and
/// yields exactly one root. When `a` vanishes the equation is solved as
/// linear and gives at most one root.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`] if all three coefficients are zero,
/// in which case every `t` is a solution.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Result<Vec<f64>> {
    let scale = a.abs().max(b.abs()).max(c.abs());
    if scale == 0.0 {
        return Err(
            GeometryError::Degenerate("equation is satisfied for every parameter".into()).into(),
        );
    }
    let (a, b, c) = (a / scale, b / scale, c / scale);

    if a.abs() <= ROUNDOFF {
        if b.abs() <= ROUNDOFF {
            return Ok(vec![]);
        }
        return Ok(vec![-c / b]);
    }

    let disc = b * b - 4.0 * a * c;
    if disc.abs() <= TOLERANCE * (b * b).max((4.0 * a * c).abs()) {
        return Ok(vec![-b / (2.0 * a)]);
    }
    if disc < 0.0 {
        return Ok(vec![]);
    }

    let q = -0.5 * (b + b.signum() * disc.sqrt());
    let t1 = q / a;
    let t2 = c / q;

    Ok(if t1 <= t2 { vec![t1, t2] } else { vec![t2, t1] })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn two_roots_ascending() {
        // (t - 1)(t - 3)
        let roots = solve_quadratic(1.0, -4.0, 3.0).unwrap();
        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(roots[1], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn negative_leading_coefficient_still_ascending() {
        // -(t - 1)(t - 3)
        let roots = solve_quadratic(-1.0, 4.0, -3.0).unwrap();
        assert_relative_eq!(roots[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(roots[1], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_linear_term() {
        let roots = solve_quadratic(1.0, 0.0, -4.0).unwrap();
        assert_relative_eq!(roots[0], -2.0, epsilon = 1e-12);
        assert_relative_eq!(roots[1], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn tangency_gives_single_root() {
        // (t - 2)^2
        let roots = solve_quadratic(1.0, -4.0, 4.0).unwrap();
        assert_eq!(roots, vec![2.0]);
    }

    #[test]
    fn negative_discriminant_gives_none() {
        let roots = solve_quadratic(1.0, 0.0, 1.0).unwrap();
        assert!(roots.is_empty());
    }

    #[test]
    fn linear_fallback() {
        let roots = solve_quadratic(0.0, 2.0, -3.0).unwrap();
        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0], 1.5);
    }

    #[test]
    fn constant_nonzero_has_no_roots() {
        assert!(solve_quadratic(0.0, 0.0, 1.0).unwrap().is_empty());
    }

    #[test]
    fn identically_zero_is_degenerate() {
        assert!(solve_quadratic(0.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn tiny_leading_coefficient_stays_quadratic() {
        // Unit-scale roots of a conic with very small quadratic terms.
        let roots = solve_quadratic(2.5e-11, 0.0, -1.0).unwrap();
        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0], -2.0e5, max_relative = 1e-12);
        assert_relative_eq!(roots[1], 2.0e5, max_relative = 1e-12);
    }

    #[test]
    fn uniform_scaling_keeps_roots() {
        for k in [1.0e-14, 1.0e-6, 1.0, 1.0e9] {
            let roots = solve_quadratic(k, -4.0 * k, 3.0 * k).unwrap();
            assert_eq!(roots.len(), 2, "scale {k}");
            assert_relative_eq!(roots[0], 1.0, epsilon = 1e-12);
            assert_relative_eq!(roots[1], 3.0, epsilon = 1e-12);

            let tangent = solve_quadratic(k, -4.0 * k, 4.0 * k).unwrap();
            assert_eq!(tangent.len(), 1, "scale {k}");
        }
    }

    #[test]
    fn cancellation_noise_is_flushed() {
        assert!(flush_cancellation(1.0e-17, 1.0).abs() < f64::MIN_POSITIVE);
        assert!((flush_cancellation(2.5e-11, 2.5e-11) - 2.5e-11).abs() < 1e-30);
    }

    #[test]
    fn small_root_survives_cancellation() {
        // Roots near 1e8 and 1e-8; the naive formula loses the small one.
        let roots = solve_quadratic(1.0, -1.0e8, 1.0).unwrap();
        assert_relative_eq!(roots[0], 1.0e-8, max_relative = 1e-9);
        assert_relative_eq!(roots[1], 1.0e8, max_relative = 1e-9);
    }
}
