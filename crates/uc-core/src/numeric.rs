/// Floating point type carried through every conversion.
pub type Real = f64;

/// Absolute/relative tolerance pair for comparing converted magnitudes.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Relative error of `actual` against `expected`; falls back to the
/// absolute error when `expected` is zero.
pub fn relative_error(actual: Real, expected: Real) -> Real {
    let diff = (actual - expected).abs();
    if expected == 0.0 {
        diff
    } else {
        diff / expected.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances::default();
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
        assert!(nearly_equal(3600.0, 3600.000_000_1, tol));
    }

    #[test]
    fn relative_error_handles_zero() {
        assert_eq!(relative_error(0.5, 0.0), 0.5);
        assert!((relative_error(101.0, 100.0) - 0.01).abs() < 1e-15);
    }
}
