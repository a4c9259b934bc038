/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
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

/// Count sign changes along a series, ignoring entries whose magnitude is at
/// or below `floor` and any non-finite entries.
///
/// Used to count oscillation half-cycles in a sampled signal: feed it the
/// first differences of the signal and the result is the number of extrema.
pub fn sign_changes(values: &[Real], floor: Real) -> usize {
    let mut changes = 0;
    let mut last_sign: Option<bool> = None;
    for &v in values {
        if !v.is_finite() || v.abs() <= floor {
            continue;
        }
        let positive = v > 0.0;
        if let Some(prev) = last_sign {
            if prev != positive {
                changes += 1;
            }
        }
        last_sign = Some(positive);
    }
    changes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn sign_changes_counts_flips() {
        assert_eq!(sign_changes(&[1.0, 2.0, -1.0, -2.0, 3.0], 0.0), 2);
        assert_eq!(sign_changes(&[1.0, 1.0, 1.0], 0.0), 0);
        assert_eq!(sign_changes(&[], 0.0), 0);
    }

    #[test]
    fn sign_changes_respects_floor() {
        // The 1e-12 wiggle sits below the floor and must not register.
        assert_eq!(sign_changes(&[1.0, -1e-12, 1.0], 1e-9), 0);
        assert_eq!(sign_changes(&[1.0, -1e-12, -1.0], 1e-9), 1);
    }

    #[test]
    fn sign_changes_skips_non_finite() {
        assert_eq!(sign_changes(&[1.0, f64::NAN, -1.0], 0.0), 1);
        assert_eq!(sign_changes(&[1.0, f64::INFINITY, -1.0], 0.0), 2);
    }
}
