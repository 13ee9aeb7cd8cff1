//! Scalar helpers shared by the other modules

pub use std::f64::consts::TAU;

/// Clamp `v` into the range spanned by `a` and `b`.
/// The bounds may be given in either order; unlike `f64::clamp` this never panics.
#[inline]
pub fn clamp(v: f64, a: f64, b: f64) -> f64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Linear interpolation, not clamped
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Linearly remap `v` from `[in_lo, in_hi]` to `[out_lo, out_hi]`.
/// A zero-width input range maps everything to `out_lo`.
pub fn map_range(v: f64, in_lo: f64, in_hi: f64, out_lo: f64, out_hi: f64) -> f64 {
    let span = in_hi - in_lo;
    if span.abs() < f64::EPSILON {
        return out_lo;
    }
    lerp(out_lo, out_hi, (v - in_lo) / span)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_either_order() {
        assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.25, 1.0, 0.0), 0.25);
        assert_eq!(clamp(2.0, 1.0, 0.0), 1.0);
    }

    #[test]
    fn test_lerp_extrapolates() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(0.0, 10.0, 1.5), 15.0);
    }

    #[test]
    fn test_map_range() {
        assert_eq!(map_range(5.0, 0.0, 10.0, 100.0, 200.0), 150.0);
        assert_eq!(map_range(3.0, 2.0, 2.0, 7.0, 9.0), 7.0);
    }
}
