//! Interpolation primitives shared by all entity interpolators.

pub fn clamp01(ratio: f64) -> f64 {
    ratio.clamp(0.0, 1.0)
}

/// Linear interpolation with `ratio` clamped into `[0, 1]`.
pub fn lerp(a: f64, b: f64, ratio: f64) -> f64 {
    a + (b - a) * clamp01(ratio)
}

/// Interpolates two angles in degrees along the shorter arc.
///
/// The result is not normalized, a turn from 350 to 10 passes through 360.
pub fn angle_lerp(a: f64, b: f64, ratio: f64) -> f64 {
    let delta = (b - a + 540.0).rem_euclid(360.0) - 180.0;
    a + delta * clamp01(ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_clamps_ratio() {
        assert_eq!(5.0, lerp(0.0, 10.0, 0.5));
        assert_eq!(0.0, lerp(0.0, 10.0, -3.0));
        assert_eq!(10.0, lerp(0.0, 10.0, 7.0));
    }

    #[test]
    fn angle_takes_short_way_over_zero() {
        assert_eq!(360.0, angle_lerp(350.0, 10.0, 0.5));
        assert_eq!(0.0, angle_lerp(10.0, 350.0, 0.5));
    }

    #[test]
    fn angle_plain_turn() {
        assert_eq!(45.0, angle_lerp(0.0, 90.0, 0.5));
        assert_eq!(90.0, angle_lerp(0.0, 90.0, 2.0));
        assert_eq!(0.0, angle_lerp(0.0, 90.0, -1.0));
    }

    #[test]
    fn angle_half_turn_goes_negative() {
        // Exactly opposite angles resolve to -180.
        assert_eq!(-90.0, angle_lerp(0.0, 180.0, 0.5));
    }
}
