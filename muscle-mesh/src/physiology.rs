//! Length-to-bulge physiology curve.

/// Floor applied to the current length before computing the length ratio.
///
/// Keeps the ratio finite when a joint configuration collapses the muscle
/// path to near zero length.
pub const LENGTH_FLOOR: f64 = 0.1;

/// Lower clamp on the bulge factor.
///
/// A stretched muscle thins out but never collapses or inverts the mesh.
pub const MIN_BULGE: f64 = 0.25;

/// Upper clamp on the bulge factor, the maximum physiological swelling.
pub const MAX_BULGE: f64 = 6.0;

/// Exponent gain converting contraction ratio to volume response.
pub const INTENSITY_GAIN: f64 = 2.5;

/// Map a muscle's current length to its cross-section bulge factor.
///
/// ```text
/// ratio  = resting / max(current, LENGTH_FLOOR)
/// factor = clamp(ratio^(INTENSITY_GAIN * intensity), MIN_BULGE, MAX_BULGE)
/// ```
///
/// A contracted muscle (`ratio > 1`) swells toward [`MAX_BULGE`]; a
/// stretched one (`ratio < 1`) thins toward [`MIN_BULGE`]. Any
/// non-positive `intensity` pins the factor to exactly `1.0`, which renders
/// the muscle as visually rigid regardless of stretch.
///
/// Total over all finite inputs: never NaN or infinite, and monotonically
/// increasing in the ratio for a fixed positive intensity.
#[must_use]
pub fn bulge_factor(current_length: f64, resting_length: f64, intensity: f64) -> f64 {
    if intensity <= 0.0 {
        return 1.0;
    }

    let ratio = resting_length / current_length.max(LENGTH_FLOOR);
    let factor = ratio.powf(INTENSITY_GAIN * intensity);
    if factor.is_nan() {
        return 1.0;
    }
    factor.clamp(MIN_BULGE, MAX_BULGE)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn resting_length_gives_unit_factor() {
        for intensity in [0.5, 1.0, 2.2, 10.0] {
            assert_relative_eq!(bulge_factor(3.3, 3.3, intensity), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn zero_intensity_is_rigid() {
        assert_relative_eq!(bulge_factor(1.0, 3.3, 0.0), 1.0);
        assert_relative_eq!(bulge_factor(9.9, 3.3, 0.0), 1.0);
        assert_relative_eq!(bulge_factor(0.0, 3.3, 0.0), 1.0);
        assert_relative_eq!(bulge_factor(3.3, 3.3, -1.0), 1.0);
    }

    #[test]
    fn contraction_swells_stretch_thins() {
        let contracted = bulge_factor(2.5, 3.3, 2.2);
        let stretched = bulge_factor(4.0, 3.3, 2.2);
        assert!(contracted > 1.0);
        assert!(stretched < 1.0);
    }

    #[test]
    fn monotonically_decreasing_in_current_length() {
        let mut previous = f64::INFINITY;
        for i in 1..100 {
            let current = f64::from(i) * 0.1;
            let factor = bulge_factor(current, 3.3, 2.2);
            assert!(factor <= previous);
            previous = factor;
        }
    }

    #[test]
    fn output_stays_in_clamp_range() {
        for current in [0.0, 1e-9, 0.1, 1.0, 3.3, 100.0, 1e12] {
            for intensity in [0.1, 1.0, 2.2, 50.0] {
                let factor = bulge_factor(current, 3.3, intensity);
                assert!((MIN_BULGE..=MAX_BULGE).contains(&factor));
            }
        }
    }

    #[test]
    fn tiny_lengths_hit_the_floor() {
        // Below the floor, the ratio stops growing.
        let at_floor = bulge_factor(LENGTH_FLOOR, 3.3, 0.1);
        assert_relative_eq!(bulge_factor(1e-15, 3.3, 0.1), at_floor, epsilon = 1e-12);
        assert_relative_eq!(bulge_factor(0.0, 3.3, 0.1), at_floor, epsilon = 1e-12);
    }

    #[test]
    fn never_nan_or_infinite() {
        for current in [0.0, 1e-300, 1.0, 1e300] {
            for resting in [0.0, 1.0, 1e300] {
                for intensity in [0.0, 1.0, 100.0] {
                    assert!(bulge_factor(current, resting, intensity).is_finite());
                }
            }
        }
    }
}
