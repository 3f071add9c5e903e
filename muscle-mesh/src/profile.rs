//! Tendon/belly radius and color profile along the tube.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Relative radius at the tendon tips.
pub const TENDON_RADIUS: f64 = 0.25;

/// Radius gained across each tendon zone, from tip to belly edge.
pub const TENDON_TAPER: f64 = 0.15;

/// Relative radius at the belly edges, before any bulge contribution.
pub const BELLY_RADIUS: f64 = 0.4;

/// Peak sinusoidal belly amplitude, scaled by the bulge factor.
pub const BELLY_AMPLITUDE: f64 = 0.8;

/// Width of the tendon-to-muscle color ramp, in absolute tube fraction.
pub const COLOR_BAND: f64 = 0.05;

/// The longitudinal shape of a muscle: two tendon zones tapering in from
/// the attachment points, and a sinusoidal belly in between.
///
/// Both zone fractions are measured in arc-length fraction `u` of the whole
/// tube. A zone fraction of zero removes that tendon zone; zones that
/// together cover the whole tube leave no belly, and the profile renders as
/// pure tendon.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Profile {
    /// Fraction of the tube occupied by the origin-side tendon.
    pub tendon_start: f64,
    /// Fraction of the tube occupied by the insertion-side tendon.
    pub tendon_end: f64,
}

impl Profile {
    /// Create a profile with the given tendon zone fractions.
    #[must_use]
    pub const fn new(tendon_start: f64, tendon_end: f64) -> Self {
        Self {
            tendon_start,
            tendon_end,
        }
    }

    /// Relative radius at tube fraction `u ∈ [0, 1]` for a given bulge.
    ///
    /// ```text
    /// u < tendon_start:     0.25 + 0.15 · (u / tendon_start)
    /// u > 1 - tendon_end:   0.25 + 0.15 · ((1-u) / tendon_end)
    /// belly:                0.4  + sin(belly_u · π) · 0.8 · bulge
    /// ```
    ///
    /// The taper meets the belly base exactly at each zone edge, so the
    /// radius is continuous along the whole tube.
    #[must_use]
    pub fn relative_radius(&self, u: f64, bulge: f64) -> f64 {
        let u = u.clamp(0.0, 1.0);

        if u < self.tendon_start {
            return TENDON_RADIUS + TENDON_TAPER * (u / self.tendon_start);
        }
        if u > 1.0 - self.tendon_end {
            return TENDON_RADIUS + TENDON_TAPER * ((1.0 - u) / self.tendon_end);
        }

        let span = 1.0 - self.tendon_start - self.tendon_end;
        if span <= 0.0 {
            return TENDON_RADIUS;
        }
        let belly_u = (u - self.tendon_start) / span;
        BELLY_RADIUS + (belly_u * std::f64::consts::PI).sin() * BELLY_AMPLITUDE * bulge
    }

    /// Mix toward the muscle base color at tube fraction `u ∈ [0, 1]`.
    ///
    /// Zero in the tendon zones, one in the belly interior, ramping
    /// linearly over a [`COLOR_BAND`]-wide band inside each belly edge so
    /// there is no color seam at the tendon boundary.
    #[must_use]
    pub fn color_mix(&self, u: f64) -> f64 {
        let u = u.clamp(0.0, 1.0);

        let from_start = (u - self.tendon_start) / COLOR_BAND;
        let from_end = (1.0 - self.tendon_end - u) / COLOR_BAND;
        from_start.min(from_end).clamp(0.0, 1.0)
    }
}
