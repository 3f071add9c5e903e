//! The three arm muscle descriptors.

use arm_skeleton::AnchorId;
use muscle_mesh::{Rgb, TubeParams};

/// Shared belly color of the arm muscles.
pub const MUSCLE_COLOR: Rgb = Rgb::new(225, 29, 72);

/// Identifier for one of the three rendered arm muscles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MuscleId {
    /// Biceps brachii, short (medial) head.
    BicepsShortHead,
    /// Biceps brachii, long (lateral) head.
    BicepsLongHead,
    /// Triceps brachii, rendered slender and rigid.
    Triceps,
}

impl MuscleId {
    /// All muscles, in declaration order.
    pub const ALL: [Self; 3] = [Self::BicepsShortHead, Self::BicepsLongHead, Self::Triceps];

    /// Stable lowercase name, used in log output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BicepsShortHead => "biceps_short_head",
            Self::BicepsLongHead => "biceps_long_head",
            Self::Triceps => "triceps",
        }
    }
}

/// Static description of one muscle: which anchors it spans and how its
/// tube renders. Pure configuration; all per-frame state lives in the
/// engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MuscleDescriptor {
    /// This muscle's identifier.
    pub id: MuscleId,
    /// Origin anchor (proximal attachment).
    pub origin: AnchorId,
    /// Optional guide anchor bowing the path around the humerus.
    pub guide: Option<AnchorId>,
    /// Insertion anchor (distal attachment).
    pub insertion: AnchorId,
    /// Belly color.
    pub color: Rgb,
    /// Cross-section radius at the belly peak with unit profile.
    pub max_radius: f64,
    /// Path length at which the muscle neither bulges nor thins.
    pub resting_length: f64,
    /// Fraction of the tube occupied by the origin-side tendon.
    pub tendon_start: f64,
    /// Fraction of the tube occupied by the insertion-side tendon.
    pub tendon_end: f64,
    /// Bulge response multiplier; 0 renders the muscle as rigid.
    pub bulge_intensity: f64,
}

impl MuscleDescriptor {
    /// Biceps short head: medial origin, strongest visual bulge.
    #[must_use]
    pub fn biceps_short_head() -> Self {
        Self {
            id: MuscleId::BicepsShortHead,
            origin: AnchorId::BicepsShortOrigin,
            guide: Some(AnchorId::BicepsGuide),
            insertion: AnchorId::BicepsInsertion,
            color: MUSCLE_COLOR,
            max_radius: 0.45,
            resting_length: 3.3,
            tendon_start: 0.05,
            tendon_end: 0.15,
            bulge_intensity: 2.2,
        }
    }

    /// Biceps long head: lateral origin, shares the insertion and guide
    /// with the short head.
    #[must_use]
    pub fn biceps_long_head() -> Self {
        Self {
            id: MuscleId::BicepsLongHead,
            origin: AnchorId::BicepsLongOrigin,
            guide: Some(AnchorId::BicepsGuide),
            insertion: AnchorId::BicepsInsertion,
            color: MUSCLE_COLOR,
            max_radius: 0.42,
            resting_length: 3.4,
            tendon_start: 0.08,
            tendon_end: 0.15,
            bulge_intensity: 2.2,
        }
    }

    /// Triceps: slender, posterior path, zero intensity so it never swells.
    #[must_use]
    pub fn triceps() -> Self {
        Self {
            id: MuscleId::Triceps,
            origin: AnchorId::TricepsOrigin,
            guide: Some(AnchorId::TricepsGuide),
            insertion: AnchorId::TricepsInsertion,
            color: MUSCLE_COLOR,
            max_radius: 0.20,
            resting_length: 2.5,
            tendon_start: 0.05,
            tendon_end: 0.10,
            bulge_intensity: 0.0,
        }
    }

    /// Tube generation parameters for this muscle.
    #[must_use]
    pub fn tube_params(&self) -> TubeParams {
        TubeParams {
            max_radius: self.max_radius,
            tendon_start: self.tendon_start,
            tendon_end: self.tendon_end,
            base_color: self.color,
            ..TubeParams::default()
        }
    }
}

/// The full arm muscle set, in [`MuscleId::ALL`] order.
#[must_use]
pub fn arm_muscles() -> [MuscleDescriptor; 3] {
    [
        MuscleDescriptor::biceps_short_head(),
        MuscleDescriptor::biceps_long_head(),
        MuscleDescriptor::triceps(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_order_matches_ids() {
        for (descriptor, id) in arm_muscles().iter().zip(MuscleId::ALL) {
            assert_eq!(descriptor.id, id);
        }
    }

    #[test]
    fn biceps_heads_share_insertion_and_guide() {
        let short = MuscleDescriptor::biceps_short_head();
        let long = MuscleDescriptor::biceps_long_head();

        assert_eq!(short.insertion, long.insertion);
        assert_eq!(short.guide, long.guide);
        assert_ne!(short.origin, long.origin);
    }

    #[test]
    fn triceps_is_rigid() {
        let triceps = MuscleDescriptor::triceps();
        assert!(triceps.bulge_intensity.abs() < f64::EPSILON);
        assert!(triceps.max_radius < 0.3);
    }

    #[test]
    fn tube_params_carry_descriptor_values() {
        let short = MuscleDescriptor::biceps_short_head();
        let params = short.tube_params();
        assert!((params.max_radius - 0.45).abs() < f64::EPSILON);
        assert!((params.tendon_start - 0.05).abs() < f64::EPSILON);
        assert_eq!(params.base_color, MUSCLE_COLOR);
        assert_eq!(params.rings, muscle_mesh::DEFAULT_RINGS);
    }
}
