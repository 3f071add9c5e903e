//! Joint angle state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An inclusive angle range in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AngleRange {
    /// Minimum angle (degrees).
    pub min: f64,
    /// Maximum angle (degrees).
    pub max: f64,
}

impl AngleRange {
    /// Create a new range.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp a value into the range.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// The five controllable joint angles of the arm, in degrees.
///
/// This is pure data: the UI layer mutates it, the kinematics evaluator
/// reads it once per frame. There is no internal invariant beyond the
/// values being finite numbers. The anatomical ranges below are what a UI
/// should clamp to, but [`crate::evaluate`] behaves continuously for any
/// finite values, in range or not.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JointState {
    /// Shoulder flexion (+) / extension (−), about the lateral X axis.
    pub shoulder_flexion: f64,

    /// Shoulder abduction (+) / adduction (−), about the vertical Y axis.
    pub shoulder_abduction: f64,

    /// Shoulder internal (+) / external (−) rotation, about the Z axis.
    pub shoulder_rotation: f64,

    /// Elbow flexion. 0 is a straight arm, ~145 fully bent.
    pub elbow_flexion: f64,

    /// Wrist supination (+) / pronation (−) of the radius.
    pub wrist_rotation: f64,
}

impl JointState {
    /// Anatomical shoulder flexion/extension range.
    pub const SHOULDER_FLEXION_RANGE: AngleRange = AngleRange::new(-60.0, 180.0);

    /// Anatomical shoulder abduction range.
    pub const SHOULDER_ABDUCTION_RANGE: AngleRange = AngleRange::new(0.0, 180.0);

    /// Anatomical shoulder internal/external rotation range.
    pub const SHOULDER_ROTATION_RANGE: AngleRange = AngleRange::new(-90.0, 90.0);

    /// Anatomical elbow flexion range.
    pub const ELBOW_FLEXION_RANGE: AngleRange = AngleRange::new(0.0, 145.0);

    /// Anatomical wrist supination/pronation range.
    pub const WRIST_ROTATION_RANGE: AngleRange = AngleRange::new(-90.0, 90.0);

    /// Create a joint state with every angle at zero (fully straight arm).
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            shoulder_flexion: 0.0,
            shoulder_abduction: 0.0,
            shoulder_rotation: 0.0,
            elbow_flexion: 0.0,
            wrist_rotation: 0.0,
        }
    }

    /// Return a copy with every angle clamped to its anatomical range.
    ///
    /// This is a convenience for input layers; the core never requires it.
    #[must_use]
    pub fn clamped_to_anatomical(&self) -> Self {
        Self {
            shoulder_flexion: Self::SHOULDER_FLEXION_RANGE.clamp(self.shoulder_flexion),
            shoulder_abduction: Self::SHOULDER_ABDUCTION_RANGE.clamp(self.shoulder_abduction),
            shoulder_rotation: Self::SHOULDER_ROTATION_RANGE.clamp(self.shoulder_rotation),
            elbow_flexion: Self::ELBOW_FLEXION_RANGE.clamp(self.elbow_flexion),
            wrist_rotation: Self::WRIST_ROTATION_RANGE.clamp(self.wrist_rotation),
        }
    }

    /// Check that every angle is a finite number.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.shoulder_flexion.is_finite()
            && self.shoulder_abduction.is_finite()
            && self.shoulder_rotation.is_finite()
            && self.elbow_flexion.is_finite()
            && self.wrist_rotation.is_finite()
    }
}

impl Default for JointState {
    /// The initial pose: shoulder neutral, elbow bent 45 degrees.
    fn default() -> Self {
        Self {
            elbow_flexion: 45.0,
            ..Self::zero()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_initial_pose() {
        let joints = JointState::default();
        assert!((joints.elbow_flexion - 45.0).abs() < f64::EPSILON);
        assert!(joints.shoulder_flexion.abs() < f64::EPSILON);
        assert!(joints.wrist_rotation.abs() < f64::EPSILON);
    }

    #[test]
    fn clamp_pulls_out_of_range_values_in() {
        let wild = JointState {
            shoulder_flexion: 400.0,
            shoulder_abduction: -30.0,
            shoulder_rotation: 0.0,
            elbow_flexion: 720.0,
            wrist_rotation: -180.0,
        };
        let clamped = wild.clamped_to_anatomical();
        assert!((clamped.shoulder_flexion - 180.0).abs() < f64::EPSILON);
        assert!(clamped.shoulder_abduction.abs() < f64::EPSILON);
        assert!((clamped.elbow_flexion - 145.0).abs() < f64::EPSILON);
        assert!((clamped.wrist_rotation + 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn clamp_leaves_in_range_values_alone() {
        let joints = JointState::default();
        assert_eq!(joints, joints.clamped_to_anatomical());
    }

    #[test]
    fn finiteness_check() {
        assert!(JointState::default().is_finite());

        let bad = JointState {
            elbow_flexion: f64::NAN,
            ..JointState::zero()
        };
        assert!(!bad.is_finite());
    }
}
