//! The immutable arm skeleton: bone tree and muscle anchor table.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier for a bone in the arm hierarchy.
///
/// Discriminants double as indices into [`ArmSkeleton::bones`] and the
/// per-pose transform array, so the enum order must match the
/// parent-before-child construction order in [`ArmSkeleton::arm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(usize)]
pub enum BoneId {
    /// Root of the hierarchy; carries the fixed shoulder position.
    Scapula = 0,
    /// Upper arm. Rotated by the three shoulder angles.
    Humerus = 1,
    /// Elbow node. Parent frame for both forearm bones and the hand.
    Forearm = 2,
    /// Medial forearm bone. Rigid with the forearm.
    Ulna = 3,
    /// Lateral forearm bone. Rotated by wrist supination/pronation.
    Radius = 4,
    /// Hand segment at the distal end of the forearm.
    Hand = 5,
}

impl BoneId {
    /// All bones, in hierarchy (parent-before-child) order.
    pub const ALL: [Self; 6] = [
        Self::Scapula,
        Self::Humerus,
        Self::Forearm,
        Self::Ulna,
        Self::Radius,
        Self::Hand,
    ];

    /// Index of this bone into per-skeleton arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Which joint angles drive a bone's local rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum JointRotation {
    /// The bone is rigid relative to its parent.
    Fixed,
    /// Three-axis shoulder rotation (flexion, abduction, rotation).
    Shoulder,
    /// Single-axis elbow flexion about the lateral axis.
    ElbowFlexion,
    /// Single-axis wrist rotation about the bone's long axis.
    WristRotation,
}

/// One bone of the arm: parent link, fixed local offset, and the joint
/// that rotates it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bone {
    /// This bone's identifier.
    pub id: BoneId,
    /// Parent bone, or `None` for the root.
    pub parent: Option<BoneId>,
    /// Translation from the parent frame to this bone's frame, applied
    /// before the joint rotation.
    pub offset: Vector3<f64>,
    /// Joint driving this bone's local rotation.
    pub rotation: JointRotation,
}

/// Identifier for a named muscle attachment point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(usize)]
pub enum AnchorId {
    /// Short-head biceps origin on the scapula (coracoid side).
    BicepsShortOrigin = 0,
    /// Long-head biceps origin on the scapula (glenoid side).
    BicepsLongOrigin = 1,
    /// Triceps long-head origin on the scapula.
    TricepsOrigin = 2,
    /// Mid-humerus guide point bowing the biceps path anteriorly.
    BicepsGuide = 3,
    /// Distal-humerus guide point bowing the triceps path posteriorly.
    TricepsGuide = 4,
    /// Biceps insertion on the radial tuberosity.
    BicepsInsertion = 5,
    /// Triceps insertion on the olecranon of the ulna.
    TricepsInsertion = 6,
}

impl AnchorId {
    /// All anchors, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::BicepsShortOrigin,
        Self::BicepsLongOrigin,
        Self::TricepsOrigin,
        Self::BicepsGuide,
        Self::TricepsGuide,
        Self::BicepsInsertion,
        Self::TricepsInsertion,
    ];

    /// Index of this anchor into per-skeleton arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A muscle attachment point: a bone and a constant offset in that bone's
/// local frame. The anchor rides the bone rigidly; its world position is
/// recovered by [`crate::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Anchor {
    /// This anchor's identifier.
    pub id: AnchorId,
    /// Bone the anchor is welded to.
    pub bone: BoneId,
    /// Offset in the bone's local frame.
    pub offset: Vector3<f64>,
}

/// The immutable arm skeleton: bone tree plus anchor table.
///
/// Construction fixes all topology and offsets; nothing here changes at
/// runtime. Joint angles live in [`crate::JointState`] and world transforms
/// in [`crate::ArmPose`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArmSkeleton {
    /// Bones in parent-before-child order, indexed by [`BoneId::index`].
    pub bones: [Bone; 6],
    /// Anchors indexed by [`AnchorId::index`].
    pub anchors: [Anchor; 7],
}

impl ArmSkeleton {
    /// Build the standard right-arm skeleton.
    ///
    /// Offsets are scene units (roughly decimeters for a stylized arm),
    /// tuned for anatomical plausibility rather than measured from any
    /// subject. The rest pose hangs down −Y with the elbow at the origin's
    /// anterior side.
    #[must_use]
    pub fn arm() -> Self {
        let bones = [
            Bone {
                id: BoneId::Scapula,
                parent: None,
                offset: Vector3::new(-1.0, 2.2, 0.0),
                rotation: JointRotation::Fixed,
            },
            Bone {
                id: BoneId::Humerus,
                parent: Some(BoneId::Scapula),
                offset: Vector3::zeros(),
                rotation: JointRotation::Shoulder,
            },
            Bone {
                id: BoneId::Forearm,
                parent: Some(BoneId::Humerus),
                offset: Vector3::new(0.0, -3.2, 0.0),
                rotation: JointRotation::ElbowFlexion,
            },
            Bone {
                id: BoneId::Ulna,
                parent: Some(BoneId::Forearm),
                offset: Vector3::new(-0.15, -1.4, 0.0),
                rotation: JointRotation::Fixed,
            },
            Bone {
                id: BoneId::Radius,
                parent: Some(BoneId::Forearm),
                offset: Vector3::new(0.2, -1.2, 0.0),
                rotation: JointRotation::WristRotation,
            },
            Bone {
                id: BoneId::Hand,
                parent: Some(BoneId::Forearm),
                offset: Vector3::new(0.0, -3.0, 0.0),
                rotation: JointRotation::WristRotation,
            },
        ];

        let anchors = [
            Anchor {
                id: AnchorId::BicepsShortOrigin,
                bone: BoneId::Scapula,
                offset: Vector3::new(-0.3, 0.3, 0.4),
            },
            Anchor {
                id: AnchorId::BicepsLongOrigin,
                bone: BoneId::Scapula,
                offset: Vector3::new(0.1, 0.3, 0.0),
            },
            Anchor {
                id: AnchorId::TricepsOrigin,
                bone: BoneId::Scapula,
                offset: Vector3::new(-0.1, -0.4, -0.3),
            },
            Anchor {
                id: AnchorId::BicepsGuide,
                bone: BoneId::Humerus,
                offset: Vector3::new(0.1, -1.5, 0.4),
            },
            Anchor {
                id: AnchorId::TricepsGuide,
                bone: BoneId::Humerus,
                offset: Vector3::new(0.0, -2.0, -0.6),
            },
            Anchor {
                id: AnchorId::BicepsInsertion,
                bone: BoneId::Radius,
                offset: Vector3::new(-0.15, 0.9, 0.1),
            },
            Anchor {
                id: AnchorId::TricepsInsertion,
                bone: BoneId::Ulna,
                offset: Vector3::new(0.0, 1.65, -0.2),
            },
        ];

        Self { bones, anchors }
    }

    /// Look up a bone by id.
    #[must_use]
    pub fn bone(&self, id: BoneId) -> &Bone {
        &self.bones[id.index()]
    }

    /// Look up an anchor by id.
    #[must_use]
    pub fn anchor(&self, id: AnchorId) -> &Anchor {
        &self.anchors[id.index()]
    }
}
