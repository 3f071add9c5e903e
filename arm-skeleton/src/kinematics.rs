//! Pure forward kinematics over the arm bone tree.

use nalgebra::{Isometry3, Point3, Translation3, UnitQuaternion, Vector3};

use crate::joints::JointState;
use crate::skeleton::{AnchorId, ArmSkeleton, BoneId, JointRotation};

/// The world-space result of one kinematics pass: a transform per bone and
/// a position per anchor.
///
/// A pose is an immutable snapshot. Downstream consumers (muscle paths,
/// mesh generation) read from it concurrently without touching the
/// skeleton or joint state that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ArmPose {
    bone_transforms: [Isometry3<f64>; 6],
    anchor_positions: [Point3<f64>; 7],
}

impl ArmPose {
    /// World transform of a bone's local frame.
    #[must_use]
    pub fn bone_transform(&self, id: BoneId) -> &Isometry3<f64> {
        &self.bone_transforms[id.index()]
    }

    /// World position of a muscle anchor.
    #[must_use]
    pub fn anchor_position(&self, id: AnchorId) -> Point3<f64> {
        self.anchor_positions[id.index()]
    }
}

/// Evaluate forward kinematics for the given joint angles.
///
/// Walks the bone array once, parent before child, composing each bone's
/// world transform as
///
/// ```text
/// world(bone) = world(parent) * T(offset) * R(joint)
/// ```
///
/// then pushes every anchor through its bone's transform. The function is
/// pure: same skeleton and joints in, bitwise-identical pose out, with no
/// state carried between calls.
///
/// Joint rotations follow the original scene conventions:
///
/// - shoulder: `Rx(flexion) * Ry(abduction) * Rz(rotation)`
/// - elbow: `Rx(-flexion)`, so increasing flexion folds the hanging
///   forearm anteriorly (toward +Z) and up
/// - wrist: `Ry(rotation)` about the forearm's long axis
#[must_use]
pub fn evaluate(skeleton: &ArmSkeleton, joints: &JointState) -> ArmPose {
    let mut bone_transforms = [Isometry3::identity(); 6];

    for bone in &skeleton.bones {
        let parent_world = match bone.parent {
            Some(parent) => bone_transforms[parent.index()],
            None => Isometry3::identity(),
        };
        let local = Isometry3::from_parts(
            Translation3::from(bone.offset),
            joint_rotation(bone.rotation, joints),
        );
        bone_transforms[bone.id.index()] = parent_world * local;
    }

    let mut anchor_positions = [Point3::origin(); 7];
    for anchor in &skeleton.anchors {
        let world = &bone_transforms[anchor.bone.index()];
        anchor_positions[anchor.id.index()] = world * Point3::from(anchor.offset);
    }

    ArmPose {
        bone_transforms,
        anchor_positions,
    }
}

fn joint_rotation(rotation: JointRotation, joints: &JointState) -> UnitQuaternion<f64> {
    match rotation {
        JointRotation::Fixed => UnitQuaternion::identity(),
        JointRotation::Shoulder => {
            let qx = UnitQuaternion::from_axis_angle(
                &Vector3::x_axis(),
                joints.shoulder_flexion.to_radians(),
            );
            let qy = UnitQuaternion::from_axis_angle(
                &Vector3::y_axis(),
                joints.shoulder_abduction.to_radians(),
            );
            let qz = UnitQuaternion::from_axis_angle(
                &Vector3::z_axis(),
                joints.shoulder_rotation.to_radians(),
            );
            qx * qy * qz
        }
        JointRotation::ElbowFlexion => UnitQuaternion::from_axis_angle(
            &Vector3::x_axis(),
            (-joints.elbow_flexion).to_radians(),
        ),
        JointRotation::WristRotation => UnitQuaternion::from_axis_angle(
            &Vector3::y_axis(),
            joints.wrist_rotation.to_radians(),
        ),
    }
}
