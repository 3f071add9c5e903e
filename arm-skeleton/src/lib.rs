//! Arm joint state, bone hierarchy, and forward kinematics.
//!
//! This crate provides the skeletal half of the BioMotion engine:
//!
//! - [`JointState`] - The five controllable joint angles, in degrees
//! - [`ArmSkeleton`] - The immutable bone tree with fixed offsets and
//!   named muscle anchor points
//! - [`evaluate`] - Pure forward kinematics: joint angles in, world-space
//!   bone transforms and anchor positions out
//!
//! # Design
//!
//! The skeleton is pure configuration: topology, bone offsets, and anchor
//! offsets never change after construction. Only rotations are recomputed,
//! and they live in the returned [`ArmPose`], never in the skeleton itself.
//! Calling [`evaluate`] twice with the same inputs yields identical poses.
//!
//! Kinematics is total over all finite angle values. Out-of-range angles
//! produce extreme but finite transforms; nothing here panics or errors.
//!
//! # Coordinate System
//!
//! Right-handed, matching the rest of the BioMotion workspace:
//!
//! - X: lateral (away from the torso)
//! - Y: up
//! - Z: anterior (toward the viewer)
//!
//! The arm hangs down the −Y axis in the rest pose.
//!
//! # Example
//!
//! ```
//! use arm_skeleton::{evaluate, AnchorId, ArmSkeleton, BoneId, JointState};
//!
//! let skeleton = ArmSkeleton::arm();
//! let pose = evaluate(&skeleton, &JointState::default());
//!
//! let elbow = pose.bone_transform(BoneId::Forearm);
//! let origin = pose.anchor_position(AnchorId::BicepsShortOrigin);
//! assert!(origin.coords.norm().is_finite());
//! assert!(elbow.translation.vector.norm().is_finite());
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::suboptimal_flops
)]

mod joints;
mod kinematics;
mod skeleton;

pub use joints::{AngleRange, JointState};
pub use kinematics::{evaluate, ArmPose};
pub use skeleton::{Anchor, AnchorId, ArmSkeleton, Bone, BoneId, JointRotation};

// Re-export the math types used in the public API.
pub use nalgebra::{Isometry3, Point3, Vector3};
