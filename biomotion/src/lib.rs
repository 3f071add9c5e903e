//! BioMotion: skeletal kinematics plus procedural muscle deformation for a
//! simplified human arm.
//!
//! This is the facade crate tying the workspace together:
//!
//! - [`ArmScene`] - the per-frame engine. One [`ArmScene::update`] call per
//!   joint change runs forward kinematics, then regenerates every muscle
//!   mesh in parallel off the frozen anchor snapshot.
//! - [`arm_muscles`] - the three rendered muscles (both biceps heads and
//!   the triceps) as static descriptors.
//! - [`analyze_with_fallback`] - the boundary to an external pose-analysis
//!   collaborator, with a fixed placeholder on failure.
//!
//! The underlying math lives in the `arm-skeleton`, `muscle-path`, and
//! `muscle-mesh` crates, re-exported here for convenience.
//!
//! # Example
//!
//! ```
//! use biomotion::{ArmScene, JointState, MuscleId};
//!
//! let mut scene = ArmScene::new()?;
//! scene.update(&JointState {
//!     elbow_flexion: 140.0,
//!     ..JointState::zero()
//! })?;
//!
//! let biceps = scene.muscle(MuscleId::BicepsShortHead);
//! assert!(biceps.bulge > 1.0); // contracted past resting length
//! let _gpu_positions = biceps.mesh.positions_f32();
//! # Ok::<(), biomotion::MeshError>(())
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::suboptimal_flops
)]

mod analysis;
mod engine;
mod muscles;

pub use analysis::{
    analyze_with_fallback, AnalysisError, AnalysisRequest, AnalysisResult, PoseAnalyzer,
};
pub use engine::{ArmScene, MuscleState};
pub use muscles::{arm_muscles, MuscleDescriptor, MuscleId, MUSCLE_COLOR};

pub use arm_skeleton::{
    evaluate, AnchorId, AngleRange, ArmPose, ArmSkeleton, BoneId, Isometry3, JointState, Point3,
    Vector3,
};
pub use muscle_mesh::{
    bulge_factor, MeshError, MeshResult, MuscleMesh, Rgb, TubeParams, TENDON_RADIUS,
};
pub use muscle_path::MusclePath;
