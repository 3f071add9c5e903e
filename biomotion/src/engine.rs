//! The per-frame two-phase update engine.

use arm_skeleton::{evaluate, ArmPose, ArmSkeleton, BoneId, Isometry3, JointState};
use muscle_mesh::{bulge_factor, generate_tube, MeshResult, MuscleMesh, TubeParams};
use muscle_path::MusclePath;
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::muscles::{arm_muscles, MuscleDescriptor, MuscleId};

/// Per-frame state of one muscle: its measured path, bulge, and mesh.
#[derive(Debug, Clone)]
pub struct MuscleState {
    /// The static muscle description.
    pub descriptor: MuscleDescriptor,
    /// Arc length of the current path.
    pub path_length: f64,
    /// Bulge factor evaluated for the current length.
    pub bulge: f64,
    /// The regenerated tube mesh.
    pub mesh: MuscleMesh,
    params: TubeParams,
}

impl MuscleState {
    fn new(descriptor: MuscleDescriptor) -> Self {
        Self {
            descriptor,
            path_length: descriptor.resting_length,
            bulge: 1.0,
            mesh: MuscleMesh::default(),
            params: descriptor.tube_params(),
        }
    }

    /// Rebuild this muscle's path, bulge, and mesh from a frozen pose.
    fn deform(&mut self, pose: &ArmPose) -> MeshResult<()> {
        let origin = pose.anchor_position(self.descriptor.origin);
        let insertion = pose.anchor_position(self.descriptor.insertion);
        let guide = self.descriptor.guide.map(|g| pose.anchor_position(g));

        let path = MusclePath::new(origin, insertion, guide);
        self.path_length = path.length();
        self.bulge = bulge_factor(
            self.path_length,
            self.descriptor.resting_length,
            self.descriptor.bulge_intensity,
        );
        self.mesh = generate_tube(&path, &self.params, self.bulge)?;

        trace!(
            muscle = self.descriptor.id.name(),
            length = self.path_length,
            bulge = self.bulge,
            "muscle deformed"
        );
        Ok(())
    }
}

/// The arm scene: skeleton, current pose, and all muscle states.
///
/// [`ArmScene::update`] is the once-per-frame entry point. It runs in two
/// phases with a hard barrier between them:
///
/// 1. **Kinematics**: one pure [`evaluate`] call produces the frame's
///    [`ArmPose`]. Anchor positions are frozen from here on.
/// 2. **Deformation**: every muscle rebuilds its path, bulge, and mesh
///    from that snapshot, in parallel. Muscles share nothing but the
///    read-only pose and each writes only its own state, so no locking
///    is involved.
///
/// Nothing is carried between frames except the static configuration, so
/// updates are idempotent: the same joint angles always produce the same
/// pose and meshes.
#[derive(Debug, Clone)]
pub struct ArmScene {
    skeleton: ArmSkeleton,
    joints: JointState,
    pose: ArmPose,
    muscles: Vec<MuscleState>,
}

impl ArmScene {
    /// Build the standard arm scene and run one update at the initial pose.
    ///
    /// # Errors
    ///
    /// Propagates mesh generation errors; the built-in muscle parameters
    /// never trigger them.
    pub fn new() -> MeshResult<Self> {
        let skeleton = ArmSkeleton::arm();
        let joints = JointState::default();
        let pose = evaluate(&skeleton, &joints);
        let mut scene = Self {
            skeleton,
            joints,
            pose,
            muscles: arm_muscles().map(MuscleState::new).into(),
        };
        scene.update(&joints)?;
        Ok(scene)
    }

    /// Advance the scene to a new joint configuration.
    ///
    /// # Errors
    ///
    /// Propagates mesh generation errors; the built-in muscle parameters
    /// never trigger them.
    pub fn update(&mut self, joints: &JointState) -> MeshResult<()> {
        self.joints = *joints;

        // Phase 1: kinematics barrier. All anchors are computed before any
        // mesh generation begins.
        self.pose = evaluate(&self.skeleton, joints);

        // Phase 2: parallel deformation off the frozen snapshot.
        let pose = &self.pose;
        self.muscles
            .par_iter_mut()
            .try_for_each(|muscle| muscle.deform(pose))?;

        debug!(
            elbow = joints.elbow_flexion,
            shoulder_flexion = joints.shoulder_flexion,
            "arm scene updated"
        );
        Ok(())
    }

    /// The joint angles of the last update.
    #[must_use]
    pub fn joints(&self) -> &JointState {
        &self.joints
    }

    /// The skeleton configuration.
    #[must_use]
    pub fn skeleton(&self) -> &ArmSkeleton {
        &self.skeleton
    }

    /// The pose of the last update.
    #[must_use]
    pub fn pose(&self) -> &ArmPose {
        &self.pose
    }

    /// World transform of a bone, for rendering the rigid bone meshes.
    #[must_use]
    pub fn bone_transform(&self, id: BoneId) -> &Isometry3<f64> {
        self.pose.bone_transform(id)
    }

    /// All muscle states, in [`MuscleId::ALL`] order.
    #[must_use]
    pub fn muscles(&self) -> &[MuscleState] {
        &self.muscles
    }

    /// State of a single muscle.
    #[must_use]
    pub fn muscle(&self, id: MuscleId) -> &MuscleState {
        let index = match id {
            MuscleId::BicepsShortHead => 0,
            MuscleId::BicepsLongHead => 1,
            MuscleId::Triceps => 2,
        };
        &self.muscles[index]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn initial_scene_has_all_meshes() {
        let scene = ArmScene::new().unwrap();
        assert_eq!(scene.muscles().len(), 3);
        for muscle in scene.muscles() {
            assert!(muscle.mesh.vertex_count() > 0);
            assert!(muscle.path_length > 0.0);
        }
    }

    #[test]
    fn update_is_idempotent() {
        let mut scene = ArmScene::new().unwrap();
        let joints = JointState {
            elbow_flexion: 100.0,
            shoulder_abduction: 30.0,
            ..JointState::zero()
        };

        scene.update(&joints).unwrap();
        let first: Vec<_> = scene.muscles().iter().map(|m| m.mesh.clone()).collect();

        scene.update(&joints).unwrap();
        for (muscle, mesh) in scene.muscles().iter().zip(&first) {
            assert_eq!(&muscle.mesh, mesh);
        }
    }

    #[test]
    fn topology_is_stable_across_updates() {
        let mut scene = ArmScene::new().unwrap();
        let indices: Vec<_> = scene
            .muscles()
            .iter()
            .map(|m| m.mesh.indices.clone())
            .collect();

        scene
            .update(&JointState {
                elbow_flexion: 140.0,
                ..JointState::zero()
            })
            .unwrap();

        for (muscle, fixed) in scene.muscles().iter().zip(&indices) {
            assert_eq!(&muscle.mesh.indices, fixed);
        }
    }

    #[test]
    fn flexing_the_elbow_shortens_the_biceps() {
        let mut scene = ArmScene::new().unwrap();

        scene.update(&JointState::zero()).unwrap();
        let straight = scene.muscle(MuscleId::BicepsShortHead).path_length;

        scene
            .update(&JointState {
                elbow_flexion: 140.0,
                ..JointState::zero()
            })
            .unwrap();
        let flexed = scene.muscle(MuscleId::BicepsShortHead).path_length;

        assert!(flexed < straight);
        assert!(scene.muscle(MuscleId::BicepsShortHead).bulge > 1.0);
    }

    #[test]
    fn triceps_never_bulges() {
        let mut scene = ArmScene::new().unwrap();
        for elbow in [0.0, 45.0, 90.0, 140.0] {
            scene
                .update(&JointState {
                    elbow_flexion: elbow,
                    ..JointState::zero()
                })
                .unwrap();
            assert_relative_eq!(scene.muscle(MuscleId::Triceps).bulge, 1.0);
        }
    }

    #[test]
    fn extreme_angles_produce_finite_meshes() {
        let mut scene = ArmScene::new().unwrap();
        scene
            .update(&JointState {
                shoulder_flexion: 5_000.0,
                shoulder_abduction: -4_000.0,
                shoulder_rotation: 999.0,
                elbow_flexion: -720.0,
                wrist_rotation: 12_345.0,
            })
            .unwrap();

        for muscle in scene.muscles() {
            assert!(muscle.path_length.is_finite());
            for position in &muscle.mesh.positions {
                assert!(position.coords.norm().is_finite());
            }
        }
    }
}
