//! Boundary types for the external pose-analysis collaborator.
//!
//! The engine never performs the network call itself; it only owns the
//! request payload, the expected response shape, and the fallback applied
//! when the collaborator fails. Analysis runs off the per-frame path.

use arm_skeleton::JointState;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Errors surfaced by a pose-analysis collaborator.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The collaborator itself failed (network, quota, empty response).
    #[error("analysis collaborator failed: {0}")]
    Collaborator(String),

    /// The collaborator answered, but not with the expected shape.
    #[error("unparsable analysis response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The joint configuration sent to the analysis collaborator, as plain
/// numeric fields in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalysisRequest {
    /// Shoulder flexion/extension angle.
    pub shoulder_flexion: f64,
    /// Shoulder abduction angle.
    pub shoulder_abduction: f64,
    /// Shoulder internal/external rotation angle.
    pub shoulder_rotation: f64,
    /// Elbow flexion angle (0 straight, ~145 fully bent).
    pub elbow_flexion: f64,
    /// Wrist pronation/supination angle.
    pub wrist_rotation: f64,
}

impl From<&JointState> for AnalysisRequest {
    fn from(joints: &JointState) -> Self {
        Self {
            shoulder_flexion: joints.shoulder_flexion,
            shoulder_abduction: joints.shoulder_abduction,
            shoulder_rotation: joints.shoulder_rotation,
            elbow_flexion: joints.elbow_flexion,
            wrist_rotation: joints.wrist_rotation,
        }
    }
}

/// The structured analysis the collaborator is expected to return.
///
/// All fields are opaque display strings. The wire format uses camelCase
/// keys (`clinicalNotes`), matching the collaborator's JSON schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Headline for the analyzed pose.
    pub title: String,
    /// Description of the skeletal movement and range of motion.
    pub biomechanics: String,
    /// State of the biceps and triceps in this configuration.
    pub muscles: String,
    /// Risks, exercises, or clinical relevance of the pose.
    pub clinical_notes: String,
}

impl AnalysisResult {
    /// The fixed placeholder shown when the collaborator fails.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            title: "Analysis Unavailable".to_owned(),
            biomechanics: "Unable to connect to the biomechanics engine.".to_owned(),
            muscles: "Data unavailable.".to_owned(),
            clinical_notes: "Please check your API connection.".to_owned(),
        }
    }

    /// Parse a collaborator's raw JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Parse`] when the text is not valid JSON of
    /// the expected shape.
    pub fn from_json(text: &str) -> Result<Self, AnalysisError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// An external collaborator that turns a joint configuration into a
/// structured analysis. Implementations own transport, prompting, and
/// authentication; the engine only sees this trait.
pub trait PoseAnalyzer {
    /// Analyze the given joint configuration.
    ///
    /// # Errors
    ///
    /// Any transport or response-shape failure.
    fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError>;
}

/// Run an analyzer and convert any failure into the fixed placeholder.
///
/// The caller always gets a displayable result; failures are logged and
/// never propagate toward the rendering or kinematics path.
pub fn analyze_with_fallback<A: PoseAnalyzer + ?Sized>(
    analyzer: &A,
    joints: &JointState,
) -> AnalysisResult {
    let request = AnalysisRequest::from(joints);
    match analyzer.analyze(&request) {
        Ok(result) => result,
        Err(error) => {
            warn!(%error, "pose analysis failed, substituting placeholder");
            AnalysisResult::unavailable()
        }
    }
}
