//! Exercise classification from a single frame's joint geometry.
//!
//! The classifier is stateless. A session polls it every frame while its
//! exercise is still [`ExerciseKind::Unknown`] and locks the first non-unknown
//! answer; a frame that matches no hypothesis simply returns `Unknown`.
//!
//! Hypotheses are tried in a fixed order:
//!
//! 1. **Push-up**: shoulders and elbows confident, body roughly flat
//!    (shoulder line close to hip line) and the average elbow angle either
//!    extended or bent.
//! 2. **Squat**: hips and knees confident and the average knee angle bent.

use fitai_core::{ExerciseKind, ScaledPose};

use crate::config::ClassifierConfig;
use crate::joints::{
    average_elbow_angle, average_knee_angle, torso_vertical_gap, HIPS_AND_KNEES,
    SHOULDERS_AND_ELBOWS,
};

/// Infers the exercise in progress from one frame.
#[derive(Debug, Clone, Default)]
pub struct ExerciseClassifier {
    config: ClassifierConfig,
}

impl ExerciseClassifier {
    /// Creates a classifier with the given thresholds.
    #[must_use]
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Returns the thresholds in use.
    #[must_use]
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classifies one frame. Returns [`ExerciseKind::Unknown`] when no
    /// hypothesis matches or the joints it needs are not confident enough.
    #[must_use]
    pub fn classify(&self, pose: &ScaledPose) -> ExerciseKind {
        if self.matches_push_up(pose) {
            return ExerciseKind::PushUp;
        }
        if self.matches_squat(pose) {
            return ExerciseKind::Squat;
        }
        ExerciseKind::Unknown
    }

    // Both a fully extended and a clearly bent elbow count as push-up evidence
    // once the body is flat; only the transitional band is rejected.
    fn matches_push_up(&self, pose: &ScaledPose) -> bool {
        let cfg = &self.config;
        if !pose.all_confident(&SHOULDERS_AND_ELBOWS, cfg.min_confidence) {
            return false;
        }
        let Some(elbow) = average_elbow_angle(pose) else {
            return false;
        };
        let flat = torso_vertical_gap(pose) < cfg.body_flat_max_delta;
        flat && (elbow > cfg.push_extended_above || elbow < cfg.push_bent_below)
    }

    fn matches_squat(&self, pose: &ScaledPose) -> bool {
        let cfg = &self.config;
        if !pose.all_confident(&HIPS_AND_KNEES, cfg.min_confidence) {
            return false;
        }
        average_knee_angle(pose).is_some_and(|knee| knee < cfg.squat_knee_below)
    }
}
