//! Per-frame form evaluation.
//!
//! Stateless: each call judges one frame against the session's exercise.
//! A measurement whose joints are below the confidence floor, or whose angle
//! is undefined, is skipped for that frame and never counts against the user.

use fitai_core::{ExerciseKind, FormFeedback, FormJudgment, ScaledPose};

use crate::config::FormConfig;
use crate::joints::{
    average_elbow_angle, knee_below_hip, torso_vertical_gap, ARMS, HIPS_AND_KNEES, TORSO,
};

/// Judges form quality for the classified exercise.
#[derive(Debug, Clone, Default)]
pub struct FormEvaluator {
    config: FormConfig,
}

impl FormEvaluator {
    /// Creates an evaluator with the given thresholds.
    #[must_use]
    pub fn new(config: FormConfig) -> Self {
        Self { config }
    }

    /// Judges one frame.
    ///
    /// A frame with no confident joint at all is never acceptable. An
    /// unclassified exercise is always acceptable with a neutral message.
    #[must_use]
    pub fn evaluate(&self, pose: &ScaledPose, exercise: ExerciseKind) -> FormJudgment {
        let feedback = if pose.has_person() {
            match exercise {
                ExerciseKind::PushUp => self.push_up_feedback(pose),
                ExerciseKind::Squat => self.squat_feedback(pose),
                ExerciseKind::Unknown => FormFeedback::Neutral,
            }
        } else {
            FormFeedback::NoPerson
        };
        FormJudgment::from_feedback(feedback)
    }

    fn push_up_feedback(&self, pose: &ScaledPose) -> FormFeedback {
        let cfg = &self.config;
        let mut measured = false;

        if pose.all_confident(&TORSO, cfg.min_confidence) {
            measured = true;
            if torso_vertical_gap(pose) > cfg.hips_sag_above {
                return FormFeedback::HipsSagging;
            }
        }

        let elbow = if pose.all_confident(&ARMS, cfg.min_confidence) {
            average_elbow_angle(pose)
        } else {
            None
        };
        if let Some(elbow) = elbow {
            measured = true;
            if elbow < cfg.elbow_too_bent_below {
                return FormFeedback::ElbowsTooBent;
            }
            if elbow > cfg.elbow_locked_above {
                return FormFeedback::ArmsLocked;
            }
        }

        if measured {
            FormFeedback::GoodPushUp
        } else {
            FormFeedback::Neutral
        }
    }

    fn squat_feedback(&self, pose: &ScaledPose) -> FormFeedback {
        if !pose.all_confident(&HIPS_AND_KNEES, self.config.min_confidence) {
            return FormFeedback::Neutral;
        }
        if knee_below_hip(pose) < self.config.squat_min_depth {
            FormFeedback::NotDeepEnough
        } else {
            FormFeedback::GoodSquat
        }
    }
}
