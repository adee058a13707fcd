//! Hysteresis rep counter.
//!
//! Each exercise owns a two-phase cycle, `Up` (initial) and `Down`:
//!
//! ```text
//!            angle < down_below
//!     Up ───────────────────────▶ Down
//!      ▲                           │
//!      └───────────────────────────┘
//!        angle > up_above  (rep +1)
//! ```
//!
//! The gap between the two thresholds keeps jitter near either one from
//! producing phantom reps. Frames whose vertex joints are not confident, or
//! whose angle is undefined, leave the phase untouched.

use fitai_core::{ExerciseKind, KeypointType, ScaledPose};

use crate::config::RepCounterConfig;
use crate::joints::{average_elbow_angle, average_knee_angle, ELBOWS, KNEES};

/// Phase of one exercise's movement cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CyclePhase {
    /// Extended; the initial phase.
    #[default]
    Up,
    /// Flexed past the entry threshold, waiting for the completion edge.
    Down,
}

/// Per-exercise cycle phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CycleState {
    push_up: CyclePhase,
    squat: CyclePhase,
}

impl CycleState {
    /// Phase of the given exercise, or `None` for [`ExerciseKind::Unknown`].
    #[must_use]
    pub fn phase(&self, exercise: ExerciseKind) -> Option<CyclePhase> {
        match exercise {
            ExerciseKind::PushUp => Some(self.push_up),
            ExerciseKind::Squat => Some(self.squat),
            ExerciseKind::Unknown => None,
        }
    }

    fn phase_mut(&mut self, exercise: ExerciseKind) -> Option<&mut CyclePhase> {
        match exercise {
            ExerciseKind::PushUp => Some(&mut self.push_up),
            ExerciseKind::Squat => Some(&mut self.squat),
            ExerciseKind::Unknown => None,
        }
    }
}

/// A completed repetition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepEvent {
    /// Exercise the rep belongs to
    pub exercise: ExerciseKind,
    /// Rep count after this rep
    pub count: u32,
    /// Energy credited for this rep, in kcal
    pub calories_kcal: f64,
}

/// Counts repetitions for the session's classified exercise.
#[derive(Debug, Clone, Default)]
pub struct RepCounter {
    config: RepCounterConfig,
    state: CycleState,
    reps: u32,
    calories_kcal: f64,
}

impl RepCounter {
    /// Creates a counter with both phases `Up` and a zero count.
    #[must_use]
    pub fn new(config: RepCounterConfig) -> Self {
        Self {
            config,
            state: CycleState::default(),
            reps: 0,
            calories_kcal: 0.0,
        }
    }

    /// Returns both phases to `Up` and zeroes the count.
    pub fn reset(&mut self) {
        self.state = CycleState::default();
        self.reps = 0;
        self.calories_kcal = 0.0;
    }

    /// Completed repetitions.
    #[must_use]
    pub fn reps(&self) -> u32 {
        self.reps
    }

    /// Energy credited so far, in kcal.
    #[must_use]
    pub fn calories_kcal(&self) -> f64 {
        self.calories_kcal
    }

    /// Current cycle phases.
    #[must_use]
    pub fn state(&self) -> &CycleState {
        &self.state
    }

    /// Feeds one frame. Returns the completed rep, if this frame closed a
    /// cycle.
    pub fn update(&mut self, pose: &ScaledPose, exercise: ExerciseKind) -> Option<RepEvent> {
        let (vertices, down_below, up_above): (&[KeypointType], f32, f32) = match exercise {
            ExerciseKind::PushUp => (
                &ELBOWS,
                self.config.push_down_below,
                self.config.push_up_above,
            ),
            ExerciseKind::Squat => (
                &KNEES,
                self.config.squat_down_below,
                self.config.squat_up_above,
            ),
            ExerciseKind::Unknown => return None,
        };

        if !pose.all_confident(vertices, self.config.min_confidence) {
            tracing::debug!(exercise = %exercise, "Rep check skipped: vertex joints not confident");
            return None;
        }
        let angle = match exercise {
            ExerciseKind::PushUp => average_elbow_angle(pose),
            _ => average_knee_angle(pose),
        };
        let Some(angle) = angle else {
            tracing::debug!(exercise = %exercise, "Rep check skipped: undefined joint angle");
            return None;
        };

        let phase = self.state.phase_mut(exercise)?;
        if angle < down_below {
            *phase = CyclePhase::Down;
            return None;
        }
        if angle > up_above && *phase == CyclePhase::Down {
            *phase = CyclePhase::Up;
            self.reps += 1;
            let calories_kcal = exercise.calories_per_rep();
            self.calories_kcal += calories_kcal;
            return Some(RepEvent {
                exercise,
                count: self.reps,
                calories_kcal,
            });
        }
        None
    }
}
