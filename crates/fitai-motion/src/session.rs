//! The per-session orchestrator.
//!
//! A [`MotionSession`] owns all mutable tracking state for one user: the
//! locked exercise, both cycle phases, the running metrics and the lifecycle
//! state. Each frame runs through the pipeline in a fixed order:
//!
//! ```text
//! Pose → rescale → classify (while Unknown) → count → evaluate → aggregate
//! ```
//!
//! Control operations (`start`, `pause`, `end`) are idempotent: a request
//! that is not valid from the current state is logged and ignored.
//!
//! # Example
//!
//! ```rust
//! use fitai_core::{FrameGeometry, FrameSize, Pose};
//! use fitai_motion::{MotionSession, SessionState};
//!
//! let geometry = FrameGeometry::new(
//!     FrameSize::new(192.0, 192.0).unwrap(),
//!     FrameSize::new(640.0, 480.0).unwrap(),
//! );
//! let mut session = MotionSession::with_defaults(geometry);
//!
//! session.start();
//! let outcome = session.process_frame(&Pose::new()).unwrap();
//! assert!(!outcome.judgment.acceptable);
//!
//! let record = session.end().unwrap();
//! assert_eq!(record.metrics.total_frames, 1);
//! assert_eq!(session.state(), SessionState::Ended);
//! ```

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use fitai_core::geometry::rescale_pose;
use fitai_core::{
    Announcer, ExerciseKind, FormFeedback, FormJudgment, FrameGeometry, Pose, ScaledPose,
    SessionMetrics, SessionRecord, SessionStore,
};

use crate::aggregator::SessionAggregator;
use crate::announce::{self, Voice};
use crate::classifier::ExerciseClassifier;
use crate::config::EngineConfig;
use crate::counter::{RepCounter, RepEvent};
use crate::error::ConfigError;
use crate::form::FormEvaluator;
use crate::lifecycle::{SessionLifecycle, SessionState, Transition};
use crate::voice::VoiceCommand;

/// Result of processing one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutcome {
    /// Exercise after this frame
    pub exercise: ExerciseKind,
    /// `true` if this frame locked the exercise
    pub newly_classified: bool,
    /// Rep completed on this frame, if any
    pub rep: Option<RepEvent>,
    /// Form judgment for this frame
    pub judgment: FormJudgment,
}

/// Running statistics for a heads-up display.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveStats {
    /// Lifecycle state
    pub state: SessionState,
    /// Metrics so far; elapsed time measured up to the query
    pub metrics: SessionMetrics,
    /// Feedback from the most recent frame
    pub feedback: Option<FormFeedback>,
}

impl LiveStats {
    /// Latest feedback message, or an empty string before the first frame.
    #[must_use]
    pub fn feedback_message(&self) -> &'static str {
        self.feedback.map_or("", |f| f.message())
    }
}

/// Result of a voice command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// A lifecycle request was applied or ignored
    Lifecycle(Transition),
    /// The session ended and produced this record
    Finished(SessionRecord),
    /// The command was answered through the announcer
    Replied,
}

/// One user's tracking session.
pub struct MotionSession {
    geometry: FrameGeometry,
    classifier: ExerciseClassifier,
    evaluator: FormEvaluator,
    counter: RepCounter,
    aggregator: SessionAggregator,
    lifecycle: SessionLifecycle,
    exercise: ExerciseKind,
    last_feedback: Option<FormFeedback>,
    voice: Voice,
    store: Option<Arc<dyn SessionStore>>,
}

impl std::fmt::Debug for MotionSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MotionSession")
            .field("state", &self.lifecycle.state())
            .field("exercise", &self.exercise)
            .field("reps", &self.counter.reps())
            .field("voice", &self.voice)
            .field("has_store", &self.store.is_some())
            .finish_non_exhaustive()
    }
}

impl MotionSession {
    /// Creates a session with validated thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `config` fails validation.
    pub fn new(config: EngineConfig, geometry: FrameGeometry) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config, geometry))
    }

    /// Creates a session with the default thresholds.
    #[must_use]
    pub fn with_defaults(geometry: FrameGeometry) -> Self {
        Self::from_valid_config(EngineConfig::default(), geometry)
    }

    fn from_valid_config(config: EngineConfig, geometry: FrameGeometry) -> Self {
        let EngineConfig {
            classifier,
            form,
            counter,
        } = config;
        Self {
            geometry,
            classifier: ExerciseClassifier::new(classifier),
            evaluator: FormEvaluator::new(form),
            counter: RepCounter::new(counter),
            aggregator: SessionAggregator::new(),
            lifecycle: SessionLifecycle::new(),
            exercise: ExerciseKind::Unknown,
            last_feedback: None,
            voice: Voice::new(None),
            store: None,
        }
    }

    /// Attaches an announcer.
    #[must_use]
    pub fn with_announcer(mut self, announcer: Arc<dyn Announcer>) -> Self {
        self.voice.set_sink(announcer);
        self
    }

    /// Attaches a store that receives each finished session.
    #[must_use]
    pub fn with_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.lifecycle.state()
    }

    /// Exercise the session is locked to, or `Unknown`.
    #[must_use]
    pub fn exercise(&self) -> ExerciseKind {
        self.exercise
    }

    /// Rescaling geometry in use.
    #[must_use]
    pub fn geometry(&self) -> &FrameGeometry {
        &self.geometry
    }

    /// Replaces the rescaling geometry, e.g. after the display is resized.
    pub fn set_geometry(&mut self, geometry: FrameGeometry) {
        self.geometry = geometry;
    }

    /// Mutes or unmutes announcements.
    pub fn set_announcements_enabled(&mut self, enabled: bool) {
        self.voice.set_enabled(enabled);
        tracing::debug!(enabled, "Announcements toggled");
    }

    /// Whether announcements are currently delivered.
    #[must_use]
    pub fn announcements_enabled(&self) -> bool {
        self.voice.is_enabled()
    }

    /// Starts a fresh session, or resumes a paused one.
    pub fn start(&mut self) -> Transition {
        self.start_at(Instant::now())
    }

    /// [`start`](Self::start) with an explicit clock reading.
    pub fn start_at(&mut self, now: Instant) -> Transition {
        let transition = self.lifecycle.start();
        match transition {
            Transition::Started => {
                self.counter.reset();
                self.aggregator.begin(now);
                self.exercise = ExerciseKind::Unknown;
                self.last_feedback = None;
                tracing::info!("Session started");
                self.voice.say(announce::SESSION_STARTED);
            }
            Transition::Resumed => {
                tracing::info!(reps = self.counter.reps(), "Session resumed");
            }
            _ => {
                tracing::debug!(state = ?self.state(), "Start ignored");
            }
        }
        transition
    }

    /// Pauses a running session.
    pub fn pause(&mut self) -> Transition {
        let transition = self.lifecycle.pause();
        if transition.changed() {
            tracing::info!(reps = self.counter.reps(), "Session paused");
            self.voice.say(announce::SESSION_PAUSED);
        } else {
            tracing::debug!(state = ?self.state(), "Pause ignored");
        }
        transition
    }

    /// Ends a running or paused session and returns its record.
    ///
    /// Returns `None` when there is no session to end, so a duplicate end
    /// signal produces no second record.
    pub fn end(&mut self) -> Option<SessionRecord> {
        self.end_at(Instant::now(), Utc::now())
    }

    /// [`end`](Self::end) with explicit monotonic and wall-clock readings.
    pub fn end_at(&mut self, now: Instant, wall: DateTime<Utc>) -> Option<SessionRecord> {
        if !self.lifecycle.end().changed() {
            tracing::debug!(state = ?self.state(), "End ignored");
            return None;
        }
        let metrics = self.aggregator.finish(now)?;
        let record = SessionRecord::new(metrics, wall);

        tracing::info!(
            session_id = %record.id,
            exercise = %record.metrics.exercise,
            reps = record.metrics.rep_count,
            elapsed_secs = record.metrics.elapsed_secs,
            accuracy = record.accuracy,
            "Session ended"
        );

        if let Some(store) = &self.store {
            if let Err(e) = store.save(record.clone()) {
                tracing::warn!(
                    session_id = %record.id,
                    error = %e,
                    recoverable = e.is_recoverable(),
                    "Failed to persist session"
                );
            }
        }

        self.voice.say(&announce::session_summary(&record.metrics));
        Some(record)
    }

    /// Rescales a model-space pose and processes it.
    ///
    /// Returns `None` if the session is not running.
    pub fn process_frame(&mut self, pose: &Pose) -> Option<FrameOutcome> {
        if !self.lifecycle.accepts_frames() {
            tracing::debug!(state = ?self.state(), "Frame ignored");
            return None;
        }
        let scaled = rescale_pose(pose, &self.geometry);
        self.process_scaled(&scaled)
    }

    /// Processes a pose already in display space.
    ///
    /// Returns `None` if the session is not running.
    pub fn process_scaled(&mut self, pose: &ScaledPose) -> Option<FrameOutcome> {
        if !self.lifecycle.accepts_frames() {
            tracing::debug!(state = ?self.state(), "Frame ignored");
            return None;
        }

        let mut newly_classified = false;
        if !self.exercise.is_known() {
            let kind = self.classifier.classify(pose);
            if kind.is_known() {
                self.exercise = kind;
                self.aggregator.set_exercise(kind);
                newly_classified = true;
                tracing::info!(exercise = %kind, "Exercise classified");
                self.voice.say(&announce::exercise_detected(kind));
            }
        }

        let rep = self.counter.update(pose, self.exercise);
        if let Some(event) = &rep {
            self.aggregator.record_rep(event);
            tracing::info!(exercise = %event.exercise, count = event.count, "Rep completed");
            self.voice.say(&announce::rep_completed(event.count));
        }

        let judgment = self.evaluator.evaluate(pose, self.exercise);
        self.aggregator.record_frame(&judgment);
        self.last_feedback = Some(judgment.feedback);

        Some(FrameOutcome {
            exercise: self.exercise,
            newly_classified,
            rep,
            judgment,
        })
    }

    /// Running statistics measured up to now.
    #[must_use]
    pub fn live_stats(&self) -> LiveStats {
        self.live_stats_at(Instant::now())
    }

    /// [`live_stats`](Self::live_stats) with an explicit clock reading.
    #[must_use]
    pub fn live_stats_at(&self, now: Instant) -> LiveStats {
        LiveStats {
            state: self.state(),
            metrics: self.aggregator.snapshot(now),
            feedback: self.last_feedback,
        }
    }

    /// Applies a voice command.
    pub fn handle_command(&mut self, command: VoiceCommand) -> CommandOutcome {
        self.handle_command_at(command, Instant::now(), Utc::now())
    }

    /// [`handle_command`](Self::handle_command) with explicit clock readings.
    pub fn handle_command_at(
        &mut self,
        command: VoiceCommand,
        now: Instant,
        wall: DateTime<Utc>,
    ) -> CommandOutcome {
        tracing::debug!(command = ?command, "Voice command");
        match command {
            VoiceCommand::Start => CommandOutcome::Lifecycle(self.start_at(now)),
            VoiceCommand::Pause => CommandOutcome::Lifecycle(self.pause()),
            VoiceCommand::End => match self.end_at(now, wall) {
                Some(record) => CommandOutcome::Finished(record),
                None => CommandOutcome::Lifecycle(Transition::Ignored),
            },
            VoiceCommand::RepQuery => {
                self.voice.say(&announce::rep_query(self.counter.reps()));
                CommandOutcome::Replied
            }
            VoiceCommand::Encourage => {
                self.voice.say(announce::ENCOURAGEMENT);
                CommandOutcome::Replied
            }
        }
    }
}
