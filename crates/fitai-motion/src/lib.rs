//! Exercise tracking from 2D pose keypoints.
//!
//! Turns a live stream of poses into exercise telemetry: which exercise is
//! being performed, how many repetitions are done, whether form is
//! acceptable, and session-level metrics.
//!
//! # Architecture
//!
//! Every frame passes through four stages, in this order:
//!
//! 1. **Classification** ([`ExerciseClassifier`]): polled while the exercise
//!    is still unknown; the first match locks for the rest of the session.
//! 2. **Counting** ([`RepCounter`]): a hysteresis state machine per exercise
//!    that emits a [`RepEvent`] on each completed down-then-up cycle.
//! 3. **Evaluation** ([`FormEvaluator`]): a stateless per-frame judgment with
//!    a message that is never empty.
//! 4. **Aggregation** ([`SessionAggregator`]): running totals frozen into a
//!    [`SessionRecord`](fitai_core::SessionRecord) at the end.
//!
//! [`MotionSession`] owns all four plus the [`SessionLifecycle`], and talks to
//! the optional [`Announcer`](fitai_core::Announcer) and
//! [`SessionStore`](fitai_core::SessionStore) collaborators.
//!
//! Thresholds are configured through [`EngineConfig`].

#![forbid(unsafe_code)]

pub mod aggregator;
pub mod announce;
pub mod classifier;
pub mod config;
pub mod counter;
pub mod error;
pub mod form;
mod joints;
pub mod lifecycle;
pub mod session;
pub mod voice;

#[cfg(test)]
mod fixtures;

pub use aggregator::SessionAggregator;
pub use classifier::ExerciseClassifier;
pub use config::{ClassifierConfig, EngineConfig, FormConfig, RepCounterConfig};
pub use counter::{CyclePhase, CycleState, RepCounter, RepEvent};
pub use error::ConfigError;
pub use form::FormEvaluator;
pub use lifecycle::{SessionLifecycle, SessionState, Transition};
pub use session::{CommandOutcome, FrameOutcome, LiveStats, MotionSession};
pub use voice::VoiceCommand;
