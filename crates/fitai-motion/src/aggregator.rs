//! Session metrics aggregation.
//!
//! Folds per-frame outcomes into running totals. Time is passed in
//! explicitly so callers (and tests) control the clock.

use std::time::Instant;

use fitai_core::{ExerciseKind, FormJudgment, SessionMetrics};

use crate::counter::RepEvent;

/// Accumulates frame outcomes into [`SessionMetrics`].
#[derive(Debug, Clone, Default)]
pub struct SessionAggregator {
    started_at: Option<Instant>,
    metrics: SessionMetrics,
}

impl SessionAggregator {
    /// Creates an aggregator with no session begun.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeroes every counter and records `now` as the start time.
    pub fn begin(&mut self, now: Instant) {
        self.started_at = Some(now);
        self.metrics = SessionMetrics::default();
    }

    /// Returns `true` between [`begin`](Self::begin) and
    /// [`finish`](Self::finish).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.started_at.is_some()
    }

    /// Records the exercise the session locked onto.
    pub fn set_exercise(&mut self, exercise: ExerciseKind) {
        self.metrics.exercise = exercise;
    }

    /// Counts one processed frame, and one good-form frame if acceptable.
    pub fn record_frame(&mut self, judgment: &FormJudgment) {
        self.metrics.total_frames += 1;
        if judgment.acceptable {
            self.metrics.good_form_frames += 1;
        }
    }

    /// Credits a completed repetition. `event.count` is not consulted; the
    /// aggregator keeps its own tally.
    pub fn record_rep(&mut self, event: &RepEvent) {
        self.metrics.rep_count += 1;
        self.metrics.calories_kcal += event.calories_kcal;
    }

    /// Running metrics with elapsed time measured up to `now`.
    ///
    /// Returns zeroed metrics when no session is active.
    #[must_use]
    pub fn snapshot(&self, now: Instant) -> SessionMetrics {
        let mut metrics = self.metrics.clone();
        if let Some(start) = self.started_at {
            metrics.elapsed_secs = now.saturating_duration_since(start).as_secs();
        }
        metrics
    }

    /// Freezes the session at `now` and returns its final metrics.
    ///
    /// Returns `None` if no session is active, so finishing twice yields a
    /// single set of metrics.
    pub fn finish(&mut self, now: Instant) -> Option<SessionMetrics> {
        if !self.is_active() {
            return None;
        }
        let metrics = self.snapshot(now);
        self.started_at = None;
        self.metrics = metrics.clone();
        Some(metrics)
    }
}
