//! Announcement wording and delivery.

use std::sync::Arc;

use fitai_core::{Announcer, ExerciseKind, SessionMetrics};

/// Spoken when a fresh session begins.
pub const SESSION_STARTED: &str = "Session started. I'll track your form.";

/// Spoken when a session is paused.
pub const SESSION_PAUSED: &str = "Session paused.";

/// Reply to a user who says they cannot continue.
pub const ENCOURAGEMENT: &str = "Take a break. You're doing great!";

/// Announcement for the first successful classification.
#[must_use]
pub fn exercise_detected(exercise: ExerciseKind) -> String {
    format!("Detected {exercise}")
}

/// Announcement for a completed rep: the bare count.
#[must_use]
pub fn rep_completed(count: u32) -> String {
    count.to_string()
}

/// Reply to a rep-count query.
#[must_use]
pub fn rep_query(count: u32) -> String {
    format!("You've done {count} reps")
}

/// End-of-session summary.
#[must_use]
pub fn session_summary(metrics: &SessionMetrics) -> String {
    let unit = if metrics.exercise.is_known() {
        metrics.exercise.name()
    } else {
        "reps"
    };
    format!(
        "Session ended. You did {} {} in {} seconds. Calories burned {:.1}. \
         Form accuracy {} percent.",
        metrics.rep_count,
        unit,
        metrics.elapsed_secs,
        metrics.calories_kcal,
        metrics.accuracy_percent(),
    )
}

/// Optional announcer plus the mute switch.
///
/// Delivery failures are logged and swallowed; a session never stops because
/// the sink is missing or broken.
#[derive(Clone)]
pub(crate) struct Voice {
    sink: Option<Arc<dyn Announcer>>,
    enabled: bool,
}

impl Voice {
    pub(crate) fn new(sink: Option<Arc<dyn Announcer>>) -> Self {
        Self {
            sink,
            enabled: true,
        }
    }

    pub(crate) fn set_sink(&mut self, sink: Arc<dyn Announcer>) {
        self.sink = Some(sink);
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn say(&self, message: &str) {
        if !self.enabled {
            return;
        }
        let Some(sink) = &self.sink else {
            return;
        };
        if let Err(e) = sink.announce(message) {
            tracing::warn!(
                error = %e,
                recoverable = e.is_recoverable(),
                "Announcer failed to deliver message"
            );
        }
    }
}

impl std::fmt::Debug for Voice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Voice")
            .field("has_sink", &self.sink.is_some())
            .field("enabled", &self.enabled)
            .finish()
    }
}
