//! Dashboard statistics over stored sessions.

use std::collections::HashMap;

use fitai_core::{format_clock, ExerciseKind, SessionRecord, SessionStore, StorageError};
use serde::{Deserialize, Serialize};

/// Summary statistics for a session history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistorySummary {
    /// Number of sessions summarized.
    pub total_sessions: usize,
    /// Sum of reps across sessions.
    pub total_reps: u64,
    /// Highest accuracy of any session, in [0, 1]. 0 when empty.
    pub best_accuracy: f64,
    /// Mean session duration in seconds. 0 when empty.
    pub mean_duration_secs: f64,
    /// Sum of estimated energy across sessions, in kcal.
    pub total_calories_kcal: f64,
    /// Number of sessions per exercise.
    pub sessions_by_exercise: HashMap<ExerciseKind, usize>,
}

impl HistorySummary {
    /// Summarize a set of records.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_records(records: &[SessionRecord]) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let mut summary = Self {
            total_sessions: records.len(),
            ..Self::default()
        };
        let mut duration_sum = 0_u64;

        for r in records {
            summary.total_reps += u64::from(r.metrics.rep_count);
            summary.best_accuracy = summary.best_accuracy.max(r.accuracy);
            summary.total_calories_kcal += r.metrics.calories_kcal;
            duration_sum += r.metrics.elapsed_secs;
            *summary
                .sessions_by_exercise
                .entry(r.metrics.exercise)
                .or_insert(0) += 1;
        }

        summary.mean_duration_secs = duration_sum as f64 / records.len() as f64;
        summary
    }

    /// Summarize everything a store holds.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn from_store(store: &dyn SessionStore) -> Result<Self, StorageError> {
        Ok(Self::from_records(&store.all()?))
    }

    /// Sessions recorded for one exercise.
    #[must_use]
    pub fn sessions_for(&self, exercise: ExerciseKind) -> usize {
        self.sessions_by_exercise.get(&exercise).copied().unwrap_or(0)
    }

    /// Best accuracy rounded to a whole percent.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn best_accuracy_percent(&self) -> u32 {
        (self.best_accuracy.clamp(0.0, 1.0) * 100.0).round() as u32
    }

    /// Mean duration as `mm:ss`.
    #[must_use]
    pub fn mean_duration_clock(&self) -> String {
        format_duration(self.mean_duration_secs)
    }
}

/// Formats a duration in seconds as `mm:ss`, rounding to the nearest second.
/// Negative or non-finite input formats as `00:00`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_duration(secs: f64) -> String {
    let whole = if secs.is_finite() && secs > 0.0 {
        secs.round() as u64
    } else {
        0
    };
    format_clock(whole)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use fitai_core::SessionMetrics;

    fn record(
        exercise: ExerciseKind,
        reps: u32,
        secs: u64,
        good: u64,
        total: u64,
    ) -> SessionRecord {
        SessionRecord::new(
            SessionMetrics {
                exercise,
                rep_count: reps,
                elapsed_secs: secs,
                good_form_frames: good,
                total_frames: total,
                calories_kcal: f64::from(reps) * exercise.calories_per_rep(),
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_empty_summary() {
        let summary = HistorySummary::from_records(&[]);
        assert_eq!(summary.total_sessions, 0);
        assert_eq!(summary.best_accuracy, 0.0);
        assert_eq!(summary.mean_duration_clock(), "00:00");
    }

    #[test]
    fn test_summary_totals() {
        let records = [
            record(ExerciseKind::Squat, 10, 60, 8, 10),
            record(ExerciseKind::PushUp, 5, 90, 9, 10),
            record(ExerciseKind::Squat, 15, 121, 5, 10),
        ];
        let summary = HistorySummary::from_records(&records);
        assert_eq!(summary.total_sessions, 3);
        assert_eq!(summary.total_reps, 30);
        assert!((summary.best_accuracy - 0.9).abs() < 1e-12);
        assert_eq!(summary.best_accuracy_percent(), 90);
        assert!((summary.mean_duration_secs - 271.0 / 3.0).abs() < 1e-9);
        assert_eq!(summary.mean_duration_clock(), "01:30");
        assert!((summary.total_calories_kcal - (25.0 * 0.32 + 5.0 * 0.29)).abs() < 1e-9);
        assert_eq!(summary.sessions_for(ExerciseKind::Squat), 2);
        assert_eq!(summary.sessions_for(ExerciseKind::PushUp), 1);
        assert_eq!(summary.sessions_for(ExerciseKind::Unknown), 0);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "00:00");
        assert_eq!(format_duration(59.6), "01:00");
        assert_eq!(format_duration(754.0), "12:34");
        assert_eq!(format_duration(-5.0), "00:00");
        assert_eq!(format_duration(f64::NAN), "00:00");
    }

    #[test]
    fn test_summary_serializes() {
        let summary = HistorySummary::from_records(&[record(ExerciseKind::Squat, 3, 30, 1, 1)]);
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"squat\":1"));
        let back: HistorySummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }
}
