//! Session history for FitAI.
//!
//! Finished sessions are kept newest first in a capped store; once the cap
//! is reached the oldest session is evicted. Two backends implement
//! [`SessionStore`](fitai_core::SessionStore):
//!
//! - [`InMemorySessionStore`]: a lock-protected ring buffer.
//! - [`JsonFileSessionStore`]: a JSON array on disk. A missing or corrupt
//!   file reads as an empty history.
//!
//! [`HistorySummary`] derives dashboard totals from any set of records.
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use fitai_core::{ExerciseKind, SessionMetrics, SessionRecord, SessionStore};
//! use fitai_history::{HistorySummary, InMemorySessionStore};
//!
//! let store = InMemorySessionStore::new(50);
//! let metrics = SessionMetrics {
//!     exercise: ExerciseKind::Squat,
//!     rep_count: 12,
//!     elapsed_secs: 95,
//!     ..SessionMetrics::default()
//! };
//! store.save(SessionRecord::new(metrics, Utc::now())).unwrap();
//!
//! let summary = HistorySummary::from_store(&store).unwrap();
//! assert_eq!(summary.total_reps, 12);
//! assert_eq!(summary.mean_duration_clock(), "01:35");
//! ```

#![forbid(unsafe_code)]

pub mod file;
pub mod store;
pub mod summary;

pub use file::JsonFileSessionStore;
pub use store::{InMemorySessionStore, DEFAULT_CAPACITY};
pub use summary::{format_duration, HistorySummary};
