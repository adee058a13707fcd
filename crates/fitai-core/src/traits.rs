//! Collaborator traits for the FitAI engine.
//!
//! The engine consumes poses and produces structured results. Everything it
//! talks to on the way out is behind one of these traits so a session works
//! identically with a real speech synthesizer, a test recorder, or nothing
//! at all.
//!
//! # Traits
//!
//! - [`Announcer`]: Optional sink for short spoken/displayed messages
//! - [`SessionStore`]: Persistence for finished session records

use std::sync::Arc;

use crate::error::{AnnounceError, StorageError};
use crate::types::SessionRecord;

/// Sink for short human-readable messages (exercise detected, rep count,
/// session summaries).
///
/// Implementations must not block the caller for long; the engine invokes
/// the announcer synchronously from frame processing.
///
/// # Example
///
/// ```rust
/// use fitai_core::{Announcer, AnnounceError};
///
/// struct Stdout;
///
/// impl Announcer for Stdout {
///     fn announce(&self, message: &str) -> Result<(), AnnounceError> {
///         println!("{message}");
///         Ok(())
///     }
/// }
/// ```
pub trait Announcer: Send + Sync {
    /// Delivers one message.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink is unavailable or rejects the message.
    fn announce(&self, message: &str) -> Result<(), AnnounceError>;
}

impl<A: Announcer + ?Sized> Announcer for Arc<A> {
    fn announce(&self, message: &str) -> Result<(), AnnounceError> {
        (**self).announce(message)
    }
}

/// Persistence for finished sessions.
///
/// Records are retrievable newest first. Capacity and eviction policy belong
/// to the implementation.
pub trait SessionStore: Send + Sync {
    /// Persists one finished session.
    ///
    /// # Errors
    ///
    /// Returns an error if the record could not be written.
    fn save(&self, record: SessionRecord) -> Result<(), StorageError>;

    /// Returns every stored record, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium could not be read.
    fn all(&self) -> Result<Vec<SessionRecord>, StorageError>;

    /// Returns the most recent record, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium could not be read.
    fn latest(&self) -> Result<Option<SessionRecord>, StorageError> {
        Ok(self.all()?.into_iter().next())
    }

    /// Number of stored records.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium could not be read.
    fn len(&self) -> Result<usize, StorageError> {
        Ok(self.all()?.len())
    }

    /// Returns `true` if no record is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium could not be read.
    fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len()? == 0)
    }
}

impl<S: SessionStore + ?Sized> SessionStore for Arc<S> {
    fn save(&self, record: SessionRecord) -> Result<(), StorageError> {
        (**self).save(record)
    }

    fn all(&self) -> Result<Vec<SessionRecord>, StorageError> {
        (**self).all()
    }

    fn latest(&self) -> Result<Option<SessionRecord>, StorageError> {
        (**self).latest()
    }

    fn len(&self) -> Result<usize, StorageError> {
        (**self).len()
    }
}
