//! Error types for the FitAI motion analysis engine.
//!
//! This module provides error handling using [`thiserror`] for automatic
//! `Display` and `Error` trait implementations.
//!
//! # Error Hierarchy
//!
//! - [`CoreError`]: Top-level error type that encompasses all subsystem errors
//! - [`StorageError`]: Errors from session history persistence
//! - [`AnnounceError`]: Errors from the optional announcer sink
//!
//! Per-frame processing never produces any of these. Missing joints and
//! degenerate geometry are modeled as `Option` values and skipped locally;
//! errors only arise at construction time (invalid confidence, invalid frame
//! extents, invalid configuration) and at the collaborator boundary.
//!
//! # Example
//!
//! ```rust
//! use fitai_core::error::{CoreError, StorageError};
//!
//! fn save() -> Result<(), CoreError> {
//!     Err(StorageError::serialization("unexpected end of input").into())
//! }
//!
//! assert!(save().is_err());
//! ```

use thiserror::Error;

/// A specialized `Result` type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Top-level error type for the FitAI engine.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CoreError {
    /// Session history storage error
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Announcer sink error
    #[error("Announcer error: {0}")]
    Announce(#[from] AnnounceError),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
    },

    /// Validation error for input data
    #[error("Validation error: {message}")]
    Validation {
        /// Description of what validation failed
        message: String,
    },
}

impl CoreError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates a new validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Returns `true` if this error is recoverable.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Storage(e) => e.is_recoverable(),
            Self::Announce(e) => e.is_recoverable(),
            Self::Configuration { .. } | Self::Validation { .. } => false,
        }
    }
}

/// Errors related to session history persistence.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StorageError {
    /// Underlying I/O failure (file-backed stores)
    #[error("I/O error on '{path}': {source}")]
    Io {
        /// Path that was being read or written
        path: String,
        /// Source I/O error
        #[source]
        source: std::io::Error,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Description of the serialization error
        message: String,
    },

    /// Store is not reachable (e.g. backing medium detached)
    #[error("Store unavailable: {message}")]
    Unavailable {
        /// Description of why the store is unavailable
        message: String,
    },
}

impl StorageError {
    /// Creates a new serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Returns `true` if this error is recoverable.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::Io { .. } | Self::Unavailable { .. } => true,
            Self::Serialization { .. } => false,
        }
    }
}

/// Errors raised by an [`Announcer`](crate::traits::Announcer) implementation.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AnnounceError {
    /// The output device (speech synthesizer, speaker) is not available
    #[error("Announcer unavailable: {reason}")]
    Unavailable {
        /// Reason the sink could not accept the message
        reason: String,
    },
}

impl AnnounceError {
    /// Creates a new unavailable error.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Returns `true` if this error is recoverable.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::Unavailable { .. } => true,
        }
    }
}
