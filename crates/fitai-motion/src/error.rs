//! Error types for the motion engine.
//!
//! Frame processing is infallible; the only fallible surface is engine
//! configuration (loading, saving, validating thresholds).

use std::path::PathBuf;

use fitai_core::CoreError;
use thiserror::Error;

/// Errors produced when loading or validating an [`EngineConfig`].
///
/// [`EngineConfig`]: crate::config::EngineConfig
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A field has an invalid value.
    #[error("Invalid value for `{field}`: {reason}")]
    InvalidValue {
        /// Dotted path of the field, e.g. `counter.push_down_below`.
        field: &'static str,
        /// Human-readable reason.
        reason: String,
    },

    /// A configuration file could not be read or written.
    #[error("Cannot access config file `{path}`: {source}")]
    Io {
        /// Path that was being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration file contains malformed JSON.
    #[error("Cannot parse config file `{path}`: {source}")]
    Parse {
        /// Path that was being parsed.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A configuration could not be serialized to JSON.
    #[error("Cannot serialize config for `{path}`: {source}")]
    Serialize {
        /// Destination path.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    /// Construct a [`ConfigError::InvalidValue`].
    pub fn invalid_value<S: Into<String>>(field: &'static str, reason: S) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}

impl From<ConfigError> for CoreError {
    fn from(err: ConfigError) -> Self {
        CoreError::configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_names_the_field() {
        let err = ConfigError::invalid_value("form.hips_sag_above", "must be > 0");
        let msg = err.to_string();
        assert!(msg.contains("form.hips_sag_above"));
        assert!(msg.contains("must be > 0"));
    }

    #[test]
    fn converts_into_core_configuration_error() {
        let core: CoreError = ConfigError::invalid_value("x", "bad").into();
        assert!(matches!(core, CoreError::Configuration { .. }));
        assert!(!core.is_recoverable());
    }

    #[test]
    fn serialize_failure_is_not_reported_as_parse() {
        let source = serde_json::from_str::<u8>("oops").unwrap_err();
        let err = ConfigError::Serialize {
            path: PathBuf::from("engine.json"),
            source,
        };
        assert!(err.to_string().starts_with("Cannot serialize config"));
        assert!(!matches!(err, ConfigError::Parse { .. }));
    }
}
