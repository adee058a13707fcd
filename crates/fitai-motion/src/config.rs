//! Engine thresholds.
//!
//! Every threshold the classifier, form evaluator and rep counter compare
//! against lives here as a named constant and as a field of the matching
//! config struct. Distances are in display units, angles in degrees.
//!
//! # Example
//!
//! ```rust
//! use fitai_motion::config::EngineConfig;
//!
//! let mut cfg = EngineConfig::default();
//! cfg.counter.squat_down_below = 90.0;
//! cfg.validate().expect("tightened squat band is still coherent");
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Classifier defaults
// ---------------------------------------------------------------------------

/// Minimum confidence for every joint the classifier inspects.
pub const CLASSIFY_MIN_CONFIDENCE: f32 = 0.4;

/// Largest shoulder-to-hip vertical gap for which the body counts as flat.
pub const BODY_FLAT_MAX_DELTA: f32 = 120.0;

/// Average elbow angle above which arms count as extended.
pub const PUSH_EXTENDED_ABOVE: f32 = 150.0;

/// Average elbow angle below which arms count as bent.
pub const PUSH_BENT_BELOW: f32 = 120.0;

/// Average knee angle below which a squat is recognised.
pub const SQUAT_KNEE_BELOW: f32 = 140.0;

// ---------------------------------------------------------------------------
// Form defaults
// ---------------------------------------------------------------------------

/// Minimum confidence for a joint to take part in a form measurement.
pub const FORM_MIN_CONFIDENCE: f32 = 0.3;

/// Shoulder-to-hip vertical gap above which hips are sagging.
pub const HIPS_SAG_ABOVE: f32 = 140.0;

/// Average elbow angle below which elbows are too bent.
pub const ELBOW_TOO_BENT_BELOW: f32 = 40.0;

/// Average elbow angle above which arms are locked.
pub const ELBOW_LOCKED_ABOVE: f32 = 170.0;

/// Minimum knee-below-hip gap for an adequate squat.
pub const SQUAT_MIN_DEPTH: f32 = 40.0;

// ---------------------------------------------------------------------------
// Rep counter defaults
// ---------------------------------------------------------------------------

/// Minimum confidence of the vertex joints (elbows, knees) for a transition
/// check.
pub const COUNT_MIN_CONFIDENCE: f32 = 0.3;

/// Average elbow angle that enters the push-up `Down` phase.
pub const PUSH_DOWN_BELOW: f32 = 100.0;

/// Average elbow angle that completes a push-up from `Down`.
pub const PUSH_UP_ABOVE: f32 = 160.0;

/// Average knee angle that enters the squat `Down` phase.
pub const SQUAT_DOWN_BELOW: f32 = 100.0;

/// Average knee angle that completes a squat from `Down`.
pub const SQUAT_UP_ABOVE: f32 = 150.0;

/// Exercise classifier thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Minimum joint confidence (default: 0.4)
    pub min_confidence: f32,
    /// Maximum shoulder/hip vertical gap for a flat body (default: 120)
    pub body_flat_max_delta: f32,
    /// Elbow angle counted as extended (default: 150°)
    pub push_extended_above: f32,
    /// Elbow angle counted as bent (default: 120°)
    pub push_bent_below: f32,
    /// Knee angle that signals a squat (default: 140°)
    pub squat_knee_below: f32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_confidence: CLASSIFY_MIN_CONFIDENCE,
            body_flat_max_delta: BODY_FLAT_MAX_DELTA,
            push_extended_above: PUSH_EXTENDED_ABOVE,
            push_bent_below: PUSH_BENT_BELOW,
            squat_knee_below: SQUAT_KNEE_BELOW,
        }
    }
}

/// Form evaluator thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Minimum joint confidence for a measurement (default: 0.3)
    pub min_confidence: f32,
    /// Torso gap that flags sagging hips (default: 140)
    pub hips_sag_above: f32,
    /// Elbow angle flagged as too bent (default: 40°)
    pub elbow_too_bent_below: f32,
    /// Elbow angle flagged as locked (default: 170°)
    pub elbow_locked_above: f32,
    /// Minimum squat depth (default: 40)
    pub squat_min_depth: f32,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            min_confidence: FORM_MIN_CONFIDENCE,
            hips_sag_above: HIPS_SAG_ABOVE,
            elbow_too_bent_below: ELBOW_TOO_BENT_BELOW,
            elbow_locked_above: ELBOW_LOCKED_ABOVE,
            squat_min_depth: SQUAT_MIN_DEPTH,
        }
    }
}

/// Rep counter hysteresis bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepCounterConfig {
    /// Minimum vertex-joint confidence (default: 0.3)
    pub min_confidence: f32,
    /// Push-up `Down` entry angle (default: 100°)
    pub push_down_below: f32,
    /// Push-up completion angle (default: 160°)
    pub push_up_above: f32,
    /// Squat `Down` entry angle (default: 100°)
    pub squat_down_below: f32,
    /// Squat completion angle (default: 150°)
    pub squat_up_above: f32,
}

impl Default for RepCounterConfig {
    fn default() -> Self {
        Self {
            min_confidence: COUNT_MIN_CONFIDENCE,
            push_down_below: PUSH_DOWN_BELOW,
            push_up_above: PUSH_UP_ABOVE,
            squat_down_below: SQUAT_DOWN_BELOW,
            squat_up_above: SQUAT_UP_ABOVE,
        }
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Exercise classifier thresholds
    pub classifier: ClassifierConfig,
    /// Form evaluator thresholds
    pub form: FormConfig,
    /// Rep counter hysteresis bands
    pub counter: RepCounterConfig,
}

impl EngineConfig {
    /// Load an [`EngineConfig`] from a JSON file at `path`.
    ///
    /// Missing fields take their default value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Parse`] if the JSON is malformed and
    /// [`ConfigError::InvalidValue`] if the thresholds are incoherent.
    pub fn from_json(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: EngineConfig =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Serialize this configuration to pretty-printed JSON and write it to
    /// `path`, creating parent directories if necessary.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the directory cannot be created or the
    /// file cannot be written, and [`ConfigError::Serialize`] if encoding fails.
    pub fn to_json(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validate all fields and return an error describing the first problem
    /// found.
    ///
    /// # Validated invariants
    ///
    /// - Confidence thresholds lie in `[0, 1]`.
    /// - Angles lie in `(0, 180]`.
    /// - Distances are strictly positive.
    /// - Each hysteresis band has `down_below < up_above`.
    /// - Form and classifier angle pairs are ordered (bent below extended).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let c = &self.classifier;
        check_confidence("classifier.min_confidence", c.min_confidence)?;
        check_distance("classifier.body_flat_max_delta", c.body_flat_max_delta)?;
        check_angle("classifier.push_extended_above", c.push_extended_above)?;
        check_angle("classifier.push_bent_below", c.push_bent_below)?;
        check_angle("classifier.squat_knee_below", c.squat_knee_below)?;
        if c.push_bent_below > c.push_extended_above {
            return Err(ConfigError::invalid_value(
                "classifier.push_bent_below",
                "must not exceed push_extended_above",
            ));
        }

        let f = &self.form;
        check_confidence("form.min_confidence", f.min_confidence)?;
        check_distance("form.hips_sag_above", f.hips_sag_above)?;
        check_angle("form.elbow_too_bent_below", f.elbow_too_bent_below)?;
        check_angle("form.elbow_locked_above", f.elbow_locked_above)?;
        check_distance("form.squat_min_depth", f.squat_min_depth)?;
        if f.elbow_too_bent_below >= f.elbow_locked_above {
            return Err(ConfigError::invalid_value(
                "form.elbow_too_bent_below",
                "must be < elbow_locked_above",
            ));
        }

        let r = &self.counter;
        check_confidence("counter.min_confidence", r.min_confidence)?;
        check_angle("counter.push_down_below", r.push_down_below)?;
        check_angle("counter.push_up_above", r.push_up_above)?;
        check_angle("counter.squat_down_below", r.squat_down_below)?;
        check_angle("counter.squat_up_above", r.squat_up_above)?;
        if r.push_down_below >= r.push_up_above {
            return Err(ConfigError::invalid_value(
                "counter.push_down_below",
                "must be < push_up_above",
            ));
        }
        if r.squat_down_below >= r.squat_up_above {
            return Err(ConfigError::invalid_value(
                "counter.squat_down_below",
                "must be < squat_up_above",
            ));
        }

        Ok(())
    }
}

fn check_confidence(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::invalid_value(
            field,
            format!("must be in [0, 1], got {value}"),
        ));
    }
    Ok(())
}

fn check_angle(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !(value > 0.0 && value <= 180.0) {
        return Err(ConfigError::invalid_value(
            field,
            format!("must be in (0, 180], got {value}"),
        ));
    }
    Ok(())
}

fn check_distance(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !(value.is_finite() && value > 0.0) {
        return Err(ConfigError::invalid_value(
            field,
            format!("must be > 0, got {value}"),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_is_valid() {
        EngineConfig::default()
            .validate()
            .expect("default config should be valid");
    }

    #[test]
    fn defaults_match_named_constants() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.classifier.min_confidence, CLASSIFY_MIN_CONFIDENCE);
        assert_eq!(cfg.form.hips_sag_above, HIPS_SAG_ABOVE);
        assert_eq!(cfg.counter.push_up_above, PUSH_UP_ABOVE);
        assert_eq!(cfg.counter.squat_up_above, SQUAT_UP_ABOVE);
    }

    #[test]
    fn json_round_trip() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("nested").join("engine.json");

        let mut original = EngineConfig::default();
        original.counter.squat_down_below = 95.0;
        original.to_json(&path).expect("serialization should succeed");

        let loaded = EngineConfig::from_json(&path).expect("deserialization should succeed");
        assert_eq!(loaded, original);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("engine.json");
        std::fs::write(&path, r#"{ "form": { "squat_min_depth": 55.0 } }"#).unwrap();

        let loaded = EngineConfig::from_json(&path).unwrap();
        assert_eq!(loaded.form.squat_min_depth, 55.0);
        assert_eq!(loaded.form.hips_sag_above, HIPS_SAG_ABOVE);
        assert_eq!(loaded.counter, RepCounterConfig::default());
    }

    #[test]
    fn missing_file_is_io_error() {
        let tmp = tempdir().unwrap();
        let err = EngineConfig::from_json(&tmp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("engine.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = EngineConfig::from_json(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn inverted_band_is_invalid() {
        let mut cfg = EngineConfig::default();
        cfg.counter.push_down_below = 160.0;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("counter.push_down_below"));

        let mut cfg = EngineConfig::default();
        cfg.counter.squat_down_below = 151.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn out_of_range_confidence_is_invalid() {
        let mut cfg = EngineConfig::default();
        cfg.classifier.min_confidence = 1.5;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn non_positive_angle_is_invalid() {
        let mut cfg = EngineConfig::default();
        cfg.form.elbow_too_bent_below = 0.0;
        assert!(cfg.validate().is_err());

        let mut cfg = EngineConfig::default();
        cfg.counter.squat_up_above = 181.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn file_with_invalid_values_is_rejected() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("engine.json");
        std::fs::write(&path, r#"{ "classifier": { "min_confidence": -0.2 } }"#).unwrap();
        let err = EngineConfig::from_json(&path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
