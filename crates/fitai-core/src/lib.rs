//! # FitAI Core
//!
//! Core types, geometry, and collaborator traits for the FitAI motion
//! analysis engine.
//!
//! This crate provides the building blocks shared by the motion and history
//! crates:
//!
//! - **Core Data Types**: [`Pose`], [`ScaledPose`], [`Keypoint`],
//!   [`ExerciseKind`], [`FormJudgment`], [`SessionMetrics`] and
//!   [`SessionRecord`].
//!
//! - **Geometry**: joint angles and model-to-display rescaling via the
//!   [`geometry`] module.
//!
//! - **Error Types**: error handling via the [`error`] module.
//!
//! - **Traits**: the [`Announcer`] and [`SessionStore`] collaborator seams.
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialization/deserialization via serde
//!
//! ## Example
//!
//! ```rust
//! use fitai_core::{Confidence, Keypoint, KeypointType, Pose};
//! use fitai_core::geometry::angle_at;
//!
//! let pose = Pose::new()
//!     .with(KeypointType::LeftShoulder, Keypoint::new(0.0, 0.0, Confidence::MAX))
//!     .with(KeypointType::LeftElbow, Keypoint::new(1.0, 0.0, Confidence::MAX))
//!     .with(KeypointType::LeftWrist, Keypoint::new(1.0, 1.0, Confidence::MAX));
//!
//! let angle = angle_at(
//!     pose.get(KeypointType::LeftShoulder).position_2d(),
//!     pose.get(KeypointType::LeftElbow).position_2d(),
//!     pose.get(KeypointType::LeftWrist).position_2d(),
//! );
//! assert!((angle.unwrap() - 90.0).abs() < 1e-3);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod geometry;
pub mod traits;
pub mod types;

// Re-export commonly used types at the crate root
pub use error::{AnnounceError, CoreError, CoreResult, StorageError};
pub use traits::{Announcer, SessionStore};
pub use types::{
    // Common types
    Confidence,
    // Exercise types
    ExerciseKind, FormFeedback, FormJudgment,
    // Frame types
    FrameGeometry, FrameSize,
    // Pose types
    Keypoint, KeypointType, Pose, ScaledPose,
    // Session types
    SessionId, SessionMetrics, SessionRecord,
    format_clock, PUSH_UP_KCAL_PER_REP, SQUAT_KCAL_PER_REP,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of joints in a pose (COCO layout)
pub const MAX_KEYPOINTS: usize = 17;

/// Prelude module for convenient imports.
///
/// ```rust
/// use fitai_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::traits::{Announcer, SessionStore};
    pub use crate::types::{
        Confidence, ExerciseKind, FormFeedback, FormJudgment, FrameGeometry, FrameSize, Keypoint,
        KeypointType, Pose, ScaledPose, SessionMetrics, SessionRecord,
    };
}
