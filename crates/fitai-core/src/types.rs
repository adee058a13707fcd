//! Core data types for the FitAI motion analysis engine.
//!
//! This module defines the data model shared by the classifier, the form
//! evaluator, the rep counter and the session aggregator.
//!
//! # Type Categories
//!
//! - **Pose Types**: [`Pose`], [`ScaledPose`], [`Keypoint`], [`KeypointType`]
//! - **Frame Types**: [`FrameSize`], [`FrameGeometry`]
//! - **Exercise Types**: [`ExerciseKind`], [`FormFeedback`], [`FormJudgment`]
//! - **Session Types**: [`SessionMetrics`], [`SessionRecord`], [`SessionId`]
//! - **Common Types**: [`Confidence`]

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::MAX_KEYPOINTS;

// =============================================================================
// Common Types
// =============================================================================

/// Confidence score in the range [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f32", into = "f32"))]
pub struct Confidence(f32);

impl Confidence {
    /// Creates a new confidence value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not in the range [0.0, 1.0].
    pub fn new(value: f32) -> CoreResult<Self> {
        if !(0.0..=1.0).contains(&value) {
            return Err(CoreError::validation(format!(
                "Confidence must be in [0.0, 1.0], got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Creates a confidence value from raw model output, clamping into
    /// [0.0, 1.0]. `NaN` maps to 0.0.
    #[must_use]
    pub fn saturating(value: f32) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the raw confidence value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.0
    }

    /// Returns `true` if the confidence meets or exceeds the given threshold.
    #[must_use]
    pub fn exceeds(&self, threshold: f32) -> bool {
        self.0 >= threshold
    }

    /// Maximum confidence (1.0).
    pub const MAX: Self = Self(1.0);

    /// Minimum confidence (0.0).
    pub const MIN: Self = Self(0.0);
}

impl Default for Confidence {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<f32> for Confidence {
    type Error = CoreError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Confidence> for f32 {
    fn from(confidence: Confidence) -> Self {
        confidence.0
    }
}

// =============================================================================
// Pose Types
// =============================================================================

/// Types of body keypoints following the 17-joint COCO layout emitted by
/// single-person pose models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum KeypointType {
    /// Nose
    Nose = 0,
    /// Left eye
    LeftEye = 1,
    /// Right eye
    RightEye = 2,
    /// Left ear
    LeftEar = 3,
    /// Right ear
    RightEar = 4,
    /// Left shoulder
    LeftShoulder = 5,
    /// Right shoulder
    RightShoulder = 6,
    /// Left elbow
    LeftElbow = 7,
    /// Right elbow
    RightElbow = 8,
    /// Left wrist
    LeftWrist = 9,
    /// Right wrist
    RightWrist = 10,
    /// Left hip
    LeftHip = 11,
    /// Right hip
    RightHip = 12,
    /// Left knee
    LeftKnee = 13,
    /// Right knee
    RightKnee = 14,
    /// Left ankle
    LeftAnkle = 15,
    /// Right ankle
    RightAnkle = 16,
}

impl KeypointType {
    /// Returns all keypoint types in index order.
    #[must_use]
    pub fn all() -> &'static [Self; MAX_KEYPOINTS] {
        &[
            Self::Nose,
            Self::LeftEye,
            Self::RightEye,
            Self::LeftEar,
            Self::RightEar,
            Self::LeftShoulder,
            Self::RightShoulder,
            Self::LeftElbow,
            Self::RightElbow,
            Self::LeftWrist,
            Self::RightWrist,
            Self::LeftHip,
            Self::RightHip,
            Self::LeftKnee,
            Self::RightKnee,
            Self::LeftAnkle,
            Self::RightAnkle,
        ]
    }

    /// Position of this joint in a [`Pose`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the keypoint name as a string.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftEye => "left_eye",
            Self::RightEye => "right_eye",
            Self::LeftEar => "left_ear",
            Self::RightEar => "right_ear",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
        }
    }
}

impl TryFrom<u8> for KeypointType {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::all()
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| CoreError::validation(format!("Invalid keypoint type: {value}")))
    }
}

/// A single body keypoint: 2D position plus detection confidence.
///
/// Which joint a keypoint describes is given by its slot in a [`Pose`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Keypoint {
    /// X coordinate
    pub x: f32,
    /// Y coordinate (grows downwards, image convention)
    pub y: f32,
    /// Detection confidence
    pub confidence: Confidence,
}

impl Keypoint {
    /// Creates a new keypoint.
    #[must_use]
    pub fn new(x: f32, y: f32, confidence: Confidence) -> Self {
        Self { x, y, confidence }
    }

    /// Placeholder for a joint the pose model did not report: origin, zero
    /// confidence.
    #[must_use]
    pub fn missing() -> Self {
        Self::default()
    }

    /// Returns `true` if the confidence meets the given threshold.
    #[must_use]
    pub fn is_confident(&self, threshold: f32) -> bool {
        self.confidence.exceeds(threshold)
    }

    /// Returns the 2D position as a tuple.
    #[must_use]
    pub fn position_2d(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

/// One instant's joint observations in model (source) coordinate space.
///
/// Every anatomical slot is always populated. Joints the model did not report
/// hold [`Keypoint::missing`], so consumers never index out of bounds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pose {
    keypoints: [Keypoint; MAX_KEYPOINTS],
}

impl Pose {
    /// Creates a pose with every joint missing.
    #[must_use]
    pub fn new() -> Self {
        Self {
            keypoints: [Keypoint::missing(); MAX_KEYPOINTS],
        }
    }

    /// Builds a pose from model output ordered by COCO index.
    ///
    /// Short inputs leave the remaining joints missing; entries beyond
    /// [`MAX_KEYPOINTS`] are ignored.
    #[must_use]
    pub fn from_slice(keypoints: &[Keypoint]) -> Self {
        let mut pose = Self::new();
        for (slot, kp) in pose.keypoints.iter_mut().zip(keypoints) {
            *slot = *kp;
        }
        pose
    }

    /// Sets a keypoint.
    pub fn set(&mut self, keypoint_type: KeypointType, keypoint: Keypoint) {
        self.keypoints[keypoint_type.index()] = keypoint;
    }

    /// Builder-style variant of [`Pose::set`].
    #[must_use]
    pub fn with(mut self, keypoint_type: KeypointType, keypoint: Keypoint) -> Self {
        self.set(keypoint_type, keypoint);
        self
    }

    /// Gets a keypoint by type.
    #[must_use]
    pub fn get(&self, keypoint_type: KeypointType) -> Keypoint {
        self.keypoints[keypoint_type.index()]
    }

    /// Returns all keypoints in index order.
    #[must_use]
    pub fn keypoints(&self) -> &[Keypoint; MAX_KEYPOINTS] {
        &self.keypoints
    }

    /// Returns `true` if at least one joint carries non-zero confidence.
    #[must_use]
    pub fn has_person(&self) -> bool {
        self.keypoints.iter().any(|kp| kp.confidence.value() > 0.0)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::new()
    }
}

/// A [`Pose`] remapped into display (target) coordinate space.
///
/// All thresholds in the engine are expressed in display units, so the
/// classifier, evaluator and counter accept only this type.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScaledPose(Pose);

impl ScaledPose {
    /// Wraps a pose whose coordinates are already in display space.
    #[must_use]
    pub fn from_display_space(pose: Pose) -> Self {
        Self(pose)
    }

    /// Gets a keypoint by type.
    #[must_use]
    pub fn get(&self, keypoint_type: KeypointType) -> Keypoint {
        self.0.get(keypoint_type)
    }

    /// Returns `true` if at least one joint carries non-zero confidence.
    #[must_use]
    pub fn has_person(&self) -> bool {
        self.0.has_person()
    }

    /// Borrows the underlying pose.
    #[must_use]
    pub fn as_pose(&self) -> &Pose {
        &self.0
    }

    /// Returns `true` if every listed joint meets the threshold.
    #[must_use]
    pub fn all_confident(&self, joints: &[KeypointType], threshold: f32) -> bool {
        joints.iter().all(|&j| self.get(j).is_confident(threshold))
    }
}

// =============================================================================
// Frame Types
// =============================================================================

/// Width and height of a coordinate space (model input or display surface).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameSize {
    width: f32,
    height: f32,
}

impl FrameSize {
    /// Creates a new frame size.
    ///
    /// # Errors
    ///
    /// Returns an error if either extent is non-finite or not positive.
    pub fn new(width: f32, height: f32) -> CoreResult<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(CoreError::validation(format!(
                "Frame extents must be positive and finite, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Frame width.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Frame height.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }
}

/// Source/target extents used to rescale every pose of a session.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameGeometry {
    /// Model-output coordinate space
    pub source: FrameSize,
    /// Display coordinate space
    pub target: FrameSize,
}

impl FrameGeometry {
    /// Creates a new geometry.
    #[must_use]
    pub fn new(source: FrameSize, target: FrameSize) -> Self {
        Self { source, target }
    }

    /// Geometry where model and display space coincide.
    #[must_use]
    pub fn identity(size: FrameSize) -> Self {
        Self::new(size, size)
    }

    /// Independent `(x, y)` scale factors, `target / source`.
    #[must_use]
    pub fn scale(&self) -> (f32, f32) {
        (
            self.target.width / self.source.width,
            self.target.height / self.source.height,
        )
    }
}

// =============================================================================
// Exercise Types
// =============================================================================

/// Energy estimate per completed push-up, in kcal.
pub const PUSH_UP_KCAL_PER_REP: f64 = 0.29;

/// Energy estimate per completed squat, in kcal.
pub const SQUAT_KCAL_PER_REP: f64 = 0.32;

/// The exercise a session is tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ExerciseKind {
    /// Push motion: elbows flex and extend with the body roughly horizontal
    PushUp,
    /// Squat motion: knees flex and extend
    Squat,
    /// Not yet classified
    #[default]
    Unknown,
}

impl ExerciseKind {
    /// Returns the exercise name as spoken and stored.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::PushUp => "pushup",
            Self::Squat => "squat",
            Self::Unknown => "unknown",
        }
    }

    /// Calories credited for one completed repetition.
    #[must_use]
    pub fn calories_per_rep(&self) -> f64 {
        match self {
            Self::PushUp => PUSH_UP_KCAL_PER_REP,
            Self::Squat => SQUAT_KCAL_PER_REP,
            Self::Unknown => 0.0,
        }
    }

    /// Returns `true` for any classified exercise.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl std::fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Coaching feedback produced by the form evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FormFeedback {
    /// No joint carries any confidence
    NoPerson,
    /// Push-up: hips too far from the shoulder line
    HipsSagging,
    /// Push-up: elbows collapsed at the bottom
    ElbowsTooBent,
    /// Push-up: elbows locked straight
    ArmsLocked,
    /// Push-up within all thresholds
    GoodPushUp,
    /// Squat: vertical hip-to-knee gap under the depth threshold
    NotDeepEnough,
    /// Squat within threshold
    GoodSquat,
    /// Exercise unknown or the measurement was not possible this frame
    Neutral,
}

impl FormFeedback {
    /// Human-readable message. Never empty.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::NoPerson => "No person detected",
            Self::HipsSagging => "Tuck your hips down, keep a straight line.",
            Self::ElbowsTooBent => "Elbows too bent at bottom, keep wrists stable.",
            Self::ArmsLocked => "Arms fully straight, ensure full range and controlled tempo.",
            Self::GoodPushUp => "Good form, keep going!",
            Self::NotDeepEnough => "Not low enough, try a deeper squat.",
            Self::GoodSquat => "Good squat form!",
            Self::Neutral => "Form detected",
        }
    }

    /// Whether this feedback counts as acceptable form.
    #[must_use]
    pub fn is_acceptable(&self) -> bool {
        matches!(self, Self::GoodPushUp | Self::GoodSquat | Self::Neutral)
    }
}

/// Form quality judgment for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormJudgment {
    /// Whether the frame counts towards good-form accuracy
    pub acceptable: bool,
    /// Feedback shown or spoken to the user
    pub feedback: FormFeedback,
}

impl FormJudgment {
    /// Builds a judgment whose acceptability follows from the feedback.
    #[must_use]
    pub fn from_feedback(feedback: FormFeedback) -> Self {
        Self {
            acceptable: feedback.is_acceptable(),
            feedback,
        }
    }

    /// The feedback message.
    #[must_use]
    pub fn reason(&self) -> &'static str {
        self.feedback.message()
    }
}

// =============================================================================
// Session Types
// =============================================================================

/// Formats whole seconds as `mm:ss`.
#[must_use]
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Aggregate metrics of one tracking session.
///
/// Invariant: `good_form_frames <= total_frames`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionMetrics {
    /// Exercise the session locked onto (or `Unknown`)
    pub exercise: ExerciseKind,
    /// Completed repetitions
    pub rep_count: u32,
    /// Whole seconds between start and end
    pub elapsed_secs: u64,
    /// Frames judged as acceptable form
    pub good_form_frames: u64,
    /// Frames processed
    pub total_frames: u64,
    /// Estimated energy expenditure in kcal
    pub calories_kcal: f64,
}

impl SessionMetrics {
    /// Fraction of frames with acceptable form, in [0.0, 1.0].
    ///
    /// Defined as 1.0 when no frame has been processed.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn accuracy(&self) -> f64 {
        if self.total_frames == 0 {
            return 1.0;
        }
        (self.good_form_frames as f64 / self.total_frames as f64).clamp(0.0, 1.0)
    }

    /// Accuracy rounded to a whole percent.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn accuracy_percent(&self) -> u32 {
        (self.accuracy() * 100.0).round() as u32
    }

    /// Elapsed time as `mm:ss`.
    #[must_use]
    pub fn elapsed_clock(&self) -> String {
        format_clock(self.elapsed_secs)
    }
}

/// Unique identifier for a stored session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new random session ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Frozen summary of a finished session, handed to the persistence
/// collaborator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionRecord {
    /// Record identifier
    pub id: SessionId,
    /// Wall-clock time the session ended
    pub ended_at: DateTime<Utc>,
    /// Final metrics
    pub metrics: SessionMetrics,
    /// Final accuracy, cached for readers that only need the headline number
    pub accuracy: f64,
}

impl SessionRecord {
    /// Freezes metrics into a record stamped with `ended_at`.
    #[must_use]
    pub fn new(metrics: SessionMetrics, ended_at: DateTime<Utc>) -> Self {
        let accuracy = metrics.accuracy();
        Self {
            id: SessionId::new(),
            ended_at,
            metrics,
            accuracy,
        }
    }
}
