//! Named joint groups and the paired measurements built from them.

use fitai_core::geometry::{joint_angle, mean_pair, mean_y};
use fitai_core::{KeypointType, ScaledPose};

use fitai_core::KeypointType::{
    LeftAnkle, LeftElbow, LeftHip, LeftKnee, LeftShoulder, LeftWrist, RightAnkle, RightElbow,
    RightHip, RightKnee, RightShoulder, RightWrist,
};

pub(crate) const ELBOWS: [KeypointType; 2] = [LeftElbow, RightElbow];
pub(crate) const KNEES: [KeypointType; 2] = [LeftKnee, RightKnee];

pub(crate) const SHOULDERS_AND_ELBOWS: [KeypointType; 4] =
    [LeftShoulder, RightShoulder, LeftElbow, RightElbow];
pub(crate) const HIPS_AND_KNEES: [KeypointType; 4] = [LeftHip, RightHip, LeftKnee, RightKnee];
pub(crate) const TORSO: [KeypointType; 4] = [LeftShoulder, RightShoulder, LeftHip, RightHip];
pub(crate) const ARMS: [KeypointType; 6] = [
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
];

/// Mean of the left and right shoulder–elbow–wrist angles.
pub(crate) fn average_elbow_angle(pose: &ScaledPose) -> Option<f32> {
    mean_pair(
        joint_angle(pose, LeftShoulder, LeftElbow, LeftWrist),
        joint_angle(pose, RightShoulder, RightElbow, RightWrist),
    )
}

/// Mean of the left and right hip–knee–ankle angles.
pub(crate) fn average_knee_angle(pose: &ScaledPose) -> Option<f32> {
    mean_pair(
        joint_angle(pose, LeftHip, LeftKnee, LeftAnkle),
        joint_angle(pose, RightHip, RightKnee, RightAnkle),
    )
}

/// Absolute vertical gap between the shoulder line and the hip line.
pub(crate) fn torso_vertical_gap(pose: &ScaledPose) -> f32 {
    (mean_y(pose, LeftShoulder, RightShoulder) - mean_y(pose, LeftHip, RightHip)).abs()
}

/// Signed vertical gap from the hip line down to the knee line.
pub(crate) fn knee_below_hip(pose: &ScaledPose) -> f32 {
    mean_y(pose, LeftKnee, RightKnee) - mean_y(pose, LeftHip, RightHip)
}
