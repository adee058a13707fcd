//! Synthetic poses with exact joint angles for unit tests.

use fitai_core::{Confidence, Keypoint, KeypointType, Pose, ScaledPose};

use fitai_core::KeypointType::*;

fn kp(x: f32, y: f32, c: f32) -> Keypoint {
    Keypoint::new(x, y, Confidence::new(c).unwrap())
}

/// Point at `len` from `origin`, rotated `angle_deg` away from straight up.
fn limb_end(origin: (f32, f32), angle_deg: f32, len: f32) -> (f32, f32) {
    let rad = angle_deg.to_radians();
    (origin.0 + len * rad.sin(), origin.1 - len * rad.cos())
}

/// Horizontal plank with both elbows at `elbow_angle`.
pub(crate) fn push_pose(elbow_angle: f32, conf: f32) -> ScaledPose {
    let mut pose = Pose::new();
    for (shoulder, elbow, wrist, hip, knee, ankle, dx) in [
        (LeftShoulder, LeftElbow, LeftWrist, LeftHip, LeftKnee, LeftAnkle, 0.0),
        (RightShoulder, RightElbow, RightWrist, RightHip, RightKnee, RightAnkle, 4.0),
    ] {
        let e = (100.0 + dx, 300.0);
        let w = limb_end(e, elbow_angle, 100.0);
        pose.set(shoulder, kp(100.0 + dx, 200.0, conf));
        pose.set(elbow, kp(e.0, e.1, conf));
        pose.set(wrist, kp(w.0, w.1, conf));
        pose.set(hip, kp(300.0 + dx, 230.0, conf));
        pose.set(knee, kp(450.0 + dx, 250.0, conf));
        pose.set(ankle, kp(600.0 + dx, 270.0, conf));
    }
    ScaledPose::from_display_space(pose)
}

/// Upright stance with both knees at `knee_angle` and arms hanging.
pub(crate) fn squat_pose(knee_angle: f32, conf: f32) -> ScaledPose {
    let mut pose = Pose::new();
    for (shoulder, elbow, wrist, hip, knee, ankle, x) in [
        (LeftShoulder, LeftElbow, LeftWrist, LeftHip, LeftKnee, LeftAnkle, 200.0),
        (RightShoulder, RightElbow, RightWrist, RightHip, RightKnee, RightAnkle, 260.0),
    ] {
        let k = (x, 300.0);
        let a = limb_end(k, knee_angle, 100.0);
        pose.set(shoulder, kp(x, 0.0, conf));
        pose.set(elbow, kp(x, 100.0, conf));
        pose.set(wrist, kp(x + 10.0, 190.0, conf));
        pose.set(hip, kp(x, 200.0, conf));
        pose.set(knee, kp(k.0, k.1, conf));
        pose.set(ankle, kp(a.0, a.1, conf));
    }
    ScaledPose::from_display_space(pose)
}

/// Replaces the confidence of the given joints.
pub(crate) fn with_confidence(pose: &ScaledPose, joints: &[KeypointType], conf: f32) -> ScaledPose {
    let mut raw = pose.as_pose().clone();
    for &j in joints {
        let mut k = raw.get(j);
        k.confidence = Confidence::new(conf).unwrap();
        raw.set(j, k);
    }
    ScaledPose::from_display_space(raw)
}

/// Moves a joint to a new display position.
pub(crate) fn moved(pose: &ScaledPose, joint: KeypointType, x: f32, y: f32) -> ScaledPose {
    let mut raw = pose.as_pose().clone();
    let c = raw.get(joint).confidence.value();
    raw.set(joint, kp(x, y, c));
    ScaledPose::from_display_space(raw)
}
