//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};

use fitai_core::{AnnounceError, Announcer, Confidence, FrameGeometry, FrameSize, Keypoint, Pose};
use fitai_motion::MotionSession;

use fitai_core::KeypointType::*;

static TRACING: Once = Once::new();

/// Installs a test-writer subscriber once per test binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Announcer that keeps every message.
#[derive(Default)]
pub struct Recorder(Mutex<Vec<String>>);

impl Recorder {
    pub fn messages(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl Announcer for Recorder {
    fn announce(&self, message: &str) -> Result<(), AnnounceError> {
        self.0.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

pub fn display() -> FrameGeometry {
    FrameGeometry::identity(FrameSize::new(640.0, 480.0).unwrap())
}

pub fn session() -> (MotionSession, Arc<Recorder>) {
    init_tracing();
    let recorder = Arc::new(Recorder::default());
    let session = MotionSession::with_defaults(display()).with_announcer(recorder.clone());
    (session, recorder)
}

fn kp(x: f32, y: f32, c: f32) -> Keypoint {
    Keypoint::new(x, y, Confidence::new(c).unwrap())
}

fn limb_end(origin: (f32, f32), angle_deg: f32, len: f32) -> (f32, f32) {
    let rad = angle_deg.to_radians();
    (origin.0 + len * rad.sin(), origin.1 - len * rad.cos())
}

/// Horizontal plank, both elbows at `elbow_angle`, every joint at `conf`.
pub fn plank(elbow_angle: f32, conf: f32) -> Pose {
    let mut pose = Pose::new();
    for (s, e, w, h, k, a, dx) in [
        (LeftShoulder, LeftElbow, LeftWrist, LeftHip, LeftKnee, LeftAnkle, 0.0),
        (RightShoulder, RightElbow, RightWrist, RightHip, RightKnee, RightAnkle, 4.0),
    ] {
        let elbow = (120.0 + dx, 320.0);
        let wrist = limb_end(elbow, elbow_angle, 90.0);
        pose.set(s, kp(120.0 + dx, 220.0, conf));
        pose.set(e, kp(elbow.0, elbow.1, conf));
        pose.set(w, kp(wrist.0, wrist.1, conf));
        pose.set(h, kp(320.0 + dx, 240.0, conf));
        pose.set(k, kp(460.0 + dx, 255.0, conf));
        pose.set(a, kp(600.0 + dx, 270.0, conf));
    }
    pose.set(Nose, kp(80.0, 230.0, conf));
    pose
}

/// Upright stance, both knees at `knee_angle`, hips and knees at `conf`,
/// everything else at 0.9.
pub fn stance(knee_angle: f32, conf: f32) -> Pose {
    let mut pose = Pose::new();
    for (s, e, w, h, k, a, x) in [
        (LeftShoulder, LeftElbow, LeftWrist, LeftHip, LeftKnee, LeftAnkle, 280.0),
        (RightShoulder, RightElbow, RightWrist, RightHip, RightKnee, RightAnkle, 360.0),
    ] {
        let knee = (x, 330.0);
        let ankle = limb_end(knee, knee_angle, 110.0);
        pose.set(s, kp(x, 40.0, 0.9));
        pose.set(e, kp(x + 5.0, 130.0, 0.9));
        pose.set(w, kp(x + 10.0, 215.0, 0.9));
        pose.set(h, kp(x, 230.0, conf));
        pose.set(k, kp(knee.0, knee.1, conf));
        pose.set(a, kp(ankle.0, ankle.1, 0.9));
    }
    pose.set(Nose, kp(320.0, 10.0, 0.9));
    pose
}

/// Same as [`stance`] but only the knees carry `knee_conf`.
pub fn stance_with_knee_confidence(knee_angle: f32, knee_conf: f32) -> Pose {
    let mut pose = stance(knee_angle, 0.9);
    for knee in [LeftKnee, RightKnee] {
        let mut k = pose.get(knee);
        k.confidence = Confidence::new(knee_conf).unwrap();
        pose.set(knee, k);
    }
    pose
}

/// Every joint at the origin with zero confidence.
pub fn nobody() -> Pose {
    Pose::new()
}
