//! Geometry utilities: joint angles and coordinate rescaling.
//!
//! Pure functions with no state. Angles are in degrees.

use crate::types::{FrameGeometry, Keypoint, KeypointType, Pose, ScaledPose};

/// Rays shorter than this are treated as zero length.
const MIN_RAY_LENGTH: f32 = 1e-6;

/// Angle at vertex `b` formed by the rays `b→a` and `b→c`, in degrees.
///
/// Uses `cos(θ) = (v1 · v2) / (|v1| × |v2|)` with the cosine clamped to
/// [-1, 1] before `acos`. Returns `None` when either ray has zero length:
/// coincident points carry no angle, and callers skip the measurement.
#[must_use]
pub fn angle_at(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> Option<f32> {
    let v1 = (a.0 - b.0, a.1 - b.1);
    let v2 = (c.0 - b.0, c.1 - b.1);

    let mag1 = v1.0.hypot(v1.1);
    let mag2 = v2.0.hypot(v2.1);
    if !(mag1 > MIN_RAY_LENGTH && mag2 > MIN_RAY_LENGTH) {
        return None;
    }

    let dot = v1.0.mul_add(v2.0, v1.1 * v2.1);
    let cos_angle = (dot / (mag1 * mag2)).clamp(-1.0, 1.0);
    Some(cos_angle.acos().to_degrees())
}

/// Angle at the middle joint of a three-joint chain of a pose.
#[must_use]
pub fn joint_angle(
    pose: &ScaledPose,
    a: KeypointType,
    vertex: KeypointType,
    c: KeypointType,
) -> Option<f32> {
    angle_at(
        pose.get(a).position_2d(),
        pose.get(vertex).position_2d(),
        pose.get(c).position_2d(),
    )
}

/// Remaps a keypoint from source to target space with independent x and y
/// factors. Confidence is carried through unchanged.
#[must_use]
pub fn rescale(keypoint: Keypoint, geometry: &FrameGeometry) -> Keypoint {
    let (sx, sy) = geometry.scale();
    Keypoint {
        x: keypoint.x * sx,
        y: keypoint.y * sy,
        confidence: keypoint.confidence,
    }
}

/// Rescales every joint of a pose into display space.
#[must_use]
pub fn rescale_pose(pose: &Pose, geometry: &FrameGeometry) -> ScaledPose {
    let mut scaled = Pose::new();
    for &kt in KeypointType::all() {
        scaled.set(kt, rescale(pose.get(kt), geometry));
    }
    ScaledPose::from_display_space(scaled)
}

/// Mean of two values, or `None` if either is missing.
#[must_use]
pub fn mean_pair(left: Option<f32>, right: Option<f32>) -> Option<f32> {
    Some((left? + right?) / 2.0)
}

/// Mean Y of a left/right joint pair.
#[must_use]
pub fn mean_y(pose: &ScaledPose, left: KeypointType, right: KeypointType) -> f32 {
    (pose.get(left).y + pose.get(right).y) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Confidence, FrameSize};

    #[test]
    fn test_straight_angle() {
        let angle = angle_at((0.0, 0.0), (0.5, 0.0), (1.0, 0.0)).unwrap();
        assert!((angle - 180.0).abs() < 1e-3);
    }

    #[test]
    fn test_right_angle() {
        let angle = angle_at((0.0, 0.0), (0.5, 0.0), (0.5, 0.5)).unwrap();
        assert!((angle - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_folded_angle_is_zero() {
        let angle = angle_at((1.0, 0.0), (0.0, 0.0), (2.0, 0.0)).unwrap();
        assert!(angle.abs() < 1e-3);
    }

    #[test]
    fn test_angle_is_symmetric() {
        let a = (3.0, 7.0);
        let b = (1.0, 1.0);
        let c = (-4.0, 2.0);
        let ab = angle_at(a, b, c).unwrap();
        let cb = angle_at(c, b, a).unwrap();
        assert!((ab - cb).abs() < 1e-4);
        assert!((0.0..=180.0).contains(&ab));
    }

    #[test]
    fn test_degenerate_rays_are_undefined() {
        assert!(angle_at((1.0, 1.0), (1.0, 1.0), (2.0, 2.0)).is_none());
        assert!(angle_at((0.0, 0.0), (1.0, 1.0), (1.0, 1.0)).is_none());
        assert!(angle_at((0.0, 0.0), (0.0, 0.0), (0.0, 0.0)).is_none());
    }

    #[test]
    fn test_nan_input_is_undefined() {
        assert!(angle_at((f32::NAN, 0.0), (0.0, 0.0), (1.0, 0.0)).is_none());
    }

    #[test]
    fn test_rescale_keeps_confidence() {
        let geometry = FrameGeometry::new(
            FrameSize::new(100.0, 200.0).unwrap(),
            FrameSize::new(400.0, 100.0).unwrap(),
        );
        let kp = Keypoint::new(10.0, 40.0, Confidence::new(0.37).unwrap());
        let scaled = rescale(kp, &geometry);
        assert!((scaled.x - 40.0).abs() < 1e-4);
        assert!((scaled.y - 20.0).abs() < 1e-4);
        assert_eq!(scaled.confidence, kp.confidence);
    }

    #[test]
    fn test_rescale_pose_maps_every_joint() {
        let geometry = FrameGeometry::new(
            FrameSize::new(10.0, 10.0).unwrap(),
            FrameSize::new(20.0, 30.0).unwrap(),
        );
        let pose = Pose::new().with(
            KeypointType::RightAnkle,
            Keypoint::new(1.0, 1.0, Confidence::new(0.8).unwrap()),
        );
        let scaled = rescale_pose(&pose, &geometry);
        let ankle = scaled.get(KeypointType::RightAnkle);
        assert_eq!(ankle.position_2d(), (2.0, 3.0));
        assert_eq!(scaled.get(KeypointType::Nose), Keypoint::missing());
    }

    #[test]
    fn test_mean_pair() {
        assert_eq!(mean_pair(Some(90.0), Some(110.0)), Some(100.0));
        assert_eq!(mean_pair(None, Some(110.0)), None);
        assert_eq!(mean_pair(Some(90.0), None), None);
    }
}
