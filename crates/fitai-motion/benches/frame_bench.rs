//! Per-frame processing benchmarks.
//!
//! Run with: cargo bench --package fitai-motion

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use fitai_core::geometry::rescale_pose;
use fitai_core::{Confidence, FrameGeometry, FrameSize, Keypoint, KeypointType, Pose, ScaledPose};
use fitai_motion::{ExerciseClassifier, FormEvaluator, MotionSession};

/// Model-space squat pose (192x192 input) with the knees at `knee_angle`.
fn squat_pose(knee_angle: f32) -> Pose {
    let c = Confidence::saturating(0.9);
    let rad = knee_angle.to_radians();
    let mut pose = Pose::new();
    for (offset, joints) in [
        (
            80.0,
            [
                KeypointType::LeftShoulder,
                KeypointType::LeftElbow,
                KeypointType::LeftWrist,
                KeypointType::LeftHip,
                KeypointType::LeftKnee,
                KeypointType::LeftAnkle,
            ],
        ),
        (
            110.0,
            [
                KeypointType::RightShoulder,
                KeypointType::RightElbow,
                KeypointType::RightWrist,
                KeypointType::RightHip,
                KeypointType::RightKnee,
                KeypointType::RightAnkle,
            ],
        ),
    ] {
        let [shoulder, elbow, wrist, hip, knee, ankle] = joints;
        pose.set(shoulder, Keypoint::new(offset, 20.0, c));
        pose.set(elbow, Keypoint::new(offset + 2.0, 55.0, c));
        pose.set(wrist, Keypoint::new(offset + 4.0, 88.0, c));
        pose.set(hip, Keypoint::new(offset, 90.0, c));
        pose.set(knee, Keypoint::new(offset, 130.0, c));
        pose.set(
            ankle,
            Keypoint::new(offset + 40.0 * rad.sin(), 130.0 - 40.0 * rad.cos(), c),
        );
    }
    pose
}

fn geometry() -> FrameGeometry {
    FrameGeometry::new(
        FrameSize::new(192.0, 192.0).unwrap(),
        FrameSize::new(1280.0, 720.0).unwrap(),
    )
}

/// Benchmark the stateless stages on one scaled frame
fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("Stages");
    let geometry = geometry();
    let pose = squat_pose(95.0);
    let scaled: ScaledPose = rescale_pose(&pose, &geometry);
    let classifier = ExerciseClassifier::default();
    let evaluator = FormEvaluator::default();

    group.bench_function("rescale", |b| {
        b.iter(|| rescale_pose(black_box(&pose), black_box(&geometry)))
    });
    group.bench_function("classify", |b| {
        b.iter(|| classifier.classify(black_box(&scaled)))
    });
    group.bench_function("evaluate", |b| {
        b.iter(|| evaluator.evaluate(black_box(&scaled), fitai_core::ExerciseKind::Squat))
    });
    group.finish();
}

/// Benchmark full session frame processing over squat cycles
fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("Session");
    group.measurement_time(Duration::from_secs(5));

    for &frames in &[30usize, 300, 3000] {
        let cycle: Vec<Pose> = [170.0, 130.0, 90.0, 130.0, 170.0]
            .iter()
            .map(|&a| squat_pose(a))
            .collect();

        group.throughput(Throughput::Elements(frames as u64));
        group.bench_with_input(BenchmarkId::new("process_frame", frames), &frames, |b, &n| {
            b.iter(|| {
                let mut session = MotionSession::with_defaults(geometry());
                session.start();
                for pose in cycle.iter().cycle().take(n) {
                    black_box(session.process_frame(pose));
                }
                session.end()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_stages, bench_session);
criterion_main!(benches);
