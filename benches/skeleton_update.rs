use std::hint::black_box;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use glam::{Quat, Vec3};

use ossa::animation::clip::{AnimationClip, NodeAnimation};
use ossa::animation::tracks::{Keyframe, KeyframeTrack};
use ossa::{BlendController, Playback, Skeleton, SkeletonAnimator, SourceNode};

/// A single chain of `len` joints, each one unit above its parent.
fn chain(len: usize) -> Skeleton {
    let mut node = SourceNode::at(format!("joint_{}", len - 1), Vec3::Y);
    for i in (0..len - 1).rev() {
        node = SourceNode::at(format!("joint_{i}"), Vec3::Y).with_child(node);
    }
    Skeleton::from_node_tree(&node)
}

/// Rotates every joint of a `len`-joint chain back and forth over `keys` keys.
fn sway(len: usize, keys: usize, phase: f32) -> Arc<AnimationClip> {
    let animations = (0..len)
        .map(|j| {
            let frames = (0..keys).map(|k| {
                let t = k as f32 / 30.0;
                let angle = (t * 4.0 + j as f32 * 0.1 + phase).sin() * 0.3;
                Keyframe::new(t, Quat::from_rotation_z(angle))
            });
            NodeAnimation::new(format!("joint_{j}"))
                .with_rotation(KeyframeTrack::from_keyframes(frames))
        })
        .collect();
    Arc::new(AnimationClip::new("sway", animations))
}

fn sample_benchmark(c: &mut Criterion) {
    let track = KeyframeTrack::from_keyframes((0..300).map(|k| {
        let t = k as f32 / 30.0;
        Keyframe::new(t, Vec3::new(t.sin(), t.cos(), t))
    }));

    c.bench_function("track_sample_binary_search", |b| {
        let mut t = 0.0_f32;
        b.iter(|| {
            t = (t + 1.0 / 60.0) % 10.0;
            black_box(track.sample(black_box(t)));
        });
    });
}

fn animator_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("skeleton_animator_update");
    for joints in [16_usize, 64, 256] {
        let template = chain(joints);
        let clip = sway(joints, 120, 0.0);
        group.bench_with_input(BenchmarkId::from_parameter(joints), &joints, |b, _| {
            let mut animator = SkeletonAnimator::new(clip.clone(), &template);
            b.iter(|| {
                animator.update(black_box(1.0 / 60.0));
                black_box(animator.pose());
            });
        });
    }
    group.finish();
}

fn blend_benchmark(c: &mut Criterion) {
    let template = chain(64);
    let from = SkeletonAnimator::new(sway(64, 120, 0.0), &template);
    let to = SkeletonAnimator::new(sway(64, 120, 1.5), &template);

    c.bench_function("blend_controller_update_64", |b| {
        b.iter_batched(
            || {
                let mut blend = BlendController::new(from.clone());
                blend.start_blend(Some(to.clone().into()), 1000.0);
                blend
            },
            |mut blend| {
                for _ in 0..8 {
                    blend.update(1.0 / 60.0);
                }
                black_box(blend.skeleton().map(Skeleton::len))
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, sample_benchmark, animator_benchmark, blend_benchmark);
criterion_main!(benches);
