//! Animation System Tests
//!
//! Tests for:
//! - KeyframeTrack linear/step interpolation and clamping
//! - KeyframeCursor O(1) optimization and binary search fallback
//! - Track and clip validation
//! - AnimationAction loop modes (Once, Loop) and time scale
//! - NodeAnimator local matrices
//! - AnimationLibrary lookups

use std::f32::consts::{FRAC_PI_2, PI};
use std::sync::Arc;

use glam::{Mat4, Quat, Vec3};

use ossa::animation::action::{AnimationAction, LoopMode};
use ossa::animation::binding::TargetPath;
use ossa::animation::clip::{AnimationClip, NodeAnimation};
use ossa::animation::library::AnimationLibrary;
use ossa::animation::node_animator::NodeAnimator;
use ossa::animation::playback::Playback;
use ossa::animation::tracks::{InterpolationMode, Keyframe, KeyframeCursor, KeyframeTrack};
use ossa::errors::AnimationError;
use ossa::settings::PlaybackSettings;

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn approx_vec3(a: Vec3, b: Vec3) -> bool {
    a.abs_diff_eq(b, EPSILON)
}

fn linear_f32(times: Vec<f32>, values: Vec<f32>) -> KeyframeTrack<f32> {
    KeyframeTrack::new(times, values, InterpolationMode::Linear)
}

// ============================================================================
// KeyframeTrack: sampling
// ============================================================================

#[test]
fn single_keyframe_is_constant() {
    let track = KeyframeTrack::from_keyframes([Keyframe::new(0.5, Vec3::new(1.0, 2.0, 3.0))]);
    for t in [-10.0, 0.0, 0.5, 0.75, 100.0] {
        assert_eq!(track.sample(t), Vec3::new(1.0, 2.0, 3.0), "t={t}");
    }
}

#[test]
fn clamps_before_first_and_after_last() {
    let track = linear_f32(vec![1.0, 2.0], vec![10.0, 20.0]);
    assert!(approx(track.sample(0.0), 10.0), "got {}", track.sample(0.0));
    assert!(approx(track.sample(1.0), 10.0));
    assert!(approx(track.sample(2.0), 20.0));
    assert!(approx(track.sample(5.0), 20.0), "got {}", track.sample(5.0));
}

#[test]
fn interior_keyframes_are_exact() {
    let track = KeyframeTrack::from_keyframes([
        Keyframe::new(0.0, Vec3::ZERO),
        Keyframe::new(0.4, Vec3::new(1.0, -2.0, 0.5)),
        Keyframe::new(1.1, Vec3::new(-3.0, 4.0, 7.0)),
        Keyframe::new(2.0, Vec3::ONE),
    ]);
    for i in 0..track.len() {
        let key = track.keyframe(i).unwrap();
        assert!(
            approx_vec3(track.sample(key.time), key.value),
            "key {i}: expected {:?}, got {:?}",
            key.value,
            track.sample(key.time)
        );
    }
}

#[test]
fn linear_vec3_midpoint() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0],
        vec![Vec3::ZERO, Vec3::new(10.0, 20.0, 30.0)],
        InterpolationMode::Linear,
    );
    assert!(approx_vec3(track.sample(0.5), Vec3::new(5.0, 10.0, 15.0)));
    assert!(approx_vec3(track.sample(0.25), Vec3::new(2.5, 5.0, 7.5)));
}

#[test]
fn linear_quat_is_slerp() {
    let q0 = Quat::IDENTITY;
    let q1 = Quat::from_rotation_y(PI * 0.9);
    let track = KeyframeTrack::new(vec![0.0, 1.0], vec![q0, q1], InterpolationMode::Linear);

    let val = track.sample(0.5);
    let expected = q0.slerp(q1, 0.5);
    let angle = val.angle_between(expected);
    assert!(angle < 1e-4, "Quaternion slerp mismatch: angle={angle}");

    // Constant angular speed along the arc
    let total = q0.angle_between(q1);
    let quarter = q0.angle_between(track.sample(0.25));
    assert!((quarter - total * 0.25).abs() < 1e-3);
}

#[test]
fn step_holds_value() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0, 2.0],
        vec![0.0_f32, 100.0, 200.0],
        InterpolationMode::Step,
    );
    assert!(approx(track.sample(0.0), 0.0));
    assert!(approx(track.sample(0.99), 0.0));
    assert!(approx(track.sample(1.0), 100.0));
    assert!(approx(track.sample(1.5), 100.0));
    assert!(approx(track.sample(2.0), 200.0));
}

#[test]
fn try_sample_empty_track_is_none() {
    let track: KeyframeTrack<Vec3> = KeyframeTrack::default();
    assert!(track.try_sample(0.5).is_none());
    let mut cursor = KeyframeCursor::default();
    assert!(track.sample_with_cursor(0.5, &mut cursor).is_none());
}

// ============================================================================
// KeyframeCursor
// ============================================================================

#[test]
fn cursor_matches_binary_search() {
    let track = linear_f32(
        vec![0.0, 1.0, 2.0, 3.0, 4.0],
        vec![0.0, 10.0, 5.0, 20.0, 15.0],
    );
    let mut cursor = KeyframeCursor::default();
    for i in 0..=45 {
        let t = i as f32 * 0.1;
        let with_cursor = track.sample_with_cursor(t, &mut cursor).unwrap();
        let plain = track.sample(t);
        assert!(
            approx(with_cursor, plain),
            "t={t}: sample()={plain} != sample_with_cursor()={with_cursor}"
        );
    }
}

#[test]
fn cursor_forward_then_jump_back() {
    let track = linear_f32(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 10.0, 20.0, 30.0]);
    let mut cursor = KeyframeCursor::default();

    assert!(approx(track.sample_with_cursor(2.5, &mut cursor).unwrap(), 25.0));
    assert_eq!(cursor.last_index, 2);

    // Loop wrap back to the start
    assert!(approx(track.sample_with_cursor(0.5, &mut cursor).unwrap(), 5.0));
    assert_eq!(cursor.last_index, 0);
}

#[test]
fn cursor_out_of_range_restarts() {
    let track = linear_f32(vec![0.0, 2.0], vec![0.0, 100.0]);
    let mut cursor = KeyframeCursor { last_index: 57 };
    assert!(approx(track.sample_with_cursor(1.0, &mut cursor).unwrap(), 50.0));
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn validate_accepts_well_formed_track() {
    let track = linear_f32(vec![0.0, 0.5, 1.0], vec![0.0, 1.0, 2.0]);
    assert_eq!(track.validate(), Ok(()));
}

#[test]
fn validate_rejects_bad_tracks() {
    let empty: KeyframeTrack<f32> = KeyframeTrack::default();
    assert_eq!(empty.validate(), Err(AnimationError::EmptyTrack));

    let mismatch = linear_f32(vec![0.0, 1.0], vec![0.0]);
    assert_eq!(
        mismatch.validate(),
        Err(AnimationError::LengthMismatch { times: 2, values: 1 })
    );

    let zero_width = linear_f32(vec![0.0, 1.0, 1.0], vec![0.0, 1.0, 2.0]);
    assert_eq!(
        zero_width.validate(),
        Err(AnimationError::ZeroWidthInterval { index: 1, time: 1.0 })
    );

    let decreasing = linear_f32(vec![0.0, 2.0, 1.0], vec![0.0, 1.0, 2.0]);
    assert_eq!(
        decreasing.validate(),
        Err(AnimationError::DecreasingTime { index: 2, time: 1.0 })
    );

    let nan = linear_f32(vec![0.0, f32::NAN], vec![0.0, 1.0]);
    assert_eq!(nan.validate(), Err(AnimationError::NonFiniteTime { index: 1 }));
}

#[test]
fn clip_validate_reports_node_and_channel() {
    let clip = AnimationClip::new(
        "broken",
        vec![
            NodeAnimation::new("ok").with_translation(KeyframeTrack::from_keyframes([
                Keyframe::new(0.0, Vec3::ZERO),
                Keyframe::new(1.0, Vec3::X),
            ])),
            NodeAnimation::new("arm").with_rotation(KeyframeTrack::from_keyframes([
                Keyframe::new(0.5, Quat::IDENTITY),
                Keyframe::new(0.5, Quat::from_rotation_x(1.0)),
            ])),
        ],
    );

    match clip.validate() {
        Err(AnimationError::InvalidTrack { node, target, source }) => {
            assert_eq!(node, "arm");
            assert_eq!(target, TargetPath::Rotation);
            assert_eq!(*source, AnimationError::ZeroWidthInterval { index: 0, time: 0.5 });
        }
        other => panic!("expected InvalidTrack, got {other:?}"),
    }
}

#[test]
fn clip_validate_rejects_negative_duration() {
    let clip = AnimationClip::with_duration("neg", -1.0, vec![]);
    assert!(matches!(
        clip.validate(),
        Err(AnimationError::InvalidDuration { .. })
    ));
}

// ============================================================================
// AnimationClip
// ============================================================================

#[test]
fn clip_auto_duration() {
    let clip = AnimationClip::new(
        "test",
        vec![
            NodeAnimation::new("a").with_translation(KeyframeTrack::from_keyframes([
                Keyframe::new(0.0, Vec3::ZERO),
                Keyframe::new(1.5, Vec3::X),
            ])),
            NodeAnimation::new("b").with_rotation(KeyframeTrack::from_keyframes([
                Keyframe::new(0.0, Quat::IDENTITY),
                Keyframe::new(3.0, Quat::from_rotation_y(1.0)),
            ])),
        ],
    );
    assert!(
        approx(clip.duration, 3.0),
        "Duration should be max of all tracks (3.0), got {}",
        clip.duration
    );
    assert!(clip.node_animation("b").is_some());
    assert!(clip.node_animation("missing").is_none());
}

#[test]
fn clip_empty_zero_duration() {
    let clip = AnimationClip::new("empty", vec![]);
    assert!(approx(clip.duration, 0.0));
}

#[test]
fn clip_duplicate_node_keeps_first() {
    let clip = AnimationClip::new(
        "dup",
        vec![
            NodeAnimation::new("n").with_scale(KeyframeTrack::from_keyframes([Keyframe::new(
                0.0,
                Vec3::splat(2.0),
            )])),
            NodeAnimation::new("n").with_scale(KeyframeTrack::from_keyframes([Keyframe::new(
                0.0,
                Vec3::splat(3.0),
            )])),
        ],
    );
    let anim = clip.node_animation("n").unwrap();
    assert_eq!(anim.scale.sample(0.0), Vec3::splat(2.0));
}

// ============================================================================
// AnimationAction: time advance
// ============================================================================

fn make_clip(duration: f32) -> Arc<AnimationClip> {
    Arc::new(AnimationClip::new(
        "test",
        vec![NodeAnimation::new("node").with_translation(KeyframeTrack::from_keyframes([
            Keyframe::new(0.0, Vec3::ZERO),
            Keyframe::new(duration, Vec3::new(duration, 0.0, 0.0)),
        ]))],
    ))
}

#[test]
fn looping_wraps_time() {
    let mut action = AnimationAction::new(Some(make_clip(2.0)), PlaybackSettings::LOOPING);
    let mut times = Vec::new();
    for _ in 0..4 {
        action.update(0.75);
        times.push(action.time());
    }
    let expected = [0.75, 1.5, 0.25, 1.0];
    for (got, want) in times.iter().zip(expected) {
        assert!(approx(*got, want), "times {times:?}, expected {expected:?}");
    }
    assert!(!action.is_finished());
}

#[test]
fn looping_time_is_total_mod_duration() {
    let mut action = AnimationAction::new(Some(make_clip(1.5)), PlaybackSettings::LOOPING);
    let mut total = 0.0_f32;
    for i in 0..37 {
        let dt = 0.05 + (i % 5) as f32 * 0.07;
        action.update(dt);
        total += dt;
        let expected = total % 1.5;
        assert!(
            (action.time() - expected).abs() < 1e-3,
            "after {total}s: expected {expected}, got {}",
            action.time()
        );
        assert!(action.time() >= 0.0 && action.time() < 1.5);
    }
}

#[test]
fn once_clamps_and_finishes_exactly_at_duration() {
    let mut action = AnimationAction::new(Some(make_clip(2.0)), PlaybackSettings::ONCE);

    action.update(0.75);
    assert!(!action.is_finished());
    action.update(0.75);
    assert!(!action.is_finished());
    action.update(0.75);
    assert!(approx(action.time(), 2.0), "got {}", action.time());
    assert!(action.is_finished());

    // Finished: further updates are no-ops
    assert!(!action.update(1.0));
    assert!(approx(action.time(), 2.0));

    action.reset();
    assert!(!action.is_finished());
    assert!(approx(action.time(), 0.0));
}

#[test]
fn once_reaching_duration_exactly_finishes() {
    let mut action = AnimationAction::new(Some(make_clip(1.0)), PlaybackSettings::ONCE);
    action.update(1.0);
    assert!(action.is_finished());
    assert!(approx(action.time(), 1.0));
}

#[test]
fn once_rewind_past_start_keeps_playing() {
    let mut action = AnimationAction::new(Some(make_clip(2.0)), PlaybackSettings::ONCE);

    action.update(0.1);
    action.update(-0.5);
    assert!(approx(action.time(), 0.0), "got {}", action.time());
    assert!(!action.is_finished());

    assert!(action.update(1.0));
    assert!(approx(action.time(), 1.0), "got {}", action.time());
    assert!(!action.is_finished());

    action.update(1.0);
    assert!(action.is_finished());
}

#[test]
fn once_reverse_playback_holds_at_start() {
    let settings = PlaybackSettings {
        loop_mode: LoopMode::Once,
        time_scale: -1.0,
    };
    let mut action = AnimationAction::new(Some(make_clip(2.0)), settings);
    action.set_time(0.5);

    action.update(1.0);
    assert!(approx(action.time(), 0.0));
    assert!(!action.is_finished());

    action.settings.time_scale = 1.0;
    action.update(0.5);
    assert!(approx(action.time(), 0.5), "got {}", action.time());
}

#[test]
fn reverse_loop_wraps_from_the_end() {
    let settings = PlaybackSettings {
        loop_mode: LoopMode::Loop,
        time_scale: -1.0,
    };
    let mut action = AnimationAction::new(Some(make_clip(2.0)), settings);
    action.update(0.5);
    assert!(approx(action.time(), 1.5), "got {}", action.time());
}

#[test]
fn time_scale_multiplies_delta() {
    let settings = PlaybackSettings {
        loop_mode: LoopMode::Once,
        time_scale: 2.0,
    };
    let mut action = AnimationAction::new(Some(make_clip(4.0)), settings);
    action.update(1.0);
    assert!(approx(action.time(), 2.0), "Expected 2.0, got {}", action.time());
}

#[test]
fn no_clip_stays_at_zero() {
    let mut action = AnimationAction::new(None, PlaybackSettings::ONCE);
    assert!(!action.update(1.0));
    assert!(approx(action.time(), 0.0));
    assert!(!action.is_finished());
}

// ============================================================================
// NodeAnimator
// ============================================================================

#[test]
fn node_animator_absent_node_is_identity() {
    let animator = NodeAnimator::new(Some(make_clip(2.0)));
    assert_eq!(animator.local_matrix("not_in_clip"), Mat4::IDENTITY);
}

#[test]
fn node_animator_without_clip_is_identity() {
    let mut animator = NodeAnimator::new(None);
    animator.update(0.5);
    assert_eq!(animator.local_matrix("node"), Mat4::IDENTITY);
    assert!(approx(animator.time(), 0.0));
}

#[test]
fn node_animator_composes_srt() {
    let clip = Arc::new(AnimationClip::new(
        "prop",
        vec![
            NodeAnimation::new("lid")
                .with_translation(KeyframeTrack::from_keyframes([
                    Keyframe::new(0.0, Vec3::ZERO),
                    Keyframe::new(1.0, Vec3::new(0.0, 4.0, 0.0)),
                ]))
                .with_rotation(KeyframeTrack::from_keyframes([
                    Keyframe::new(0.0, Quat::IDENTITY),
                    Keyframe::new(1.0, Quat::from_rotation_z(FRAC_PI_2)),
                ]))
                .with_scale(KeyframeTrack::from_keyframes([Keyframe::new(
                    0.0,
                    Vec3::splat(2.0),
                )])),
        ],
    ));

    let mut animator = NodeAnimator::new(Some(clip)).with_settings(PlaybackSettings::ONCE);
    animator.update(1.0);
    assert!(animator.is_finished());

    let m = animator.local_matrix("lid");
    let expected = Mat4::from_scale_rotation_translation(
        Vec3::splat(2.0),
        Quat::from_rotation_z(FRAC_PI_2),
        Vec3::new(0.0, 4.0, 0.0),
    );
    assert!(m.abs_diff_eq(expected, 1e-4), "got {m:?}");

    // Scale, then rotate, then translate: +X becomes +Y * 2, then moves up by 4
    let p = m.transform_point3(Vec3::X);
    assert!(p.abs_diff_eq(Vec3::new(0.0, 6.0, 0.0), 1e-4), "got {p:?}");
}

#[test]
fn node_animator_set_clip_rewinds() {
    let mut animator = NodeAnimator::new(Some(make_clip(2.0)));
    animator.update(1.0);
    assert!(approx(animator.time(), 1.0));

    animator.set_clip(Some(make_clip(3.0)));
    assert!(approx(animator.time(), 0.0));
    assert!(approx(animator.action().duration(), 3.0));
}

#[test]
fn playback_trait_objects() {
    let mut players: Vec<Box<dyn Playback>> = vec![
        Box::new(NodeAnimator::new(Some(make_clip(1.0))).with_settings(PlaybackSettings::ONCE)),
        Box::new(NodeAnimator::new(Some(make_clip(1.0)))),
    ];
    for p in &mut players {
        p.update(1.25);
        assert!(p.skeleton().is_none());
    }
    assert!(players[0].is_finished());
    assert!(!players[1].is_finished());
    assert!(approx(players[1].time(), 0.25));
}

// ============================================================================
// AnimationLibrary
// ============================================================================

#[test]
fn library_add_and_lookup() {
    let mut library = AnimationLibrary::new();
    assert!(library.is_empty());

    let walk = library.add(AnimationClip::with_duration("walk", 1.0, vec![]));
    library.add(AnimationClip::with_duration("run", 0.6, vec![]));

    assert_eq!(library.len(), 2);
    assert!(library.contains("walk"));
    assert!(library.get("jump").is_none());

    let fetched = library.get("walk").unwrap();
    assert!(Arc::ptr_eq(&walk, &fetched));

    let mut names: Vec<_> = library.names().collect();
    names.sort_unstable();
    assert_eq!(names, ["run", "walk"]);
}

#[test]
fn library_replace_keeps_old_handles_alive() {
    let mut library = AnimationLibrary::new();
    let old = library.add(AnimationClip::with_duration("idle", 1.0, vec![]));
    library.add(AnimationClip::with_duration("idle", 2.0, vec![]));

    assert_eq!(library.len(), 1);
    assert!(approx(old.duration, 1.0));
    assert!(approx(library.get("idle").unwrap().duration, 2.0));
}
