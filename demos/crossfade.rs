use std::f32::consts::FRAC_PI_4;

use anyhow::Context;
use glam::{Quat, Vec3};
use ossa::prelude::*;

fn arm_rig() -> Skeleton {
    Skeleton::from_node_tree_named(
        "arm",
        &SourceNode::at("shoulder", Vec3::new(0.0, 1.5, 0.0)).with_child(
            SourceNode::at("elbow", Vec3::new(0.3, 0.0, 0.0))
                .with_child(SourceNode::at("wrist", Vec3::new(0.25, 0.0, 0.0))),
        ),
    )
}

fn swing(name: &str, joint: &str, amplitude: f32) -> AnimationClip {
    AnimationClip::new(
        name,
        vec![NodeAnimation::new(joint).with_rotation(KeyframeTrack::from_keyframes([
            Keyframe::new(0.0, Quat::IDENTITY),
            Keyframe::new(0.5, Quat::from_rotation_z(amplitude)),
            Keyframe::new(1.0, Quat::IDENTITY),
        ]))],
    )
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut library = AnimationLibrary::new();
    for clip in [swing("wave", "elbow", FRAC_PI_4), swing("shrug", "shoulder", -FRAC_PI_4)] {
        clip.validate()?;
        library.add(clip);
    }

    let rig = arm_rig();
    rig.validate()?;
    println!("Rig '{}' with {} joints", rig.name, rig.len());

    let wave = library.get("wave").context("missing clip 'wave'")?;
    let shrug = library.get("shrug").context("missing clip 'shrug'")?;

    let mut blend = BlendController::new(SkeletonAnimator::new(wave, &rig));
    let wrist = rig.find_joint("wrist").context("rig has no wrist")?;

    let dt = 1.0 / 30.0;
    for frame in 0..45 {
        if frame == 15 {
            println!("-- fading to 'shrug' over 0.5s");
            blend.start_blend(Some(SkeletonAnimator::new(shrug.clone(), &rig).into()), 0.5);
        }
        blend.update(dt);

        if let Some(pose) = blend.skeleton() {
            let position = pose
                .joint(wrist)
                .map(|j| j.hierarchy_matrix().transform_point3(Vec3::ZERO))
                .unwrap_or_default();
            let weight = blend
                .blend_weight()
                .map_or_else(|| "-".to_string(), |w| format!("{w:.2}"));
            println!("frame {frame:>2}  weight {weight:>4}  wrist {position:.3}");
        }
    }

    Ok(())
}
