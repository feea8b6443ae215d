use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::animation::clip::AnimationClip;

/// The named clips belonging to one model resource.
///
/// Clips are added incrementally as they are imported and handed out as
/// shared `Arc`s; a player never copies clip data.
#[derive(Debug, Default)]
pub struct AnimationLibrary {
    clips: FxHashMap<String, Arc<AnimationClip>>,
}

impl AnimationLibrary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `clip` under its own name and returns the shared handle.
    ///
    /// A clip with the same name is replaced; players already holding the
    /// old handle keep playing it.
    pub fn add(&mut self, clip: AnimationClip) -> Arc<AnimationClip> {
        let clip = Arc::new(clip);
        if self
            .clips
            .insert(clip.name.clone(), Arc::clone(&clip))
            .is_some()
        {
            log::warn!("AnimationLibrary: replacing clip '{}'", clip.name);
        }
        clip
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<AnimationClip>> {
        self.clips.get(name).cloned()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.clips.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.clips.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}
