use crate::animation::controller::AnimationController;
use crate::animation::playback::Playback;
use crate::scene::skeleton::Skeleton;
use crate::utils::time::Countdown;

/// Cross-fades from a current player to a target player.
///
/// Idle while no target is set. [`BlendController::start_blend`] switches to
/// blending: every update advances both players and a one-shot countdown,
/// and, when both players drive a skeleton, writes a blended pose into a
/// private snapshot. When the countdown completes the target becomes the
/// current player and the snapshot is dropped.
///
/// Blending pairs joints by index, so both skeletons are expected to come
/// from the same rig.
#[derive(Debug, Clone)]
pub struct BlendController {
    current: AnimationController,
    target: Option<AnimationController>,
    countdown: Countdown,
    blended: Option<Skeleton>,
}

impl BlendController {
    #[must_use]
    pub fn new(current: impl Into<AnimationController>) -> Self {
        Self {
            current: current.into(),
            target: None,
            countdown: Countdown::new(0.0),
            blended: None,
        }
    }

    /// Starts fading to `target` over `duration` seconds.
    ///
    /// `None` is ignored. A blend already in progress is abandoned and its
    /// target dropped.
    pub fn start_blend(&mut self, target: Option<AnimationController>, duration: f32) {
        let Some(target) = target else {
            return;
        };

        if self.target.is_some() {
            log::debug!("BlendController: replacing pending blend target");
        }
        if duration <= 0.0 {
            log::warn!("BlendController: blend duration {duration} completes on the next update");
        }

        self.target = Some(target);
        self.countdown = Countdown::new(duration);
        self.blended = None;
    }

    pub fn update(&mut self, dt: f32) {
        self.current.update(dt);

        let Some(target) = self.target.as_mut() else {
            return;
        };
        target.update(dt);
        self.countdown.tick(dt);

        if self.countdown.is_finished() {
            if let Some(target) = self.target.take() {
                self.current = target;
            }
            self.blended = None;
            log::debug!("BlendController: blend complete");
            return;
        }

        let weight = self.countdown.progress();
        let target_skeleton = self.target.as_ref().and_then(Playback::skeleton);
        match (self.current.skeleton(), target_skeleton) {
            (Some(from), Some(to)) => {
                let out = self.blended.get_or_insert_with(|| {
                    if from.len() != to.len() {
                        log::warn!(
                            "BlendController: joint counts {} and {} differ, mixing the first {}",
                            from.len(),
                            to.len(),
                            from.len().min(to.len())
                        );
                    }
                    from.clone()
                });
                blend_skeletons(from, to, weight, out);
            }
            _ => self.blended = None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_blending(&self) -> bool {
        self.target.is_some()
    }

    /// Current blend weight, `None` when idle.
    #[must_use]
    pub fn blend_weight(&self) -> Option<f32> {
        self.target.as_ref().map(|_| self.countdown.progress())
    }

    #[inline]
    #[must_use]
    pub fn current(&self) -> &AnimationController {
        &self.current
    }

    #[inline]
    pub fn current_mut(&mut self) -> &mut AnimationController {
        &mut self.current
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> Option<&AnimationController> {
        self.target.as_ref()
    }

    /// The pose to present this frame: the blended snapshot while one exists,
    /// otherwise the current player's skeleton, otherwise `None`.
    #[must_use]
    pub fn skeleton(&self) -> Option<&Skeleton> {
        self.blended
            .as_ref()
            .or_else(|| self.current.skeleton())
    }
}

impl Playback for BlendController {
    fn update(&mut self, dt: f32) {
        BlendController::update(self, dt);
    }

    fn time(&self) -> f32 {
        self.current.time()
    }

    /// Rewinds the current player and abandons any blend in progress.
    fn reset(&mut self) {
        self.current.reset();
        self.target = None;
        self.blended = None;
    }

    fn is_finished(&self) -> bool {
        self.target.is_none() && self.current.is_finished()
    }

    fn skeleton(&self) -> Option<&Skeleton> {
        BlendController::skeleton(self)
    }
}

/// Writes the pose between `from` and `to` at `weight` into `out`.
///
/// `out` takes `from`'s structure. Joints present in both (by index) get
/// lerped translation and scale and slerped rotation; any remaining joints of
/// `from` keep their pose. Matrices are then rebuilt parent-first so every
/// joint hangs off its blended parent.
pub fn blend_skeletons(from: &Skeleton, to: &Skeleton, weight: f32, out: &mut Skeleton) {
    if !same_structure(out, from) {
        out.clone_from(from);
    }

    let overlap = from.len().min(to.len());
    for (i, joint) in out.joints.iter_mut().enumerate() {
        let current = &from.joints[i].transform;
        joint.transform = if i < overlap {
            current.blend(&to.joints[i].transform, weight)
        } else {
            *current
        };
    }

    out.update_matrices();
}

/// Same joint count, names and parent links.
fn same_structure(a: &Skeleton, b: &Skeleton) -> bool {
    a.len() == b.len()
        && a.root == b.root
        && a.joints
            .iter()
            .zip(&b.joints)
            .all(|(x, y)| x.parent == y.parent && x.name == y.name)
}
