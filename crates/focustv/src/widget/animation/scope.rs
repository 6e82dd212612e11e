//! Deferred animation scheduling.
//!
//! Animations here are deferred property writes. An [`Animation`] carries a
//! closure that, when run, writes the end values of the animated properties
//! into the target render layers; the embedding host notices the model
//! change and interpolates the presented values over the animation's
//! duration and easing curve.
//!
//! Closures must not borrow the widget that scheduled them. The convention
//! is to capture a [`WeakLayer`](focustv_render::WeakLayer) plus copies of
//! the target values, and skip the write if the layer's owner is gone by the
//! time the closure runs.
//!
//! Two schedulers exist:
//!
//! - [`CoordinatedAnimations`]: batches the animations of one focus
//!   transition so every participating widget animates in the same beat.
//!   The host's focus engine owns it and calls [`run`](CoordinatedAnimations::run)
//!   once all widgets have contributed.
//! - [`Animator`]: a widget-owned fire-and-forget queue for animations
//!   outside focus transitions, such as press feedback. The host drains it
//!   every frame.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use focustv_core::logging::targets;

use super::easing::Easing;

type Work = Box<dyn FnOnce() + Send>;

/// A single deferred animation.
pub struct Animation {
    /// How long the host should interpolate toward the new model values.
    /// `None` means the animation carries no timing of its own: in a
    /// coordinated batch it follows the host transition's curve, and in an
    /// [`Animator`] the change applies immediately.
    pub duration: Option<Duration>,
    /// The easing curve the host applies while interpolating.
    pub easing: Easing,
    work: Work,
}

impl Animation {
    /// Create an animation that interpolates over `duration`.
    pub fn new<F>(duration: Duration, easing: Easing, work: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            duration: Some(duration),
            easing,
            work: Box::new(work),
        }
    }

    /// Create an animation without timing of its own, deferring to the
    /// scheduler it is added to.
    pub fn untimed<F>(work: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            duration: None,
            easing: Easing::Linear,
            work: Box::new(work),
        }
    }

    /// Run the deferred work, writing end values into the target layers.
    pub fn run(self) {
        (self.work)();
    }
}

impl std::fmt::Debug for Animation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Animation")
            .field("duration", &self.duration)
            .field("easing", &self.easing)
            .finish_non_exhaustive()
    }
}

/// Capability to schedule deferred animations.
///
/// Widgets receive an `&mut dyn AnimationScope` instead of a concrete
/// scheduler, so the same widget code works under a focus coordinator, a
/// widget-owned [`Animator`], or a test spy.
pub trait AnimationScope {
    /// Add an animation to this scope.
    fn add_animation(&mut self, animation: Animation);
}

/// Batches the animations of a single focus transition.
///
/// The host's focus engine creates one coordinator per transition, passes it
/// to every widget whose focus state changed, then calls [`run`](Self::run)
/// to execute the batch.
#[derive(Default)]
pub struct CoordinatedAnimations {
    pending: Vec<Animation>,
    completions: Vec<Work>,
}

impl std::fmt::Debug for CoordinatedAnimations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoordinatedAnimations")
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl CoordinatedAnimations {
    /// Create an empty coordinator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a closure to run after all animations in the batch have run.
    pub fn add_completion<F>(&mut self, completion: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.completions.push(Box::new(completion));
    }

    /// Number of animations waiting to run.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Run every batched animation, then the completions.
    ///
    /// Animations run in the order they were added, so when several target
    /// the same layer property the last write wins.
    pub fn run(&mut self) {
        tracing::debug!(
            target: targets::ANIMATION,
            count = self.pending.len(),
            "running coordinated animations"
        );

        for animation in self.pending.drain(..) {
            animation.run();
        }
        for completion in self.completions.drain(..) {
            completion();
        }
    }
}

impl AnimationScope for CoordinatedAnimations {
    fn add_animation(&mut self, animation: Animation) {
        self.pending.push(animation);
    }
}

/// A widget-owned fire-and-forget animation queue.
///
/// Cloning an `Animator` produces a handle to the same queue, so a widget
/// can keep one and hand clones to whatever schedules its work. The host
/// drains the queue every frame with [`run_pending`](Self::run_pending).
#[derive(Debug, Clone, Default)]
pub struct Animator {
    queue: Arc<Mutex<Vec<Animation>>>,
}

impl Animator {
    /// Create an empty animator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an animation.
    pub fn animate<F>(&self, duration: Duration, easing: Easing, work: F)
    where
        F: FnOnce() + Send + 'static,
    {
        tracing::trace!(
            target: targets::ANIMATION,
            ?duration,
            ?easing,
            "animation scheduled"
        );
        self.queue.lock().push(Animation::new(duration, easing, work));
    }

    /// Number of animations waiting to run.
    pub fn pending(&self) -> usize {
        self.queue.lock().len()
    }

    /// Run every queued animation, in scheduling order.
    pub fn run_pending(&self) {
        // Drain under the lock, run outside it, so work that schedules
        // further animations does not deadlock.
        let batch: Vec<Animation> = std::mem::take(&mut *self.queue.lock());
        for animation in batch {
            animation.run();
        }
    }
}

impl AnimationScope for Animator {
    fn add_animation(&mut self, animation: Animation) {
        self.queue.lock().push(animation);
    }
}

static_assertions::assert_impl_all!(Animation: Send);
static_assertions::assert_impl_all!(Animator: Send, Sync);
