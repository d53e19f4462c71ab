use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::animation::function::FunctionAnim;
use crate::animation::ops;
use crate::animation::options::AnimationOptions;
use crate::foundation::core::Target;
use crate::runtime::animator::Animator;
use crate::runtime::executor::Mutation;
use crate::runtime::producer::Producer;

/// Timed leaf: one call to the executor.
#[derive(Clone)]
pub struct Animate<T> {
    duration: Duration,
    options: Option<AnimationOptions>,
    mutation: Mutation<T>,
}

impl<T> Animate<T> {
    /// Animate the state change `mutation` over `duration`.
    pub fn new<F>(duration: Duration, mutation: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        Self {
            duration,
            options: None,
            mutation: Arc::new(mutation),
        }
    }

    /// Set the options forwarded to the executor.
    pub fn with_options(mut self, options: AnimationOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Duration handed to the executor (before time scaling).
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Options handed to the executor, if any were set.
    pub fn options(&self) -> Option<AnimationOptions> {
        self.options
    }
}

impl<T> fmt::Debug for Animate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animate")
            .field("duration", &self.duration)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Untimed leaf: applies its mutation directly and completes.
#[derive(Clone)]
pub struct Mutate<T> {
    mutation: Mutation<T>,
}

impl<T> Mutate<T> {
    /// Apply `mutation` without involving the executor.
    pub fn new<F>(mutation: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        Self {
            mutation: Arc::new(mutation),
        }
    }
}

impl<T> fmt::Debug for Mutate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mutate").finish_non_exhaustive()
    }
}

/// A declarative animation over targets of type `T`.
///
/// Trees are immutable once built; children are shared, so cloning is cheap and the same
/// tree can be run any number of times against any number of targets.
#[derive(Clone, Debug)]
pub enum Anim<T> {
    /// Emits the target unchanged.
    Identity,
    /// Timed mutation performed by the executor.
    Animate(Animate<T>),
    /// Immediate mutation.
    Mutate(Mutate<T>),
    /// Left to completion, then right on the left's result.
    Concat(Arc<Anim<T>>, Arc<Anim<T>>),
    /// Both at once against the same target; completes when both have.
    Merge(Arc<Anim<T>>, Arc<Anim<T>>),
    /// Starts `inner` after waiting `by`.
    Delay {
        /// Animation started after the wait.
        inner: Arc<Anim<T>>,
        /// Wait before starting (before time scaling).
        by: Duration,
    },
    /// Restarts `inner` every time it completes, until cancelled.
    Indefinite(Arc<Anim<T>>),
    /// Sampled function driving a chain of sub-animations.
    Function(FunctionAnim<T>),
}

impl<T> Default for Anim<T> {
    fn default() -> Self {
        Self::Identity
    }
}

impl<T> From<Animate<T>> for Anim<T> {
    fn from(leaf: Animate<T>) -> Self {
        Self::Animate(leaf)
    }
}

impl<T> From<Mutate<T>> for Anim<T> {
    fn from(leaf: Mutate<T>) -> Self {
        Self::Mutate(leaf)
    }
}

impl<T> From<FunctionAnim<T>> for Anim<T> {
    fn from(f: FunctionAnim<T>) -> Self {
        Self::Function(f)
    }
}

impl<T: Target> Anim<T> {
    /// The animation that does nothing.
    pub fn identity() -> Self {
        Self::Identity
    }

    /// Shorthand for a timed leaf.
    pub fn timed<F>(duration: Duration, mutation: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        Animate::new(duration, mutation).into()
    }

    /// Shorthand for an immediate leaf.
    pub fn mutate<F>(mutation: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        Mutate::new(mutation).into()
    }

    /// Set `options` on every timed leaf of this tree.
    ///
    /// Configure before running: producers already created keep the options they were built with.
    pub fn with_options(self, options: AnimationOptions) -> Self {
        self.replace_options(Some(options))
    }

    pub(crate) fn replace_options(self, options: Option<AnimationOptions>) -> Self {
        fn child<T: Target>(a: Arc<Anim<T>>, options: Option<AnimationOptions>) -> Arc<Anim<T>> {
            Arc::new(Arc::unwrap_or_clone(a).replace_options(options))
        }

        match self {
            Self::Identity | Self::Mutate(_) => self,
            Self::Animate(mut leaf) => {
                leaf.options = options;
                Self::Animate(leaf)
            }
            Self::Function(f) => Self::Function(f.replace_options(options)),
            Self::Concat(l, r) => Self::Concat(child(l, options), child(r, options)),
            Self::Merge(l, r) => Self::Merge(child(l, options), child(r, options)),
            Self::Delay { inner, by } => Self::Delay {
                inner: child(inner, options),
                by,
            },
            Self::Indefinite(inner) => Self::Indefinite(child(inner, options)),
        }
    }

    /// Start this animation on `target`.
    ///
    /// The returned producer is lazy: nothing is mutated until it is polled, and dropping it
    /// cancels every step that has not run yet.
    pub fn animate(&self, target: T, animator: &Animator<T>) -> Producer<T> {
        match self {
            Self::Identity => Producer::just(target),
            Self::Animate(leaf) => animator.perform(
                target,
                leaf.duration,
                leaf.options,
                Arc::clone(&leaf.mutation),
            ),
            Self::Mutate(leaf) => {
                let mutation = Arc::clone(&leaf.mutation);
                Producer::from_future(async move {
                    mutation(&target);
                    target
                })
            }
            Self::Concat(left, right) => ops::run_concat(left, Arc::clone(right), target, animator),
            Self::Merge(left, right) => ops::run_merge(left, right, target, animator),
            Self::Delay { inner, by } => ops::run_delay(Arc::clone(inner), *by, target, animator),
            Self::Indefinite(inner) => ops::run_indefinite(Arc::clone(inner), target, animator),
            Self::Function(f) => f.animate(target, animator),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
