use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::animation::anim::Anim;
use crate::animation::options::AnimationOptions;
use crate::foundation::config::AnimatorConfig;
use crate::foundation::core::{Target, scale_duration};
use crate::foundation::error::{ReanimateError, ReanimateResult};
use crate::runtime::executor::{Executor, ImmediateExecutor, Mutation, TimerExecutor};
use crate::runtime::producer::{Producer, SharedProducer};

/// Entry point that runs animations against targets.
///
/// An animator owns the executor that performs timed leaves and the runtime configuration.
/// It is cheap to clone; clones share both.
pub struct Animator<T> {
    executor: Arc<dyn Executor<T>>,
    config: Arc<AnimatorConfig>,
}

impl<T> Clone for Animator<T> {
    fn clone(&self) -> Self {
        Self {
            executor: Arc::clone(&self.executor),
            config: Arc::clone(&self.config),
        }
    }
}

impl<T> fmt::Debug for Animator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<T: Target> Animator<T> {
    /// Animator performing timed leaves with `executor` and default configuration.
    pub fn new(executor: impl Executor<T>) -> Self {
        Self {
            executor: Arc::new(executor),
            config: Arc::new(AnimatorConfig::default()),
        }
    }

    /// Animator backed by [`TimerExecutor`].
    pub fn timer() -> Self {
        Self::new(TimerExecutor)
    }

    /// Animator backed by [`ImmediateExecutor`].
    pub fn immediate() -> Self {
        Self::new(ImmediateExecutor)
    }

    /// Replace the configuration after validating it.
    pub fn with_config(mut self, config: AnimatorConfig) -> ReanimateResult<Self> {
        config.validate()?;
        self.config = Arc::new(config);
        Ok(self)
    }

    /// Active configuration.
    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    /// Compose `animations` left to right into one producer for `target`.
    ///
    /// Starts from `just(target)`; every animation runs on the value the previous one emitted.
    /// With no animations the producer emits `target` unchanged and ends.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn animate<I>(&self, target: T, animations: I) -> Producer<T>
    where
        I: IntoIterator,
        I::Item: Into<Anim<T>>,
    {
        let mut count = 0usize;
        let producer = animations
            .into_iter()
            .fold(Producer::just(target), |acc, animation| {
                count += 1;
                let animation: Anim<T> = animation.into();
                let animator = self.clone();
                acc.flat_map(move |t| animation.animate(t, &animator))
            });
        tracing::debug!(count, "composed animations");
        producer
    }

    /// Compose and run `animations`, resolving to the final target.
    ///
    /// Never resolves if the composition repeats indefinitely; use [`Animator::spawn`] and
    /// cancel the handle for those.
    pub async fn run<I>(&self, target: T, animations: I) -> ReanimateResult<T>
    where
        I: IntoIterator,
        I::Item: Into<Anim<T>>,
    {
        self.animate(target, animations)
            .completion()
            .await
            .ok_or_else(|| ReanimateError::animation("animation ended without emitting a target"))
    }

    /// Compose `animations` and drive them on a spawned tokio task.
    ///
    /// Must be called from within a tokio runtime. Dropping the handle cancels the run.
    pub fn spawn<I>(&self, target: T, animations: I) -> AnimationHandle<T>
    where
        I: IntoIterator,
        I::Item: Into<Anim<T>>,
    {
        let producer = self.animate(target, animations);
        AnimationHandle {
            task: Some(tokio::spawn(producer.completion())),
        }
    }

    /// Compose `animations` into a single run observed by any number of subscribers.
    ///
    /// Must be called from within a tokio runtime.
    pub fn share<I>(&self, target: T, animations: I) -> SharedProducer<T>
    where
        I: IntoIterator,
        I::Item: Into<Anim<T>>,
    {
        self.animate(target, animations)
            .share(self.config.share_capacity)
    }

    pub(crate) fn perform(
        &self,
        target: T,
        duration: Duration,
        options: Option<AnimationOptions>,
        mutation: Mutation<T>,
    ) -> Producer<T> {
        let duration = self.scaled(duration);
        let options = options.or(self.config.default_options);
        self.executor.perform(target, duration, options, mutation)
    }

    pub(crate) fn scaled(&self, d: Duration) -> Duration {
        scale_duration(d, self.config.time_scale)
    }
}

/// A composed animation running on a tokio task.
///
/// Dropping the handle cancels the run.
pub struct AnimationHandle<T> {
    task: Option<JoinHandle<Option<T>>>,
}

impl<T> fmt::Debug for AnimationHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationHandle")
            .field("finished", &self.is_finished())
            .finish()
    }
}

impl<T> AnimationHandle<T> {
    /// Stop the run. Steps that have not started never start.
    pub fn cancel(&self) {
        if let Some(task) = &self.task {
            task.abort();
        }
    }

    /// True once the run has ended, either naturally or by cancellation.
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Wait for the run and return the final target.
    ///
    /// Resolves to [`ReanimateError::Cancelled`] if the run was cancelled first.
    pub async fn join(mut self) -> ReanimateResult<T> {
        let Some(task) = self.task.take() else {
            return Err(ReanimateError::Cancelled);
        };
        match task.await {
            Ok(Some(target)) => Ok(target),
            Ok(None) => Err(ReanimateError::animation(
                "animation ended without emitting a target",
            )),
            Err(e) if e.is_cancelled() => Err(ReanimateError::Cancelled),
            Err(e) => Err(ReanimateError::Other(
                anyhow::Error::new(e).context("animation task failed"),
            )),
        }
    }
}

impl<T> Drop for AnimationHandle<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/animator.rs"]
mod tests;
