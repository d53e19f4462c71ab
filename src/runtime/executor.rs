use std::sync::Arc;
use std::time::Duration;

use crate::animation::options::AnimationOptions;
use crate::foundation::core::Target;
use crate::runtime::producer::Producer;

/// A state change applied to a target by a leaf animation.
pub type Mutation<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// The host's timed-mutation primitive.
///
/// One call performs one opaque, timed state transition on `target` and reports completion
/// by emitting the target exactly once. The primitive has no failure path.
pub trait Executor<T>: Send + Sync + 'static {
    /// Apply `mutation` to `target` over `duration` with the given pacing options.
    fn perform(
        &self,
        target: T,
        duration: Duration,
        options: Option<AnimationOptions>,
        mutation: Mutation<T>,
    ) -> Producer<T>;
}

impl<T, F> Executor<T> for F
where
    F: Fn(T, Duration, Option<AnimationOptions>, Mutation<T>) -> Producer<T> + Send + Sync + 'static,
{
    fn perform(
        &self,
        target: T,
        duration: Duration,
        options: Option<AnimationOptions>,
        mutation: Mutation<T>,
    ) -> Producer<T> {
        self(target, duration, options, mutation)
    }
}

/// Executor backed by the tokio timer.
///
/// The mutation is applied when the step starts (the model value changes immediately, as on
/// platforms that animate only the presentation) and completion is reported once `duration`
/// has elapsed.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerExecutor;

impl<T: Target> Executor<T> for TimerExecutor {
    fn perform(
        &self,
        target: T,
        duration: Duration,
        options: Option<AnimationOptions>,
        mutation: Mutation<T>,
    ) -> Producer<T> {
        Producer::from_future(async move {
            let curve = options.unwrap_or_default().effective_curve();
            tracing::trace!(?duration, ?curve, "timer executor: step");
            mutation(&target);
            if !duration.is_zero() {
                tokio::time::sleep(duration).await;
            }
            target
        })
    }
}

/// Executor that applies the mutation and completes without waiting.
///
/// Useful for headless runs and tests where only the order of mutations matters.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImmediateExecutor;

impl<T: Target> Executor<T> for ImmediateExecutor {
    fn perform(
        &self,
        target: T,
        _duration: Duration,
        _options: Option<AnimationOptions>,
        mutation: Mutation<T>,
    ) -> Producer<T> {
        Producer::from_future(async move {
            mutation(&target);
            target
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/executor.rs"]
mod tests;
