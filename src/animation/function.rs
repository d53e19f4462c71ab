use std::fmt;
use std::sync::Arc;

use crate::animation::anim::Anim;
use crate::animation::options::AnimationOptions;
use crate::foundation::core::Target;
use crate::foundation::error::{ReanimateError, ReanimateResult};
use crate::runtime::animator::Animator;
use crate::runtime::producer::Producer;

pub(crate) fn validate_timing(duration: f64, interval: f64) -> ReanimateResult<()> {
    if !interval.is_finite() || interval <= 0.0 {
        return Err(ReanimateError::validation(format!(
            "sampling interval must be finite and > 0, got {interval}"
        )));
    }
    if !duration.is_finite() || duration < 0.0 {
        return Err(ReanimateError::validation(format!(
            "function duration must be finite and >= 0, got {duration}"
        )));
    }
    Ok(())
}

/// Elapsed times (in seconds) at which a function animation samples its function.
///
/// Yields `k * interval` for `k = 0..=floor(duration / interval)`. When `duration` is not an
/// exact multiple of `interval` one more sample follows, taken at `duration` itself.
/// Times are produced lazily, one per step.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleClock {
    interval: f64,
    next_step: u64,
    regular_left: u64,
    tail: Option<f64>,
}

impl SampleClock {
    /// Build the clock for a function of total `duration` sampled every `interval` seconds.
    pub fn new(duration: f64, interval: f64) -> ReanimateResult<Self> {
        validate_timing(duration, interval)?;
        Ok(Self::new_unchecked(duration, interval))
    }

    fn new_unchecked(duration: f64, interval: f64) -> Self {
        // Float-to-int `as` truncates toward zero and saturates.
        let last_step = (duration / interval) as u64;
        // `%` is zero exactly when `duration` is an integer multiple of `interval`, the same
        // condition under which the IEEE remainder is zero.
        let tail = (duration % interval != 0.0).then_some(duration);
        Self {
            interval,
            next_step: 0,
            regular_left: last_step.saturating_add(1),
            tail,
        }
    }

    /// Regular samples (`k * interval`) not produced yet.
    pub fn regular_steps(&self) -> u64 {
        self.regular_left
    }

    /// True when a sample at the full duration is still to come after the regular ones.
    pub fn has_tail(&self) -> bool {
        self.tail.is_some()
    }
}

impl Iterator for SampleClock {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.regular_left > 0 {
            let t = self.next_step as f64 * self.interval;
            self.next_step += 1;
            self.regular_left -= 1;
            return Some(t);
        }
        self.tail.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .regular_left
            .saturating_add(u64::from(self.tail.is_some()));
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

type StepFn<T> = Arc<dyn Fn(f64) -> Anim<T> + Send + Sync>;

/// An animation driven by a function of elapsed time.
///
/// The function is sampled on a [`SampleClock`]; every sample is turned into a
/// sub-animation (typically lasting `interval`) and the sub-animations run strictly one after
/// another. Only the current step exists at any time.
#[derive(Clone)]
pub struct FunctionAnim<T> {
    duration: f64,
    interval: f64,
    is_linear: bool,
    options: Option<AnimationOptions>,
    step: StepFn<T>,
}

impl<T> fmt::Debug for FunctionAnim<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionAnim")
            .field("duration", &self.duration)
            .field("interval", &self.interval)
            .field("is_linear", &self.is_linear)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<T: Target> FunctionAnim<T> {
    /// Sample `sample` every `interval` seconds over `duration` seconds and animate each
    /// sampled value with the animation `build` returns for it.
    ///
    /// Steps are paced linearly unless [`FunctionAnim::linear`] turns that off.
    pub fn new<V, A, F, B>(duration: f64, interval: f64, sample: F, build: B) -> ReanimateResult<Self>
    where
        V: 'static,
        F: Fn(f64) -> V + Send + Sync + 'static,
        B: Fn(V) -> A + Send + Sync + 'static,
        A: Into<Anim<T>> + 'static,
    {
        validate_timing(duration, interval)?;
        Ok(Self {
            duration,
            interval,
            is_linear: true,
            options: None,
            step: Arc::new(move |elapsed: f64| -> Anim<T> { build(sample(elapsed)).into() }),
        })
    }

    /// Whether every step is forced onto a linear curve.
    pub fn linear(mut self, is_linear: bool) -> Self {
        self.is_linear = is_linear;
        self
    }

    /// Set the options applied to every step.
    pub fn with_options(self, options: AnimationOptions) -> Self {
        self.replace_options(Some(options))
    }

    pub(crate) fn replace_options(mut self, options: Option<AnimationOptions>) -> Self {
        self.options = options;
        self
    }

    /// Total duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Sampling interval in seconds.
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// The elapsed times this animation will sample, in order.
    pub fn sample_clock(&self) -> SampleClock {
        SampleClock::new_unchecked(self.duration, self.interval)
    }

    fn step_options(&self) -> Option<AnimationOptions> {
        if !self.is_linear {
            return self.options;
        }
        Some(
            self.options
                .unwrap_or_default()
                .union(AnimationOptions::linear()),
        )
    }

    pub(crate) fn animate(&self, target: T, animator: &Animator<T>) -> Producer<T> {
        let clock = self.sample_clock();
        let step = Arc::clone(&self.step);
        let options = self.step_options();
        let animator = animator.clone();
        tracing::debug!(
            duration = self.duration,
            interval = self.interval,
            steps = clock.regular_steps(),
            tail = clock.has_tail(),
            "function animation: start"
        );
        Producer::from_future(async move {
            let mut current = target;
            for (index, elapsed) in clock.enumerate() {
                tracing::trace!(index, elapsed, "function animation: sample");
                let sub = step(elapsed).replace_options(options);
                if let Some(next) = sub.animate(current.clone(), &animator).completion().await {
                    current = next;
                }
            }
            current
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/function.rs"]
mod tests;
