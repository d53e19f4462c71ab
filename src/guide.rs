//! # Reanimate guide
//!
//! A short walkthrough of how animations are described, composed and run.
//!
//! ---
//!
//! ## Targets and executors
//!
//! A [`Target`](crate::Target) is a cheap handle onto whatever is being animated. Cloning a
//! target must give back the same entity: every stage of a composed animation receives the
//! target the previous stage emitted and mutates it in place.
//!
//! Timed work is delegated to an [`Executor`](crate::Executor). One call applies a mutation
//! over a duration and emits the target once when done. Two executors ship with the crate:
//!
//! - [`TimerExecutor`](crate::TimerExecutor) mutates and then waits on the tokio timer
//! - [`ImmediateExecutor`](crate::ImmediateExecutor) mutates and completes at once
//!
//! Any `Fn(T, Duration, Option<AnimationOptions>, Mutation<T>) -> Producer<T>` closure is an
//! executor too, which is how hosts plug in their own animation primitive.
//!
//! ---
//!
//! ## Building animations
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use reanimate::{AnimExt, HeadlessView, presets};
//!
//! let pulse = (presets::scale::<HeadlessView>(3.0, 3.0, Duration::from_secs(3))
//!     & presets::alpha(0.0, Duration::from_secs(3)))
//!     + presets::mutate(|v: &HeadlessView| v.set_tag(1));
//! let forever = pulse.indefinite().delayed_by(Duration::from_millis(700));
//! # let _ = forever;
//! ```
//!
//! `+` is [`concat`](crate::concat): the right side starts on what the left side emitted.
//! `&` is [`merge`](crate::merge): both sides start together on the same target and the merge
//! emits that target once both have finished.
//!
//! Trees are immutable and share their children, so one tree can be run many times.
//!
//! ---
//!
//! ## Running
//!
//! [`Animator::animate`](crate::Animator::animate) folds a list of animations into one
//! [`Producer`](crate::Producer). Nothing happens until the producer is polled; dropping it
//! cancels whatever has not run yet.
//!
//! - [`Animator::run`](crate::Animator::run) awaits the final target
//! - [`Animator::spawn`](crate::Animator::spawn) drives the run on a tokio task and returns a
//!   cancellable [`AnimationHandle`](crate::AnimationHandle)
//! - [`Animator::share`](crate::Animator::share) runs once and multicasts to subscribers
//!
//! Repeating animations never complete, so `run` never resolves for them. Spawn them and cancel
//! the handle instead.
//!
//! ---
//!
//! ## Function animations
//!
//! [`FunctionAnim`](crate::FunctionAnim) samples a function of elapsed seconds at
//! `0, interval, 2 * interval, ...` up to the duration, plus one sample at the duration itself
//! when it is not a multiple of the interval. Each sample becomes one sub-animation and the
//! sub-animations run strictly in sequence. Steps use a linear curve unless
//! [`FunctionAnim::linear`](crate::FunctionAnim::linear) turns that off.
//!
//! ---
//!
//! ## Configuration
//!
//! [`AnimatorConfig`](crate::AnimatorConfig) is plain JSON:
//!
//! ```json
//! { "time_scale": 0.5, "default_options": { "curve": "linear" }, "share_capacity": 16 }
//! ```
//!
//! `time_scale` multiplies every executor duration and delay. `default_options` fills in timed
//! leaves that carry no options of their own.
