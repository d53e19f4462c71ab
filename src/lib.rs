//! Reanimate is a combinator library for declarative animations over asynchronous streams.
//!
//! Animations are immutable values built from two leaves and four combinators:
//!
//! - [`Animate`]: one timed mutation performed by an [`Executor`]
//! - [`Mutate`]: one immediate mutation
//! - [`concat`] / `+`: run one animation after another
//! - [`merge`] / `&`: run two animations at once against the same target
//! - [`delay`]: start an animation after a wait
//! - [`indefinite`]: repeat an animation until the run is cancelled
//! - [`FunctionAnim`]: drive sub-animations from a function sampled over time
//!
//! Running an animation yields a lazy [`Producer`]; an [`Animator`] folds any number of them
//! into one run against a target. See [`guide`] for a walkthrough.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod runtime;
pub(crate) mod view;

pub mod guide;

pub use crate::animation::presets;

pub use crate::foundation::config::AnimatorConfig;
pub use crate::foundation::core::{Affine, Point, Target, Vec2, secs};
pub use crate::foundation::error::{ReanimateError, ReanimateResult};

pub use crate::animation::anim::{Anim, Animate, Mutate};
pub use crate::animation::function::{FunctionAnim, SampleClock};
pub use crate::animation::ops::{AnimExt, concat, delay, indefinite, merge};
pub use crate::animation::options::{AnimationOptions, Curve};
pub use crate::runtime::animator::{AnimationHandle, Animator};
pub use crate::runtime::executor::{Executor, ImmediateExecutor, Mutation, TimerExecutor};
pub use crate::runtime::producer::{Producer, SharedProducer};
pub use crate::view::View;
pub use crate::view::headless::{HeadlessView, PropertyChange, ViewState};
