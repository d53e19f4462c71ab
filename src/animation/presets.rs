//! Ready-made animations over [`View`] targets.
//!
//! Timed presets return [`Animate`] leaves, so they accept options and compose with `+`/`&`.
//! The `*_fn` variants drive the same property from a function of elapsed seconds; each sample
//! becomes one step lasting the sampling interval.

use crate::animation::anim::{Animate, Mutate};
use crate::animation::function::{FunctionAnim, validate_timing};
use crate::foundation::core::{Affine, Vec2, secs};
use crate::foundation::error::ReanimateResult;
use crate::view::View;

use std::time::Duration;

/// Animate opacity to `alpha`.
pub fn alpha<T: View>(alpha: f64, duration: Duration) -> Animate<T> {
    Animate::new(duration, move |view: &T| view.set_alpha(alpha))
}

/// Animate the transform to a rotation by `angle` radians.
pub fn rotate<T: View>(angle: f64, duration: Duration) -> Animate<T> {
    Animate::new(duration, move |view: &T| {
        view.set_transform(Affine::rotate(angle))
    })
}

/// Animate the transform to a scale by `(sx, sy)`.
pub fn scale<T: View>(sx: f64, sy: f64, duration: Duration) -> Animate<T> {
    Animate::new(duration, move |view: &T| {
        view.set_transform(Affine::scale_non_uniform(sx, sy))
    })
}

/// Animate the transform to a translation by `(dx, dy)`.
///
/// Only the transform changes; use [`move_by`] to move the view itself.
pub fn translate<T: View>(dx: f64, dy: f64, duration: Duration) -> Animate<T> {
    Animate::new(duration, move |view: &T| {
        view.set_transform(Affine::translate((dx, dy)))
    })
}

/// Move the view's center by `(dx, dy)` relative to where it is when the step runs.
pub fn move_by<T: View>(dx: f64, dy: f64, duration: Duration) -> Animate<T> {
    let offset = Vec2::new(dx, dy);
    Animate::new(duration, move |view: &T| {
        view.set_center(view.center() + offset)
    })
}

/// Show or hide the view immediately.
pub fn set_hidden<T: View>(hidden: bool) -> Mutate<T> {
    Mutate::new(move |view: &T| view.set_hidden(hidden))
}

/// Stop every animation in flight on the view.
pub fn remove_all_animations<T: View>() -> Mutate<T> {
    Mutate::new(|view: &T| view.remove_all_animations())
}

/// Apply an arbitrary change immediately.
pub fn mutate<T: View>(f: impl Fn(&T) + Send + Sync + 'static) -> Mutate<T> {
    Mutate::new(f)
}

fn step_duration(duration: f64, interval: f64) -> ReanimateResult<Duration> {
    validate_timing(duration, interval)?;
    secs(interval)
}

/// Opacity driven by `f(elapsed)`.
pub fn alpha_fn<T: View>(
    duration: f64,
    interval: f64,
    f: impl Fn(f64) -> f64 + Send + Sync + 'static,
) -> ReanimateResult<FunctionAnim<T>> {
    let step = step_duration(duration, interval)?;
    FunctionAnim::new(duration, interval, f, move |a: f64| alpha::<T>(a, step))
}

/// Rotation angle (radians) driven by `f(elapsed)`.
pub fn rotate_fn<T: View>(
    duration: f64,
    interval: f64,
    f: impl Fn(f64) -> f64 + Send + Sync + 'static,
) -> ReanimateResult<FunctionAnim<T>> {
    let step = step_duration(duration, interval)?;
    FunctionAnim::new(duration, interval, f, move |angle: f64| {
        rotate::<T>(angle, step)
    })
}

/// Scale factors driven by `f(elapsed) -> (sx, sy)`.
pub fn scale_fn<T: View>(
    duration: f64,
    interval: f64,
    f: impl Fn(f64) -> (f64, f64) + Send + Sync + 'static,
) -> ReanimateResult<FunctionAnim<T>> {
    let step = step_duration(duration, interval)?;
    FunctionAnim::new(duration, interval, f, move |(sx, sy): (f64, f64)| {
        scale::<T>(sx, sy, step)
    })
}

/// Transform translation driven by `f(elapsed) -> (dx, dy)`.
pub fn translate_fn<T: View>(
    duration: f64,
    interval: f64,
    f: impl Fn(f64) -> (f64, f64) + Send + Sync + 'static,
) -> ReanimateResult<FunctionAnim<T>> {
    let step = step_duration(duration, interval)?;
    FunctionAnim::new(duration, interval, f, move |(dx, dy): (f64, f64)| {
        translate::<T>(dx, dy, step)
    })
}

/// Center offsets driven by `f(elapsed) -> (dx, dy)`.
///
/// Every sample moves the view relative to where the previous step left it, so offsets
/// accumulate.
pub fn move_fn<T: View>(
    duration: f64,
    interval: f64,
    f: impl Fn(f64) -> (f64, f64) + Send + Sync + 'static,
) -> ReanimateResult<FunctionAnim<T>> {
    let step = step_duration(duration, interval)?;
    FunctionAnim::new(duration, interval, f, move |(dx, dy): (f64, f64)| {
        move_by::<T>(dx, dy, step)
    })
}

#[cfg(test)]
#[path = "../../tests/unit/animation/presets.rs"]
mod tests;
