use std::ops::{Add, BitAnd};
use std::sync::Arc;
use std::time::Duration;

use futures::future;
use futures::stream;

use crate::animation::anim::{Anim, Animate, Mutate};
use crate::animation::function::FunctionAnim;
use crate::foundation::core::Target;
use crate::runtime::animator::Animator;
use crate::runtime::producer::Producer;

/// Run `first`, then `second` on the target `first` emitted.
pub fn concat<T: Target>(first: impl Into<Anim<T>>, second: impl Into<Anim<T>>) -> Anim<T> {
    Anim::Concat(Arc::new(first.into()), Arc::new(second.into()))
}

/// Run `a` and `b` at the same time against the same target.
pub fn merge<T: Target>(a: impl Into<Anim<T>>, b: impl Into<Anim<T>>) -> Anim<T> {
    Anim::Merge(Arc::new(a.into()), Arc::new(b.into()))
}

/// Start `inner` once `by` has elapsed.
pub fn delay<T: Target>(inner: impl Into<Anim<T>>, by: Duration) -> Anim<T> {
    Anim::Delay {
        inner: Arc::new(inner.into()),
        by,
    }
}

/// Repeat `inner` until the run is cancelled.
pub fn indefinite<T: Target>(inner: impl Into<Anim<T>>) -> Anim<T> {
    Anim::Indefinite(Arc::new(inner.into()))
}

/// Combinator methods for anything that converts into an [`Anim`].
pub trait AnimExt<T: Target>: Into<Anim<T>> + Sized {
    /// Run `other` at the same time as this animation.
    fn simultaneously(self, other: impl Into<Anim<T>>) -> Anim<T> {
        merge(self, other)
    }

    /// Run `other` after this animation completes.
    fn followed_by(self, other: impl Into<Anim<T>>) -> Anim<T> {
        concat(self, other)
    }

    /// Start this animation after `by`.
    fn delayed_by(self, by: Duration) -> Anim<T> {
        delay(self, by)
    }

    /// Repeat this animation until cancelled.
    fn indefinite(self) -> Anim<T> {
        indefinite(self)
    }
}

impl<T: Target, A: Into<Anim<T>>> AnimExt<T> for A {}

macro_rules! impl_anim_operators {
    ($($ty:ident),* $(,)?) => {$(
        impl<T: Target, R: Into<Anim<T>>> Add<R> for $ty<T> {
            type Output = Anim<T>;

            fn add(self, rhs: R) -> Anim<T> {
                concat(self, rhs)
            }
        }

        impl<T: Target, R: Into<Anim<T>>> BitAnd<R> for $ty<T> {
            type Output = Anim<T>;

            fn bitand(self, rhs: R) -> Anim<T> {
                merge(self, rhs)
            }
        }
    )*};
}

impl_anim_operators!(Anim, Animate, Mutate, FunctionAnim);

pub(crate) fn run_concat<T: Target>(
    left: &Anim<T>,
    right: Arc<Anim<T>>,
    target: T,
    animator: &Animator<T>,
) -> Producer<T> {
    let next = animator.clone();
    left.animate(target, animator)
        .flat_map(move |t| right.animate(t, &next))
}

pub(crate) fn run_merge<T: Target>(
    left: &Anim<T>,
    right: &Anim<T>,
    target: T,
    animator: &Animator<T>,
) -> Producer<T> {
    let l = left.animate(target.clone(), animator);
    let r = right.animate(target.clone(), animator);
    Producer::from_future(async move {
        future::join(l.completion(), r.completion()).await;
        target
    })
}

pub(crate) fn run_delay<T: Target>(
    inner: Arc<Anim<T>>,
    by: Duration,
    target: T,
    animator: &Animator<T>,
) -> Producer<T> {
    let wait = animator.scaled(by);
    let next = animator.clone();
    Producer::from_future(async move {
        tracing::trace!(?wait, "delay: waiting");
        tokio::time::sleep(wait).await;
        target
    })
    .flat_map(move |t| inner.animate(t, &next))
}

pub(crate) fn run_indefinite<T: Target>(
    inner: Arc<Anim<T>>,
    target: T,
    animator: &Animator<T>,
) -> Producer<T> {
    let animator = animator.clone();
    Producer::from_stream(stream::unfold(
        (target, 0u64),
        move |(current, iteration)| {
            let inner = Arc::clone(&inner);
            let animator = animator.clone();
            async move {
                if iteration > 0 {
                    // A body that completes synchronously must not monopolize the scheduler.
                    tokio::task::yield_now().await;
                }
                tracing::trace!(iteration, "indefinite: run started");
                let next = inner
                    .animate(current.clone(), &animator)
                    .completion()
                    .await
                    .unwrap_or(current);
                Some((next.clone(), (next, iteration + 1)))
            }
        },
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ops.rs"]
mod tests;
