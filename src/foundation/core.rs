use std::time::Duration;

use crate::foundation::error::{ReanimateError, ReanimateResult};

pub use kurbo::{Affine, Point, Vec2};

/// Anything an animation can be applied to.
///
/// Targets are handles: cloning one must yield the same underlying entity, so that every
/// stage of a composed animation observes and mutates the same thing.
pub trait Target: Clone + Send + Sync + 'static {}

impl<T> Target for T where T: Clone + Send + Sync + 'static {}

/// Convert a duration in seconds into a [`Duration`], rejecting negative and non-finite input.
pub fn secs(value: f64) -> ReanimateResult<Duration> {
    if !value.is_finite() {
        return Err(ReanimateError::validation(format!(
            "duration must be finite, got {value}"
        )));
    }
    if value < 0.0 {
        return Err(ReanimateError::validation(format!(
            "duration must be >= 0, got {value}"
        )));
    }
    Duration::try_from_secs_f64(value)
        .map_err(|e| ReanimateError::validation(format!("duration {value}s out of range: {e}")))
}

/// Multiply a duration by a positive time scale, saturating at [`Duration::MAX`].
pub(crate) fn scale_duration(d: Duration, scale: f64) -> Duration {
    if scale == 1.0 || d.is_zero() {
        return d;
    }
    Duration::try_from_secs_f64(d.as_secs_f64() * scale).unwrap_or(Duration::MAX)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
