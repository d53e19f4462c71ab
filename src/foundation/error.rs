/// Convenience result type used across reanimate.
pub type ReanimateResult<T> = Result<T, ReanimateError>;

/// Top-level error taxonomy used by the animation APIs.
#[derive(thiserror::Error, Debug)]
pub enum ReanimateError {
    /// Invalid user-provided parameters or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// A run finished in a state that cannot produce a target.
    #[error("animation error: {0}")]
    Animation(String),

    /// The run was cancelled before it produced its terminal value.
    #[error("animation cancelled")]
    Cancelled,

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReanimateError {
    /// Build a [`ReanimateError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ReanimateError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`ReanimateError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// True when the error only signals cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
