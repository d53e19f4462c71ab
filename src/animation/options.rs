/// Pacing curve requested from the platform primitive.
///
/// The curve is a tag forwarded to the executor; no easing math happens in this crate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Curve {
    /// Slow start and end. The platform default.
    #[default]
    EaseInOut,
    /// Slow start.
    EaseIn,
    /// Slow end.
    EaseOut,
    /// Constant pace.
    Linear,
}

/// Opaque configuration bag handed to the executor with every timed mutation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimationOptions {
    /// Requested pacing curve; `None` leaves the choice to the executor.
    pub curve: Option<Curve>,
    /// Keep the target interactive while the mutation is in flight.
    pub allow_user_interaction: bool,
    /// Start from the currently presented state instead of the model state.
    pub begin_from_current_state: bool,
}

impl AnimationOptions {
    /// Options requesting a constant pace and nothing else.
    pub fn linear() -> Self {
        Self {
            curve: Some(Curve::Linear),
            ..Self::default()
        }
    }

    /// Replace the curve.
    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = Some(curve);
        self
    }

    /// Merge two bags: flags are OR-ed, `other`'s curve wins when it has one.
    pub fn union(self, other: Self) -> Self {
        Self {
            curve: other.curve.or(self.curve),
            allow_user_interaction: self.allow_user_interaction || other.allow_user_interaction,
            begin_from_current_state: self.begin_from_current_state
                || other.begin_from_current_state,
        }
    }

    /// The curve the executor should use.
    pub fn effective_curve(&self) -> Curve {
        self.curve.unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/options.rs"]
mod tests;
