use std::path::Path;

use crate::animation::options::AnimationOptions;
use crate::foundation::error::{ReanimateError, ReanimateResult};

/// Runtime knobs for an [`Animator`](crate::Animator).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimatorConfig {
    /// Multiplier applied to every executor duration and every delay (`2.0` = half speed).
    pub time_scale: f64,
    /// Options used by timed leaves that carry none of their own.
    pub default_options: Option<AnimationOptions>,
    /// Buffer size of the broadcast channel behind shared producers.
    pub share_capacity: usize,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            default_options: None,
            share_capacity: 16,
        }
    }
}

impl AnimatorConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> ReanimateResult<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| ReanimateError::serde(format!("animator config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> ReanimateResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            ReanimateError::Other(anyhow::Error::new(e).context(format!(
                "read animator config '{}'",
                path.display()
            )))
        })?;
        Self::from_json_str(&text)
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> ReanimateResult<()> {
        if !self.time_scale.is_finite() || self.time_scale <= 0.0 {
            return Err(ReanimateError::validation(format!(
                "time_scale must be finite and > 0, got {}",
                self.time_scale
            )));
        }
        if self.share_capacity == 0 {
            return Err(ReanimateError::validation("share_capacity must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
