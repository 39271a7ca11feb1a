//! Core configuration for tiny-animation-core.

use serde::{Deserialize, Serialize};

use crate::interp::InterpolationMode;

/// What to do when a keyframe is added at a time that already has one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateKeyPolicy {
    /// Overwrite the existing keyframe's value (last write wins).
    #[default]
    Replace,
    /// Refuse the insertion with `AnimationError::DuplicateKeyframe`.
    Reject,
}

/// Configuration for curve storage and diagnostics.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    /// Initial per-axis keyframe capacity hint.
    pub keyframe_capacity: usize,
    /// Maximum warnings retained until drained; extra ones are only counted.
    pub max_warnings: usize,
    pub duplicate_keys: DuplicateKeyPolicy,
    /// Mode used by `AnimationState::reapply_interpolation` before any
    /// explicit `set_interpolation_mode` call.
    pub default_interpolation: Option<InterpolationMode>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            keyframe_capacity: 8,
            max_warnings: 64,
            duplicate_keys: DuplicateKeyPolicy::Replace,
            default_interpolation: None,
        }
    }
}

impl AnimationConfig {
    /// Parse a configuration from JSON; missing fields take their defaults.
    pub fn from_json_str(raw: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
