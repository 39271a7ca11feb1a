//! Error types for the animation core.
//!
//! Recoverable input problems (negative times, unknown mode names) are not
//! errors: they are clamped or ignored and reported as [`crate::Warning`]s.
//! The variants below cover contract violations that must not mutate state.

use serde::{Deserialize, Serialize};

use crate::channel::TransformMode;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AnimationError {
    /// Removal index outside `0..count` for a channel.
    #[error("keyframe index {index} out of range for {mode:?} channel with {count} keyframes")]
    KeyframeIndexOutOfRange {
        mode: TransformMode,
        index: usize,
        count: usize,
    },

    /// Index outside a single scalar curve.
    #[error("keyframe index {index} out of range for curve with {len} keyframes")]
    CurveIndexOutOfRange { index: usize, len: usize },

    /// A keyframe already exists at this time and the policy rejects duplicates.
    #[error("a keyframe already exists at time {time} in the {mode:?} channel")]
    DuplicateKeyframe { mode: TransformMode, time: f32 },

    /// NaN or infinite keyframe time.
    #[error("invalid keyframe time: {time}")]
    InvalidTime { time: f32 },

    /// Unrecognised transform mode name.
    #[error("unknown transform mode: {name}")]
    UnknownMode { name: String },

    /// Configuration could not be parsed.
    #[error("configuration error: {reason}")]
    Config { reason: String },
}

impl AnimationError {
    /// Get error category for logging.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::KeyframeIndexOutOfRange { .. }
            | Self::CurveIndexOutOfRange { .. }
            | Self::DuplicateKeyframe { .. } => "structure",
            Self::InvalidTime { .. } | Self::UnknownMode { .. } => "validation",
            Self::Config { .. } => "config",
        }
    }
}

impl From<serde_json::Error> for AnimationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config {
            reason: err.to_string(),
        }
    }
}
