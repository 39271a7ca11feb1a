//! Output contracts from the core.
//!
//! A [`Sample`] carries the vectors produced for one time; channels that had
//! nothing to contribute are `None`. [`Warning`]s are recoverable problems
//! the core clamped or ignored, collected for the owner to drain.

use serde::{Deserialize, Serialize};

use crate::channel::TransformMode;
use crate::playback::TargetApplier;

/// Per-channel vectors sampled at one time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<[f32; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<[f32; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<[f32; 3]>,
}

impl Sample {
    #[inline]
    pub fn get(&self, mode: TransformMode) -> Option<[f32; 3]> {
        match mode {
            TransformMode::Position => self.position,
            TransformMode::Rotation => self.rotation,
            TransformMode::Scale => self.scale,
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, mode: TransformMode, value: [f32; 3]) {
        match mode {
            TransformMode::Position => self.position = Some(value),
            TransformMode::Rotation => self.rotation = Some(value),
            TransformMode::Scale => self.scale = Some(value),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.position.is_none() && self.rotation.is_none() && self.scale.is_none()
    }

    /// Forward each present channel to the target, position first.
    pub fn apply_to(&self, target: &mut dyn TargetApplier) {
        for mode in TransformMode::ALL {
            if let Some(value) = self.get(mode) {
                target.apply(mode, value);
            }
        }
    }
}

/// Recoverable conditions reported instead of failing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Warning {
    /// A negative keyframe time was stored at 0.
    NegativeTimeClamped {
        mode: TransformMode,
        requested: f32,
    },
    /// A channel lookup by name did not match any transform mode.
    UnknownMode { name: String },
    /// A tick delta that was negative or not finite was treated as 0.
    InvalidTickDelta { dt: f32 },
}

impl Warning {
    /// Emit through the `log` facade.
    pub fn log(&self) {
        match self {
            Self::NegativeTimeClamped { mode, requested } => {
                log::warn!("keyframe time cannot be less than 0 ({mode} channel, got {requested}); clamped to 0")
            }
            Self::UnknownMode { name } => {
                log::warn!("unknown transform mode '{name}'; lookup ignored")
            }
            Self::InvalidTickDelta { dt } => {
                log::warn!("invalid tick delta {dt}; treated as 0")
            }
        }
    }
}

/// Bounded warning buffer. Overflow is counted, not stored.
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
    capacity: usize,
    dropped: usize,
}

impl Diagnostics {
    pub fn new(capacity: usize) -> Self {
        Self {
            warnings: Vec::new(),
            capacity,
            dropped: 0,
        }
    }

    /// Log and retain a warning.
    pub fn push(&mut self, warning: Warning) {
        warning.log();
        if self.warnings.len() < self.capacity {
            self.warnings.push(warning);
        } else {
            self.dropped += 1;
        }
    }

    #[inline]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Warnings discarded because the buffer was full since the last drain.
    #[inline]
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn take(&mut self) -> Vec<Warning> {
        self.dropped = 0;
        std::mem::take(&mut self.warnings)
    }
}
