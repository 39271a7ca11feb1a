//! Channel curve: three scalar curves (x, y, z) mutated in lockstep.
//!
//! The axis curves are never exposed mutably, so every key added or removed
//! lands in all three at the same index with the same time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::DuplicateKeyPolicy;
use crate::curve::ScalarCurve;
use crate::error::AnimationError;
use crate::interp::InterpolationMode;
use crate::keyframe::Keyframe;

/// Which transform component a channel drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformMode {
    Position,
    Rotation,
    Scale,
}

impl TransformMode {
    pub const ALL: [TransformMode; 3] = [Self::Position, Self::Rotation, Self::Scale];

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Rotation => "rotation",
            Self::Scale => "scale",
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Self::Position => 0,
            Self::Rotation => 1,
            Self::Scale => 2,
        }
    }
}

impl fmt::Display for TransformMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransformMode {
    type Err = AnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "position" => Ok(Self::Position),
            "rotation" => Ok(Self::Rotation),
            "scale" => Ok(Self::Scale),
            _ => Err(AnimationError::UnknownMode { name: s.to_string() }),
        }
    }
}

/// Result of a channel insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Inserted {
    /// A new key was stored at this index.
    New(usize),
    /// An existing key at the same time had its value overwritten.
    Replaced(usize),
}

impl Inserted {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Self::New(i) | Self::Replaced(i) => i,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChannelCurve {
    mode: TransformMode,
    x: ScalarCurve,
    y: ScalarCurve,
    z: ScalarCurve,
    count: usize,
    duration: f32,
}

impl ChannelCurve {
    pub fn new(mode: TransformMode) -> Self {
        Self::with_capacity(mode, 0)
    }

    pub fn with_capacity(mode: TransformMode, capacity: usize) -> Self {
        Self {
            mode,
            x: ScalarCurve::with_capacity(capacity),
            y: ScalarCurve::with_capacity(capacity),
            z: ScalarCurve::with_capacity(capacity),
            count: 0,
            duration: 0.0,
        }
    }

    #[inline]
    pub fn mode(&self) -> TransformMode {
        self.mode
    }

    /// Number of keys in each axis curve.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Time of the latest key; 0 for an empty channel.
    #[inline]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Read-only view of the axis curves, in x, y, z order.
    #[inline]
    pub fn axes(&self) -> [&ScalarCurve; 3] {
        [&self.x, &self.y, &self.z]
    }

    pub fn times(&self) -> impl Iterator<Item = f32> + '_ {
        self.x.keys().iter().map(|k| k.time)
    }

    /// The x, y and z keyframes stored at `index`.
    pub fn keyframe(&self, index: usize) -> Option<[Keyframe; 3]> {
        Some([
            *self.x.keys().get(index)?,
            *self.y.keys().get(index)?,
            *self.z.keys().get(index)?,
        ])
    }

    /// Insert a vector key at `time` (already validated, `>= 0`).
    pub fn insert(
        &mut self,
        time: f32,
        value: [f32; 3],
        policy: DuplicateKeyPolicy,
    ) -> Result<Inserted, AnimationError> {
        match self.x.locate(time) {
            Ok(index) => match policy {
                DuplicateKeyPolicy::Reject => Err(AnimationError::DuplicateKeyframe {
                    mode: self.mode,
                    time,
                }),
                DuplicateKeyPolicy::Replace => {
                    self.x.replace_value(index, value[0])?;
                    self.y.replace_value(index, value[1])?;
                    self.z.replace_value(index, value[2])?;
                    Ok(Inserted::Replaced(index))
                }
            },
            Err(index) => {
                self.x.insert_at(index, Keyframe::new(time, value[0]));
                self.y.insert_at(index, Keyframe::new(time, value[1]));
                self.z.insert_at(index, Keyframe::new(time, value[2]));
                self.count += 1;
                if time > self.duration {
                    self.duration = time;
                }
                Ok(Inserted::New(index))
            }
        }
    }

    /// Remove the key at `index` from all three axes.
    pub fn remove_at(&mut self, index: usize) -> Result<[Keyframe; 3], AnimationError> {
        if index >= self.count {
            return Err(AnimationError::KeyframeIndexOutOfRange {
                mode: self.mode,
                index,
                count: self.count,
            });
        }
        let removed = [
            self.x.remove_at(index)?,
            self.y.remove_at(index)?,
            self.z.remove_at(index)?,
        ];
        self.count -= 1;
        self.duration = self.x.keys().last().map_or(0.0, |k| k.time);
        Ok(removed)
    }

    pub fn apply_interpolation(&mut self, mode: InterpolationMode) {
        self.x.apply_interpolation(mode);
        self.y.apply_interpolation(mode);
        self.z.apply_interpolation(mode);
    }

    pub fn evaluate(&self, time: f32) -> [f32; 3] {
        [
            self.x.evaluate(time),
            self.y.evaluate(time),
            self.z.evaluate(time),
        ]
    }
}
