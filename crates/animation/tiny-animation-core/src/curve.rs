//! Scalar curve: keyframes for one axis, kept sorted by time.
//!
//! Mutation is crate-private. Only [`crate::channel::ChannelCurve`] changes
//! axis curves, and it always does so for x, y and z together.

use crate::error::AnimationError;
use crate::interp::functions::hermite_segment;
use crate::interp::InterpolationMode;
use crate::keyframe::Keyframe;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScalarCurve {
    keys: Vec<Keyframe>,
}

impl ScalarCurve {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Binary search by time: `Ok(i)` when key `i` has exactly `time`,
    /// `Err(i)` with the sorted insertion position otherwise.
    pub fn locate(&self, time: f32) -> Result<usize, usize> {
        self.keys.binary_search_by(|k| k.time.total_cmp(&time))
    }

    pub(crate) fn insert_at(&mut self, index: usize, key: Keyframe) {
        self.keys.insert(index, key);
    }

    pub(crate) fn replace_value(&mut self, index: usize, value: f32) -> Result<(), AnimationError> {
        let len = self.keys.len();
        let key = self
            .keys
            .get_mut(index)
            .ok_or(AnimationError::CurveIndexOutOfRange { index, len })?;
        *key = Keyframe::new(key.time, value);
        Ok(())
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> Result<Keyframe, AnimationError> {
        if index >= self.keys.len() {
            return Err(AnimationError::CurveIndexOutOfRange {
                index,
                len: self.keys.len(),
            });
        }
        Ok(self.keys.remove(index))
    }

    pub(crate) fn apply_interpolation(&mut self, mode: InterpolationMode) {
        mode.apply(&mut self.keys);
    }

    /// Value at `time`: Hermite between the bracketing keys, clamped to the
    /// first/last value outside the key range. An empty curve evaluates to 0
    /// and a NaN time to the first value.
    pub fn evaluate(&self, time: f32) -> f32 {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(f), Some(l)) => (f, l),
            _ => return 0.0,
        };
        if time.is_nan() || time <= first.time {
            return first.value;
        }
        if time >= last.time {
            return last.value;
        }
        match self.locate(time) {
            Ok(i) => self.keys[i].value,
            // first.time < time < last.time, so 0 < i < len
            Err(i) => hermite_segment(&self.keys[i - 1], &self.keys[i], time),
        }
    }
}
