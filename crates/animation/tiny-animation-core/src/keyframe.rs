//! A single control point of a scalar curve.

use serde::{Deserialize, Serialize};

/// Time-stamped value with the Hermite slopes used entering and leaving it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
    pub in_tangent: f32,
    pub out_tangent: f32,
}

impl Keyframe {
    /// Keyframe with flat tangents; an interpolation pass gives them meaning.
    #[inline]
    pub fn new(time: f32, value: f32) -> Self {
        Self {
            time,
            value,
            in_tangent: 0.0,
            out_tangent: 0.0,
        }
    }
}
