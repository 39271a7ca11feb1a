//! Tangent policies.
//!
//! Interpolation is not stored per keyframe: applying a mode rewrites the
//! in/out tangents of every key currently in a curve. Keys added afterwards
//! keep flat tangents until the mode is applied again.

pub mod functions;

use serde::{Deserialize, Serialize};

use crate::keyframe::Keyframe;
use functions::{biased_slope, secant_slope};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationMode {
    /// Straight segments between consecutive keys.
    Linear,
    /// Rounded motion through every key (spline bias 0).
    Smooth,
    /// Straight on collinear runs, rounded at direction changes (spline bias 1).
    LinearSmooth,
}

impl InterpolationMode {
    /// Spline bias for the smoothing modes; `None` for `Linear`.
    #[inline]
    pub fn spline_bias(self) -> Option<f32> {
        match self {
            Self::Linear => None,
            Self::Smooth => Some(0.0),
            Self::LinearSmooth => Some(1.0),
        }
    }

    /// Rewrite every tangent in `keys` (sorted by time) under this mode.
    pub fn apply(self, keys: &mut [Keyframe]) {
        match self.spline_bias() {
            None => apply_linear(keys),
            Some(bias) => apply_spline(keys, bias),
        }
    }
}

fn apply_linear(keys: &mut [Keyframe]) {
    let n = keys.len();
    for i in 0..n {
        let in_tangent = if i > 0 {
            secant_slope(&keys[i - 1], &keys[i])
        } else {
            0.0
        };
        let out_tangent = if i + 1 < n {
            secant_slope(&keys[i], &keys[i + 1])
        } else {
            0.0
        };
        keys[i].in_tangent = in_tangent;
        keys[i].out_tangent = out_tangent;
    }
}

fn apply_spline(keys: &mut [Keyframe], bias: f32) {
    let n = keys.len();
    if n < 2 {
        for k in keys.iter_mut() {
            k.in_tangent = 0.0;
            k.out_tangent = 0.0;
        }
        return;
    }
    // Slopes are computed from values only, so in-place rewriting is safe.
    for i in 0..n {
        let m = if i == 0 {
            secant_slope(&keys[0], &keys[1])
        } else if i == n - 1 {
            secant_slope(&keys[n - 2], &keys[n - 1])
        } else {
            let incoming = secant_slope(&keys[i - 1], &keys[i]);
            let outgoing = secant_slope(&keys[i], &keys[i + 1]);
            biased_slope(incoming, outgoing, bias)
        };
        keys[i].in_tangent = m;
        keys[i].out_tangent = m;
    }
}
