//! Interpolation helpers:
//! - Hermite basis and segment evaluation
//! - secant slope between two keys (zero time delta yields 0)
//! - biased blend of incoming/outgoing slopes

use crate::keyframe::Keyframe;

#[inline]
fn hermite_basis(s: f32) -> (f32, f32, f32, f32) {
    let s2 = s * s;
    let s3 = s2 * s;
    (
        2.0 * s3 - 3.0 * s2 + 1.0,
        s3 - 2.0 * s2 + s,
        -2.0 * s3 + 3.0 * s2,
        s3 - s2,
    )
}

/// Cubic Hermite point at `s` in [0,1] with tangents already scaled to the segment.
#[inline]
pub fn hermite(p0: f32, m0: f32, p1: f32, m1: f32, s: f32) -> f32 {
    let (h00, h10, h01, h11) = hermite_basis(s);
    h00 * p0 + h10 * m0 + h01 * p1 + h11 * m1
}

/// Evaluate the segment between two keys at absolute `time`.
///
/// Tangents are slopes in value per second, so they are scaled by the segment
/// length before entering the unit-interval basis.
#[inline]
pub fn hermite_segment(left: &Keyframe, right: &Keyframe, time: f32) -> f32 {
    let dt = right.time - left.time;
    if dt <= 0.0 {
        return left.value;
    }
    let s = ((time - left.time) / dt).clamp(0.0, 1.0);
    hermite(
        left.value,
        left.out_tangent * dt,
        right.value,
        right.in_tangent * dt,
        s,
    )
}

#[inline]
fn safe_divide(dy: f32, dx: f32) -> f32 {
    if dx.abs() > f32::EPSILON {
        dy / dx
    } else {
        0.0
    }
}

/// Slope of the chord from `a` to `b`.
#[inline]
pub fn secant_slope(a: &Keyframe, b: &Keyframe) -> f32 {
    safe_divide(b.value - a.value, b.time - a.time)
}

/// Blend incoming and outgoing slopes. Bias 0 averages them, bias 1 keeps the
/// incoming slope.
#[inline]
pub fn biased_slope(incoming: f32, outgoing: f32, bias: f32) -> f32 {
    (1.0 + bias) * 0.5 * incoming + (1.0 - bias) * 0.5 * outgoing
}
