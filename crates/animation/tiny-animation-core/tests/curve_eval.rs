use approx::assert_abs_diff_eq;
use tiny_animation_core::{AnimationState, InterpolationMode, TransformMode};

fn assert_vec3(actual: [f32; 3], expected: [f32; 3]) {
    for i in 0..3 {
        assert_abs_diff_eq!(actual[i], expected[i], epsilon = 1e-5);
    }
}

fn position_state(keys: &[(f32, f32)], mode: InterpolationMode) -> AnimationState {
    let mut anim = AnimationState::default();
    for &(t, v) in keys {
        anim.add_keyframe(t, [v; 3], TransformMode::Position).unwrap();
    }
    anim.set_interpolation_mode(mode);
    anim
}

fn eval_x(anim: &AnimationState, t: f32) -> f32 {
    anim.channel(TransformMode::Position).axes()[0].evaluate(t)
}

/// it should reproduce the documented linear scenario at t=1 and t=3
#[test]
fn linear_scenario_samples() {
    let mut anim = AnimationState::default();
    anim.add_keyframe(0.0, [1.0; 3], TransformMode::Position).unwrap();
    anim.add_keyframe(2.0, [5.0; 3], TransformMode::Position).unwrap();
    anim.add_keyframe(4.0, [10.0; 3], TransformMode::Position).unwrap();
    anim.set_interpolation_mode(InterpolationMode::Linear);

    assert_vec3(anim.sample(1.0).position.unwrap(), [3.0; 3]);
    assert_vec3(anim.sample(3.0).position.unwrap(), [7.5; 3]);
}

/// it should pass through every key and hit segment midpoints under LINEAR
#[test]
fn linear_passes_through_keys_and_midpoints() {
    let keys = [(0.0, -2.0), (0.5, 4.0), (1.75, 1.0), (3.0, 9.0)];
    let anim = position_state(&keys, InterpolationMode::Linear);
    for &(t, v) in &keys {
        assert_abs_diff_eq!(eval_x(&anim, t), v, epsilon = 1e-5);
    }
    for pair in keys.windows(2) {
        let (t0, a) = pair[0];
        let (t1, b) = pair[1];
        assert_abs_diff_eq!(eval_x(&anim, 0.5 * (t0 + t1)), 0.5 * (a + b), epsilon = 1e-5);
    }
}

/// it should keep each axis independent while sharing key times
#[test]
fn axes_evaluate_independently() {
    let mut anim = AnimationState::default();
    anim.add_keyframe(0.0, [0.0, 10.0, -4.0], TransformMode::Scale)
        .unwrap();
    anim.add_keyframe(2.0, [2.0, 0.0, 4.0], TransformMode::Scale)
        .unwrap();
    anim.set_interpolation_mode(InterpolationMode::Linear);
    assert_vec3(anim.sample(1.0).scale.unwrap(), [1.0, 5.0, 0.0]);
}

/// it should round through a turning point under SMOOTH
#[test]
fn smooth_rounds_turns() {
    let anim = position_state(&[(0.0, 0.0), (1.0, 2.0), (2.0, 0.0)], InterpolationMode::Smooth);
    assert_abs_diff_eq!(eval_x(&anim, 1.0), 2.0, epsilon = 1e-6);
    assert_abs_diff_eq!(eval_x(&anim, 0.5), 1.25, epsilon = 1e-6);
    assert_abs_diff_eq!(eval_x(&anim, 1.5), 1.25, epsilon = 1e-6);
}

/// it should stay straight on collinear runs under LINEAR_SMOOTH but not under SMOOTH
#[test]
fn linear_smooth_straight_on_collinear_runs() {
    let keys = [(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 5.0)];

    let hybrid = position_state(&keys, InterpolationMode::LinearSmooth);
    assert_abs_diff_eq!(eval_x(&hybrid, 0.5), 0.5, epsilon = 1e-6);
    assert_abs_diff_eq!(eval_x(&hybrid, 1.5), 1.5, epsilon = 1e-6);

    let smooth = position_state(&keys, InterpolationMode::Smooth);
    assert_abs_diff_eq!(eval_x(&smooth, 1.5), 1.375, epsilon = 1e-6);
}

/// it should be idempotent to apply the same mode twice
#[test]
fn interpolation_is_idempotent() {
    let keys = [(0.0, 1.0), (1.0, 3.0), (2.5, -1.0), (4.0, 0.0)];
    let mut anim = position_state(&keys, InterpolationMode::Smooth);
    let before = anim.channel(TransformMode::Position).clone();
    anim.set_interpolation_mode(InterpolationMode::Smooth);
    assert_eq!(anim.channel(TransformMode::Position), &before);
}

/// it should leave keys added after a pass with flat tangents until re-applied
#[test]
fn keys_added_after_pass_need_reapply() {
    let mut anim = position_state(&[(0.0, 0.0), (2.0, 2.0)], InterpolationMode::Linear);
    anim.add_keyframe(4.0, [4.0; 3], TransformMode::Position)
        .unwrap();

    let [kx, _, _] = anim.channel(TransformMode::Position).keyframe(2).unwrap();
    assert_eq!((kx.in_tangent, kx.out_tangent), (0.0, 0.0));
    // Segment 2..4 eases in (flat tangents) until the mode is re-applied.
    assert!(eval_x(&anim, 2.5) < 2.4);

    assert_eq!(anim.reapply_interpolation(), Some(InterpolationMode::Linear));
    assert_abs_diff_eq!(eval_x(&anim, 2.5), 2.5, epsilon = 1e-6);
}
