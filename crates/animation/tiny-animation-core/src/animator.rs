//! Animator: one animation state and the single driver allowed to play it.
//!
//! This is the value an entity owns. It exposes the whole public surface:
//! keyframe editing, interpolation, sampling and playback control.

use crate::channel::TransformMode;
use crate::config::AnimationConfig;
use crate::interp::InterpolationMode;
use crate::outputs::{Sample, Warning};
use crate::playback::{PlaybackDriver, PlaybackState, TargetApplier, TickOutcome};
use crate::state::AnimationState;

#[derive(Debug, Clone, Default)]
pub struct Animator {
    state: AnimationState,
    driver: PlaybackDriver,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(cfg: AnimationConfig) -> Self {
        Self {
            state: AnimationState::new(cfg),
            driver: PlaybackDriver::new(),
        }
    }

    #[inline]
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Mutable access for editing; playback keeps reading durations live.
    #[inline]
    pub fn state_mut(&mut self) -> &mut AnimationState {
        &mut self.state
    }

    pub fn add_keyframe(
        &mut self,
        time: f32,
        value: [f32; 3],
        mode: TransformMode,
    ) -> crate::Result<usize> {
        self.state.add_keyframe(time, value, mode)
    }

    pub fn add_keyframe_2d(
        &mut self,
        time: f32,
        value: [f32; 2],
        mode: TransformMode,
    ) -> crate::Result<usize> {
        self.state.add_keyframe_2d(time, value, mode)
    }

    pub fn remove_keyframe(&mut self, index: usize, mode: TransformMode) -> crate::Result<()> {
        self.state.remove_keyframe(index, mode)
    }

    pub fn set_interpolation_mode(&mut self, mode: InterpolationMode) {
        self.state.set_interpolation_mode(mode);
    }

    pub fn sample(&self, time: f32) -> Sample {
        self.state.sample(time)
    }

    /// Start playback from 0; a running playback is replaced.
    pub fn play(&mut self, looping: bool) -> PlaybackState {
        self.driver.play(looping, self.state.animation_duration())
    }

    pub fn stop_animation(&mut self) {
        self.driver.stop();
    }

    pub fn tick(&mut self, dt: f32, target: &mut dyn TargetApplier) -> TickOutcome {
        self.driver.tick(dt, &mut self.state, target)
    }

    #[inline]
    pub fn playback_state(&self) -> PlaybackState {
        self.driver.state()
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.driver.state().is_playing()
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.driver.elapsed()
    }

    #[inline]
    pub fn animation_duration(&self) -> f32 {
        self.state.animation_duration()
    }

    #[inline]
    pub fn curve_duration(&self, mode: TransformMode) -> f32 {
        self.state.curve_duration(mode)
    }

    #[inline]
    pub fn curve_count(&self, mode: TransformMode) -> usize {
        self.state.curve_count(mode)
    }

    pub fn take_warnings(&mut self) -> Vec<Warning> {
        self.state.take_warnings()
    }
}
