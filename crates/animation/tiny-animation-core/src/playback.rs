//! Playback driver: a restartable, cancellable time-stepped loop.
//!
//! The host calls [`PlaybackDriver::tick`] once per frame with its delta
//! time. Each tick in `Playing` samples the state at the current elapsed
//! time, forwards the result to the target and then advances. Looping
//! restarts a fresh iteration from 0 in place of spawning a new task.

use serde::{Deserialize, Serialize};

use crate::channel::TransformMode;
use crate::outputs::Warning;
use crate::state::AnimationState;

/// Consumer of sampled vectors (the host's object transform).
pub trait TargetApplier {
    fn apply(&mut self, mode: TransformMode, value: [f32; 3]);
}

/// Targets that ignore every sample.
impl TargetApplier for () {
    fn apply(&mut self, _mode: TransformMode, _value: [f32; 3]) {}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No playback in flight.
    #[default]
    Idle,
    /// Sampling once per tick.
    Playing,
    /// Stop requested; no more samples or restarts, next tick goes idle.
    Stopping,
}

impl PlaybackState {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Playing => "playing",
            Self::Stopping => "stopping",
        }
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing)
    }
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// Nothing was playing.
    Inactive,
    /// Sampled at `time`; playback continues.
    Sampled { time: f32 },
    /// Sampled at `time`, reached the end and went idle.
    Finished { time: f32 },
    /// Sampled at `time`, reached the end and restarted as `iteration`.
    Looped { time: f32, iteration: u32 },
    /// A pending stop completed; nothing was sampled.
    Cancelled,
}

#[derive(Debug, Clone, Default)]
pub struct PlaybackDriver {
    state: PlaybackState,
    elapsed: f32,
    looping: bool,
    iteration: u32,
}

impl PlaybackDriver {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[inline]
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Completed loop restarts in the current run.
    #[inline]
    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    /// Start (or restart) playback from 0.
    ///
    /// With nothing to play (`animation_duration <= 0`) the driver stays idle,
    /// so a looping request cannot spin without doing work.
    pub fn play(&mut self, looping: bool, animation_duration: f32) -> PlaybackState {
        self.elapsed = 0.0;
        self.iteration = 0;
        self.looping = looping;
        if animation_duration > 0.0 {
            log::debug!("playback started (looping={looping}, duration={animation_duration})");
            self.state = PlaybackState::Playing;
        } else {
            log::debug!("playback not started: animation has no duration");
            self.state = PlaybackState::Idle;
        }
        self.state
    }

    /// Cancel in-flight playback, including any pending loop restart.
    pub fn stop(&mut self) {
        if self.state == PlaybackState::Playing {
            log::debug!("playback stop requested at t={}", self.elapsed);
            self.state = PlaybackState::Stopping;
        }
    }

    /// Advance by one host tick.
    pub fn tick(
        &mut self,
        dt: f32,
        anim: &mut AnimationState,
        target: &mut dyn TargetApplier,
    ) -> TickOutcome {
        match self.state {
            PlaybackState::Idle => return TickOutcome::Inactive,
            PlaybackState::Stopping => {
                self.state = PlaybackState::Idle;
                log::debug!("playback cancelled");
                return TickOutcome::Cancelled;
            }
            PlaybackState::Playing => {}
        }

        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            anim.warn(Warning::InvalidTickDelta { dt });
            0.0
        };

        let time = self.elapsed;
        anim.sample(time).apply_to(target);
        self.elapsed += dt;

        // Duration is read live: keys may change while playing.
        let duration = anim.animation_duration();
        if self.elapsed < duration {
            return TickOutcome::Sampled { time };
        }

        if self.looping && duration > 0.0 {
            self.iteration = self.iteration.wrapping_add(1);
            self.elapsed = 0.0;
            log::debug!("playback looped (iteration {})", self.iteration);
            TickOutcome::Looped {
                time,
                iteration: self.iteration,
            }
        } else {
            self.state = PlaybackState::Idle;
            log::debug!("playback finished at t={}", self.elapsed);
            TickOutcome::Finished { time }
        }
    }
}
