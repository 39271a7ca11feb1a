//! Animation state: one channel curve per transform mode plus the aggregate
//! duration used by playback.

use crate::channel::{ChannelCurve, Inserted, TransformMode};
use crate::config::AnimationConfig;
use crate::error::AnimationError;
use crate::interp::InterpolationMode;
use crate::outputs::{Diagnostics, Sample, Warning};

#[derive(Clone, Debug)]
pub struct AnimationState {
    cfg: AnimationConfig,
    /// Indexed by `TransformMode::index`.
    channels: [ChannelCurve; 3],
    animation_duration: f32,
    /// Last mode passed to `set_interpolation_mode` (or the configured default).
    interpolation: Option<InterpolationMode>,
    diagnostics: Diagnostics,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(AnimationConfig::default())
    }
}

impl AnimationState {
    pub fn new(cfg: AnimationConfig) -> Self {
        let cap = cfg.keyframe_capacity;
        Self {
            channels: TransformMode::ALL.map(|mode| ChannelCurve::with_capacity(mode, cap)),
            animation_duration: 0.0,
            interpolation: cfg.default_interpolation,
            diagnostics: Diagnostics::new(cfg.max_warnings),
            cfg,
        }
    }

    #[inline]
    pub fn config(&self) -> &AnimationConfig {
        &self.cfg
    }

    #[inline]
    pub fn channel(&self, mode: TransformMode) -> &ChannelCurve {
        &self.channels[mode.index()]
    }

    /// Add a vector keyframe to one channel (all three axes at once).
    ///
    /// Negative times are stored at 0 and reported as a warning. Returns the
    /// index the key occupies in the channel.
    pub fn add_keyframe(
        &mut self,
        time: f32,
        value: [f32; 3],
        mode: TransformMode,
    ) -> crate::Result<usize> {
        if !time.is_finite() {
            return Err(AnimationError::InvalidTime { time });
        }
        if time < 0.0 {
            self.diagnostics.push(Warning::NegativeTimeClamped {
                mode,
                requested: time,
            });
        }
        // Also folds -0.0 into 0.0 so it matches an existing key at 0.
        let time = if time <= 0.0 { 0.0 } else { time };
        let policy = self.cfg.duplicate_keys;
        let inserted = self.channels[mode.index()].insert(time, value, policy)?;
        if let Inserted::Replaced(index) = inserted {
            log::debug!("replaced {mode} keyframe {index} at t={time}");
        }
        self.recalc_animation_duration();
        Ok(inserted.index())
    }

    /// 2D convenience: `z` is stored as 0.
    pub fn add_keyframe_2d(
        &mut self,
        time: f32,
        value: [f32; 2],
        mode: TransformMode,
    ) -> crate::Result<usize> {
        self.add_keyframe(time, [value[0], value[1], 0.0], mode)
    }

    /// Remove the keyframe at `index` from all three axes of a channel.
    pub fn remove_keyframe(&mut self, index: usize, mode: TransformMode) -> crate::Result<()> {
        self.channels[mode.index()].remove_at(index)?;
        self.recalc_animation_duration();
        Ok(())
    }

    fn recalc_animation_duration(&mut self) {
        self.animation_duration = self
            .channels
            .iter()
            .map(ChannelCurve::duration)
            .fold(0.0, f32::max);
    }

    /// Rewrite the tangents of every key in every channel under `mode`.
    ///
    /// This is a one-shot transform: keys added later keep flat tangents
    /// until this (or `reapply_interpolation`) runs again.
    pub fn set_interpolation_mode(&mut self, mode: InterpolationMode) {
        for channel in &mut self.channels {
            channel.apply_interpolation(mode);
        }
        self.interpolation = Some(mode);
    }

    /// Re-run the last applied (or configured default) mode, if any.
    pub fn reapply_interpolation(&mut self) -> Option<InterpolationMode> {
        let mode = self.interpolation?;
        self.set_interpolation_mode(mode);
        Some(mode)
    }

    #[inline]
    pub fn interpolation_mode(&self) -> Option<InterpolationMode> {
        self.interpolation
    }

    /// Evaluate every channel whose duration lies strictly after `time`.
    ///
    /// Channels that are empty or already finished at `time` produce nothing
    /// rather than holding their last value.
    pub fn sample(&self, time: f32) -> Sample {
        let mut out = Sample::default();
        for channel in &self.channels {
            if !channel.is_empty() && channel.duration() > time {
                out.set(channel.mode(), channel.evaluate(time));
            }
        }
        out
    }

    #[inline]
    pub fn animation_duration(&self) -> f32 {
        self.animation_duration
    }

    #[inline]
    pub fn curve_duration(&self, mode: TransformMode) -> f32 {
        self.channel(mode).duration()
    }

    #[inline]
    pub fn curve_count(&self, mode: TransformMode) -> usize {
        self.channel(mode).count()
    }

    /// Resolve a channel by name, recording a warning when it is unknown.
    pub fn lookup_mode(&mut self, name: &str) -> Option<TransformMode> {
        match name.parse() {
            Ok(mode) => Some(mode),
            Err(_) => {
                self.diagnostics.push(Warning::UnknownMode {
                    name: name.to_string(),
                });
                None
            }
        }
    }

    pub fn curve_duration_by_name(&mut self, name: &str) -> Option<f32> {
        self.lookup_mode(name).map(|mode| self.curve_duration(mode))
    }

    pub fn curve_count_by_name(&mut self, name: &str) -> Option<usize> {
        self.lookup_mode(name).map(|mode| self.curve_count(mode))
    }

    pub(crate) fn warn(&mut self, warning: Warning) {
        self.diagnostics.push(warning);
    }

    #[inline]
    pub fn warnings(&self) -> &[Warning] {
        self.diagnostics.warnings()
    }

    pub fn take_warnings(&mut self) -> Vec<Warning> {
        self.diagnostics.take()
    }
}
