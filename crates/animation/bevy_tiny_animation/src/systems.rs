use bevy::prelude::*;
use tiny_animation_core::{TargetApplier, TickOutcome, TransformMode};

use crate::components::{AutoPlay, TinyAnimation};
use crate::resources::PlaybackTimestep;

/// Applies sampled channels to a `Transform`.
///
/// Rotation vectors are Euler angles in degrees, applied Z first, then X,
/// then Y.
pub struct TransformTarget<'a>(pub &'a mut Transform);

impl TargetApplier for TransformTarget<'_> {
    fn apply(&mut self, mode: TransformMode, value: [f32; 3]) {
        let v = Vec3::from_array(value);
        match mode {
            TransformMode::Position => self.0.translation = v,
            TransformMode::Rotation => {
                self.0.rotation = Quat::from_euler(
                    EulerRot::YXZ,
                    v.y.to_radians(),
                    v.x.to_radians(),
                    v.z.to_radians(),
                );
            }
            TransformMode::Scale => self.0.scale = v,
        }
    }
}

pub fn start_autoplay_system(mut query: Query<(&mut TinyAnimation, &AutoPlay), Added<AutoPlay>>) {
    for (mut anim, auto) in query.iter_mut() {
        let state = anim.play(auto.looping);
        debug!(
            "autoplay (looping={}) -> {}, duration {}",
            auto.looping,
            state.name(),
            anim.animation_duration()
        );
    }
}

pub fn tick_animations_system(
    time: Option<Res<Time>>,
    step: Res<PlaybackTimestep>,
    mut query: Query<(Entity, &mut TinyAnimation, &mut Transform)>,
) {
    let dt = match *step {
        PlaybackTimestep::Fixed(dt) => dt,
        PlaybackTimestep::Variable => time.map_or(0.0, |t| t.delta_seconds()),
    };
    for (entity, mut anim, mut transform) in query.iter_mut() {
        let outcome = anim.tick(dt, &mut TransformTarget(&mut *transform));
        match outcome {
            TickOutcome::Finished { .. } => debug!("{entity:?}: animation finished"),
            TickOutcome::Cancelled => debug!("{entity:?}: animation stopped"),
            _ => {}
        }
        // Already logged at warn level by the core when recorded.
        for warning in anim.take_warnings() {
            debug!("{entity:?}: {warning:?}");
        }
    }
}
