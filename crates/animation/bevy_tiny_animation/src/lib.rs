//! Bevy adapter for tiny-animation-core.
//!
//! Each entity owns its [`TinyAnimation`] (one animator, one driver). The
//! plugin ticks every animator once per frame with the frame delta (or a
//! fixed step) and writes the sampled vectors into the entity's `Transform`.

use bevy::prelude::*;

pub mod components;
pub mod resources;
pub mod systems;

pub use components::{AutoPlay, TinyAnimation};
pub use resources::PlaybackTimestep;
pub use systems::TransformTarget;

pub struct TinyAnimationPlugin;

impl Plugin for TinyAnimationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlaybackTimestep>().add_systems(
            Update,
            (
                systems::start_autoplay_system,
                systems::tick_animations_system,
            )
                .chain(),
        );
    }
}
