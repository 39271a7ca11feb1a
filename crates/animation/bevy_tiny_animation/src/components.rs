use bevy::prelude::*;
use tiny_animation_core::Animator;

/// Keyframe animation owned by this entity and applied to its `Transform`.
#[derive(Component, Debug, Default, Deref, DerefMut)]
pub struct TinyAnimation(pub Animator);

impl TinyAnimation {
    pub fn new(animator: Animator) -> Self {
        Self(animator)
    }
}

/// Start playback as soon as the entity appears.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct AutoPlay {
    pub looping: bool,
}
