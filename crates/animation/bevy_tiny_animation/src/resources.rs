use bevy::prelude::*;

/// Where the per-tick delta comes from.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub enum PlaybackTimestep {
    /// `Time::delta_seconds` of the current frame.
    #[default]
    Variable,
    /// A constant step in seconds, independent of wall time.
    Fixed(f32),
}
