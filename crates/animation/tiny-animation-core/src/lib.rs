//! Tiny Animation Core (engine-agnostic)
//!
//! Keyframe curves for the three transform channels (position, rotation,
//! scale), each stored as three per-axis Hermite curves that are always
//! mutated together. Tangents are rewritten on demand by one of three
//! interpolation policies, and a small state machine steps playback forward
//! with host-supplied delta times.
//!
//! Adapters (Bevy, tests, tools) implement [`TargetApplier`] to receive
//! sampled vectors; the core never inspects the target.

pub mod animator;
pub mod channel;
pub mod config;
pub mod curve;
pub mod error;
pub mod interp;
pub mod keyframe;
pub mod outputs;
pub mod playback;
pub mod state;

// Re-exports for consumers (adapters)
pub use animator::Animator;
pub use channel::{ChannelCurve, TransformMode};
pub use config::{AnimationConfig, DuplicateKeyPolicy};
pub use curve::ScalarCurve;
pub use error::AnimationError;
pub use interp::InterpolationMode;
pub use keyframe::Keyframe;
pub use outputs::{Diagnostics, Sample, Warning};
pub use playback::{PlaybackDriver, PlaybackState, TargetApplier, TickOutcome};
pub use state::AnimationState;

/// Result alias used throughout the core.
pub type Result<T> = core::result::Result<T, AnimationError>;
