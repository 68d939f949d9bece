//! Minimal 2D engine services the scenes are built on.
//!
//! Nothing in here knows about the game: timers, tweens, arcade bodies,
//! frame animations, audio commands, a shared registry and per-frame input.

pub mod animation;
pub mod audio;
pub mod input;
pub mod physics;
pub mod registry;
pub mod scheduler;
pub mod text;
pub mod tween;

pub use animation::{AnimationDef, AnimationPlayer, AnimationRegistry};
pub use audio::{AudioCommand, AudioQueue, AudioSink, Sound};
pub use input::{FrameInput, InputEvent, Key};
pub use physics::{Aabb, Body, WorldBounds};
pub use registry::{Registry, RegistryValue};
pub use scheduler::{Fired, Scheduler, TimerId};
pub use text::TextLabel;
pub use tween::{Repeat, Tween, TweenStep};

use rand::RngCore;

/// Game-wide services handed to a scene for the duration of one call.
///
/// Scenes never reach for globals; everything they may touch outside their
/// own state comes through here.
pub struct EngineContext<'a> {
    pub rng: &'a mut dyn RngCore,
    pub audio: &'a mut dyn AudioSink,
    pub animations: &'a mut AnimationRegistry,
    pub registry: &'a mut Registry,
}
