//! Gameplay constants and configuration.

pub mod config;
pub mod constants;

pub use config::{Dimension, GameConfig, Viewport};
