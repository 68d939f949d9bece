//! Skyhop - terminal endless-runner library.
//!
//! Exposes the game logic for testing and for the terminal front end.

pub mod build_info;
pub mod core;
pub mod engine;
pub mod utils;
pub mod world;
