//! Frame animations: shared definitions plus per-sprite playback.

use std::collections::HashMap;

use super::tween::Repeat;

/// A named sequence of spritesheet frames played at a fixed rate.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDef {
    pub key: String,
    pub texture: String,
    pub frames: Vec<u32>,
    /// Frames per second.
    pub frame_rate: f64,
}

impl AnimationDef {
    /// Frames `start..=end` of `texture`.
    pub fn from_sheet(key: &str, texture: &str, start: u32, end: u32, frame_rate: f64) -> Self {
        Self {
            key: key.to_string(),
            texture: texture.to_string(),
            frames: (start..=end).collect(),
            frame_rate,
        }
    }
}

/// Animation definitions shared by every sprite for the lifetime of the game.
///
/// Outlives individual scenes, so a definition created during the first
/// session is still there after a restart.
#[derive(Debug, Clone, Default)]
pub struct AnimationRegistry {
    defs: HashMap<String, AnimationDef>,
}

impl AnimationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&AnimationDef> {
        self.defs.get(key)
    }

    pub fn exists(&self, key: &str) -> bool {
        self.defs.contains_key(key)
    }

    /// Register `def` under its key. An existing definition is kept and
    /// `false` is returned.
    pub fn create(&mut self, def: AnimationDef) -> bool {
        if self.defs.contains_key(&def.key) {
            return false;
        }
        self.defs.insert(def.key.clone(), def);
        true
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

/// Playback state of one animation on one sprite.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationPlayer {
    pub key: String,
    frames: Vec<u32>,
    frame_rate: f64,
    repeat: Repeat,
    elapsed_ms: f64,
}

impl AnimationPlayer {
    pub fn play(def: &AnimationDef, repeat: Repeat) -> Self {
        Self {
            key: def.key.clone(),
            frames: def.frames.clone(),
            frame_rate: def.frame_rate,
            repeat,
            elapsed_ms: 0.0,
        }
    }

    pub fn advance(&mut self, dt_ms: f64) {
        self.elapsed_ms += dt_ms.max(0.0);
    }

    fn frame_index(&self) -> usize {
        if self.frames.is_empty() || self.frame_rate <= 0.0 {
            return 0;
        }
        let played = (self.elapsed_ms * self.frame_rate / 1000.0) as usize;
        match self.repeat {
            Repeat::Forever => played % self.frames.len(),
            Repeat::Once => played.min(self.frames.len() - 1),
        }
    }

    /// Spritesheet frame currently shown.
    pub fn current_frame(&self) -> u32 {
        self.frames.get(self.frame_index()).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin() -> AnimationDef {
        AnimationDef::from_sheet("coin", "coin", 0, 7, 8.0)
    }

    #[test]
    fn test_create_keeps_first_definition() {
        let mut registry = AnimationRegistry::new();
        assert!(registry.create(coin()));

        let mut other = coin();
        other.frame_rate = 30.0;
        assert!(!registry.create(other));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("coin").unwrap().frame_rate, 8.0);
    }

    #[test]
    fn test_looping_playback() {
        let mut player = AnimationPlayer::play(&coin(), Repeat::Forever);
        assert_eq!(player.current_frame(), 0);

        // 8 fps: one frame every 125ms
        player.advance(375.0);
        assert_eq!(player.current_frame(), 3);

        player.advance(1000.0);
        assert_eq!(player.current_frame(), 3);
    }

    #[test]
    fn test_single_playback_holds_last_frame() {
        let mut player = AnimationPlayer::play(&coin(), Repeat::Once);
        player.advance(5000.0);
        assert_eq!(player.current_frame(), 7);
    }
}
