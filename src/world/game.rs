//! Scene manager and the state that outlives a single scene.

use std::io;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::entity::EntityId;
use super::game_over::GameOverScene;
use super::generator::SpawnRequest;
use super::play_scene::PlayScene;
use crate::core::constants::MAX_FRAME_DT_MS;
use crate::core::{GameConfig, Viewport};
use crate::engine::{AnimationRegistry, AudioQueue, EngineContext, FrameInput, Registry};

/// Transition requested by a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneChange {
    ToGameOver,
    ToPlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneLifecycle {
    Playing,
    GameOver,
}

#[derive(Debug)]
pub enum ActiveScene {
    Play(Box<PlayScene>),
    GameOver(GameOverScene),
}

pub struct Game {
    config: GameConfig,
    viewport: Viewport,
    rng: StdRng,
    audio: AudioQueue,
    animations: AnimationRegistry,
    registry: Registry,
    scene: ActiveScene,
    sessions: u32,
}

impl Game {
    /// Start in the play scene. Fails when the configured viewport does not
    /// resolve to whole pixels.
    pub fn new(config: GameConfig, seed: u64) -> io::Result<Self> {
        let viewport = config.viewport()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let mut audio = AudioQueue::new();
        let mut animations = AnimationRegistry::new();
        let mut registry = Registry::new();

        let scene = {
            let mut ctx = EngineContext {
                rng: &mut rng,
                audio: &mut audio,
                animations: &mut animations,
                registry: &mut registry,
            };
            PlayScene::start(viewport, config.gravity_y, &mut ctx)
        };
        log::info!("game seeded with {}", seed);

        Ok(Self {
            config,
            viewport,
            rng,
            audio,
            animations,
            registry,
            scene: ActiveScene::Play(Box::new(scene)),
            sessions: 1,
        })
    }

    /// Advance the active scene and apply any transition it asks for.
    /// Frame deltas are clamped to [`MAX_FRAME_DT_MS`].
    pub fn frame(&mut self, dt_ms: u64, input: &FrameInput) -> Option<SceneChange> {
        let dt_ms = dt_ms.min(MAX_FRAME_DT_MS);
        let mut ctx = EngineContext {
            rng: &mut self.rng,
            audio: &mut self.audio,
            animations: &mut self.animations,
            registry: &mut self.registry,
        };
        let change = match &mut self.scene {
            ActiveScene::Play(scene) => scene.frame(dt_ms, input, &mut ctx),
            ActiveScene::GameOver(scene) => scene.frame(input),
        };
        if let Some(change) = change {
            self.apply(change);
        }
        change
    }

    fn apply(&mut self, change: SceneChange) {
        match change {
            SceneChange::ToGameOver => {
                log::info!("scene: game over");
                self.scene =
                    ActiveScene::GameOver(GameOverScene::create(self.viewport, &self.registry));
            }
            SceneChange::ToPlay => {
                self.sessions += 1;
                log::info!("scene: play (session {})", self.sessions);
                let mut ctx = EngineContext {
                    rng: &mut self.rng,
                    audio: &mut self.audio,
                    animations: &mut self.animations,
                    registry: &mut self.registry,
                };
                let scene = PlayScene::start(self.viewport, self.config.gravity_y, &mut ctx);
                self.scene = ActiveScene::Play(Box::new(scene));
            }
        }
    }

    pub fn lifecycle(&self) -> SceneLifecycle {
        match self.scene {
            ActiveScene::Play(_) => SceneLifecycle::Playing,
            ActiveScene::GameOver(_) => SceneLifecycle::GameOver,
        }
    }

    pub fn scene(&self) -> &ActiveScene {
        &self.scene
    }

    pub fn play_scene(&self) -> Option<&PlayScene> {
        match &self.scene {
            ActiveScene::Play(scene) => Some(&**scene),
            ActiveScene::GameOver(_) => None,
        }
    }

    pub fn play_scene_mut(&mut self) -> Option<&mut PlayScene> {
        match &mut self.scene {
            ActiveScene::Play(scene) => Some(&mut **scene),
            ActiveScene::GameOver(_) => None,
        }
    }

    pub fn game_over_scene(&self) -> Option<&GameOverScene> {
        match &self.scene {
            ActiveScene::GameOver(scene) => Some(scene),
            ActiveScene::Play(_) => None,
        }
    }

    /// Spawn outside the generator's schedule. `None` off the play scene.
    pub fn spawn_entity(&mut self, request: SpawnRequest) -> Option<EntityId> {
        let ActiveScene::Play(scene) = &mut self.scene else {
            return None;
        };
        let mut ctx = EngineContext {
            rng: &mut self.rng,
            audio: &mut self.audio,
            animations: &mut self.animations,
            registry: &mut self.registry,
        };
        Some(scene.spawn(request, &mut ctx))
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn audio(&self) -> &AudioQueue {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut AudioQueue {
        &mut self.audio
    }

    pub fn animations(&self) -> &AnimationRegistry {
        &self.animations
    }

    /// Play sessions started so far, including the current one.
    pub fn sessions(&self) -> u32 {
        self.sessions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dimension;
    use crate::engine::Key;

    #[test]
    fn test_starts_playing() {
        let game = Game::new(GameConfig::default(), 1).unwrap();
        assert_eq!(game.lifecycle(), SceneLifecycle::Playing);
        assert_eq!(game.sessions(), 1);
        assert!(game.play_scene().is_some());
        assert!(game.game_over_scene().is_none());
    }

    #[test]
    fn test_invalid_dimension_is_rejected() {
        let config = GameConfig {
            width: Dimension::Text("wide".into()),
            ..GameConfig::default()
        };
        let err = Game::new(config, 1).err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_frame_delta_is_clamped() {
        let mut game = Game::new(GameConfig::default(), 1).unwrap();
        game.frame(10_000, &FrameInput::none());

        let scene = game.play_scene().unwrap();
        assert_eq!(scene.now_ms(), 100);
        assert_eq!(scene.score().value(), 1);
    }

    #[test]
    fn test_game_over_ignores_other_keys() {
        let mut game = Game::new(GameConfig::default(), 1).unwrap();
        let mut ctx = EngineContext {
            rng: &mut game.rng,
            audio: &mut game.audio,
            animations: &mut game.animations,
            registry: &mut game.registry,
        };
        if let ActiveScene::Play(scene) = &mut game.scene {
            scene.finish_scene(&mut ctx);
        }
        game.apply(SceneChange::ToGameOver);
        assert_eq!(game.lifecycle(), SceneLifecycle::GameOver);

        assert_eq!(game.frame(16, &FrameInput::key(Key::Other)), None);
        assert_eq!(game.lifecycle(), SceneLifecycle::GameOver);
    }
}
