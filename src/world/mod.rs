//! The game itself: scrolling entities, their generator, the player and the
//! two scenes.

pub mod entity;
pub mod game;
pub mod game_over;
pub mod generator;
pub mod play_scene;
pub mod player;
pub mod score;
pub mod stage;

pub use entity::{EntityId, EntityKind, MovingEntity, SpawnY};
pub use game::{ActiveScene, Game, SceneChange, SceneLifecycle};
pub use game_over::GameOverScene;
pub use generator::{Generator, SpawnRequest, SpawnSequence};
pub use play_scene::{PlayScene, SceneTask};
pub use player::Player;
pub use score::ScoreState;
pub use stage::{Collection, Stage};
