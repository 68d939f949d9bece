//! Terminal rendering for the two scenes.

mod game_common;
mod game_over_view;
mod play_view;

use ratatui::Frame;

use skyhop::engine::Sound;
use skyhop::world::{ActiveScene, Game};

/// Front-end state shown next to the scene.
#[derive(Debug, Clone, Default)]
pub struct Hud {
    /// Most recent one-shot sound, shown as a text cue.
    pub last_cue: Option<Sound>,
    pub session: u32,
}

pub fn draw(frame: &mut Frame, game: &Game, hud: &Hud) {
    let area = frame.size();
    match game.scene() {
        ActiveScene::Play(scene) => play_view::render_play_view(frame, area, scene, hud),
        ActiveScene::GameOver(scene) => {
            game_over_view::render_game_over_view(frame, area, scene, hud)
        }
    }
}
