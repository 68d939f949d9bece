//! Game-over screen: final score and a restart prompt.

use super::game::SceneChange;
use crate::core::constants::*;
use crate::core::Viewport;
use crate::engine::{FrameInput, Key, Registry, TextLabel};

#[derive(Debug, Clone)]
pub struct GameOverScene {
    viewport: Viewport,
    background: u32,
    score_label: TextLabel,
    title: TextLabel,
    prompt: TextLabel,
}

impl GameOverScene {
    pub fn create(viewport: Viewport, registry: &Registry) -> Self {
        let center_w = viewport.center_width();
        Self {
            viewport,
            background: SKY_COLOR,
            score_label: TextLabel::new(
                center_w,
                FINAL_SCORE_Y,
                registry.get_text(SCORE_KEY),
                FINAL_SCORE_SIZE,
            ),
            title: TextLabel::new(
                center_w,
                viewport.center_height(),
                GAME_OVER_TEXT,
                GAME_OVER_SIZE,
            ),
            prompt: TextLabel::new(center_w, RESTART_Y, RESTART_TEXT, RESTART_SIZE),
        }
    }

    /// Restart on Space or a click.
    pub fn frame(&mut self, input: &FrameInput) -> Option<SceneChange> {
        if input.just_pressed(Key::Space) || input.pointer_down() {
            Some(SceneChange::ToPlay)
        } else {
            None
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn background(&self) -> u32 {
        self.background
    }

    /// Score, title and prompt, top to bottom.
    pub fn labels(&self) -> [&TextLabel; 3] {
        [&self.score_label, &self.title, &self.prompt]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_from_registry() {
        let mut registry = Registry::new();
        registry.set(SCORE_KEY, "12345");
        let scene = GameOverScene::create(Viewport { width: 800, height: 300 }, &registry);

        let [score, title, prompt] = scene.labels();
        assert_eq!((score.x, score.y, score.size), (400.0, 50.0, 25));
        assert_eq!(score.text, "12345");
        assert_eq!((title.x, title.y, title.size), (400.0, 150.0, 45));
        assert_eq!(title.text, "GAME OVER");
        assert_eq!((prompt.x, prompt.y, prompt.size), (400.0, 250.0, 15));
        assert_eq!(prompt.text, "Press SPACE or click to restart!");
        assert_eq!(scene.background(), 0x87ceeb);
    }

    #[test]
    fn test_restart_inputs() {
        let mut scene = GameOverScene::create(Viewport::default(), &Registry::new());

        assert_eq!(scene.frame(&FrameInput::none()), None);
        assert_eq!(scene.frame(&FrameInput::key(Key::Other)), None);
        assert_eq!(scene.frame(&FrameInput::key(Key::Space)), Some(SceneChange::ToPlay));
        assert_eq!(scene.frame(&FrameInput::pointer()), Some(SceneChange::ToPlay));
    }
}
