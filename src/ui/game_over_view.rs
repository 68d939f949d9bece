//! Game-over screen rendering.

use ratatui::{layout::Rect, style::Color, Frame};

use super::game_common::{create_game_layout, render_status_bar, rgb, CellBuffer};
use super::Hud;
use skyhop::world::GameOverScene;

/// Labels this size and up are drawn bold.
const BOLD_FROM_SIZE: u16 = 25;

pub fn render_game_over_view(frame: &mut Frame, area: Rect, scene: &GameOverScene, hud: &Hud) {
    let layout = create_game_layout(frame, area, " Skyhop ", Color::Red, 20);

    if layout.content.height >= 2 && layout.content.width >= 10 {
        let mut buffer = CellBuffer::new(
            layout.content.width,
            layout.content.height,
            scene.viewport(),
            rgb(scene.background()),
        );
        for label in scene.labels() {
            buffer.put_text_centered(
                label.x,
                label.y,
                &label.text,
                Color::White,
                label.size >= BOLD_FROM_SIZE,
            );
        }
        buffer.render(frame, layout.content);
    }

    let status = format!("Run {} over", hud.session);
    render_status_bar(
        frame,
        layout.status_bar,
        &status,
        Color::Red,
        &[("[Space/Click]", "Restart"), ("[Q/Esc]", "Quit")],
    );
}
