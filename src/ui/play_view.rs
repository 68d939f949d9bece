//! Play scene rendering.
//!
//! The viewport is drawn into a sky-colored cell buffer: clouds as shaded
//! blocks, obstacles solid red, coins as a spinning glyph and the player as a
//! square that tumbles while airborne.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::game_common::{
    create_game_layout, render_info_panel_frame, render_status_bar, rgb, CellBuffer,
};
use super::Hud;
use skyhop::core::constants::{COIN_LAST_FRAME, PLAYER_COLOR};
use skyhop::world::entity::Appearance;
use skyhop::world::{Collection, EntityKind, MovingEntity, PlayScene};

const COIN_GLYPHS: [char; 4] = ['●', '◐', '|', '◑'];
const PLAYER_GLYPHS: [char; 4] = ['■', '◆', '■', '◆'];

pub fn render_play_view(frame: &mut Frame, area: Rect, scene: &PlayScene, hud: &Hud) {
    let layout = create_game_layout(frame, area, " Skyhop ", Color::LightCyan, 20);

    render_play_field(frame, layout.content, scene);
    render_status(frame, layout.status_bar, hud);
    render_info_panel(frame, layout.info_panel, scene, hud);
}

fn render_play_field(frame: &mut Frame, area: Rect, scene: &PlayScene) {
    if area.height < 2 || area.width < 10 {
        return;
    }

    let mut buffer = CellBuffer::new(
        area.width,
        area.height,
        scene.viewport(),
        rgb(scene.background()),
    );

    // Clouds first so everything else draws over them.
    for entity in scene.stage().iter() {
        if entity.kind == EntityKind::Decoration {
            draw_entity(&mut buffer, entity);
        }
    }
    for entity in scene.stage().iter() {
        if entity.kind != EntityKind::Decoration {
            draw_entity(&mut buffer, entity);
        }
    }

    let player = scene.player();
    let quarter = ((player.rotation.rem_euclid(360.0)) / 90.0) as usize % 4;
    buffer.fill_box(&player.body.aabb(), PLAYER_GLYPHS[quarter], rgb(PLAYER_COLOR));

    let label = scene.score().label();
    buffer.put_text_centered(label.x, label.y, &label.text, Color::White, true);

    buffer.render(frame, area);
}

fn draw_entity(buffer: &mut CellBuffer, entity: &MovingEntity) {
    let aabb = entity.body.aabb();
    match (&entity.appearance, entity.kind) {
        (Appearance::Rect { color }, EntityKind::Decoration) => {
            let ch = if entity.scale < 1.0 { '░' } else { '▒' };
            buffer.fill_box(&aabb, ch, rgb(*color));
        }
        (Appearance::Rect { color }, _) => buffer.fill_box(&aabb, '█', rgb(*color)),
        (Appearance::Sprite { .. }, _) => {
            let frame = entity.frame().unwrap_or(0).min(COIN_LAST_FRAME) as usize;
            buffer.fill_box(&aabb, COIN_GLYPHS[frame / 2 % 4], Color::Yellow);
        }
    }
}

fn render_status(frame: &mut Frame, area: Rect, hud: &Hud) {
    let status = match hud.last_cue {
        Some(sound) => format!("Run! ♪ {}", sound.key()),
        None => "Run!".to_string(),
    };
    render_status_bar(
        frame,
        area,
        &status,
        Color::LightCyan,
        &[("[Space/Up/Click]", "Jump"), ("[Q/Esc]", "Quit")],
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, scene: &PlayScene, hud: &Hud) {
    let inner = render_info_panel_frame(frame, area);
    let stage = scene.stage();

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                scene.score().value().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Time: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.1}s", scene.now_ms() as f64 / 1000.0),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Run: ", Style::default().fg(Color::DarkGray)),
            Span::styled(hud.session.to_string(), Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Obstacles: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                stage.group(Collection::Obstacles).len().to_string(),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Coins: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                stage.group(Collection::Coins).len().to_string(),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(" ■ ", Style::default().fg(rgb(PLAYER_COLOR))),
            Span::styled("You", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" █ ", Style::default().fg(Color::Red)),
            Span::styled("Obstacle", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" ● ", Style::default().fg(Color::Yellow)),
            Span::styled("Coin +1000", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
