//! Shared UI pieces: the bordered layout, the status bar and the cell buffer
//! scenes are drawn into.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use skyhop::core::Viewport;
use skyhop::engine::Aabb;

/// Layout areas returned by `create_game_layout`.
pub struct GameLayout {
    /// Play field - top left, inside outer border
    pub content: Rect,
    /// Status bar (2 lines) - bottom left, inside outer border
    pub status_bar: Rect,
    /// Info panel - right side
    pub info_panel: Rect,
}

/// Create the bordered layout:
/// ```text
/// ┌─ Title ─────────────────────────┬─ Info ──────┐
/// │   [content area]                │  [info]     │
/// │ [status bar - 2 lines]          │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    info_panel_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(info_panel_width)])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(2)])
        .split(h_chunks[0]);

    GameLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
        info_panel: h_chunks[1],
    }
}

/// Render the info panel border, returning the inner area.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Render a 2-line status bar: status message, then `(key, action)` controls.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// `0xRRGGBB` to a terminal color.
pub fn rgb(color: u32) -> Color {
    Color::Rgb(
        ((color >> 16) & 0xff) as u8,
        ((color >> 8) & 0xff) as u8,
        (color & 0xff) as u8,
    )
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
}

/// A grid of cells covering the viewport, scaled to the terminal area.
pub struct CellBuffer {
    cells: Vec<Vec<Cell>>,
    width: usize,
    height: usize,
    x_scale: f64,
    y_scale: f64,
}

impl CellBuffer {
    /// Buffer of `cols` x `rows` filled with `background`, mapping `viewport`
    /// pixels onto it.
    pub fn new(cols: u16, rows: u16, viewport: Viewport, background: Color) -> Self {
        let width = cols as usize;
        let height = rows as usize;
        let blank = Cell {
            ch: ' ',
            fg: Color::Reset,
            bg: background,
            bold: false,
        };
        Self {
            cells: vec![vec![blank; width]; height],
            width,
            height,
            x_scale: width as f64 / viewport.width.max(1) as f64,
            y_scale: height as f64 / viewport.height.max(1) as f64,
        }
    }

    pub fn col(&self, x: f64) -> i32 {
        (x * self.x_scale).floor() as i32
    }

    pub fn row(&self, y: f64) -> i32 {
        (y * self.y_scale).floor() as i32
    }

    pub fn get(&self, col: usize, row: usize) -> Option<&Cell> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    /// Set a glyph, keeping the cell's background. Out-of-range is ignored.
    pub fn put(&mut self, col: i32, row: i32, ch: char, fg: Color) {
        if col < 0 || row < 0 {
            return;
        }
        if let Some(cell) = self
            .cells
            .get_mut(row as usize)
            .and_then(|r| r.get_mut(col as usize))
        {
            cell.ch = ch;
            cell.fg = fg;
        }
    }

    /// Fill the cells a box covers; always at least one cell.
    pub fn fill_box(&mut self, aabb: &Aabb, ch: char, fg: Color) {
        let left = self.col(aabb.left());
        let top = self.row(aabb.top());
        let right = self.col(aabb.right()).max(left + 1);
        let bottom = self.row(aabb.bottom()).max(top + 1);
        for row in top..bottom {
            for col in left..right {
                self.put(col, row, ch, fg);
            }
        }
    }

    /// Write `text` centered on viewport point (x, y).
    pub fn put_text_centered(&mut self, x: f64, y: f64, text: &str, fg: Color, bold: bool) {
        let len = text.chars().count() as i32;
        let start = self.col(x) - len / 2;
        let row = self.row(y);
        if row < 0 || row as usize >= self.height {
            return;
        }
        for (i, ch) in text.chars().enumerate() {
            let col = start + i as i32;
            if col < 0 || col as usize >= self.width {
                continue;
            }
            let cell = &mut self.cells[row as usize][col as usize];
            cell.ch = ch;
            cell.fg = fg;
            cell.bold = bold;
        }
    }

    /// Stamp the buffer row by row, merging runs of equal style into spans.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        for (row_idx, row_data) in self.cells.iter().enumerate() {
            if row_idx as u16 >= area.height {
                break;
            }
            let mut spans: Vec<Span> = Vec::new();
            let mut current_style = Style::default();
            let mut current_text = String::new();

            for cell in row_data {
                let mut style = Style::default().fg(cell.fg).bg(cell.bg);
                if cell.bold {
                    style = style.add_modifier(Modifier::BOLD);
                }
                if style != current_style && !current_text.is_empty() {
                    spans.push(Span::styled(
                        std::mem::take(&mut current_text),
                        current_style,
                    ));
                }
                current_style = style;
                current_text.push(cell.ch);
            }
            if !current_text.is_empty() {
                spans.push(Span::styled(current_text, current_style));
            }

            let row_area = Rect::new(area.x, area.y + row_idx as u16, area.width, 1);
            frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
        }
    }
}
