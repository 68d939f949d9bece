//! Text labels.

/// A line of text positioned in viewport pixels, centered on (x, y).
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub size: u16,
}

impl TextLabel {
    pub fn new(x: f64, y: f64, text: impl Into<String>, size: u16) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            size,
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}
