//! Session score and its on-screen label.

use crate::core::constants::{SCORE_LABEL_SIZE, SCORE_LABEL_Y};
use crate::engine::TextLabel;

#[derive(Debug, Clone)]
pub struct ScoreState {
    value: u64,
    label: TextLabel,
}

impl ScoreState {
    /// Zero score with its label anchored at top-center.
    pub fn new(center_width: f64) -> Self {
        Self {
            value: 0,
            label: TextLabel::new(center_width, SCORE_LABEL_Y, "0", SCORE_LABEL_SIZE),
        }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn label(&self) -> &TextLabel {
        &self.label
    }

    pub fn add(&mut self, points: u64) -> u64 {
        self.value += points;
        self.label.set_text(self.value.to_string());
        self.value
    }
}
