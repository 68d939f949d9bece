//! UI-agnostic input for one frame.
//!
//! The front end translates terminal events into [`InputEvent`]s; scenes only
//! ask edge questions ("was Space pressed this frame?").

/// Keys the game distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Jump in play, restart on the game-over screen.
    Space,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    PointerDown,
}

/// Everything that happened since the previous frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub events: Vec<InputEvent>,
}

impl FrameInput {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn key(key: Key) -> Self {
        Self {
            events: vec![InputEvent::KeyDown(key)],
        }
    }

    pub fn pointer() -> Self {
        Self {
            events: vec![InputEvent::PointerDown],
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Key went down during this frame.
    pub fn just_pressed(&self, key: Key) -> bool {
        self.events.contains(&InputEvent::KeyDown(key))
    }

    pub fn pointer_down(&self) -> bool {
        self.events.contains(&InputEvent::PointerDown)
    }
}
