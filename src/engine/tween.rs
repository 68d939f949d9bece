//! Linear property interpolation.

/// How many times a tween plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Forever,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TweenState {
    Active,
    Completed,
    Stopped,
}

/// Result of advancing a tween by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenStep {
    pub value: f64,
    /// True on exactly one step: the one that reached the end of a `Once` tween.
    pub completed: bool,
}

/// Interpolates a single value from `from` to `to` over `duration_ms`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
    pub repeat: Repeat,
    elapsed_ms: f64,
    state: TweenState,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms,
            repeat: Repeat::Once,
            elapsed_ms: 0.0,
            state: TweenState::Active,
        }
    }

    /// Restart from `from` every time the end is reached, never completing.
    pub fn looping(mut self) -> Self {
        self.repeat = Repeat::Forever;
        self
    }

    /// Fraction of the current cycle in [0, 1].
    pub fn progress(&self) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn value(&self) -> f64 {
        self.from + (self.to - self.from) * self.progress()
    }

    pub fn is_active(&self) -> bool {
        self.state == TweenState::Active
    }

    pub fn is_completed(&self) -> bool {
        self.state == TweenState::Completed
    }

    /// Halt in place. A stopped tween never reports completion.
    pub fn stop(&mut self) {
        if self.state == TweenState::Active {
            self.state = TweenState::Stopped;
        }
    }

    pub fn advance(&mut self, dt_ms: f64) -> TweenStep {
        if self.state != TweenState::Active {
            return TweenStep {
                value: self.value(),
                completed: false,
            };
        }

        self.elapsed_ms += dt_ms.max(0.0);

        let mut completed = false;
        if self.elapsed_ms >= self.duration_ms {
            match self.repeat {
                Repeat::Once => {
                    self.elapsed_ms = self.duration_ms;
                    self.state = TweenState::Completed;
                    completed = true;
                }
                Repeat::Forever if self.duration_ms > 0.0 => {
                    self.elapsed_ms %= self.duration_ms;
                }
                Repeat::Forever => self.elapsed_ms = 0.0,
            }
        }

        TweenStep {
            value: self.value(),
            completed,
        }
    }
}
