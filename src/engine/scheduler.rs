//! Delayed and repeating timers driven by the frame loop.
//!
//! Timers carry a task value instead of a callback. `advance` moves the clock
//! forward and hands back every task that came due, ordered by due time and
//! then by creation order. What a task means is up to the caller, which keeps
//! every scheduled behavior testable without a real clock.

/// Handle to a scheduled timer. Ids increase with creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Timer<T> {
    id: TimerId,
    due_ms: u64,
    /// `Some` for repeating timers.
    period_ms: Option<u64>,
    task: T,
}

/// A task whose timer came due during `advance`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<T> {
    pub id: TimerId,
    pub due_ms: u64,
    pub task: T,
}

/// Millisecond timer queue owned by a single scene.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now_ms: u64,
    next_id: u64,
    timers: Vec<Timer<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 1,
            timers: Vec::new(),
        }
    }

    /// Scene-local clock in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Run `task` once, `delay_ms` from now.
    pub fn schedule_once(&mut self, delay_ms: u64, task: T) -> TimerId {
        self.push(self.now_ms + delay_ms, None, task)
    }

    /// Run `task` once, `delay_ms` after `origin_ms`.
    ///
    /// Re-arming from a fired timer's `due_ms` keeps a chain on its own
    /// cadence regardless of frame boundaries. A due time already in the
    /// past fires on the next `advance`.
    pub fn schedule_once_from(&mut self, origin_ms: u64, delay_ms: u64, task: T) -> TimerId {
        self.push(origin_ms + delay_ms, None, task)
    }

    /// Run `task` every `period_ms`, first firing one period from now.
    pub fn schedule_repeating(&mut self, period_ms: u64, task: T) -> TimerId {
        // A zero period would fire forever inside a single advance.
        let period_ms = period_ms.max(1);
        self.push(self.now_ms + period_ms, Some(period_ms), task)
    }

    fn push(&mut self, due_ms: u64, period_ms: Option<u64>, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            due_ms,
            period_ms,
            task,
        });
        id
    }

    /// Destroy a timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    pub fn pending_count(&self) -> usize {
        self.timers.len()
    }

    /// Pending timers as `(id, remaining_ms, task)`.
    pub fn pending(&self) -> impl Iterator<Item = (TimerId, u64, &T)> + '_ {
        self.timers
            .iter()
            .map(move |t| (t.id, t.due_ms.saturating_sub(self.now_ms), &t.task))
    }

    fn next_due(&self) -> Option<usize> {
        self.timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= self.now_ms)
            .min_by_key(|(_, t)| (t.due_ms, t.id))
            .map(|(i, _)| i)
    }
}

impl<T: Clone> Scheduler<T> {
    /// Move the clock forward and collect every task that came due.
    ///
    /// Repeating timers fire once per elapsed period, so a long frame
    /// catches up instead of dropping ticks.
    pub fn advance(&mut self, dt_ms: u64) -> Vec<Fired<T>> {
        self.now_ms += dt_ms;

        let mut fired = Vec::new();
        while let Some(idx) = self.next_due() {
            let timer = &mut self.timers[idx];
            fired.push(Fired {
                id: timer.id,
                due_ms: timer.due_ms,
                task: timer.task.clone(),
            });
            match timer.period_ms {
                Some(period) => timer.due_ms += period,
                None => {
                    self.timers.remove(idx);
                }
            }
        }
        fired
    }
}
