//! Single-slot cancellable timeline for the sequencer.
//!
//! The sequencer never has more than one pending step. Scheduling replaces
//! whatever was armed, so a step scheduled before a pause or reset can never
//! fire afterwards. Time is a logical offset from the sequencer's epoch.

use std::time::Duration;

/// Identifies one scheduled step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimerId(u64);

/// A step that reached its due time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expired {
    pub id: TimerId,
    /// When the step was due (not when it was observed)
    pub due: Duration,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    id: TimerId,
    due: Duration,
}

/// Holds at most one pending step.
#[derive(Debug, Default)]
pub struct Timeline {
    next_id: u64,
    pending: Option<Pending>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a step `delay` after `from`, replacing any pending step.
    pub fn schedule(&mut self, from: Duration, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending = Some(Pending {
            id,
            due: from.saturating_add(delay),
        });
        id
    }

    /// Drop the pending step, if any.
    ///
    /// Safe to call repeatedly; returns whether something was cancelled.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Whether a step is armed.
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Id of the armed step.
    pub fn armed(&self) -> Option<TimerId> {
        self.pending.map(|p| p.id)
    }

    /// When the armed step is due.
    pub fn due_at(&self) -> Option<Duration> {
        self.pending.map(|p| p.due)
    }

    /// Time left until the armed step is due (zero if already expired).
    pub fn time_until(&self, now: Duration) -> Option<Duration> {
        self.pending.map(|p| p.due.saturating_sub(now))
    }

    /// Disarm and return the pending step if it is due at `now`.
    pub fn take_expired(&mut self, now: Duration) -> Option<Expired> {
        match self.pending {
            Some(p) if p.due <= now => {
                self.pending = None;
                Some(Expired {
                    id: p.id,
                    due: p.due,
                })
            }
            _ => None,
        }
    }
}
