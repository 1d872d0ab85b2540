//! Entry countdown measured against a fixed window.

use crate::time::{TimeDuration, TimeInstant};
use crate::types::CountdownStatus;

/// Measures elapsed time since a start instant against a fixed window.
///
/// Only [`start`](Self::start) mutates; status queries are pure reads given
/// the current time. A countdown that was never started reports `Running`.
#[derive(Clone, Copy)]
pub struct Countdown<I: TimeInstant> {
    reference: Option<I>,
    window: I::Duration,
}

impl<I: TimeInstant> Countdown<I> {
    /// Creates a countdown with the given window, not yet started.
    pub fn new(window: I::Duration) -> Self {
        Self {
            reference: None,
            window,
        }
    }

    /// Records `now` as the reference instant.
    ///
    /// Starting an already-started countdown restarts it.
    pub fn start(&mut self, now: I) {
        self.reference = Some(now);
    }

    /// Returns `Expired` once `now - reference >= window`.
    ///
    /// The boundary is inclusive on the expired side: at exactly the window
    /// the countdown has expired. Before [`start`](Self::start) this returns
    /// `Running`.
    pub fn status(&self, now: I) -> CountdownStatus {
        match self.reference {
            Some(reference)
                if now.duration_since(reference).as_millis() >= self.window.as_millis() =>
            {
                CountdownStatus::Expired
            }
            _ => CountdownStatus::Running,
        }
    }

    /// Returns the time left in the window, saturating at zero.
    ///
    /// Before [`start`](Self::start) the full window remains.
    pub fn remaining(&self, now: I) -> I::Duration {
        match self.reference {
            Some(reference) => self.window.saturating_sub(now.duration_since(reference)),
            None => self.window,
        }
    }
}
