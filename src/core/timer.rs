//! Timer Engine: a stopwatch advanced by an external one-second tick.

use crate::models::elapsed::Elapsed;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Stopped,
    Running,
}

#[derive(Debug, Clone)]
pub struct Stopwatch {
    state: TimerState,
    elapsed: Elapsed,
}

impl Default for Stopwatch {
    /// A stopwatch that is already running from 00:00:00.
    fn default() -> Self {
        Self {
            state: TimerState::Running,
            elapsed: Elapsed::ZERO,
        }
    }
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// A running stopwatch that starts from `elapsed` instead of zero.
    pub fn running_from(elapsed: Elapsed) -> Self {
        Self {
            state: TimerState::Running,
            elapsed,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn elapsed(&self) -> Elapsed {
        self.elapsed
    }

    /// One second of wall-clock time has passed. Ignored while stopped.
    pub fn tick(&mut self) {
        if self.is_running() {
            self.elapsed.advance();
        }
    }

    /// Stop counting. The displayed value is left untouched.
    pub fn stop(&mut self) {
        self.state = TimerState::Stopped;
    }

    /// Put the display back to 00:00:00 without changing the state.
    pub fn reset_display(&mut self) {
        self.elapsed = Elapsed::ZERO;
    }
}
