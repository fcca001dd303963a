//! Step models for the timed animations: stat counters and the journey
//! sequence. Timers only call `tick`; all stepping rules live here.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

/// Total time a stat counter takes to reach its target.
pub const COUNTER_DURATION_MS: u32 = 2_000;
/// Dwell time of each journey step.
pub const JOURNEY_STEP_MS: u32 = 4_500;
/// Number of journey steps (1-based, wrapping).
pub const JOURNEY_STEP_COUNT: u8 = 6;

/// Counts from 0 to a target in unit steps once started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatCounter {
    target: u32,
    current: u32,
    started: bool,
}

impl StatCounter {
    #[must_use]
    pub fn new(target: u32) -> Self {
        Self { target, current: 0, started: false }
    }

    #[must_use]
    pub fn current(&self) -> u32 {
        self.current
    }

    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.current >= self.target
    }

    /// Period between unit increments so the count spans
    /// [`COUNTER_DURATION_MS`]. Never below one millisecond.
    #[must_use]
    pub fn tick_interval_ms(&self) -> u32 {
        if self.target == 0 {
            return COUNTER_DURATION_MS;
        }
        (COUNTER_DURATION_MS / self.target).max(1)
    }

    /// First time the counter scrolls into view. Returns `false` when it was
    /// already running, so the caller starts at most one timer.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        true
    }

    /// Advance by one. Returns whether the counter is still running.
    pub fn tick(&mut self) -> bool {
        if !self.started || self.is_done() {
            return false;
        }
        self.current += 1;
        !self.is_done()
    }
}

/// Cycles 1..=[`JOURNEY_STEP_COUNT`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JourneySequence {
    step: u8,
}

impl Default for JourneySequence {
    fn default() -> Self {
        Self { step: 1 }
    }
}

impl JourneySequence {
    #[must_use]
    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn advance(&mut self) {
        self.step = if self.step >= JOURNEY_STEP_COUNT { 1 } else { self.step + 1 };
    }

    /// Jump to a step picked from the progress dots; out of range is ignored.
    pub fn go_to(&mut self, step: u8) {
        if (1..=JOURNEY_STEP_COUNT).contains(&step) {
            self.step = step;
        }
    }

    /// Whether `step` has been reached (drives the progress rail).
    #[must_use]
    pub fn has_reached(&self, step: u8) -> bool {
        step <= self.step
    }
}
