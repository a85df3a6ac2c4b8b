//! Tick scheduling
//!
//! The simulation never schedules itself. A `Clock` decides when ticks
//! happen; the session starts, stops and re-arms it.

/// Maximum ticks released by a single `ManualClock::advance` call
pub const MAX_CATCH_UP_TICKS: u32 = 8;

/// A fixed-rate tick source
pub trait Clock {
    /// Begin ticking every `period_ms`
    fn start(&mut self, period_ms: u32);
    /// Stop ticking; nothing fires until the next start
    fn stop(&mut self);
    /// Begin ticking every `period_ms` once `delay_ms` has passed
    fn start_after(&mut self, delay_ms: u32, period_ms: u32);
    fn is_running(&self) -> bool;
}

/// Clock driven by explicitly reported elapsed time
///
/// Used by tests and the headless runner. Elapsed time goes into an
/// accumulator that releases whole ticks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualClock {
    running: bool,
    period_ms: u32,
    /// Time still to wait before ticks resume
    delay_ms: u32,
    accumulator_ms: u32,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Remaining start delay, if any
    pub fn pending_delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Let `elapsed_ms` pass and return how many ticks are now due
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.running || self.period_ms == 0 {
            return 0;
        }

        let mut elapsed = elapsed_ms;
        if self.delay_ms > 0 {
            let waited = elapsed.min(self.delay_ms);
            self.delay_ms -= waited;
            elapsed -= waited;
        }

        self.accumulator_ms = self.accumulator_ms.saturating_add(elapsed);
        let due = (self.accumulator_ms / self.period_ms).min(MAX_CATCH_UP_TICKS);
        self.accumulator_ms -= due * self.period_ms;
        if due == MAX_CATCH_UP_TICKS {
            // Drop the backlog rather than spiral
            self.accumulator_ms %= self.period_ms;
        }
        due
    }
}

impl Clock for ManualClock {
    fn start(&mut self, period_ms: u32) {
        self.start_after(0, period_ms);
    }

    fn stop(&mut self) {
        self.running = false;
        self.delay_ms = 0;
        self.accumulator_ms = 0;
    }

    fn start_after(&mut self, delay_ms: u32, period_ms: u32) {
        self.running = true;
        self.period_ms = period_ms;
        self.delay_ms = delay_ms;
        self.accumulator_ms = 0;
    }

    fn is_running(&self) -> bool {
        self.running
    }
}
