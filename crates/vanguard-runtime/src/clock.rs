//! Monotonic millisecond clocks

use std::time::Instant;
use vanguard_core::Millis;

/// Supplies monotonically increasing elapsed time in milliseconds
pub trait Clock {
    fn now_ms(&self) -> Millis;
}

/// Wall-clock time since construction (or the last `reset`), with per-frame delta tracking
pub struct GameClock {
    /// Time since last frame in milliseconds
    pub delta_ms: Millis,
    /// Start of the elapsed-time counter
    origin: Instant,
    /// Last tick instant
    last_instant: Instant,
    /// Whether this is the first tick
    first_tick: bool,
}

impl Default for GameClock {
    fn default() -> Self {
        let now = Instant::now();
        Self {
            delta_ms: 0.0,
            origin: now,
            last_instant: now,
            first_tick: true,
        }
    }
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restart the elapsed-time counter at zero
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance the frame delta. Call once per frame.
    pub fn tick(&mut self) {
        let now = Instant::now();

        if self.first_tick {
            self.first_tick = false;
            self.last_instant = now;
            self.delta_ms = 0.0;
            return;
        }

        let elapsed = now.duration_since(self.last_instant).as_secs_f64() * 1000.0;
        self.last_instant = now;

        // Clamp to avoid spiral of death (max 250ms frame time)
        self.delta_ms = elapsed.min(250.0);
    }

    /// Frames per second implied by the last delta
    pub fn frame_rate(&self) -> f64 {
        if self.delta_ms > 0.0 {
            1000.0 / self.delta_ms
        } else {
            0.0
        }
    }
}

impl Clock for GameClock {
    fn now_ms(&self) -> Millis {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Deterministic clock advanced explicitly by the caller
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now: Millis,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(now: Millis) -> Self {
        Self { now }
    }

    /// Move time forward; negative steps are ignored so time never runs backwards
    pub fn advance(&mut self, ms: Millis) {
        if ms > 0.0 {
            self.now += ms;
        }
    }

    pub fn set(&mut self, now: Millis) {
        self.now = self.now.max(now);
    }

    pub fn reset(&mut self) {
        self.now = 0.0;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> Millis {
        self.now
    }
}
