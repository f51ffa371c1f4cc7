//! Fixed-timestep step scheduling.
//!
//! Decouples the rendering frame rate from the rate at which logical sort
//! steps occur, so animation speed stays controllable independently of how
//! fast the host redraws.

use web_time::{Duration, Instant};

/// Floor for the step rate; also what invalid speeds are clamped to.
pub const MIN_SPEED: u32 = 1;

/// Fixed-timestep accumulator gating how often the state machine advances.
///
/// Elapsed time accrues into the accumulator; whenever it reaches the step
/// interval (`1 / speed` seconds), one step fires and the interval is
/// subtracted — not reset — so surplus time carries forward instead of
/// being lost on slow frames. At most one step fires per tick.
///
/// While paused the accumulator is frozen entirely: resuming does not
/// produce a catch-up burst of steps.
#[derive(Debug, Clone)]
pub struct StepClock {
    /// Logical steps per second. Always `>= MIN_SPEED`.
    speed: u32,
    /// Unspent elapsed time.
    accumulator: Duration,
    paused: bool,
}

impl StepClock {
    /// Clock firing `speed` steps per second, floor-clamped to
    /// [`MIN_SPEED`].
    #[must_use]
    pub fn new(speed: u32) -> Self {
        Self {
            speed: speed.max(MIN_SPEED),
            accumulator: Duration::ZERO,
            paused: false,
        }
    }

    /// Current step rate in steps per second.
    #[must_use]
    pub const fn speed(&self) -> u32 {
        self.speed
    }

    /// Set the step rate, floor-clamped to [`MIN_SPEED`].
    pub fn set_speed(&mut self, speed: u32) {
        self.speed = speed.max(MIN_SPEED);
    }

    /// Raise the step rate by one step per second.
    pub fn increase_speed(&mut self) {
        self.speed = self.speed.saturating_add(1);
    }

    /// Lower the step rate by one step per second, stopping at the floor.
    pub fn decrease_speed(&mut self) {
        self.speed = self.speed.saturating_sub(1).max(MIN_SPEED);
    }

    /// Whether stepping is suspended.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Toggle pause. Pausing freezes the accumulator.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Interval between logical steps at the current speed.
    #[must_use]
    pub fn step_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.speed))
    }

    /// Feed elapsed time since the previous tick.
    ///
    /// Returns `true` when one logical step should fire.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if self.paused {
            return false;
        }
        self.accumulator = self.accumulator.saturating_add(delta);
        let interval = self.step_interval();
        if self.accumulator >= interval {
            self.accumulator -= interval;
            return true;
        }
        false
    }

    /// Drop any accumulated surplus. Used when a sort (re)starts so the
    /// first step does not fire early from stale time.
    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}

/// Measures real elapsed time between external ticks.
///
/// The host calls [`delta`](Self::delta) once per frame and feeds the
/// result to [`StepClock::tick`].
#[derive(Debug)]
pub struct TickTimer {
    last: Instant,
}

impl TickTimer {
    /// Timer starting now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Duration since the previous call (or since construction).
    pub fn delta(&mut self) -> Duration {
        let now = Instant::now();
        let delta = now.duration_since(self.last);
        self.last = now;
        delta
    }
}

impl Default for TickTimer {
    fn default() -> Self {
        Self::new()
    }
}
