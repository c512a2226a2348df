//! Frame clock with millisecond deltas and a fixed-timestep accumulator

use std::time::Instant;

/// Tracks game time and hands out whole-millisecond frame deltas.
///
/// Simulation state in Ember is advanced in integer milliseconds, so the
/// clock floors each frame's elapsed time to whole milliseconds and carries
/// the sub-millisecond remainder into the next frame. Over many frames no
/// time is lost.
pub struct FrameClock {
    /// Total delivered game time in whole milliseconds
    pub total_ms: u64,
    /// Delta delivered for the current frame, in whole milliseconds
    pub delta_ms: u32,
    /// Fixed timestep interval in milliseconds (default: 16, roughly 60Hz)
    pub fixed_timestep_ms: u32,
    /// Accumulated milliseconds for fixed-step consumption
    accumulator_ms: u32,
    /// Sub-millisecond remainder carried into the next frame
    carry_ms: f64,
    /// Last tick instant
    last_instant: Instant,
    /// Whether this is the first tick
    first_tick: bool,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            total_ms: 0,
            delta_ms: 0,
            fixed_timestep_ms: 16,
            accumulator_ms: 0,
            carry_ms: 0.0,
            last_instant: Instant::now(),
            first_tick: true,
        }
    }
}

impl FrameClock {
    /// Create a new frame clock with the default 16ms fixed timestep
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a frame clock with a custom fixed timestep in milliseconds.
    /// A zero timestep is bumped to 1ms so fixed-step loops always drain.
    pub fn with_fixed_timestep_ms(ms: u32) -> Self {
        Self {
            fixed_timestep_ms: ms.max(1),
            ..Self::default()
        }
    }

    /// Advance the clock. Call once per frame.
    pub fn tick(&mut self) {
        let now = Instant::now();

        if self.first_tick {
            self.first_tick = false;
            self.last_instant = now;
            self.delta_ms = 0;
            return;
        }

        let elapsed = now.duration_since(self.last_instant).as_secs_f64();
        self.last_instant = now;
        self.apply_elapsed(elapsed);
    }

    /// Fold elapsed wall-clock seconds into the delivered millisecond counters
    fn apply_elapsed(&mut self, elapsed_secs: f64) {
        // Clamp to avoid spiral of death (max 250ms frame time)
        let ms = elapsed_secs.min(0.25) * 1000.0 + self.carry_ms;
        let whole = ms.floor();
        self.carry_ms = ms - whole;
        self.delta_ms = whole as u32;
        self.total_ms += u64::from(self.delta_ms);
        // Saturate rather than wrap if fixed updates stop draining for weeks
        self.accumulator_ms = self.accumulator_ms.saturating_add(self.delta_ms);
    }

    /// Returns true if there's enough accumulated time for a fixed update step
    pub fn should_fixed_update(&self) -> bool {
        self.accumulator_ms >= self.fixed_timestep_ms
    }

    /// Consume one fixed timestep from the accumulator. Intended to be
    /// called in a loop draining `should_fixed_update`; a call with
    /// nothing accumulated clamps at zero rather than wrapping.
    pub fn consume_fixed_step(&mut self) {
        self.accumulator_ms = self.accumulator_ms.saturating_sub(self.fixed_timestep_ms);
    }

    /// Get the interpolation alpha for rendering between fixed steps
    pub fn interpolation_alpha(&self) -> f64 {
        f64::from(self.accumulator_ms) / f64::from(self.fixed_timestep_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_defaults() {
        let clock = FrameClock::new();
        assert_eq!(clock.fixed_timestep_ms, 16);
        assert_eq!(clock.total_ms, 0);
        assert_eq!(clock.delta_ms, 0);
    }

    #[test]
    fn test_custom_timestep() {
        let clock = FrameClock::with_fixed_timestep_ms(33);
        assert_eq!(clock.fixed_timestep_ms, 33);

        let degenerate = FrameClock::with_fixed_timestep_ms(0);
        assert_eq!(degenerate.fixed_timestep_ms, 1);
    }

    #[test]
    fn test_first_tick_zero_delta() {
        let mut clock = FrameClock::new();
        clock.tick();
        assert_eq!(clock.delta_ms, 0);
        assert_eq!(clock.total_ms, 0);
    }

    #[test]
    fn test_millisecond_carry() {
        let mut clock = FrameClock::new();

        // 16.5ms floors to 16 with 0.5ms carried
        clock.apply_elapsed(0.0165);
        assert_eq!(clock.delta_ms, 16);

        // Carry tips the next 16.5ms frame over to 17
        clock.apply_elapsed(0.0165);
        assert_eq!(clock.delta_ms, 17);
        assert_eq!(clock.total_ms, 33);
    }

    #[test]
    fn test_frame_time_clamp() {
        let mut clock = FrameClock::new();
        clock.apply_elapsed(2.0);
        assert_eq!(clock.delta_ms, 250);
    }

    #[test]
    fn test_accumulator_logic() {
        let mut clock = FrameClock::new();
        clock.fixed_timestep_ms = 16;
        // Two fixed steps worth
        clock.accumulator_ms = 32;

        assert!(clock.should_fixed_update());
        clock.consume_fixed_step();
        assert!(clock.should_fixed_update());
        clock.consume_fixed_step();
        assert!(!clock.should_fixed_update());
    }

    #[test]
    fn test_accumulator_saturation() {
        let mut clock = FrameClock::new();
        clock.accumulator_ms = u32::MAX - 10;
        clock.apply_elapsed(0.25);
        assert_eq!(clock.accumulator_ms, u32::MAX);
        assert!(clock.should_fixed_update());

        let mut clock = FrameClock::new();
        clock.consume_fixed_step();
        assert_eq!(clock.accumulator_ms, 0);
        assert!(!clock.should_fixed_update());
    }

    #[test]
    fn test_interpolation_alpha() {
        let mut clock = FrameClock::new();
        clock.fixed_timestep_ms = 16;
        clock.accumulator_ms = 8;
        let alpha = clock.interpolation_alpha();
        assert!((alpha - 0.5).abs() < 1e-10);
    }
}
