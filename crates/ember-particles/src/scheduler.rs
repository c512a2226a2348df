//! Spawn timing against a configured interval

/// Accumulates frame time and signals when a spawn is due.
///
/// The accumulator resets to zero on every signal, discarding any surplus
/// beyond the interval. Combined with returning at most one signal per
/// `advance` call, this caps the spawn rate at one particle per tick: a
/// stalled 500ms frame against a 100ms interval yields one spawn, not five.
pub struct SpawnScheduler {
    interval_ms: u32,
    elapsed_ms: u32,
}

impl SpawnScheduler {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            elapsed_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Change the spawn interval. Time already accumulated still counts
    /// toward the next spawn.
    pub fn set_interval_ms(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms;
    }

    /// Advance by `dt_ms`. Returns true exactly once when the accumulated
    /// time reaches the interval, resetting the accumulator to zero.
    /// An interval of 0 signals on every call.
    pub fn advance(&mut self, dt_ms: u32) -> bool {
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        if self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms = 0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signals_once_per_interval() {
        let mut sched = SpawnScheduler::new(100);
        assert!(!sched.advance(50));
        assert!(sched.advance(50));
        assert!(!sched.advance(50));
    }

    #[test]
    fn half_interval_twice_yields_one_signal() {
        let mut sched = SpawnScheduler::new(100);
        let signals = [sched.advance(50), sched.advance(50)];
        assert_eq!(signals.iter().filter(|s| **s).count(), 1);
    }

    #[test]
    fn oversized_tick_yields_single_signal() {
        let mut sched = SpawnScheduler::new(100);
        // 300ms in one tick is still one spawn, and the surplus is not
        // carried into the next interval
        assert!(sched.advance(300));
        assert!(!sched.advance(50));
        assert!(!sched.advance(49));
        assert!(sched.advance(1));
    }

    #[test]
    fn zero_dt_is_a_no_op() {
        let mut sched = SpawnScheduler::new(100);
        assert!(!sched.advance(0));
        assert!(!sched.advance(0));
    }

    #[test]
    fn zero_interval_signals_every_tick() {
        let mut sched = SpawnScheduler::new(0);
        assert!(sched.advance(0));
        assert!(sched.advance(16));
    }

    #[test]
    fn interval_change_keeps_accumulated_time() {
        let mut sched = SpawnScheduler::new(1000);
        assert_eq!(sched.interval_ms(), 1000);
        assert!(!sched.advance(90));
        sched.set_interval_ms(100);
        assert_eq!(sched.interval_ms(), 100);
        assert!(sched.advance(10));
    }
}
