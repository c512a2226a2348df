//! Random source boundary and attribute sampling

/// Source of randomness for attribute sampling.
///
/// Injected into the simulator at construction, never resolved from a
/// global, so tests can substitute a deterministic implementation.
pub trait RandomSource {
    /// Uniform float in [min, max). Callers pass min <= max.
    fn next_in_range(&mut self, min: f32, max: f32) -> f32;

    /// Uniform index in [0, count). A count of zero returns 0; callers
    /// guard empty sets before sampling.
    fn next_index(&mut self, count: usize) -> usize;
}

/// Lightweight xorshift32 PRNG - no external crate needed
pub struct XorShiftRng {
    state: u32,
}

impl XorShiftRng {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Returns a float in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() as f32) / (u32::MAX as f32)
    }
}

impl RandomSource for XorShiftRng {
    fn next_in_range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    fn next_index(&mut self, count: usize) -> usize {
        if count == 0 {
            0
        } else {
            (self.next_u32() as usize) % count
        }
    }
}

/// Sample a scalar attribute from a min/max range.
///
/// Equal bounds return the bound unchanged. Inverted bounds are treated as
/// swapped rather than an error; range validation belongs to the
/// configuration setters, not the sampler.
pub fn sample_range(rng: &mut dyn RandomSource, min: f32, max: f32) -> f32 {
    if min == max {
        return min;
    }
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.next_in_range(lo, hi)
}

/// Sample an index into a discrete set of `count` entries
pub fn sample_index(rng: &mut dyn RandomSource, count: usize) -> usize {
    rng.next_index(count)
}

/// Sample a whole-millisecond duration from a min/max range
pub fn sample_ms(rng: &mut dyn RandomSource, min: u32, max: u32) -> u32 {
    sample_range(rng, min as f32, max as f32) as u32
}

/// Sample one 8-bit color channel from a min/max range
pub fn sample_channel(rng: &mut dyn RandomSource, min: u8, max: u8) -> u8 {
    sample_range(rng, f32::from(min), f32::from(max)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stub source that always lands halfway through the range
    struct Halfway;

    impl RandomSource for Halfway {
        fn next_in_range(&mut self, min: f32, max: f32) -> f32 {
            min + (max - min) * 0.5
        }

        fn next_index(&mut self, _count: usize) -> usize {
            0
        }
    }

    #[test]
    fn rng_range_bounds() {
        let mut rng = XorShiftRng::new(42);
        for _ in 0..1000 {
            let v = rng.next_in_range(0.0, 10.0);
            assert!(v >= 0.0 && v < 10.0);
        }
    }

    #[test]
    fn rng_index_bounds() {
        let mut rng = XorShiftRng::new(123);
        for _ in 0..1000 {
            assert!(rng.next_index(7) < 7);
        }
        assert_eq!(rng.next_index(0), 0);
        assert_eq!(rng.next_index(1), 0);
    }

    #[test]
    fn zero_seed_is_replaced() {
        let mut rng = XorShiftRng::new(0);
        // A zero xorshift state would never leave zero
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn equal_bounds_return_the_constant() {
        let mut rng = XorShiftRng::new(7);
        assert_eq!(sample_range(&mut rng, 4.5, 4.5), 4.5);
        assert_eq!(sample_ms(&mut rng, 250, 250), 250);
        assert_eq!(sample_channel(&mut rng, 200, 200), 200);
    }

    #[test]
    fn inverted_bounds_are_swapped() {
        let mut rng = XorShiftRng::new(99);
        for _ in 0..100 {
            let v = sample_range(&mut rng, 10.0, 0.0);
            assert!(v >= 0.0 && v < 10.0);
        }
    }

    #[test]
    fn stub_source_substitutes_for_the_prng() {
        let mut stub = Halfway;
        let v = sample_range(&mut stub, 0.0, 10.0);
        assert!((v - 5.0).abs() < 1e-6);
        assert_eq!(sample_channel(&mut stub, 0, 200), 100);
    }

    #[test]
    fn channel_sampling_stays_in_band() {
        let mut rng = XorShiftRng::new(5);
        for _ in 0..200 {
            let ch = sample_channel(&mut rng, 64, 192);
            assert!((64..192).contains(&ch));
        }
    }
}
