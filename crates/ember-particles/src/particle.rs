//! Particle slot state and the fixed-capacity reclamation pool

use ember_core::{Color, Vec2};

/// One simulated particle, living in a pool slot.
///
/// A dead particle's fields are unspecified until the slot is reclaimed by
/// a spawn; nothing may read them except the alive flag.
#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vec2,
    /// Displacement added to `position` once per update tick (units per
    /// tick, not units per second)
    pub velocity: Vec2,
    /// Orientation in degrees
    pub angle: f32,
    /// Degrees added to `angle` once per update tick
    pub angular_velocity: f32,
    pub tint: Color,
    /// Multiplier on the visual's native size (1.0 = native)
    pub scale: f32,
    /// Milliseconds until retirement
    pub remaining_life_ms: i32,
    /// Index into the owning simulator's registered visual handles
    pub visual: usize,
    pub alive: bool,
}

impl Particle {
    pub fn dead() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            angle: 0.0,
            angular_velocity: 0.0,
            tint: Color::new(0, 0, 0, 0),
            scale: 0.0,
            remaining_life_ms: 0,
            visual: 0,
            alive: false,
        }
    }
}

/// Ordered pool of particle slots, reused by reclamation.
///
/// Slots keep their position for the lifetime of the pool: expired
/// particles are marked dead in place and later overwritten by a spawn,
/// never moved or removed. That keeps spawn order deterministic (first
/// dead slot wins) and render order stable. The pool only ever grows;
/// a resize below the current length is a no-op.
pub struct ParticlePool {
    slots: Vec<Particle>,
}

impl Default for ParticlePool {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticlePool {
    /// An empty pool. Slots are materialized later via `resize`.
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Grow the pool to `new_capacity` slots by appending dead particles.
    /// Requests at or below the current length do nothing.
    pub fn resize(&mut self, new_capacity: usize) {
        while self.slots.len() < new_capacity {
            self.slots.push(Particle::dead());
        }
    }

    /// Index of the first dead slot in slot order, or None if every slot
    /// is alive (or the pool is empty)
    pub fn find_reclaimable(&self) -> Option<usize> {
        self.slots.iter().position(|p| !p.alive)
    }

    pub fn count_alive(&self) -> usize {
        self.slots.iter().filter(|p| p.alive).count()
    }

    pub fn count_dead(&self) -> usize {
        self.slots.iter().filter(|p| !p.alive).count()
    }

    /// Mark every slot dead in place
    pub fn kill_all(&mut self) {
        for p in &mut self.slots {
            p.alive = false;
        }
    }

    pub fn slots(&self) -> &[Particle] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [Particle] {
        &mut self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_starts_empty() {
        let pool = ParticlePool::new();
        assert_eq!(pool.capacity(), 0);
        assert_eq!(pool.find_reclaimable(), None);
    }

    #[test]
    fn resize_grows_with_dead_slots() {
        let mut pool = ParticlePool::new();
        pool.resize(4);
        assert_eq!(pool.capacity(), 4);
        assert_eq!(pool.count_alive(), 0);
        assert_eq!(pool.count_dead(), 4);
    }

    #[test]
    fn resize_never_shrinks() {
        let mut pool = ParticlePool::new();
        pool.resize(8);
        pool.slots_mut()[3].alive = true;

        pool.resize(2);
        assert_eq!(pool.capacity(), 8);
        assert!(pool.slots()[3].alive);
    }

    #[test]
    fn capacity_invariant_across_grows() {
        let mut pool = ParticlePool::new();
        for n in [1, 3, 3, 10, 25] {
            pool.resize(n);
            assert_eq!(pool.count_alive() + pool.count_dead(), pool.capacity());
        }
        assert_eq!(pool.capacity(), 25);
    }

    #[test]
    fn find_reclaimable_returns_first_dead() {
        let mut pool = ParticlePool::new();
        pool.resize(8);
        for p in pool.slots_mut() {
            p.alive = true;
        }
        pool.slots_mut()[2].alive = false;
        pool.slots_mut()[5].alive = false;
        pool.slots_mut()[7].alive = false;

        assert_eq!(pool.find_reclaimable(), Some(2));
        pool.slots_mut()[2].alive = true;
        assert_eq!(pool.find_reclaimable(), Some(5));
        pool.slots_mut()[5].alive = true;
        assert_eq!(pool.find_reclaimable(), Some(7));
        pool.slots_mut()[7].alive = true;
        assert_eq!(pool.find_reclaimable(), None);
    }

    #[test]
    fn kill_all_marks_every_slot_dead() {
        let mut pool = ParticlePool::new();
        pool.resize(5);
        for p in pool.slots_mut() {
            p.alive = true;
        }
        assert_eq!(pool.count_alive(), 5);

        pool.kill_all();
        assert_eq!(pool.count_alive(), 0);
        assert_eq!(pool.count_dead(), 5);
    }
}
