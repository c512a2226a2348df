//! Ember Particles - pooled 2D particle simulation
//!
//! Provides bounded-pool particle effects with:
//! - Fixed-capacity slot pool, dead slots reclaimed in place
//! - Timed spawning with per-attribute randomization ranges
//! - Per-tick position/angle integration and millisecond lifetimes
//! - Renderer-agnostic draw handoff over opaque visual handles

pub mod config;
pub mod diag;
pub mod particle;
pub mod rand;
pub mod render;
pub mod scheduler;
pub mod simulator;

use ember_core::Result;
use ember_runtime::RuntimeSystem;

pub use config::EffectConfig;
pub use diag::{ConsoleSink, DiagnosticSink};
pub use particle::{Particle, ParticlePool};
pub use rand::{RandomSource, XorShiftRng};
pub use render::ParticleRenderer;
pub use scheduler::SpawnScheduler;
pub use simulator::ParticleSimulator;

impl<H> RuntimeSystem for ParticleSimulator<H> {
    fn initialize(&mut self) -> Result<()> {
        let message = format!(
            "simulator ready: {} slot(s), {} visual(s)",
            self.capacity(),
            self.visual_count()
        );
        self.diag(&message);
        Ok(())
    }

    fn fixed_update(&mut self, _dt_ms: u32) -> Result<()> {
        // Particles are purely visual, no fixed-step work needed
        Ok(())
    }

    fn update(&mut self, dt_ms: u32) -> Result<()> {
        ParticleSimulator::update(self, dt_ms);
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "particles"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulator_runs_as_a_runtime_system() {
        let mut sim = ParticleSimulator::seeded(11);
        sim.set_capacity(4);
        sim.set_spawn_interval_ms(100);
        sim.set_lifetime_range_ms(500, 500);
        sim.register_visual("ember");

        let mut system: Box<dyn RuntimeSystem> = Box::new(sim);
        assert_eq!(system.name(), "particles");
        assert!(system.initialize().is_ok());
        assert!(system.fixed_update(16).is_ok());
        assert!(system.update(100).is_ok());
        assert!(system.shutdown().is_ok());
    }

    #[test]
    fn system_update_drives_the_effect() {
        let mut sim = ParticleSimulator::seeded(11);
        sim.set_capacity(4);
        sim.set_spawn_interval_ms(100);
        sim.set_lifetime_range_ms(500, 500);
        sim.register_visual("ember");

        RuntimeSystem::update(&mut sim, 100).unwrap();
        assert_eq!(sim.count_alive(), 1);
    }
}
