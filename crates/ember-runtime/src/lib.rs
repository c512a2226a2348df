//! Ember Runtime - Game loop infrastructure
//!
//! Provides the core game loop building blocks:
//! - `FrameClock` - wall clock folded into whole-millisecond frame deltas,
//!   with a fixed-timestep accumulator for deterministic stepping
//! - `RuntimeSystem` - trait for systems ticked by the game loop

mod clock;
mod system;

pub use clock::FrameClock;
pub use system::RuntimeSystem;
