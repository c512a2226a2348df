//! Ember Core - Foundational types for the Ember engine
//!
//! This crate provides the core types that all other Ember crates depend on:
//! - `Vec2` - 2D spatial type
//! - `Color` - 8-bit RGBA color
//! - Error types and Result alias

mod error;
mod types;

pub use error::{EmberError, Result};
pub use types::{Color, Vec2};
