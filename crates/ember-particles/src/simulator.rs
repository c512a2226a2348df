//! Particle effect orchestration: spawning, integration, render handoff

use crate::config::EffectConfig;
use crate::diag::DiagnosticSink;
use crate::particle::{Particle, ParticlePool};
use crate::rand::{sample_channel, sample_index, sample_ms, sample_range, RandomSource, XorShiftRng};
use crate::render::ParticleRenderer;
use crate::scheduler::SpawnScheduler;
use ember_core::{Color, Vec2};

/// Band accepted by the degree-range setters. Bounds outside it reset to 0.
const DEGREE_MIN: f32 = 0.0;
const DEGREE_MAX: f32 = 360.0;

/// Owns one particle effect: the slot pool, the spawn scheduler, the full
/// set of randomization ranges, and the enabled switch.
///
/// `H` is the host's opaque visual handle type (a texture id, an asset
/// reference, anything drawable); the simulator stores registered handles
/// and passes them back out through the renderer untouched.
///
/// A simulator is single-threaded state for a single effect. Call
/// `update` then `render` once per frame, in that order. Hosts running
/// several effects use one simulator per effect, each with its own
/// random source.
pub struct ParticleSimulator<H> {
    pool: ParticlePool,
    scheduler: SpawnScheduler,
    config: EffectConfig,
    visuals: Vec<H>,
    rng: Box<dyn RandomSource>,
    diagnostics: Option<Box<dyn DiagnosticSink>>,
    warned_no_visuals: bool,
}

impl<H> ParticleSimulator<H> {
    /// A simulator with default ranges, an empty pool, and no capacity.
    /// Slots materialize once the host supplies both a capacity and a
    /// visual handle, in either order.
    pub fn new(rng: Box<dyn RandomSource>) -> Self {
        // Authoring defaults minus capacity, which only the host provides
        let config = EffectConfig {
            capacity: 0,
            ..EffectConfig::default()
        };
        Self {
            pool: ParticlePool::new(),
            scheduler: SpawnScheduler::new(config.spawn_interval_ms),
            config,
            visuals: Vec::new(),
            rng,
            diagnostics: None,
            warned_no_visuals: false,
        }
    }

    /// A simulator seeded with the built-in xorshift source
    pub fn seeded(seed: u32) -> Self {
        Self::new(Box::new(XorShiftRng::new(seed)))
    }

    /// A simulator carrying the given configuration, validated as if each
    /// setter had been called
    pub fn with_config(rng: Box<dyn RandomSource>, config: &EffectConfig) -> Self {
        let mut simulator = Self::new(rng);
        simulator.apply_config(config);
        simulator
    }

    /// Attach a sink for misconfiguration reports
    pub fn set_diagnostic_sink(&mut self, sink: Box<dyn DiagnosticSink>) {
        self.diagnostics = Some(sink);
    }

    pub(crate) fn diag(&mut self, message: &str) {
        if let Some(sink) = self.diagnostics.as_deref_mut() {
            sink.report(message);
        }
    }

    /// Register a drawable handle. Spawns pick uniformly among every
    /// handle registered so far.
    pub fn register_visual(&mut self, visual: H) {
        self.visuals.push(visual);
        self.warned_no_visuals = false;
        self.materialize();
    }

    pub fn visual_count(&self) -> usize {
        self.visuals.len()
    }

    /// Slots exist only once both a capacity and at least one visual are
    /// known; whichever arrives last triggers the growth.
    fn materialize(&mut self) {
        if !self.visuals.is_empty() {
            self.pool.resize(self.config.capacity);
        }
    }

    // ── Configuration surface ──
    //
    // Ranges changed here affect the next spawn, never particles already
    // alive. Validation lives in these setters; the sampler stays
    // tolerant of whatever it is handed.

    /// Grow the pool to hold `capacity` particles. Lowering the value
    /// below the current slot count neither removes slots nor kills
    /// particles; the pool is append-only.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.config.capacity = capacity;
        self.materialize();
    }

    /// Disabling hard-resets visible output: every alive particle is
    /// marked dead immediately, with no update needed. Re-enabling does
    /// not resurrect anything; it only lets future spawns come up alive.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
        if !enabled {
            self.pool.kill_all();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    pub fn set_spawn_location(&mut self, location: Vec2) {
        self.config.spawn_location = location;
    }

    pub fn set_spawn_interval_ms(&mut self, interval_ms: u32) {
        self.config.spawn_interval_ms = interval_ms;
        self.scheduler.set_interval_ms(interval_ms);
    }

    pub fn set_lifetime_range_ms(&mut self, min_ms: u32, max_ms: u32) {
        self.config.lifetime_min_ms = min_ms;
        self.config.lifetime_max_ms = max_ms;
    }

    pub fn set_use_random_velocity(&mut self, use_random: bool) {
        self.config.use_random_velocity = use_random;
    }

    /// Velocity applied to every spawn while `use_random_velocity` is off
    pub fn set_fixed_velocity(&mut self, velocity: Vec2) {
        self.config.velocity = velocity;
    }

    pub fn set_velocity_x_range(&mut self, min: f32, max: f32) {
        self.config.velocity_x_min = min;
        self.config.velocity_x_max = max;
    }

    pub fn set_velocity_y_range(&mut self, min: f32, max: f32) {
        self.config.velocity_y_min = min;
        self.config.velocity_y_max = max;
    }

    /// Degree bounds are accepted in [0, 360]; a bound outside the band
    /// resets to 0 instead of erroring
    pub fn set_angle_range(&mut self, min_deg: f32, max_deg: f32) {
        self.config.angle_min = self.clamp_degrees(min_deg, "angle min");
        self.config.angle_max = self.clamp_degrees(max_deg, "angle max");
    }

    pub fn set_angular_velocity_range(&mut self, min_deg: f32, max_deg: f32) {
        self.config.angular_velocity_min = self.clamp_degrees(min_deg, "angular velocity min");
        self.config.angular_velocity_max = self.clamp_degrees(max_deg, "angular velocity max");
    }

    fn clamp_degrees(&mut self, value: f32, what: &str) -> f32 {
        if (DEGREE_MIN..=DEGREE_MAX).contains(&value) {
            value
        } else {
            self.diag(&format!("{what} {value} outside [0, 360], reset to 0"));
            0.0
        }
    }

    pub fn set_scale_range(&mut self, min: f32, max: f32) {
        self.config.scale_min = min;
        self.config.scale_max = max;
    }

    pub fn set_red_range(&mut self, min: u8, max: u8) {
        self.config.red_min = min;
        self.config.red_max = max;
    }

    pub fn set_green_range(&mut self, min: u8, max: u8) {
        self.config.green_min = min;
        self.config.green_max = max;
    }

    pub fn set_blue_range(&mut self, min: u8, max: u8) {
        self.config.blue_min = min;
        self.config.blue_max = max;
    }

    pub fn set_palette(&mut self, palette: Vec<Color>) {
        self.config.palette = palette;
    }

    pub fn set_use_palette(&mut self, use_palette: bool) {
        self.config.use_palette = use_palette;
    }

    /// Replace every range and flag at once, with the same validation the
    /// individual setters apply
    pub fn apply_config(&mut self, config: &EffectConfig) {
        self.set_spawn_interval_ms(config.spawn_interval_ms);
        self.set_spawn_location(config.spawn_location);
        self.set_lifetime_range_ms(config.lifetime_min_ms, config.lifetime_max_ms);
        self.set_use_random_velocity(config.use_random_velocity);
        self.set_fixed_velocity(config.velocity);
        self.set_velocity_x_range(config.velocity_x_min, config.velocity_x_max);
        self.set_velocity_y_range(config.velocity_y_min, config.velocity_y_max);
        self.set_angle_range(config.angle_min, config.angle_max);
        self.set_angular_velocity_range(config.angular_velocity_min, config.angular_velocity_max);
        self.set_scale_range(config.scale_min, config.scale_max);
        self.set_red_range(config.red_min, config.red_max);
        self.set_green_range(config.green_min, config.green_max);
        self.set_blue_range(config.blue_min, config.blue_max);
        self.set_palette(config.palette.clone());
        self.set_use_palette(config.use_palette);
        self.set_capacity(config.capacity);
        self.set_enabled(config.enabled);
    }

    /// Current configuration, including any setter clamping
    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    /// Materialized slot count (0 until the pool exists)
    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    pub fn count_alive(&self) -> usize {
        self.pool.count_alive()
    }

    pub fn count_dead(&self) -> usize {
        self.pool.count_dead()
    }

    /// Read-only view of every slot, dead ones included, in slot order
    pub fn particles(&self) -> &[Particle] {
        self.pool.slots()
    }

    // ── Per-frame entry points ──

    /// Advance the simulation by `dt_ms` elapsed milliseconds.
    ///
    /// The spawn check runs first, so a particle spawned this tick also
    /// integrates and ages this tick. Every alive particle then advances
    /// by its velocity and angular velocity and loses `dt_ms` of remaining
    /// life; one whose life reaches zero is marked dead in the same pass.
    /// A `dt_ms` of 0 accumulates no spawn time and ages nothing, but
    /// velocity is per tick, so alive particles still step once.
    pub fn update(&mut self, dt_ms: u32) {
        if self.scheduler.advance(dt_ms) {
            self.try_spawn_one();
        }

        let dt = dt_ms.min(i32::MAX as u32) as i32;
        for p in self.pool.slots_mut() {
            if !p.alive {
                continue;
            }
            p.position += p.velocity;
            p.angle += p.angular_velocity;
            p.remaining_life_ms = p.remaining_life_ms.saturating_sub(dt);
            if p.remaining_life_ms <= 0 {
                p.alive = false;
            }
        }
    }

    /// Reinitialize the first reclaimable slot with freshly sampled
    /// attributes. One slot per call, never a burst. With no free slot,
    /// or nothing registered to draw, the request is dropped silently.
    pub fn try_spawn_one(&mut self) {
        if self.visuals.is_empty() {
            if !self.warned_no_visuals {
                self.warned_no_visuals = true;
                self.diag("spawn declined: no visuals registered");
            }
            return;
        }
        let Some(index) = self.pool.find_reclaimable() else {
            // Pool saturated, expected in steady state
            return;
        };

        let rng = self.rng.as_mut();
        let visual = sample_index(rng, self.visuals.len());
        let velocity = if self.config.use_random_velocity {
            Vec2::new(
                sample_range(rng, self.config.velocity_x_min, self.config.velocity_x_max),
                sample_range(rng, self.config.velocity_y_min, self.config.velocity_y_max),
            )
        } else {
            self.config.velocity
        };
        let angle = sample_range(rng, self.config.angle_min, self.config.angle_max);
        let angular_velocity = sample_range(
            rng,
            self.config.angular_velocity_min,
            self.config.angular_velocity_max,
        );
        let tint = if self.config.use_palette && !self.config.palette.is_empty() {
            self.config.palette[sample_index(rng, self.config.palette.len())]
        } else {
            // An enabled palette with no entries degrades to channel sampling
            Color::new(
                sample_channel(rng, self.config.red_min, self.config.red_max),
                sample_channel(rng, self.config.green_min, self.config.green_max),
                sample_channel(rng, self.config.blue_min, self.config.blue_max),
                255,
            )
        };
        let scale = sample_range(rng, self.config.scale_min, self.config.scale_max);
        let life = sample_ms(rng, self.config.lifetime_min_ms, self.config.lifetime_max_ms);

        let p = &mut self.pool.slots_mut()[index];
        p.position = self.config.spawn_location;
        p.velocity = velocity;
        p.angle = angle;
        p.angular_velocity = angular_velocity;
        p.tint = tint;
        p.scale = scale;
        p.remaining_life_ms = life.min(i32::MAX as u32) as i32;
        p.visual = visual;
        // A spawn while disabled fills the slot but leaves it dead
        p.alive = self.config.enabled;
    }

    /// Hand every alive particle to the renderer in slot order, or
    /// nothing at all while disabled. The tint's alpha is forced to fully
    /// opaque for the draw call only; the stored particle keeps its own.
    pub fn render<R: ParticleRenderer<H>>(&self, renderer: &mut R) {
        if !self.config.enabled {
            return;
        }
        for p in self.pool.slots() {
            if !p.alive {
                continue;
            }
            let Some(visual) = self.visuals.get(p.visual) else {
                continue;
            };
            renderer.draw_particle(visual, p.position, p.angle, p.scale, p.tint.opaque());
        }
    }
}
