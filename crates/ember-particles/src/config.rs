//! Effect configuration (parsed from TOML) with authoring defaults

use ember_core::{Color, Result, Vec2};

/// Full set of randomization ranges and flags for one particle effect.
///
/// Hosts and the effect editor hand one of these to a simulator; the
/// simulator's setters own validation, so a config is a plain value
/// carrier. Range changes only affect particles spawned afterwards.
#[derive(Debug, Clone)]
pub struct EffectConfig {
    /// Total particles that can be alive at once
    pub capacity: usize,
    pub enabled: bool,
    /// Point every particle starts from
    pub spawn_location: Vec2,
    pub spawn_interval_ms: u32,
    pub lifetime_min_ms: u32,
    pub lifetime_max_ms: u32,
    /// When false, every particle gets the fixed `velocity` below instead
    /// of sampling the per-axis ranges
    pub use_random_velocity: bool,
    pub velocity: Vec2,
    pub velocity_x_min: f32,
    pub velocity_x_max: f32,
    pub velocity_y_min: f32,
    pub velocity_y_max: f32,
    /// Degrees, accepted in [0, 360]
    pub angle_min: f32,
    pub angle_max: f32,
    /// Degrees per tick, accepted in [0, 360]
    pub angular_velocity_min: f32,
    pub angular_velocity_max: f32,
    pub scale_min: f32,
    pub scale_max: f32,
    pub red_min: u8,
    pub red_max: u8,
    pub green_min: u8,
    pub green_max: u8,
    pub blue_min: u8,
    pub blue_max: u8,
    /// When true (and the palette is non-empty), tint is picked from
    /// `palette` instead of sampling the channel ranges
    pub use_palette: bool,
    pub palette: Vec<Color>,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            capacity: 100,
            enabled: true,
            spawn_location: Vec2::ZERO,
            spawn_interval_ms: 50,
            lifetime_min_ms: 500,
            lifetime_max_ms: 1500,
            use_random_velocity: true,
            velocity: Vec2::ZERO,
            velocity_x_min: -1.0,
            velocity_x_max: 1.0,
            velocity_y_min: -1.0,
            velocity_y_max: 1.0,
            angle_min: 0.0,
            angle_max: 360.0,
            angular_velocity_min: 0.0,
            angular_velocity_max: 360.0,
            scale_min: 0.5,
            scale_max: 1.5,
            red_min: 0,
            red_max: 255,
            green_min: 0,
            green_max: 255,
            blue_min: 0,
            blue_max: 255,
            use_palette: false,
            palette: Vec::new(),
        }
    }
}

impl EffectConfig {
    /// Parse an EffectConfig from a TOML table. Unknown keys are ignored
    /// and missing keys keep their defaults.
    pub fn from_toml(table: &toml::value::Table) -> Self {
        let mut config = Self::default();

        if let Some(v) = table.get("capacity") {
            let n = v.as_integer().unwrap_or(100).max(0) as usize;
            config.capacity = n.min(10_000);
        }
        if let Some(v) = table.get("enabled") {
            config.enabled = v.as_bool().unwrap_or(true);
        }
        if let Some(v) = table.get("spawn_location") {
            config.spawn_location = toml_vec2(v, config.spawn_location);
        }
        if let Some(v) = table.get("spawn_interval_ms") {
            config.spawn_interval_ms = toml_u32(v, config.spawn_interval_ms);
        }
        if let Some(v) = table.get("lifetime_min_ms") {
            config.lifetime_min_ms = toml_u32(v, config.lifetime_min_ms);
        }
        if let Some(v) = table.get("lifetime_max_ms") {
            config.lifetime_max_ms = toml_u32(v, config.lifetime_max_ms);
        }
        if let Some(v) = table.get("use_random_velocity") {
            config.use_random_velocity = v.as_bool().unwrap_or(true);
        }
        if let Some(v) = table.get("velocity") {
            config.velocity = toml_vec2(v, config.velocity);
        }
        if let Some(v) = table.get("velocity_x_min") {
            config.velocity_x_min = toml_f32(v, config.velocity_x_min);
        }
        if let Some(v) = table.get("velocity_x_max") {
            config.velocity_x_max = toml_f32(v, config.velocity_x_max);
        }
        if let Some(v) = table.get("velocity_y_min") {
            config.velocity_y_min = toml_f32(v, config.velocity_y_min);
        }
        if let Some(v) = table.get("velocity_y_max") {
            config.velocity_y_max = toml_f32(v, config.velocity_y_max);
        }
        if let Some(v) = table.get("angle_min") {
            config.angle_min = toml_f32(v, config.angle_min);
        }
        if let Some(v) = table.get("angle_max") {
            config.angle_max = toml_f32(v, config.angle_max);
        }
        if let Some(v) = table.get("angular_velocity_min") {
            config.angular_velocity_min = toml_f32(v, config.angular_velocity_min);
        }
        if let Some(v) = table.get("angular_velocity_max") {
            config.angular_velocity_max = toml_f32(v, config.angular_velocity_max);
        }
        if let Some(v) = table.get("scale_min") {
            config.scale_min = toml_f32(v, config.scale_min);
        }
        if let Some(v) = table.get("scale_max") {
            config.scale_max = toml_f32(v, config.scale_max);
        }
        if let Some(v) = table.get("red_min") {
            config.red_min = toml_u8(v, config.red_min);
        }
        if let Some(v) = table.get("red_max") {
            config.red_max = toml_u8(v, config.red_max);
        }
        if let Some(v) = table.get("green_min") {
            config.green_min = toml_u8(v, config.green_min);
        }
        if let Some(v) = table.get("green_max") {
            config.green_max = toml_u8(v, config.green_max);
        }
        if let Some(v) = table.get("blue_min") {
            config.blue_min = toml_u8(v, config.blue_min);
        }
        if let Some(v) = table.get("blue_max") {
            config.blue_max = toml_u8(v, config.blue_max);
        }
        if let Some(v) = table.get("use_palette") {
            config.use_palette = v.as_bool().unwrap_or(false);
        }
        if let Some(v) = table.get("palette") {
            if let Some(entries) = v.as_array() {
                config.palette = entries
                    .iter()
                    .filter_map(|entry| toml_color(entry))
                    .collect();
            }
        }

        config
    }

    /// Parse an EffectConfig from a TOML document string
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let table: toml::value::Table = toml::from_str(text)?;
        Ok(Self::from_toml(&table))
    }
}

// ── TOML helpers (handle integer/float coercion) ──

fn toml_f32(v: &toml::Value, default: f32) -> f32 {
    v.as_float()
        .map(|f| f as f32)
        .or_else(|| v.as_integer().map(|i| i as f32))
        .unwrap_or(default)
}

fn toml_u32(v: &toml::Value, default: u32) -> u32 {
    v.as_integer()
        .map(|i| i.clamp(0, i64::from(u32::MAX)) as u32)
        .unwrap_or(default)
}

fn toml_u8(v: &toml::Value, default: u8) -> u8 {
    v.as_integer()
        .map(|i| i.clamp(0, 255) as u8)
        .unwrap_or(default)
}

fn toml_vec2(v: &toml::Value, default: Vec2) -> Vec2 {
    if let Some(arr) = v.as_array() {
        if arr.len() >= 2 {
            return Vec2::from_array([
                toml_f32(&arr[0], default.x),
                toml_f32(&arr[1], default.y),
            ]);
        }
    }
    default
}

/// Reads `[r, g, b]` or `[r, g, b, a]`; alpha defaults to opaque
fn toml_color(v: &toml::Value) -> Option<Color> {
    let arr = v.as_array()?;
    if arr.len() < 3 {
        return None;
    }
    let a = arr.get(3).map(|ch| toml_u8(ch, 255)).unwrap_or(255);
    Some(Color::new(
        toml_u8(&arr[0], 0),
        toml_u8(&arr[1], 0),
        toml_u8(&arr[2], 0),
        a,
    ))
}
