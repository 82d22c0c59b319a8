//! Data-driven game balance
//!
//! Every gameplay number that a designer might want to tweak lives here.
//! Missing JSON fields fall back to the shipped defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Target-seeking walk speed (px/s)
    pub player_speed: f32,
    /// Distance to the move target that counts as arrived (px, per axis)
    pub movement_dead_zone: f32,
    /// How long an attack keeps its hitbox live (s)
    pub attack_window: f32,
    /// Length of one black or white half of the damage flash (s)
    pub damage_flash_interval: f32,
    /// Black/white cycles in the damage flash
    pub damage_flash_cycles: u32,
    /// Tint-to-red death sequence before the player is removed (s)
    pub death_duration: f32,
    /// Keyboard walk step (px per tick)
    pub keyboard_step: f32,

    // === Enemies ===
    pub enemy_health: i32,
    pub enemy_fade_in: f32,
    pub enemy_fade_out: f32,
    /// Knock-back distance on hit (px)
    pub enemy_knockback: f32,

    // === Boss ===
    pub boss_health: i32,
    /// Boss rages once health drops to this fraction of its starting value
    pub boss_rage_fraction: f32,
    /// Entry glide from off to the right (s)
    pub boss_entry_duration: f32,

    // === Stage ===
    /// Player screen x (fraction of width) past which the camera scrolls
    pub scroll_trigger: f32,
    /// Spawn x for front-side enemies (fraction of screen width)
    pub front_spawn_x: f32,
    /// Spawn x for back-side enemies (fraction of screen width)
    pub back_spawn_x: f32,
    /// Spawn x for a front-side boss (fraction of screen width)
    pub boss_spawn_x: f32,
    /// Screen y of the first spawn in a wave (px from the top)
    pub spawn_base_y: f32,
    /// Vertical pitch between spawns of one wave (px)
    pub spawn_pitch: f32,

    // === Moon / chain ===
    /// Starting distance between moon and earth
    pub moon_distance: f32,
    pub moon_fall_duration: f32,
    /// How far past the left screen edge the loose chain may go (px)
    pub chain_offscreen_margin: f32,
    /// Slide time of a loose chain to its park position (s)
    pub chain_slide_duration: f32,
    /// Screen tint to red after stage clear (s)
    pub fade_out_duration: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: 500.0,
            movement_dead_zone: 10.0,
            attack_window: 0.4,
            damage_flash_interval: 0.5,
            damage_flash_cycles: 3,
            death_duration: 4.0,
            keyboard_step: 7.0,

            enemy_health: 5,
            enemy_fade_in: 0.5,
            enemy_fade_out: 0.4,
            enemy_knockback: 20.0,

            boss_health: 50,
            boss_rage_fraction: 0.2,
            boss_entry_duration: 3.0,

            scroll_trigger: 0.6,
            front_spawn_x: 0.8,
            back_spawn_x: 0.15,
            boss_spawn_x: 0.7,
            spawn_base_y: 100.0,
            spawn_pitch: 100.0,

            moon_distance: 238_900.0,
            moon_fall_duration: 10.0,
            chain_offscreen_margin: 32.0,
            chain_slide_duration: 8.0,
            fade_out_duration: 5.0,
        }
    }
}

impl Tuning {
    /// Boss health at or below which it starts raging
    pub fn boss_rage_threshold(&self) -> i32 {
        (self.boss_health as f32 * self.boss_rage_fraction).floor() as i32
    }

    /// Total length of the damage flash (s)
    pub fn damage_flash_duration(&self) -> f32 {
        self.damage_flash_interval * 2.0 * self.damage_flash_cycles as f32
    }

    /// Parse and validate tuning JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(json).map_err(ConfigError::Json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate tuning from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the simulation can't run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fractions = [
            ("boss_rage_fraction", self.boss_rage_fraction),
            ("scroll_trigger", self.scroll_trigger),
            ("front_spawn_x", self.front_spawn_x),
            ("back_spawn_x", self.back_spawn_x),
            ("boss_spawn_x", self.boss_spawn_x),
        ];
        for (field, value) in fractions {
            if !(value > 0.0 && value <= 1.0) {
                return Err(invalid(field, format!("{value} is outside (0, 1]")));
            }
        }

        let non_negative = [
            ("player_speed", self.player_speed),
            ("movement_dead_zone", self.movement_dead_zone),
            ("attack_window", self.attack_window),
            ("damage_flash_interval", self.damage_flash_interval),
            ("death_duration", self.death_duration),
            ("keyboard_step", self.keyboard_step),
            ("enemy_fade_in", self.enemy_fade_in),
            ("enemy_fade_out", self.enemy_fade_out),
            ("enemy_knockback", self.enemy_knockback),
            ("boss_entry_duration", self.boss_entry_duration),
            ("spawn_base_y", self.spawn_base_y),
            ("spawn_pitch", self.spawn_pitch),
            ("moon_fall_duration", self.moon_fall_duration),
            ("chain_offscreen_margin", self.chain_offscreen_margin),
            ("chain_slide_duration", self.chain_slide_duration),
            ("fade_out_duration", self.fade_out_duration),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, format!("{value} must be finite and >= 0")));
            }
        }

        if self.enemy_health <= 0 {
            return Err(invalid("enemy_health", "must be positive".into()));
        }
        if self.boss_health <= 0 {
            return Err(invalid("boss_health", "must be positive".into()));
        }
        if !self.moon_distance.is_finite() || self.moon_distance <= 0.0 {
            return Err(invalid("moon_distance", "must be finite and positive".into()));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::InvalidTuning { field, reason }
}
