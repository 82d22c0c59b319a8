//! Throw the Moon - a side-scrolling brawler simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, encounters, collisions, game state)
//! - `game`: Screen flow around the simulation (stage, stage clear, restart)
//! - `tuning`: Data-driven game balance
//! - `settings`: Runtime settings (debug switches, seed)
//! - `error`: Construction-time validation errors

pub mod error;
pub mod game;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{ConfigError, LevelError};
pub use game::{Game, Screen};
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec4;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per rendered frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Virtual viewport (stretched to the window by the host)
    pub const VIEWPORT_WIDTH: f32 = 1920.0;
    pub const VIEWPORT_HEIGHT: f32 = 1080.0;

    /// Player sprite frame and hitbox geometry
    pub const PLAYER_SIZE: f32 = 256.0;
    pub const PLAYER_HITBOX_INSET: f32 = 50.0;
    /// Attack box reaches this far past the sprite edge
    pub const ATTACK_REACH: f32 = 50.0;
    pub const ATTACK_WIDTH: f32 = 100.0;
    pub const ATTACK_HEIGHT: f32 = 150.0;
    /// Attack box bottom sits this far below the sprite's vertical center
    pub const ATTACK_DROP: f32 = 100.0;

    /// Regular enemy sprite frame and hitbox geometry
    pub const ENEMY_SIZE: f32 = 256.0;
    pub const ENEMY_HITBOX_INSET: f32 = 50.0;

    /// Boss sprite frame and hitbox geometry
    pub const BOSS_SIZE: f32 = 512.0;
    pub const BOSS_HITBOX_BOTTOM: f32 = 80.0;
    pub const BOSS_HITBOX_TRIM: f32 = 170.0;

    pub const MOON_SIZE: f32 = 512.0;

    /// Chain is a vertical strip of tiles hanging up from the player
    pub const CHAIN_WIDTH: f32 = 32.0;
    pub const CHAIN_TILE_HEIGHT: f32 = 32.0;
    pub const CHAIN_TILE_COUNT: u32 = 50;
    /// World x the loose chain slides toward
    pub const CHAIN_PARK_X: f32 = -50.0;
    /// Pull animation length after a counted swipe
    pub const CHAIN_PULL_DURATION: f32 = 0.25;

    /// Delay between the TV-on sound and the stage music
    pub const INTRO_MUSIC_DELAY: f32 = 2.0;
}

/// RGBA tints used by entity timelines
pub mod palette {
    use glam::Vec4;

    pub const WHITE: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Vec4 = Vec4::new(0.0, 0.0, 0.0, 1.0);
    pub const RED: Vec4 = Vec4::new(1.0, 0.0, 0.0, 1.0);
    pub const CLEAR: Vec4 = Vec4::new(0.0, 0.0, 0.0, 0.0);
}

/// Same tint with a different alpha
#[inline]
pub fn with_alpha(color: Vec4, alpha: f32) -> Vec4 {
    Vec4::new(color.x, color.y, color.z, alpha)
}
