//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (hostiles in spawn order)
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod boss;
pub mod camera;
pub mod chain;
pub mod collision;
pub mod debug;
pub mod enemy;
pub mod entity;
pub mod interp;
pub mod level;
pub mod moon;
pub mod player;
pub mod rect;
pub mod state;
pub mod tick;
pub mod timeline;

pub use boss::{Boss, BossArena};
pub use camera::Camera;
pub use chain::Chain;
pub use enemy::Enemy;
pub use entity::{DamageOutcome, Entity, Hostile};
pub use level::{EnemyKind, Level, SpawnDescriptor, SpawnSide, SpawnWall};
pub use moon::Moon;
pub use player::{Player, PlayerState};
pub use rect::Rect;
pub use state::{GameEvent, GameState, Music, Sound, TouchTarget};
pub use tick::{Swipe, TickInput, tick};
