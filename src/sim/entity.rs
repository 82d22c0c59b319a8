//! Shared entity capabilities and the hostile collection type

use glam::Vec2;

use super::boss::Boss;
use super::enemy::Enemy;
use super::level::EnemyKind;
use super::rect::Rect;

/// What the controller needs from anything living on the stage
pub trait Entity {
    /// Advance timers, timelines and movement by `dt` seconds and
    /// recompute the hitbox from the new position
    fn update(&mut self, dt: f32);
    /// Current collision bounds in world space
    fn bounds(&self) -> Rect;
    /// Still takes part in gameplay (collides, counts toward waves)
    fn is_alive(&self) -> bool;
    /// Bottom-left corner in world space
    fn position(&self) -> Vec2;
}

/// Result of landing a hit on a hostile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Already dying, nothing happened
    Ignored,
    Hurt,
    /// Hurt, and this hit pushed a boss into rage
    Raged,
    Killed,
}

/// Anything the player has to beat to clear a wave
#[derive(Debug, Clone)]
pub enum Hostile {
    Enemy(Enemy),
    Boss(Boss),
}

impl Hostile {
    pub fn id(&self) -> u32 {
        match self {
            Hostile::Enemy(e) => e.id,
            Hostile::Boss(b) => b.id,
        }
    }

    pub fn kind(&self) -> EnemyKind {
        match self {
            Hostile::Enemy(_) => EnemyKind::Regular,
            Hostile::Boss(_) => EnemyKind::Boss,
        }
    }

    /// World x of the sprite's horizontal center
    pub fn origin_x(&self) -> f32 {
        match self {
            Hostile::Enemy(e) => e.origin_x(),
            Hostile::Boss(b) => b.origin_x(),
        }
    }

    /// Land one hit; `direction` is +1 to push right, -1 to push left
    pub fn take_damage(&mut self, direction: f32) -> DamageOutcome {
        match self {
            Hostile::Enemy(e) => e.take_damage(direction),
            Hostile::Boss(b) => b.take_damage(),
        }
    }

    /// Finished its death sequence and can be dropped
    pub fn is_removed(&self) -> bool {
        match self {
            Hostile::Enemy(e) => e.removed,
            Hostile::Boss(b) => b.removed,
        }
    }

    pub fn health(&self) -> i32 {
        match self {
            Hostile::Enemy(e) => e.health,
            Hostile::Boss(b) => b.health,
        }
    }

    pub fn as_boss(&self) -> Option<&Boss> {
        match self {
            Hostile::Boss(b) => Some(b),
            Hostile::Enemy(_) => None,
        }
    }
}

impl Entity for Hostile {
    fn update(&mut self, dt: f32) {
        match self {
            Hostile::Enemy(e) => e.update(dt),
            Hostile::Boss(b) => b.update(dt),
        }
    }

    fn bounds(&self) -> Rect {
        match self {
            Hostile::Enemy(e) => e.bounds(),
            Hostile::Boss(b) => b.bounds(),
        }
    }

    fn is_alive(&self) -> bool {
        match self {
            Hostile::Enemy(e) => e.is_alive(),
            Hostile::Boss(b) => b.is_alive(),
        }
    }

    fn position(&self) -> Vec2 {
        match self {
            Hostile::Enemy(e) => e.position(),
            Hostile::Boss(b) => b.position(),
        }
    }
}
