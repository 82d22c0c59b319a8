//! Regular enemies
//!
//! Enemies stand where they spawn. Hits knock them back and flash them;
//! the last hit fades them out.

use glam::{Vec2, Vec4};

use super::entity::{DamageOutcome, Entity};
use super::interp::Interp;
use super::rect::Rect;
use super::timeline::{Cue, Pose, Step, Timeline};
use crate::consts::{ENEMY_HITBOX_INSET, ENEMY_SIZE};
use crate::palette::{BLACK, WHITE};
use crate::tuning::Tuning;
use crate::with_alpha;

#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub health: i32,
    pub color: Vec4,
    pub dying: bool,
    pub removed: bool,
    pub state_time: f32,
    collision: Rect,
    /// Knock-back moves
    motion: Timeline,
    /// Fades and flashes
    tint: Timeline,
    knockback: f32,
    fade_out: f32,
}

impl Enemy {
    /// Spawn invisible at `pos` and fade in
    pub fn new(id: u32, pos: Vec2, tuning: &Tuning) -> Self {
        let mut enemy = Self {
            id,
            pos,
            health: tuning.enemy_health,
            color: with_alpha(WHITE, 0.0),
            dying: false,
            removed: false,
            state_time: 0.0,
            collision: Rect::EMPTY,
            motion: Timeline::default(),
            tint: Timeline::once(vec![Step::Alpha {
                alpha: 1.0,
                duration: tuning.enemy_fade_in,
                interp: Interp::Linear,
            }]),
            knockback: tuning.enemy_knockback,
            fade_out: tuning.enemy_fade_out,
        };
        enemy.update_collision();
        enemy
    }

    pub fn origin_x(&self) -> f32 {
        self.pos.x + ENEMY_SIZE / 2.0
    }

    pub fn take_damage(&mut self, direction: f32) -> DamageOutcome {
        if self.dying {
            return DamageOutcome::Ignored;
        }

        self.health -= 1;
        if self.health <= 0 {
            self.die();
            return DamageOutcome::Killed;
        }

        let home = self.pos;
        self.motion = Timeline::once(vec![
            Step::move_by(Vec2::new(self.knockback * direction, 0.0), 0.3, Interp::CircleOut),
            Step::move_to(home, 0.1, Interp::CircleIn),
        ]);
        self.tint = Timeline::once(vec![Step::tint(BLACK, 0.15), Step::tint(WHITE, 0.15)]);
        DamageOutcome::Hurt
    }

    fn die(&mut self) {
        self.dying = true;
        self.motion.clear();
        self.tint = Timeline::once(vec![
            Step::Alpha {
                alpha: 0.0,
                duration: self.fade_out,
                interp: Interp::Fade,
            },
            Step::Cue(Cue::Remove),
        ]);
    }

    fn update_collision(&mut self) {
        self.collision = Rect::new(
            self.pos.x + ENEMY_HITBOX_INSET,
            self.pos.y,
            ENEMY_SIZE - 2.0 * ENEMY_HITBOX_INSET,
            ENEMY_SIZE,
        );
    }
}

impl Entity for Enemy {
    fn update(&mut self, dt: f32) {
        if self.removed {
            return;
        }
        self.state_time += dt;

        let mut pose = Pose {
            pos: self.pos,
            color: self.color,
        };
        self.motion.advance(dt, &mut pose);
        let cues = self.tint.advance(dt, &mut pose);
        self.pos = pose.pos;
        self.color = pose.color;
        if cues.contains(&Cue::Remove) {
            self.removed = true;
        }

        self.update_collision();
    }

    fn bounds(&self) -> Rect {
        if self.dying {
            Rect::EMPTY
        } else {
            self.collision
        }
    }

    fn is_alive(&self) -> bool {
        self.health > 0
    }

    fn position(&self) -> Vec2 {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enemy() -> Enemy {
        Enemy::new(1, Vec2::new(1000.0, 600.0), &Tuning::default())
    }

    #[test]
    fn test_fades_in() {
        let mut e = enemy();
        assert_eq!(e.color.w, 0.0);
        e.update(0.25);
        assert!((e.color.w - 0.5).abs() < 0.001);
        e.update(0.25);
        assert!((e.color.w - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_knockback_returns_home() {
        let mut e = enemy();
        assert_eq!(e.take_damage(1.0), DamageOutcome::Hurt);
        e.update(0.3);
        assert!((e.pos.x - 1020.0).abs() < 0.001);
        e.update(0.1);
        assert!((e.pos.x - 1000.0).abs() < 0.001);
        assert_eq!(e.color, WHITE);
    }

    #[test]
    fn test_knockback_left() {
        let mut e = enemy();
        e.take_damage(-1.0);
        e.update(0.3);
        assert!((e.pos.x - 980.0).abs() < 0.001);
    }

    #[test]
    fn test_dies_on_fifth_hit() {
        let mut e = enemy();
        for _ in 0..4 {
            assert_eq!(e.take_damage(1.0), DamageOutcome::Hurt);
        }
        assert_eq!(e.take_damage(1.0), DamageOutcome::Killed);
        assert!(!e.is_alive());
        assert!(e.bounds().is_empty());
        assert_eq!(e.take_damage(1.0), DamageOutcome::Ignored);

        e.update(0.3);
        assert!(!e.removed);
        e.update(0.2);
        assert!(e.removed);
    }
}
