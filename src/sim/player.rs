//! The player character
//!
//! Three-state machine (Idle, Walk, Attack) with two flags layered on top:
//! `taking_damage` (flashing, can't attack, can't grab the chain) and
//! `dying` (terminal; the player is removed once the death tint finishes).

use glam::{Vec2, Vec4};

use super::entity::Entity;
use super::rect::Rect;
use super::timeline::{Cue, Pose, Step, Timeline};
use crate::consts::*;
use crate::palette::{BLACK, RED, WHITE};
use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Idle,
    Walk,
    Attack,
}

#[derive(Debug, Clone)]
pub struct Player {
    /// Bottom-left corner
    pub pos: Vec2,
    /// Keyboard walk velocity (px per tick); overrides the move target
    pub velocity: Vec2,
    pub state: PlayerState,
    /// Time spent in the current state
    pub state_time: f32,
    /// Facing left
    pub flip_x: bool,
    /// Which of the three attack frames is showing
    pub attack_frame: usize,
    pub color: Vec4,
    pub taking_damage: bool,
    pub dying: bool,
    /// Death sequence finished
    pub removed: bool,
    /// Swiping the chain pulls the moon (unlocked when the boss shows up)
    pub moon_throw_enabled: bool,
    move_target: Option<Vec2>,
    collision: Rect,
    attack_area: Rect,
    tint: Timeline,
    speed: f32,
    dead_zone: f32,
    attack_window: f32,
    flash_interval: f32,
    flash_cycles: u32,
    death_duration: f32,
}

impl Player {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        let mut player = Self {
            pos,
            velocity: Vec2::ZERO,
            state: PlayerState::Idle,
            state_time: 0.0,
            flip_x: false,
            attack_frame: 0,
            color: WHITE,
            taking_damage: false,
            dying: false,
            removed: false,
            moon_throw_enabled: false,
            move_target: None,
            collision: Rect::EMPTY,
            attack_area: Rect::EMPTY,
            tint: Timeline::default(),
            speed: tuning.player_speed,
            dead_zone: tuning.movement_dead_zone,
            attack_window: tuning.attack_window,
            flash_interval: tuning.damage_flash_interval,
            flash_cycles: tuning.damage_flash_cycles,
            death_duration: tuning.death_duration,
        };
        player.update_collision();
        player
    }

    /// Back to a fresh idle player at `pos`
    pub fn reset(&mut self, pos: Vec2) {
        self.pos = pos;
        self.velocity = Vec2::ZERO;
        self.state = PlayerState::Idle;
        self.state_time = 0.0;
        self.flip_x = false;
        self.attack_frame = 0;
        self.color = WHITE;
        self.taking_damage = false;
        self.dying = false;
        self.removed = false;
        self.moon_throw_enabled = false;
        self.move_target = None;
        self.attack_area.clear();
        self.tint.clear();
        self.update_collision();
    }

    /// Sprite center in world space
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(PLAYER_SIZE / 2.0)
    }

    pub fn move_target(&self) -> Option<Vec2> {
        self.move_target
    }

    pub fn attack_area(&self) -> Rect {
        self.attack_area
    }

    pub fn clear_attack_area(&mut self) {
        self.attack_area.clear();
    }

    pub fn is_walking(&self) -> bool {
        self.state == PlayerState::Walk
    }

    /// Walk toward a world point (the sprite center seeks it)
    pub fn move_to(&mut self, point: Vec2) {
        self.state = PlayerState::Walk;
        self.move_target = Some(point);
        self.attack_area.clear();
    }

    /// Walk on keyboard velocity with no target
    pub fn start_walk_state(&mut self) {
        self.state = PlayerState::Walk;
        self.move_target = None;
    }

    pub fn stop(&mut self) {
        self.state = PlayerState::Idle;
        self.velocity = Vec2::ZERO;
        self.move_target = None;
    }

    /// Swing; `count` is the running tap count that picks the attack frame.
    /// Returns false while flashing from a hit.
    pub fn perform_attack(&mut self, count: u32) -> bool {
        if self.taking_damage || self.dying {
            return false;
        }

        self.state_time = 0.0;
        self.state = PlayerState::Attack;
        self.attack_frame = attack_frame_for(count);

        let x = if self.flip_x {
            self.pos.x - ATTACK_REACH
        } else {
            self.pos.x + PLAYER_SIZE - ATTACK_REACH
        };
        let y = self.pos.y + PLAYER_SIZE / 2.0 - ATTACK_DROP;
        self.attack_area = Rect::new(x, y, ATTACK_WIDTH, ATTACK_HEIGHT);
        true
    }

    /// Start the damage flash. Returns false if already flashing or dying.
    pub fn take_damage(&mut self) -> bool {
        if self.taking_damage || self.dying {
            return false;
        }

        self.taking_damage = true;
        let mut steps = Vec::with_capacity(self.flash_cycles as usize * 2 + 1);
        for _ in 0..self.flash_cycles {
            steps.push(Step::tint(BLACK, self.flash_interval));
            steps.push(Step::tint(WHITE, self.flash_interval));
        }
        steps.push(Step::Cue(Cue::Recovered));
        self.tint = Timeline::once(steps);
        true
    }

    /// Start the death sequence. Returns false if already dying.
    pub fn die(&mut self) -> bool {
        if self.dying {
            return false;
        }

        self.dying = true;
        self.move_target = None;
        self.velocity = Vec2::ZERO;
        self.attack_area.clear();
        self.tint = Timeline::once(vec![
            Step::tint(RED, self.death_duration),
            Step::Cue(Cue::Remove),
        ]);
        true
    }

    fn update_collision(&mut self) {
        self.collision = Rect::new(
            self.pos.x + PLAYER_HITBOX_INSET,
            self.pos.y,
            PLAYER_SIZE - 2.0 * PLAYER_HITBOX_INSET,
            PLAYER_SIZE,
        );
    }

    fn update_movement(&mut self, dt: f32) {
        if self.velocity != Vec2::ZERO {
            self.pos += self.velocity;
            if self.velocity.x != 0.0 {
                self.flip_x = self.velocity.x < 0.0;
            }
            return;
        }

        let Some(target) = self.move_target else {
            self.state = PlayerState::Idle;
            return;
        };

        let delta = target - self.center();
        if delta.x.abs() > self.dead_zone || delta.y.abs() > self.dead_zone {
            self.pos += delta.normalize_or_zero() * self.speed * dt;
            self.flip_x = delta.x < 0.0;
        } else {
            self.state = PlayerState::Idle;
        }
    }
}

/// Every fifth tap is the finisher, even taps the second frame
fn attack_frame_for(count: u32) -> usize {
    if count % 5 == 0 {
        2
    } else if count % 2 == 0 {
        1
    } else {
        0
    }
}

impl Entity for Player {
    fn update(&mut self, dt: f32) {
        if self.removed {
            return;
        }

        self.state_time += dt;
        match self.state {
            PlayerState::Idle => self.attack_area.clear(),
            PlayerState::Walk => {
                self.update_movement(dt);
                self.attack_area.clear();
            }
            PlayerState::Attack => {
                if self.state_time > self.attack_window {
                    self.state = PlayerState::Idle;
                    self.attack_area.clear();
                }
            }
        }

        let mut pose = Pose {
            pos: self.pos,
            color: self.color,
        };
        for cue in self.tint.advance(dt, &mut pose) {
            match cue {
                Cue::Recovered => self.taking_damage = false,
                Cue::Remove => self.removed = true,
                _ => {}
            }
        }
        self.color = pose.color;

        self.update_collision();
    }

    fn bounds(&self) -> Rect {
        self.collision
    }

    fn is_alive(&self) -> bool {
        !self.dying
    }

    fn position(&self) -> Vec2 {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new(Vec2::new(240.0, 540.0), &Tuning::default())
    }

    #[test]
    fn test_hitbox_is_inset() {
        let p = player();
        assert_eq!(p.bounds(), Rect::new(290.0, 540.0, 156.0, 256.0));
    }

    #[test]
    fn test_walks_to_target_then_idles() {
        let mut p = player();
        let target = p.center() + Vec2::new(100.0, 0.0);
        p.move_to(target);

        // 500 px/s reaches 100 px in 0.2 s
        for _ in 0..30 {
            p.update(SIM_DT);
        }
        assert_eq!(p.state, PlayerState::Idle);
        assert!((p.center().x - target.x).abs() <= 10.0);
        assert!(!p.flip_x);
    }

    #[test]
    fn test_walking_left_faces_left() {
        let mut p = player();
        p.move_to(p.center() - Vec2::new(200.0, 0.0));
        p.update(SIM_DT);
        assert!(p.flip_x);
        assert!(p.is_walking());
    }

    #[test]
    fn test_keyboard_velocity_moves_per_tick() {
        let mut p = player();
        p.velocity = Vec2::new(-7.0, 0.0);
        p.start_walk_state();
        p.update(SIM_DT);
        assert!((p.pos.x - 233.0).abs() < 0.001);
        assert!(p.flip_x);
        assert_eq!(p.bounds().x, 233.0 + PLAYER_HITBOX_INSET);
    }

    #[test]
    fn test_attack_window_and_geometry() {
        let mut p = player();
        assert!(p.perform_attack(1));
        assert_eq!(p.attack_area(), Rect::new(240.0 + 206.0, 540.0 + 28.0, 100.0, 150.0));

        p.update(0.2);
        assert_eq!(p.state, PlayerState::Attack);
        assert!(!p.attack_area().is_empty());

        p.update(0.25);
        assert_eq!(p.state, PlayerState::Idle);
        assert!(p.attack_area().is_empty());
    }

    #[test]
    fn test_attack_faces_left() {
        let mut p = player();
        p.flip_x = true;
        p.perform_attack(1);
        assert_eq!(p.attack_area().x, 190.0);
    }

    #[test]
    fn test_attack_frame_cycle() {
        let frames: Vec<usize> = (1..=10).map(attack_frame_for).collect();
        assert_eq!(frames, vec![0, 1, 0, 1, 2, 1, 0, 1, 0, 2]);
    }

    #[test]
    fn test_damage_blocks_attack_until_flash_ends() {
        let mut p = player();
        assert!(p.take_damage());
        assert!(!p.take_damage());
        assert!(!p.perform_attack(1));

        p.update(2.9);
        assert!(p.taking_damage);
        p.update(0.2);
        assert!(!p.taking_damage);
        assert_eq!(p.color, WHITE);
        assert!(p.perform_attack(2));
    }

    #[test]
    fn test_death_removes_after_tint() {
        let mut p = player();
        assert!(p.die());
        assert!(!p.die());
        assert!(!p.is_alive());

        p.update(3.9);
        assert!(!p.removed);
        p.update(0.2);
        assert!(p.removed);
        assert_eq!(p.color, RED);
    }

    #[test]
    fn test_reset_clears_flags() {
        let mut p = player();
        p.take_damage();
        p.die();
        p.moon_throw_enabled = true;
        p.reset(Vec2::new(10.0, 20.0));
        assert!(!p.taking_damage && !p.dying && !p.removed && !p.moon_throw_enabled);
        assert_eq!(p.state, PlayerState::Idle);
        assert_eq!(p.pos, Vec2::new(10.0, 20.0));
    }
}
