//! The moon and its distance-to-impact counter

use glam::Vec2;

use super::entity::Entity;
use super::interp::Interp;
use super::rect::Rect;
use super::timeline::{Pose, Step, Timeline};
use crate::consts::MOON_SIZE;
use crate::palette::WHITE;
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct Moon {
    pub pos: Vec2,
    /// Distance left to pull; the stage is won at zero
    pub distance: f32,
    pub initial_distance: f32,
    /// One-way latch, only cleared by `reset`
    pub falling: bool,
    /// Shown on stage (from the boss's arrival on)
    pub in_play: bool,
    fall: Timeline,
    fall_duration: f32,
}

impl Moon {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos,
            distance: tuning.moon_distance,
            initial_distance: tuning.moon_distance,
            falling: false,
            in_play: false,
            fall: Timeline::default(),
            fall_duration: tuning.moon_fall_duration,
        }
    }

    pub fn reset(&mut self, pos: Vec2) {
        self.pos = pos;
        self.distance = self.initial_distance;
        self.falling = false;
        self.in_play = false;
        self.fall.clear();
    }

    /// Apply a throw; a downward swipe has a negative `velocity_y`
    pub fn add_distance(&mut self, velocity_y: f32) {
        self.distance += velocity_y;
    }

    pub fn is_impacted(&self) -> bool {
        self.distance <= 0.0
    }

    /// 0 at the start, 1 at impact (for the impact meter)
    pub fn impact_progress(&self) -> f32 {
        (1.0 - self.distance / self.initial_distance).clamp(0.0, 1.0)
    }

    /// Drop the moon onto the earth. Returns false if it is already falling.
    pub fn start_falling(&mut self) -> bool {
        if self.falling {
            return false;
        }

        self.falling = true;
        self.distance = 0.0;
        self.fall = Timeline::once(vec![Step::move_by(
            Vec2::new(10.0, -MOON_SIZE),
            self.fall_duration,
            Interp::Fade,
        )]);
        true
    }

    pub fn shift(&mut self, dx: f32) {
        self.pos.x += dx;
    }
}

impl Entity for Moon {
    fn update(&mut self, dt: f32) {
        let mut pose = Pose {
            pos: self.pos,
            color: WHITE,
        };
        self.fall.advance(dt, &mut pose);
        self.pos = pose.pos;
    }

    fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, MOON_SIZE, MOON_SIZE)
    }

    fn is_alive(&self) -> bool {
        self.in_play
    }

    fn position(&self) -> Vec2 {
        self.pos
    }
}
