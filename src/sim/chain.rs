//! The chain linking the player to the moon
//!
//! While attached the chain hangs from the player's center. Knocked loose,
//! it slides off toward the left edge of the world until someone picks it
//! back up.

use glam::Vec2;

use super::entity::Entity;
use super::interp::Interp;
use super::rect::Rect;
use super::timeline::{Pose, Step, Timeline};
use crate::consts::*;
use crate::palette::WHITE;
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct Chain {
    /// Bottom-left corner of the strip
    pub pos: Vec2,
    attached: bool,
    /// Pull hint shown until the first counted pull
    pub hinting: bool,
    /// Time left on the pull animation
    pub pull_timer: f32,
    slide: Timeline,
    slide_duration: f32,
}

impl Chain {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::ZERO,
            attached: false,
            hinting: false,
            pull_timer: 0.0,
            slide: Timeline::default(),
            slide_duration: tuning.chain_slide_duration,
        }
    }

    pub fn size() -> Vec2 {
        Vec2::new(CHAIN_WIDTH, CHAIN_TILE_HEIGHT * CHAIN_TILE_COUNT as f32)
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Hook the tail onto the player's center and stop any slide
    pub fn attach(&mut self, anchor: Vec2) {
        self.attached = true;
        self.pos = anchor;
        self.slide.clear();
    }

    /// Let go and start sliding to the park position.
    /// Returns false if the chain was already loose.
    pub fn detach(&mut self) -> bool {
        if !self.attached {
            return false;
        }

        self.attached = false;
        self.slide = Timeline::once(vec![Step::move_to(
            Vec2::new(CHAIN_PARK_X, self.pos.y),
            self.slide_duration,
            Interp::Fade,
        )]);
        true
    }

    /// Keep up with the player while attached
    pub fn follow(&mut self, anchor: Vec2) {
        if self.attached {
            self.pos = anchor;
        }
    }

    pub fn hint_pull(&mut self) {
        self.hinting = true;
    }

    pub fn animate_pull(&mut self) {
        self.hinting = false;
        self.pull_timer = CHAIN_PULL_DURATION;
    }

    pub fn is_pulling(&self) -> bool {
        self.pull_timer > 0.0
    }

    pub fn reset(&mut self, anchor: Vec2) {
        self.hinting = false;
        self.pull_timer = 0.0;
        self.attach(anchor);
    }
}

impl Entity for Chain {
    fn update(&mut self, dt: f32) {
        self.pull_timer = (self.pull_timer - dt).max(0.0);
        if !self.attached {
            let mut pose = Pose {
                pos: self.pos,
                color: WHITE,
            };
            self.slide.advance(dt, &mut pose);
            self.pos = pose.pos;
        }
    }

    fn bounds(&self) -> Rect {
        let size = Self::size();
        Rect::new(self.pos.x, self.pos.y, size.x, size.y)
    }

    fn is_alive(&self) -> bool {
        true
    }

    fn position(&self) -> Vec2 {
        self.pos
    }
}
