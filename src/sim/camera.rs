//! Side-scrolling camera
//!
//! Only the horizontal offset moves. Screen space has y growing downward,
//! world space has y growing upward.

use glam::Vec2;

use crate::consts::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// World x of the left screen edge
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            x: 0.0,
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
        }
    }
}

impl Camera {
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        Vec2::new(screen.x + self.x, self.height - screen.y)
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        Vec2::new(world.x - self.x, self.height - world.y)
    }

    /// World point at the given fractions of the screen (from top-left)
    pub fn screen_fraction(&self, fx: f32, fy: f32) -> Vec2 {
        self.screen_to_world(Vec2::new(self.width * fx, self.height * fy))
    }

    pub fn translate(&mut self, dx: f32) {
        self.x += dx;
    }

    pub fn reset(&mut self) {
        self.x = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_after_scroll() {
        let mut camera = Camera::default();
        camera.translate(300.0);
        let world = camera.screen_to_world(Vec2::new(100.0, 80.0));
        assert_eq!(world, Vec2::new(400.0, VIEWPORT_HEIGHT - 80.0));
        assert_eq!(camera.world_to_screen(world), Vec2::new(100.0, 80.0));
    }

    #[test]
    fn test_screen_fraction_flips_y() {
        let camera = Camera::default();
        let p = camera.screen_fraction(0.05, 0.95);
        assert!((p.x - VIEWPORT_WIDTH * 0.05).abs() < 0.001);
        assert!((p.y - VIEWPORT_HEIGHT * 0.05).abs() < 0.01);
    }
}
