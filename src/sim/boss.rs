//! The chapter boss
//!
//! Glides in from the right, then patrols four waypoints forever. Once its
//! health drops to the rage threshold it turns red and switches to a faster
//! patrol; rage never wears off.

use glam::{Vec2, Vec4};

use super::camera::Camera;
use super::entity::{DamageOutcome, Entity};
use super::interp::Interp;
use super::rect::Rect;
use super::timeline::{Cue, Pose, Step, Timeline};
use crate::consts::{BOSS_HITBOX_BOTTOM, BOSS_HITBOX_TRIM, BOSS_SIZE};
use crate::palette::{BLACK, RED, WHITE};
use crate::tuning::Tuning;

/// Patrol waypoints in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BossArena {
    /// Right, mid height
    pub a: Vec2,
    /// Left, mid height
    pub b: Vec2,
    /// Left, low
    pub c: Vec2,
    /// Right, low
    pub d: Vec2,
}

impl BossArena {
    /// Waypoints for the screen the camera shows right now
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            a: camera.screen_fraction(0.7, 0.5),
            b: camera.screen_fraction(0.05, 0.5),
            c: camera.screen_fraction(0.05, 0.95),
            d: camera.screen_fraction(0.7, 0.95),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Boss {
    pub id: u32,
    pub pos: Vec2,
    pub health: i32,
    pub max_health: i32,
    pub raging: bool,
    /// Color the damage flash returns to (white, red once raging)
    pub base_color: Vec4,
    pub color: Vec4,
    pub flip_x: bool,
    /// Entry glide finished and the patrol started
    pub in_battle: bool,
    pub dying: bool,
    pub removed: bool,
    pub arena: BossArena,
    rage_threshold: i32,
    collision: Rect,
    motion: Timeline,
    tint: Timeline,
}

impl Boss {
    /// Spawn half a screen right of `spawn` and glide onto it
    pub fn new(id: u32, spawn: Vec2, arena: BossArena, screen_width: f32, tuning: &Tuning) -> Self {
        let mut boss = Self {
            id,
            pos: spawn + Vec2::new(screen_width * 0.5, 0.0),
            health: tuning.boss_health,
            max_health: tuning.boss_health,
            raging: false,
            base_color: WHITE,
            color: WHITE,
            flip_x: false,
            in_battle: false,
            dying: false,
            removed: false,
            arena,
            rage_threshold: tuning.boss_rage_threshold(),
            collision: Rect::EMPTY,
            motion: Timeline::once(vec![
                Step::move_to(spawn, tuning.boss_entry_duration, Interp::Fade),
                Step::Cue(Cue::StartBattle),
            ]),
            tint: Timeline::default(),
        };
        boss.update_collision();
        boss
    }

    pub fn origin_x(&self) -> f32 {
        self.pos.x + BOSS_SIZE / 2.0
    }

    pub fn rage_threshold(&self) -> i32 {
        self.rage_threshold
    }

    pub fn take_damage(&mut self) -> DamageOutcome {
        if self.dying {
            return DamageOutcome::Ignored;
        }

        self.health -= 1;
        if self.health <= 0 {
            self.die();
            return DamageOutcome::Killed;
        }

        let raged = self.health <= self.rage_threshold && self.rage();

        // The hit that starts rage flashes too, then eases into red
        let settle = if raged { 1.0 } else { 0.1 };
        self.tint = Timeline::once(vec![
            Step::tint(BLACK, 0.1),
            Step::tint(self.base_color, settle),
        ]);
        if raged {
            DamageOutcome::Raged
        } else {
            DamageOutcome::Hurt
        }
    }

    /// Returns true the one time rage actually starts
    fn rage(&mut self) -> bool {
        if self.raging {
            return false;
        }

        self.raging = true;
        self.in_battle = true;
        self.base_color = RED;
        self.motion = Timeline::looping(self.rage_patrol());
        log::info!("Boss {} is raging at {} hp", self.id, self.health);
        true
    }

    fn die(&mut self) {
        self.dying = true;
        self.motion.clear();
        self.tint = Timeline::once(vec![
            Step::Alpha {
                alpha: 0.0,
                duration: 0.4,
                interp: Interp::Fade,
            },
            Step::Cue(Cue::Remove),
        ]);
    }

    fn patrol(&self) -> Vec<Step> {
        let BossArena { a, b, c, d } = self.arena;
        vec![
            Step::Delay(3.0),
            Step::move_to(a, 1.0, Interp::Exp10In),
            Step::Delay(3.0),
            Step::move_to(b, 3.0, Interp::SwingIn),
            Step::Cue(Cue::Flip(true)),
            Step::Delay(3.0),
            Step::move_to(c, 1.0, Interp::Exp10In),
            Step::Delay(3.0),
            Step::move_to(d, 3.0, Interp::SwingIn),
            Step::Cue(Cue::Flip(false)),
        ]
    }

    fn rage_patrol(&self) -> Vec<Step> {
        let BossArena { a, b, c, d } = self.arena;
        vec![
            Step::Delay(1.0),
            Step::move_to(a, 1.0, Interp::SwingIn),
            Step::Delay(1.0),
            Step::move_to(c, 2.0, Interp::Exp10In),
            Step::Cue(Cue::Flip(true)),
            Step::Delay(1.0),
            Step::move_to(b, 1.0, Interp::SwingIn),
            Step::Delay(1.0),
            Step::move_to(d, 2.0, Interp::Exp10In),
            Step::Cue(Cue::Flip(false)),
        ]
    }

    fn update_collision(&mut self) {
        self.collision = Rect::new(
            self.pos.x,
            self.pos.y + BOSS_HITBOX_BOTTOM,
            BOSS_SIZE,
            BOSS_SIZE - BOSS_HITBOX_TRIM,
        );
    }
}

impl Entity for Boss {
    fn update(&mut self, dt: f32) {
        if self.removed {
            return;
        }

        let mut pose = Pose {
            pos: self.pos,
            color: self.color,
        };
        let mut cues = self.motion.advance(dt, &mut pose);
        cues.extend(self.tint.advance(dt, &mut pose));
        self.pos = pose.pos;
        self.color = pose.color;

        for cue in cues {
            match cue {
                Cue::StartBattle => {
                    self.in_battle = true;
                    self.motion = Timeline::looping(self.patrol());
                }
                Cue::Flip(flip) => self.flip_x = flip,
                Cue::Remove => self.removed = true,
                _ => {}
            }
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
