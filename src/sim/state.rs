//! Game state and the encounter/progression controller
//!
//! Owns every live entity, the level's wall list and the moon counter.
//! Only `tick` mutates it during play; the host reads it for rendering and
//! drains `events` for sound, music and screen changes.

use glam::{Vec2, Vec4};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::boss::{Boss, BossArena};
use super::camera::Camera;
use super::chain::Chain;
use super::enemy::Enemy;
use super::entity::{Entity, Hostile};
use super::interp::Interp;
use super::level::{EnemyKind, Level, SpawnSide};
use super::moon::Moon;
use super::player::Player;
use super::tick::Swipe;
use super::timeline::{Cue, Pose, Step, Timeline};
use crate::consts::*;
use crate::palette::{CLEAR, RED};
use crate::settings::Settings;
use crate::tuning::Tuning;

/// One-shot sounds the host should play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    TvOn,
    PlayerHit,
    PlayerDeath,
    BossHit,
    MoonCrash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Music {
    Stage,
    StageClear,
}

/// Things that happened during a tick, in order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    PlaySound(Sound),
    PlayMusic(Music),
    StopMusic,
    WallTriggered { index: usize, spawned: usize },
    WaveCleared { index: usize },
    BossSpawned,
    BossRaging,
    HostileDefeated { id: u32 },
    ChainDetached,
    ChainAttached,
    MoonPulled { distance: f32 },
    StageClear,
    GameOver,
    /// Stage-clear fade finished; time to switch screens
    FadeOutComplete,
}

/// What a touch at a world point lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchTarget {
    Ground,
    Hostile(u32),
    Chain,
}

/// Complete state of one stage
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub tuning: Tuning,
    pub debug: bool,
    pub log_positions: bool,
    pub level: Level,
    /// Index of the next wall to trigger or clear; never decreases within a run
    pub wall_index: usize,
    pub camera: Camera,
    pub player: Player,
    pub chain: Chain,
    pub moon: Moon,
    /// Live enemies and boss (in spawn order)
    pub hostiles: Vec<Hostile>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Latched when the chain is lost off the left edge
    pub game_over: bool,
    /// Latched once the moon distance reaches zero
    pub stage_clear: bool,
    pub fading_out: bool,
    /// Full-screen overlay tint (stage-clear fade)
    pub screen_fade: Vec4,
    /// Events produced since the last drain
    pub events: Vec<GameEvent>,
    /// Positional debug lines from the last tick
    pub debug_log: Vec<String>,
    intro: Timeline,
    fade: Timeline,
    next_id: u32,
}

impl GameState {
    pub fn new(level: Level, tuning: Tuning, settings: &Settings, seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            debug: settings.debug,
            log_positions: settings.effective_log_positions(),
            level,
            wall_index: 0,
            camera: Camera::default(),
            player: Player::new(Self::player_start(), &tuning),
            chain: Chain::new(&tuning),
            moon: Moon::new(Self::moon_start(), &tuning),
            hostiles: Vec::new(),
            time_ticks: 0,
            game_over: false,
            stage_clear: false,
            fading_out: false,
            screen_fade: CLEAR,
            events: Vec::new(),
            debug_log: Vec::new(),
            intro: Timeline::default(),
            fade: Timeline::default(),
            next_id: 1,
            tuning,
        };
        state.reset_level();
        state
    }

    pub fn player_start() -> Vec2 {
        Vec2::new(VIEWPORT_WIDTH / 8.0, VIEWPORT_HEIGHT / 2.0)
    }

    pub fn moon_start() -> Vec2 {
        Vec2::new(VIEWPORT_WIDTH / 2.0 - MOON_SIZE / 2.0, VIEWPORT_HEIGHT)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Put everything back to the start of the stage
    pub fn reset_level(&mut self) {
        self.hostiles.clear();
        self.camera.reset();
        self.player.reset(Self::player_start());
        self.moon.reset(Self::moon_start());
        self.chain.reset(self.player.center());
        self.level.reset();
        self.wall_index = 0;
        self.game_over = false;
        self.stage_clear = false;
        self.fading_out = false;
        self.screen_fade = CLEAR;
        self.fade.clear();
        self.intro = Timeline::once(vec![
            Step::Cue(Cue::TvOn),
            Step::Delay(INTRO_MUSIC_DELAY),
            Step::Cue(Cue::StartMusic),
        ]);
        log::info!("Chapter {} reset ({} walls)", self.level.chapter, self.level.len());
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    // === Queries ===

    pub fn is_stage_clear(&self) -> bool {
        self.stage_clear || self.moon.is_impacted()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The player's death sequence finished
    pub fn is_player_removed(&self) -> bool {
        self.player.removed
    }

    pub fn player_screen_x(&self) -> f32 {
        self.camera.world_to_screen(self.player.pos).x
    }

    pub fn is_chain_offscreen(&self) -> bool {
        self.camera.world_to_screen(self.chain.pos).x <= -self.tuning.chain_offscreen_margin
    }

    /// The wall at `wall_index` is reached and hasn't been released yet
    pub fn should_trigger_wall(&self, player_x: f32) -> bool {
        self.level
            .wall(self.wall_index)
            .is_some_and(|wall| player_x >= wall.trigger_x && !(wall.triggered || wall.destroyed))
    }

    /// The wall at `wall_index` is released and not yet beaten
    pub fn spawn_wall_active(&self) -> bool {
        self.level
            .wall(self.wall_index)
            .is_some_and(|wall| wall.is_active())
    }

    pub fn all_hostiles_defeated(&self) -> bool {
        !self.hostiles.iter().any(|h| h.is_alive())
    }

    pub fn live_hostiles(&self) -> usize {
        self.hostiles.iter().filter(|h| h.is_alive()).count()
    }

    pub fn should_scroll_camera(&self) -> bool {
        self.player_screen_x() > self.camera.width * self.tuning.scroll_trigger
    }

    pub fn boss(&self) -> Option<&Boss> {
        self.hostiles.iter().find_map(Hostile::as_boss)
    }

    /// What a touch at a world point would hit
    pub fn hit_test(&self, point: Vec2) -> TouchTarget {
        if let Some(hostile) = self
            .hostiles
            .iter()
            .find(|h| h.is_alive() && h.bounds().contains(point))
        {
            return TouchTarget::Hostile(hostile.id());
        }
        if self.chain.bounds().contains(point) {
            return TouchTarget::Chain;
        }
        TouchTarget::Ground
    }

    // === Transitions ===

    /// Release the wave behind wall `index`; returns how many spawned
    pub fn spawn_wave(&mut self, index: usize) -> usize {
        let Some(wall) = self.level.wall(index) else {
            return 0;
        };
        let spawns = wall.spawns.clone();
        let camera = self.camera;
        let mut offset_y = self.tuning.spawn_base_y;

        for spawn in &spawns {
            match spawn.kind {
                EnemyKind::Regular => {
                    let fx = match spawn.side {
                        SpawnSide::Front => self.tuning.front_spawn_x,
                        SpawnSide::Back => self.tuning.back_spawn_x,
                    };
                    let jitter = self.rng.random_range(0..ENEMY_SIZE as u32) as f32;
                    let pos = camera.screen_to_world(Vec2::new(camera.width * fx, offset_y + jitter));
                    let id = self.next_entity_id();
                    self.hostiles
                        .push(Hostile::Enemy(Enemy::new(id, pos, &self.tuning)));
                }
                EnemyKind::Boss => {
                    let fx = match spawn.side {
                        SpawnSide::Front => self.tuning.boss_spawn_x,
                        SpawnSide::Back => self.tuning.back_spawn_x,
                    };
                    let target = camera.screen_to_world(Vec2::new(camera.width * fx, camera.height / 2.0));
                    let id = self.next_entity_id();
                    let boss = Boss::new(id, target, BossArena::from_camera(&camera), camera.width, &self.tuning);
                    self.hostiles.push(Hostile::Boss(boss));

                    self.moon.in_play = true;
                    self.player.moon_throw_enabled = true;
                    self.chain.hint_pull();
                    self.push_event(GameEvent::BossSpawned);
                    log::info!("Boss {} enters at x={:.0}", id, target.x);
                }
            }
            offset_y += self.tuning.spawn_pitch;
        }

        spawns.len()
    }

    pub fn start_game_over(&mut self) {
        if self.game_over {
            return;
        }

        self.game_over = true;
        if self.player.die() {
            self.push_event(GameEvent::PlaySound(Sound::PlayerDeath));
        }
        self.push_event(GameEvent::StopMusic);
        self.push_event(GameEvent::GameOver);
        log::info!("Game over: chain lost at x={:.0}", self.chain.pos.x);
    }

    /// Count a swipe toward the moon. Only a downward swipe that starts on
    /// the attached chain counts, and only once the boss has shown up.
    pub fn throw_moon(&mut self, swipe: &Swipe) -> bool {
        if !self.player.moon_throw_enabled
            || swipe.velocity.y >= 0.0
            || !self.chain.is_attached()
            || !self.chain.bounds().contains(swipe.origin)
        {
            return false;
        }

        self.moon.add_distance(swipe.velocity.y);
        self.chain.animate_pull();
        self.push_event(GameEvent::MoonPulled {
            distance: self.moon.distance,
        });
        true
    }

    /// Debug command: drop the moon right away
    pub fn force_moon_fall(&mut self) -> bool {
        if !self.debug || !self.player.moon_throw_enabled || self.moon.falling {
            return false;
        }
        self.drop_moon();
        true
    }

    /// Start the stage-clear fade once: the moon falls and the screen turns red
    pub fn fade_out(&mut self) -> bool {
        if self.fading_out {
            return false;
        }

        self.fading_out = true;
        self.drop_moon();
        self.screen_fade = CLEAR;
        self.fade = Timeline::once(vec![
            Step::Tint {
                color: RED,
                duration: self.tuning.fade_out_duration,
                interp: Interp::Exp5In,
            },
            Step::Cue(Cue::FadeComplete),
        ]);
        true
    }

    fn drop_moon(&mut self) {
        if self.moon.start_falling() {
            self.push_event(GameEvent::PlaySound(Sound::MoonCrash));
        }
    }

    /// Step 1 of a tick: advance every entity and the stage timelines
    pub fn update_entities(&mut self, dt: f32) {
        self.player.update(dt);
        self.chain.follow(self.player.center());
        self.chain.update(dt);

        for hostile in &mut self.hostiles {
            hostile.update(dt);
        }
        self.hostiles.retain(|h| !h.is_removed());

        self.moon.update(dt);

        let mut pose = Pose {
            pos: Vec2::ZERO,
            color: CLEAR,
        };
        for cue in self.intro.advance(dt, &mut pose) {
            match cue {
                Cue::TvOn => self.push_event(GameEvent::PlaySound(Sound::TvOn)),
                Cue::StartMusic => self.push_event(GameEvent::PlayMusic(Music::Stage)),
                _ => {}
            }
        }

        let mut pose = Pose {
            pos: Vec2::ZERO,
            color: self.screen_fade,
        };
        let cues = self.fade.advance(dt, &mut pose);
        self.screen_fade = pose.color;
        if cues.contains(&Cue::FadeComplete) {
            self.push_event(GameEvent::FadeOutComplete);
        }
    }
}
