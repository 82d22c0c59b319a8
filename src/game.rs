//! Screen flow around the simulation
//!
//! `Game` owns the stage state and the fixed-timestep accumulator. It fades
//! out on stage clear, shows the stage-clear screen until a tap, and puts
//! the stage back together once the player's death sequence ends.

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, Level, Music, TickInput, tick};
use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Stage,
    StageClear,
}

#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
    pub screen: Screen,
    /// Input for the coming ticks; one-shot commands clear once consumed
    pub input: TickInput,
    accumulator: f32,
}

impl Game {
    pub fn new(level: Level, tuning: Tuning, settings: &Settings, seed: u64) -> Self {
        log::info!("Game initialized with seed: {}", seed);
        Self {
            state: GameState::new(level, tuning, settings, seed),
            screen: Screen::Stage,
            input: TickInput::default(),
            accumulator: 0.0,
        }
    }

    /// Run as many fixed ticks as `dt` of wall time covers
    pub fn update(&mut self, dt: f32) -> Vec<GameEvent> {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            events.extend(self.step());
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        events
    }

    /// One fixed tick of whatever screen is showing
    pub fn step(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();

        match self.screen {
            Screen::Stage => {
                tick(&mut self.state, &self.input, SIM_DT);

                if self.state.stage_clear && self.state.fade_out() {
                    log::info!("Fading out");
                }
                if self.state.is_player_removed() {
                    log::info!("Player removed, restarting chapter {}", self.state.level.chapter);
                    self.state.reset_level();
                }

                events = self.state.drain_events();
                if events.contains(&GameEvent::FadeOutComplete) {
                    self.screen = Screen::StageClear;
                    events.push(GameEvent::PlayMusic(Music::StageClear));
                    log::info!("Stage clear screen");
                }
            }
            Screen::StageClear => {
                if self.input.move_to.is_some() || self.input.attack.is_some() {
                    self.restart();
                }
            }
        }

        self.clear_one_shots();
        events
    }

    /// Back to the start of the stage
    pub fn restart(&mut self) {
        self.state.reset_level();
        self.screen = Screen::Stage;
        self.accumulator = 0.0;
        log::info!("Chapter {} restarted", self.state.level.chapter);
    }

    /// The in-game debug key
    pub fn toggle_debug(&mut self) {
        self.state.debug = !self.state.debug;
        self.state.log_positions = self.state.debug;
        if !self.state.debug {
            self.state.debug_log.clear();
        }
        log::info!("Debug mode: {}", self.state.debug);
    }

    fn clear_one_shots(&mut self) {
        self.input.move_to = None;
        self.input.attack = None;
        self.input.swipe = None;
        self.input.drag_to = None;
        self.input.walk_x = None;
        self.input.walk_y = None;
        self.input.stop = false;
        self.input.drop_moon = false;
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::sim::{Sound, Swipe};

    fn game(settings: &Settings) -> Game {
        Game::new(Level::chapter_one(VIEWPORT_WIDTH), Tuning::default(), settings, 42)
    }

    fn run_for(game: &mut Game, seconds: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for _ in 0..(seconds / SIM_DT) as usize {
            events.extend(game.step());
        }
        events
    }

    fn reach_boss(game: &mut Game) {
        game.state.player.pos.x = 1440.0;
        game.step();
        assert!(game.state.boss().is_some());
    }

    #[test]
    fn test_stage_clear_flow() {
        let mut g = game(&Settings::debug());
        reach_boss(&mut g);

        g.input.drop_moon = true;
        let events = g.step();
        assert!(events.contains(&GameEvent::StageClear));
        assert!(events.contains(&GameEvent::PlaySound(Sound::MoonCrash)));
        assert!(g.state.fading_out);
        assert!(!g.input.drop_moon);

        let events = run_for(&mut g, 5.5);
        assert_eq!(g.screen, Screen::StageClear);
        assert!(events.contains(&GameEvent::FadeOutComplete));
        assert!(events.contains(&GameEvent::PlayMusic(Music::StageClear)));

        // Any tap starts over
        g.input.move_to = Some(Vec2::new(10.0, 10.0));
        g.step();
        assert_eq!(g.screen, Screen::Stage);
        assert!(!g.state.stage_clear);
        assert_eq!(g.state.moon.distance, g.state.moon.initial_distance);
        assert_eq!(g.state.wall_index, 0);
    }

    #[test]
    fn test_pulled_moon_clears_stage() {
        let mut g = game(&Settings::default());
        reach_boss(&mut g);

        g.input.swipe = Some(Swipe {
            origin: g.state.chain.pos + Vec2::new(1.0, 1.0),
            velocity: Vec2::new(0.0, -250_000.0),
        });
        let events = g.step();
        assert!(events.contains(&GameEvent::StageClear));
        assert!(g.state.moon.falling);
        assert!(g.input.swipe.is_none());
    }

    #[test]
    fn test_death_restarts_stage() {
        let mut g = game(&Settings::default());
        g.state.chain.detach();
        g.state.chain.pos.x = -100.0;

        let events = g.step();
        assert!(events.contains(&GameEvent::GameOver));

        run_for(&mut g, 4.5);
        assert!(!g.state.is_game_over());
        assert!(!g.state.player.dying);
        assert!(g.state.chain.is_attached());
        assert_eq!(g.screen, Screen::Stage);
    }

    #[test]
    fn test_update_runs_fixed_ticks() {
        let mut g = game(&Settings::default());
        g.input.attack = Some(1);
        g.update(SIM_DT * 1.5);
        assert_eq!(g.state.time_ticks, 1);
        assert!(g.input.attack.is_none());

        // Long frames are clamped and capped
        g.update(1.0);
        assert!(g.state.time_ticks <= 1 + MAX_SUBSTEPS as u64);
    }

    #[test]
    fn test_lifting_finger_stops_drag_walk() {
        let mut g = game(&Settings::default());
        g.input.drag_to = Some(Vec2::new(900.0, 300.0));
        g.step();
        assert!(g.state.player.is_walking());
        assert!(g.input.drag_to.is_none());

        g.input.stop = true;
        g.step();
        let lifted_at = g.state.player.pos;

        run_for(&mut g, 0.5);
        assert!(!g.state.player.is_walking());
        assert_eq!(g.state.player.pos, lifted_at);
    }

    #[test]
    fn test_toggle_debug() {
        let mut g = game(&Settings::default());
        g.toggle_debug();
        assert!(g.state.debug);
        g.step();
        assert!(!g.state.debug_log.is_empty());

        g.toggle_debug();
        assert!(g.state.debug_log.is_empty());
    }
}
