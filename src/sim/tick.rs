//! Fixed timestep simulation tick
//!
//! One call advances the stage by `dt`: input, entity updates, collisions,
//! then at most one progression transition.

use glam::Vec2;

use super::autopilot::autopilot_input;
use super::collision::resolve_collisions;
use super::debug::position_log;
use super::state::{GameEvent, GameState, TouchTarget};

/// A fling gesture, in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swipe {
    /// Where the finger went down
    pub origin: Vec2,
    /// Fling velocity; negative y is downward
    pub velocity: Vec2,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Tap: walk toward this world point unless it lands on a hostile or the chain
    pub move_to: Option<Vec2>,
    /// Pan: keep walking toward the finger unless it's on the chain
    pub drag_to: Option<Vec2>,
    /// Finger lifted
    pub stop: bool,
    /// Attack, with the running tap count
    pub attack: Option<u32>,
    pub swipe: Option<Swipe>,
    /// Keyboard direction on x (-1..1); `Some(0.0)` releases that axis only
    pub walk_x: Option<f32>,
    /// Keyboard direction on y (-1..1); `Some(0.0)` releases that axis only
    pub walk_y: Option<f32>,
    /// Drop the moon right away (debug builds only)
    pub drop_moon: bool,
    /// Idle/demo mode - the autopilot plays
    pub idle_mode: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.time_ticks += 1;

    let input = if input.idle_mode {
        autopilot_input(state)
    } else {
        input.clone()
    };

    if !state.is_stage_clear() && !state.player.dying {
        apply_input(state, &input);
    }

    state.update_entities(dt);

    if !state.is_stage_clear() {
        resolve_collisions(state);
    }

    if state.log_positions {
        state.debug_log = position_log(state);
        for line in &state.debug_log {
            log::debug!("{}", line);
        }
    }

    advance_encounter(state);
}

fn apply_input(state: &mut GameState, input: &TickInput) {
    let step = state.tuning.keyboard_step;
    if let Some(dx) = input.walk_x {
        state.player.velocity.x = dx * step;
    }
    if let Some(dy) = input.walk_y {
        state.player.velocity.y = dy * step;
    }
    let pressed = [input.walk_x, input.walk_y]
        .iter()
        .any(|axis| matches!(axis, Some(d) if *d != 0.0));
    if pressed {
        state.player.start_walk_state();
    }

    if let Some(point) = input.move_to
        && state.hit_test(point) == TouchTarget::Ground
    {
        state.player.move_to(point);
    }

    // A lifted finger ends the pan in the same tick
    if let Some(point) = input.drag_to
        && !input.stop
        && state.hit_test(point) != TouchTarget::Chain
    {
        state.player.move_to(point);
    }

    if input.stop && state.player.is_walking() {
        state.player.stop();
    }

    if let Some(count) = input.attack {
        state.player.perform_attack(count);
    }

    if let Some(swipe) = &input.swipe {
        state.throw_moon(swipe);
    }

    if input.drop_moon {
        state.force_moon_fall();
    }
}

/// Evaluate the progression rules in priority order; the first match wins
fn advance_encounter(state: &mut GameState) {
    if state.is_stage_clear() {
        if !state.stage_clear {
            state.stage_clear = true;
            state.push_event(GameEvent::StageClear);
            log::info!("Stage clear after {} ticks", state.time_ticks);
        }
        return;
    }

    if state.game_over || (state.is_chain_offscreen() && !state.chain.is_attached()) {
        state.start_game_over();
        return;
    }

    let index = state.wall_index;
    if state.should_trigger_wall(state.player.pos.x) {
        let spawned = state.spawn_wave(index);
        if let Some(wall) = state.level.wall_mut(index) {
            wall.triggered = true;
        }
        state.push_event(GameEvent::WallTriggered { index, spawned });
        log::info!("Wall {} triggered: {} hostiles", index, spawned);
        return;
    }

    if state.spawn_wall_active() {
        if state.all_hostiles_defeated() {
            if let Some(wall) = state.level.wall_mut(index) {
                wall.destroyed = true;
            }
            state.wall_index += 1;
            state.push_event(GameEvent::WaveCleared { index });
            log::info!("Wall {} cleared", index);
        }
        return;
    }

    if state.should_scroll_camera() {
        let shift = state.player_screen_x() - state.camera.width * state.tuning.scroll_trigger;
        state.camera.translate(shift);
        if !state.moon.falling {
            state.moon.shift(shift);
        }
    }
}
