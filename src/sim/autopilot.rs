//! Idle/demo mode input
//!
//! Plays the stage with plain rules: recover a loose chain, pull the moon
//! once the boss is out, otherwise walk up to the nearest hostile and
//! swing at it, otherwise keep walking right.

use glam::Vec2;

use super::chain::Chain;
use super::entity::Entity;
use super::state::GameState;
use super::tick::{Swipe, TickInput};
use crate::consts::CHAIN_WIDTH;

/// Horizontal gap between the player's and the target's centers when swinging
const STRIKE_DISTANCE: f32 = 200.0;
/// How close to the strike point counts as in position
const STRIKE_TOLERANCE: f32 = 40.0;
const SWING_INTERVAL: u64 = 15;
const SWIPE_INTERVAL: u64 = 10;
const SWIPE_SPEED: f32 = 3000.0;

/// Input the autopilot would give for the current state
pub fn autopilot_input(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    let player = state.player.center();

    if !state.chain.is_attached() {
        let chain = state.chain.bounds();
        input.move_to = Some(Vec2::new(chain.right() + 1.0, chain.y));
        return input;
    }

    if state.player.moon_throw_enabled {
        if state.time_ticks % SWIPE_INTERVAL == 0 {
            input.swipe = Some(Swipe {
                origin: state.chain.pos + Vec2::new(CHAIN_WIDTH / 2.0, Chain::size().y / 2.0),
                velocity: Vec2::new(0.0, -SWIPE_SPEED),
            });
        }
        return input;
    }

    let nearest = state
        .hostiles
        .iter()
        .filter(|h| h.is_alive())
        .map(|h| h.bounds().center())
        .min_by(|a, b| a.distance_squared(player).total_cmp(&b.distance_squared(player)));

    match nearest {
        Some(target) => {
            let side = if target.x >= player.x { 1.0 } else { -1.0 };
            let strike_point = target - Vec2::new(side * STRIKE_DISTANCE, 0.0);
            if strike_point.distance(player) <= STRIKE_TOLERANCE {
                if state.time_ticks % SWING_INTERVAL == 0 {
                    input.attack = Some((state.time_ticks / SWING_INTERVAL) as u32);
                }
            } else {
                input.move_to = Some(strike_point);
            }
        }
        None => input.move_to = Some(player + Vec2::new(300.0, 0.0)),
    }

    input
}
