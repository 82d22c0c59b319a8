//! Positional debug output
//!
//! One line per entity plus the camera and the untriggered walls, rebuilt
//! every tick while position logging is on.

use super::entity::Entity;
use super::state::GameState;

/// Screen x of every wall not yet released, with its index
pub fn wall_markers(state: &GameState) -> Vec<(usize, f32)> {
    state
        .level
        .walls()
        .iter()
        .enumerate()
        .filter(|(_, wall)| !wall.triggered)
        .map(|(i, wall)| (i, wall.trigger_x - state.camera.x))
        .collect()
}

pub fn position_log(state: &GameState) -> Vec<String> {
    let mut lines = Vec::with_capacity(state.hostiles.len() + 5);

    lines.push(format!(
        "camera x={:.1} viewport={}x{} wall={}/{} live={}",
        state.camera.x,
        state.camera.width,
        state.camera.height,
        state.wall_index,
        state.level.len(),
        state.live_hostiles()
    ));
    lines.push(format!(
        "player pos=({:.1}, {:.1}) screen_x={:.1} state={:?}",
        state.player.pos.x,
        state.player.pos.y,
        state.player_screen_x(),
        state.player.state
    ));
    lines.push(format!(
        "chain pos=({:.1}, {:.1}) attached={}",
        state.chain.pos.x,
        state.chain.pos.y,
        state.chain.is_attached()
    ));
    lines.push(format!(
        "moon pos=({:.1}, {:.1}) distance={:.0}",
        state.moon.pos.x, state.moon.pos.y, state.moon.distance
    ));
    for hostile in &state.hostiles {
        let pos = hostile.position();
        lines.push(format!(
            "{:?} {} pos=({:.1}, {:.1}) hp={}",
            hostile.kind(),
            hostile.id(),
            pos.x,
            pos.y,
            hostile.health()
        ));
    }

    let markers: Vec<String> = wall_markers(state)
        .iter()
        .map(|(i, x)| format!("{}@{:.0}", i, x))
        .collect();
    lines.push(format!("walls {}", markers.join(" ")));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::VIEWPORT_WIDTH;
    use crate::settings::Settings;
    use crate::sim::level::Level;
    use crate::tuning::Tuning;

    fn state() -> GameState {
        GameState::new(
            Level::chapter_one(VIEWPORT_WIDTH),
            Tuning::default(),
            &Settings::debug(),
            5,
        )
    }

    #[test]
    fn test_markers_follow_camera() {
        let mut s = state();
        s.camera.translate(400.0);
        s.level.wall_mut(0).unwrap().triggered = true;
        assert_eq!(
            wall_markers(&s),
            vec![(1, 2480.0), (2, 3920.0), (3, 5360.0)]
        );
    }

    #[test]
    fn test_one_line_per_hostile() {
        let mut s = state();
        assert_eq!(position_log(&s).len(), 5);

        s.spawn_wave(1);
        let log = position_log(&s);
        assert_eq!(log.len(), 8);
        assert!(log[4].starts_with("Regular"));
        assert!(log[7].starts_with("walls 0@1440"));
    }
}
