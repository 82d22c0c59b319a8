//! Per-tick collision resolution between the player, the chain and hostiles
//!
//! Runs after every entity has moved. Two checks per hostile: body contact
//! hurts the player and knocks the chain loose, and the attack rect hurts
//! the hostile. An attack only lands once, on the first hostile in spawn
//! order that it overlaps.

use super::entity::{DamageOutcome, Entity};
use super::level::EnemyKind;
use super::state::{GameEvent, GameState, Sound};

/// Resolve all overlaps for this tick
pub fn resolve_collisions(state: &mut GameState) {
    if state.player.dying {
        return;
    }

    reattach_chain(state);

    for i in 0..state.hostiles.len() {
        let hostile_box = state.hostiles[i].bounds();

        if state.player.bounds().overlaps(&hostile_box) {
            if state.chain.detach() {
                state.push_event(GameEvent::ChainDetached);
                log::debug!("Chain knocked loose at x={:.0}", state.chain.pos.x);
            }
            if state.player.take_damage() {
                state.push_event(GameEvent::PlaySound(Sound::PlayerHit));
            }
        }

        let attack = state.player.attack_area();
        if !hostile_box.overlaps(&attack) {
            continue;
        }

        let hostile = &mut state.hostiles[i];
        let direction = if attack.x < hostile.origin_x() { 1.0 } else { -1.0 };
        let id = hostile.id();
        let kind = hostile.kind();
        let outcome = hostile.take_damage(direction);
        state.player.clear_attack_area();

        if kind == EnemyKind::Boss && outcome != DamageOutcome::Ignored {
            state.push_event(GameEvent::PlaySound(Sound::BossHit));
        }
        match outcome {
            DamageOutcome::Raged => state.push_event(GameEvent::BossRaging),
            DamageOutcome::Killed => {
                state.push_event(GameEvent::HostileDefeated { id });
                log::debug!("Hostile {} defeated", id);
            }
            DamageOutcome::Hurt | DamageOutcome::Ignored => {}
        }
    }
}

/// A loose chain is picked back up by walking over it, unless the player is
/// still flashing from the hit that knocked it loose
fn reattach_chain(state: &mut GameState) {
    if state.chain.is_attached() || state.player.taking_damage {
        return;
    }
    if state.player.bounds().overlaps(&state.chain.bounds()) {
        state.chain.attach(state.player.center());
        state.push_event(GameEvent::ChainAttached);
        log::debug!("Chain picked back up at x={:.0}", state.chain.pos.x);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::consts::*;
    use crate::settings::Settings;
    use crate::sim::enemy::Enemy;
    use crate::sim::entity::Hostile;
    use crate::sim::level::Level;
    use crate::tuning::Tuning;

    fn state() -> GameState {
        GameState::new(
            Level::chapter_one(VIEWPORT_WIDTH),
            Tuning::default(),
            &Settings::default(),
            7,
        )
    }

    fn add_enemy(state: &mut GameState, pos: Vec2) -> u32 {
        let id = state.next_entity_id();
        let enemy = Enemy::new(id, pos, &state.tuning);
        state.hostiles.push(Hostile::Enemy(enemy));
        id
    }

    #[test]
    fn test_contact_detaches_chain_and_hurts_player() {
        let mut s = state();
        let pos = s.player.pos;
        add_enemy(&mut s, pos);

        resolve_collisions(&mut s);
        assert!(!s.chain.is_attached());
        assert!(s.player.taking_damage);
        let events = s.drain_events();
        assert!(events.contains(&GameEvent::ChainDetached));
        assert!(events.contains(&GameEvent::PlaySound(Sound::PlayerHit)));

        // Still overlapping: no second hit, no reattach while flashing
        resolve_collisions(&mut s);
        assert!(s.drain_events().is_empty());
        assert!(!s.chain.is_attached());
    }

    #[test]
    fn test_attack_lands_on_first_hostile_only() {
        let mut s = state();
        s.player.pos = Vec2::ZERO;
        s.player.update(0.0);
        s.player.perform_attack(1);

        // Both hitboxes start where the player's ends: inside the swing, no contact
        let pos = Vec2::new(PLAYER_SIZE - PLAYER_HITBOX_INSET - ENEMY_HITBOX_INSET, 0.0);
        let first = add_enemy(&mut s, pos);
        add_enemy(&mut s, pos);

        resolve_collisions(&mut s);
        assert_eq!(s.hostiles[0].id(), first);
        assert_eq!(s.hostiles[0].health(), 4);
        assert_eq!(s.hostiles[1].health(), 5);
        assert!(s.player.attack_area().is_empty());
        assert!(!s.player.taking_damage);
    }

    #[test]
    fn test_dying_hostile_is_not_hit() {
        let mut s = state();
        s.player.perform_attack(1);
        let attack = s.player.attack_area();
        add_enemy(&mut s, Vec2::new(attack.x, attack.y));
        if let Hostile::Enemy(e) = &mut s.hostiles[0] {
            e.health = 1;
            e.take_damage(1.0);
        }

        resolve_collisions(&mut s);
        assert!(!s.player.attack_area().is_empty());
        assert!(!s.player.taking_damage);
    }

    #[test]
    fn test_walking_over_loose_chain_reattaches() {
        let mut s = state();
        s.chain.detach();
        s.chain.pos = s.player.pos + Vec2::new(100.0, -100.0);

        resolve_collisions(&mut s);
        assert!(s.chain.is_attached());
        assert_eq!(s.chain.pos, s.player.center());
        assert_eq!(s.drain_events(), vec![GameEvent::ChainAttached]);
    }

    #[test]
    fn test_reattach_checked_before_contact() {
        let mut s = state();
        s.chain.detach();
        s.chain.pos = s.player.pos + Vec2::new(100.0, -100.0);
        let pos = s.player.pos;
        add_enemy(&mut s, pos);

        // Picks the chain up, then the same tick's contact knocks it loose
        resolve_collisions(&mut s);
        let events = s.drain_events();
        assert_eq!(events[0], GameEvent::ChainAttached);
        assert!(events.contains(&GameEvent::ChainDetached));
        assert!(!s.chain.is_attached());
    }

    #[test]
    fn test_boss_hit_plays_sound() {
        let mut s = state();
        s.spawn_wave(0);
        s.drain_events();
        let boss_box = s.hostiles[0].bounds();
        s.player.pos = Vec2::new(boss_box.x - PLAYER_SIZE, boss_box.y + 200.0);
        s.player.update(0.0);
        s.player.perform_attack(1);

        resolve_collisions(&mut s);
        assert_eq!(s.hostiles[0].health(), 49);
        assert_eq!(s.drain_events(), vec![GameEvent::PlaySound(Sound::BossHit)]);
    }
}
