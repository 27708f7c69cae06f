//! Fixed-step simulation tick
//!
//! One call advances the game by exactly one frame:
//! player steer + move, pickups, adversaries (wander, move, contact),
//! power decay, then the level-complete check.

use rand::Rng;

use super::adversary::{Encounter, resolve_encounter, wander};
use super::collectibles::{check_bonus_collisions, check_pellet_collisions};
use super::movement::{Wrap, move_body, steer};
use super::state::{GameEvent, GameState};

/// Advance the game state by one tick
pub fn tick<R: Rng>(state: &mut GameState<R>) {
    state.time_ticks += 1;

    let tuning = &state.tuning;
    let tile = tuning.tile_size;
    let level = &mut state.level;
    let player_wrap = Wrap::Horizontal {
        width: tuning.playfield_width(level.map.cols()),
    };

    // Player
    steer(&mut level.player, &level.map, tile, player_wrap);
    move_body(
        &mut level.player.body,
        tuning.player_speed,
        &level.map,
        tile,
        player_wrap,
    );

    // Pickups
    let mut gained = check_pellet_collisions(&level.player, &mut level.pellets, tuning);
    let bonus = check_bonus_collisions(&mut level.player, &mut level.bonuses, tuning);
    gained += bonus.score;
    for _ in 0..bonus.taken {
        state.events.push(GameEvent::BonusTaken);
        log::debug!("Bonus taken, empowered for {} ticks", tuning.power_duration);
    }

    // Adversaries, in index order; a catch ends the tick
    let mut caught = false;
    for (index, adversary) in level.adversaries.iter_mut().enumerate() {
        wander(adversary, &mut state.rng, tuning.reroll_chance);
        move_body(
            &mut adversary.body,
            tuning.adversary_speed,
            &level.map,
            tile,
            Wrap::None,
        );

        match resolve_encounter(&level.player, adversary, tuning.contact_tolerance) {
            Encounter::Clear => {}
            Encounter::Consumed => {
                gained += tuning.adversary_reward;
                state.events.push(GameEvent::AdversaryConsumed { index });
                log::debug!("Adversary {} consumed", index);
            }
            Encounter::Caught => {
                caught = true;
                break;
            }
        }
    }

    state.session.score = state.session.score.saturating_add(gained);

    if caught {
        state.lose_life();
        return;
    }

    // Power decay
    let player = &mut state.level.player;
    if player.power_ticks > 0 {
        player.power_ticks -= 1;
        if player.power_ticks == 0 {
            state.events.push(GameEvent::PowerExpired);
        }
    }

    if state.level.is_cleared() {
        state.complete_level();
    }
}
