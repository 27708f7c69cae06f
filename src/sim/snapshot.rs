//! Read-only view handed to the presentation layer once per tick

use serde::Serialize;

use super::entity::{Adversary, Bonus, Pellet, Player};
use super::grid::GridMap;
use super::state::GameState;

/// Borrowed snapshot of everything a renderer or HUD needs
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub tile_size: f32,
    pub map: &'a GridMap,
    pub player: &'a Player,
    pub adversaries: &'a [Adversary],
    pub pellets: &'a [Pellet],
    pub bonuses: &'a [Bonus],
    pub score: u64,
    pub lives: u8,
    pub level: u32,
    pub empowered: bool,
}

impl<'a> Snapshot<'a> {
    pub fn capture<R>(state: &'a GameState<R>) -> Self {
        let level = &state.level;
        Self {
            tile_size: state.tuning.tile_size,
            map: &level.map,
            player: &level.player,
            adversaries: &level.adversaries,
            pellets: &level.pellets,
            bonuses: &level.bonuses,
            score: state.session.score,
            lives: state.session.lives,
            level: state.session.level,
            empowered: level.player.is_empowered(),
        }
    }

    /// JSON for hosts that cannot read Rust structs (e.g. JavaScript)
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
