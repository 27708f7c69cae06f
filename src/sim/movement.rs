//! Grid movement and wall collision
//!
//! A move either lands entirely on a floor tile or does not happen at all.
//! There is no sliding along walls.

use glam::Vec2;

use super::entity::{Body, Player};
use super::grid::GridMap;

/// Edge behavior for a moving body
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Wrap {
    /// Out-of-bounds is a wall
    None,
    /// Leaving the left/right edge re-enters at the opposite side (tunnel)
    Horizontal { width: f32 },
}

impl Wrap {
    /// Apply the wrap rule to a candidate position
    #[inline]
    pub fn apply(self, pos: Vec2, tile_size: f32) -> Vec2 {
        match self {
            Wrap::None => pos,
            Wrap::Horizontal { width } => {
                if pos.x < 0.0 {
                    Vec2::new(width - tile_size, pos.y)
                } else if pos.x >= width {
                    Vec2::new(0.0, pos.y)
                } else {
                    pos
                }
            }
        }
    }
}

/// Advance `body` by `speed` pixels along its heading.
///
/// Returns `false` (and leaves the body untouched) when the body has no
/// heading or the candidate cell is a wall.
pub fn move_body(body: &mut Body, speed: f32, map: &GridMap, tile_size: f32, wrap: Wrap) -> bool {
    if body.dir.is_none() {
        return false;
    }

    let candidate = wrap.apply(body.pos + body.dir.to_vec() * speed, tile_size);
    if map.is_wall_at(candidate, tile_size) {
        return false;
    }

    body.pos = candidate;
    true
}

/// Commit the player's desired direction if one full tile that way is open.
///
/// Returns `true` when the heading changed.
pub fn steer(player: &mut Player, map: &GridMap, tile_size: f32, wrap: Wrap) -> bool {
    let desired = player.desired;
    if desired.is_none() || desired == player.body.dir {
        return false;
    }

    let probe = wrap.apply(player.body.pos + desired.to_vec() * tile_size, tile_size);
    if map.is_wall_at(probe, tile_size) {
        return false;
    }

    player.body.dir = desired;
    true
}
