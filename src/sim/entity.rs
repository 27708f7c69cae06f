//! Player, adversaries and pickups

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Unit step direction (screen coordinates, +y is down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The four directions an adversary can roll, in draw order
    pub const CARDINAL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    /// Unit vector for this direction (zero for `None`)
    #[inline]
    pub fn to_vec(self) -> Vec2 {
        match self {
            Direction::None => Vec2::ZERO,
            Direction::Up => Vec2::NEG_Y,
            Direction::Down => Vec2::Y,
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
        }
    }

    pub fn is_none(self) -> bool {
        self == Direction::None
    }
}

/// Continuous position paired with the current heading
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Body {
    /// Top-left pixel
    pub pos: Vec2,
    pub dir: Direction,
}

impl Body {
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            dir: Direction::None,
        }
    }
}

/// The player avatar
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    /// Direction requested by input; committed once the way is clear
    pub desired: Direction,
    /// Ticks of empowerment left (0 = vulnerable)
    pub power_ticks: u32,
}

impl Player {
    pub fn spawn(pos: Vec2) -> Self {
        Self {
            body: Body::at(pos),
            desired: Direction::None,
            power_ticks: 0,
        }
    }

    #[inline]
    pub fn is_empowered(&self) -> bool {
        self.power_ticks > 0
    }
}

/// A wandering ghost
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Adversary {
    pub body: Body,
    /// Where this adversary starts and where it returns when consumed
    pub spawn: Vec2,
}

impl Adversary {
    pub fn spawn(pos: Vec2) -> Self {
        Self {
            body: Body::at(pos),
            spawn: pos,
        }
    }

    /// Teleport back to the spawn point; heading is kept
    pub fn respawn(&mut self) {
        self.body.pos = self.spawn;
    }
}

/// A score pellet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pellet {
    pub pos: Vec2,
    pub eaten: bool,
}

impl Pellet {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, eaten: false }
    }
}

/// A power-up (bat) granting temporary empowerment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bonus {
    pub pos: Vec2,
    pub taken: bool,
}

impl Bonus {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, taken: false }
    }
}
