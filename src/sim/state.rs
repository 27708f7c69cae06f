//! Game state and session bookkeeping
//!
//! A [`GameState`] owns everything for one game: the parsed template, the
//! tuning, the session counters, the live level and the random source.
//! Levels are never patched; every respawn or level change rebuilds the
//! whole [`Level`] from the template.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Adversary, Bonus, Direction, Pellet, Player};
use super::grid::{DEFAULT_TEMPLATE, GridMap, Template};
use super::snapshot::Snapshot;
use crate::error::Result;
use crate::tuning::Tuning;

/// Things the host may want to react to (audio, overlays)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A session (re)started at this level
    Started { level: u32 },
    /// Session counters were reset
    Reset,
    BonusTaken,
    /// Index into the level's adversary list
    AdversaryConsumed { index: usize },
    PowerExpired,
    LifeLost { lives_left: u8 },
    /// Queued before the session reset, so `final_score` is the real score
    GameOver { final_score: u64, level: u32 },
    /// Queued after the level number has advanced
    LevelComplete { level: u32 },
}

/// Score, lives and level for the current playthrough
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// 1-based level number
    pub level: u32,
    pub score: u64,
    pub lives: u8,
}

impl Session {
    pub fn new(starting_lives: u8) -> Self {
        Self {
            level: 1,
            score: 0,
            lives: starting_lives,
        }
    }

    /// Back to level 1, no score, full lives
    pub fn reset(&mut self, starting_lives: u8) {
        *self = Self::new(starting_lives);
    }
}

/// Everything that lives for exactly one level instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub map: GridMap,
    pub player: Player,
    /// Evaluated in index order every tick
    pub adversaries: Vec<Adversary>,
    pub pellets: Vec<Pellet>,
    pub bonuses: Vec<Bonus>,
}

impl Level {
    /// Build a fresh level instance from the template
    pub fn build(template: &Template, number: u32, tuning: &Tuning) -> Self {
        let tile = tuning.tile_size;
        let spawn = template.adversary_spawn.to_world(tile);
        Self {
            map: template.map.clone(),
            player: Player::spawn(template.player_spawn.to_world(tile)),
            adversaries: (0..tuning.adversary_count(number))
                .map(|_| Adversary::spawn(spawn))
                .collect(),
            pellets: template
                .pellets
                .iter()
                .map(|cell| Pellet::new(cell.to_world(tile)))
                .collect(),
            bonuses: template
                .bonuses
                .iter()
                .map(|cell| Bonus::new(cell.to_world(tile)))
                .collect(),
        }
    }

    /// True once every pellet is eaten
    pub fn is_cleared(&self) -> bool {
        self.pellets.iter().all(|p| p.eaten)
    }

    pub fn pellets_remaining(&self) -> usize {
        self.pellets.iter().filter(|p| !p.eaten).count()
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = Pcg32> {
    pub template: Template,
    pub tuning: Tuning,
    pub session: Session,
    pub level: Level,
    /// Simulation tick counter (never reset)
    pub time_ticks: u64,
    /// Shared by every adversary, drawn in adversary order
    pub(crate) rng: R,
    pub(crate) events: Vec<GameEvent>,
}

impl GameState<Pcg32> {
    /// Default maze and tuning with a seeded RNG
    pub fn new(seed: u64) -> Result<Self> {
        let template = Template::from_rows(DEFAULT_TEMPLATE)?;
        Self::with_template(template, Tuning::default(), seed)
    }

    /// Custom template and tuning with a seeded RNG
    pub fn with_template(template: Template, tuning: Tuning, seed: u64) -> Result<Self> {
        tuning.validate()?;
        Ok(Self::with_rng(template, tuning, Pcg32::seed_from_u64(seed)))
    }
}

impl<R: Rng> GameState<R> {
    /// Inject any random source (replays, tests). `tuning` is trusted as-is.
    pub fn with_rng(template: Template, tuning: Tuning, rng: R) -> Self {
        let session = Session::new(tuning.starting_lives);
        let level = Level::build(&template, session.level, &tuning);
        let mut state = Self {
            template,
            tuning,
            session,
            level,
            time_ticks: 0,
            rng,
            events: Vec::new(),
        };
        state.events.push(GameEvent::Started { level: 1 });
        log::info!(
            "Session started: {} pellets, {} adversaries",
            state.level.pellets.len(),
            state.level.adversaries.len()
        );
        state
    }

    /// Input source: overwrite the player's desired direction
    pub fn set_desired_direction(&mut self, direction: Direction) {
        self.level.player.desired = direction;
    }

    /// Events queued since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read-only view for the presentation layer
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::capture(self)
    }

    /// Host-requested new game
    pub fn restart(&mut self) {
        self.reset_session();
        self.events.push(GameEvent::Started {
            level: self.session.level,
        });
        log::info!("Session restarted");
    }

    /// Throw the level away and rebuild it for the current level number
    pub(crate) fn rebuild_level(&mut self) {
        self.level = Level::build(&self.template, self.session.level, &self.tuning);
    }

    fn reset_session(&mut self) {
        self.session.reset(self.tuning.starting_lives);
        self.events.push(GameEvent::Reset);
        self.rebuild_level();
    }

    /// Vulnerable player was caught: lose a life, maybe end the game, and
    /// rebuild the level either way
    pub(crate) fn lose_life(&mut self) {
        self.session.lives = self.session.lives.saturating_sub(1);
        let lives_left = self.session.lives;
        self.events.push(GameEvent::LifeLost { lives_left });
        log::debug!("Life lost, {} left", lives_left);

        if lives_left == 0 {
            let final_score = self.session.score;
            let level = self.session.level;
            self.events.push(GameEvent::GameOver { final_score, level });
            log::info!("Game over: score {} on level {}", final_score, level);
            self.reset_session();
            self.events.push(GameEvent::Started {
                level: self.session.level,
            });
        } else {
            self.rebuild_level();
        }
    }

    /// All pellets gone: next level, score and lives carry over
    pub(crate) fn complete_level(&mut self) {
        self.session.level = self.session.level.saturating_add(1);
        self.rebuild_level();
        let level = self.session.level;
        self.events.push(GameEvent::LevelComplete { level });
        log::info!(
            "Level {} reached ({} adversaries)",
            level,
            self.level.adversaries.len()
        );
    }
}
