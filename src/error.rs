//! Error types
//!
//! Failures only happen while building a level or loading tuning. Once a
//! [`GameState`](crate::sim::GameState) exists, ticking is total.

/// A map template that cannot produce a playable level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    /// No non-blank rows at all.
    #[error("template has no rows")]
    Empty,

    /// Rows must all have the same width.
    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of this row.
        found: usize,
    },

    /// A character that is not part of the template alphabet.
    #[error("unknown tile {ch:?} at row {row}, column {col}")]
    UnknownTile {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
        /// The offending character.
        ch: char,
    },

    #[error("template has no player spawn")]
    MissingPlayerSpawn,

    #[error("second player spawn at row {row}, column {col}")]
    DuplicatePlayerSpawn { row: usize, col: usize },

    #[error("template has no adversary spawn")]
    MissingAdversarySpawn,

    #[error("second adversary spawn at row {row}, column {col}")]
    DuplicateAdversarySpawn { row: usize, col: usize },

    /// A level without collectibles could never be completed.
    #[error("template has no collectibles")]
    NoCollectibles,
}

/// Top-level error for building a game.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("tuning is not valid JSON: {0}")]
    TuningFormat(#[from] serde_json::Error),

    #[error("invalid tuning: {0}")]
    InvalidTuning(String),
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;
