//! Tile grid and map templates
//!
//! A template is parsed once; every level (re)initialization builds its
//! entities from the parsed [`Template`]. The [`GridMap`] never changes after
//! parsing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::TemplateError;

/// Built-in maze: 28x18, tunnel on row 8
pub const DEFAULT_TEMPLATE: &[&str] = &[
    "WWWWWWWWWWWWWWWWWWWWWWWWWWWW",
    "WB...........WW...........BW",
    "W.WWWW.WWWWW.WW.WWWWW.WWWW.W",
    "W.WWWW.WWWWW.WW.WWWWW.WWWW.W",
    "W..........................W",
    "W.WWWW.WW.WWWWWWWW.WW.WWWW.W",
    "W......WW....WW....WW......W",
    "WWWWWW.WWWWW WW WWWWW.WWWWWW",
    "      .   W  G   W    .     ",
    "WWWWWW.WW WWWWWWWW WW.WWWWWW",
    "W............WW............W",
    "W.WWWW.WWWWW.WW.WWWWW.WWWW.W",
    "WB..WW.......P........WW..BW",
    "WWW.WW.WW.WWWWWWWW.WW.WW.WWW",
    "W......WW....WW....WW......W",
    "W.WWWWWWWWWW.WW.WWWWWWWWWW.W",
    "W..........................W",
    "WWWWWWWWWWWWWWWWWWWWWWWWWWWW",
];

/// Static tile kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Wall,
    Floor,
}

/// Integer grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Top-left pixel of this cell
    #[inline]
    pub fn to_world(self, tile_size: f32) -> Vec2 {
        Vec2::new(self.col as f32 * tile_size, self.row as f32 * tile_size)
    }
}

/// Row-major tile layout, fixed for the lifetime of a level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridMap {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
}

impl GridMap {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Tile at a signed coordinate; anything outside the grid is a wall
    pub fn tile(&self, row: i64, col: i64) -> Tile {
        let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
            return Tile::Wall;
        };
        if row >= self.rows || col >= self.cols {
            return Tile::Wall;
        }
        self.tiles
            .get(row * self.cols + col)
            .copied()
            .unwrap_or(Tile::Wall)
    }

    #[inline]
    pub fn is_wall(&self, row: i64, col: i64) -> bool {
        self.tile(row, col) == Tile::Wall
    }

    /// Grid cell containing a pixel coordinate (floor of coord / tile size)
    #[inline]
    pub fn cell_of(pos: Vec2, tile_size: f32) -> (i64, i64) {
        let cell = (pos / tile_size).floor();
        (cell.y as i64, cell.x as i64)
    }

    /// Whether the cell containing `pos` is a wall
    #[inline]
    pub fn is_wall_at(&self, pos: Vec2, tile_size: f32) -> bool {
        let (row, col) = Self::cell_of(pos, tile_size);
        self.is_wall(row, col)
    }
}

/// A parsed level template: the map plus every marker position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub map: GridMap,
    pub player_spawn: Cell,
    pub adversary_spawn: Cell,
    pub pellets: Vec<Cell>,
    pub bonuses: Vec<Cell>,
}

impl Template {
    /// Parse newline-separated rows. Blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self, TemplateError> {
        let rows: Vec<&str> = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty())
            .collect();
        Self::from_rows(&rows)
    }

    /// Parse one string per row
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, TemplateError> {
        let first = rows.first().ok_or(TemplateError::Empty)?;
        let cols = first.as_ref().chars().count();
        if cols == 0 {
            return Err(TemplateError::Empty);
        }

        let mut tiles = Vec::with_capacity(rows.len() * cols);
        let mut player_spawn = None;
        let mut adversary_spawn = None;
        let mut pellets = Vec::new();
        let mut bonuses = Vec::new();

        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != cols {
                return Err(TemplateError::RaggedRow {
                    row,
                    expected: cols,
                    found,
                });
            }

            for (col, ch) in line.chars().enumerate() {
                let cell = Cell::new(row, col);
                let tile = match ch {
                    'W' | '#' => Tile::Wall,
                    ' ' => Tile::Floor,
                    '.' => {
                        pellets.push(cell);
                        Tile::Floor
                    }
                    'B' => {
                        bonuses.push(cell);
                        Tile::Floor
                    }
                    'P' => {
                        if player_spawn.replace(cell).is_some() {
                            return Err(TemplateError::DuplicatePlayerSpawn { row, col });
                        }
                        Tile::Floor
                    }
                    'G' => {
                        if adversary_spawn.replace(cell).is_some() {
                            return Err(TemplateError::DuplicateAdversarySpawn { row, col });
                        }
                        Tile::Floor
                    }
                    ch => return Err(TemplateError::UnknownTile { row, col, ch }),
                };
                tiles.push(tile);
            }
        }

        let player_spawn = player_spawn.ok_or(TemplateError::MissingPlayerSpawn)?;
        let adversary_spawn = adversary_spawn.ok_or(TemplateError::MissingAdversarySpawn)?;
        if pellets.is_empty() {
            return Err(TemplateError::NoCollectibles);
        }

        Ok(Self {
            map: GridMap {
                rows: rows.len(),
                cols,
                tiles,
            },
            player_spawn,
            adversary_spawn,
            pellets,
            bonuses,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_parses() {
        let template = Template::from_rows(DEFAULT_TEMPLATE).expect("default template");
        assert_eq!(template.map.rows(), 18);
        assert_eq!(template.map.cols(), 28);
        assert_eq!(template.player_spawn, Cell::new(12, 13));
        assert_eq!(template.adversary_spawn, Cell::new(8, 13));
        assert_eq!(template.bonuses.len(), 4);
        assert!(!template.pellets.is_empty());
        // Tunnel row is open at both edges
        assert!(!template.map.is_wall(8, 0));
        assert!(!template.map.is_wall(8, 27));
    }

    #[test]
    fn test_out_of_bounds_is_wall() {
        let template = Template::from_rows(&["P.G"]).expect("template");
        assert!(!template.map.is_wall(0, 0));
        assert!(template.map.is_wall(-1, 0));
        assert!(template.map.is_wall(0, -1));
        assert!(template.map.is_wall(1, 0));
        assert!(template.map.is_wall(0, 3));
        assert!(template.map.is_wall(i64::MAX, i64::MIN));
    }

    #[test]
    fn test_markers_are_floor() {
        let template = Template::from_rows(&["WPW", "W.W", "WBW", "WGW"]).expect("template");
        for row in 0..4 {
            assert!(template.map.is_wall(row, 0));
            assert!(!template.map.is_wall(row, 1));
            assert!(template.map.is_wall(row, 2));
        }
        assert_eq!(template.pellets, vec![Cell::new(1, 1)]);
        assert_eq!(template.bonuses, vec![Cell::new(2, 1)]);
    }

    #[test]
    fn test_hash_is_wall_alias() {
        let template = Template::from_rows(&["#P.G#"]).expect("template");
        assert!(template.map.is_wall(0, 0));
        assert!(template.map.is_wall(0, 4));
    }

    #[test]
    fn test_cell_of_floors_coordinates() {
        assert_eq!(GridMap::cell_of(Vec2::new(0.0, 0.0), 20.0), (0, 0));
        assert_eq!(GridMap::cell_of(Vec2::new(19.9, 39.9), 20.0), (1, 0));
        assert_eq!(GridMap::cell_of(Vec2::new(20.0, 40.0), 20.0), (2, 1));
        assert_eq!(GridMap::cell_of(Vec2::new(-0.5, 5.0), 20.0), (0, -1));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Template::parse(""), Err(TemplateError::Empty));
        assert_eq!(Template::parse("\n\n"), Err(TemplateError::Empty));
        assert_eq!(
            Template::from_rows(&["P.G", "WW"]),
            Err(TemplateError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Template::from_rows(&["P.G?"]),
            Err(TemplateError::UnknownTile {
                row: 0,
                col: 3,
                ch: '?'
            })
        );
        assert_eq!(
            Template::from_rows(&["..G"]),
            Err(TemplateError::MissingPlayerSpawn)
        );
        assert_eq!(
            Template::from_rows(&["P.P", "G.."]),
            Err(TemplateError::DuplicatePlayerSpawn { row: 0, col: 2 })
        );
        assert_eq!(
            Template::from_rows(&["P.."]),
            Err(TemplateError::MissingAdversarySpawn)
        );
        assert_eq!(
            Template::from_rows(&["PG.G"]),
            Err(TemplateError::DuplicateAdversarySpawn { row: 0, col: 3 })
        );
        assert_eq!(
            Template::from_rows(&["P G"]),
            Err(TemplateError::NoCollectibles)
        );
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        let template = Template::parse("\r\nWWWW\r\nWP.W\r\n\r\nWG.W\r\nWWWW\r\n").expect("template");
        assert_eq!(template.map.rows(), 4);
        assert_eq!(template.map.cols(), 4);
    }
}
