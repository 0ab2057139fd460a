//! Gravity placement, turn management and win/draw detection

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{COLUMNS, Color, Grid, ROWS, lines};
use crate::{
    Result,
    engine::{Engine, Outcome},
    error::InvalidMove,
};

/// Where the last piece came to rest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub color: Color,
}

/// Connect-four rule engine on a 6x6 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ConnectFour {
    grid: Grid,
    to_move: Color,
    last_drop: Option<Placement>,
}

impl ConnectFour {
    /// Create an empty grid with Red to move
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an engine from six row strings (top first), inferring the turn.
    ///
    /// # Errors
    ///
    /// Returns error if the rows are malformed, a piece floats above an empty
    /// cell, or the piece counts cannot arise from alternating play.
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let grid = Grid::from_rows(rows)?;
        if !grid.is_settled() {
            return Err(crate::Error::InvalidConfiguration {
                message: "grid has a piece above an empty cell".to_string(),
            });
        }
        let (red, yellow) = (grid.count(Color::Red), grid.count(Color::Yellow));
        let to_move = if red == yellow {
            Color::Red
        } else if red == yellow + 1 {
            Color::Yellow
        } else {
            return Err(crate::Error::InvalidConfiguration {
                message: format!(
                    "piece counts (Red={red}, Yellow={yellow}) cannot arise from alternating play"
                ),
            });
        };
        Ok(ConnectFour {
            grid,
            to_move,
            last_drop: None,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<Color> {
        self.grid.get(row, column)
    }

    /// Row a piece dropped into `column` would land in
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        if column >= COLUMNS {
            return None;
        }
        self.grid.landing_row(column)
    }

    pub fn last_drop(&self) -> Option<Placement> {
        self.last_drop
    }
}

impl Engine for ConnectFour {
    type Mark = Color;
    type Input = usize;

    fn apply_move(&mut self, column: usize) -> Result<Outcome<Color>> {
        if self.is_game_over() {
            return Err(InvalidMove::GameOver.into());
        }
        if column >= COLUMNS {
            return Err(InvalidMove::OutOfRange {
                position: column,
                limit: COLUMNS,
            }
            .into());
        }
        let Some(row) = self.grid.landing_row(column) else {
            return Err(InvalidMove::ColumnFull { column }.into());
        };

        let mover = self.to_move;
        self.grid.cells[row][column] = Some(mover);
        self.last_drop = Some(Placement {
            row,
            column,
            color: mover,
        });

        if self.check_win() {
            return Ok(Outcome::Win(mover));
        }
        if self.grid.is_full() {
            return Ok(Outcome::Draw);
        }

        self.to_move = mover.opponent();
        Ok(Outcome::Continue(self.to_move))
    }

    /// Full-board rescan; equivalent to checking only the last drop since a
    /// single placement cannot change any other cell's runs.
    fn check_win(&self) -> bool {
        lines::find_winner(&self.grid).is_some()
    }

    fn winner(&self) -> Option<Color> {
        lines::find_winner(&self.grid)
    }

    fn is_game_over(&self) -> bool {
        self.check_win() || self.grid.is_full()
    }

    fn current_player(&self) -> Color {
        self.to_move
    }

    fn legal_moves(&self) -> Vec<usize> {
        if self.is_game_over() {
            return Vec::new();
        }
        (0..COLUMNS)
            .filter(|&column| !self.grid.is_column_full(column))
            .collect()
    }

    fn occupied_count(&self) -> usize {
        self.grid.occupied_count()
    }

    fn capacity(&self) -> usize {
        ROWS * COLUMNS
    }

    fn clear(&mut self) {
        *self = Self::new();
    }
}

impl fmt::Display for ConnectFour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}
