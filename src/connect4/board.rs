//! Grid representation for the 6x6 gravity board

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::Mark;

/// Number of rows; row 0 is the top, row `ROWS - 1` the bottom
pub const ROWS: usize = 6;
/// Number of columns
pub const COLUMNS: usize = 6;

/// A piece color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Color {
    #[default]
    Red,
    Yellow,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Yellow,
            Color::Yellow => Color::Red,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Yellow => 'Y',
        }
    }

    fn from_char(c: char) -> Option<Option<Color>> {
        match c {
            '.' | '_' => Some(None),
            'R' | 'r' => Some(Some(Color::Red)),
            'Y' | 'y' => Some(Some(Color::Yellow)),
            _ => None,
        }
    }
}

impl Mark for Color {
    const FIRST: Self = Color::Red;

    fn opponent(self) -> Self {
        Color::opponent(self)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::Red => "Red",
            Color::Yellow => "Yellow",
        })
    }
}

/// The 6x6 grid, indexed `[row][column]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Grid {
    pub cells: [[Option<Color>; COLUMNS]; ROWS],
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a grid from six rows of six characters, top row first.
    ///
    /// `R`/`Y` are pieces, `.` is empty; whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 36 cells are given or a character is invalid.
    pub fn from_rows(rows: &[&str]) -> Result<Self, crate::Error> {
        let joined = rows.join("");
        let chars: Vec<char> = joined.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < ROWS * COLUMNS {
            return Err(crate::Error::InvalidBoardLength {
                expected: ROWS * COLUMNS,
                got: chars.len(),
                context: joined,
            });
        }

        let mut grid = Grid::new();
        for (i, &c) in chars.iter().take(ROWS * COLUMNS).enumerate() {
            grid.cells[i / COLUMNS][i % COLUMNS] =
                Color::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: joined.clone(),
                })?;
        }
        Ok(grid)
    }

    pub fn get(&self, row: usize, column: usize) -> Option<Color> {
        self.cells[row][column]
    }

    /// Lowest empty row in a column, scanning up from the bottom
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        (0..ROWS).rev().find(|&row| self.cells[row][column].is_none())
    }

    /// A column accepts a piece while its top cell is empty
    pub fn is_column_full(&self, column: usize) -> bool {
        self.cells[0][column].is_some()
    }

    pub fn is_full(&self) -> bool {
        (0..COLUMNS).all(|column| self.is_column_full(column))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    pub fn count(&self, color: Color) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Some(color))
            .count()
    }

    /// True if every piece rests on the bottom row or on another piece
    pub fn is_settled(&self) -> bool {
        (0..ROWS - 1).all(|row| {
            (0..COLUMNS).all(|column| {
                self.cells[row][column].is_none() || self.cells[row + 1][column].is_some()
            })
        })
    }

    /// Rows as sent to the AI services (`null`, `"Red"`, `"Yellow"`)
    pub fn to_wire(&self) -> [[Option<Color>; COLUMNS]; ROWS] {
        self.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            let line: Vec<String> = cells
                .iter()
                .map(|cell| cell.map_or('.', Color::to_char).to_string())
                .collect();
            write!(f, "{}", line.join(" "))?;
            if row < ROWS - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
