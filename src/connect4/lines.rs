//! Directional run-length scanning for four in a row

use super::{COLUMNS, Color, Grid, ROWS};

/// Pieces in a row needed to win
pub const LINE_LENGTH: usize = 4;

/// Direction vectors as (row step, column step)
pub const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // horizontal
    (1, 0),  // vertical
    (1, 1),  // diagonal down-right
    (1, -1), // diagonal down-left
];

fn step(row: usize, column: usize, dr: isize, dc: isize, n: isize) -> Option<(usize, usize)> {
    let r = row as isize + dr * n;
    let c = column as isize + dc * n;
    if (0..ROWS as isize).contains(&r) && (0..COLUMNS as isize).contains(&c) {
        Some((r as usize, c as usize))
    } else {
        None
    }
}

/// Count consecutive pieces of `color` through (row, column) along one
/// direction, extending both ways. The cell itself counts as one.
pub fn run_length(grid: &Grid, row: usize, column: usize, direction: (isize, isize)) -> usize {
    let Some(color) = grid.get(row, column) else {
        return 0;
    };
    let (dr, dc) = direction;
    let mut count = 1;
    for sign in [1, -1] {
        let mut n = 1;
        while let Some((r, c)) = step(row, column, dr * sign, dc * sign, n) {
            if grid.get(r, c) != Some(color) {
                break;
            }
            count += 1;
            n += 1;
        }
    }
    count
}

/// True if the piece at (row, column) belongs to a run of four or more
pub fn completes_line(grid: &Grid, row: usize, column: usize) -> bool {
    DIRECTIONS
        .iter()
        .any(|&direction| run_length(grid, row, column, direction) >= LINE_LENGTH)
}

/// Scan every occupied cell and return the color of the first run of four.
pub fn find_winner(grid: &Grid) -> Option<Color> {
    (0..ROWS)
        .flat_map(|row| (0..COLUMNS).map(move |column| (row, column)))
        .find(|&(row, column)| grid.get(row, column).is_some() && completes_line(grid, row, column))
        .and_then(|(row, column)| grid.get(row, column))
}
