//! Connect-four rule engine on a 6x6 gravity board

pub mod board;
pub mod engine;
pub mod lines;

pub use board::{COLUMNS, Color, Grid, ROWS};
pub use engine::{ConnectFour, Placement};
pub use lines::{DIRECTIONS, LINE_LENGTH};
