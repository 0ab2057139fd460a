//! Subcommands of the `arcade` binary

pub mod autoplay;
pub mod play;
