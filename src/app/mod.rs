pub mod commands;
pub mod report;

pub use commands::{generate, run, verify, VerifyOutcome};
pub use report::{player_stats, render_ascii, PlayerStats};
