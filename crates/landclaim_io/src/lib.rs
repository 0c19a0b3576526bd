//! # Landclaim IO
//!
//! Persistence for the territory engine.
//!
//! Ownership is never written to disk. A saved world is the ordered list of
//! territory events that built it, and loading replays them, so the
//! placement order behind every tie-break survives a save/load cycle.
//!
//! This crate provides:
//! - Structured error handling with custom error types
//! - JSON serialization helpers
//! - Replay logs (plain or gzip-compressed) and world reconstruction

/// Error types and result aliases for I/O operations
pub mod error;
/// Replay-log persistence and world reconstruction
pub mod replay;
/// Validated JSON serialization helpers
pub mod serialization;

pub use error::{IoError, Result};
pub use replay::{load_world, ReplayLog, REPLAY_FORMAT_VERSION};
pub use serialization::{from_json, read_json_file, to_json_pretty, write_json_file};
