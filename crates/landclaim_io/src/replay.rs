//! Replay logs: the saved form of a world.
//!
//! A log records the configuration fingerprint and every accepted territory
//! event in order. Files ending in `.gz` are gzip-compressed JSON, anything
//! else is plain JSON.

use crate::error::{IoError, Result};
use crate::serialization::{from_json, read_json_file, to_json_pretty, write_json_file};
use chrono::{DateTime, Utc};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use landclaim_core::{AppConfig, World};
use landclaim_data::TerritoryEvent;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

pub const REPLAY_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayLog {
    pub format_version: u32,
    /// [`AppConfig::fingerprint`] of the world the events were accepted by.
    pub config_fingerprint: String,
    pub saved_at: DateTime<Utc>,
    pub events: Vec<TerritoryEvent>,
}

impl ReplayLog {
    #[must_use]
    pub fn new(config: &AppConfig, events: Vec<TerritoryEvent>) -> Self {
        Self {
            format_version: REPLAY_FORMAT_VERSION,
            config_fingerprint: config.fingerprint(),
            saved_at: Utc::now(),
            events,
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if is_gzip(path) {
            let json = to_json_pretty(self)?;
            let mut encoder = GzEncoder::new(File::create(path)?, Compression::default());
            encoder.write_all(json.as_bytes())?;
            encoder.finish()?;
        } else {
            write_json_file(self, path)?;
        }
        tracing::info!(path = %path.display(), events = self.events.len(), "Replay log saved");
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let log: Self = if is_gzip(path) {
            let mut decoder = GzDecoder::new(File::open(path)?);
            let mut json = String::new();
            decoder.read_to_string(&mut json)?;
            from_json(&json).map_err(|e| e.with_context(format!("parsing {}", path.display())))?
        } else {
            read_json_file(path)?
        };
        if log.format_version != REPLAY_FORMAT_VERSION {
            return Err(IoError::validation(format!(
                "Unsupported replay format version {} (expected {})",
                log.format_version, REPLAY_FORMAT_VERSION
            )));
        }
        Ok(log)
    }

    /// Builds a fresh world from `config` and replays the log into it.
    pub fn rebuild(&self, config: AppConfig) -> Result<World> {
        let actual = config.fingerprint();
        if actual != self.config_fingerprint {
            return Err(IoError::ConfigMismatch {
                expected: self.config_fingerprint.clone(),
                actual,
            });
        }
        let mut world = World::new(config)?;
        world.replay(&self.events)?;
        Ok(world)
    }
}

/// Loads a replay log from `path` and rebuilds its world.
pub fn load_world<P: AsRef<Path>>(path: P, config: AppConfig) -> Result<World> {
    ReplayLog::load(path)?.rebuild(config)
}

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}
