use anyhow::{Context, Result};
use landclaim_core::scenario::{self, ScenarioParams};
use landclaim_core::{AppConfig, World};
use landclaim_data::MapPoint;
use landclaim_io::ReplayLog;
use std::path::Path;

/// Rebuilds the world recorded in `scenario`.
pub fn run(config: AppConfig, scenario: &Path) -> Result<World> {
    let world = landclaim_io::load_world(scenario, config)
        .with_context(|| format!("replaying {}", scenario.display()))?;
    tracing::info!(
        version = world.version(),
        buildings = world.buildings().count(),
        elapsed_ms = world.metrics.elapsed().as_millis() as u64,
        "Scenario replayed"
    );
    Ok(world)
}

/// Generates a seeded scenario and writes it as a replay log to `out`.
pub fn generate(config: &AppConfig, params: &ScenarioParams, out: &Path) -> Result<ReplayLog> {
    let (events, _) = scenario::generate(config, params)?;
    let log = ReplayLog::new(config, events);
    log.save(out)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(log)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyOutcome {
    pub events: usize,
    pub mismatches: Vec<MapPoint>,
}

impl VerifyOutcome {
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Replays `scenario` and compares live ownership with a cold recompute.
pub fn verify(config: AppConfig, scenario: &Path) -> Result<VerifyOutcome> {
    let log = ReplayLog::load(scenario)
        .with_context(|| format!("loading {}", scenario.display()))?;
    let world = log.rebuild(config)?;
    let mismatches = world.verify_consistency();
    if !mismatches.is_empty() {
        tracing::warn!(count = mismatches.len(), "Live ownership differs from cold recompute");
    }
    Ok(VerifyOutcome {
        events: log.events.len(),
        mismatches,
    })
}
