// One sensor run: load previous snapshot, poll tailscale, derive channels, save, report.
// Any failure aborts the run before a report exists; the state file is left as it was unless
// the new snapshot was fully computed.

use crate::config::AppConfig;
use crate::delta::DeltaEngine;
use crate::metrics_repo::MetricsRepo;
use crate::report::PrtgReport;
use crate::state_store::StateStore;
use tracing::{info, instrument};

/// Current time as fractional seconds since the Unix epoch.
pub fn now_secs() -> f64 {
    chrono::Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

pub async fn run(config: &AppConfig) -> anyhow::Result<PrtgReport> {
    run_at(config, now_secs()).await
}

/// Same as [`run`] with an explicit timestamp for the new snapshot.
#[instrument(skip(config), fields(state = %config.state.path))]
pub async fn run_at(config: &AppConfig, now: f64) -> anyhow::Result<PrtgReport> {
    let table = config.channel_table()?;
    let store = StateStore::new(&config.state.path);
    let previous = store.load()?;

    let repo = MetricsRepo::from_config(&config.source, table.counters());
    let current = repo.collect().await?;

    let engine = DeltaEngine::new(table);
    let snapshot = engine.snapshot(now, current, previous.as_ref())?;
    store.save(&snapshot)?;

    info!(
        channels = snapshot.channels.len(),
        first_run = previous.is_none(),
        "sensor run complete"
    );
    Ok(PrtgReport::from_channels(&snapshot.channels))
}
