use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use fabmap_common::config::Config;
use fabmap_common::fabric::topology::Topology;
use fabmap_common::success;
use fabmap_core::report;
use fabmap_core::store::{SnapshotFile, TopologyStore};
use tokio::task::JoinHandle;
use tracing::error;

/// Writes the report for the saved snapshot and waits for it.
pub async fn report(cfg: &Config) -> anyhow::Result<()> {
    let topology = SnapshotFile::new(&cfg.snapshot_path)
        .load()
        .with_context(|| format!("cannot report from {}", cfg.snapshot_path.display()))?;

    let path = cfg.report_path.clone();
    tokio::task::spawn_blocking(move || report::write_report(&topology, &path))
        .await
        .context("report task panicked")??;

    success!("Report written to {}", cfg.report_path.display());
    Ok(())
}

/// Starts writing the report on the blocking pool.
///
/// The task logs its own outcome; callers may drop the handle.
pub fn spawn_report(topology: Arc<Topology>, path: PathBuf) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || match report::write_report(&topology, &path) {
        Ok(()) => success!(
            "Report for {} ({} devices) written to {}",
            topology.source(),
            topology.device_count(),
            path.display()
        ),
        Err(e) => error!("Failed to write report to {}: {e}", path.display()),
    })
}
