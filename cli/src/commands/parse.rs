use std::path::Path;

use anyhow::Context;
use colored::*;
use fabmap_common::config::Config;
use fabmap_common::fabric::topology::{ParseSummary, Topology};
use fabmap_common::success;
use fabmap_core::builder;
use fabmap_core::store::{SnapshotFile, TopologyStore};
use tracing::{Span, info_span};

use crate::fprint;
use crate::terminal::{colors, print, spinner::ParseProgress};

/// Maps `file`, prints the summary and saves the snapshot.
pub fn parse(file: &Path, cfg: &Config) -> anyhow::Result<Topology> {
    let span: Span = match cfg.quiet {
        0 => info_span!("parse", indicatif.pb_show = true),
        _ => info_span!("parse"),
    };
    let mut progress = ParseProgress::new(span.clone());

    let guard = span.enter();
    let result = builder::map_file(file, &mut progress);
    drop(guard);

    let topology: Topology = result?;

    print_summary(&topology.summary(), cfg);

    let store = SnapshotFile::new(&cfg.snapshot_path);
    store
        .save(&topology)
        .with_context(|| format!("failed to save snapshot to {}", store.path().display()))?;
    success!("Snapshot saved to {}", store.path().display());

    Ok(topology)
}

fn print_summary(summary: &ParseSummary, cfg: &Config) {
    let devices: ColoredString = format!("{} devices", summary.device_count).bold().green();
    let breakdown: String = format!(
        "({} hosts, {} switches)",
        summary.host_count, summary.switch_count
    );
    let total_time: ColoredString = format!("{:.2}s", summary.elapsed_seconds).bold().yellow();
    let output: &ColoredString = &format!(
        "Mapping Complete: {devices} {breakdown} identified in {total_time}"
    )
    .color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output.to_string());
        }
        _ => {
            fprint!();
            success!("{}", output)
        }
    }
}
