//! # Topology Report
//!
//! Plain-text rendering of a [`Topology`], one paragraph per device:
//!
//! ```text
//! # Topology map generated at 2024-05-01 10:30:00
//! # Source file: small_topo_file
//!
//! Host "H1"
//!     devid=0x1003 sysimgguid=0xa caguid=0xb
//!     [1] -> "S1" @ [1]
//! ```

use std::fmt::Display;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Local, TimeZone};
use fabmap_common::error::TopologyError;
use fabmap_common::fabric::topology::Topology;
use tracing::debug;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders the report. Identical inputs give identical bytes.
pub fn render<Tz>(topology: &Topology, generated_at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let header = format!(
        "# Topology map generated at {}\n# Source file: {}\n\n",
        generated_at.format(TIMESTAMP_FORMAT),
        topology.source()
    );

    let body = topology
        .devices()
        .map(|device| device.to_string())
        .collect::<Vec<String>>()
        .join("\n");

    header + &body
}

/// Renders with the current local time and replaces the file at `path`.
pub fn write_report(topology: &Topology, path: &Path) -> Result<(), TopologyError> {
    let report = render(topology, &Local::now());
    fs::write(path, report)?;
    debug!(path = %path.display(), "report written");
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
