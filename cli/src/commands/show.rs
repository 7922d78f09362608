use fabmap_common::config::Config;
use fabmap_common::fabric::topology::Topology;
use fabmap_core::report::TIMESTAMP_FORMAT;
use fabmap_core::store::{SnapshotFile, TopologyStore};

use crate::fprint;
use crate::terminal::{format, print};

pub fn show(cfg: &Config) -> anyhow::Result<()> {
    let topology = SnapshotFile::new(&cfg.snapshot_path).load()?;
    print_topology(&topology, cfg);
    Ok(())
}

pub fn print_topology(topology: &Topology, cfg: &Config) {
    if topology.is_empty() {
        print::header("zero devices", cfg.quiet);
        print::no_results();
        return;
    }

    print::header("fabric topology", cfg.quiet);
    print::aligned_line("Source", topology.source());
    print::aligned_line(
        "Parsed",
        format!("{} UTC", topology.started_at().format(TIMESTAMP_FORMAT)),
    );
    print::aligned_line("Devices", topology.device_count().to_string());
    print::aligned_line("Hosts", topology.hosts().count().to_string());
    print::aligned_line("Switches", topology.switches().count().to_string());
    print::aligned_line("Links", topology.link_count().to_string());
    fprint!();

    for (idx, device) in topology.devices().enumerate() {
        print::tree_head(idx, &device.name);
        if cfg.quiet < 2 {
            let mut details = format::identity_to_details(device);
            details.extend(format::connections_to_details(device, topology));
            print::as_tree_one_level(details);
        }
        if idx + 1 != topology.device_count() {
            fprint!();
        }
    }
    print::end_of_program();
}
