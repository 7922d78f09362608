//! # Topology Builder
//!
//! Drives the parsing pipeline for one source file and assembles the
//! [`Topology`].
//!
//! The run stops at the first block that fails to parse. No partial topology
//! is handed back, since a graph with silently dropped devices would look complete.

use std::io;
use std::path::Path;

use fabmap_common::error::TopologyError;
use fabmap_common::fabric::device::Device;
use fabmap_common::fabric::topology::{ParseSummary, Topology};
use tracing::{debug, info};

use crate::parser::device::parse_device;
use crate::parser::segmenter::{BlockSegmenter, DeviceBlock};

/// Receives progress while a topology is being built.
///
/// Both methods default to doing nothing; `()` is the silent observer.
pub trait ParseObserver {
    /// Called once for every block that parsed successfully.
    fn block_parsed(&mut self, _device: &Device) {}

    /// Called once, after the last block.
    fn finished(&mut self, _summary: &ParseSummary) {}
}

impl ParseObserver for () {}

pub struct TopologyBuilder<'a> {
    topology: Topology,
    observer: &'a mut dyn ParseObserver,
}

impl<'a> TopologyBuilder<'a> {
    pub fn new(source: impl Into<String>, observer: &'a mut dyn ParseObserver) -> Self {
        Self {
            topology: Topology::new(source),
            observer,
        }
    }

    /// Consumes every block and returns the finished topology.
    pub fn build<I>(mut self, blocks: I) -> Result<Topology, TopologyError>
    where
        I: IntoIterator<Item = io::Result<DeviceBlock>>,
    {
        for block in blocks {
            let block = block?;
            self.add_block(&block)?;
        }

        self.topology.finish();
        let summary = self.topology.summary();

        info!(
            devices = summary.device_count,
            hosts = summary.host_count,
            switches = summary.switch_count,
            "parsed {} in {:.2}s",
            self.topology.source(),
            summary.elapsed_seconds
        );
        self.observer.finished(&summary);

        Ok(self.topology)
    }

    fn add_block(&mut self, block: &DeviceBlock) -> Result<(), TopologyError> {
        let device = parse_device(&block.lines).inspect_err(|e| {
            debug!(start_line = block.start_line, "device block rejected: {e}");
        })?;

        debug!(name = %device.name, kind = %device.kind, "parsed device");
        self.observer.block_parsed(&device);

        if let Some(previous) = self.topology.insert(device) {
            debug!(name = %previous.name, "replaced a device with the same name");
        }
        Ok(())
    }
}

/// Parses the dump at `path` into a topology named after the file.
pub fn map_file(path: &Path, observer: &mut dyn ParseObserver) -> Result<Topology, TopologyError> {
    if !path.exists() {
        return Err(TopologyError::SourceFileNotFound {
            path: path.to_path_buf(),
        });
    }

    let source = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let segmenter = BlockSegmenter::open(path)?;
    TopologyBuilder::new(source, observer).build(segmenter)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
