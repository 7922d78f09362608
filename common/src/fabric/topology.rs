//! # Topology Graph
//!
//! Owns every [`Device`] parsed from one source file.
//!
//! Devices are keyed by name and kept in the order they were first inserted,
//! which is the order the report lists them in. Inserting a device whose name is
//! already present replaces the earlier one in place (last write wins); the
//! counters are adjusted so they always describe what the mapping holds.

use std::time::Duration;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::connection::Connection;
use super::device::{Device, DeviceKind};

/// Totals reported once a parse run has finished.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParseSummary {
    pub device_count: usize,
    pub host_count: usize,
    pub switch_count: usize,
    pub elapsed_seconds: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    source: String,
    devices: IndexMap<String, Device>,
    host_count: usize,
    switch_count: usize,
    blocks_parsed: usize,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

impl Topology {
    /// Starts an empty topology for `source`, stamping the start time.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            devices: IndexMap::new(),
            host_count: 0,
            switch_count: 0,
            blocks_parsed: 0,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Adds a device, returning the one it replaced if the name was taken.
    pub fn insert(&mut self, device: Device) -> Option<Device> {
        self.blocks_parsed += 1;
        self.adjust(device.kind, true);

        let replaced = self.devices.insert(device.name.clone(), device);
        if let Some(previous) = &replaced {
            self.adjust(previous.kind, false);
        }
        replaced
    }

    fn adjust(&mut self, kind: DeviceKind, added: bool) {
        let counter = match kind {
            DeviceKind::Host => &mut self.host_count,
            DeviceKind::Switch => &mut self.switch_count,
        };
        if added {
            *counter += 1;
        } else {
            *counter = counter.saturating_sub(1);
        }
    }

    /// Records the end time. Only the first call has an effect.
    pub fn finish(&mut self) {
        if self.finished_at.is_none() {
            self.finished_at = Some(Utc::now());
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn device(&self, name: &str) -> Option<&Device> {
        self.devices.get(name)
    }

    /// Devices in the order they were first inserted.
    pub fn devices(&self) -> impl Iterator<Item = &Device> {
        self.devices.values()
    }

    pub fn hosts(&self) -> impl Iterator<Item = &Device> {
        self.devices().filter(|device| device.is_host())
    }

    pub fn switches(&self) -> impl Iterator<Item = &Device> {
        self.devices().filter(|device| device.is_switch())
    }

    /// Resolves each connection of `name` to the device at the far end.
    ///
    /// Remote names missing from the topology (cabling to a device outside the
    /// dump) yield `None` for the device.
    pub fn neighbors<'a>(
        &'a self,
        name: &str,
    ) -> impl Iterator<Item = (&'a Connection, Option<&'a Device>)> + 'a {
        self.devices
            .get(name)
            .into_iter()
            .flat_map(|device| device.connections.iter())
            .map(move |connection| (connection, self.devices.get(&connection.remote_device)))
    }

    /// Number of connection lines across every device.
    pub fn link_count(&self) -> usize {
        self.devices().map(|device| device.connections.len()).sum()
    }

    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    pub fn host_count(&self) -> usize {
        self.host_count
    }

    pub fn switch_count(&self) -> usize {
        self.switch_count
    }

    /// Blocks inserted so far, including those later overwritten by a duplicate name.
    pub fn blocks_parsed(&self) -> usize {
        self.blocks_parsed
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// Time between start and finish, or `None` while still being built.
    pub fn elapsed(&self) -> Option<Duration> {
        let finished_at = self.finished_at?;
        (finished_at - self.started_at).to_std().ok()
    }

    pub fn summary(&self) -> ParseSummary {
        ParseSummary {
            device_count: self.device_count(),
            host_count: self.host_count,
            switch_count: self.switch_count,
            elapsed_seconds: self.elapsed().unwrap_or_default().as_secs_f64(),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    fn device(name: &str, kind: DeviceKind, remotes: &[&str]) -> Device {
        Device {
            name: name.to_string(),
            kind,
            device_id: "0x1003".to_string(),
            system_image_guid: format!("0x{name}-sys"),
            ca_guid: format!("0x{name}-ca"),
            connections: remotes
                .iter()
                .enumerate()
                .map(|(idx, remote)| Connection::new((idx + 1).to_string(), *remote, "1").unwrap())
                .collect(),
        }
    }

    #[test]
    fn test_counters_follow_inserts() {
        let mut topology = Topology::new("small_topo_file");
        topology.insert(device("S1", DeviceKind::Switch, &["H1", "H2"]));
        topology.insert(device("H1", DeviceKind::Host, &["S1"]));
        topology.insert(device("H2", DeviceKind::Host, &["S1"]));

        assert_eq!(topology.device_count(), 3);
        assert_eq!(topology.host_count(), 2);
        assert_eq!(topology.switch_count(), 1);
        assert_eq!(topology.link_count(), 4);
        assert_eq!(topology.source(), "small_topo_file");
    }

    #[test]
    fn test_duplicate_name_last_write_wins() {
        // Surprising but kept: a second block with the same name replaces the first,
        // so device_count falls behind the number of blocks read.
        let mut topology = Topology::new("dup");
        topology.insert(device("X", DeviceKind::Host, &[]));
        topology.insert(device("S1", DeviceKind::Switch, &[]));
        let replaced = topology.insert(device("X", DeviceKind::Switch, &["S1"]));

        assert_eq!(replaced.map(|d| d.kind), Some(DeviceKind::Host));
        assert_eq!(topology.blocks_parsed(), 3);
        assert_eq!(topology.device_count(), 2);
        assert_eq!(topology.host_count(), 0);
        assert_eq!(topology.switch_count(), 2);

        // The replacement keeps the first slot.
        let names: Vec<&str> = topology.devices().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["X", "S1"]);
        assert_eq!(topology.device("X").unwrap().connections.len(), 1);
    }

    #[test]
    fn test_finish_is_set_once() {
        let mut topology = Topology::new("t");
        assert!(topology.elapsed().is_none());

        topology.finish();
        let first = topology.finished_at();
        topology.finish();

        assert!(topology.is_finished());
        assert_eq!(topology.finished_at(), first);
        assert!(topology.finished_at().unwrap() >= topology.started_at());
    }

    #[test]
    fn test_neighbors_resolve_remote_devices() {
        let mut topology = Topology::new("t");
        topology.insert(device("S1", DeviceKind::Switch, &["H1", "H9"]));
        topology.insert(device("H1", DeviceKind::Host, &["S1"]));

        let neighbors: Vec<(String, Option<String>)> = topology
            .neighbors("S1")
            .map(|(conn, dev)| (conn.remote_device.clone(), dev.map(|d| d.name.clone())))
            .collect();

        assert_eq!(
            neighbors,
            vec![
                ("H1".to_string(), Some("H1".to_string())),
                ("H9".to_string(), None),
            ]
        );
        assert_eq!(topology.neighbors("missing").count(), 0);
    }

    #[test]
    fn test_kind_filters() {
        let mut topology = Topology::new("t");
        topology.insert(device("H1", DeviceKind::Host, &[]));
        topology.insert(device("S1", DeviceKind::Switch, &[]));
        topology.insert(device("H2", DeviceKind::Host, &[]));

        let hosts: Vec<&str> = topology.hosts().map(|d| d.name.as_str()).collect();
        let switches: Vec<&str> = topology.switches().map(|d| d.name.as_str()).collect();
        assert_eq!(hosts, vec!["H1", "H2"]);
        assert_eq!(switches, vec!["S1"]);
    }

    #[test]
    fn test_summary_matches_counters() {
        let mut topology = Topology::new("t");
        topology.insert(device("H1", DeviceKind::Host, &[]));
        topology.finish();

        let summary = topology.summary();
        assert_eq!(summary.device_count, 1);
        assert_eq!(summary.host_count, 1);
        assert_eq!(summary.switch_count, 0);
        assert!(summary.elapsed_seconds >= 0.0);
    }
}
