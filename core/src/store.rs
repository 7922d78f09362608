//! # Topology Snapshots
//!
//! Persists a built [`Topology`] so a later run can report on it without
//! parsing the source file again.
//!
//! The encoding is `bincode` over the serde derives of the fabric model.
//! [`decode`] of [`encode`] gives back an equal topology.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use fabmap_common::error::TopologyError;
use fabmap_common::fabric::topology::Topology;
use tracing::debug;

/// Save/load contract for topology snapshots.
pub trait TopologyStore {
    fn save(&self, topology: &Topology) -> Result<(), TopologyError>;

    /// Fails with [`TopologyError::SnapshotUnavailable`] when nothing was saved.
    fn load(&self) -> Result<Topology, TopologyError>;
}

pub fn encode(topology: &Topology) -> Result<Vec<u8>, TopologyError> {
    Ok(bincode::serialize(topology)?)
}

pub fn decode(snapshot: &[u8]) -> Result<Topology, TopologyError> {
    Ok(bincode::deserialize(snapshot)?)
}

/// A snapshot kept in a single file.
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

impl TopologyStore for SnapshotFile {
    fn save(&self, topology: &Topology) -> Result<(), TopologyError> {
        let bytes = encode(topology)?;
        fs::write(&self.path, &bytes)?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "snapshot saved");
        Ok(())
    }

    fn load(&self) -> Result<Topology, TopologyError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(TopologyError::SnapshotUnavailable);
            }
            Err(e) => return Err(e.into()),
        };
        decode(&bytes)
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
