//! # Topology Errors
//!
//! Every failure the parsing pipeline and the snapshot store can raise.
//!
//! Parsing errors abort the whole run: a topology missing a device could be
//! mistaken for a complete one, so nothing is skipped or retried.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("the source file doesn't exist: {}", path.display())]
    SourceFileNotFound { path: PathBuf },

    #[error("malformed connection line: {line:?}")]
    MalformedConnection { line: String },

    #[error("unrecognized device type in line: {line:?}")]
    UnrecognizedDeviceType { line: String },

    #[error("malformed device block: {reason}")]
    MalformedBlock { reason: String },

    #[error("no topology has been built or loaded yet")]
    SnapshotUnavailable,

    #[error("snapshot encoding failed: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl TopologyError {
    pub fn malformed_block(reason: impl Into<String>) -> Self {
        Self::MalformedBlock {
            reason: reason.into(),
        }
    }

    /// True for the errors raised while reading device blocks.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedConnection { .. }
                | Self::UnrecognizedDeviceType { .. }
                | Self::MalformedBlock { .. }
        )
    }
}
