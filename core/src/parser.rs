//! # Topology Dump Parsing
//!
//! Turns the text of a fabric dump into [`Device`](fabmap_common::fabric::device::Device) records.
//!
//! * [`segmenter`] cuts the file into device blocks.
//! * [`device`] reads the identity lines and classifies each block.
//! * [`connection`] extracts the cabling from each port line.

pub mod connection;
pub mod device;
pub mod segmenter;

pub use connection::parse_connection;
pub use device::parse_device;
pub use segmenter::{BlockSegmenter, DeviceBlock};
