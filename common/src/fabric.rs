//! # Fabric Model
//!
//! The in-memory graph of a cabled fabric.
//!
//! * [`device::Device`]: a host channel adapter or a switch, with its cabling.
//! * [`connection::Connection`]: one local port wired to a remote device's port.
//! * [`topology::Topology`]: every device read from one source file, keyed by name.
//!
//! All three derive `Serialize`/`Deserialize` so a topology can be stored as a
//! snapshot and read back unchanged.

pub mod connection;
pub mod device;
pub mod topology;
