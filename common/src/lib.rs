//! # Fabmap Common
//!
//! Types shared by every crate in the workspace.
//!
//! * **[`fabric`]**: the topology model (connections, devices, the topology graph).
//! * **[`error`]**: the error type raised by parsing and snapshot handling.
//! * **[`config`]**: runtime settings assembled by the CLI.

pub mod config;
pub mod error;
pub mod fabric;
pub mod macros;

#[doc(hidden)]
pub use tracing as __tracing;
