//! # Fabmap Core
//!
//! The parsing pipeline and everything that consumes its result.
//!
//! ```text
//! dump file -> parser::segmenter -> parser::device (+ parser::connection)
//!           -> builder -> Topology -> report / store
//! ```
//!
//! * **[`parser`]**: block segmentation and field extraction.
//! * **[`builder`]**: assembles devices into a [`Topology`](fabmap_common::fabric::topology::Topology).
//! * **[`report`]**: renders the text report.
//! * **[`store`]**: saves and loads topology snapshots.

pub mod builder;
pub mod parser;
pub mod report;
pub mod store;
