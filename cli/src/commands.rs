pub mod parse;
pub mod report;
pub mod shell;
pub mod show;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use fabmap_common::config::{Config, DEFAULT_REPORT_PATH, DEFAULT_SNAPSHOT_PATH};

#[derive(Parser)]
#[command(name = "fabmap")]
#[command(about = "Maps a fabric topology dump into a device graph and report.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Snapshot file the latest topology is saved to and loaded from
    #[arg(long, global = true, default_value = DEFAULT_SNAPSHOT_PATH)]
    pub snapshot: PathBuf,

    /// File the report is written to
    #[arg(short, long, global = true, default_value = DEFAULT_REPORT_PATH)]
    pub output: PathBuf,

    /// Print less; repeat for even less
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a topology dump and save the result
    #[command(alias = "p")]
    Parse { file: PathBuf },
    /// Write the report for the saved topology
    #[command(alias = "r")]
    Report,
    /// Print the saved topology as a device tree
    #[command(alias = "s")]
    Show,
    /// Interactive loop (default)
    #[command(alias = "sh")]
    Shell,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            snapshot_path: self.snapshot.clone(),
            report_path: self.output.clone(),
            quiet: self.quiet,
        }
    }
}
