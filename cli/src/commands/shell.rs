//! # Interactive Shell
//!
//! Reads one command per line until `-q` or end of input:
//!
//! ```text
//! fabmap> ./small_topo_file      parse a dump, it becomes the current topology
//! fabmap> -r                     write the report in the background
//! fabmap> -s                     print the current topology
//! fabmap> -q                     leave
//! ```
//!
//! A failed command is reported and the loop keeps going.

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{CommandFactory, Parser};
use fabmap_common::config::Config;
use fabmap_common::error::TopologyError;
use fabmap_common::fabric::topology::Topology;
use fabmap_common::{info, warn};
use fabmap_core::store::{SnapshotFile, TopologyStore};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::commands::{parse, report, show};
use crate::terminal::print;

const PROMPT: &str = "fabmap> ";

#[derive(Parser, Debug)]
#[command(name = "fabmap", no_binary_name = true)]
struct ShellInput {
    /// Topology dump to parse
    file: Option<PathBuf>,

    /// Write the report for the current topology
    #[arg(short, long)]
    report: bool,

    /// Print the current topology
    #[arg(short, long)]
    show: bool,

    /// Leave the shell
    #[arg(short, long)]
    quit: bool,
}

impl ShellInput {
    fn is_empty(&self) -> bool {
        self.file.is_none() && !self.report && !self.show && !self.quit
    }
}

#[derive(Debug, PartialEq)]
enum Flow {
    Continue,
    Quit,
}

struct Shell<'a> {
    cfg: &'a Config,
    /// Most recently built or loaded topology.
    current: Option<Arc<Topology>>,
    /// Report write still in flight, if any. At most one writes `report_path`.
    writer: Option<JoinHandle<()>>,
}

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let mut shell = Shell::new(cfg);
    let interactive = io::stdin().is_terminal();

    usage();
    shell.drive(BufReader::new(tokio::io::stdin()), interactive).await?;

    info!("Leaving fabmap");
    Ok(())
}

impl<'a> Shell<'a> {
    fn new(cfg: &'a Config) -> Self {
        Self {
            cfg,
            current: None,
            writer: None,
        }
    }
}

impl Shell<'_> {
    /// Handles lines from `input` until `-q` ([`Flow::Quit`]) or end of input
    /// ([`Flow::Continue`]).
    ///
    /// Lines that are not valid UTF-8 are decoded lossily and go through the
    /// usual input handling instead of ending the loop.
    async fn drive<R>(&mut self, mut input: R, interactive: bool) -> anyhow::Result<Flow>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut buf = Vec::new();
        loop {
            if interactive {
                prompt();
            }

            buf.clear();
            if input.read_until(b'\n', &mut buf).await? == 0 {
                return Ok(Flow::Continue);
            }

            let line = String::from_utf8_lossy(&buf);
            if self.handle(&line).await == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
    }

    async fn handle(&mut self, line: &str) -> Flow {
        let input = match ShellInput::try_parse_from(line.split_whitespace()) {
            Ok(input) if !input.is_empty() => input,
            Ok(_) => {
                usage();
                return Flow::Continue;
            }
            Err(e) if e.use_stderr() => {
                let rendered = e.to_string();
                warn!("{}", rendered.lines().next().unwrap_or("invalid input"));
                usage();
                return Flow::Continue;
            }
            Err(e) => {
                print::print(&e.to_string());
                return Flow::Continue;
            }
        };

        if let Some(file) = &input.file {
            self.parse(file);
        }
        if input.show {
            self.show();
        }
        if input.report {
            self.report().await;
        }

        if input.quit { Flow::Quit } else { Flow::Continue }
    }

    fn parse(&mut self, file: &Path) {
        print::header("mapping topology", self.cfg.quiet);
        match parse::parse(file, self.cfg) {
            Ok(topology) => self.current = Some(Arc::new(topology)),
            Err(e) => match e.downcast_ref::<TopologyError>() {
                Some(parse_error) if parse_error.is_parse_error() => {
                    error!("{parse_error}; nothing from {} was kept", file.display())
                }
                _ => error!("{e:#}"),
            },
        }
    }

    fn show(&mut self) {
        match self.topology() {
            Ok(topology) => show::print_topology(&topology, self.cfg),
            Err(e) => error!("{e}"),
        }
    }

    /// Fire and forget: the loop does not wait for this file to be written,
    /// only for a previous write to the same path to finish first.
    async fn report(&mut self) {
        let topology = match self.topology() {
            Ok(topology) => topology,
            Err(e) => {
                error!("{e}");
                return;
            }
        };

        if let Some(previous) = self.writer.take() {
            if let Err(e) = previous.await {
                error!("Previous report task failed: {e}");
            }
        }

        info!("Writing report to {}", self.cfg.report_path.display());
        self.writer = Some(report::spawn_report(topology, self.cfg.report_path.clone()));
    }

    /// The in-memory topology, falling back to the saved snapshot.
    fn topology(&mut self) -> Result<Arc<Topology>, TopologyError> {
        if let Some(topology) = &self.current {
            return Ok(Arc::clone(topology));
        }

        let store = SnapshotFile::new(&self.cfg.snapshot_path);
        if !store.exists() {
            return Err(TopologyError::SnapshotUnavailable);
        }

        let topology = Arc::new(store.load()?);
        info!("Loaded {} from {}", topology.source(), store.path().display());
        self.current = Some(Arc::clone(&topology));
        Ok(topology)
    }
}

/// Written to stderr, the stream the log lines go to.
fn prompt() {
    if let Err(e) = console::Term::stderr().write_str(PROMPT) {
        debug!("cannot write the prompt: {e}");
    }
}

fn usage() {
    let usage = ShellInput::command().render_usage();
    print::print_status(format!("{usage}"));
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
