use std::path::PathBuf;

pub const DEFAULT_SNAPSHOT_PATH: &str = "topology.snapshot";
pub const DEFAULT_REPORT_PATH: &str = "topology_map.txt";

pub struct Config {
    /// Where the most recent topology is saved and loaded from.
    pub snapshot_path: PathBuf,
    /// Destination of the rendered report.
    ///
    /// Overwritten on every report run.
    pub report_path: PathBuf,
    /// 0 prints everything, 1 drops headers and progress, 2 only prints the summary.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            quiet: 0,
        }
    }
}
