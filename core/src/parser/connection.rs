use std::sync::OnceLock;

use fabmap_common::error::TopologyError;
use fabmap_common::fabric::connection::Connection;
use regex::Regex;

/// `[local](ann) "remote"[port](ann)`, annotations optional.
const CONNECTION_PATTERN: &str =
    r#"\[(?P<local>\d+)\]\s*(?:\([^)]*\))?\s*"(?P<remote>[^"]+)"\s*\[(?P<port>\d+)\](?:\([^)]*\))?"#;

static CONNECTION_RE: OnceLock<Regex> = OnceLock::new();

fn connection_re() -> &'static Regex {
    CONNECTION_RE.get_or_init(|| Regex::new(CONNECTION_PATTERN).expect("connection pattern is valid"))
}

/// Parses one port line of a device block.
///
/// Anything around the three captured parts (port GUID annotations, the
/// trailing `# "description" lid 3 4xQDR` comment) is dropped.
pub fn parse_connection(line: &str) -> Result<Connection, TopologyError> {
    let malformed = || TopologyError::MalformedConnection {
        line: line.to_string(),
    };

    let captures = connection_re().captures(line).ok_or_else(malformed)?;

    Connection::new(&captures["local"], &captures["remote"], &captures["port"]).ok_or_else(malformed)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
