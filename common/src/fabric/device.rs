use std::fmt;

use serde::{Deserialize, Serialize};

use super::connection::Connection;

/// The two record types a fabric dump describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceKind {
    /// A channel adapter, declared with the `Ca` prefix.
    Host,
    /// Declared with the `Switch` prefix.
    Switch,
}

impl DeviceKind {
    /// Classifies a device line by its leading keyword.
    pub fn from_prefix(line: &str) -> Option<Self> {
        if line.starts_with("Switch") {
            Some(Self::Switch)
        } else if line.starts_with("Ca") {
            Some(Self::Host)
        } else {
            None
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Host => f.write_str("Host"),
            Self::Switch => f.write_str("Switch"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub name: String,
    pub kind: DeviceKind,
    pub device_id: String,
    pub system_image_guid: String,
    pub ca_guid: String,
    pub connections: Vec<Connection>,
}

impl Device {
    pub fn is_host(&self) -> bool {
        self.kind == DeviceKind::Host
    }

    pub fn is_switch(&self) -> bool {
        self.kind == DeviceKind::Switch
    }

    /// The identity line of the report, `devid=... sysimgguid=... caguid=...`.
    pub fn identity(&self) -> String {
        format!(
            "devid={} sysimgguid={} caguid={}",
            self.device_id, self.system_image_guid, self.ca_guid
        )
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} \"{}\"", self.kind, self.name)?;
        write!(f, "    {}", self.identity())?;
        for connection in &self.connections {
            write!(f, "\n    {connection}")?;
        }
        Ok(())
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
