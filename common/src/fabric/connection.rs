use std::fmt;

use serde::{Deserialize, Serialize};

/// One cabled port, as declared by the device that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    pub local_port: String,
    pub remote_device: String,
    pub remote_port: String,
}

impl Connection {
    /// Returns `None` unless all three fields are non-empty.
    pub fn new(
        local_port: impl Into<String>,
        remote_device: impl Into<String>,
        remote_port: impl Into<String>,
    ) -> Option<Self> {
        let connection = Self {
            local_port: local_port.into(),
            remote_device: remote_device.into(),
            remote_port: remote_port.into(),
        };

        let complete = !connection.local_port.is_empty()
            && !connection.remote_device.is_empty()
            && !connection.remote_port.is_empty();

        complete.then_some(connection)
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] -> \"{}\" @ [{}]",
            self.local_port, self.remote_device, self.remote_port
        )
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
