//! # Device Block Parser
//!
//! A block has a fixed head followed by any number of port lines:
//!
//! ```text
//! 0  vendid=0x2c9
//! 1  devid=0xbd36
//! 2  sysimgguid=0x2c903000c8f6d
//! 3  caguid=0x2c903000c8f6a
//! 4  Ca	2 "H-0002c903000c8f6a"		# "node-17 HCA-1"
//! 5+ [1](2c903000c8f6b) 	"S-0002c90200400b80"[12]		# lid 3 4xQDR
//! ```
//!
//! Line 4 alone decides the device kind.

use fabmap_common::error::TopologyError;
use fabmap_common::fabric::connection::Connection;
use fabmap_common::fabric::device::{Device, DeviceKind};

use super::connection::parse_connection;

const DEVICE_ID_LINE: usize = 1;
const SYSTEM_IMAGE_GUID_LINE: usize = 2;
const CA_GUID_LINE: usize = 3;
const CLASSIFICATION_LINE: usize = 4;
const FIRST_CONNECTION_LINE: usize = 5;

/// Builds a [`Device`] out of one block produced by the segmenter.
pub fn parse_device<S: AsRef<str>>(block: &[S]) -> Result<Device, TopologyError> {
    if block.len() < FIRST_CONNECTION_LINE {
        return Err(TopologyError::malformed_block(format!(
            "expected at least {FIRST_CONNECTION_LINE} lines, found {}",
            block.len()
        )));
    }

    let device_id = identity_value(block[DEVICE_ID_LINE].as_ref())?;
    let system_image_guid = identity_value(block[SYSTEM_IMAGE_GUID_LINE].as_ref())?;
    let ca_guid = identity_value(block[CA_GUID_LINE].as_ref())?;

    let classification = block[CLASSIFICATION_LINE].as_ref();
    let kind = DeviceKind::from_prefix(classification).ok_or_else(|| {
        TopologyError::UnrecognizedDeviceType {
            line: classification.to_string(),
        }
    })?;
    let name = quoted_name(classification)?;

    let connections = block[FIRST_CONNECTION_LINE..]
        .iter()
        .map(|line| parse_connection(line.as_ref()))
        .collect::<Result<Vec<Connection>, _>>()?;

    Ok(Device {
        name,
        kind,
        device_id,
        system_image_guid,
        ca_guid,
        connections,
    })
}

/// Text after the first `=`. The key itself is not checked.
fn identity_value(line: &str) -> Result<String, TopologyError> {
    line.split_once('=')
        .map(|(_, value)| value.to_string())
        .ok_or_else(|| TopologyError::malformed_block(format!("expected key=value, found {line:?}")))
}

fn quoted_name(line: &str) -> Result<String, TopologyError> {
    let missing = || TopologyError::malformed_block(format!("no quoted device name in {line:?}"));

    let (_, rest) = line.split_once('"').ok_or_else(missing)?;
    let (name, _) = rest.split_once('"').ok_or_else(missing)?;

    if name.is_empty() {
        return Err(missing());
    }
    Ok(name.to_string())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
