use crate::terminal::colors;
use colored::*;
use fabmap_common::fabric::device::{Device, DeviceKind};
use fabmap_common::fabric::topology::Topology;

pub type Detail = (String, ColoredString);

pub fn kind_color(kind: DeviceKind) -> Color {
    match kind {
        DeviceKind::Host => colors::HOST,
        DeviceKind::Switch => colors::SWITCH,
    }
}

pub fn identity_to_details(device: &Device) -> Vec<Detail> {
    vec![
        (
            "Kind".to_string(),
            device.kind.to_string().color(kind_color(device.kind)),
        ),
        ("DevID".to_string(), device.device_id.color(colors::GUID)),
        ("SysImg".to_string(), device.system_image_guid.color(colors::GUID)),
        ("CaGUID".to_string(), device.ca_guid.color(colors::GUID)),
    ]
}

/// One detail per port: `[local]: remote @ [port]`, remote coloured by its kind
/// when the topology knows it.
pub fn connections_to_details(device: &Device, topology: &Topology) -> Vec<Detail> {
    topology
        .neighbors(&device.name)
        .map(|(connection, remote)| {
            let remote_name: ColoredString = match remote {
                Some(remote) => connection.remote_device.color(kind_color(remote.kind)),
                None => connection.remote_device.color(colors::TEXT_DEFAULT).italic(),
            };
            let value: ColoredString = format!(
                "{} {} {}",
                remote_name,
                "@".color(colors::SEPARATOR),
                format!("[{}]", connection.remote_port).color(colors::PORT)
            )
            .normal();
            (format!("[{}]", connection.local_port), value)
        })
        .collect()
}
