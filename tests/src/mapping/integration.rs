use fabmap_common::error::TopologyError;
use fabmap_common::fabric::connection::Connection;
use fabmap_common::fabric::device::DeviceKind;
use fabmap_core::builder;

use crate::utils::{Fixture, host_block, switch_block};

/// One host and one switch, each closed by a blank line.
#[test]
fn mapping_host_and_switch() {
    let fixture = Fixture::dump(
        "small_topo_file",
        &[
            host_block("H1", "2c903000c8f6", "S1", 1),
            switch_block("S1", "2c90200400b8", &["H1"]),
        ],
    );

    let topology = builder::map_file(&fixture.path, &mut ()).expect("mapping failed");

    assert_eq!(topology.host_count(), 1);
    assert_eq!(topology.switch_count(), 1);
    assert_eq!(topology.device_count(), 2);
    assert_eq!(topology.source(), "small_topo_file");

    let host = topology.device("H1").expect("H1 missing");
    assert_eq!(host.kind, DeviceKind::Host);
    assert_eq!(host.device_id, "0x1003");
    assert_eq!(host.system_image_guid, "0x2c903000c8f6d");
    assert_eq!(host.ca_guid, "0x2c903000c8f6a");
    assert_eq!(host.connections, vec![Connection::new("1", "S1", "1").unwrap()]);

    let switch = topology.device("S1").expect("S1 missing");
    assert_eq!(switch.kind, DeviceKind::Switch);
    assert_eq!(switch.ca_guid, "0x2c90200400b80(2c90200400b80)");
}

#[test]
fn mapping_keeps_last_block_without_trailing_blank_line() {
    let contents = format!(
        "{}\n{}",
        host_block("H1", "aa", "S1", 1),
        switch_block("S1", "bb", &["H1"]).trim_end()
    );
    let fixture = Fixture::new("no_trailing_blank", &contents);

    let topology = builder::map_file(&fixture.path, &mut ()).expect("mapping failed");

    assert_eq!(topology.device_count(), 2);
    assert_eq!(topology.device("S1").unwrap().connections.len(), 1);
}

#[test]
fn mapping_fails_on_unknown_device_type() {
    let rogue = host_block("R1", "cc", "S1", 2).replace("Ca\t2", "Router\t2");
    let fixture = Fixture::dump(
        "rogue",
        &[host_block("H1", "aa", "S1", 1), rogue, switch_block("S1", "bb", &["H1"])],
    );

    let result = builder::map_file(&fixture.path, &mut ());

    assert!(matches!(result, Err(TopologyError::UnrecognizedDeviceType { .. })));
}

#[test]
fn mapping_fails_on_malformed_connection() {
    let broken = format!("{}[2] nowhere\n", switch_block("S1", "bb", &["H1"]));
    let fixture = Fixture::dump("broken", &[host_block("H1", "aa", "S1", 1), broken]);

    match builder::map_file(&fixture.path, &mut ()) {
        Err(TopologyError::MalformedConnection { line }) => assert_eq!(line, "[2] nowhere"),
        other => panic!("expected a malformed connection, got {other:?}"),
    }
}

#[test]
fn mapping_missing_source_file() {
    let fixture = Fixture::new("present", "");
    let result = builder::map_file(&fixture.sibling("absent"), &mut ());

    assert!(matches!(result, Err(TopologyError::SourceFileNotFound { .. })));
}

/// Duplicate names are overwritten, so fewer devices than blocks are reported.
#[test]
fn mapping_duplicate_names_last_write_wins() {
    let fixture = Fixture::dump(
        "duplicates",
        &[
            host_block("H1", "aa", "S1", 1),
            switch_block("S1", "bb", &["H1"]),
            host_block("H1", "dd", "S1", 2),
        ],
    );

    let topology = builder::map_file(&fixture.path, &mut ()).expect("mapping failed");

    assert_eq!(topology.blocks_parsed(), 3);
    assert_eq!(topology.device_count(), 2);
    assert_eq!(topology.host_count(), 1);
    assert_eq!(topology.device("H1").unwrap().ca_guid, "0xdda");

    let names: Vec<&str> = topology.devices().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["H1", "S1"]);
}

#[test]
fn mapping_larger_fabric() {
    let hosts: Vec<String> = (1..=24).map(|idx| format!("node-{idx:02}")).collect();
    let host_names: Vec<&str> = hosts.iter().map(String::as_str).collect();

    let mut blocks = vec![switch_block("S-leaf", "0a", &host_names)];
    blocks.extend(
        hosts
            .iter()
            .enumerate()
            .map(|(idx, name)| host_block(name, &format!("{idx:02x}"), "S-leaf", idx as u32 + 1)),
    );
    let fixture = Fixture::dump("large_topo_file", &blocks);

    let topology = builder::map_file(&fixture.path, &mut ()).expect("mapping failed");

    assert_eq!(topology.switch_count(), 1);
    assert_eq!(topology.host_count(), 24);
    assert_eq!(topology.link_count(), 48);
    assert!(topology.neighbors("S-leaf").all(|(_, remote)| remote.is_some()));
}
