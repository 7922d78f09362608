use std::fs;

use chrono::{TimeZone, Utc};
use fabmap_core::store::{SnapshotFile, TopologyStore};
use fabmap_core::{builder, report};

use crate::utils::{Fixture, host_block, switch_block};

fn fixture() -> Fixture {
    Fixture::dump(
        "small_topo_file",
        &[host_block("H1", "aa", "S1", 1), switch_block("S1", "bb", &["H1"])],
    )
}

#[test]
fn report_from_parsed_topology() {
    let fixture = fixture();
    let topology = builder::map_file(&fixture.path, &mut ()).unwrap();
    let generated_at = Utc.with_ymd_and_hms(2024, 5, 7, 10, 12, 41).unwrap();

    let expected = "\
# Topology map generated at 2024-05-07 10:12:41
# Source file: small_topo_file

Host \"H1\"
    devid=0x1003 sysimgguid=0xaad caguid=0xaaa
    [1] -> \"S1\" @ [1]
Switch \"S1\"
    devid=0xcf08 sysimgguid=0xbb3 caguid=0xbb0(bb0)
    [1] -> \"H1\" @ [1]";

    assert_eq!(report::render(&topology, &generated_at), expected);
}

#[test]
fn report_same_for_parsed_and_loaded_topology() {
    let fixture = fixture();
    let topology = builder::map_file(&fixture.path, &mut ()).unwrap();
    let snapshot = SnapshotFile::new(fixture.sibling("topology.snapshot"));
    snapshot.save(&topology).unwrap();

    let generated_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(
        report::render(&snapshot.load().unwrap(), &generated_at),
        report::render(&topology, &generated_at)
    );
}

#[tokio::test]
async fn report_written_from_blocking_task() {
    let fixture = fixture();
    let topology = builder::map_file(&fixture.path, &mut ()).unwrap();
    let path = fixture.sibling("topology_map.txt");

    let target = path.clone();
    tokio::task::spawn_blocking(move || report::write_report(&topology, &target))
        .await
        .expect("report task panicked")
        .expect("report failed");

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("# Topology map generated at "));
    assert!(written.contains("# Source file: small_topo_file\n\nHost \"H1\""));
    assert!(written.ends_with("    [1] -> \"H1\" @ [1]"));
}
