use fabmap_common::error::TopologyError;
use fabmap_core::builder;
use fabmap_core::store::{self, SnapshotFile, TopologyStore};

use crate::utils::{Fixture, host_block, switch_block};

#[test]
fn snapshot_round_trip_after_mapping() {
    let fixture = Fixture::dump(
        "small_topo_file",
        &[
            switch_block("S1", "bb", &["H1", "H2"]),
            host_block("H1", "aa", "S1", 1),
            host_block("H2", "cc", "S1", 2),
        ],
    );
    let topology = builder::map_file(&fixture.path, &mut ()).unwrap();

    let bytes = store::encode(&topology).unwrap();
    assert_eq!(store::decode(&bytes).unwrap(), topology);

    let snapshot = SnapshotFile::new(fixture.sibling("topology.snapshot"));
    snapshot.save(&topology).unwrap();
    let loaded = snapshot.load().unwrap();

    assert_eq!(loaded, topology);
    assert_eq!(loaded.summary(), topology.summary());
    assert_eq!(loaded.finished_at(), topology.finished_at());
}

#[test]
fn snapshot_overwrite_keeps_latest() {
    let first = Fixture::dump("first", &[host_block("H1", "aa", "S1", 1)]);
    let second = Fixture::dump(
        "second",
        &[host_block("H1", "aa", "S1", 1), switch_block("S1", "bb", &["H1"])],
    );
    let snapshot = SnapshotFile::new(first.sibling("topology.snapshot"));

    snapshot.save(&builder::map_file(&first.path, &mut ()).unwrap()).unwrap();
    snapshot.save(&builder::map_file(&second.path, &mut ()).unwrap()).unwrap();

    let loaded = snapshot.load().unwrap();
    assert_eq!(loaded.source(), "second");
    assert_eq!(loaded.device_count(), 2);
}

#[test]
fn snapshot_unavailable_before_first_save() {
    let fixture = Fixture::new("empty", "");
    let snapshot = SnapshotFile::new(fixture.sibling("topology.snapshot"));

    assert!(matches!(snapshot.load(), Err(TopologyError::SnapshotUnavailable)));
}
