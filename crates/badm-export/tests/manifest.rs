//! Run manifest behavior.

use badm_export::{MANIFEST_FILE, RunManifest, WrittenTable, write_manifest};
use badm_model::{OutputTable, WideRecord};

#[test]
fn manifest_round_trips_through_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut table = OutputTable::new("GRP_LAI");
    table.columns.push("LAI_TOT".to_string());
    table.push_record(WideRecord::new("1", "1"));
    let written = vec![WrittenTable {
        variable_group: "GRP_LAI".to_string(),
        path: dir.path().join("GRP_LAI.csv"),
        records: 1,
    }];

    let manifest = RunManifest::new(Some("US-Ne1".to_string()), 3, &[table], &written);
    let path = write_manifest(dir.path(), &manifest).expect("write manifest");

    assert_eq!(path, dir.path().join(MANIFEST_FILE));
    let json = std::fs::read_to_string(&path).expect("read manifest");
    let round: RunManifest = serde_json::from_str(&json).expect("parse manifest");
    assert_eq!(round.site_id.as_deref(), Some("US-Ne1"));
    assert_eq!(round.input_rows, 3);
    assert_eq!(round.categories.len(), 1);
    assert_eq!(round.categories[0].file, "GRP_LAI.csv");
    assert_eq!(round.categories[0].columns, 2);
}

#[test]
fn unwritten_tables_get_a_blank_file_entry() {
    let table = OutputTable::new("GRP_DRY");
    let manifest = RunManifest::new(None, 0, &[table], &[]);
    assert_eq!(manifest.categories[0].file, "");
}
