//! CSV output behavior.

use badm_model::{OutputTable, WideRecord};
use badm_export::{render_table, sanitize_file_stem, write_category_tables};

fn sample_table() -> OutputTable {
    let mut table = OutputTable::new("GRP_HEIGHTC");
    table.columns.push("HEIGHTC_DATE".to_string());
    table.columns.push("HEIGHTC".to_string());

    let mut first = WideRecord::new("1", "20190115");
    first
        .cells
        .insert("HEIGHTC_DATE".to_string(), "20190115".to_string());
    first.cells.insert("HEIGHTC".to_string(), "2.5".to_string());
    table.push_record(first);

    let mut second = WideRecord::new("2", "2");
    second.cells.insert("HEIGHTC".to_string(), "3.1".to_string());
    table.push_record(second);

    table
}

#[test]
fn renders_header_and_blank_missing_cells() {
    let rendered = render_table(&sample_table()).expect("render");
    insta::assert_snapshot!(rendered.trim_end(), @r"
    GROUP_ID,HEIGHTC_DATE,HEIGHTC
    1,20190115,2.5
    2,,3.1
    ");
}

#[test]
fn writes_one_file_per_variable_group() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut other = OutputTable::new("GRP_LAI");
    other.columns.push("LAI_TOT".to_string());
    let mut record = WideRecord::new("3", "3");
    record.cells.insert("LAI_TOT".to_string(), "4.2".to_string());
    other.push_record(record);

    let written =
        write_category_tables(dir.path(), &[sample_table(), other]).expect("write tables");

    assert_eq!(written.len(), 2);
    assert_eq!(written[0].records, 2);
    let heightc =
        std::fs::read_to_string(dir.path().join("GRP_HEIGHTC.csv")).expect("read heightc");
    assert_eq!(
        heightc,
        "GROUP_ID,HEIGHTC_DATE,HEIGHTC\n1,20190115,2.5\n2,,3.1\n"
    );
    let lai = std::fs::read_to_string(dir.path().join("GRP_LAI.csv")).expect("read lai");
    assert_eq!(lai, "GROUP_ID,LAI_TOT\n3,4.2\n");
}

#[test]
fn empty_table_writes_header_only() {
    let dir = tempfile::tempdir().expect("tempdir");
    let table = OutputTable::new("GRP_EMPTY");

    write_category_tables(dir.path(), &[table]).expect("write tables");

    let content = std::fs::read_to_string(dir.path().join("GRP_EMPTY.csv")).expect("read");
    assert_eq!(content, "GROUP_ID\n");
}

#[test]
fn file_stems_sanitize_hostile_characters() {
    assert_eq!(sanitize_file_stem("GRP_HEIGHTC"), "GRP_HEIGHTC");
    assert_eq!(sanitize_file_stem("GRP/HEIGHT C"), "GRP_HEIGHT_C");
    assert_eq!(sanitize_file_stem("../escape"), "___escape");
    assert_eq!(sanitize_file_stem(""), "GROUP");
}
