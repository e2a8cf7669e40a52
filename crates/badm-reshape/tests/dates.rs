//! Date resolver behavior.

use badm_model::LongRow;
use badm_reshape::resolve_dates;

fn row(group_id: &str, variable_group: &str, variable: &str, value: &str) -> LongRow {
    LongRow::new(group_id, variable_group, variable, value)
}

#[test]
fn first_date_row_wins() {
    let rows = vec![
        row("1", "GRP_HEIGHTC", "HEIGHTC_DATE", "20190115"),
        row("1", "GRP_HEIGHTC", "HEIGHTC_DATE", "20200301"),
    ];
    let index = resolve_dates(&rows);
    assert_eq!(index.date_key("1"), "20190115");
    assert_eq!(index.field("1", "HEIGHTC_DATE"), Some("20190115"));
}

#[test]
fn groups_without_dates_fall_back_to_their_id() {
    let rows = vec![row("7", "GRP_LAI", "LAI_TOT", "4.2")];
    let index = resolve_dates(&rows);
    assert_eq!(index.date_key("7"), "7");
    assert_eq!(index.field("7", "LAI_DATE"), None);
}

#[test]
fn blank_date_values_count_as_absent() {
    let rows = vec![
        row("3", "GRP_HEIGHTC", "HEIGHTC_DATE", "   "),
        row("3", "GRP_HEIGHTC", "HEIGHTC", "1.8"),
    ];
    let index = resolve_dates(&rows);
    assert_eq!(index.date_key("3"), "3");
    assert!(index.columns().is_empty());
}

#[test]
fn resolution_is_category_agnostic() {
    // The date lives in GRP_PLANTING; the key must hold for rows observed
    // under GRP_LAI as well.
    let rows = vec![
        row("4", "GRP_PLANTING", "PLANTING_DATE", "20180420"),
        row("4", "GRP_LAI", "LAI_TOT", "3.3"),
    ];
    let index = resolve_dates(&rows);
    assert_eq!(index.date_key("4"), "20180420");
}

#[test]
fn distinct_date_variables_keep_discovery_order() {
    let rows = vec![
        row("1", "GRP_HEIGHTC", "HEIGHTC_DATE", "20190115"),
        row("2", "GRP_PLANTING", "PLANTING_DATE", "20180420"),
        row("3", "GRP_HEIGHTC", "HEIGHTC_DATE", "20190220"),
    ];
    let index = resolve_dates(&rows);
    assert_eq!(index.columns(), ["HEIGHTC_DATE", "PLANTING_DATE"]);
    assert_eq!(index.field("2", "PLANTING_DATE"), Some("20180420"));
    assert_eq!(index.field("2", "HEIGHTC_DATE"), None);
}

#[test]
fn every_group_in_the_input_resolves() {
    let rows = vec![
        row("1", "GRP_A", "A_DATE", "20200101"),
        row("2", "GRP_A", "A_VAL", "x"),
        row("g3", "GRP_B", "B_VAL", "y"),
    ];
    let index = resolve_dates(&rows);
    assert_eq!(index.group_count(), 3);
    for group_id in ["1", "2", "g3"] {
        assert!(!index.date_key(group_id).is_empty());
    }
}
