//! Property tests: resolver totality and end-to-end determinism.

use badm_model::LongRow;
use badm_reshape::{reshape, resolve_dates};
use proptest::prelude::*;

fn arb_row() -> impl Strategy<Value = LongRow> {
    let group_id = prop_oneof![
        "[0-9]{1,3}",
        "[0-9]{1,2}\\.[05]",
        "g[0-9]",
    ];
    let variable_group = prop_oneof![
        Just("GRP_HEIGHTC".to_string()),
        Just("GRP_LAI".to_string()),
        Just("GRP_SOIL".to_string()),
    ];
    let variable = prop_oneof![
        "[A-Z]{3,6}",
        Just("TIME_DATE".to_string()),
        Just("PLANTING_DATE".to_string()),
    ];
    let value = "[a-z0-9]{0,4}";
    (group_id, variable_group, variable, value).prop_map(
        |(group_id, variable_group, variable, value)| {
            LongRow::new(group_id, variable_group, variable, value)
        },
    )
}

fn arb_rows() -> impl Strategy<Value = Vec<LongRow>> {
    prop::collection::vec(arb_row(), 0..40)
}

proptest! {
    // Every group id present in the input resolves to a non-empty date key.
    #[test]
    fn date_keys_are_total(rows in arb_rows()) {
        let index = resolve_dates(&rows);
        for row in &rows {
            let key = index.date_key(&row.group_id);
            prop_assert!(!key.trim().is_empty());
        }
    }

    // Reshaping the same input twice yields identical tables: same category
    // order, same column order, same row order, same cells.
    #[test]
    fn reshape_is_deterministic(rows in arb_rows()) {
        prop_assert_eq!(reshape(&rows), reshape(&rows));
    }

    // Date-marked variable names never survive as miscellaneous columns:
    // every column either is the group id column or keeps its designated role.
    #[test]
    fn date_columns_never_leak(rows in arb_rows()) {
        let index = resolve_dates(&rows);
        for table in reshape(&rows) {
            for column in &table.columns {
                if column == badm_model::GROUP_ID_COLUMN {
                    continue;
                }
                if column.contains(badm_model::DATE_MARKER) {
                    prop_assert!(index.columns().contains(column));
                }
            }
        }
    }
}
