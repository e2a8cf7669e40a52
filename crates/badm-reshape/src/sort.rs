//! Ordering: numeric group-id sort with a whole-table lexical fallback.

use badm_model::{OutputTable, WideRecord};

/// Order a table's records in place.
///
/// When every group id parses as a number the table sorts ascending
/// numerically and ids re-serialize canonically (integral values lose the
/// fractional artifact). When any id fails to parse the whole table falls
/// back to a lexical sort on the original strings - never a per-row mix.
/// Both sorts are stable, so equal keys keep first-seen order.
pub fn sort_records(table: &mut OutputTable) {
    let parsed: Option<Vec<f64>> = table
        .records
        .iter()
        .map(|record| parse_group_number(&record.group_id))
        .collect();

    match parsed {
        Some(numbers) => {
            let mut keyed: Vec<(f64, WideRecord)> =
                numbers.into_iter().zip(table.records.drain(..)).collect();
            keyed.sort_by(|left, right| left.0.total_cmp(&right.0));
            table.records = keyed
                .into_iter()
                .map(|(value, mut record)| {
                    record.group_id = canonical_group_id(&record.group_id, value);
                    record
                })
                .collect();
        }
        None => {
            table
                .records
                .sort_by(|left, right| left.group_id.cmp(&right.group_id));
        }
    }
}

/// Best-effort numeric interpretation of a group id.
fn parse_group_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

/// Canonical string form: integral values render without a fractional
/// artifact; anything else keeps its source form.
fn canonical_group_id(raw: &str, value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9.0e15 {
        format!("{}", value as i64)
    } else {
        raw.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_numbers() {
        assert_eq!(parse_group_number(" 42 "), Some(42.0));
        assert_eq!(parse_group_number("3.5"), Some(3.5));
        assert_eq!(parse_group_number("G7"), None);
    }

    #[test]
    fn canonical_form_drops_trailing_zero() {
        assert_eq!(canonical_group_id("3.0", 3.0), "3");
        assert_eq!(canonical_group_id("42", 42.0), "42");
        assert_eq!(canonical_group_id("1.5", 1.5), "1.5");
    }
}
