use thiserror::Error;

use super::model::{FormantSample, RawTable, RawValue};

// ---------------------------------------------------------------------------
// Sample filter: raw table → clean formant samples
// ---------------------------------------------------------------------------

/// Column names the filter extracts.  Matched exactly, lowercase.
pub const F1_COLUMN: &str = "f1";
pub const F2_COLUMN: &str = "f2";

/// Structural problem with an input table.  Raised before any row is
/// inspected; a table without the formant columns is a wrong file, not a
/// noisy one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("input table has no '{field}' column")]
    MissingField { field: &'static str },
}

/// Extract clean measurement frames from a raw table.
///
/// Both formant cells of a row must coerce to finite numbers; rows that
/// fail are dropped, never repaired.  Output preserves input order.  An
/// empty result is `Ok` – whether that is acceptable is decided by the
/// stable-value extractor, not here.
pub fn clean_samples(table: &RawTable) -> Result<Vec<FormantSample>, FilterError> {
    for field in [F1_COLUMN, F2_COLUMN] {
        if !table.columns.iter().any(|c| c == field) {
            return Err(FilterError::MissingField { field });
        }
    }

    let samples = table
        .rows
        .iter()
        .filter_map(|row| {
            let f1 = row.get(F1_COLUMN).and_then(RawValue::as_f64)?;
            let f2 = row.get(F2_COLUMN).and_then(RawValue::as_f64)?;
            (f1.is_finite() && f2.is_finite()).then_some(FormantSample { f1, f2 })
        })
        .collect();

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn table(columns: &[&str], rows: Vec<Vec<(&str, RawValue)>>) -> RawTable {
        RawTable {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: rows
                .into_iter()
                .map(|cells| {
                    cells
                        .into_iter()
                        .map(|(k, v)| (k.to_string(), v))
                        .collect::<BTreeMap<_, _>>()
                })
                .collect(),
        }
    }

    #[test]
    fn missing_formant_column_is_structural() {
        let t = table(&["time", "f2"], vec![]);
        assert_eq!(
            clean_samples(&t),
            Err(FilterError::MissingField { field: "f1" })
        );

        let t = table(&["f1"], vec![]);
        assert_eq!(
            clean_samples(&t),
            Err(FilterError::MissingField { field: "f2" })
        );
    }

    #[test]
    fn error_message_names_the_column() {
        let err = FilterError::MissingField { field: "f1" };
        assert_eq!(err.to_string(), "input table has no 'f1' column");
    }

    #[test]
    fn unusable_rows_are_dropped_and_order_kept() {
        let t = table(
            &["f1", "f2", "note"],
            vec![
                vec![("f1", RawValue::Float(730.0)), ("f2", RawValue::Integer(1090))],
                vec![
                    ("f1", RawValue::Text("--undefined--".into())),
                    ("f2", RawValue::Float(1085.0)),
                ],
                vec![("f1", RawValue::Null), ("f2", RawValue::Float(1100.0))],
                vec![("f1", RawValue::Float(f64::NAN)), ("f2", RawValue::Float(1090.0))],
                vec![
                    ("f1", RawValue::Float(f64::INFINITY)),
                    ("f2", RawValue::Float(1090.0)),
                ],
                vec![("f1", RawValue::Bool(true)), ("f2", RawValue::Float(1090.0))],
                vec![
                    ("f1", RawValue::Text("729.5".into())),
                    ("f2", RawValue::Float(1092.0)),
                ],
            ],
        );

        let samples = clean_samples(&t).unwrap();
        assert_eq!(
            samples,
            vec![
                FormantSample { f1: 730.0, f2: 1090.0 },
                FormantSample { f1: 729.5, f2: 1092.0 },
            ]
        );
    }

    #[test]
    fn row_without_formant_cells_is_dropped() {
        // Columns can be declared even when a record format omits the cell.
        let t = table(
            &["f1", "f2"],
            vec![vec![("f1", RawValue::Float(300.0))], vec![]],
        );
        assert_eq!(clean_samples(&t), Ok(vec![]));
    }

    #[test]
    fn all_rows_dropped_is_ok_and_empty() {
        let t = table(
            &["f1", "f2"],
            vec![vec![
                ("f1", RawValue::Text("n/a".into())),
                ("f2", RawValue::Text("n/a".into())),
            ]],
        );
        assert_eq!(clean_samples(&t), Ok(vec![]));
    }
}
