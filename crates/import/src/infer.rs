//! Static column type inference.

use benchplot_core::ColumnType;

/// Infer the storage type of a field from its values.
///
/// Empty cells are nulls and do not vote. A field with no non-empty value is
/// TEXT.
pub fn infer_column_type<S: AsRef<str>>(values: &[S]) -> ColumnType {
    let mut saw_value = false;
    let mut all_integer = true;

    for raw in values {
        let v = raw.as_ref().trim();
        if v.is_empty() {
            continue;
        }
        saw_value = true;
        if all_integer && v.parse::<i64>().is_ok() {
            continue;
        }
        all_integer = false;
        if v.parse::<f64>().is_err() {
            return ColumnType::Text;
        }
    }

    match (saw_value, all_integer) {
        (false, _) => ColumnType::Text,
        (true, true) => ColumnType::Integer,
        (true, false) => ColumnType::Real,
    }
}
