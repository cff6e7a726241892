//! The expression function set
//!
//! Six named transformations registered with the host engine. Four are
//! constants; the datatable presentation pass and time scaling are built by
//! factories from caller-supplied configuration.

mod counter_rate;
mod datatable;
mod datatable_column;
mod format_column;
mod rename_columns;
mod time_scale;

pub use counter_rate::counter_rate;
pub use datatable::datatable;
pub use datatable_column::datatable_column;
pub use format_column::format_column;
pub use rename_columns::rename_columns;
pub use time_scale::time_scale;

use crate::error::ExpressionError;
use crate::function::FunctionArgs;
use serde_json::{Map, Value};

/// Required string argument, by name
pub(crate) fn required_str<'a>(
    args: &'a FunctionArgs,
    name: &'static str,
) -> Result<&'a str, ExpressionError> {
    args.get(name)
        .and_then(Value::as_str)
        .ok_or(ExpressionError::MissingArgument(name))
}

/// Optional string argument, by name
pub(crate) fn optional_str<'a>(args: &'a FunctionArgs, name: &'static str) -> Option<&'a str> {
    args.get(name).and_then(Value::as_str)
}

/// Numeric cell at `column`; `None` for absent or null cells
pub(crate) fn numeric_cell(
    row: &Map<String, Value>,
    column: &str,
    row_index: usize,
) -> Result<Option<f64>, ExpressionError> {
    match row.get(column) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_f64()
            .map(Some)
            .ok_or_else(|| ExpressionError::NonNumericValue {
                column: column.to_string(),
                row: row_index,
            }),
    }
}

/// Date cell at `column` as epoch milliseconds; accepts numbers and
/// RFC 3339 strings
pub(crate) fn date_cell_ms(
    row: &Map<String, Value>,
    column: &str,
    row_index: usize,
) -> Result<i64, ExpressionError> {
    let non_date = || ExpressionError::NonDateValue {
        column: column.to_string(),
        row: row_index,
    };
    match row.get(column) {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .ok_or_else(non_date),
        Some(Value::String(s)) => chrono::DateTime::parse_from_rfc3339(s)
            .map(|d| d.timestamp_millis())
            .map_err(|_| non_date()),
        _ => Err(non_date()),
    }
}
