//! Datatable presentation pass

use crate::function::{ExpressionFunction, FormatFactory, ValueFormatter};
use serde_json::Value;

/// Render formatted columns to display text
///
/// For every column carrying a format spec, each non-null cell is run
/// through a formatter built by the injected factory and replaced with the
/// rendered string. Columns without a format pass through untouched.
pub fn datatable(format_factory: FormatFactory) -> ExpressionFunction {
    ExpressionFunction::new(
        "datatable",
        "render formatted columns to display text",
        move |mut table, _args| {
            let formatters: Vec<(String, ValueFormatter)> = table
                .columns
                .iter()
                .filter_map(|column| {
                    column
                        .meta
                        .format
                        .as_ref()
                        .map(|spec| (column.id.clone(), (*format_factory)(spec)))
                })
                .collect();

            for row in &mut table.rows {
                for (id, formatter) in &formatters {
                    let rendered = match row.get(id) {
                        Some(value) if !value.is_null() => Some(formatter(value)),
                        _ => None,
                    };
                    if let Some(text) = rendered {
                        row.insert(id.clone(), Value::String(text));
                    }
                }
            }
            Ok(table)
        },
    )
}
