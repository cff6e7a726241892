//! Column format assignment

use super::{optional_str, required_str};
use crate::datatable::FormatSpec;
use crate::error::ExpressionError;
use crate::function::ExpressionFunction;

/// Attach a rendering format to a column's metadata
pub fn format_column() -> ExpressionFunction {
    ExpressionFunction::new(
        "format_column",
        "attach a rendering format to a column",
        |mut table, args| {
            let column_id = required_str(args, "column")?.to_string();
            let format_id = required_str(args, "format")?.to_string();
            let pattern = optional_str(args, "pattern").map(str::to_string);

            let column = table
                .column_mut(&column_id)
                .ok_or(ExpressionError::MissingColumn(column_id))?;

            let mut spec = FormatSpec::new(format_id);
            if let Some(pattern) = pattern {
                spec = spec.with_pattern(pattern);
            }
            column.meta.format = Some(spec);
            Ok(table)
        },
    )
}
