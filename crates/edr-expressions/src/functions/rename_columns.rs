//! Column relabeling

use crate::error::ExpressionError;
use crate::function::ExpressionFunction;

/// Relabel columns via an id-to-name argument map
///
/// Every argument key is treated as a column id and its string value as the
/// new display name. Ids without a matching column are ignored; row keys
/// stay stable.
pub fn rename_columns() -> ExpressionFunction {
    ExpressionFunction::new(
        "rename_columns",
        "relabel columns via an id-to-name map",
        |mut table, args| {
            for (id, replacement) in args {
                let Some(name) = replacement.as_str() else {
                    return Err(ExpressionError::InvalidArgument {
                        name: "id_map",
                        reason: format!("replacement for {id} must be a string"),
                    });
                };
                if let Some(column) = table.column_mut(id) {
                    column.name = name.to_string();
                }
            }
            Ok(table)
        },
    )
}
