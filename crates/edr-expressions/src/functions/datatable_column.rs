//! Column definition

use super::{optional_str, required_str};
use crate::datatable::{ColumnType, DatatableColumn};
use crate::error::ExpressionError;
use crate::function::ExpressionFunction;

/// Define a column on the table, or update it when the id already exists
pub fn datatable_column() -> ExpressionFunction {
    ExpressionFunction::new(
        "datatable_column",
        "define or update a typed column",
        |mut table, args| {
            let id = required_str(args, "id")?.to_string();
            let name = optional_str(args, "name").unwrap_or(id.as_str()).to_string();
            let type_name = optional_str(args, "type").unwrap_or("string");
            let column_type =
                ColumnType::from_name(type_name).ok_or_else(|| ExpressionError::InvalidArgument {
                    name: "type",
                    reason: format!("unknown column type: {type_name}"),
                })?;

            match table.column_mut(&id) {
                Some(column) => {
                    column.name = name;
                    column.meta.column_type = column_type;
                }
                None => {
                    table
                        .columns
                        .push(DatatableColumn::new(id, column_type).with_name(name));
                }
            }
            Ok(table)
        },
    )
}
