//! Reset-aware counter differences

use super::{numeric_cell, optional_str, required_str};
use crate::datatable::DatatableColumn;
use crate::function::ExpressionFunction;
use serde_json::Value;

/// Rate of change of an ever-growing counter column
///
/// Each output cell is the difference to the previous row's value. A drop
/// below the previous value means the counter reset, and the raw value is
/// taken as the rate for that row. Null cells produce null and restart the
/// sequence.
pub fn counter_rate() -> ExpressionFunction {
    ExpressionFunction::new(
        "counter_rate",
        "rate of change of an ever-growing counter, aware of resets",
        |mut table, args| {
            let input = required_str(args, "input_column")?.to_string();
            let output = optional_str(args, "output_column")
                .unwrap_or(input.as_str())
                .to_string();

            let source = table
                .column(&input)
                .ok_or_else(|| crate::ExpressionError::MissingColumn(input.clone()))?
                .clone();
            if table.column(&output).is_none() {
                table.columns.push(DatatableColumn {
                    id: output.clone(),
                    name: output.clone(),
                    meta: source.meta,
                });
            }

            let mut previous: Option<f64> = None;
            for (row_index, row) in table.rows.iter_mut().enumerate() {
                match numeric_cell(row, &input, row_index)? {
                    Some(value) => {
                        let rate = match previous {
                            Some(prev) if value >= prev => value - prev,
                            _ => value,
                        };
                        previous = Some(value);
                        row.insert(output.clone(), Value::from(rate));
                    }
                    None => {
                        previous = None;
                        row.insert(output.clone(), Value::Null);
                    }
                }
            }
            Ok(table)
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatable::{ColumnType, Datatable};
    use crate::{ExpressionError, FunctionArgs};
    use serde_json::json;

    fn table_with(values: &[Value]) -> Datatable {
        let mut table = Datatable::new().with_column(DatatableColumn::new(
            "bytes",
            ColumnType::Number,
        ));
        for value in values {
            let mut row = serde_json::Map::new();
            row.insert("bytes".to_string(), value.clone());
            table.rows.push(row);
        }
        table
    }

    fn args(input: &str, output: &str) -> FunctionArgs {
        let mut args = FunctionArgs::new();
        args.insert("input_column".to_string(), json!(input));
        args.insert("output_column".to_string(), json!(output));
        args
    }

    #[test]
    fn growing_counter_yields_differences() {
        let table = table_with(&[json!(10), json!(15), json!(45)]);
        let out = counter_rate()
            .apply(table, &args("bytes", "rate"))
            .unwrap();

        let rates: Vec<_> = out.rows.iter().map(|r| r["rate"].clone()).collect();
        assert_eq!(rates, vec![json!(10.0), json!(5.0), json!(30.0)]);
    }

    #[test]
    fn reset_takes_raw_value() {
        let table = table_with(&[json!(100), json!(20)]);
        let out = counter_rate()
            .apply(table, &args("bytes", "rate"))
            .unwrap();
        assert_eq!(out.rows[1]["rate"], json!(20.0));
    }

    #[test]
    fn null_restarts_the_sequence() {
        let table = table_with(&[json!(10), Value::Null, json!(7)]);
        let out = counter_rate()
            .apply(table, &args("bytes", "rate"))
            .unwrap();
        assert_eq!(out.rows[1]["rate"], Value::Null);
        assert_eq!(out.rows[2]["rate"], json!(7.0));
    }

    #[test]
    fn missing_input_column_is_an_error() {
        let table = Datatable::new();
        let result = counter_rate().apply(table, &args("missing", "rate"));
        assert!(matches!(result, Err(ExpressionError::MissingColumn(_))));
    }

    #[test]
    fn non_numeric_cell_is_an_error() {
        let table = table_with(&[json!("oops")]);
        let result = counter_rate().apply(table, &args("bytes", "rate"));
        assert!(matches!(
            result,
            Err(ExpressionError::NonNumericValue { row: 0, .. })
        ));
    }

    #[test]
    fn output_column_is_registered_once() {
        let table = table_with(&[json!(1), json!(2)]);
        let out = counter_rate()
            .apply(table, &args("bytes", "rate"))
            .unwrap();
        assert_eq!(out.columns.iter().filter(|c| c.id == "rate").count(), 1);
    }
}
