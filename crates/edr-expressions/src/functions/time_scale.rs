//! Per-time-unit normalization

use super::{date_cell_ms, numeric_cell, optional_str, required_str};
use crate::datatable::DatatableColumn;
use crate::error::ExpressionError;
use crate::function::{ExpressionFunction, TimeZoneResolver};
use serde_json::Value;

/// Normalize a numeric column to a per-time-unit rate
///
/// Each row's value covers the span between its date and the next row's
/// date; the output is the value scaled to the requested unit. A table
/// with fewer than two rows has no measurable span and passes through
/// unchanged.
pub fn time_scale(resolve_timezone: TimeZoneResolver) -> ExpressionFunction {
    ExpressionFunction::new(
        "time_scale",
        "normalize a numeric column to a per-time-unit rate",
        move |mut table, args| {
            let date_column = required_str(args, "date_column")?.to_string();
            let input = required_str(args, "input_column")?.to_string();
            let output = optional_str(args, "output_column")
                .unwrap_or(input.as_str())
                .to_string();
            let unit = required_str(args, "unit")?;
            let unit_ms = unit_length_ms(unit).ok_or_else(|| {
                ExpressionError::InvalidArgument {
                    name: "unit",
                    reason: format!("unknown time unit: {unit}"),
                }
            })?;

            if table.column(&date_column).is_none() {
                return Err(ExpressionError::MissingColumn(date_column));
            }
            let source = table
                .column(&input)
                .ok_or_else(|| ExpressionError::MissingColumn(input.clone()))?
                .clone();
            if table.column(&output).is_none() {
                table.columns.push(DatatableColumn {
                    id: output.clone(),
                    name: output.clone(),
                    meta: source.meta,
                });
            }

            let timezone = (*resolve_timezone)();
            tracing::debug!(%timezone, unit, "scaling values to per-unit rates");
            // Buckets assume fixed-length days.
            // TODO: DST-aware day lengths using the resolved timezone

            if table.rows.len() < 2 {
                return Ok(table);
            }

            let dates = table
                .rows
                .iter()
                .enumerate()
                .map(|(row_index, row)| date_cell_ms(row, &date_column, row_index))
                .collect::<Result<Vec<i64>, _>>()?;
            let mut spans: Vec<i64> = dates.windows(2).map(|pair| pair[1] - pair[0]).collect();
            // the last bucket is as wide as the one before it
            spans.push(spans[spans.len() - 1]);
            if spans.iter().any(|span| *span <= 0) {
                return Err(ExpressionError::InvalidArgument {
                    name: "date_column",
                    reason: "dates must be strictly increasing".to_string(),
                });
            }

            for (row_index, row) in table.rows.iter_mut().enumerate() {
                match numeric_cell(row, &input, row_index)? {
                    Some(value) => {
                        let scaled = value * unit_ms as f64 / spans[row_index] as f64;
                        row.insert(output.clone(), Value::from(scaled));
                    }
                    None => {
                        row.insert(output.clone(), Value::Null);
                    }
                }
            }
            Ok(table)
        },
    )
}

/// Milliseconds in one unit of the given wire name
fn unit_length_ms(unit: &str) -> Option<i64> {
    match unit {
        "s" => Some(1_000),
        "m" => Some(60 * 1_000),
        "h" => Some(60 * 60 * 1_000),
        "d" => Some(24 * 60 * 60 * 1_000),
        _ => None,
    }
}
