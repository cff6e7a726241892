//! Engine registration entry point

use crate::function::{FormatFactory, TimeZoneResolver};
use crate::functions::{
    counter_rate, datatable, datatable_column, format_column, rename_columns, time_scale,
};
use crate::registry::FunctionRegistry;

/// Register the full function set with the host engine
///
/// Builds the fixed list of expression functions, constructing the
/// datatable presentation pass from `format_factory` and time scaling from
/// `resolve_timezone`, and registers each entry once, in list order.
/// Nothing is retained afterwards; duplicate names are the engine's
/// concern.
pub fn setup_expressions<R>(
    registry: &mut R,
    format_factory: FormatFactory,
    resolve_timezone: TimeZoneResolver,
) where
    R: FunctionRegistry + ?Sized,
{
    let functions = [
        counter_rate(),
        format_column(),
        rename_columns(),
        datatable_column(),
        datatable(format_factory),
        time_scale(resolve_timezone),
    ];
    for function in functions {
        tracing::debug!(name = function.name(), "registering expression function");
        registry.register_function(function);
    }
}
