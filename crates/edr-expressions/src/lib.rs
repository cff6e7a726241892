//! Expression functions and engine registration
//!
//! A fixed set of named datatable transformations and the registration
//! entry point that wires them into a host expression engine.
//!
//! # Core Concepts
//!
//! - [`Datatable`]: the tabular value the functions transform
//! - [`ExpressionFunction`]: a named transformation with a boxed body
//! - [`FunctionRegistry`]: the one-method engine boundary
//! - [`setup_expressions`]: builds the fixed function list and registers
//!   each entry, in order
//!
//! Two functions are factory-built from caller-supplied configuration: the
//! datatable presentation pass takes a [`FormatFactory`], and time scaling
//! takes a [`TimeZoneResolver`]. The remaining functions are constants.
//!
//! ```rust
//! use std::sync::Arc;
//! use edr_expressions::{setup_expressions, RegisteredFunctions};
//!
//! let mut registry = RegisteredFunctions::new();
//! setup_expressions(
//!     &mut registry,
//!     Arc::new(|_spec| Box::new(|value| value.to_string())),
//!     Arc::new(|| "UTC".to_string()),
//! );
//! assert_eq!(registry.len(), 6);
//! ```

mod datatable;
mod error;
mod function;
mod functions;
mod registry;
mod setup;

pub use datatable::{ColumnMeta, ColumnType, Datatable, DatatableColumn, FormatSpec};
pub use error::ExpressionError;
pub use function::{
    ExpressionFunction, FormatFactory, FunctionArgs, TimeZoneResolver, ValueFormatter,
};
pub use functions::{
    counter_rate, datatable, datatable_column, format_column, rename_columns, time_scale,
};
pub use registry::{FunctionRegistry, RegisteredFunctions};
pub use setup::setup_expressions;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
