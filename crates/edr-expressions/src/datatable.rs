//! Tabular value model
//!
//! [`Datatable`] is the value expression functions pass between each other:
//! an ordered list of typed columns plus rows of JSON values keyed by
//! column id.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A table of rows flowing through the expression pipeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Datatable {
    /// Column definitions, in display order
    pub columns: Vec<DatatableColumn>,
    /// Rows as column-id → value maps
    pub rows: Vec<Map<String, Value>>,
}

impl Datatable {
    /// Empty table
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With an additional column definition
    #[must_use]
    pub fn with_column(mut self, column: DatatableColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// With an additional row
    #[must_use]
    pub fn with_row(mut self, row: Map<String, Value>) -> Self {
        self.rows.push(row);
        self
    }

    /// Column definition by id
    #[must_use]
    pub fn column(&self, id: &str) -> Option<&DatatableColumn> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Mutable column definition by id
    pub fn column_mut(&mut self, id: &str) -> Option<&mut DatatableColumn> {
        self.columns.iter_mut().find(|c| c.id == id)
    }
}

/// A single column definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatatableColumn {
    /// Stable identifier rows are keyed by
    pub id: String,
    /// Display name
    pub name: String,
    /// Type and formatting metadata
    pub meta: ColumnMeta,
}

impl DatatableColumn {
    /// Column with name equal to id and no format
    #[must_use]
    pub fn new(id: impl Into<String>, column_type: ColumnType) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            meta: ColumnMeta {
                column_type,
                format: None,
            },
        }
    }

    /// With a display name
    #[inline]
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// With a format spec
    #[inline]
    #[must_use]
    pub fn with_format(mut self, format: FormatSpec) -> Self {
        self.meta.format = Some(format);
        self
    }
}

/// Column metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMeta {
    /// Value type of the column
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// How cells should be rendered, when configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<FormatSpec>,
}

/// Value types a column can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Number,
    String,
    Date,
    Boolean,
}

impl ColumnType {
    /// Parse a wire name into a column type
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "number" => Some(ColumnType::Number),
            "string" => Some(ColumnType::String),
            "date" => Some(ColumnType::Date),
            "boolean" => Some(ColumnType::Boolean),
            _ => None,
        }
    }
}

/// Rendering configuration attached to a column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatSpec {
    /// Formatter identifier, e.g. `number`, `bytes`, `percent`
    pub id: String,
    /// Formatter-specific pattern
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl FormatSpec {
    /// Format spec without a pattern
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pattern: None,
        }
    }

    /// With a formatter pattern
    #[inline]
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }
}
