//! Error types for expression evaluation

/// Errors raised by expression function bodies
#[derive(Debug, thiserror::Error)]
pub enum ExpressionError {
    /// Referenced column does not exist on the input table
    #[error("column not found: {0}")]
    MissingColumn(String),

    /// A required argument was not supplied
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    /// An argument was supplied but could not be used
    #[error("invalid argument {name}: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: String,
    },

    /// A cell that must be numeric held something else
    #[error("column {column} holds a non-numeric value at row {row}")]
    NonNumericValue { column: String, row: usize },

    /// A cell that must be a date held something else
    #[error("column {column} holds a non-date value at row {row}")]
    NonDateValue { column: String, row: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_offender() {
        let err = ExpressionError::MissingColumn("bytes".to_string());
        assert!(err.to_string().contains("bytes"));

        let err = ExpressionError::NonNumericValue {
            column: "bytes".to_string(),
            row: 3,
        };
        assert!(err.to_string().contains("row 3"));
    }
}
