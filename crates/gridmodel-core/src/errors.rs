//! Error types for gridmodel.

use thiserror::Error;

/// Errors raised while constructing geometry values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("Params were invalid: point coordinates must be finite, got ({x}, {y})")]
    InvalidParams { x: f64, y: f64 },

    #[error("Parameter was invalid: {param}: {value}")]
    InvalidParam { param: &'static str, value: String },

    #[error("You must supply at least two arguments of: [width, height, aspectRatio] (got {supplied})")]
    IncorrectParamCount { supplied: usize },

    #[error("Invalid percent string: {value:?}")]
    InvalidPercentString { value: String },

    #[error("Percentage {param} requires a container to resolve against")]
    MissingContainer { param: &'static str },
}

impl GeometryError {
    pub(crate) fn invalid_param(param: &'static str, value: impl ToString) -> Self {
        Self::InvalidParam {
            param,
            value: value.to_string(),
        }
    }
}

/// Which axis of the cell matrix an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixAxis {
    Columns,
    Rows,
}

impl MatrixAxis {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Columns => "columns",
            Self::Rows => "rows",
        }
    }
}

impl std::fmt::Display for MatrixAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while resolving or querying a grid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("You didn't supply sufficient params to derive a valid grid")]
    InsufficientParams,

    #[error("You supplied params that cannot be reconciled to a valid grid: {reason}")]
    ConflictingParams { reason: String },

    #[error("Zero is not a valid value for {axis}")]
    ZeroGridDimension { axis: MatrixAxis },

    #[error("The column index supplied was invalid: {index} (grid has {columns} columns)")]
    InvalidColumnIndex { index: usize, columns: usize },

    #[error("The row index supplied was invalid: {index} (grid has {rows} rows)")]
    InvalidRowIndex { index: usize, rows: usize },

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

impl GridError {
    pub fn conflicting(reason: impl Into<String>) -> Self {
        Self::ConflictingParams {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_error_converts_into_grid_error() {
        let err: GridError = GeometryError::IncorrectParamCount { supplied: 1 }.into();
        assert!(matches!(
            err,
            GridError::Geometry(GeometryError::IncorrectParamCount { supplied: 1 })
        ));
    }

    #[test]
    fn test_messages_name_the_offending_axis() {
        let err = GridError::ZeroGridDimension {
            axis: MatrixAxis::Columns,
        };
        assert_eq!(err.to_string(), "Zero is not a valid value for columns");
        assert_eq!(MatrixAxis::Rows.to_string(), MatrixAxis::Rows.as_str());
    }
}
