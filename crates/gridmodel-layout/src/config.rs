//! Grid configuration.
//!
//! A [`GridConfig`] is a flat bag of optional inputs. Any sufficient subset
//! pins down a grid; the resolver derives the rest. With the `serde` feature it
//! deserializes from camelCase JSON such as
//! `{"width": 500, "height": 700, "columns": 5, "rows": 14, "gutter": 20}`.

use gridmodel_core::validation::is_positive_number;
use gridmodel_core::{DimensionParams, Dimensions, GeometryError, GridError, Length};

/// Inputs for building a [`crate::Grid`]. Every field is optional.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default, deny_unknown_fields)
)]
pub struct GridConfig {
    /// Overall width, absolute or a percentage of a container
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub width: Option<Length>,
    /// Overall height, absolute or a percentage of a container
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub height: Option<Length>,
    /// Overall width divided by overall height
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub aspect_ratio: Option<f64>,
    /// Number of rows; a fractional count is truncated once the overall size is known
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub rows: Option<f64>,
    /// Number of columns; a fractional count is truncated once the overall size is known
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub columns: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub cell_width: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub cell_height: Option<f64>,
    /// Horizontal space between columns
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub gutter_width: Option<f64>,
    /// Vertical space between rows
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub gutter_height: Option<f64>,
    /// Shorthand for `gutter_width` and `gutter_height` when they are absent
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub gutter: Option<f64>,
}

impl GridConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: impl Into<Length>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn with_height(mut self, height: impl Into<Length>) -> Self {
        self.height = Some(height.into());
        self
    }

    /// Set the overall width and height together.
    pub fn with_size(self, width: impl Into<Length>, height: impl Into<Length>) -> Self {
        self.with_width(width).with_height(height)
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = Some(aspect_ratio);
        self
    }

    pub fn with_rows(mut self, rows: impl Into<f64>) -> Self {
        self.rows = Some(rows.into());
        self
    }

    pub fn with_columns(mut self, columns: impl Into<f64>) -> Self {
        self.columns = Some(columns.into());
        self
    }

    /// Set the column and row counts together.
    pub fn with_matrix(self, columns: impl Into<f64>, rows: impl Into<f64>) -> Self {
        self.with_columns(columns).with_rows(rows)
    }

    pub fn with_cell_width(mut self, cell_width: f64) -> Self {
        self.cell_width = Some(cell_width);
        self
    }

    pub fn with_cell_height(mut self, cell_height: f64) -> Self {
        self.cell_height = Some(cell_height);
        self
    }

    /// Set the cell width and height together.
    pub fn with_cell_size(self, cell_width: f64, cell_height: f64) -> Self {
        self.with_cell_width(cell_width).with_cell_height(cell_height)
    }

    pub fn with_gutter_width(mut self, gutter_width: f64) -> Self {
        self.gutter_width = Some(gutter_width);
        self
    }

    pub fn with_gutter_height(mut self, gutter_height: f64) -> Self {
        self.gutter_height = Some(gutter_height);
        self
    }

    /// Set the gutter shorthand used for both axes.
    pub fn with_gutter(mut self, gutter: f64) -> Self {
        self.gutter = Some(gutter);
        self
    }

    /// Validate every supplied value and resolve lengths and the gutter shorthand.
    ///
    /// Row and column counts are passed through as given.
    pub(crate) fn normalize(&self, container: Option<&Dimensions>) -> Result<GridParams, GridError> {
        let DimensionParams {
            width,
            height,
            aspect_ratio,
        } = DimensionParams::from_lengths(self.width, self.height, self.aspect_ratio, container)?;

        let checked = [
            ("width", width),
            ("height", height),
            ("aspectRatio", aspect_ratio),
            ("rows", self.rows),
            ("columns", self.columns),
            ("cellWidth", self.cell_width),
            ("cellHeight", self.cell_height),
            ("gutterWidth", self.gutter_width),
            ("gutterHeight", self.gutter_height),
            ("gutter", self.gutter),
        ];
        for (param, value) in checked {
            if let Some(value) = value.filter(|v| !is_positive_number(*v)) {
                return Err(GeometryError::InvalidParam {
                    param,
                    value: value.to_string(),
                }
                .into());
            }
        }

        Ok(GridParams {
            width,
            height,
            aspect_ratio,
            rows: self.rows,
            columns: self.columns,
            cell_width: self.cell_width,
            cell_height: self.cell_height,
            gutter_width: self.gutter_width.or(self.gutter),
            gutter_height: self.gutter_height.or(self.gutter),
        })
    }
}

/// Validated, purely numeric resolver input.
///
/// `gutter_width`/`gutter_height` already include the shorthand; `None` means
/// no gutter was given for that axis. `rows`/`columns` may still be fractional.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct GridParams {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub aspect_ratio: Option<f64>,
    pub rows: Option<f64>,
    pub columns: Option<f64>,
    pub cell_width: Option<f64>,
    pub cell_height: Option<f64>,
    pub gutter_width: Option<f64>,
    pub gutter_height: Option<f64>,
}
