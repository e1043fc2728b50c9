//! Dimension resolution.
//!
//! Turns a partial [`GridParams`] into four mutually consistent
//! [`Dimensions`]. Resolution runs in four stages and each stage only reads
//! the ones before it:
//!
//! 1. **Overall** width/height/aspect-ratio, inferring width from
//!    `cell_width * columns + gutter_width * (columns - 1)` (and height
//!    likewise) when neither the extent nor the aspect ratio was supplied.
//! 2. **Matrix** column/row counts, derived as `width / cell_width` when
//!    absent. Supplied and derived counts are truncated to whole numbers here,
//!    so the fit check and stage 1 see the counts as given.
//! 3. **Cell** size, derived by sharing out the space left after gutters.
//! 4. **Gutter** size, always derived from the other three. An explicit
//!    gutter is a consistency check, never an override.

use gridmodel_core::validation::is_positive_integer;
use gridmodel_core::{DimensionParams, Dimensions, GridError, MatrixAxis};

use crate::config::GridParams;

/// Relative tolerance used when comparing a derived value with a supplied one.
const EPSILON: f64 = 1e-9;

/// Cell counts at or above this cannot be indexed with `usize`.
const MAX_CELLS: f64 = usize::MAX as f64;

/// The four resolved dimension sets of a grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ResolvedDimensions {
    pub dimensions: Dimensions,
    pub matrix: Dimensions,
    pub cell: Dimensions,
    pub gutter: Dimensions,
}

/// Run all four stages over validated params.
pub(crate) fn resolve(params: &GridParams) -> Result<ResolvedDimensions, GridError> {
    check_params(params)?;

    let dimensions = resolve_dimensions(params)?;
    tracing::debug!(
        "Resolved grid dimensions: {}x{} (aspect ratio {})",
        dimensions.width(),
        dimensions.height(),
        dimensions.aspect_ratio()
    );

    let matrix = resolve_matrix(params, &dimensions)?;
    tracing::debug!(
        "Resolved matrix: {} columns, {} rows",
        matrix.width(),
        matrix.height()
    );

    let cell = resolve_cell(params, &dimensions, &matrix)?;
    tracing::debug!("Resolved cell size: {}x{}", cell.width(), cell.height());

    let gutter = resolve_gutter(params, &dimensions, &matrix, &cell)?;
    tracing::debug!("Resolved gutter size: {}x{}", gutter.width(), gutter.height());

    Ok(ResolvedDimensions {
        dimensions,
        matrix,
        cell,
        gutter,
    })
}

/// Reject zero counts and cells that cannot fit before deriving anything.
fn check_params(params: &GridParams) -> Result<(), GridError> {
    if params.columns == Some(0.0) {
        return Err(reject(GridError::ZeroGridDimension {
            axis: MatrixAxis::Columns,
        }));
    }
    if params.rows == Some(0.0) {
        return Err(reject(GridError::ZeroGridDimension {
            axis: MatrixAxis::Rows,
        }));
    }

    if let (Some(columns), Some(cell_width), Some(width)) =
        (params.columns, params.cell_width, params.width)
    {
        if columns * cell_width > width {
            return Err(reject(GridError::conflicting(format!(
                "{columns} columns of width {cell_width} exceed width {width}"
            ))));
        }
    }
    if let (Some(rows), Some(cell_height), Some(height)) =
        (params.rows, params.cell_height, params.height)
    {
        if rows * cell_height > height {
            return Err(reject(GridError::conflicting(format!(
                "{rows} rows of height {cell_height} exceed height {height}"
            ))));
        }
    }

    Ok(())
}

/// Stage 1: overall width, height and aspect ratio.
fn resolve_dimensions(params: &GridParams) -> Result<Dimensions, GridError> {
    let mut width = params.width;
    let mut height = params.height;

    if width.is_none() && params.aspect_ratio.is_none() {
        if let (Some(columns), Some(cell_width)) = (params.columns, params.cell_width) {
            width = Some(span(columns, cell_width, params.gutter_width.unwrap_or(0.0)));
        }
    }
    if height.is_none() && params.aspect_ratio.is_none() {
        if let (Some(rows), Some(cell_height)) = (params.rows, params.cell_height) {
            height = Some(span(rows, cell_height, params.gutter_height.unwrap_or(0.0)));
        }
    }

    let dimension_params = DimensionParams {
        width,
        height,
        aspect_ratio: params.aspect_ratio,
    };
    if dimension_params.supplied() < 2 {
        return Err(reject(GridError::InsufficientParams));
    }

    Ok(Dimensions::from_params(dimension_params)?)
}

/// Stage 2: whole column and row counts.
fn resolve_matrix(params: &GridParams, dimensions: &Dimensions) -> Result<Dimensions, GridError> {
    let columns = resolve_count(
        MatrixAxis::Columns,
        params.columns,
        dimensions.width(),
        params.cell_width,
    )?;
    let rows = resolve_count(
        MatrixAxis::Rows,
        params.rows,
        dimensions.height(),
        params.cell_height,
    )?;

    if columns * rows >= MAX_CELLS {
        return Err(reject(GridError::conflicting(format!(
            "{columns} columns by {rows} rows is too many cells to index"
        ))));
    }

    Ok(Dimensions::new(columns, rows)?)
}

fn resolve_count(
    axis: MatrixAxis,
    supplied: Option<f64>,
    extent: f64,
    cell_extent: Option<f64>,
) -> Result<f64, GridError> {
    let count = match (supplied, cell_extent) {
        (Some(count), _) => whole_count(axis, count),
        (None, Some(cell_extent)) => {
            let derived = extent / cell_extent;
            if !derived.is_finite() {
                return Err(reject(GridError::conflicting(format!(
                    "cannot derive {axis} from extent {extent} and cell size {cell_extent}"
                ))));
            }
            whole_count(axis, derived)
        }
        (None, None) => return Err(reject(GridError::InsufficientParams)),
    };

    if count == 0.0 {
        return Err(reject(GridError::ZeroGridDimension { axis }));
    }
    Ok(count)
}

/// Stage 3: cell width and height.
fn resolve_cell(
    params: &GridParams,
    dimensions: &Dimensions,
    matrix: &Dimensions,
) -> Result<Dimensions, GridError> {
    let width = params.cell_width.unwrap_or_else(|| {
        share(
            dimensions.width(),
            matrix.width(),
            params.gutter_width.unwrap_or(0.0),
        )
    });
    let height = params.cell_height.unwrap_or_else(|| {
        share(
            dimensions.height(),
            matrix.height(),
            params.gutter_height.unwrap_or(0.0),
        )
    });

    if width < 0.0 || height < 0.0 {
        return Err(reject(GridError::conflicting(format!(
            "gutters leave no room for cells (cell size {width}x{height})"
        ))));
    }

    Ok(Dimensions::new(width, height)?)
}

/// Stage 4: gutter width and height, checked against any supplied gutter.
fn resolve_gutter(
    params: &GridParams,
    dimensions: &Dimensions,
    matrix: &Dimensions,
    cell: &Dimensions,
) -> Result<Dimensions, GridError> {
    let width = resolve_gutter_extent(
        "width",
        params.gutter_width,
        dimensions.width(),
        matrix.width(),
        cell.width(),
    )?;
    let height = resolve_gutter_extent(
        "height",
        params.gutter_height,
        dimensions.height(),
        matrix.height(),
        cell.height(),
    )?;

    Ok(Dimensions::new(width, height)?)
}

fn resolve_gutter_extent(
    name: &str,
    supplied: Option<f64>,
    extent: f64,
    count: f64,
    cell_extent: f64,
) -> Result<f64, GridError> {
    // A single track has no inter-cell space.
    if count <= 1.0 {
        return Ok(0.0);
    }

    let remaining = extent - count * cell_extent;
    let derived = remaining / (count - 1.0);

    if derived < 0.0 && !approx_eq(derived, 0.0, extent) {
        return Err(reject(GridError::conflicting(format!(
            "cells overflow the grid {name} ({count} x {cell_extent} > {extent})"
        ))));
    }
    let derived = derived.max(0.0);

    if let Some(supplied) = supplied {
        if !approx_eq(supplied, derived, extent) {
            return Err(reject(GridError::conflicting(format!(
                "gutter {name} {supplied} does not match derived gutter {name} {derived}"
            ))));
        }
    }

    Ok(derived)
}

/// Total extent of `count` cells separated by gutters.
fn span(count: f64, cell_extent: f64, gutter: f64) -> f64 {
    cell_extent * count + gutter * (count - 1.0)
}

/// Extent of one cell when `count` cells and their gutters fill `extent`.
fn share(extent: f64, count: f64, gutter: f64) -> f64 {
    (extent - gutter * (count - 1.0)) / count
}

/// Compare with a tolerance relative to the magnitude of the values and the
/// extent they were derived from.
fn approx_eq(a: f64, b: f64, scale: f64) -> bool {
    let magnitude = a.abs().max(b.abs()).max(scale.abs()).max(1.0);
    (a - b).abs() <= EPSILON * magnitude
}

/// Drop the fractional part of a row or column count.
fn whole_count(axis: MatrixAxis, count: f64) -> f64 {
    if !is_positive_integer(count) {
        tracing::debug!(
            "Truncating fractional {} count {} to {}",
            axis.as_str(),
            count,
            count.trunc()
        );
    }
    count.trunc()
}

fn reject(err: GridError) -> GridError {
    tracing::debug!("Rejecting grid configuration: {}", err);
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> GridParams {
        GridParams::default()
    }

    #[test]
    fn test_span_and_share_are_inverse() {
        let total = span(5.0, 84.0, 20.0);
        assert_eq!(total, 500.0);
        assert_eq!(share(total, 5.0, 20.0), 84.0);
    }

    #[test]
    fn test_width_inferred_from_cells() {
        let dims = resolve_dimensions(&GridParams {
            columns: Some(10.0),
            rows: Some(5.0),
            cell_width: Some(100.0),
            cell_height: Some(50.0),
            gutter_width: Some(10.0),
            gutter_height: Some(10.0),
            ..params()
        })
        .unwrap();
        assert_eq!(dims.width(), 1090.0);
        assert_eq!(dims.height(), 290.0);
    }

    #[test]
    fn test_aspect_ratio_blocks_inference() {
        let dims = resolve_dimensions(&GridParams {
            height: Some(100.0),
            aspect_ratio: Some(2.0),
            columns: Some(4.0),
            cell_width: Some(10.0),
            ..params()
        })
        .unwrap();
        assert_eq!(dims.width(), 200.0);
    }

    #[test]
    fn test_derived_counts_truncate() {
        let dims = Dimensions::new(500.0, 700.0).unwrap();
        let matrix = resolve_matrix(
            &GridParams {
                cell_width: Some(70.0),
                cell_height: Some(60.0),
                ..params()
            },
            &dims,
        )
        .unwrap();
        assert_eq!(matrix.width(), 7.0);
        assert_eq!(matrix.height(), 11.0);
    }

    #[test]
    fn test_supplied_counts_truncate_in_matrix_stage() {
        let dims = Dimensions::new(500.0, 700.0).unwrap();
        let matrix = resolve_matrix(
            &GridParams {
                columns: Some(5.9),
                rows: Some(2.1),
                ..params()
            },
            &dims,
        )
        .unwrap();
        assert_eq!(matrix.width(), 5.0);
        assert_eq!(matrix.height(), 2.0);
    }

    #[test]
    fn test_fit_check_uses_counts_as_given() {
        // 3.9 columns of 30 overflow 100 even though 3 whole columns would fit.
        let err = check_params(&GridParams {
            width: Some(100.0),
            height: Some(100.0),
            columns: Some(3.9),
            rows: Some(2.0),
            cell_width: Some(30.0),
            ..params()
        })
        .unwrap_err();
        assert!(matches!(err, GridError::ConflictingParams { .. }));
    }

    #[test]
    fn test_inferred_width_uses_counts_as_given() {
        let dims = resolve_dimensions(&GridParams {
            columns: Some(2.5),
            rows: Some(1.0),
            cell_width: Some(10.0),
            cell_height: Some(10.0),
            ..params()
        })
        .unwrap();
        assert_eq!(dims.width(), 25.0);
        assert_eq!(dims.height(), 10.0);
    }

    #[test]
    fn test_unindexable_cell_count_conflicts() {
        let dims = Dimensions::new(1e10, 1e10).unwrap();
        let err = resolve_matrix(
            &GridParams {
                columns: Some(1e10),
                rows: Some(1e10),
                ..params()
            },
            &dims,
        )
        .unwrap_err();
        assert!(matches!(err, GridError::ConflictingParams { .. }));
    }

    #[test]
    fn test_derived_count_of_zero() {
        let dims = Dimensions::new(100.0, 100.0).unwrap();
        let err = resolve_matrix(
            &GridParams {
                cell_width: Some(200.0),
                rows: Some(2.0),
                ..params()
            },
            &dims,
        )
        .unwrap_err();
        assert_eq!(
            err,
            GridError::ZeroGridDimension {
                axis: MatrixAxis::Columns
            }
        );
    }

    #[test]
    fn test_zero_cell_size_cannot_divide() {
        let dims = Dimensions::new(100.0, 100.0).unwrap();
        let err = resolve_matrix(
            &GridParams {
                cell_width: Some(0.0),
                rows: Some(2.0),
                ..params()
            },
            &dims,
        )
        .unwrap_err();
        assert!(matches!(err, GridError::ConflictingParams { .. }));
    }

    #[test]
    fn test_single_track_gutter_is_zero() {
        assert_eq!(
            resolve_gutter_extent("width", Some(10.0), 100.0, 1.0, 100.0).unwrap(),
            0.0
        );
    }

    #[test]
    fn test_supplied_gutter_must_match() {
        assert_eq!(
            resolve_gutter_extent("width", Some(100.0), 500.0, 5.0, 20.0).unwrap(),
            100.0
        );
        assert!(matches!(
            resolve_gutter_extent("width", Some(250.0), 500.0, 5.0, 20.0),
            Err(GridError::ConflictingParams { .. })
        ));
        // Zero is an explicit value like any other.
        assert!(matches!(
            resolve_gutter_extent("width", Some(0.0), 500.0, 5.0, 20.0),
            Err(GridError::ConflictingParams { .. })
        ));
    }

    #[test]
    fn test_overflowing_cells_conflict() {
        assert!(matches!(
            resolve_gutter_extent("width", None, 100.0, 5.0, 30.0),
            Err(GridError::ConflictingParams { .. })
        ));
    }

    #[test]
    fn test_approx_eq_absorbs_rounding() {
        let cell = share(700.0, 14.0, 20.0);
        let derived = (700.0 - 14.0 * cell) / 13.0;
        assert!(approx_eq(derived, 20.0, 700.0));
        assert!(!approx_eq(20.001, 20.0, 700.0));
    }
}
