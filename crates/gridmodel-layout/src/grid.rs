//! The resolved grid and its region queries.

use std::fmt;

use gridmodel_core::{Dimensions, GridError, Point, Region};

use crate::config::GridConfig;
use crate::iter::{CellIndex, Cells, LinearCursor, LinearStrategy};
use crate::resolve::{resolve, ResolvedDimensions};

/// A rectangular matrix of uniform cells separated by gutters.
///
/// All four dimension sets are resolved once at construction; a `Grid` never
/// changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Grid {
    dimensions: Dimensions,
    matrix_dimensions: Dimensions,
    cell_dimensions: Dimensions,
    gutter_dimensions: Dimensions,
}

impl Grid {
    /// Resolve a grid from absolute inputs.
    ///
    /// # Errors
    ///
    /// - [`GridError::InsufficientParams`] if the inputs don't pin down a grid.
    /// - [`GridError::ConflictingParams`] if the inputs contradict each other.
    /// - [`GridError::ZeroGridDimension`] for zero rows or columns.
    /// - [`GridError::Geometry`] for invalid values, including a percentage
    ///   width or height, which needs [`Grid::new_within`].
    pub fn new(config: &GridConfig) -> Result<Self, GridError> {
        Self::resolve_from(config, None)
    }

    /// Resolve a grid whose percentage width/height are relative to `container`.
    pub fn new_within(config: &GridConfig, container: &Dimensions) -> Result<Self, GridError> {
        Self::resolve_from(config, Some(container))
    }

    fn resolve_from(config: &GridConfig, container: Option<&Dimensions>) -> Result<Self, GridError> {
        let params = config.normalize(container)?;
        let ResolvedDimensions {
            dimensions,
            matrix,
            cell,
            gutter,
        } = resolve(&params)?;

        Ok(Self {
            dimensions,
            matrix_dimensions: matrix,
            cell_dimensions: cell,
            gutter_dimensions: gutter,
        })
    }

    pub fn width(&self) -> f64 {
        self.dimensions.width()
    }

    pub fn height(&self) -> f64 {
        self.dimensions.height()
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.dimensions.aspect_ratio()
    }

    pub fn columns(&self) -> usize {
        self.matrix_dimensions.width() as usize
    }

    pub fn rows(&self) -> usize {
        self.matrix_dimensions.height() as usize
    }

    pub fn cell_width(&self) -> f64 {
        self.cell_dimensions.width()
    }

    pub fn cell_height(&self) -> f64 {
        self.cell_dimensions.height()
    }

    pub fn gutter_width(&self) -> f64 {
        self.gutter_dimensions.width()
    }

    pub fn gutter_height(&self) -> f64 {
        self.gutter_dimensions.height()
    }

    /// Overall pixel size.
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Column count as width, row count as height.
    pub fn matrix_dimensions(&self) -> Dimensions {
        self.matrix_dimensions
    }

    pub fn cell_dimensions(&self) -> Dimensions {
        self.cell_dimensions
    }

    pub fn gutter_dimensions(&self) -> Dimensions {
        self.gutter_dimensions
    }

    /// Number of cells (columns x rows).
    ///
    /// Resolution rejects matrices whose cell count does not fit in `usize`.
    pub fn cell_count(&self) -> usize {
        self.columns() * self.rows()
    }

    /// Region of the cell at the given column and row.
    pub fn cell_region(&self, column: usize, row: usize) -> Result<Region, GridError> {
        self.validate_column_index(column)?;
        self.validate_row_index(row)?;
        Ok(self.region_for(CellIndex::new(column, row)))
    }

    /// Region covering both cells and everything between them.
    ///
    /// Start and end may be given in either order.
    pub fn cell_range_region(
        &self,
        start_column: usize,
        start_row: usize,
        end_column: usize,
        end_row: usize,
    ) -> Result<Region, GridError> {
        let start = self.cell_region(start_column, start_row)?;
        let end = self.cell_region(end_column, end_row)?;
        Ok(start.union(&end))
    }

    /// Region of one full-height column.
    pub fn column_region(&self, index: usize) -> Result<Region, GridError> {
        self.column_range_region(index, None)
    }

    /// Region spanning columns `start..=end`; `end` defaults to `start`.
    pub fn column_range_region(&self, start: usize, end: Option<usize>) -> Result<Region, GridError> {
        self.cell_range_region(start, 0, end.unwrap_or(start), self.last_row())
    }

    /// Region of one full-width row.
    pub fn row_region(&self, index: usize) -> Result<Region, GridError> {
        self.row_range_region(index, None)
    }

    /// Region spanning rows `start..=end`; `end` defaults to `start`.
    pub fn row_range_region(&self, start: usize, end: Option<usize>) -> Result<Region, GridError> {
        self.cell_range_region(0, start, self.last_column(), end.unwrap_or(start))
    }

    /// The traversal order used by `&Grid`'s `IntoIterator`.
    pub fn default_strategy() -> LinearStrategy {
        LinearStrategy::TopLeftHorizontal
    }

    /// Walk the cell indexes in `strategy`'s order.
    pub fn iter(&self, strategy: LinearStrategy) -> LinearCursor {
        LinearCursor::new(strategy, self.columns(), self.rows())
    }

    /// Walk the cells, with their regions, in `strategy`'s order.
    pub fn cells(&self, strategy: LinearStrategy) -> Cells<'_> {
        Cells::new(self, strategy)
    }

    /// Log a summary of the grid at info level.
    pub fn log_info(&self) {
        for line in self.to_string().lines() {
            tracing::info!("{}", line);
        }
    }

    /// Region of a cell already known to be inside the grid.
    pub(crate) fn region_for(&self, index: CellIndex) -> Region {
        let x = (self.cell_width() + self.gutter_width()) * index.column as f64;
        let y = (self.cell_height() + self.gutter_height()) * index.row as f64;
        Region::new(Point::new(x, y), self.cell_dimensions)
    }

    fn last_column(&self) -> usize {
        self.columns() - 1
    }

    fn last_row(&self) -> usize {
        self.rows() - 1
    }

    fn validate_column_index(&self, index: usize) -> Result<(), GridError> {
        if index >= self.columns() {
            return Err(GridError::InvalidColumnIndex {
                index,
                columns: self.columns(),
            });
        }
        Ok(())
    }

    fn validate_row_index(&self, index: usize) -> Result<(), GridError> {
        if index >= self.rows() {
            return Err(GridError::InvalidRowIndex {
                index,
                rows: self.rows(),
            });
        }
        Ok(())
    }
}

impl TryFrom<GridConfig> for Grid {
    type Error = GridError;

    fn try_from(config: GridConfig) -> Result<Self, Self::Error> {
        Grid::new(&config)
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = CellIndex;
    type IntoIter = LinearCursor;

    fn into_iter(self) -> LinearCursor {
        self.iter(Grid::default_strategy())
    }
}

const DIVIDER: &str = "----------------------------------------";

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{DIVIDER}")?;
        writeln!(f, "Grid")?;
        writeln!(f, "{DIVIDER}")?;
        writeln!(f, "Width:              {}", self.width())?;
        writeln!(f, "Height:             {}", self.height())?;
        writeln!(f, "Aspect Ratio:       {}", self.aspect_ratio())?;
        writeln!(f, "Columns:            {}", self.columns())?;
        writeln!(f, "Rows:               {}", self.rows())?;
        writeln!(f, "Cell Width:         {}", self.cell_width())?;
        writeln!(f, "Cell Height:        {}", self.cell_height())?;
        writeln!(f, "Gutter Width:       {}", self.gutter_width())?;
        writeln!(f, "Gutter Height:      {}", self.gutter_height())?;
        writeln!(f, "Total cells:        {}", self.cell_count())?;
        write!(f, "{DIVIDER}")
    }
}
