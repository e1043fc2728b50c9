//! Grid dimension resolution, cell geometry, and traversal.
//!
//! A grid is a rectangular matrix of identical cells separated by gutters.
//! Callers describe it with whatever they know (overall size, aspect ratio,
//! row and column counts, cell size, gutter size) and this crate derives the
//! rest, rejecting inputs that are insufficient or contradictory.
//!
//! # Architecture
//!
//! 1. **Configuration**: [`GridConfig`] collects the optional inputs
//! 2. **Resolution**: four stages derive overall, matrix, cell and gutter dimensions
//! 3. **Queries**: [`Grid`] maps cell, row, column and range indexes to regions
//! 4. **Traversal**: [`LinearStrategy`] walks the cells in one of eight orders
//!
//! # Example
//!
//! ```
//! use gridmodel_layout::{Grid, GridConfig, LinearStrategy};
//!
//! let grid = Grid::new(
//!     &GridConfig::new()
//!         .with_size(500.0, 700.0)
//!         .with_matrix(5, 14)
//!         .with_gutter(20.0),
//! )?;
//! assert_eq!(grid.cell_width(), 84.0);
//!
//! for cell in grid.cells(LinearStrategy::TopLeftVertical).take(3) {
//!     println!("{:?}: {:?}", cell.index, cell.region.top_left_point());
//! }
//! # Ok::<(), gridmodel_layout::GridError>(())
//! ```

mod config;
mod grid;
mod iter;
mod resolve;

pub use config::GridConfig;
pub use grid::Grid;
pub use iter::{Axis, Cell, CellIndex, Cells, Corner, LinearCursor, LinearStrategy, Step};

pub use gridmodel_core::{
    Dimensions, GeometryError, GridError, Length, MatrixAxis, Point, Region,
};
