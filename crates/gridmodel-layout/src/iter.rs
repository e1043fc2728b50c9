//! Linear traversal of a grid's cells.
//!
//! A [`LinearStrategy`] walks the cell matrix one row (or column) at a time,
//! starting at one corner and finishing at the diagonally opposite one. Four
//! corners times two axes gives the eight strategies.

use std::iter::FusedIterator;

use gridmodel_core::Region;

use crate::grid::Grid;

/// Zero-based column and row of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellIndex {
    pub column: usize,
    pub row: usize,
}

impl CellIndex {
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

impl From<(usize, usize)> for CellIndex {
    fn from((column, row): (usize, usize)) -> Self {
        Self { column, row }
    }
}

impl From<CellIndex> for (usize, usize) {
    fn from(index: CellIndex) -> Self {
        (index.column, index.row)
    }
}

/// A corner of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    /// The corner diagonally across the grid.
    pub fn opposite(self) -> Corner {
        match self {
            Self::TopLeft => Self::BottomRight,
            Self::TopRight => Self::BottomLeft,
            Self::BottomRight => Self::TopLeft,
            Self::BottomLeft => Self::TopRight,
        }
    }

    /// Index of the corner cell in a `columns` x `rows` matrix.
    pub fn cell(self, columns: usize, rows: usize) -> CellIndex {
        let last_column = columns.saturating_sub(1);
        let last_row = rows.saturating_sub(1);
        match self {
            Self::TopLeft => CellIndex::new(0, 0),
            Self::TopRight => CellIndex::new(last_column, 0),
            Self::BottomRight => CellIndex::new(last_column, last_row),
            Self::BottomLeft => CellIndex::new(0, last_row),
        }
    }
}

/// The axis a strategy moves along before wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Row by row
    Horizontal,
    /// Column by column
    Vertical,
}

/// One of the eight linear traversal orders.
///
/// Each variant names its starting corner and the axis it moves along. The
/// walk ends at the opposite corner after visiting every cell exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LinearStrategy {
    /// Left to right, then down to the next row
    #[default]
    TopLeftHorizontal,
    /// Top to bottom, then right to the next column
    TopLeftVertical,
    /// Right to left, then down to the next row
    TopRightHorizontal,
    /// Top to bottom, then left to the previous column
    TopRightVertical,
    /// Right to left, then up to the previous row
    BottomRightHorizontal,
    /// Bottom to top, then left to the previous column
    BottomRightVertical,
    /// Left to right, then up to the previous row
    BottomLeftHorizontal,
    /// Bottom to top, then right to the next column
    BottomLeftVertical,
}

impl LinearStrategy {
    pub const ALL: [LinearStrategy; 8] = [
        Self::TopLeftHorizontal,
        Self::TopLeftVertical,
        Self::TopRightHorizontal,
        Self::TopRightVertical,
        Self::BottomRightHorizontal,
        Self::BottomRightVertical,
        Self::BottomLeftHorizontal,
        Self::BottomLeftVertical,
    ];

    pub fn new(corner: Corner, axis: Axis) -> Self {
        match (corner, axis) {
            (Corner::TopLeft, Axis::Horizontal) => Self::TopLeftHorizontal,
            (Corner::TopLeft, Axis::Vertical) => Self::TopLeftVertical,
            (Corner::TopRight, Axis::Horizontal) => Self::TopRightHorizontal,
            (Corner::TopRight, Axis::Vertical) => Self::TopRightVertical,
            (Corner::BottomRight, Axis::Horizontal) => Self::BottomRightHorizontal,
            (Corner::BottomRight, Axis::Vertical) => Self::BottomRightVertical,
            (Corner::BottomLeft, Axis::Horizontal) => Self::BottomLeftHorizontal,
            (Corner::BottomLeft, Axis::Vertical) => Self::BottomLeftVertical,
        }
    }

    pub fn corner(self) -> Corner {
        match self {
            Self::TopLeftHorizontal | Self::TopLeftVertical => Corner::TopLeft,
            Self::TopRightHorizontal | Self::TopRightVertical => Corner::TopRight,
            Self::BottomRightHorizontal | Self::BottomRightVertical => Corner::BottomRight,
            Self::BottomLeftHorizontal | Self::BottomLeftVertical => Corner::BottomLeft,
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Self::TopLeftHorizontal
            | Self::TopRightHorizontal
            | Self::BottomRightHorizontal
            | Self::BottomLeftHorizontal => Axis::Horizontal,
            Self::TopLeftVertical
            | Self::TopRightVertical
            | Self::BottomRightVertical
            | Self::BottomLeftVertical => Axis::Vertical,
        }
    }

    /// The first cell visited.
    pub fn start_cell(self, columns: usize, rows: usize) -> CellIndex {
        self.corner().cell(columns, rows)
    }

    /// Whether `index` is the last cell visited.
    pub fn is_end_cell(self, index: CellIndex, columns: usize, rows: usize) -> bool {
        index == self.corner().opposite().cell(columns, rows)
    }

    /// The cell visited after `index`.
    ///
    /// Only meaningful for cells other than the end cell.
    pub fn next_cell(self, index: CellIndex, columns: usize, rows: usize) -> CellIndex {
        let CellIndex { column, row } = index;
        let last_column = columns.saturating_sub(1);
        let last_row = rows.saturating_sub(1);

        match self {
            Self::TopLeftHorizontal if column == last_column => CellIndex::new(0, row + 1),
            Self::TopLeftHorizontal => CellIndex::new(column + 1, row),

            Self::TopLeftVertical if row == last_row => CellIndex::new(column + 1, 0),
            Self::TopLeftVertical => CellIndex::new(column, row + 1),

            Self::TopRightHorizontal if column == 0 => CellIndex::new(last_column, row + 1),
            Self::TopRightHorizontal => CellIndex::new(column - 1, row),

            Self::TopRightVertical if row == last_row => CellIndex::new(column - 1, 0),
            Self::TopRightVertical => CellIndex::new(column, row + 1),

            Self::BottomRightHorizontal if column == 0 => CellIndex::new(last_column, row - 1),
            Self::BottomRightHorizontal => CellIndex::new(column - 1, row),

            Self::BottomRightVertical if row == 0 => CellIndex::new(column - 1, last_row),
            Self::BottomRightVertical => CellIndex::new(column, row - 1),

            Self::BottomLeftHorizontal if column == last_column => CellIndex::new(0, row - 1),
            Self::BottomLeftHorizontal => CellIndex::new(column + 1, row),

            Self::BottomLeftVertical if row == 0 => CellIndex::new(column + 1, last_row),
            Self::BottomLeftVertical => CellIndex::new(column, row - 1),
        }
    }

    /// Start a walk over a `columns` x `rows` matrix.
    pub fn cursor(self, columns: usize, rows: usize) -> LinearCursor {
        LinearCursor::new(self, columns, rows)
    }
}

/// Result of advancing a [`LinearCursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Value(CellIndex),
    Done,
}

impl From<Step> for Option<CellIndex> {
    fn from(step: Step) -> Self {
        match step {
            Step::Value(index) => Some(index),
            Step::Done => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CursorState {
    Running(CellIndex),
    Exhausted,
}

/// A single pass over every cell in a strategy's order.
///
/// Once exhausted the cursor stays exhausted; build a new one to walk again.
/// The reported length saturates at `usize::MAX` for larger matrices.
#[derive(Debug, Clone)]
pub struct LinearCursor {
    strategy: LinearStrategy,
    columns: usize,
    rows: usize,
    state: CursorState,
    remaining: usize,
}

impl LinearCursor {
    pub fn new(strategy: LinearStrategy, columns: usize, rows: usize) -> Self {
        let (state, remaining) = if columns == 0 || rows == 0 {
            (CursorState::Exhausted, 0)
        } else {
            (
                CursorState::Running(strategy.start_cell(columns, rows)),
                columns.saturating_mul(rows),
            )
        };
        Self {
            strategy,
            columns,
            rows,
            state,
            remaining,
        }
    }

    pub fn strategy(&self) -> LinearStrategy {
        self.strategy
    }

    pub fn is_done(&self) -> bool {
        self.state == CursorState::Exhausted
    }

    /// Produce the current cell and move on to the next one.
    pub fn step(&mut self) -> Step {
        let CursorState::Running(index) = self.state else {
            return Step::Done;
        };

        if self.strategy.is_end_cell(index, self.columns, self.rows) {
            tracing::trace!("{:?} walk finished at {:?}", self.strategy, index);
            self.state = CursorState::Exhausted;
        } else {
            self.state = CursorState::Running(self.strategy.next_cell(index, self.columns, self.rows));
        }
        self.remaining = self.remaining.saturating_sub(1);

        Step::Value(index)
    }
}

impl Iterator for LinearCursor {
    type Item = CellIndex;

    fn next(&mut self) -> Option<CellIndex> {
        self.step().into()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for LinearCursor {}

impl FusedIterator for LinearCursor {}

/// A cell's index together with its region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub index: CellIndex,
    pub region: Region,
}

/// Walks a grid yielding each [`Cell`] in a strategy's order.
#[derive(Debug, Clone)]
pub struct Cells<'a> {
    grid: &'a Grid,
    cursor: LinearCursor,
}

impl<'a> Cells<'a> {
    pub(crate) fn new(grid: &'a Grid, strategy: LinearStrategy) -> Self {
        Self {
            grid,
            cursor: grid.iter(strategy),
        }
    }
}

impl Iterator for Cells<'_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        let index = self.cursor.next()?;
        Some(Cell {
            index,
            region: self.grid.region_for(index),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size_hint()
    }
}

impl ExactSizeIterator for Cells<'_> {}

impl FusedIterator for Cells<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(strategy: LinearStrategy, columns: usize, rows: usize) -> Vec<(usize, usize)> {
        strategy.cursor(columns, rows).map(Into::into).collect()
    }

    #[test]
    fn test_top_left_orders() {
        assert_eq!(
            walk(LinearStrategy::TopLeftHorizontal, 3, 2),
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        );
        assert_eq!(
            walk(LinearStrategy::TopLeftVertical, 3, 2),
            vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]
        );
    }

    #[test]
    fn test_top_right_orders() {
        assert_eq!(
            walk(LinearStrategy::TopRightHorizontal, 3, 2),
            vec![(2, 0), (1, 0), (0, 0), (2, 1), (1, 1), (0, 1)]
        );
        assert_eq!(
            walk(LinearStrategy::TopRightVertical, 3, 2),
            vec![(2, 0), (2, 1), (1, 0), (1, 1), (0, 0), (0, 1)]
        );
    }

    #[test]
    fn test_bottom_right_orders() {
        assert_eq!(
            walk(LinearStrategy::BottomRightHorizontal, 3, 2),
            vec![(2, 1), (1, 1), (0, 1), (2, 0), (1, 0), (0, 0)]
        );
        assert_eq!(
            walk(LinearStrategy::BottomRightVertical, 3, 2),
            vec![(2, 1), (2, 0), (1, 1), (1, 0), (0, 1), (0, 0)]
        );
    }

    #[test]
    fn test_bottom_left_orders() {
        assert_eq!(
            walk(LinearStrategy::BottomLeftHorizontal, 3, 2),
            vec![(0, 1), (1, 1), (2, 1), (0, 0), (1, 0), (2, 0)]
        );
        assert_eq!(
            walk(LinearStrategy::BottomLeftVertical, 3, 2),
            vec![(0, 1), (0, 0), (1, 1), (1, 0), (2, 1), (2, 0)]
        );
    }

    #[test]
    fn test_strategy_from_corner_and_axis() {
        for strategy in LinearStrategy::ALL {
            assert_eq!(LinearStrategy::new(strategy.corner(), strategy.axis()), strategy);
        }
        assert_eq!(
            LinearStrategy::new(Corner::BottomLeft, Axis::Vertical),
            LinearStrategy::BottomLeftVertical
        );
    }

    #[test]
    fn test_every_corner_starts_two_strategies() {
        for corner in Corner::ALL {
            assert_eq!(corner.opposite().opposite(), corner);
            for axis in [Axis::Horizontal, Axis::Vertical] {
                let strategy = LinearStrategy::new(corner, axis);
                assert_eq!(strategy.start_cell(4, 3), corner.cell(4, 3));
                assert!(strategy.is_end_cell(corner.opposite().cell(4, 3), 4, 3));
            }
        }
    }

    #[test]
    fn test_huge_matrix_does_not_overflow() {
        let mut cursor = LinearStrategy::TopLeftHorizontal.cursor(usize::MAX, 2);
        assert_eq!(cursor.len(), usize::MAX);
        assert_eq!(cursor.next(), Some(CellIndex::new(0, 0)));
        assert_eq!(cursor.next(), Some(CellIndex::new(1, 0)));
    }

    #[test]
    fn test_cursor_is_not_restartable() {
        let mut cursor = LinearStrategy::TopLeftHorizontal.cursor(1, 2);
        assert_eq!(cursor.len(), 2);
        assert_eq!(cursor.step(), Step::Value(CellIndex::new(0, 0)));
        assert_eq!(cursor.step(), Step::Value(CellIndex::new(0, 1)));
        assert!(cursor.is_done());
        assert_eq!(cursor.step(), Step::Done);
        assert_eq!(cursor.step(), Step::Done);
        assert_eq!(cursor.len(), 0);
    }

    #[test]
    fn test_single_cell() {
        for strategy in LinearStrategy::ALL {
            assert_eq!(walk(strategy, 1, 1), vec![(0, 0)]);
        }
    }

    #[test]
    fn test_empty_matrix() {
        let mut cursor = LinearStrategy::BottomRightVertical.cursor(0, 4);
        assert!(cursor.is_done());
        assert_eq!(cursor.next(), None);
    }
}
