//! Sort state and ordering

use std::cmp::Ordering;

use super::Column;
use crate::model::Row;

/// Sort direction for ordering rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }

    /// Applies the direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }

    /// Header indicator for the active column.
    pub fn indicator(self) -> &'static str {
        match self {
            Direction::Asc => "▲",
            Direction::Desc => "▼",
        }
    }
}

/// Which column the table is sorted by, if any.
///
/// At most one column is active. Selecting the active column again flips the
/// direction; selecting another column makes it active in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    column: Option<usize>,
    direction: Direction,
}

impl SortState {
    /// Index of the active column.
    pub fn column(&self) -> Option<usize> {
        self.column
    }

    /// Current direction. Meaningless while no column is active.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Applies a header click on column `index`.
    pub fn select(&mut self, index: usize) {
        if self.column == Some(index) {
            self.direction = self.direction.flipped();
        } else {
            self.column = Some(index);
            self.direction = Direction::Asc;
        }
    }
}

/// Returns the row indices of `rows` in sorted order.
///
/// The sort is stable: rows comparing equal keep their input order in both
/// directions.
pub fn sorted_order<R: Row>(rows: &[R], column: &Column<R>, direction: Direction) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rows.len()).collect();
    order.sort_by(|&a, &b| direction.apply(column.compare(&rows[a], &rows[b])));
    order
}
