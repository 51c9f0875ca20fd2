// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Implements a basic rectangular board.
use std::borrow::Borrow;

use crate::board::Coordinate;

/// Simple rectangular dimensions.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RectDimensions {
    /// Number of rows. This cooresponds to the `row` of a [`Coordinate`].
    rows: usize,
    /// Number of columns. This cooresponds to the `column` of a [`Coordinate`].
    columns: usize,
}

impl RectDimensions {
    /// Create new [`RectDimensions`] with the specified number of rows and columns.
    /// Panics if `rows * columns` exceeds `usize::max_value()` or if `rows` or `columns`
    /// is 0.
    pub fn new(rows: usize, columns: usize) -> Self {
        match Self::try_new(rows, columns) {
            Some(dim) => dim,
            None => {
                if rows == 0 || columns == 0 {
                    panic!("RectDimensions must be nonzero, got {}x{}", rows, columns);
                } else {
                    panic!(
                        "RectDimensions too large: {} * {} > {}",
                        rows,
                        columns,
                        usize::max_value()
                    );
                }
            }
        }
    }

    /// Create new [`RectDimensions`] with the specified number of rows and columns.
    /// Returns `None` if `rows * columns` exceeds `usize::max_value()` or if `rows` or
    /// `columns` is 0.
    pub fn try_new(rows: usize, columns: usize) -> Option<Self> {
        if rows == 0 || columns == 0 {
            None
        } else {
            rows.checked_mul(columns).map(|_| Self { rows, columns })
        }
    }

    /// Get the number of rows of these [`RectDimensions`].
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the number of columns of these [`RectDimensions`].
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Compute the total number of cells.
    pub fn total_size(&self) -> usize {
        self.rows * self.columns
    }

    /// Check if the given [`Coordinate`] is in bounds for these [`RectDimensions`].
    #[inline]
    pub fn contains<B: Borrow<Coordinate>>(&self, coord: B) -> bool {
        let c = coord.borrow();
        c.row < self.rows && c.column < self.columns
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the coordinates of
    /// that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let columns = self.columns;
        (0..self.rows).map(move |row| (0..columns).map(move |column| Coordinate { row, column }))
    }
}

impl Default for RectDimensions {
    /// Construct the default rectangular dimensions, a 10x10 board.
    fn default() -> Self {
        Self {
            rows: 10,
            columns: 10,
        }
    }
}
