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
use std::fmt;

/// The coordinates of a cell in the board.
///
/// Coordinates order row-major: first by `row`, then by `column`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coordinate {
    /// Vertical position of the cell, counted from the top.
    pub row: usize,
    /// Horizontal position of the cell, counted from the left.
    pub column: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `column`.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Iterate the cells touching this one, diagonals included. Cells that would have
    /// a negative row or column are skipped; there is no upper bound.
    pub fn neighbors(self) -> Neighbors {
        Neighbors {
            center: self,
            next: 0,
        }
    }

    /// Chebyshev distance between two cells. Cells touching each other, including
    /// diagonally, are at distance 1.
    pub fn distance(&self, other: &Coordinate) -> usize {
        let drow = if self.row > other.row {
            self.row - other.row
        } else {
            other.row - self.row
        };
        let dcol = if self.column > other.column {
            self.column - other.column
        } else {
            other.column - self.column
        };
        drow.max(dcol)
    }

    /// Shift this coordinate by the given deltas, returning `None` if the result
    /// underflows or overflows.
    fn offset(self, drow: isize, dcol: isize) -> Option<Self> {
        Some(Self {
            row: offset_axis(self.row, drow)?,
            column: offset_axis(self.column, dcol)?,
        })
    }
}

fn offset_axis(value: usize, delta: isize) -> Option<usize> {
    if delta < 0 {
        value.checked_sub(delta.wrapping_neg() as usize)
    } else {
        value.checked_add(delta as usize)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(row, column)` pair.
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a `(row, column)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.column)
    }
}

/// Offsets of the 3x3 block around a cell, minus the center, in row-major order.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Iterator over the 8-directional neighbors of a [`Coordinate`].
#[derive(Debug, Clone)]
pub struct Neighbors {
    center: Coordinate,
    next: usize,
}

impl Iterator for Neighbors {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        while let Some(&(drow, dcol)) = NEIGHBOR_OFFSETS.get(self.next) {
            self.next += 1;
            if let Some(coord) = self.center.offset(drow, dcol) {
                return Some(coord);
            }
        }
        None
    }
}
