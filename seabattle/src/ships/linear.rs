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
use std::ops::RangeInclusive;

use crate::board::{Coordinate, GeometryReason, InvalidGeometry};

/// Direction a multi-cell line runs in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// All cells share a row.
    Horizontal,
    /// All cells share a column.
    Vertical,
}

/// A straight run of cells between two endpoints, both included. The run goes from
/// `start` to `end`; if `end` comes before `start` along the axis the line is empty.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Line {
    start: Coordinate,
    end: Coordinate,
}

impl Line {
    /// Build the line between `start` and `end`. The endpoints must share a row or a
    /// column; equal endpoints make a single-cell line.
    pub fn between(start: Coordinate, end: Coordinate) -> Result<Self, InvalidGeometry> {
        if start.row == end.row || start.column == end.column {
            Ok(Self { start, end })
        } else {
            Err(InvalidGeometry::new(GeometryReason::NotStraight, start, end))
        }
    }

    /// Build the line of `len` cells starting at `start` and running right or down.
    /// Panics if `len` is 0.
    pub fn from_origin(start: Coordinate, orientation: Orientation, len: usize) -> Self {
        assert!(len > 0);
        let end = match orientation {
            Orientation::Horizontal => Coordinate::new(start.row, start.column + (len - 1)),
            Orientation::Vertical => Coordinate::new(start.row + (len - 1), start.column),
        };
        Self { start, end }
    }

    /// The first endpoint as given.
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// The second endpoint as given.
    pub fn end(&self) -> Coordinate {
        self.end
    }

    /// The orientation of this line. Single-cell lines report `Horizontal`.
    pub fn orientation(&self) -> Orientation {
        if self.start.row == self.end.row {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Number of cells in this line.
    pub fn len(&self) -> usize {
        let range = self.varying_range();
        range
            .end()
            .checked_sub(*range.start())
            .map_or(0, |span| span.saturating_add(1))
    }

    /// Returns true if `end` comes before `start`, so the line covers no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the cells of this line from `start` to `end`.
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> {
        let fixed = *self;
        let orientation = self.orientation();
        self.varying_range().map(move |v| match orientation {
            Orientation::Horizontal => Coordinate::new(fixed.start.row, v),
            Orientation::Vertical => Coordinate::new(v, fixed.start.column),
        })
    }

    /// Inclusive range along the axis this line runs on. Empty when reversed.
    fn varying_range(&self) -> RangeInclusive<usize> {
        match self.orientation() {
            Orientation::Horizontal => self.start.column..=self.end.column,
            Orientation::Vertical => self.start.row..=self.end.row,
        }
    }
}
