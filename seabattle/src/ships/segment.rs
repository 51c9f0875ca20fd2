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
use crate::board::Coordinate;

/// A single cell occupied by part of a [`Vessel`][crate::ships::Vessel].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Segment {
    /// Cell this segment occupies.
    coord: Coordinate,

    /// Whether this segment has not been hit yet.
    alive: bool,
}

impl Segment {
    pub(crate) fn new(coord: Coordinate) -> Self {
        Self { coord, alive: true }
    }

    /// Row of the cell.
    pub fn row(&self) -> usize {
        self.coord.row
    }

    /// Column of the cell.
    pub fn column(&self) -> usize {
        self.coord.column
    }

    /// Coordinate of the cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// Returns true until the segment is hit.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Mark this segment as hit.
    pub(crate) fn destroy(&mut self) {
        self.alive = false;
    }
}
