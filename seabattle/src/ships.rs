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
//! Types used for defining ships and tracking the damage they take.
use crate::board::{Coordinate, InvalidGeometry};

pub use self::{
    linear::{Line, Orientation},
    segment::Segment,
};

mod linear;
mod segment;

/// A ship: a straight run of [`Segment`]s between two endpoints.
///
/// A vessel is sunk once every one of its segments has been hit. Once sunk, it stays
/// sunk. A vessel whose `end` comes before its `start` has no segments and can never
/// be sunk.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Vessel {
    /// First endpoint as given at construction.
    start: Coordinate,

    /// Second endpoint as given at construction.
    end: Coordinate,

    /// Cached result of checking that no segment is alive.
    sunk: bool,

    /// Segments ordered from `start` to `end`.
    segments: Vec<Segment>,
}

impl Vessel {
    /// Build a vessel spanning `start` to `end`, both included. The endpoints must share
    /// a row or a column, or be equal for a single-segment vessel. Reversed endpoints
    /// give a vessel with no segments.
    pub fn new<C: Into<Coordinate>>(start: C, end: C) -> Result<Self, InvalidGeometry> {
        let line = Line::between(start.into(), end.into())?;
        Ok(Self::from_line(line))
    }

    /// Build a vessel covering the cells of the given [`Line`].
    pub fn from_line(line: Line) -> Self {
        Self {
            start: line.start(),
            end: line.end(),
            sunk: false,
            segments: line.iter().map(Segment::new).collect(),
        }
    }

    /// The first endpoint.
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// The second endpoint.
    pub fn end(&self) -> Coordinate {
        self.end
    }

    /// Number of segments (decks) in this vessel.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the vessel has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns true once every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    /// Number of segments that have been hit.
    pub fn hits(&self) -> usize {
        self.segments.iter().filter(|s| !s.is_alive()).count()
    }

    /// The segments of this vessel, ordered along its axis.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Get an iterator over the cells this vessel occupies.
    pub fn coords(&self) -> impl '_ + Iterator<Item = Coordinate> {
        self.segments.iter().map(Segment::coord)
    }

    /// Find the segment at the given cell, if this vessel occupies it.
    pub fn find_segment<C: Into<Coordinate>>(&self, coord: C) -> Option<&Segment> {
        let coord = coord.into();
        self.segments.iter().find(|s| s.coord() == coord)
    }

    /// Hit the segment at the given cell and return this vessel so the caller can check
    /// whether it sank. Hitting an already-hit segment changes nothing. A cell this
    /// vessel does not occupy is ignored; this never reports a miss, and never sinks a
    /// vessel without segments.
    pub fn fire<C: Into<Coordinate>>(&mut self, coord: C) -> &Self {
        let coord = coord.into();
        if let Some(segment) = self.segments.iter_mut().find(|s| s.coord() == coord) {
            segment.destroy();
            self.sunk = self.segments.iter().all(|s| !s.is_alive());
        }
        self
    }
}
