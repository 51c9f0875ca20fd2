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
//! Errors used by the `Board` and the `Vessel`s placed on it.

use thiserror::Error;

use crate::board::Coordinate;

/// Reason why a pair of endpoints cannot describe a vessel.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum GeometryReason {
    /// The endpoints are neither on one row nor on one column.
    #[error("not on the same row or column")]
    NotStraight,
    /// At least one endpoint lies outside the board.
    #[error("outside the board")]
    OutOfBounds,
}

/// Error returned when a vessel's endpoints do not describe a straight run of cells on
/// the board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("vessel endpoints {start} and {end} are {reason}")]
pub struct InvalidGeometry {
    /// Why the endpoints were rejected.
    reason: GeometryReason,
    /// First endpoint given for the vessel.
    start: Coordinate,
    /// Second endpoint given for the vessel.
    end: Coordinate,
}

impl InvalidGeometry {
    /// Construct an [`InvalidGeometry`] error for the given endpoints.
    pub(crate) fn new(reason: GeometryReason, start: Coordinate, end: Coordinate) -> Self {
        Self { reason, start, end }
    }

    /// Why the endpoints were rejected.
    pub fn reason(&self) -> GeometryReason {
        self.reason
    }

    /// The first endpoint of the rejected vessel.
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// The second endpoint of the rejected vessel.
    pub fn end(&self) -> Coordinate {
        self.end
    }
}

impl From<InvalidGeometry> for (Coordinate, Coordinate) {
    /// Allows retrieving the rejected endpoints from the error with into.
    fn from(err: InvalidGeometry) -> Self {
        (err.start, err.end)
    }
}

/// Reason why a fleet failed validation. Only the first violation found is reported,
/// checking fleet size, then composition, then spacing.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum FleetError {
    /// The fleet did not have the required number of ships.
    #[error("the total number of ships should be {expected}, found {found}")]
    FleetSize {
        /// Number of ships the rules require.
        expected: usize,
        /// Number of ships on the board.
        found: usize,
    },

    /// The number of ships of one length did not match the rules.
    #[error("there should be {expected} ship(s) with {length} deck(s), found {found}")]
    FleetComposition {
        /// Length of the miscounted ships.
        length: usize,
        /// Number of ships of this length the rules require.
        expected: usize,
        /// Number of ships of this length on the board.
        found: usize,
    },

    /// Two different ships occupy touching cells.
    #[error("ships at {cell} and {neighbor} shouldn't be located in neighboring cells")]
    Adjacency {
        /// Cell of the first ship.
        cell: Coordinate,
        /// Touching cell that belongs to a different ship.
        neighbor: Coordinate,
    },
}
