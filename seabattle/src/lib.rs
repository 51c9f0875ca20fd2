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
//! Single-player Battleship on a 10x10 grid.
//!
//! A [`Board`] is built from the endpoints of each ship. It can then be checked against
//! the fleet rules with [`Board::validate`] and fired at with [`Board::fire`]:
//!
//! ```
//! use seabattle::{Board, Coordinate, FireResult};
//!
//! let c = Coordinate::new;
//! let mut board = Board::new(vec![(c(0, 0), c(0, 1)), (c(5, 5), c(5, 5))]).unwrap();
//! assert_eq!(board.fire(c(0, 0)), FireResult::Hit);
//! assert_eq!(board.fire(c(0, 1)), FireResult::Sunk);
//! assert_eq!(board.fire(c(9, 9)), FireResult::Miss);
//! // Only two ships, so this is not a legal fleet.
//! assert!(board.validate().is_err());
//! ```
//!
//! With the `rng_gen` feature, [`fleet::random_fleet`] generates legal fleets.

pub mod board;
pub mod fleet;
pub mod ships;

pub use crate::{
    board::{
        Board, CellState, Coordinate, FireResult, FleetError, GeometryReason, InvalidGeometry,
        VesselId,
    },
    fleet::{FleetRules, VesselSpec},
    ships::{Segment, Vessel},
};
