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
//! Types that make up the game board.

use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    fmt,
};

use crate::{fleet::FleetRules, ships::Vessel};

use self::rectangular::RectDimensions;
pub use self::{
    common::{Coordinate, Neighbors},
    errors::{FleetError, GeometryReason, InvalidGeometry},
};

pub mod common;
mod errors;
pub mod rectangular;

/// Handle to one of the vessels owned by a [`Board`]. Only meaningful for the board
/// that issued it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct VesselId(usize);

impl VesselId {
    /// Position of the vessel in the list the board was built from.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Result of firing at a single cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FireResult {
    /// No vessel occupies the cell.
    Miss,
    /// The cell belongs to a vessel that still has undamaged segments.
    Hit,
    /// The cell belongs to a vessel with no undamaged segments left.
    Sunk,
}

impl fmt::Display for FireResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            FireResult::Miss => "Miss!",
            FireResult::Hit => "Hit!",
            FireResult::Sunk => "Sunk!",
        })
    }
}

/// What a single cell of the board shows.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CellState {
    /// No vessel here.
    Water,
    /// An undamaged segment of a vessel that is still afloat.
    Ship,
    /// A damaged segment of a vessel that is still afloat.
    Hit,
    /// Any segment of a sunk vessel.
    Sunk,
}

impl CellState {
    /// Character used for this state when rendering the board.
    pub fn glyph(self) -> char {
        match self {
            CellState::Water => '~',
            CellState::Ship => '\u{25A1}',
            CellState::Hit => '*',
            CellState::Sunk => 'x',
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = [0; 4];
        f.pad(self.glyph().encode_utf8(&mut buf))
    }
}

/// Represents a single player's board: the fleet and the side of the ocean it sits in.
#[derive(Debug, Clone)]
pub struct Board {
    /// Size of the rendered grid.
    dim: RectDimensions,

    /// Every vessel, in the order given at construction.
    vessels: Vec<Vessel>,

    /// Which vessel occupies each cell. Where vessels overlap, the one given last wins.
    cells: HashMap<Coordinate, VesselId>,
}

impl Board {
    /// Build a 10x10 board holding one vessel per `(start, end)` pair. Fails if any pair
    /// is neither on a single row nor a single column, or has an endpoint off the board.
    ///
    /// Endpoints are taken in the order given: a pair whose end comes before its start
    /// makes a vessel with no segments. Such a vessel still counts towards the fleet
    /// size but occupies no cells.
    ///
    /// Overlapping vessels are not an error here: the later vessel takes over the shared
    /// cells, and the earlier one is only known to [`validate`][Board::validate] through
    /// the cells it still holds.
    pub fn new<I, C>(specs: I) -> Result<Self, InvalidGeometry>
    where
        I: IntoIterator<Item = (C, C)>,
        C: Into<Coordinate>,
    {
        let dim = RectDimensions::default();
        let vessels = specs
            .into_iter()
            .map(|(start, end)| {
                let (start, end): (Coordinate, Coordinate) = (start.into(), end.into());
                if !dim.contains(start) || !dim.contains(end) {
                    return Err(InvalidGeometry::new(GeometryReason::OutOfBounds, start, end));
                }
                Vessel::new(start, end)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut cells = HashMap::new();
        for (idx, vessel) in vessels.iter().enumerate() {
            let id = VesselId(idx);
            if vessel.is_empty() {
                tracing::warn!(
                    vessel = idx,
                    start = %vessel.start(),
                    end = %vessel.end(),
                    "vessel endpoints are reversed, it occupies no cells"
                );
            }
            for coord in vessel.coords() {
                if let Some(previous) = cells.insert(coord, id) {
                    tracing::warn!(
                        cell = %coord,
                        previous = previous.index(),
                        current = id.index(),
                        "vessels overlap, keeping the later one"
                    );
                }
            }
        }
        tracing::trace!(vessels = vessels.len(), cells = cells.len(), "built board");

        Ok(Self {
            dim,
            vessels,
            cells,
        })
    }

    /// Get the [`RectDimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &RectDimensions {
        &self.dim
    }

    /// Number of vessels the board was built with.
    pub fn len(&self) -> usize {
        self.vessels.len()
    }

    /// Returns true if the board was built without any vessels.
    pub fn is_empty(&self) -> bool {
        self.vessels.is_empty()
    }

    /// Get an iterator over all vessels on this board, in construction order.
    pub fn vessels(&self) -> impl '_ + Iterator<Item = (VesselId, &Vessel)> {
        self.vessels
            .iter()
            .enumerate()
            .map(|(idx, vessel)| (VesselId(idx), vessel))
    }

    /// Get the vessel with the specified ID if it exists.
    pub fn vessel(&self, id: VesselId) -> Option<&Vessel> {
        self.vessels.get(id.0)
    }

    /// Get the vessel occupying the given cell, if any.
    pub fn vessel_at<C: Into<Coordinate>>(&self, coord: C) -> Option<&Vessel> {
        self.cells
            .get(&coord.into())
            .and_then(|&id| self.vessel(id))
    }

    /// Get what the given cell shows. Returns `None` if the coordinate is outside the
    /// board.
    pub fn cell<C: Into<Coordinate>>(&self, coord: C) -> Option<CellState> {
        let coord = coord.into();
        if !self.dim.contains(coord) {
            return None;
        }
        Some(match self.vessel_at(coord) {
            None => CellState::Water,
            Some(vessel) if vessel.is_sunk() => CellState::Sunk,
            Some(vessel) => match vessel.find_segment(coord) {
                Some(segment) if !segment.is_alive() => CellState::Hit,
                _ => CellState::Ship,
            },
        })
    }

    /// Returns true if the board holds at least one vessel and every vessel still
    /// occupying a cell has been sunk.
    pub fn defeated(&self) -> bool {
        let placed = self.placed_vessels();
        !placed.is_empty() && placed.iter().all(|&id| self.vessels[id.0].is_sunk())
    }

    /// Fire at the given cell. Cells no vessel occupies are a [`FireResult::Miss`];
    /// otherwise the owning vessel is hit and the result reports whether it is sunk
    /// afterwards. Firing at the same cell again repeats the current state of the
    /// vessel rather than reporting anything new.
    pub fn fire<C: Into<Coordinate>>(&mut self, coord: C) -> FireResult {
        let coord = coord.into();
        let result = match self.cells.get(&coord) {
            None => FireResult::Miss,
            Some(&id) => {
                if self.vessels[id.0].fire(coord).is_sunk() {
                    FireResult::Sunk
                } else {
                    FireResult::Hit
                }
            }
        };
        tracing::debug!(cell = %coord, ?result, "fired");
        result
    }

    /// Check the fleet against the standard rules. See [`validate_with`][Self::validate_with].
    pub fn validate(&self) -> Result<(), FleetError> {
        self.validate_with(&FleetRules::standard())
    }

    /// Check the fleet against the given rules, reporting the first violation found:
    ///
    /// 1. the board must hold exactly as many vessels as the rules require;
    /// 2. the vessels still occupying cells must have the required lengths, checked
    ///    shortest first;
    /// 3. no two vessels may occupy touching cells, diagonals included.
    pub fn validate_with(&self, rules: &FleetRules) -> Result<(), FleetError> {
        if self.vessels.len() != rules.total() {
            return Err(FleetError::FleetSize {
                expected: rules.total(),
                found: self.vessels.len(),
            });
        }

        let mut found_lengths = BTreeMap::new();
        for id in self.placed_vessels() {
            *found_lengths.entry(self.vessels[id.0].len()).or_insert(0) += 1;
        }
        for (length, expected) in rules.iter() {
            let found = found_lengths.remove(&length).unwrap_or(0);
            if found != expected {
                return Err(FleetError::FleetComposition {
                    length,
                    expected,
                    found,
                });
            }
        }
        if let Some((&length, &found)) = found_lengths.iter().next() {
            return Err(FleetError::FleetComposition {
                length,
                expected: 0,
                found,
            });
        }

        let mut occupied: Vec<_> = self.cells.iter().collect();
        occupied.sort_unstable_by_key(|&(coord, _)| *coord);
        for (&cell, &id) in occupied {
            for neighbor in cell.neighbors() {
                match self.cells.get(&neighbor) {
                    Some(&other) if other != id => {
                        return Err(FleetError::Adjacency { cell, neighbor });
                    }
                    _ => {}
                }
            }
        }

        tracing::debug!(vessels = self.vessels.len(), "fleet is valid");
        Ok(())
    }

    /// Render the board as text: one line per row, each cell's glyph followed by a
    /// space.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.dim.total_size() * 4 + self.dim.rows());
        for row in self.dim.iter_coordinates() {
            for coord in row {
                out.push(self.cell(coord).unwrap_or(CellState::Water).glyph());
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }

    /// The distinct vessels still occupying at least one cell.
    fn placed_vessels(&self) -> BTreeSet<VesselId> {
        self.cells.values().copied().collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::VesselSpec;

    fn c(row: usize, column: usize) -> Coordinate {
        Coordinate::new(row, column)
    }

    fn spec(a: (usize, usize), b: (usize, usize)) -> VesselSpec {
        (c(a.0, a.1), c(b.0, b.1))
    }

    /// A legal standard fleet.
    fn standard_fleet() -> Vec<VesselSpec> {
        vec![
            spec((0, 0), (0, 3)),
            spec((2, 0), (2, 2)),
            spec((2, 4), (2, 6)),
            spec((4, 0), (4, 1)),
            spec((4, 3), (4, 4)),
            spec((4, 6), (4, 7)),
            spec((6, 0), (6, 0)),
            spec((6, 2), (6, 2)),
            spec((6, 4), (6, 4)),
            spec((6, 6), (6, 6)),
        ]
    }

    #[test]
    fn valid_fleet_passes() {
        let board = Board::new(standard_fleet()).unwrap();
        assert_eq!(board.len(), 10);
        assert_eq!(board.validate(), Ok(()));
    }

    #[test]
    fn invalid_geometry_aborts_construction() {
        let mut fleet = standard_fleet();
        fleet.push(spec((8, 8), (9, 9)));
        let err = Board::new(fleet).unwrap_err();
        assert_eq!(err.reason(), GeometryReason::NotStraight);
        assert_eq!((err.start(), err.end()), (c(8, 8), c(9, 9)));
    }

    #[test]
    fn endpoints_off_the_board_are_rejected() {
        let err = Board::new(vec![spec((0, 0), (0, usize::max_value()))]).unwrap_err();
        assert_eq!(err.reason(), GeometryReason::OutOfBounds);
        assert_eq!(err.end(), c(0, usize::max_value()));

        let mut fleet = standard_fleet();
        fleet[9] = spec((10, 0), (10, 0));
        let err = Board::new(fleet).unwrap_err();
        assert_eq!(err.reason(), GeometryReason::OutOfBounds);
        assert_eq!(
            err.to_string(),
            "vessel endpoints (10, 0) and (10, 0) are outside the board"
        );
    }

    #[test]
    fn reversed_vessel_occupies_no_cells() {
        let mut fleet = standard_fleet();
        fleet[0] = spec((0, 3), (0, 0));
        let mut board = Board::new(fleet).unwrap();
        assert_eq!(board.len(), 10);
        assert!(board.vessel(VesselId(0)).unwrap().is_empty());
        assert_eq!(
            board.validate(),
            Err(FleetError::FleetComposition {
                length: 4,
                expected: 1,
                found: 0
            })
        );
        assert_eq!(board.cell(c(0, 1)), Some(CellState::Water));
        assert_eq!(board.fire(c(0, 1)), FireResult::Miss);
        assert_eq!(board.fire(c(0, 3)), FireResult::Miss);
    }

    #[test]
    fn wrong_fleet_size() {
        let mut fleet = standard_fleet();
        fleet.pop();
        let board = Board::new(fleet).unwrap();
        assert_eq!(
            board.validate(),
            Err(FleetError::FleetSize {
                expected: 10,
                found: 9
            })
        );
    }

    #[test]
    fn size_is_checked_before_composition() {
        let board = Board::new(vec![spec((0, 0), (0, 4))]).unwrap();
        assert!(matches!(
            board.validate(),
            Err(FleetError::FleetSize { found: 1, .. })
        ));
    }

    #[test]
    fn five_single_deck_ships() {
        let mut fleet = standard_fleet();
        // Swap a three-deck ship for a single.
        fleet[2] = spec((8, 8), (8, 8));
        let board = Board::new(fleet).unwrap();
        assert_eq!(
            board.validate(),
            Err(FleetError::FleetComposition {
                length: 1,
                expected: 4,
                found: 5
            })
        );
    }

    #[test]
    fn unexpected_length_fails_composition() {
        let mut fleet = standard_fleet();
        // Replace the four-deck ship with a five-deck one.
        fleet[0] = spec((0, 0), (0, 4));
        let board = Board::new(fleet).unwrap();
        assert_eq!(
            board.validate(),
            Err(FleetError::FleetComposition {
                length: 4,
                expected: 1,
                found: 0
            })
        );
    }

    #[test]
    fn overlap_hides_the_earlier_vessel() {
        let mut fleet = standard_fleet();
        // A single placed on top of a cell of the four-deck ship.
        fleet[9] = spec((0, 1), (0, 1));
        let board = Board::new(fleet).unwrap();
        assert_eq!(board.len(), 10);
        assert_eq!(board.vessel_at(c(0, 1)).unwrap().len(), 1);
        assert_eq!(board.vessel_at(c(0, 0)).unwrap().len(), 4);
        // The four-deck ship keeps three cells, so only the spacing check notices.
        assert_eq!(
            board.validate(),
            Err(FleetError::Adjacency {
                cell: c(0, 0),
                neighbor: c(0, 1)
            })
        );
    }

    #[test]
    fn fully_covered_vessel_disappears_from_the_count() {
        let mut fleet = standard_fleet();
        // The last single sits exactly where the first single is.
        fleet[9] = spec((6, 0), (6, 0));
        let board = Board::new(fleet).unwrap();
        assert_eq!(
            board.validate(),
            Err(FleetError::FleetComposition {
                length: 1,
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn diagonal_contact_is_adjacency() {
        let mut fleet = standard_fleet();
        fleet[9] = spec((7, 7), (7, 7));
        fleet[8] = spec((8, 8), (8, 8));
        let board = Board::new(fleet).unwrap();
        assert_eq!(
            board.validate(),
            Err(FleetError::Adjacency {
                cell: c(7, 7),
                neighbor: c(8, 8)
            })
        );
    }

    #[test]
    fn adjacency_reports_first_cell_in_row_major_order() {
        let mut fleet = standard_fleet();
        // Sits right below the three-deck ship at (2, 4)-(2, 6).
        fleet[3] = spec((3, 4), (3, 5));
        let board = Board::new(fleet).unwrap();
        assert_eq!(
            board.validate(),
            Err(FleetError::Adjacency {
                cell: c(2, 4),
                neighbor: c(3, 4)
            })
        );
    }

    #[test]
    fn gap_of_one_cell_is_allowed() {
        let mut fleet = standard_fleet();
        fleet[9] = spec((8, 8), (8, 8));
        fleet[8] = spec((8, 6), (8, 6));
        let board = Board::new(fleet).unwrap();
        assert_eq!(board.validate(), Ok(()));
    }

    #[test]
    fn fire_outcomes() {
        let mut board = Board::new(standard_fleet()).unwrap();
        assert_eq!(board.fire(c(9, 9)), FireResult::Miss);
        assert_eq!(board.fire(c(4, 0)), FireResult::Hit);
        assert_eq!(board.fire(c(4, 0)), FireResult::Hit);
        assert_eq!(board.fire(c(4, 1)), FireResult::Sunk);
        assert_eq!(board.fire(c(4, 1)), FireResult::Sunk);
        assert_eq!(board.fire(c(4, 0)), FireResult::Sunk);
        assert_eq!(board.fire(c(6, 6)), FireResult::Sunk);
        assert_eq!(board.fire(c(42, 42)), FireResult::Miss);
    }

    #[test]
    fn fire_result_strings() {
        assert_eq!(FireResult::Miss.to_string(), "Miss!");
        assert_eq!(FireResult::Hit.to_string(), "Hit!");
        assert_eq!(FireResult::Sunk.to_string(), "Sunk!");
    }

    #[test]
    fn cell_states() {
        let mut board = Board::new(standard_fleet()).unwrap();
        board.fire(c(2, 0));
        board.fire(c(6, 0));
        assert_eq!(board.cell(c(9, 9)), Some(CellState::Water));
        assert_eq!(board.cell(c(2, 1)), Some(CellState::Ship));
        assert_eq!(board.cell(c(2, 0)), Some(CellState::Hit));
        assert_eq!(board.cell(c(6, 0)), Some(CellState::Sunk));
        assert_eq!(board.cell(c(10, 0)), None);
    }

    #[test]
    fn render_grid() {
        let mut board = Board::new(standard_fleet()).unwrap();
        board.fire(c(0, 0));
        board.fire(c(6, 0));
        board.fire(c(5, 5));
        let rendered = board.render();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "* \u{25A1} \u{25A1} \u{25A1} ~ ~ ~ ~ ~ ~ ");
        assert_eq!(lines[1], "~ ~ ~ ~ ~ ~ ~ ~ ~ ~ ");
        assert_eq!(lines[6], "x ~ \u{25A1} ~ \u{25A1} ~ \u{25A1} ~ ~ ~ ");
        assert!(rendered.ends_with('\n'));
        assert_eq!(board.to_string(), rendered);
    }

    #[test]
    fn defeated_once_every_vessel_sinks() {
        let mut board = Board::new(standard_fleet()).unwrap();
        let cells: Vec<_> = board
            .vessels()
            .flat_map(|(_, vessel)| vessel.coords().collect::<Vec<_>>())
            .collect();
        let (last, rest) = cells.split_last().unwrap();
        for &coord in rest {
            board.fire(coord);
        }
        assert!(!board.defeated());
        assert_eq!(board.fire(*last), FireResult::Sunk);
        assert!(board.defeated());
    }

    #[test]
    fn empty_board_is_not_defeated() {
        let board = Board::new(Vec::<VesselSpec>::new()).unwrap();
        assert!(board.is_empty());
        assert!(!board.defeated());
        assert_eq!(
            board.validate(),
            Err(FleetError::FleetSize {
                expected: 10,
                found: 0
            })
        );
    }

    #[test]
    fn custom_rules() {
        let rules = FleetRules::new(vec![(2, 1), (1, 1)]);
        let board = Board::new(vec![spec((0, 0), (0, 1)), spec((2, 2), (2, 2))]).unwrap();
        assert_eq!(board.validate_with(&rules), Ok(()));
    }

    #[test]
    fn vessel_ids_follow_construction_order() {
        let board = Board::new(standard_fleet()).unwrap();
        let (id, vessel) = board.vessels().nth(3).unwrap();
        assert_eq!(id.index(), 3);
        assert_eq!(board.vessel(id), Some(vessel));
        assert_eq!(vessel.start(), c(4, 0));
    }
}
