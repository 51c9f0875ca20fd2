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
//! Random placement of a legal fleet.
use std::collections::HashSet;

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::{
    board::{rectangular::RectDimensions, Coordinate},
    fleet::{FleetRules, VesselSpec},
    ships::{Line, Orientation},
};

/// Attempts at placing a single ship before the whole fleet is started over.
const PLACEMENT_ATTEMPTS: usize = 200;

/// Times the whole fleet is started over before giving up.
const FLEET_ATTEMPTS: usize = 100;

impl Distribution<Orientation> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// Generate endpoints for a fleet following `rules` that fits inside `dim` with no two
/// ships touching, diagonals included. Ships are placed longest first. Returns `None`
/// if no such fleet was found, which for the standard fleet on a 10x10 grid does not
/// happen in practice.
pub fn random_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    rules: &FleetRules,
    dim: &RectDimensions,
) -> Option<Vec<VesselSpec>> {
    for attempt in 0..FLEET_ATTEMPTS {
        if let Some(fleet) = try_place_fleet(rng, rules, dim) {
            tracing::debug!(attempt, ships = fleet.len(), "placed random fleet");
            return Some(fleet);
        }
    }
    tracing::warn!(attempts = FLEET_ATTEMPTS, "unable to place a random fleet");
    None
}

/// Make a single pass at placing every ship.
fn try_place_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    rules: &FleetRules,
    dim: &RectDimensions,
) -> Option<Vec<VesselSpec>> {
    let mut occupied: HashSet<Coordinate> = HashSet::new();
    let mut fleet = Vec::with_capacity(rules.total());
    'ships: for len in rules.lengths() {
        for _ in 0..PLACEMENT_ATTEMPTS {
            let line = match random_line(rng, len, dim) {
                Some(line) => line,
                None => continue,
            };
            let touches = line
                .iter()
                .any(|c| occupied.contains(&c) || c.neighbors().any(|n| occupied.contains(&n)));
            if !touches {
                occupied.extend(line.iter());
                fleet.push((line.start(), line.end()));
                continue 'ships;
            }
        }
        return None;
    }
    Some(fleet)
}

/// Pick a random line of the given length that fits inside the dimensions. Returns
/// `None` if the ship is too long to fit in the orientation chosen.
fn random_line<R: Rng + ?Sized>(rng: &mut R, len: usize, dim: &RectDimensions) -> Option<Line> {
    let orientation: Orientation = rng.gen();
    let extra = len.checked_sub(1)?;
    let (rows, columns) = match orientation {
        Orientation::Horizontal => (dim.rows(), dim.columns().checked_sub(extra)?),
        Orientation::Vertical => (dim.rows().checked_sub(extra)?, dim.columns()),
    };
    if rows == 0 || columns == 0 {
        return None;
    }
    let start = Coordinate::new(rng.gen_range(0, rows), rng.gen_range(0, columns));
    Some(Line::from_origin(start, orientation, len))
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::board::Board;

    #[test]
    fn standard_fleet_validates() {
        let mut rng = StdRng::seed_from_u64(7);
        let dim = RectDimensions::default();
        for _ in 0..20 {
            let fleet = random_fleet(&mut rng, &FleetRules::standard(), &dim).unwrap();
            assert_eq!(fleet.len(), 10);
            assert!(fleet
                .iter()
                .all(|(start, end)| dim.contains(start) && dim.contains(end)));
            let board = Board::new(fleet).unwrap();
            assert_eq!(board.validate(), Ok(()));
        }
    }

    #[test]
    fn same_seed_same_fleet() {
        let dim = RectDimensions::default();
        let rules = FleetRules::standard();
        let a = random_fleet(&mut StdRng::seed_from_u64(42), &rules, &dim);
        let b = random_fleet(&mut StdRng::seed_from_u64(42), &rules, &dim);
        assert_eq!(a, b);
    }

    #[test]
    fn impossible_fleet_gives_up() {
        let mut rng = StdRng::seed_from_u64(1);
        let dim = RectDimensions::new(3, 3);
        assert_eq!(random_fleet(&mut rng, &FleetRules::new(vec![(5, 1)]), &dim), None);
        assert_eq!(random_fleet(&mut rng, &FleetRules::new(vec![(1, 5)]), &dim), None);
    }
}
