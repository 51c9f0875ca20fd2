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
//! Rules for which ships make up a fleet.
//!
//! The standard fleet is four single-deck ships, three double-deck ships, two
//! three-deck ships and one four-deck ship, ten ships in total.
use std::collections::BTreeMap;

use crate::board::Coordinate;

#[cfg(feature = "rng_gen")]
pub use self::random::random_fleet;

#[cfg(feature = "rng_gen")]
mod random;

/// The two endpoints of a ship, as supplied when building a [`Board`][crate::Board].
pub type VesselSpec = (Coordinate, Coordinate);

/// Required number of ships for each ship length.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FleetRules {
    /// Mapping of ship length to how many ships of that length the fleet needs.
    counts: BTreeMap<usize, usize>,
}

impl FleetRules {
    /// Build rules from `(length, count)` pairs. Counts given for the same length add
    /// up. Panics if any length is 0.
    pub fn new<I: IntoIterator<Item = (usize, usize)>>(pairs: I) -> Self {
        let mut counts = BTreeMap::new();
        for (length, count) in pairs {
            assert!(length > 0, "ship length must be nonzero");
            *counts.entry(length).or_insert(0) += count;
        }
        Self { counts }
    }

    /// The standard ten-ship fleet.
    pub fn standard() -> Self {
        Self::new(vec![(1, 4), (2, 3), (3, 2), (4, 1)])
    }

    /// Total number of ships in the fleet.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of ships of the given length the fleet needs.
    pub fn count(&self, length: usize) -> usize {
        self.counts.get(&length).copied().unwrap_or(0)
    }

    /// Iterate `(length, count)` pairs, shortest ships first.
    pub fn iter(&self) -> impl '_ + Iterator<Item = (usize, usize)> {
        self.counts.iter().map(|(&length, &count)| (length, count))
    }

    /// Iterate the length of every ship in the fleet, longest first.
    pub fn lengths(&self) -> impl '_ + Iterator<Item = usize> {
        self.counts
            .iter()
            .rev()
            .flat_map(|(&length, &count)| std::iter::repeat(length).take(count))
    }
}

impl Default for FleetRules {
    /// The standard ten-ship fleet.
    fn default() -> Self {
        Self::standard()
    }
}
