//! One player's side of the game: their ships and the water around them.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::ship::{Coordinate, Ship};

/// A player's board. Ship identities are unique within a side; order is
/// irrelevant to the rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Side {
    ships: Vec<Ship>,
}

impl Side {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn set_ships(&mut self, ships: Vec<Ship>) {
        self.ships = ships;
    }

    /// True while no ships have been placed.
    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Union of every ship's occupied cells.
    pub fn ship_cells(&self) -> BTreeSet<Coordinate> {
        self.ships.iter().flat_map(|ship| ship.cells()).collect()
    }

    /// Board complement of `ship_cells`.
    pub fn water_cells(&self, config: &GameConfig) -> BTreeSet<Coordinate> {
        let occupied = self.ship_cells();
        let mut water = BTreeSet::new();
        for x in 1..=config.width() {
            for y in 1..=config.height() {
                let coord = Coordinate::new(x, y);
                if !occupied.contains(&coord) {
                    water.insert(coord);
                }
            }
        }
        water
    }

    /// The ship occupying `coord`, if any. Ships never overlap, so the
    /// first match is the only match.
    pub fn ship_at(&self, coord: Coordinate) -> Option<&Ship> {
        self.ships.iter().find(|ship| ship.contains(coord))
    }

    pub fn ship_by_id(&self, id: u32) -> Option<&Ship> {
        self.ships.iter().find(|ship| ship.id == id)
    }

    pub fn ship_by_id_mut(&mut self, id: u32) -> Option<&mut Ship> {
        self.ships.iter_mut().find(|ship| ship.id == id)
    }

    /// Returns `true` when all ships are sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(|ship| ship.sunk)
    }
}
