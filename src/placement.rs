//! Placement rules: exact fleet counts, board bounds and clearance.

use crate::config::GameConfig;
use crate::ship::{Orientation, Ship, ShipKind};

/// Validates candidate placements against an injected configuration. All
/// checks are pure; the validator never mutates a game.
pub struct PlacementValidator {
    config: GameConfig,
}

impl PlacementValidator {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// True iff every kind is present exactly as often as the fleet table
    /// requires. Not at-least and not at-most.
    pub fn has_required_counts(&self, ships: &[Ship]) -> bool {
        ShipKind::ALL.iter().all(|&kind| {
            let placed = ships.iter().filter(|ship| ship.kind == kind).count();
            placed == self.config.required_count(kind) as usize
        })
    }

    /// The anchor and the far end of the hull must both lie on the board.
    pub fn is_within_bounds(&self, ship: &Ship) -> bool {
        let anchor = ship.anchor;
        if anchor.x < 1 || anchor.y < 1 {
            return false;
        }
        if anchor.x > self.config.width() || anchor.y > self.config.height() {
            return false;
        }
        let span = (ship.kind.length() - 1) as u16;
        match ship.orientation {
            Orientation::Horizontal => anchor.x as u16 + span <= self.config.width() as u16,
            Orientation::Vertical => anchor.y as u16 + span <= self.config.height() as u16,
        }
    }

    /// True iff no other ship occupies the candidate's clearance zone.
    pub fn has_clearance(&self, ship: &Ship, others: &[Ship]) -> bool {
        let clearance = ship.clearance_cells();
        others
            .iter()
            .flat_map(|other| other.cells())
            .all(|cell| !clearance.contains(&cell))
    }

    pub fn is_placement_valid(&self, ship: &Ship, others: &[Ship]) -> bool {
        self.is_within_bounds(ship) && self.has_clearance(ship, others)
    }

    /// The single gate a proposed fleet must pass: correct counts, every
    /// ship in bounds, and each ship clear of all the others.
    pub fn is_fleet_valid(&self, ships: &[Ship]) -> bool {
        if !self.has_required_counts(ships) {
            return false;
        }
        if !ships.iter().all(|ship| self.is_within_bounds(ship)) {
            return false;
        }
        ships.iter().enumerate().all(|(i, ship)| {
            let others: Vec<Ship> = ships
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, other)| *other)
                .collect();
            self.has_clearance(ship, &others)
        })
    }
}
