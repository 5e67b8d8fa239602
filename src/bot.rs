//! The bot's two strategies: autonomous fleet placement and shot selection.

use std::collections::BTreeSet;

use rand::Rng;

use crate::common::PlacementError;
use crate::config::GameConfig;
use crate::game::{Game, Player};
use crate::placement::PlacementValidator;
use crate::ship::{Coordinate, Orientation, Ship, ShipKind};

/// Produces a full valid fleet with no human input.
pub struct BotPlacer {
    config: GameConfig,
    validator: PlacementValidator,
}

impl BotPlacer {
    pub fn new(config: GameConfig) -> Self {
        let validator = PlacementValidator::new(config.clone());
        Self { config, validator }
    }

    /// Place the whole fleet, numbering ships upwards from `first_id`.
    pub fn place_fleet<R: Rng>(
        &self,
        rng: &mut R,
        first_id: u32,
    ) -> Result<Vec<Ship>, PlacementError> {
        let mut fleet: Vec<Ship> = Vec::with_capacity(self.config.fleet_size());
        while let Some(kind) = self.next_kind(&fleet) {
            let id = first_id + fleet.len() as u32;
            let ship = self.place_one(rng, id, kind, &fleet)?;
            fleet.push(ship);
        }
        Ok(fleet)
    }

    // Largest hulls first; they are the hardest to fit once the board
    // fills up.
    fn next_kind(&self, placed: &[Ship]) -> Option<ShipKind> {
        for kind in [
            ShipKind::AircraftCarrier,
            ShipKind::Battleship,
            ShipKind::Destroyer,
            ShipKind::Submarine,
        ] {
            let required = self.config.required_count(kind) as usize;
            let count = placed.iter().filter(|ship| ship.kind == kind).count();
            if count < required {
                return Some(kind);
            }
        }
        None
    }

    /// Pick a random orientation, then scan the shrunk anchor grid in
    /// wrapped row-major order from a random starting offset. Every anchor
    /// is visited exactly once, so exhaustion means the configuration
    /// cannot be satisfied.
    fn place_one<R: Rng>(
        &self,
        rng: &mut R,
        id: u32,
        kind: ShipKind,
        placed: &[Ship],
    ) -> Result<Ship, PlacementError> {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let span = kind.length() - 1;
        let (max_x, max_y) = match orientation {
            Orientation::Horizontal => (
                self.config.width().saturating_sub(span),
                self.config.height(),
            ),
            Orientation::Vertical => (
                self.config.width(),
                self.config.height().saturating_sub(span),
            ),
        };
        if max_x == 0 || max_y == 0 {
            return Err(PlacementError::Unplaceable);
        }

        let rand_x = rng.random_range(0..max_x) as u16;
        let rand_y = rng.random_range(0..max_y) as u16;
        for ix in 0..max_x as u16 {
            let x = ((rand_x + ix) % max_x as u16) as u8 + 1;
            for iy in 0..max_y as u16 {
                let y = ((rand_y + iy) % max_y as u16) as u8 + 1;
                let ship = Ship::new(id, kind, orientation, Coordinate::new(x, y));
                if self.validator.is_placement_valid(&ship, placed) {
                    return Ok(ship);
                }
            }
        }
        Err(PlacementError::Unplaceable)
    }
}

/// Chooses the bot's next shot against the human side, biased towards ship
/// cells by the game's difficulty.
pub struct BotGunner {
    config: GameConfig,
}

impl BotGunner {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Pick the next target. Draws 1-100 against the difficulty's accuracy
    /// to decide between untried ship cells and untried water, falling back
    /// to whichever set still has cells. Returns `None` only once the bot
    /// has tried the entire board.
    pub fn choose_target<R: Rng>(&self, rng: &mut R, game: &Game) -> Option<Coordinate> {
        let tried = game.shots_by(Player::Bot);
        let untried_ships: BTreeSet<Coordinate> = game
            .human
            .ship_cells()
            .difference(&tried)
            .copied()
            .collect();
        let untried_water: BTreeSet<Coordinate> = game
            .human
            .water_cells(&self.config)
            .difference(&tried)
            .copied()
            .collect();

        let roll: u8 = rng.random_range(1..=100);
        let pool = if roll <= game.difficulty.accuracy() && !untried_ships.is_empty() {
            &untried_ships
        } else if !untried_water.is_empty() {
            &untried_water
        } else {
            &untried_ships
        };
        if pool.is_empty() {
            return None;
        }
        pool.iter().nth(rng.random_range(0..pool.len())).copied()
    }
}
