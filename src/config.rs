use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ship::{Coordinate, ShipKind};

/// Bot difficulty, expressed as the chance (0-100) that the bot aims at a
/// known ship cell instead of open water.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    VeryEasy,
    Easy,
    Medium,
    Hard,
    VeryHard,
    #[default]
    Unbeatable,
}

impl Difficulty {
    pub fn accuracy(self) -> u8 {
        match self {
            Difficulty::VeryEasy => 0,
            Difficulty::Easy => 20,
            Difficulty::Medium => 40,
            Difficulty::Hard => 60,
            Difficulty::VeryHard => 80,
            Difficulty::Unbeatable => 100,
        }
    }
}

/// Board dimensions and the required number of ships per kind. Every
/// component that needs either receives its own copy at construction, so
/// tests can shrink the board without touching shared state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    width: u8,
    height: u8,
    fleet: BTreeMap<ShipKind, u8>,
}

impl GameConfig {
    pub fn new(width: u8, height: u8, fleet: impl IntoIterator<Item = (ShipKind, u8)>) -> Self {
        Self {
            width,
            height,
            fleet: fleet.into_iter().collect(),
        }
    }

    /// The classic setup: 10x10 board, four submarines, three destroyers,
    /// two battleships and one aircraft carrier per side.
    pub fn standard() -> Self {
        Self::new(
            10,
            10,
            [
                (ShipKind::Submarine, 4),
                (ShipKind::Destroyer, 3),
                (ShipKind::Battleship, 2),
                (ShipKind::AircraftCarrier, 1),
            ],
        )
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Required ship count for `kind`; zero for kinds absent from the table.
    pub fn required_count(&self, kind: ShipKind) -> u8 {
        self.fleet.get(&kind).copied().unwrap_or(0)
    }

    /// Total number of ships one side must field.
    pub fn fleet_size(&self) -> usize {
        self.fleet.values().map(|&n| n as usize).sum()
    }

    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        coord.x >= 1 && coord.x <= self.width && coord.y >= 1 && coord.y <= self.height
    }
}
