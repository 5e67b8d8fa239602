//! Ship definitions and cell geometry.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A board cell, 1-indexed from the top-left corner. Ordered so cell sets
/// can live in `BTreeSet`s and random selection over them is reproducible
/// under a seeded RNG.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Coordinate {
    pub x: u8,
    pub y: u8,
}

impl Coordinate {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Ship classes and their fixed lengths.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ShipKind {
    Submarine,
    Destroyer,
    Battleship,
    AircraftCarrier,
}

impl ShipKind {
    pub const ALL: [ShipKind; 4] = [
        ShipKind::Submarine,
        ShipKind::Destroyer,
        ShipKind::Battleship,
        ShipKind::AircraftCarrier,
    ];

    pub fn length(self) -> u8 {
        match self {
            ShipKind::Submarine => 1,
            ShipKind::Destroyer => 2,
            ShipKind::Battleship => 3,
            ShipKind::AircraftCarrier => 4,
        }
    }
}

/// A placed ship. The anchor is the lowest-indexed occupied cell; the rest
/// of the hull extends along the orientation axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    pub id: u32,
    pub kind: ShipKind,
    pub orientation: Orientation,
    pub anchor: Coordinate,
    pub sunk: bool,
}

impl Ship {
    pub fn new(id: u32, kind: ShipKind, orientation: Orientation, anchor: Coordinate) -> Self {
        Self {
            id,
            kind,
            orientation,
            anchor,
            sunk: false,
        }
    }

    /// The cells this ship occupies.
    pub fn cells(&self) -> BTreeSet<Coordinate> {
        occupied_cells(self.orientation, self.kind, self.anchor)
    }

    /// The occupied cells plus their full 8-neighbour ring: the zone no
    /// other ship may touch.
    pub fn clearance_cells(&self) -> BTreeSet<Coordinate> {
        let mut cells = BTreeSet::new();
        for cell in self.cells() {
            for dx in -1i16..=1 {
                for dy in -1i16..=1 {
                    let x = cell.x as i16 + dx;
                    let y = cell.y as i16 + dy;
                    if x < 0 || y < 0 {
                        continue;
                    }
                    cells.insert(Coordinate::new(x as u8, y as u8));
                }
            }
        }
        cells
    }

    /// Whether `coord` lies on this ship's hull.
    pub fn contains(&self, coord: Coordinate) -> bool {
        let len = self.kind.length() as u16;
        match self.orientation {
            Orientation::Horizontal => {
                coord.y == self.anchor.y
                    && coord.x >= self.anchor.x
                    && (coord.x as u16) < self.anchor.x as u16 + len
            }
            Orientation::Vertical => {
                coord.x == self.anchor.x
                    && coord.y >= self.anchor.y
                    && (coord.y as u16) < self.anchor.y as u16 + len
            }
        }
    }
}

/// Cells occupied by a ship of `kind` anchored at `anchor`, extending along
/// `orientation` in increasing x (horizontal) or y (vertical).
pub fn occupied_cells(
    orientation: Orientation,
    kind: ShipKind,
    anchor: Coordinate,
) -> BTreeSet<Coordinate> {
    (0..kind.length())
        .map(|i| match orientation {
            Orientation::Horizontal => Coordinate::new(anchor.x + i, anchor.y),
            Orientation::Vertical => Coordinate::new(anchor.x, anchor.y + i),
        })
        .collect()
}
