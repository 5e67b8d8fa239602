use std::collections::BTreeSet;

use flotilla::{occupied_cells, Coordinate, Orientation, Ship, ShipKind};

fn coord(x: u8, y: u8) -> Coordinate {
    Coordinate::new(x, y)
}

#[test]
fn cells_extend_right_from_the_anchor() {
    let ship = Ship::new(1, ShipKind::Battleship, Orientation::Horizontal, coord(3, 4));
    let cells: Vec<Coordinate> = ship.cells().into_iter().collect();
    assert_eq!(cells, vec![coord(3, 4), coord(4, 4), coord(5, 4)]);
}

#[test]
fn cells_extend_down_from_the_anchor() {
    let ship = Ship::new(1, ShipKind::Destroyer, Orientation::Vertical, coord(7, 2));
    let cells: Vec<Coordinate> = ship.cells().into_iter().collect();
    assert_eq!(cells, vec![coord(7, 2), coord(7, 3)]);
}

#[test]
fn cell_count_matches_kind_length() {
    for kind in ShipKind::ALL {
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let ship = Ship::new(1, kind, orientation, coord(1, 1));
            assert_eq!(ship.cells().len(), kind.length() as usize);
        }
    }
}

#[test]
fn cells_are_colinear_and_contiguous() {
    for kind in ShipKind::ALL {
        let ship = Ship::new(1, kind, Orientation::Horizontal, coord(2, 3));
        let cells: Vec<Coordinate> = ship.cells().into_iter().collect();
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(cell.y, 3);
            assert_eq!(cell.x, 2 + i as u8);
        }

        let ship = Ship::new(1, kind, Orientation::Vertical, coord(2, 3));
        let cells: Vec<Coordinate> = ship.cells().into_iter().collect();
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(cell.x, 2);
            assert_eq!(cell.y, 3 + i as u8);
        }
    }
}

#[test]
fn free_function_matches_ship_cells() {
    let ship = Ship::new(9, ShipKind::AircraftCarrier, Orientation::Vertical, coord(6, 2));
    assert_eq!(
        occupied_cells(Orientation::Vertical, ShipKind::AircraftCarrier, coord(6, 2)),
        ship.cells()
    );
}

#[test]
fn clearance_contains_the_hull() {
    for kind in ShipKind::ALL {
        let ship = Ship::new(1, kind, Orientation::Horizontal, coord(4, 4));
        assert!(ship.cells().is_subset(&ship.clearance_cells()));
    }
}

#[test]
fn clearance_is_a_one_cell_ring() {
    let ship = Ship::new(1, ShipKind::Destroyer, Orientation::Horizontal, coord(2, 2));
    let expected: BTreeSet<Coordinate> = (1..=4)
        .flat_map(|x| (1..=3).map(move |y| coord(x, y)))
        .collect();
    assert_eq!(ship.clearance_cells(), expected);
}

#[test]
fn clearance_at_the_corner_still_covers_the_full_ring() {
    // the ring around (1, 1) reaches the zero row and column, which are
    // representable and harmless: no real ship ever occupies them
    let ship = Ship::new(1, ShipKind::Submarine, Orientation::Horizontal, coord(1, 1));
    assert_eq!(ship.clearance_cells().len(), 9);
}

#[test]
fn contains_exactly_the_hull_cells() {
    let ship = Ship::new(1, ShipKind::Battleship, Orientation::Vertical, coord(5, 5));
    for cell in ship.cells() {
        assert!(ship.contains(cell));
    }
    assert!(!ship.contains(coord(5, 4)));
    assert!(!ship.contains(coord(5, 8)));
    assert!(!ship.contains(coord(4, 5)));
    assert!(!ship.contains(coord(6, 6)));
}
