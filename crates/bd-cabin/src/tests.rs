//! Unit tests for bd-cabin.
//!
//! All tests use hand-sized cabins so expected coordinates can be written out.

#[cfg(test)]
mod seat_map_tests {
    use std::collections::HashSet;

    use bd_core::{BdError, BoardingConfig, SeatId};
    use proptest::prelude::*;

    use crate::{SeatMap, SeatPosition, Side};

    #[test]
    fn six_abreast_layout() {
        // 20 rows × 6: aisle at grid column 3.
        let map = SeatMap::new(20, 6).unwrap();
        assert_eq!(map.aisle_column(), 3);
        assert_eq!(map.grid_width(), 7);
        assert_eq!(map.seat_count(), 120);

        // Seat 0 is the left window seat of the farthest row.
        assert_eq!(map.row_of(SeatId(0)), 19);
        assert_eq!(map.column_of(SeatId(0)), 0);
        // Seat 3 is the first seat right of the aisle.
        assert_eq!(map.column_of(SeatId(3)), 4);
        assert_eq!(map.column_of(SeatId(5)), 6);
        // Seat 6 starts the next row towards the door.
        assert_eq!(map.row_of(SeatId(6)), 18);
        assert_eq!(map.row_of(SeatId(119)), 0);
    }

    #[test]
    fn odd_width_puts_extra_seat_right() {
        let map = SeatMap::new(1, 5).unwrap();
        assert_eq!(map.aisle_column(), 2);
        let cols: Vec<u32> = map.seats().map(|s| map.column_of(s)).collect();
        assert_eq!(cols, vec![0, 1, 3, 4, 5]);
    }

    #[test]
    fn single_seat_rows_sit_right_of_aisle() {
        let map = SeatMap::new(3, 1).unwrap();
        assert_eq!(map.aisle_column(), 0);
        assert_eq!(map.column_of(SeatId(0)), 1);
        assert_eq!(map.side_of(1), Some(Side::Right));
    }

    #[test]
    fn checked_position() {
        let map = SeatMap::new(2, 4).unwrap();
        assert_eq!(map.position(SeatId(0)).unwrap(), SeatPosition { row: 1, column: 0 });
        assert_eq!(map.position(SeatId(7)).unwrap(), SeatPosition { row: 0, column: 4 });
        assert!(matches!(
            map.position(SeatId(8)),
            Err(BdError::InvalidSeat { seats: 8, .. })
        ));
    }

    #[test]
    fn sides() {
        let map = SeatMap::new(1, 6).unwrap();
        assert_eq!(map.side_of(0), Some(Side::Left));
        assert_eq!(map.side_of(2), Some(Side::Left));
        assert_eq!(map.side_of(3), None);
        assert_eq!(map.side_of(4), Some(Side::Right));
    }

    #[test]
    fn rejects_empty_cabin() {
        assert!(SeatMap::new(0, 6).is_err());
        assert!(SeatMap::new(20, 0).is_err());
    }

    #[test]
    fn from_config_uses_dimensions() {
        let cfg = BoardingConfig { rows: 3, seats_per_row: 4, ..Default::default() };
        let map = SeatMap::from_config(&cfg).unwrap();
        assert_eq!((map.rows(), map.seats_per_row()), (3, 4));
    }

    proptest! {
        #[test]
        fn positions_are_unique_and_never_in_aisle(rows in 1u32..40, per_row in 1u32..12) {
            let map = SeatMap::new(rows, per_row).unwrap();
            let mut seen = HashSet::new();
            for seat in map.seats() {
                let pos = map.position(seat).unwrap();
                prop_assert!(pos.row < rows);
                prop_assert!(pos.column < map.grid_width());
                prop_assert_ne!(pos.column, map.aisle_column());
                prop_assert!(seen.insert(pos), "duplicate position {:?}", pos);
                // Pure: a second lookup agrees.
                prop_assert_eq!(map.position(seat).unwrap(), pos);
            }
            prop_assert_eq!(seen.len() as u32, map.seat_count());
        }
    }
}

#[cfg(test)]
mod aisle_tests {
    use crate::AisleOccupancy;

    #[test]
    fn starts_empty() {
        let aisle = AisleOccupancy::new(4);
        assert_eq!(aisle.rows(), 4);
        assert_eq!(aisle.occupied_count(), 0);
        assert!((0..4).all(|r| aisle.is_free(r)));
    }

    #[test]
    fn entering_from_the_door() {
        let mut aisle = AisleOccupancy::new(3);
        assert!(aisle.try_move(None, 0));
        assert!(aisle.is_occupied(0));
        // A second passenger cannot share the slot.
        assert!(!aisle.try_move(None, 0));
        assert_eq!(aisle.occupied_count(), 1);
    }

    #[test]
    fn moving_releases_previous_row() {
        let mut aisle = AisleOccupancy::new(3);
        assert!(aisle.try_move(None, 0));
        assert!(aisle.try_move(Some(0), 1));
        assert_eq!(aisle.as_slice(), &[false, true, false]);
    }

    #[test]
    fn blocked_move_changes_nothing() {
        let mut aisle = AisleOccupancy::new(3);
        assert!(aisle.try_move(None, 0));
        assert!(aisle.try_move(Some(0), 1));
        assert!(aisle.try_move(None, 0));
        assert!(!aisle.try_move(Some(0), 1));
        assert_eq!(aisle.as_slice(), &[true, true, false]);
    }

    #[test]
    fn rows_past_the_end_are_never_free() {
        let mut aisle = AisleOccupancy::new(2);
        assert!(!aisle.is_free(2));
        assert!(!aisle.try_move(Some(1), 2));
        aisle.vacate(5);
        assert_eq!(aisle.occupied_count(), 0);
    }
}

#[cfg(test)]
mod seat_grid_tests {
    use bd_core::SeatId;

    use crate::{SeatGrid, SeatMap, SeatPosition};

    fn grid_6() -> SeatGrid {
        SeatGrid::new(SeatMap::new(2, 6).unwrap())
    }

    #[test]
    fn occupancy_is_recorded() {
        let mut grid = grid_6();
        let pos = grid.map().position(SeatId(4)).unwrap();
        assert!(!grid.is_occupied(pos.row, pos.column));
        grid.occupy(pos);
        assert!(grid.is_occupied(pos.row, pos.column));
        assert_eq!(grid.occupied_count(), 1);
    }

    #[test]
    fn aisle_seats_never_obstruct() {
        let mut grid = grid_6();
        // Window seat passenger, nobody seated yet.
        assert_eq!(grid.obstruction_count(SeatPosition { row: 0, column: 0 }), 0);
        // The window seat being taken does not block the aisle seat.
        grid.occupy(SeatPosition { row: 0, column: 0 });
        assert_eq!(grid.obstruction_count(SeatPosition { row: 0, column: 2 }), 0);
    }

    #[test]
    fn left_side_counts_between_seat_and_aisle() {
        let mut grid = grid_6();
        grid.occupy(SeatPosition { row: 1, column: 1 });
        grid.occupy(SeatPosition { row: 1, column: 2 });
        assert_eq!(grid.obstruction_count(SeatPosition { row: 1, column: 0 }), 2);
        assert_eq!(grid.obstruction_count(SeatPosition { row: 1, column: 1 }), 1);
        // Other rows are unaffected.
        assert_eq!(grid.obstruction_count(SeatPosition { row: 0, column: 0 }), 0);
    }

    #[test]
    fn right_side_counts_between_aisle_and_seat() {
        let mut grid = grid_6();
        grid.occupy(SeatPosition { row: 0, column: 4 });
        assert_eq!(grid.obstruction_count(SeatPosition { row: 0, column: 6 }), 1);
        grid.occupy(SeatPosition { row: 0, column: 5 });
        assert_eq!(grid.obstruction_count(SeatPosition { row: 0, column: 6 }), 2);
        // Seats on the far side of the aisle never count.
        grid.occupy(SeatPosition { row: 0, column: 2 });
        assert_eq!(grid.obstruction_count(SeatPosition { row: 0, column: 6 }), 2);
    }
}
