//! Seat occupancy grid and the obstruction rule.
//!
//! Occupancy is monotonic: a seat is marked once, when its passenger sits
//! down, and never released.  This is what makes a wait timer computed once
//! stay correct for the rest of the passenger's wait.

use crate::{SeatMap, SeatPosition, Side};

/// `rows × grid_width` booleans, row-major.  The aisle column is never set.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatGrid {
    map:      SeatMap,
    occupied: Vec<bool>,
}

impl SeatGrid {
    /// An empty grid for `map`.
    pub fn new(map: SeatMap) -> Self {
        let cells = map.rows() as usize * map.grid_width() as usize;
        Self { map, occupied: vec![false; cells] }
    }

    #[inline]
    pub fn map(&self) -> &SeatMap {
        &self.map
    }

    #[inline]
    fn cell(&self, row: u32, column: u32) -> usize {
        row as usize * self.map.grid_width() as usize + column as usize
    }

    /// `true` if a passenger sits at `(row, column)`.  Out-of-grid cells and
    /// the aisle read as empty.
    #[inline]
    pub fn is_occupied(&self, row: u32, column: u32) -> bool {
        if row >= self.map.rows() || column >= self.map.grid_width() {
            return false;
        }
        self.occupied[self.cell(row, column)]
    }

    /// Mark `pos` as taken.
    pub fn occupy(&mut self, pos: SeatPosition) {
        debug_assert_ne!(pos.column, self.map.aisle_column(), "aisle is not a seat");
        let cell = self.cell(pos.row, pos.column);
        self.occupied[cell] = true;
    }

    /// Number of occupied seats.
    pub fn occupied_count(&self) -> usize {
        self.occupied.iter().filter(|&&o| o).count()
    }

    /// Seated passengers between the aisle and `pos`, on `pos`'s side.
    ///
    /// These are the people a passenger heading for `pos` has to climb over.
    pub fn obstruction_count(&self, pos: SeatPosition) -> u32 {
        let aisle = self.map.aisle_column();
        let between = match self.map.side_of(pos.column) {
            Some(Side::Right) => aisle + 1..pos.column,
            Some(Side::Left) => pos.column + 1..aisle,
            None => return 0,
        };
        between
            .filter(|&col| self.is_occupied(pos.row, col))
            .count() as u32
    }
}
