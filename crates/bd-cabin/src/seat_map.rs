//! Static seat geometry.
//!
//! A seat index is split into a row and a *grid* column.  The grid is one
//! column wider than a row of seats because the aisle occupies column
//! `half = seats_per_row / 2`; seats whose in-row offset is `≥ half` are
//! shifted one column right to skip it.
//!
//! Rows are reflected so that seat 0 lies in the row farthest from the door:
//! boarding in seat order fills the cabin from the rear forward.

use bd_core::{BdError, BdResult, BoardingConfig, SeatId};

/// Which side of the aisle a seat is on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Left,
    Right,
}

/// Grid coordinates of one seat.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatPosition {
    pub row:    u32,
    pub column: u32,
}

/// Immutable cabin layout.  Cheap to copy.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatMap {
    rows:          u32,
    seats_per_row: u32,
}

impl SeatMap {
    /// Build a layout of `rows` rows of `seats_per_row` seats.
    pub fn new(rows: u32, seats_per_row: u32) -> BdResult<Self> {
        if rows == 0 || seats_per_row == 0 {
            return Err(BdError::Config(format!(
                "cabin needs at least one row and one seat per row, got {rows}×{seats_per_row}"
            )));
        }
        if rows.checked_mul(seats_per_row).is_none() {
            return Err(BdError::Config(format!(
                "{rows} rows of {seats_per_row} seats overflows the seat index"
            )));
        }
        Ok(Self { rows, seats_per_row })
    }

    /// Layout described by `config`.
    pub fn from_config(config: &BoardingConfig) -> BdResult<Self> {
        Self::new(config.rows, config.seats_per_row)
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn seats_per_row(&self) -> u32 {
        self.seats_per_row
    }

    #[inline]
    pub fn seat_count(&self) -> u32 {
        self.rows * self.seats_per_row
    }

    /// Grid column reserved for the aisle.
    #[inline]
    pub fn aisle_column(&self) -> u32 {
        self.seats_per_row / 2
    }

    /// Width of the grid including the aisle column.
    #[inline]
    pub fn grid_width(&self) -> u32 {
        self.seats_per_row + 1
    }

    #[inline]
    pub fn contains(&self, seat: SeatId) -> bool {
        seat.0 < self.seat_count()
    }

    /// Row of `seat`.  `seat` must be in range.
    #[inline]
    pub fn row_of(&self, seat: SeatId) -> u32 {
        debug_assert!(self.contains(seat), "{seat} outside cabin");
        self.rows - 1 - seat.0 / self.seats_per_row
    }

    /// Grid column of `seat`, never equal to the aisle column.  `seat` must
    /// be in range.
    #[inline]
    pub fn column_of(&self, seat: SeatId) -> u32 {
        debug_assert!(self.contains(seat), "{seat} outside cabin");
        let col = seat.0 % self.seats_per_row;
        if col >= self.aisle_column() { col + 1 } else { col }
    }

    /// Checked lookup of both coordinates.
    pub fn position(&self, seat: SeatId) -> BdResult<SeatPosition> {
        if !self.contains(seat) {
            return Err(BdError::InvalidSeat { seat, seats: self.seat_count() });
        }
        Ok(SeatPosition {
            row:    self.row_of(seat),
            column: self.column_of(seat),
        })
    }

    /// Side of the aisle a grid column lies on.  `None` for the aisle itself.
    #[inline]
    pub fn side_of(&self, column: u32) -> Option<Side> {
        let aisle = self.aisle_column();
        match column {
            c if c < aisle => Some(Side::Left),
            c if c > aisle => Some(Side::Right),
            _ => None,
        }
    }

    /// Iterate over every seat id in index order.
    pub fn seats(&self) -> impl Iterator<Item = SeatId> + use<> {
        (0..self.seat_count()).map(SeatId)
    }
}
