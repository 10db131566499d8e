//! Run configuration.
//!
//! `BoardingConfig` is a plain struct with `pub` fields.  Applications build
//! it in code or deserialize it (feature `serde`) and must call
//! [`BoardingConfig::validate`] before use; `bd-sim`'s builder does so and
//! refuses to construct a simulation from an inconsistent configuration.

use crate::{BdError, BdResult};

// ── BoardingOrder ─────────────────────────────────────────────────────────────

/// How seats are mapped onto the boarding queue.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BoardingOrder {
    /// Seats are a uniform random sample without replacement.
    #[default]
    Random,
    /// Passenger `i + 1` gets seat `i`: window seat of the rear row first.
    Sequential,
}

// ── BoardingConfig ────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// The defaults describe a 737-like cabin: 20 rows of six seats, everyone
/// carrying a bag.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoardingConfig {
    /// Number of seat rows (one aisle slot per row).
    pub rows: u32,

    /// Seats in each row, split around the single aisle.  Odd widths put the
    /// extra seat on the right-hand side.
    pub seats_per_row: u32,

    /// Passengers to board.  `None` fills every seat.
    pub passengers: Option<u32>,

    /// Probability that a passenger carries a bag, in `[0, 1]`.
    pub bag_probability: f64,

    /// Ticks of waiting per seated passenger a boarder has to climb over.
    pub wait_multiplier: u32,

    /// Ticks a passenger spends stowing a bag once in their row.  At least 1.
    pub stow_steps: u32,

    /// Random or sequential seat order.
    pub order: BoardingOrder,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Abort with an error after this many ticks.  `None` runs to completion.
    pub max_ticks: Option<u64>,
}

impl Default for BoardingConfig {
    fn default() -> Self {
        Self {
            rows:            20,
            seats_per_row:   6,
            passengers:      None,
            bag_probability: 1.0,
            wait_multiplier: 2,
            stow_steps:      2,
            order:           BoardingOrder::Random,
            seed:            42,
            max_ticks:       None,
        }
    }
}

impl BoardingConfig {
    /// Total seats in the cabin.
    #[inline]
    pub fn seat_count(&self) -> u32 {
        self.rows * self.seats_per_row
    }

    /// Number of passengers that will board.
    #[inline]
    pub fn passenger_count(&self) -> u32 {
        self.passengers.unwrap_or_else(|| self.seat_count())
    }

    /// Check every parameter; the first inconsistency is returned as
    /// [`BdError::Config`].
    pub fn validate(&self) -> BdResult<()> {
        if self.rows == 0 {
            return Err(BdError::Config("rows must be positive".into()));
        }
        if self.seats_per_row == 0 {
            return Err(BdError::Config("seats_per_row must be positive".into()));
        }
        if self.rows.checked_mul(self.seats_per_row).is_none() {
            return Err(BdError::Config(format!(
                "{} rows of {} seats overflows the seat index",
                self.rows, self.seats_per_row
            )));
        }
        if !(0.0..=1.0).contains(&self.bag_probability) {
            return Err(BdError::Config(format!(
                "bag_probability {} is outside [0, 1]",
                self.bag_probability
            )));
        }
        if self.stow_steps == 0 {
            return Err(BdError::Config("stow_steps must be at least 1".into()));
        }
        if self.passenger_count() > self.seat_count() {
            return Err(BdError::Config(format!(
                "{} passengers do not fit in {} seats",
                self.passenger_count(),
                self.seat_count()
            )));
        }
        Ok(())
    }
}
