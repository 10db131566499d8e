//! Framework error type.
//!
//! Sub-crates define their own error enums and convert `BdError` into them
//! via `From` impls.

use thiserror::Error;

use crate::SeatId;

/// The top-level error type for `bd-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum BdError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("seat {seat} is outside the cabin ({seats} seats)")]
    InvalidSeat { seat: SeatId, seats: u32 },
}

/// Shorthand result type for all `bd-*` crates.
pub type BdResult<T> = Result<T, BdError>;
