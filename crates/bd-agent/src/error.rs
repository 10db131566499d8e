use bd_core::{BdError, SeatId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssignError {
    #[error("{passengers} passengers do not fit in {seats} seats")]
    TooManyPassengers { passengers: usize, seats: u32 },

    #[error("seat {seat} is assigned to passengers {first} and {second}")]
    DuplicateSeat { seat: SeatId, first: u32, second: u32 },

    #[error(transparent)]
    Core(#[from] BdError),
}

pub type AssignResult<T> = Result<T, AssignError>;
