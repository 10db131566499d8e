use bd_agent::AssignError;
use bd_core::BdError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] BdError),

    #[error("seat assignment failed: {0}")]
    Assign(#[from] AssignError),

    #[error("{what} length {got} does not match passenger count {expected}")]
    PassengerCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("boarding not finished after {limit} ticks ({unseated} passengers still standing)")]
    TickLimit { limit: u64, unseated: usize },
}

pub type SimResult<T> = Result<T, SimError>;
