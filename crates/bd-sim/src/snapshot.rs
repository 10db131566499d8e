//! Read-only views handed to observers.

use bd_agent::{Passenger, PassengerState, Status};
use bd_core::{PassengerId, Tick};

/// Where a passenger is, for drawing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Position {
    /// Still queued at the door.
    Outside,
    /// Standing in the aisle at `row`.
    Aisle { row: u32 },
    /// Sitting in the seat at grid `(row, column)`.
    Seat { row: u32, column: u32 },
}

impl Position {
    pub fn of(p: &Passenger) -> Self {
        match p.state {
            PassengerState::EnRoute { row: None } => Position::Outside,
            PassengerState::EnRoute { row: Some(row) } => Position::Aisle { row },
            PassengerState::InRow { .. } | PassengerState::Waiting { .. } => {
                Position::Aisle { row: p.seat_pos.row }
            }
            PassengerState::Seated => Position::Seat {
                row:    p.seat_pos.row,
                column: p.seat_pos.column,
            },
        }
    }
}

/// One passenger in a [`TickSnapshot`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassengerView {
    pub id:       PassengerId,
    pub status:   Status,
    pub position: Position,
}

impl From<&Passenger> for PassengerView {
    fn from(p: &Passenger) -> Self {
        Self {
            id:       p.id,
            status:   p.status,
            position: Position::of(p),
        }
    }
}

/// End-of-tick state of every passenger, in boarding order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickSnapshot {
    pub tick:       Tick,
    pub passengers: Vec<PassengerView>,
}

impl TickSnapshot {
    pub fn capture(tick: Tick, passengers: &[Passenger]) -> Self {
        Self {
            tick,
            passengers: passengers.iter().map(PassengerView::from).collect(),
        }
    }

    /// Passengers showing `status`.
    pub fn count(&self, status: Status) -> usize {
        self.passengers.iter().filter(|v| v.status == status).count()
    }
}

/// Counters for one processed tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickSummary {
    pub tick:     Tick,
    /// Passengers that stepped forward in the aisle.
    pub moved:    usize,
    /// Passengers that could not step forward.
    pub blocked:  usize,
    pub stowing:  usize,
    pub waiting:  usize,
    /// Passengers that sat down this tick.
    pub seated:   usize,
    /// Passengers still standing after the tick.
    pub unseated: usize,
}

/// Totals for a finished (or interrupted) run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardingReport {
    /// Ticks processed.
    pub ticks:         u64,
    pub passengers:    usize,
    pub seated:        usize,
    pub with_bags:     usize,
    /// Passenger-ticks spent stowing bags.
    pub stow_ticks:    u64,
    /// Passenger-ticks spent waiting for neighbours.
    pub wait_ticks:    u64,
    /// Passenger-ticks spent unable to move forward.
    pub blocked_ticks: u64,
}

impl BoardingReport {
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.seated == self.passengers
    }
}
