//! The per-tick passenger transition.
//!
//! [`advance`] is the only place passenger state changes.  It is called once
//! per unseated passenger per tick, in boarding order, and reads the aisle and
//! seat grid as left by the passengers processed before it in the same tick.

use bd_agent::{Passenger, PassengerState, Status};
use bd_cabin::{AisleOccupancy, SeatGrid};
use bd_core::BoardingConfig;

/// Timing parameters of the transition rules.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rules {
    /// Ticks of waiting per seated passenger in the way.
    pub wait_multiplier: u32,
    /// Ticks spent in `Stowing` by a passenger with a bag.  At least 1.
    pub stow_steps: u32,
}

impl Rules {
    pub fn from_config(config: &BoardingConfig) -> Self {
        Self {
            wait_multiplier: config.wait_multiplier,
            stow_steps:      config.stow_steps,
        }
    }
}

/// What one passenger did during one tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Stepped into aisle row `row`; `arrived` if that is the assigned row.
    Moved { row: u32, arrived: bool },
    /// The next aisle slot was taken.
    Blocked,
    /// Bag countdown ticked; `remaining` countdown ticks before the stow.
    Stowing { remaining: u32 },
    /// Bag went into the bin this tick.
    Stowed,
    /// Wait timer was set (on the first waiting tick) or ticked down.
    Waiting { remaining: u32 },
    /// Sat down.
    Seated,
    /// Already seated; nothing to do.
    Idle,
}

/// Apply one tick of the state machine to `p`.
pub fn advance(
    p:     &mut Passenger,
    aisle: &mut AisleOccupancy,
    seats: &mut SeatGrid,
    rules: &Rules,
) -> Transition {
    // The display status is per tick: whatever `p` did last tick is over.
    p.status = Status::EnRoute;

    match p.state {
        PassengerState::EnRoute { row } => {
            let next = row.map_or(0, |r| r + 1);
            if !aisle.try_move(row, next) {
                return Transition::Blocked;
            }
            let arrived = next == p.seat_pos.row;
            p.state = if arrived {
                PassengerState::InRow {
                    stow_countdown: p.has_bag.then(|| rules.stow_steps.saturating_sub(1)),
                }
            } else {
                PassengerState::EnRoute { row: Some(next) }
            };
            Transition::Moved { row: next, arrived }
        }

        PassengerState::InRow { stow_countdown: Some(0) } => {
            p.state = PassengerState::InRow { stow_countdown: None };
            p.status = Status::Stowing;
            Transition::Stowed
        }

        PassengerState::InRow { stow_countdown: Some(n) } => {
            p.state = PassengerState::InRow { stow_countdown: Some(n - 1) };
            p.status = Status::Stowing;
            Transition::Stowing { remaining: n - 1 }
        }

        PassengerState::InRow { stow_countdown: None } => {
            let penalty = seats
                .obstruction_count(p.seat_pos)
                .saturating_mul(rules.wait_multiplier);
            p.wait_penalty = Some(penalty);
            settle(p, penalty, aisle, seats)
        }

        PassengerState::Waiting { remaining } => settle(p, remaining, aisle, seats),

        PassengerState::Seated => {
            p.status = Status::Seated;
            Transition::Idle
        }
    }
}

/// Sit down if the wait timer has run out, otherwise wait one more tick.
fn settle(
    p:     &mut Passenger,
    timer: u32,
    aisle: &mut AisleOccupancy,
    seats: &mut SeatGrid,
) -> Transition {
    if timer == 0 {
        seats.occupy(p.seat_pos);
        aisle.vacate(p.seat_pos.row);
        p.state = PassengerState::Seated;
        p.status = Status::Seated;
        Transition::Seated
    } else {
        p.state = PassengerState::Waiting { remaining: timer - 1 };
        p.status = Status::Waiting;
        Transition::Waiting { remaining: timer - 1 }
    }
}
