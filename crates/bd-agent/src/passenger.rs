//! Per-passenger state.
//!
//! # State machine
//!
//! ```text
//!   EnRoute{row} ──(reaches own row)──▶ InRow{stow_countdown}
//!                                          │ bag pending: countdown ticks, then stow
//!                                          ▼
//!                                       InRow{None} ──(obstructed)──▶ Waiting{remaining}
//!                                          │                               │ 0
//!                                          └────────(clear)────────▶ Seated ◀┘
//! ```
//!
//! The state carries everything the transition rules branch on.  The
//! display [`Status`] is kept beside it because it is *per tick*: a passenger
//! whose last stow tick just ran shows `Stowing` for that tick even though
//! its state already says the bag is away.

use bd_cabin::SeatPosition;
use bd_core::{PassengerId, SeatId, Tick};

// ── Status ────────────────────────────────────────────────────────────────────

/// What a passenger did during the last tick, for renderers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Walking, blocked in the aisle, or just arrived at the row.
    #[default]
    EnRoute,
    /// Putting a bag in the overhead bin.
    Stowing,
    /// Waiting for seated neighbours to let them in.
    Waiting,
    /// Sitting in the assigned seat.  Terminal.
    Seated,
}

// ── PassengerState ────────────────────────────────────────────────────────────

/// Logical state driving the per-tick transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PassengerState {
    /// Not yet in the assigned row.  `row` is the aisle row currently
    /// occupied, `None` while still at the door.
    EnRoute { row: Option<u32> },

    /// Standing in the assigned row.  `stow_countdown` is `Some(n)` while a
    /// bag is still in hand: `n` more countdown ticks, then one tick for the
    /// stow itself.  `None` once the bag is away (or there never was one).
    InRow { stow_countdown: Option<u32> },

    /// Waiting for neighbours; seats once `remaining` reaches 0.
    Waiting { remaining: u32 },

    /// Seated.  Terminal.
    Seated,
}

// ── Passenger ─────────────────────────────────────────────────────────────────

/// One passenger, created from a manifest entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passenger {
    /// Boarding position, 1-based.
    pub id: PassengerId,
    pub seat: SeatId,
    /// Grid coordinates of `seat`.
    pub seat_pos: SeatPosition,
    pub has_bag: bool,
    pub state: PassengerState,
    /// Display status for the most recent tick.
    pub status: Status,
    /// Wait computed from the obstruction rule, once it has been computed.
    pub wait_penalty: Option<u32>,
    /// Tick on which the passenger sat down.
    pub seated_at: Option<Tick>,
}

impl Passenger {
    /// A passenger standing at the door.
    pub fn new(id: PassengerId, seat: SeatId, seat_pos: SeatPosition, has_bag: bool) -> Self {
        Self {
            id,
            seat,
            seat_pos,
            has_bag,
            state: PassengerState::EnRoute { row: None },
            status: Status::EnRoute,
            wait_penalty: None,
            seated_at: None,
        }
    }

    /// Aisle row the passenger stands in; `None` at the door.  Seated
    /// passengers report their seat row.
    #[inline]
    pub fn current_row(&self) -> Option<u32> {
        match self.state {
            PassengerState::EnRoute { row } => row,
            _ => Some(self.seat_pos.row),
        }
    }

    /// `true` once the passenger stands in (or sits in) the assigned row.
    #[inline]
    pub fn in_row(&self) -> bool {
        !matches!(self.state, PassengerState::EnRoute { .. })
    }

    /// `true` if no bag is waiting to be stowed.
    #[inline]
    pub fn bag_stowed(&self) -> bool {
        match self.state {
            PassengerState::EnRoute { .. } => !self.has_bag,
            PassengerState::InRow { stow_countdown } => stow_countdown.is_none(),
            PassengerState::Waiting { .. } | PassengerState::Seated => true,
        }
    }

    #[inline]
    pub fn is_seated(&self) -> bool {
        matches!(self.state, PassengerState::Seated)
    }

    /// Remaining wait timer; 0 outside the waiting state.
    #[inline]
    pub fn wait_timer(&self) -> u32 {
        match self.state {
            PassengerState::Waiting { remaining } => remaining,
            _ => 0,
        }
    }
}
