//! Strongly typed, zero-cost identifier wrappers.
//!
//! Both IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.
//!
//! The two IDs count from different origins: a `SeatId` is a 0-based seat
//! index (seat 0 is the window seat of the farthest row), while a
//! `PassengerId` is the 1-based boarding position (passenger 1 boards first).

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID": the maximum inner value.
            pub const INVALID: $name = $name(<$inner>::MAX);
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a seat in `[0, rows * seats_per_row)`.
    pub struct SeatId(u32);
}

typed_id! {
    /// Boarding position of a passenger, starting at 1.
    pub struct PassengerId(u32);
}

impl SeatId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl PassengerId {
    /// The id of the passenger boarding in 0-based slot `slot`.
    #[inline(always)]
    pub fn from_slot(slot: usize) -> PassengerId {
        PassengerId(slot as u32 + 1)
    }

    /// 0-based boarding slot, for indexing the passenger `Vec`.
    #[inline(always)]
    pub fn slot(self) -> usize {
        self.0 as usize - 1
    }
}
