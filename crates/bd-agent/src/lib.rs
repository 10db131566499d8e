//! `bd-agent` — passengers and the boarding-order manifest.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`passenger`]   | `Passenger`, `PassengerState`, `Status`                  |
//! | [`manifest`]    | `Manifest`, `ManifestEntry` (seat assignment)            |
//! | [`error`]       | `AssignError`, `AssignResult<T>`                         |
//!
//! A [`Manifest`] is the one-time setup step: it fixes, in boarding order,
//! which seat each passenger holds and whether they carry a bag.  Turning it
//! into [`Passenger`]s resolves every seat against the cabin's
//! [`SeatMap`](bd_cabin::SeatMap).
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types.   |

pub mod error;
pub mod manifest;
pub mod passenger;


pub use error::{AssignError, AssignResult};
pub use manifest::{Manifest, ManifestEntry};
pub use passenger::{Passenger, PassengerState, Status};
