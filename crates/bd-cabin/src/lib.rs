//! `bd-cabin` — single-aisle cabin geometry and occupancy.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`seat_map`]   | `SeatMap` (seat index → grid row/column), `SeatPosition`  |
//! | [`aisle`]      | `AisleOccupancy` (one slot per row, single file)          |
//! | [`seat_grid`]  | `SeatGrid` (monotonic seat occupancy, obstruction count)  |
//!
//! # Grid coordinates
//!
//! ```text
//!            col: 0  1  2 [3] 4  5  6        (seats_per_row = 6, aisle = 3)
//! door ▶ row 0    .  .  .  |  .  .  .
//!        row 1    .  .  .  |  .  .  .
//!          …
//!        row 19   0  1  2  |  3  4  5   ◀ seats 0..6 (farthest from the door)
//! ```
//!
//! Passengers enter the aisle at row 0 and walk towards higher rows.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod aisle;
pub mod seat_grid;
pub mod seat_map;

#[cfg(test)]
mod tests;

pub use aisle::AisleOccupancy;
pub use seat_grid::SeatGrid;
pub use seat_map::{SeatMap, SeatPosition, Side};
