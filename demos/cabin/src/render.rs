//! Plain-text cabin renderer.
//!
//! One frame per snapshot, front row first:
//!
//! ```text
//! T3  at the door: 1  seated: 1/4
//!    0 ..:..
//!    1 ..E.#
//! ```
//!
//! `E` en route, `S` stowing a bag, `W` waiting to get in, `#` seated.
//! Empty seats are `.`, the empty aisle is `:`.

use std::fmt::Write as _;
use std::thread;
use std::time::Duration;

use bd_agent::Status;
use bd_cabin::SeatMap;
use bd_sim::{Position, SimObserver, TickSnapshot};

const EMPTY_SEAT:  char = '.';
const EMPTY_AISLE: char = ':';

pub fn status_letter(status: Status) -> char {
    match status {
        Status::EnRoute => 'E',
        Status::Stowing => 'S',
        Status::Waiting => 'W',
        Status::Seated  => '#',
    }
}

/// Draw one snapshot of a cabin laid out as `map`.
pub fn render_frame(map: &SeatMap, snapshot: &TickSnapshot) -> String {
    let aisle = map.aisle_column() as usize;
    let mut grid: Vec<Vec<char>> = (0..map.rows())
        .map(|_| {
            (0..map.grid_width() as usize)
                .map(|c| if c == aisle { EMPTY_AISLE } else { EMPTY_SEAT })
                .collect()
        })
        .collect();

    let mut outside = 0;
    for v in &snapshot.passengers {
        let (row, column) = match v.position {
            Position::Outside => {
                outside += 1;
                continue;
            }
            Position::Aisle { row } => (row as usize, aisle),
            Position::Seat { row, column } => (row as usize, column as usize),
        };
        if let Some(cell) = grid.get_mut(row).and_then(|r| r.get_mut(column)) {
            *cell = status_letter(v.status);
        }
    }

    let mut frame = format!(
        "{}  at the door: {outside}  seated: {}/{}\n",
        snapshot.tick,
        snapshot.count(Status::Seated),
        snapshot.passengers.len(),
    );
    for (row, cells) in grid.iter().enumerate() {
        let line: String = cells.iter().collect();
        let _ = writeln!(frame, "{row:>4} {line}");
    }
    frame
}

/// Prints a frame for every snapshot, pausing `delay` after each.
pub struct TextRenderer {
    map:   SeatMap,
    delay: Duration,
}

impl TextRenderer {
    pub fn new(map: SeatMap, delay: Duration) -> Self {
        Self { map, delay }
    }
}

impl SimObserver for TextRenderer {
    fn on_snapshot(&mut self, snapshot: &TickSnapshot) {
        println!("{}", render_frame(&self.map, snapshot));
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}
