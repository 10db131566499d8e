//! Seat assignment: the boarding-order manifest.
//!
//! # Usage
//!
//! ```rust
//! use bd_agent::Manifest;
//! use bd_cabin::SeatMap;
//! use bd_core::{BoardingConfig, SimRng};
//!
//! let config = BoardingConfig { rows: 4, seats_per_row: 4, ..Default::default() };
//! let map = SeatMap::from_config(&config).unwrap();
//! let mut rng = SimRng::new(config.seed);
//!
//! let manifest = Manifest::generate(&config, &map, &mut rng).unwrap();
//! let passengers = manifest.into_passengers(&map).unwrap();
//! assert_eq!(passengers.len(), 16);
//! ```

use std::collections::HashMap;

use bd_cabin::SeatMap;
use bd_core::{BoardingConfig, BoardingOrder, PassengerId, SeatId, SimRng};

use crate::{AssignError, AssignResult, Passenger};

/// Seed offset of the child stream used for the carry-on draws.
const BAG_STREAM: u64 = 1;

/// One boarding slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ManifestEntry {
    pub seat:    SeatId,
    pub has_bag: bool,
}

/// Boarding-order list of `(seat, bag)` entries.  Entry 0 boards first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Manifest {
    pub entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// Wrap a hand-written list.  Checked by [`validate`](Self::validate).
    pub fn from_entries(entries: Vec<ManifestEntry>) -> Self {
        Self { entries }
    }

    /// Draw a manifest for `config.passenger_count()` passengers.
    ///
    /// Seats are a uniform sample without replacement
    /// ([`BoardingOrder::Random`]) or seats `0, 1, 2, …`
    /// ([`BoardingOrder::Sequential`]).  Every passenger then gets one
    /// independent Bernoulli draw with `config.bag_probability`.  The bag
    /// draws come from a child stream split off before seat sampling, so the
    /// same seed gives the same bag flags in either order.
    pub fn generate(
        config: &BoardingConfig,
        map:    &SeatMap,
        rng:    &mut SimRng,
    ) -> AssignResult<Self> {
        let seats = map.seat_count();
        let count = config.passenger_count() as usize;
        if count > seats as usize {
            return Err(AssignError::TooManyPassengers { passengers: count, seats });
        }

        let mut bag_rng = rng.child(BAG_STREAM);
        let order: Vec<usize> = match config.order {
            BoardingOrder::Random => rng.sample_indices(seats as usize, count),
            BoardingOrder::Sequential => (0..count).collect(),
        };

        let entries = order
            .into_iter()
            .map(|seat| ManifestEntry {
                seat:    SeatId(seat as u32),
                has_bag: bag_rng.gen_bool(config.bag_probability),
            })
            .collect();
        Ok(Self { entries })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Passengers carrying a bag.
    pub fn bag_count(&self) -> usize {
        self.entries.iter().filter(|e| e.has_bag).count()
    }

    /// Check that every seat exists in `map` and is assigned only once.
    pub fn validate(&self, map: &SeatMap) -> AssignResult<()> {
        let seats = map.seat_count();
        if self.entries.len() > seats as usize {
            return Err(AssignError::TooManyPassengers {
                passengers: self.entries.len(),
                seats,
            });
        }
        let mut holder: HashMap<SeatId, PassengerId> = HashMap::with_capacity(self.entries.len());
        for (slot, entry) in self.entries.iter().enumerate() {
            map.position(entry.seat)?;
            let id = PassengerId::from_slot(slot);
            if let Some(first) = holder.insert(entry.seat, id) {
                return Err(AssignError::DuplicateSeat {
                    seat:   entry.seat,
                    first:  first.0,
                    second: id.0,
                });
            }
        }
        Ok(())
    }

    /// Validate and create one [`Passenger`] per entry, ids `1..=len`.
    pub fn into_passengers(self, map: &SeatMap) -> AssignResult<Vec<Passenger>> {
        self.validate(map)?;
        self.entries
            .into_iter()
            .enumerate()
            .map(|(slot, entry)| {
                let pos = map.position(entry.seat)?;
                Ok(Passenger::new(PassengerId::from_slot(slot), entry.seat, pos, entry.has_bag))
            })
            .collect()
    }
}
