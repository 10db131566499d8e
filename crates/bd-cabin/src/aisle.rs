//! Single-file aisle occupancy.
//!
//! The aisle has one slot per seat row.  A slot holds at most one passenger;
//! a passenger standing in its own row (stowing a bag, waiting for others to
//! let it in) keeps its slot until it sits down.

/// One boolean per row: `true` while a passenger stands in that aisle slot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AisleOccupancy {
    slots: Vec<bool>,
}

impl AisleOccupancy {
    /// An empty aisle of `rows` slots.
    pub fn new(rows: u32) -> Self {
        Self { slots: vec![false; rows as usize] }
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.slots.len() as u32
    }

    /// `true` if `row` exists and nobody stands there.
    #[inline]
    pub fn is_free(&self, row: u32) -> bool {
        self.slots.get(row as usize).is_some_and(|&taken| !taken)
    }

    #[inline]
    pub fn is_occupied(&self, row: u32) -> bool {
        self.slots.get(row as usize).copied().unwrap_or(false)
    }

    /// Step from `from` (`None` = still at the door) into `to`.
    ///
    /// Succeeds iff `to` is free.  On success `to` is claimed and `from`
    /// released; on failure nothing changes and the caller stays put.
    pub fn try_move(&mut self, from: Option<u32>, to: u32) -> bool {
        if !self.is_free(to) {
            return false;
        }
        self.slots[to as usize] = true;
        if let Some(prev) = from {
            self.vacate(prev);
        }
        true
    }

    /// Release `row`.  Releasing a free slot is a no-op.
    #[inline]
    pub fn vacate(&mut self, row: u32) {
        if let Some(slot) = self.slots.get_mut(row as usize) {
            *slot = false;
        }
    }

    /// Number of claimed slots.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|&&taken| taken).count()
    }

    /// Raw per-row occupancy, front row first.
    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.slots
    }
}
