//! The `BoardingSim` struct and its tick loop.

use bd_agent::Passenger;
use bd_cabin::{AisleOccupancy, SeatGrid, SeatMap};
use bd_core::{BoardingConfig, PassengerId, SimClock, Tick};

use crate::snapshot::{BoardingReport, TickSnapshot, TickSummary};
use crate::transition::{self, Rules, Transition};
use crate::{SimError, SimObserver, SimResult};

/// The boarding simulation.
///
/// `BoardingSim` owns all simulation state; independent runs never share
/// anything.  Each tick:
///
/// 1. The clock advances (the first tick is `T1`).
/// 2. Every passenger that was unseated at the start of the tick is visited
///    exactly once, in boarding order, and [`transition::advance`] is applied.
///    Earlier passengers' moves are visible to later ones in the same tick, so
///    aisle contention is resolved by boarding order.
/// 3. Passengers that sat down move from `unseated` to `seated`.
/// 4. Observers receive the tick summary and, at snapshot intervals, a
///    [`TickSnapshot`].
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct BoardingSim {
    /// The configuration the run was built from.
    pub config: BoardingConfig,

    /// Simulation clock.  After the run it holds the number of ticks taken.
    pub clock: SimClock,

    /// Cabin layout.
    pub map: SeatMap,

    /// Transition timings.
    pub rules: Rules,

    /// Every passenger, indexed by `PassengerId::slot()`.
    pub passengers: Vec<Passenger>,

    /// One slot per row, single file.
    pub aisle: AisleOccupancy,

    /// Seats taken so far.  Never released.
    pub seats: SeatGrid,

    /// Passengers still standing, in boarding order.
    pub unseated: Vec<PassengerId>,

    /// Passengers in the order they sat down.
    pub seated: Vec<PassengerId>,

    /// Emit a snapshot every this many ticks.  0 disables snapshots.
    pub snapshot_interval: u64,

    report: BoardingReport,
}

impl BoardingSim {
    pub(crate) fn new(
        config:            BoardingConfig,
        map:               SeatMap,
        passengers:        Vec<Passenger>,
        snapshot_interval: u64,
    ) -> Self {
        let unseated = passengers.iter().map(|p| p.id).collect();
        let report = BoardingReport {
            passengers: passengers.len(),
            with_bags:  passengers.iter().filter(|p| p.has_bag).count(),
            ..Default::default()
        };
        Self {
            rules: Rules::from_config(&config),
            clock: SimClock::new(),
            aisle: AisleOccupancy::new(map.rows()),
            seats: SeatGrid::new(map),
            seated: Vec::with_capacity(passengers.len()),
            config,
            map,
            passengers,
            unseated,
            snapshot_interval,
            report,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// `true` once every passenger is seated.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.unseated.is_empty()
    }

    /// Look up a passenger by id.
    pub fn passenger(&self, id: PassengerId) -> Option<&Passenger> {
        id.0.checked_sub(1).and_then(|slot| self.passengers.get(slot as usize))
    }

    /// Run until every passenger is seated and return the totals.
    ///
    /// Fails only if `config.max_ticks` is set and reached first.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<BoardingReport> {
        while self.step(observer)?.is_some() {}
        let report = self.report();
        observer.on_sim_end(&report);
        log::info!(
            "{} ticks taken to board {} passengers",
            report.ticks, report.passengers
        );
        Ok(report)
    }

    /// Run at most `n` ticks, stopping early once boarding completes.
    ///
    /// Returns the number of ticks actually processed.  Does not call
    /// [`SimObserver::on_sim_end`].
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<u64> {
        let mut done = 0;
        while done < n && self.step(observer)?.is_some() {
            done += 1;
        }
        Ok(done)
    }

    /// Process one tick.  Returns `None` without touching anything if
    /// boarding is already complete.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Option<TickSummary>> {
        if self.is_complete() {
            return Ok(None);
        }
        match self.config.max_ticks {
            Some(limit) if self.clock.elapsed() >= limit => {
                return Err(SimError::TickLimit {
                    limit,
                    unseated: self.unseated.len(),
                });
            }
            _ => {}
        }

        let now = self.clock.advance();
        observer.on_tick_start(now);
        let summary = self.process_tick(now);
        observer.on_tick_end(&summary);
        if self.snapshot_interval > 0 && now.0.is_multiple_of(self.snapshot_interval) {
            observer.on_snapshot(&self.snapshot());
        }
        Ok(Some(summary))
    }

    /// Current state of every passenger.
    pub fn snapshot(&self) -> TickSnapshot {
        TickSnapshot::capture(self.clock.current_tick, &self.passengers)
    }

    /// Totals so far.
    pub fn report(&self) -> BoardingReport {
        BoardingReport {
            ticks:  self.clock.elapsed(),
            seated: self.seated.len(),
            ..self.report
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick(&mut self, now: Tick) -> TickSummary {
        log::trace!("{now}: {} passengers standing", self.unseated.len());

        // Membership is fixed at the start of the tick: a passenger seated
        // mid-tick is not pushed back, everyone else is, in the same order.
        let boarding = std::mem::take(&mut self.unseated);
        let mut summary = TickSummary { tick: now, ..Default::default() };

        for id in boarding {
            let p = &mut self.passengers[id.slot()];
            let step = transition::advance(p, &mut self.aisle, &mut self.seats, &self.rules);

            match step {
                Transition::Moved { row, arrived } => {
                    summary.moved += 1;
                    log::debug!(
                        "passenger {} (seat {}, row {}) now in row {row}{}",
                        id.0, p.seat.0, p.seat_pos.row,
                        if arrived { ", arrived" } else { "" },
                    );
                }
                Transition::Blocked => {
                    summary.blocked += 1;
                    self.report.blocked_ticks += 1;
                }
                Transition::Stowing { .. } | Transition::Stowed => {
                    summary.stowing += 1;
                    self.report.stow_ticks += 1;
                    log::debug!("passenger {} is stowing their bag", id.0);
                }
                Transition::Waiting { remaining } => {
                    summary.waiting += 1;
                    self.report.wait_ticks += 1;
                    log::debug!("passenger {} is waiting, {} ticks left", id.0, remaining);
                }
                Transition::Seated => {
                    summary.seated += 1;
                    p.seated_at = Some(now);
                    log::debug!("passenger {} seated", id.0);
                }
                Transition::Idle => {}
            }

            if p.is_seated() {
                self.seated.push(id);
            } else {
                self.unseated.push(id);
            }
        }

        summary.unseated = self.unseated.len();
        summary
    }
}
