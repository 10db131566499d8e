//! Simulation observer trait for progress reporting and rendering.

use bd_core::Tick;

use crate::snapshot::{BoardingReport, TickSnapshot, TickSummary};

/// Callbacks invoked by [`BoardingSim`][crate::BoardingSim] at key points in
/// the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Every callback runs between ticks; an
/// observer never sees a half-processed tick.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, summary: &TickSummary) {
///         println!("{}: {} still standing", summary.tick, summary.unseated);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any passenger moves.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with that tick's counters.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called at snapshot intervals (every tick by default) with the
    /// position and status of every passenger.
    fn on_snapshot(&mut self, _snapshot: &TickSnapshot) {}

    /// Called once by [`BoardingSim::run`][crate::BoardingSim::run] after
    /// the last passenger sits down.
    fn on_sim_end(&mut self, _report: &BoardingReport) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// A [`SimObserver`] that reports progress through the `log` facade.
///
/// Tick summaries go out at `debug` level every `interval` ticks (every tick
/// when `interval` is 0 or 1); the final report at `info`.
pub struct LogObserver {
    interval: u64,
}

impl LogObserver {
    pub fn new(interval: u64) -> Self {
        Self { interval: interval.max(1) }
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(1)
    }
}

impl SimObserver for LogObserver {
    fn on_tick_end(&mut self, s: &TickSummary) {
        if s.tick.0.is_multiple_of(self.interval) {
            log::debug!(
                "{}: moved {} blocked {} stowing {} waiting {} seated {} | {} standing",
                s.tick, s.moved, s.blocked, s.stowing, s.waiting, s.seated, s.unseated,
            );
        }
    }

    fn on_sim_end(&mut self, r: &BoardingReport) {
        log::info!(
            "all passengers seated: {} ticks to board {} passengers ({} with bags)",
            r.ticks, r.passengers, r.with_bags,
        );
    }
}
