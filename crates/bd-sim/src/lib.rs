//! `bd-sim` — tick loop orchestrator for the rust_boarding simulator.
//!
//! # Tick loop
//!
//! ```text
//! while any passenger is standing:
//!   ① Advance    — clock.advance(); observer.on_tick_start(tick)
//!   ② Passengers — for each standing passenger, in boarding order:
//!                    EnRoute  → step into the next aisle row if it is free
//!                    InRow    → count down / stow the bag, then compute the
//!                               wait from seated neighbours in the way
//!                    Waiting  → count down, then sit
//!   ③ Report     — observer.on_tick_end(summary), observer.on_snapshot(..)
//! ```
//!
//! Everything is sequential: a passenger processed later in a tick sees the
//! aisle as the earlier ones left it.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bd_core::BoardingConfig;
//! use bd_sim::{LogObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(BoardingConfig::default()).build()?;
//! let report = sim.run(&mut LogObserver::default())?;
//! println!("{} ticks", report.ticks);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod snapshot;
pub mod transition;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{LogObserver, NoopObserver, SimObserver};
pub use sim::BoardingSim;
pub use snapshot::{BoardingReport, PassengerView, Position, TickSnapshot, TickSummary};
pub use transition::{Rules, Transition};
