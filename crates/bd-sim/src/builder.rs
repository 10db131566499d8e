//! Fluent builder for constructing a [`BoardingSim`].

use bd_agent::Manifest;
use bd_cabin::SeatMap;
use bd_core::{BoardingConfig, SimRng};

use crate::{BoardingSim, SimError, SimResult};

/// Fluent builder for [`BoardingSim`].
///
/// # Required inputs
///
/// - [`BoardingConfig`]: cabin size, timings, bag probability, seed.
///
/// # Optional inputs (have defaults)
///
/// | Method                    | Default                                        |
/// |---------------------------|------------------------------------------------|
/// | `.manifest(m)`            | Drawn from the config with `SimRng::new(seed)` |
/// | `.rng(r)`                 | `SimRng::new(config.seed)`                     |
/// | `.snapshot_interval(n)`   | 1 (every tick); 0 disables snapshots           |
///
/// A supplied manifest replaces the seat draw entirely: `order` and
/// `bag_probability` are then ignored.
///
/// # Example
///
/// ```rust
/// use bd_core::BoardingConfig;
/// use bd_sim::{NoopObserver, SimBuilder};
///
/// let config = BoardingConfig { rows: 5, seats_per_row: 4, ..Default::default() };
/// let mut sim = SimBuilder::new(config).build().unwrap();
/// let report = sim.run(&mut NoopObserver).unwrap();
/// assert_eq!(report.seated, 20);
/// ```
pub struct SimBuilder {
    config:            BoardingConfig,
    manifest:          Option<Manifest>,
    rng:               Option<SimRng>,
    snapshot_interval: u64,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(config: BoardingConfig) -> Self {
        Self {
            config,
            manifest:          None,
            rng:               None,
            snapshot_interval: 1,
        }
    }

    /// Board this exact list instead of drawing one.
    ///
    /// If `config.passengers` is set it must equal the manifest length.
    pub fn manifest(mut self, manifest: Manifest) -> Self {
        self.manifest = Some(manifest);
        self
    }

    /// Draw the manifest from `rng` instead of a fresh one seeded from the
    /// config.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Emit a snapshot every `n` ticks (0 = never).
    pub fn snapshot_interval(mut self, n: u64) -> Self {
        self.snapshot_interval = n;
        self
    }

    /// Validate inputs, assign seats and return a ready-to-run
    /// [`BoardingSim`].
    pub fn build(self) -> SimResult<BoardingSim> {
        self.config.validate()?;
        let map = SeatMap::from_config(&self.config)?;

        // ── Resolve the manifest ──────────────────────────────────────────
        let manifest = match self.manifest {
            Some(m) => {
                if let Some(expected) = self.config.passengers
                    .map(|n| n as usize)
                    .filter(|&n| n != m.len())
                {
                    return Err(SimError::PassengerCountMismatch {
                        expected,
                        got:  m.len(),
                        what: "manifest",
                    });
                }
                m
            }
            None => {
                let mut rng = self.rng.unwrap_or_else(|| SimRng::new(self.config.seed));
                Manifest::generate(&self.config, &map, &mut rng)?
            }
        };

        let passengers = manifest.into_passengers(&map)?;
        log::debug!(
            "boarding {} passengers into {} rows × {} seats",
            passengers.len(),
            map.rows(),
            map.seats_per_row(),
        );
        for p in &passengers {
            log::trace!(
                "passenger {} has seat {} and {}",
                p.id.0,
                p.seat.0,
                if p.has_bag { "a carry-on" } else { "no carry-on" },
            );
        }

        Ok(BoardingSim::new(self.config, map, passengers, self.snapshot_interval))
    }
}
