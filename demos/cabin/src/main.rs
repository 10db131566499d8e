//! boarding — command-line front end for the rust_boarding simulator.
//!
//! Builds a [`BoardingConfig`] from defaults, an optional JSON file and
//! command-line overrides (in that order), runs one boarding to completion
//! and prints how many time steps it took.
//!
//! ```text
//! boarding --rows 30 --seats-per-row 6 --bag-probability 0.6 --seed 7
//! boarding --config cabin.json --render --delay-ms 100
//! RUST_LOG=bd_sim=debug boarding --passengers 10
//! ```

mod render;

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

use bd_core::{BoardingConfig, BoardingOrder, Tick};
use bd_sim::{BoardingReport, LogObserver, SimBuilder, SimObserver, TickSnapshot, TickSummary};

use render::TextRenderer;

// ── Command line ──────────────────────────────────────────────────────────────

/// Simulate passengers boarding a single-aisle aircraft.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with a full or partial configuration.  Flags below override it.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of seat rows.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    rows: Option<u32>,

    /// Seats in each row, split around the aisle.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    seats_per_row: Option<u32>,

    /// Passengers to board.  Defaults to every seat.
    #[arg(short, long)]
    passengers: Option<u32>,

    /// Probability that a passenger carries a bag.
    #[arg(short, long, value_name = "P")]
    bag_probability: Option<f64>,

    /// Ticks of waiting per seated passenger in the way.
    #[arg(long, value_name = "TICKS")]
    wait_multiplier: Option<u32>,

    /// Ticks spent stowing a bag.
    #[arg(long, value_name = "TICKS", value_parser = clap::value_parser!(u32).range(1..))]
    stow_steps: Option<u32>,

    /// Board in seat order instead of a random permutation.
    #[arg(long)]
    sequential: bool,

    /// RNG seed.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Give up after this many ticks.
    #[arg(long, value_name = "TICKS")]
    max_ticks: Option<u64>,

    /// Draw the cabin after every tick.
    #[arg(short, long)]
    render: bool,

    /// Pause between rendered frames.
    #[arg(long, value_name = "MILLISECONDS", default_value_t = 0, requires = "render")]
    delay_ms: u64,

    /// Log a tick summary every this many ticks (with -vv).
    #[arg(long, value_name = "TICKS", default_value_t = 1)]
    log_interval: u64,

    /// Print the final report as JSON.
    #[arg(long)]
    json: bool,

    /// Print the resolved configuration as JSON and exit.
    #[arg(long)]
    print_config: bool,

    /// More log output (-v info, -vv debug, -vvv trace).  `RUST_LOG` wins.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Defaults, then the config file, then flags.
    fn resolve_config(&self) -> Result<BoardingConfig> {
        let mut config = match &self.config {
            Some(path) => {
                log::info!("loading configuration from {}", path.display());
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => BoardingConfig::default(),
        };

        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(seats) = self.seats_per_row {
            config.seats_per_row = seats;
        }
        if self.passengers.is_some() {
            config.passengers = self.passengers;
        }
        if let Some(p) = self.bag_probability {
            config.bag_probability = p;
        }
        if let Some(m) = self.wait_multiplier {
            config.wait_multiplier = m;
        }
        if let Some(s) = self.stow_steps {
            config.stow_steps = s;
        }
        if self.sequential {
            config.order = BoardingOrder::Sequential;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if self.max_ticks.is_some() {
            config.max_ticks = self.max_ticks;
        }
        Ok(config)
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs progress and, when asked, draws the cabin.
struct DemoObserver {
    log:    LogObserver,
    render: Option<TextRenderer>,
}

impl SimObserver for DemoObserver {
    fn on_tick_start(&mut self, tick: Tick) {
        self.log.on_tick_start(tick);
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.log.on_tick_end(summary);
    }

    fn on_snapshot(&mut self, snapshot: &TickSnapshot) {
        if let Some(r) = self.render.as_mut() {
            r.on_snapshot(snapshot);
        }
    }

    fn on_sim_end(&mut self, report: &BoardingReport) {
        self.log.on_sim_end(report);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = args.resolve_config()?;
    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let mut sim = SimBuilder::new(config)
        .snapshot_interval(if args.render { 1 } else { 0 })
        .build()
        .context("invalid configuration")?;

    let cfg = &sim.config;
    println!("=== boarding — rust_boarding ===");
    println!(
        "Rows: {}  |  Seats/row: {}  |  Passengers: {}  |  Bags: {}  |  Seed: {}",
        cfg.rows,
        cfg.seats_per_row,
        sim.passengers.len(),
        sim.passengers.iter().filter(|p| p.has_bag).count(),
        cfg.seed,
    );
    println!();

    let mut observer = DemoObserver {
        log:    LogObserver::new(args.log_interval),
        render: args
            .render
            .then(|| TextRenderer::new(sim.map, Duration::from_millis(args.delay_ms))),
    };

    let t0 = Instant::now();
    let report = sim.run(&mut observer)?;
    let elapsed = t0.elapsed();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} time steps taken to board {} passengers",
        report.ticks, report.passengers
    );
    println!("  with bags      : {}", report.with_bags);
    println!("  stowing ticks  : {}", report.stow_ticks);
    println!("  waiting ticks  : {}", report.wait_ticks);
    println!("  blocked ticks  : {}", report.blocked_ticks);
    if let Some(last) = sim.seated.last() {
        println!("  last seated    : passenger {}", last.0);
    }
    println!("  wall time      : {:.3}s", elapsed.as_secs_f64());
    Ok(())
}
