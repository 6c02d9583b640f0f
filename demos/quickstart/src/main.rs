//! quickstart: run two small buildings to completion, headless.
//!
//! 1. A 3-car, 12-floor morning rush with generated passengers, written to
//!    `./output/rush/` as CSV.
//! 2. A hand-written manifest of cross-floor trips replayed under both
//!    dispatch policies, so their metrics can be compared side by side.

use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::{Result, bail};

use lift_core::SimConfig;
use lift_dispatch::{DispatchPolicy, NearestCarDispatch, ScoredDispatch};
use lift_output::{CsvWriter, SimOutputObserver};
use lift_roster::load_manifest_reader;
use lift_sim::{NoopObserver, SimBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:        u64 = 42;
const RUSH_OUTPUT: &str = "output/rush";

// ── Manifest CSV ──────────────────────────────────────────────────────────────

// Afternoon traffic in an 8-floor building: people heading home to the lobby
// plus a few trips between upper floors.
const MANIFEST_CSV: &str = "\
origin_floor,destination_floor\n\
7,0\n\
5,0\n\
6,2\n\
3,0\n\
2,7\n\
4,0\n\
7,1\n\
1,5\n\
6,0\n\
0,4\n\
";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("=== quickstart: lift simulation ===");
    println!();

    morning_rush()?;
    println!();
    compare_policies()?;
    Ok(())
}

fn morning_rush() -> Result<()> {
    let config = SimConfig {
        num_elevators:  3,
        num_floors:     12,
        num_passengers: 40,
        seed:           SEED,
        ..SimConfig::default()
    };
    let mut sim = SimBuilder::new(config.clone(), ScoredDispatch::default()).build()?;

    let out_dir = Path::new(RUSH_OUTPUT);
    fs::create_dir_all(out_dir)?;
    let mut obs = SimOutputObserver::new(CsvWriter::new(out_dir)?, &config);

    let wall = Instant::now();
    let outcome = sim.run(&mut obs);
    if let Some(e) = obs.take_error() {
        bail!("output error: {e}");
    }
    if !outcome.completed {
        bail!("morning rush did not finish within {} ticks", config.max_ticks);
    }

    let snapshot = sim.snapshot();
    println!("Morning rush: {} elevators, {} floors", config.num_elevators, config.num_floors);
    println!("  {} ticks ({}) in {:.1?}", outcome.ticks, sim.clock, wall.elapsed());
    println!("  {}", snapshot.metrics);
    for s in &snapshot.metrics.stops_per_elevator {
        println!("  elevator {:>2}: {:>3} stops", s.id.0, s.stops);
    }
    println!("  CSV written to {}/", out_dir.display());
    println!("  metrics JSON: {}", serde_json::to_string(&snapshot.metrics)?);
    Ok(())
}

fn compare_policies() -> Result<()> {
    let config = SimConfig {
        num_elevators: 2,
        num_floors:    8,
        rush_hour:     false,
        ..SimConfig::default()
    };

    println!("Manifest replay: {} elevators, {} floors", config.num_elevators, config.num_floors);
    replay("scored", &config, ScoredDispatch::default())?;
    replay("nearest", &config, NearestCarDispatch)?;
    Ok(())
}

fn replay<D: DispatchPolicy>(label: &str, config: &SimConfig, policy: D) -> Result<()> {
    let passengers = load_manifest_reader(Cursor::new(MANIFEST_CSV), config.num_floors)?;
    let mut sim = SimBuilder::new(config.clone(), policy)
        .passengers(passengers)
        .build()?;
    let outcome = sim.run(&mut NoopObserver);
    println!("  {label:<8} {:>4} ticks  {}", outcome.ticks, sim.snapshot().metrics);
    Ok(())
}
