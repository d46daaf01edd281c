//! walk2d-time — pedestrian random walk, time-bounded legs.
//!
//! Same square and speed as `walk2d-distance`, but each leg lasts a fixed
//! 2 s of travel before a fresh heading is drawn, so re-plans land on a
//! regular cadence regardless of wall reflections.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use manet_core::{NodeId, Rect, SimTime, Variate};
use manet_mobility::{ModelConfig, RandomWalkParams, WalkMode};
use manet_output::{CsvWriter, TraceObserver};
use manet_sim::{SimBuilder, SimConfig};

// ── Constants ─────────────────────────────────────────────────────────────────

const NODE_COUNT:  usize = 32;
const SEED:        u64   = 42;
const SIM_SECS:    f64   = 300.0;
const SAMPLE_SECS: f64   = 1.0;
const LEG_SECS:    f64   = 2.0;
const SPEED_MPS:   f64   = 2.0;

fn scenario() -> Result<ModelConfig> {
    let bounds = Rect::new(0.0, 100.0, 0.0, 100.0)?;
    Ok(ModelConfig::RandomWalk(RandomWalkParams::new(
        bounds,
        WalkMode::Time(SimTime::from_secs(LEG_SECS)),
        Variate::Constant(SPEED_MPS),
    )))
}

fn main() -> Result<()> {
    println!("=== walk2d-time — rust_manet mobility simulator ===");
    println!("Nodes: {NODE_COUNT}  |  Duration: {SIM_SECS} s  |  Seed: {SEED}");
    println!("Leg: {LEG_SECS} s at {SPEED_MPS} m/s");
    println!();

    let config = SimConfig {
        node_count:      NODE_COUNT,
        stop_time:       SimTime::from_secs(SIM_SECS),
        seed:            SEED,
        sample_interval: SimTime::from_secs(SAMPLE_SECS),
    };

    let mut sim = SimBuilder::new(config, scenario()?).build()?;

    std::fs::create_dir_all("output/walk2d-time")?;
    let writer = CsvWriter::new(Path::new("output/walk2d-time"))?;
    let mut obs = TraceObserver::new(writer);

    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  mobility transitions: {}", sim.steps_executed());
    println!("  final clock:          {}", sim.now());
    println!();

    println!("{:<6} {:>10} {:>10}", "Node", "x (m)", "y (m)");
    println!("{}", "-".repeat(28));
    let now = sim.now();
    for i in 0..8.min(NODE_COUNT) {
        let pos = sim.engine.position(NodeId(i as u32), now);
        println!("{:<6} {:>10.2} {:>10.2}", i, pos.x, pos.y);
    }

    Ok(())
}
