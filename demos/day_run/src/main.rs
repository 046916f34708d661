//! day_run: simulate one day of deliveries from the depot.
//!
//! Loads a site feed and a request feed, runs the dispatcher over the day in
//! one-minute ticks, and writes `flight_schedule.csv` and
//! `flight_summaries.csv` to the output directory.
//!
//! ```text
//! cargo run -p day_run -- --sites demos/day_run/data/sites.csv \
//!     --requests demos/day_run/data/requests.csv --out-dir output/day_run
//! ```
//!
//! Set `RUST_LOG=debug` to see every committed flight.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dd_core::DispatchConfig;
use dd_feed::{load_requests_path, load_sites_path};
use dd_output::{CsvWriter, SimOutputObserver};
use dd_sim::SimBuilder;

#[derive(Debug, Parser)]
#[command(name = "day_run", about = "Simulate one day of depot deliveries")]
struct Cli {
    /// Site feed: `name, north_m, east_m` per line.
    #[arg(long, default_value = "demos/day_run/data/sites.csv")]
    sites: PathBuf,

    /// Request feed: `time, site_name, priority` per line, sorted by time.
    #[arg(long, default_value = "demos/day_run/data/requests.csv")]
    requests: PathBuf,

    /// Directory for the CSV output.  Created if missing.
    #[arg(long, default_value = "output/day_run")]
    out_dir: PathBuf,

    /// Optional JSON file overriding `DispatchConfig` fields.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_config(path: Option<&PathBuf>) -> Result<DispatchConfig> {
    let Some(path) = path else {
        return Ok(DispatchConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: DispatchConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    // 1. Load feeds.
    let sites = load_sites_path(&cli.sites)
        .with_context(|| format!("loading sites from {}", cli.sites.display()))?;
    let requests = load_requests_path(&cli.requests, &sites)
        .with_context(|| format!("loading requests from {}", cli.requests.display()))?;
    info!(sites = sites.len(), requests = requests.len(), "feeds loaded");

    // 2. Build sim.
    let mut sim = SimBuilder::new(config, requests).build()?;

    // 3. Set up output.
    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating {}", cli.out_dir.display()))?;
    let writer = CsvWriter::new(&cli.out_dir)?;
    let mut obs = SimOutputObserver::new(writer);

    // 4. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        return Err(e).context("writing output");
    }

    // 5. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  flight_schedule.csv  : {} rows", obs.segment_rows());
    println!("  flight_summaries.csv : {} rows", sim.flights().len());
    println!();

    println!("{:<8} {:<8} {:<10} {:<10} Route", "Flight", "Vehicle", "Launch", "Lands");
    println!("{}", "-".repeat(60));
    for flight in sim.flights() {
        println!(
            "{:<8} {:<8} {:<10} {:<10} {}",
            flight.id.0,
            flight.vehicle.0,
            flight.launch_time.to_string(),
            flight.completion_time.to_string(),
            flight.stop_names().join(" -> "),
        );
    }

    let unserved = sim.unserved();
    if !unserved.is_empty() {
        println!();
        println!("Not flown by end of day:");
        for r in unserved {
            println!("  request {:<4} {:<12} {:<10} {}", r.id.0, r.site.name, r.priority, r.time);
        }
    }

    Ok(())
}
