//! Inventory Aging Benchmark
//!
//! Seeds a large random inventory and times a single day's pass, sequential
//! against parallel.

use std::time::Instant;

use anyhow::{ensure, Context};
use simulation::Shop;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

const DEFAULT_ITEMS: usize = 100_000;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let item_count = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<usize>()
            .with_context(|| format!("invalid item count {:?}", arg))?,
        None => DEFAULT_ITEMS,
    };

    info!("Seeding {} items...", item_count);
    let mut sequential = Shop::default();
    sequential.seed_inventory(item_count);
    let mut parallel = sequential.clone();

    let start = Instant::now();
    let summary = sequential.update_quality();
    let seq_elapsed = start.elapsed();

    let start = Instant::now();
    let par_summary = parallel.update_quality_par();
    let par_elapsed = start.elapsed();

    ensure!(
        sequential.items() == parallel.items(),
        "parallel pass diverged from sequential pass"
    );
    ensure!(summary == par_summary, "day summaries diverged");

    info!(
        "One day advanced: sequential {:?}, parallel {:?}",
        seq_elapsed, par_elapsed
    );
    info!("Summary: {}", serde_json::to_string(&summary)?);
    if let Some(first) = sequential.items().first() {
        info!("First item: {}", serde_json::to_string(first)?);
    }

    Ok(())
}
