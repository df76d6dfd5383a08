//! Stream pipeline walkthrough.
//!
//! Builds the canonical pipeline over a small integer range, then drives it
//! through every consumption surface: `reduce`, `collect`, a manual pull
//! loop, and the standard-iterator bridge. Parameters come from
//! `pipeline.toml` when present.

mod config;

use config::PipelineConfig;
use streamforge::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive("pipeline=info".parse().unwrap())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn main() {
    init_logging();

    println!("StreamForge Pipeline Example");
    println!("============================\n");

    let config = PipelineConfig::load("pipeline.toml").unwrap_or_default();
    info!(
        event = "config_loaded",
        start = config.start,
        end = config.end,
        offset = config.offset,
        threshold = config.threshold,
        take = config.take
    );

    println!(
        "Source: {}..={}  (map: +{}, filter: > {}, take: {})\n",
        config.start, config.end, config.offset, config.threshold, config.take
    );

    // The description is built once and reused for every run below.
    let offset = config.offset;
    let threshold = config.threshold;
    let stream = ValueStream::of(config.start..=config.end)
        .map(move |x| x as f64 + offset)
        .filter(move |x| *x > threshold)
        .take(config.take);

    let total = stream.reduce(0.0, |acc, x| acc + x);
    println!("Total (reduce):     {total}");

    let elements = stream.collect();
    println!("Elements (collect): {elements:?}");
    info!(event = "pipeline_done", total, elements = elements.len());

    // Same description, driven by hand through the pull protocol.
    println!("\nManual pull loop:");
    let mut cursor = stream.iterate();
    loop {
        match cursor.next() {
            Pull::Item(x) => println!("  pulled {x}"),
            Pull::Exhausted => {
                println!("  exhausted");
                break;
            }
        }
    }

    // And once more through the standard-iterator bridge.
    let doubled: Vec<f64> = stream.iterate().into_iter().map(|x| x * 2.0).collect();
    println!("\nBridged to std::iter (doubled): {doubled:?}");
}
