//! zerocheck
//!
//! Cross-checks every zero-test strategy on the reference buffer size, then
//! times each one with a plain loop. For real measurements use
//! `cargo bench --bench zero_test`.
//!
//! # Environment
//!
//! - `ZEROCHECK_ITERATIONS`: calls per strategy in the timing loop
//!   (default 1_000_000).
//! - `RUST_LOG`: log filter (default `info`).
//!
//! # Exit Codes
//!
//! - `0`: all strategies agree
//! - `1`: at least one strategy disagrees with the byte-OR reference

use std::env;
use std::hint::black_box;
use std::time::Instant;

use anyhow::bail;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use zerocheck::lane::{Lane, WideLane};
use zerocheck::scan::is_empty_simple_or;
use zerocheck::{BUFFER_SIZE, Strategy};

const DEFAULT_ITERATIONS: usize = 1_000_000;

/// Bytes from this offset on are set in the `tail_filled` pattern.
const TAIL_FILL_START: usize = 128;

type Buffer = [u8; BUFFER_SIZE];

fn patterns() -> Vec<(&'static str, Buffer)> {
    let mut first = [0u8; BUFFER_SIZE];
    first[0] = 0x01;

    let mut last = [0u8; BUFFER_SIZE];
    last[BUFFER_SIZE - 1] = 0x80;

    let mut tail = [0u8; BUFFER_SIZE];
    tail[TAIL_FILL_START..].fill(0xFF);

    vec![
        ("zeroed", [0u8; BUFFER_SIZE]),
        ("first_byte", first),
        ("last_byte", last),
        ("tail_filled", tail),
    ]
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let iterations = env_usize("ZEROCHECK_ITERATIONS").unwrap_or(DEFAULT_ITERATIONS);
    info!(
        lane = WideLane::NAME,
        buffer_size = BUFFER_SIZE,
        iterations,
        "starting zerocheck"
    );

    let patterns = patterns();
    verify(&patterns)?;

    for (pattern, buffer) in &patterns {
        for strategy in Strategy::ALL {
            let ns_per_call = time(strategy, buffer, iterations);
            info!(%strategy, pattern, ns_per_call, "timed");
        }
    }

    Ok(())
}

fn verify(patterns: &[(&'static str, Buffer)]) -> anyhow::Result<()> {
    let mut mismatches = 0usize;
    for (pattern, buffer) in patterns {
        let expected = is_empty_simple_or(buffer);
        for strategy in Strategy::ALL {
            let verdict = strategy.is_empty(buffer);
            debug!(%strategy, pattern, verdict, "verdict");
            if verdict != expected {
                warn!(%strategy, pattern, verdict, expected, "strategy disagrees");
                mismatches += 1;
            }
        }
    }

    if mismatches > 0 {
        bail!("{mismatches} strategy verdicts disagree with simple_or");
    }
    info!(patterns = patterns.len(), "all strategies agree");
    Ok(())
}

fn time(strategy: Strategy, buffer: &Buffer, iterations: usize) -> f64 {
    let iterations = iterations.max(1);
    let buffer = black_box(buffer);

    let start = Instant::now();
    for _ in 0..iterations {
        black_box(strategy.is_empty(black_box(buffer)));
    }
    start.elapsed().as_nanos() as f64 / iterations as f64
}

fn env_usize(name: &str) -> Option<usize> {
    let value = env::var(name).ok()?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!(name, %value, "ignoring unparsable environment override");
            None
        }
    }
}
