// crates/engine/src/lib.rs
//! # count_uniq engine
//!
//! Streaming distinct-line counting:
//!
//! - [`fingerprint`]: 64-bit line fingerprints
//! - [`tally`]: frequency table and first-seen sample cache
//! - [`stats`] / [`context`]: counters shared with the progress reporter behind one lock
//! - [`ingest`]: the line-by-line read loop
//! - [`progress`]: periodic throughput reporting
//! - [`report`]: the final result handed to presenters
use std::io::BufRead;

use log::debug;

pub mod cap;
pub mod config;
pub mod context;
pub mod error;
pub mod fingerprint;
pub mod ingest;
pub mod input;
pub mod progress;
pub mod report;
pub mod stats;
pub mod tally;

use crate::config::Config;
use crate::context::RunContext;
use crate::fingerprint::{LineHasher, Xxh3Hasher};
use crate::report::Report;

/// Counts the distinct lines of `reader` in one pass with the default hasher.
///
/// Only the `distribution` and `max_lines` settings of `config` apply; the
/// input source and progress settings are the caller's business.
pub fn count<R: BufRead>(reader: R, config: &Config) -> Report {
    count_with(reader, config, &Xxh3Hasher)
}

/// Same as [`count`] with a caller-supplied fingerprint function.
pub fn count_with<R, H>(mut reader: R, config: &Config, hasher: &H) -> Report
where
    R: BufRead,
    H: LineHasher + ?Sized,
{
    let ctx = RunContext::new(config.distribution, config.max_lines.limit());
    let termination = ingest::ingest(&mut reader, &ctx, hasher);
    debug!("ingestion stopped: {termination:?}");

    ctx.into_report(termination)
}
