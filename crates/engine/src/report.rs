// crates/engine/src/report.rs
use std::borrow::Cow;

use serde::{Serialize, Serializer};

use crate::fingerprint::Fingerprint;

/// How the ingestion loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// End of input, or a read error treated as end of input.
    Exhausted,
    /// The distinct-line cap was reached.
    Capped,
    /// The run was finished from outside the loop (signal handler).
    Interrupted,
}

/// One distribution row. Serializes as `{"count": n, "line": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineInfo {
    #[serde(skip)]
    pub fingerprint: Fingerprint,
    pub count: u64,
    #[serde(rename = "line", serialize_with = "serialize_lossy")]
    pub sample: Vec<u8>,
}

impl LineInfo {
    pub fn sample_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.sample)
    }
}

fn serialize_lossy<S: Serializer>(sample: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(sample))
}

/// Final tallies handed to the presenter, captured once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub unique: usize,
    pub total_lines: u64,
    pub total_bytes: u64,
    pub termination: Termination,
    pub distribution: Option<Vec<LineInfo>>,
}
