// crates/engine/src/context.rs
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use crate::fingerprint::Fingerprint;
use crate::report::{Report, Termination};
use crate::stats::{Snapshot, Throughput};
use crate::tally::Tally;

/// Outcome of recording a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    /// The line was recorded and the distinct-line cap is now reached.
    Capped,
    /// The run was already finished; the line was not recorded.
    Finished,
}

#[derive(Debug)]
struct RunState {
    stats: Snapshot,
    tally: Tally,
}

impl RunState {
    fn report(&self, termination: Termination) -> Report {
        Report {
            unique: self.tally.distinct(),
            total_lines: self.stats.total_lines,
            total_bytes: self.stats.total_bytes,
            termination,
            distribution: self
                .tally
                .collects_samples()
                .then(|| self.tally.distribution()),
        }
    }
}

/// State shared by the ingestion loop, the progress reporter and the
/// interrupt handler.
///
/// Counters, frequency table and samples sit behind one lock so that
/// `sum(counts) == total_lines` holds for anyone holding it.
#[derive(Debug)]
pub struct RunContext {
    state: Mutex<RunState>,
    cap: Option<usize>,
}

impl RunContext {
    pub fn new(collect_samples: bool, cap: Option<usize>) -> Self {
        Self {
            state: Mutex::new(RunState {
                stats: Snapshot::new(Instant::now()),
                tally: Tally::new(collect_samples),
            }),
            cap: cap.filter(|&n| n > 0),
        }
    }

    fn lock(&self) -> MutexGuard<'_, RunState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub const fn cap(&self) -> Option<usize> {
        self.cap
    }

    /// Applies every accounting update for one line in a single critical section.
    pub fn record(&self, fingerprint: Fingerprint, line: &[u8]) -> Step {
        let mut state = self.lock();
        if state.stats.finished {
            return Step::Finished;
        }

        state.tally.record(fingerprint, line);
        state.stats.add_line(line.len() as u64);

        match self.cap {
            Some(cap) if state.tally.distinct() >= cap => Step::Capped,
            _ => Step::Continue,
        }
    }

    /// Progress tick: rolls the interval counters and hands the rates to
    /// `render` while the lock is held.
    ///
    /// Returns `false` once the run is finished; the caller must stop ticking.
    pub fn tick<F>(&self, now: Instant, render: F) -> bool
    where
        F: FnOnce(&Throughput),
    {
        let mut state = self.lock();
        if state.stats.finished {
            return false;
        }
        let throughput = state.stats.roll(now);
        render(&throughput);
        true
    }

    /// Marks the run finished and hands the final report to `present`.
    ///
    /// Runs at most once per context. Later callers, including a racing
    /// interrupt handler, get `None` and must not report again. `present`
    /// executes under the lock, so a losing caller blocks until the winner's
    /// output is complete.
    pub fn finish<F, T>(&self, termination: Termination, present: F) -> Option<T>
    where
        F: FnOnce(&Report) -> T,
    {
        let mut state = self.lock();
        if state.stats.finished {
            return None;
        }
        state.stats.finished = true;

        let report = state.report(termination);
        Some(present(&report))
    }

    /// Consumes a context nobody else can reach and returns its report.
    pub fn into_report(self, termination: Termination) -> Report {
        let mut state = self.state.into_inner().unwrap_or_else(PoisonError::into_inner);
        state.stats.finished = true;
        state.report(termination)
    }

    pub fn is_finished(&self) -> bool {
        self.lock().stats.finished
    }

    pub fn snapshot(&self) -> Snapshot {
        self.lock().stats
    }

    pub fn distinct(&self) -> usize {
        self.lock().tally.distinct()
    }

    /// Sum of all frequency-table counts, read under the same lock as the counters.
    pub fn counted_lines(&self) -> (u64, u64) {
        let state = self.lock();
        (state.tally.total(), state.stats.total_lines)
    }
}
