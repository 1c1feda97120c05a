// crates/engine/src/stats.rs
use std::time::Instant;

/// Interval and cumulative read counters shared with the progress reporter.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot {
    pub interval_lines: u64,
    pub interval_bytes: u64,
    pub total_lines: u64,
    pub total_bytes: u64,
    pub last_report: Instant,
    pub finished: bool,
}

/// Rates derived from one progress interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throughput {
    pub lines_per_sec: f64,
    pub bytes_per_sec: f64,
    pub total_lines: u64,
    pub total_bytes: u64,
}

impl Snapshot {
    pub const fn new(now: Instant) -> Self {
        Self {
            interval_lines: 0,
            interval_bytes: 0,
            total_lines: 0,
            total_bytes: 0,
            last_report: now,
            finished: false,
        }
    }

    #[inline]
    pub fn add_line(&mut self, bytes: u64) {
        self.interval_lines += 1;
        self.interval_bytes += bytes;
        self.total_lines += 1;
        self.total_bytes += bytes;
    }

    /// Computes the rates for the interval ending at `now` and starts a new one.
    ///
    /// A clock that did not advance yields zero rates.
    pub fn roll(&mut self, now: Instant) -> Throughput {
        let secs = now.saturating_duration_since(self.last_report).as_secs_f64();
        let rate = |count: u64| if secs > 0.0 { count as f64 / secs } else { 0.0 };

        let throughput = Throughput {
            lines_per_sec: rate(self.interval_lines),
            bytes_per_sec: rate(self.interval_bytes),
            total_lines: self.total_lines,
            total_bytes: self.total_bytes,
        };

        self.interval_lines = 0;
        self.interval_bytes = 0;
        self.last_report = now;
        throughput
    }
}
