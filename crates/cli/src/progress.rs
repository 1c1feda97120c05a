// crates/cli/src/progress.rs
use console::{Term, style};
use count_uniq_engine::progress::ProgressSink;
use count_uniq_engine::stats::Throughput;

use crate::units::{ByteSize, group_digits};

/// Transient one-line status on stdout, redrawn in place every tick.
pub struct TerminalProgress {
    term: Term,
}

impl TerminalProgress {
    pub fn stdout() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl ProgressSink for TerminalProgress {
    fn on_tick(&self, throughput: &Throughput) {
        let line = format_status(throughput);
        // Progress output is best-effort.
        let _ = self.term.clear_line();
        let _ = self.term.write_str(&line);
    }
}

/// `<lines>/s | <total lines> | <bytes>/s | <total bytes>`
pub fn format_status(t: &Throughput) -> String {
    let sep = style("|").dim();
    format!(
        "{:>12}/s {sep} {:<12} {sep} {:>12}/s {sep} {:<12}",
        group_digits(t.lines_per_sec.max(0.0).round() as u64),
        group_digits(t.total_lines),
        ByteSize::from_rate(t.bytes_per_sec),
        ByteSize::from(t.total_bytes),
    )
}
