// crates/engine/src/progress.rs
use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::debug;

use crate::context::RunContext;
use crate::stats::Throughput;

pub const DEFAULT_PROGRESS_INTERVAL: Duration = Duration::from_millis(250);

/// Receives one throughput sample per progress tick.
///
/// Called with the run lock held; implementations should only format and write.
pub trait ProgressSink: Send + Sync {
    fn on_tick(&self, throughput: &Throughput);
}

/// Background thread that samples a [`RunContext`] at a fixed cadence until
/// the run is finished.
#[derive(Debug)]
pub struct ProgressReporter {
    handle: Option<JoinHandle<()>>,
}

impl ProgressReporter {
    /// # Errors
    /// Returns an error if the reporter thread cannot be spawned.
    pub fn spawn(
        ctx: Arc<RunContext>,
        sink: Arc<dyn ProgressSink>,
        interval: Duration,
    ) -> io::Result<Self> {
        let handle = thread::Builder::new()
            .name("progress".to_string())
            .spawn(move || {
                let ticker = crossbeam_channel::tick(interval);
                let mut ticks = 0u64;
                for now in ticker.iter() {
                    if !ctx.tick(now, |throughput| sink.on_tick(throughput)) {
                        break;
                    }
                    ticks += 1;
                }
                debug!("progress reporter stopped after {ticks} ticks");
            })?;

        Ok(Self {
            handle: Some(handle),
        })
    }

    /// Waits for the reporter to observe the finished flag and exit.
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
