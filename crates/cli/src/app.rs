// crates/cli/src/app.rs
use std::sync::Arc;

use count_uniq_engine::context::RunContext;
use count_uniq_engine::fingerprint::Xxh3Hasher;
use count_uniq_engine::ingest::ingest;
use count_uniq_engine::progress::{ProgressReporter, ProgressSink};
use count_uniq_engine::report::Termination;
use log::debug;

use crate::config::AppConfig;
use crate::error::Result;
use crate::presentation::{Presenter, print_error};
use crate::progress::TerminalProgress;

/// Logs go to stderr; `RUST_LOG` overrides the default `warn` filter.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();
}

/// Counts the configured input and prints the result exactly once, either
/// here or from the interrupt handler.
///
/// # Errors
/// Fails when the input cannot be opened, the interrupt handler cannot be
/// installed, or stdout cannot be written.
pub fn run(config: &AppConfig) -> Result<()> {
    let engine = &config.engine;
    let mut reader = engine.input.open()?;
    debug!("reading {}", engine.input);

    let ctx = Arc::new(RunContext::new(
        engine.distribution,
        engine.max_lines.limit(),
    ));
    let presenter = Presenter::new(config.dist, engine.progress);

    install_interrupt_handler(Arc::clone(&ctx), presenter)?;

    let reporter = if engine.progress {
        let sink: Arc<dyn ProgressSink> = Arc::new(TerminalProgress::stdout());
        Some(ProgressReporter::spawn(
            Arc::clone(&ctx),
            sink,
            engine.progress_interval,
        )?)
    } else {
        None
    };

    let termination = ingest(&mut reader, &ctx, &Xxh3Hasher);
    debug!("ingestion stopped: {termination:?}");

    let outcome = ctx.finish(termination, |report| {
        debug!(
            "{} distinct of {} lines ({} bytes)",
            report.unique, report.total_lines, report.total_bytes
        );
        presenter.present(report)
    });

    if let Some(reporter) = reporter {
        reporter.join();
    }

    // `None`: the interrupt handler won the race and printed the report.
    outcome.unwrap_or(Ok(()))
}

/// On SIGINT/SIGTERM print whatever was counted so far and exit successfully.
fn install_interrupt_handler(ctx: Arc<RunContext>, presenter: Presenter) -> Result<()> {
    ctrlc::set_handler(move || {
        let Some(outcome) = ctx.finish(Termination::Interrupted, |report| {
            presenter.present(report)
        }) else {
            return;
        };
        match outcome {
            Err(err) if !err.is_broken_pipe() => print_error(&err),
            _ => {}
        }
        std::process::exit(0);
    })?;
    Ok(())
}
