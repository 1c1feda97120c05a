// crates/cli/src/presentation.rs
use std::io::{self, BufWriter, Write};

use comfy_table::{CellAlignment, ContentArrangement, Table, presets};
use console::{Term, style};
use count_uniq_engine::report::{LineInfo, Report};

use crate::error::{AppError, Result};
use crate::options::DistFormat;

/// Prints the final report to stdout, clearing the progress line first.
#[derive(Debug, Clone, Copy)]
pub struct Presenter {
    dist: Option<DistFormat>,
    clear_progress: bool,
}

impl Presenter {
    pub const fn new(dist: Option<DistFormat>, clear_progress: bool) -> Self {
        Self {
            dist,
            clear_progress,
        }
    }

    /// # Errors
    /// Returns an error if stdout cannot be written.
    pub fn present(&self, report: &Report) -> Result<()> {
        if self.clear_progress {
            Term::stdout().clear_line()?;
        }
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        write_report(&mut out, report, self.dist)?;
        out.flush()?;
        Ok(())
    }
}

/// Renders `report`: the distinct count, or the distribution in `dist` layout.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn write_report<W: Write>(out: &mut W, report: &Report, dist: Option<DistFormat>) -> Result<()> {
    let (Some(format), Some(lines)) = (dist, report.distribution.as_deref()) else {
        writeln!(out, "{}", report.unique)?;
        return Ok(());
    };

    match format {
        DistFormat::Default => write_default(out, lines)?,
        DistFormat::Simple => write_simple(out, lines)?,
        DistFormat::Table => write_table(out, lines)?,
        DistFormat::Json => write_json(out, lines)?,
    }
    Ok(())
}

fn write_default<W: Write>(out: &mut W, lines: &[LineInfo]) -> io::Result<()> {
    for info in lines {
        writeln!(out, " {:>7} {}", info.count, info.sample_lossy())?;
    }
    Ok(())
}

fn write_simple<W: Write>(out: &mut W, lines: &[LineInfo]) -> io::Result<()> {
    for info in lines {
        writeln!(out, "{} {}", info.count, info.sample_lossy())?;
    }
    Ok(())
}

fn write_table<W: Write>(out: &mut W, lines: &[LineInfo]) -> io::Result<()> {
    let mut table = Table::new();
    table
        .load_preset(presets::ASCII_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(vec!["COUNT", "LINE"]);

    for info in lines {
        table.add_row(vec![info.count.to_string(), info.sample_lossy().into_owned()]);
    }
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    writeln!(out, "{table}")
}

fn write_json<W: Write>(out: &mut W, lines: &[LineInfo]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, lines)?;
    writeln!(out)?;
    Ok(())
}

/// Single-line error message on stderr, red when colors are enabled.
pub fn print_error(err: &AppError) {
    eprintln!("{}", style(err).for_stderr().red());
}
