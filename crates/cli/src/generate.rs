// crates/cli/src/generate.rs
use std::io::{self, Write};

use clap::CommandFactory;
use clap_mangen::Man;

use crate::args::Args;
use crate::options::CompletionShell;

/// Writes the completion script for `shell`.
///
/// # Errors
/// Returns an error if flushing `out` fails.
pub fn write_completion<W: Write>(shell: CompletionShell, out: &mut W) -> io::Result<()> {
    let mut cmd = Args::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(clap_complete::Shell::from(shell), &mut cmd, name, out);
    out.flush()
}

/// Writes the roff man page.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn write_man<W: Write>(out: &mut W) -> io::Result<()> {
    Man::new(Args::command()).render(out)?;
    out.flush()
}
