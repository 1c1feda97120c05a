use std::path::PathBuf;

use clap::Parser;
use count_uniq_engine::cap::MaxLines;

use crate::options::{CompletionShell, DistFormat};
use crate::parsers::parse_max_lines;

const EXAMPLES: &str = "\
Examples:
  count_uniq file.txt                 Count unique lines in file.txt
  count_uniq -d file.txt              Show distribution for file.txt
  count_uniq -d -m 5k file.txt        Show distribution with 5,000 unique lines max
  count_uniq --dist=table file.txt    Show distribution as a table
  cat file.txt | count_uniq           Count unique lines in stdin data
  count_uniq -m 100 < file.txt        Count unique lines in stdin data with 100 unique lines max";

#[derive(Parser, Debug)]
#[command(
    name = "count_uniq",
    version,
    about = "Tool for counting unique lines",
    after_help = EXAMPLES
)]
pub struct Args {
    /// Input file ("-" or omitted reads standard input)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Max number of unique lines (K and M suffixes allowed, e.g. 5k)
    #[arg(short = 'm', long = "max", value_name = "NUM", value_parser = parse_max_lines)]
    pub max_lines: Option<MaxLines>,

    /// Show number of occurrences for every line
    #[arg(
        short = 'd',
        long = "dist",
        value_name = "FORMAT",
        value_enum,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "default"
    )]
    pub dist: Option<DistFormat>,

    /// Disable progress output
    #[arg(short = 'P', long)]
    pub no_progress: bool,

    /// Disable colors in output
    #[arg(short = 'C', long)]
    pub no_color: bool,

    /// Print completion script for the given shell
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completion: Option<CompletionShell>,

    /// Print man page
    #[arg(long, conflicts_with = "completion")]
    pub generate_man: bool,
}
