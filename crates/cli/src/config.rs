// crates/cli/src/config.rs
use crate::args::Args;
use crate::options::DistFormat;
pub use count_uniq_engine::config::Config;
use count_uniq_engine::input::InputSource;

/// Engine settings plus everything only the presentation layer cares about.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub engine: Config,
    /// `Some` when the distribution was requested.
    pub dist: Option<DistFormat>,
    pub color: bool,
}

impl AppConfig {
    /// Progress is shown only when stdout is a terminal and not disabled.
    pub fn from_args(args: Args, stdout_is_tty: bool) -> Self {
        let engine = Config {
            input: InputSource::from_arg(args.input.as_deref()),
            distribution: args.dist.is_some(),
            max_lines: args.max_lines.unwrap_or_default(),
            progress: stdout_is_tty && !args.no_progress,
            ..Config::default()
        };

        Self {
            engine,
            dist: args.dist,
            color: !args.no_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use count_uniq_engine::cap::MaxLines;
    use std::path::PathBuf;

    fn config(argv: &[&str], tty: bool) -> AppConfig {
        let mut full = vec!["count_uniq"];
        full.extend_from_slice(argv);
        AppConfig::from_args(Args::try_parse_from(full).unwrap(), tty)
    }

    #[test]
    fn progress_needs_a_terminal() {
        assert!(config(&[], true).engine.progress);
        assert!(!config(&[], false).engine.progress);
        assert!(!config(&["--no-progress"], true).engine.progress);
    }

    #[test]
    fn dist_enables_sample_collection() {
        let cfg = config(&["-d"], false);
        assert!(cfg.engine.distribution);
        assert_eq!(cfg.dist, Some(DistFormat::Default));

        let cfg = config(&[], false);
        assert!(!cfg.engine.distribution);
        assert_eq!(cfg.dist, None);
    }

    #[test]
    fn input_and_cap_are_forwarded() {
        let cfg = config(&["-m", "2M", "lines.txt"], false);
        assert_eq!(cfg.engine.max_lines, MaxLines(2_000_000));
        assert_eq!(cfg.engine.input, InputSource::File(PathBuf::from("lines.txt")));

        let cfg = config(&["-"], false);
        assert_eq!(cfg.engine.input, InputSource::Stdin);
        assert_eq!(cfg.engine.max_lines.limit(), None);
    }

    #[test]
    fn no_color_flag() {
        assert!(config(&[], false).color);
        assert!(!config(&["--no-color"], false).color);
    }
}
