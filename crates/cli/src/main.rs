use clap::Parser;
use count_uniq_cli::app;
use count_uniq_cli::args::Args;
use count_uniq_cli::config::AppConfig;
use count_uniq_cli::error::AppError;
use count_uniq_cli::generate;
use count_uniq_cli::presentation::print_error;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Help and version go to stdout and succeed; usage errors exit 1.
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    app::init_logging();

    let generated = if let Some(shell) = args.completion {
        Some(generate::write_completion(shell, &mut io::stdout().lock()))
    } else if args.generate_man {
        Some(generate::write_man(&mut io::stdout().lock()))
    } else {
        None
    };

    let result = match generated {
        Some(written) => written.map_err(AppError::from),
        None => {
            let config = AppConfig::from_args(args, atty::is(atty::Stream::Stdout));
            if !config.color {
                console::set_colors_enabled(false);
                console::set_colors_enabled_stderr(false);
            }
            app::run(&config)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_broken_pipe() => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&err);
            ExitCode::FAILURE
        }
    }
}
