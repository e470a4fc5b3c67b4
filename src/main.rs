use anyhow::Result;
use metasim::cli::{self, Cli, Commands};
use metasim::commands;
use metasim::formatting::{formatter_for, FormattingConfig, OutputFormatter};
use metasim::EvaluationError;
use std::process::ExitCode;

/// Exit status for inputs the score is undefined for.
const EXIT_INVALID_INPUT: u8 = 2;

fn main() -> ExitCode {
    let cli = cli::parse_args();
    cli::init_logging(cli.verbosity);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_error(&e),
    }
}

fn run(cli: Cli) -> Result<()> {
    let verbosity = cli.verbosity;

    match cli.command {
        Commands::Evaluate { input, display } => {
            let config = commands::build_evaluate_config(&input, &display, verbosity)?;
            commands::handle_evaluate(config)
        }
        Commands::Curve { input, display } => {
            let config = commands::build_evaluate_config(&input, &display, verbosity)?;
            commands::handle_curve(config)
        }
        Commands::Init { force } => commands::init::init_config(force),
    }
}

// Side effect handler: validation problems get a message, not a backtrace
fn report_error(error: &anyhow::Error) -> ExitCode {
    let formatter = formatter_for(FormattingConfig::from_env_with(None));

    match error.downcast_ref::<EvaluationError>() {
        Some(eval_error) if eval_error.is_input_error() => {
            eprintln!("{} {}", formatter.error("Invalid input:"), eval_error);
            ExitCode::from(EXIT_INVALID_INPUT)
        }
        _ => {
            eprintln!("{} {:#}", formatter.error("Error:"), error);
            ExitCode::FAILURE
        }
    }
}
