use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::Direction;
use crate::io::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "metasim")]
#[command(about = "Goal attainment simulator for performance indicators", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    /// -v: Show the scoring line parameters
    /// -vv: Debug logging
    /// -vvv: Trace logging
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute Resultado and Atingimento for one indicator
    Evaluate {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Print the sampled attainment curve and its markers
    Curve {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// The four indicator inputs. Omitted values come from the config defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Target value (Meta)
    #[arg(long, allow_negative_numbers = true)]
    pub meta: Option<f64>,

    /// Minimum acceptable threshold (Patamar Mínimo), in % of the target
    #[arg(long, visible_alias = "threshold", allow_negative_numbers = true)]
    pub minimo: Option<f64>,

    /// Achieved value (Realizado)
    #[arg(long, visible_alias = "achieved", allow_negative_numbers = true)]
    pub realizado: Option<f64>,

    /// Direction of the indicator: maior (higher is better) or menor (lower is better)
    #[arg(long, visible_alias = "direction", value_parser = parse_direction)]
    pub sentido: Option<Direction>,

    /// Configuration file (defaults to .metasim.toml discovery)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct DisplayArgs {
    /// Output format (defaults to the config file's choice, then terminal)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of curve samples
    #[arg(long)]
    pub points: Option<usize>,

    /// Disable colors and emoji
    #[arg(long)]
    pub plain: bool,

    /// Skip the text chart in terminal output
    #[arg(long = "no-chart")]
    pub no_chart: bool,
}

fn parse_direction(value: &str) -> Result<Direction, String> {
    value.parse()
}

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_evaluate_parses_all_inputs() {
        let cli = Cli::try_parse_from([
            "metasim",
            "evaluate",
            "--meta",
            "200",
            "--minimo",
            "-10",
            "--realizado",
            "150",
            "--sentido",
            "Menor",
            "--format",
            "json",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbosity, 2);
        let Commands::Evaluate { input, display } = cli.command else {
            panic!("expected evaluate");
        };
        assert_eq!(input.meta, Some(200.0));
        assert_eq!(input.minimo, Some(-10.0));
        assert_eq!(input.realizado, Some(150.0));
        assert_eq!(input.sentido, Some(Direction::LowerIsBetter));
        assert_eq!(display.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_unknown_direction_rejected() {
        let result = Cli::try_parse_from(["metasim", "evaluate", "--sentido", "up"]);
        assert!(result.is_err());
    }
}
