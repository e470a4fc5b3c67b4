//! CLI module for metasim
//!
//! - Argument parsing (`args`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod setup;

pub use args::{Cli, Commands, DisplayArgs, InputArgs};
pub use setup::init_logging;

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    args::parse_args()
}
