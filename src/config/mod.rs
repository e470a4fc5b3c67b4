//! Configuration loading for metasim
//!
//! Settings come from a `.metasim.toml` file found in the working directory
//! or one of its ancestors. Every section is optional; anything missing or
//! invalid falls back to the dashboard defaults.

mod core;
mod loader;

pub use self::core::{CurveConfig, InputDefaults, MetasimConfig, OutputConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
