use anyhow::Context;
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::{CurveConfig, MetasimConfig};
use crate::scoring::ScalePolicy;

pub const CONFIG_FILE_NAME: &str = ".metasim.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read and parse config file contents
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from TOML and replace invalid sections with defaults
pub fn parse_and_validate_config(contents: &str) -> Result<MetasimConfig, String> {
    let mut config = toml::from_str::<MetasimConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))?;

    if let Some(scoring) = config.scoring {
        if let Err(e) = scoring.validate() {
            log::warn!("{e}. Using default scoring anchors.");
            config.scoring = Some(ScalePolicy::default());
        }
    }

    if let Some(curve) = config.curve {
        if let Err(e) = curve.validate() {
            log::warn!("Invalid curve configuration: {e}. Using defaults.");
            config.curve = Some(CurveConfig::default());
        }
    }

    Ok(config)
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<MetasimConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{e}. Using defaults.");
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file.
pub fn discover_config(start: PathBuf) -> MetasimConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            MetasimConfig::default()
        })
}

pub fn load_config() -> MetasimConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            MetasimConfig::default()
        }
    }
}

/// Load an explicitly requested config file; failures are errors here.
pub fn load_config_from(path: &Path) -> anyhow::Result<MetasimConfig> {
    let contents = read_config_file(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    parse_and_validate_config(&contents).map_err(anyhow::Error::msg)
}
