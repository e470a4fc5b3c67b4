use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# metasim configuration

# Values used when --meta, --minimo, --realizado or --sentido are omitted
[defaults]
meta = 100.0
minimo = 45.0
realizado = 80.0
sentido = "maior"   # "maior" (higher is better) or "menor" (lower is better)

# Attainment scale: the minimum threshold scores floor_score, a resultado
# of 100% scores target_score, and no score exceeds ceiling_score
[scoring]
floor_score = 45.0
target_score = 100.0
ceiling_score = 120.0

[curve]
points = 50

[output]
default_format = "terminal"
"#;

/// Write the default config into `dir`.
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if io::file_exists(&config_path) && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    Ok(config_path)
}

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");
    Ok(())
}
