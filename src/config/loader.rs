//! Configuration loading for `favgen.toml`
//!
//! Provides functions to find, load, and merge configuration with CLI
//! overrides.

use super::schema::{Backend, FavgenConfig};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the project configuration file
pub const CONFIG_FILE_NAME: &str = "favgen.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse favgen.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override public directory
    pub public: Option<PathBuf>,
    /// Override backend
    pub backend: Option<Backend>,
    /// Override external program
    pub program: Option<String>,
    /// Override density
    pub density: Option<u32>,
}

/// Look for `favgen.toml` directly inside `root`.
pub fn find_config_in(root: &Path) -> Option<PathBuf> {
    let config_path = root.join(CONFIG_FILE_NAME);
    if config_path.is_file() {
        Some(config_path)
    } else {
        None
    }
}

/// Load configuration.
///
/// With an explicit `path` the file must exist. Without one, `favgen.toml`
/// in `root` is used when present, and defaults otherwise.
pub fn load_config(path: Option<&Path>, root: &Path) -> Result<FavgenConfig, ConfigError> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => match find_config_in(root) {
            Some(p) => p,
            None => {
                log::debug!("no {} in {}, using defaults", CONFIG_FILE_NAME, root.display());
                return Ok(FavgenConfig::default());
            }
        },
    };

    log::debug!("loading config from {}", config_path.display());
    let content = fs::read_to_string(&config_path)?;
    parse_config(&content)
}

/// Parse and validate configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<FavgenConfig, ConfigError> {
    let config: FavgenConfig = toml::from_str(content)?;
    check(&config)?;
    Ok(config)
}

/// Apply CLI overrides on top of a loaded config and re-validate.
pub fn merge_cli_overrides(
    mut config: FavgenConfig,
    overrides: &CliOverrides,
) -> Result<FavgenConfig, ConfigError> {
    if let Some(public) = &overrides.public {
        config.paths.public = public.clone();
    }
    if let Some(backend) = overrides.backend {
        config.converter.backend = backend;
    }
    if let Some(program) = &overrides.program {
        config.converter.program = program.clone();
    }
    if let Some(density) = overrides.density {
        config.converter.density = density;
    }

    check(&config)?;
    Ok(config)
}

fn check(config: &FavgenConfig) -> Result<(), ConfigError> {
    let errors = config.validate();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Validation(errors))
    }
}
