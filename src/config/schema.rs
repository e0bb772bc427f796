//! Configuration schema types for `favgen.toml`
//!
//! Every field has a default, so an empty file (or no file) yields the
//! fixed behavior: ImageMagick `convert` at density 300 writing into
//! `public/`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::assets::DEFAULT_PUBLIC_DIR;

/// Default rasterization density passed to the converter
pub const DEFAULT_DENSITY: u32 = 300;

/// Upper bound accepted for `density`
pub const MAX_DENSITY: u32 = 2400;

/// Default external conversion program
pub const DEFAULT_PROGRAM: &str = "convert";

/// Conversion backend
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Shell out to ImageMagick
    #[default]
    Magick,
    /// Rasterize in-process with resvg
    Native,
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Magick => write!(f, "magick"),
            Backend::Native => write!(f, "native"),
        }
    }
}

/// `[paths]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Directory holding `favicon.svg` and receiving the outputs
    #[serde(default = "default_public")]
    pub public: PathBuf,
}

fn default_public() -> PathBuf {
    PathBuf::from(DEFAULT_PUBLIC_DIR)
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self { public: default_public() }
    }
}

/// `[converter]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConverterConfig {
    #[serde(default)]
    pub backend: Backend,
    /// External program, used by the magick backend only
    #[serde(default = "default_program")]
    pub program: String,
    #[serde(default = "default_density")]
    pub density: u32,
}

fn default_program() -> String {
    DEFAULT_PROGRAM.to_string()
}

fn default_density() -> u32 {
    DEFAULT_DENSITY
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self { backend: Backend::default(), program: default_program(), density: default_density() }
    }
}

/// Root of `favgen.toml`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FavgenConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub converter: ConverterConfig,
}

impl FavgenConfig {
    /// Check field values, returning every problem found.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.paths.public.as_os_str().is_empty() {
            errors.push("paths.public must not be empty".to_string());
        }
        if self.converter.program.trim().is_empty() {
            errors.push("converter.program must not be empty".to_string());
        }
        if self.converter.density == 0 || self.converter.density > MAX_DENSITY {
            errors.push(format!(
                "converter.density must be between 1 and {}, got {}",
                MAX_DENSITY, self.converter.density
            ));
        }

        errors
    }
}
