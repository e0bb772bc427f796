//! Command-line interface implementation
//!
//! Running `favgen` with no arguments generates the fixed favicon set from
//! `public/favicon.svg` using ImageMagick. Every flag is an optional override.

mod generate;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::schema::{Backend, MAX_DENSITY};

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;

/// favgen - Generate PNG and ICO favicons from public/favicon.svg
#[derive(Parser, Debug)]
#[command(name = "favgen")]
#[command(about = "Generate PNG and ICO favicons from public/favicon.svg")]
#[command(version)]
pub struct Cli {
    /// Project root containing the public directory (default: current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Public directory, relative to the root (default: public)
    #[arg(long)]
    pub public_dir: Option<PathBuf>,

    /// Conversion backend (default: magick)
    #[arg(long, value_enum)]
    pub backend: Option<Backend>,

    /// External conversion program for the magick backend (default: convert)
    #[arg(long, value_name = "PROGRAM")]
    pub tool: Option<String>,

    /// Rasterization density in DPI (default: 300)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_DENSITY as i64))]
    pub density: Option<u32>,

    /// Path to a favgen.toml (default: <root>/favgen.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Initialize `env_logger`.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects debug and the
/// default is warn.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    generate::run_generate(&cli)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args_means_no_overrides() {
        let cli = Cli::try_parse_from(["favgen"]).unwrap();
        assert!(cli.root.is_none());
        assert!(cli.public_dir.is_none());
        assert!(cli.backend.is_none());
        assert!(cli.tool.is_none());
        assert!(cli.density.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::try_parse_from([
            "favgen",
            "--root",
            "site",
            "--backend",
            "native",
            "--density",
            "150",
            "--tool",
            "magick",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("site")));
        assert_eq!(cli.backend, Some(Backend::Native));
        assert_eq!(cli.density, Some(150));
        assert_eq!(cli.tool.as_deref(), Some("magick"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_density_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["favgen", "--density", "0"]).is_err());
        assert!(Cli::try_parse_from(["favgen", "--density", "5000"]).is_err());
    }

    #[test]
    fn test_unknown_backend_rejected() {
        assert!(Cli::try_parse_from(["favgen", "--backend", "gimp"]).is_err());
    }
}
