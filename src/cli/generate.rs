//! Generate command implementation

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use super::{Cli, EXIT_ERROR, EXIT_SUCCESS};
use crate::assets::AssetLayout;
use crate::config::loader::{load_config, merge_cli_overrides, CliOverrides};
use crate::config::FavgenConfig;
use crate::converter;
use crate::error::FaviconError;
use crate::pipeline::Pipeline;
use crate::progress::ConsoleProgress;

/// Run the favicon pipeline with the given CLI options
pub fn run_generate(cli: &Cli) -> ExitCode {
    let config = match resolve_config(cli) {
        Ok(config) => config,
        Err(e) => {
            report_error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    log::debug!("resolved config: {:?}", config);

    let layout = AssetLayout::new(public_dir(cli.root.as_deref(), &config.paths.public));
    let converter = converter::from_config(&config.converter);
    let reporter = ConsoleProgress::new();

    match Pipeline::new(layout, converter.as_ref(), &reporter).run() {
        Ok(_) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            log::debug!("pipeline failed: {}", e.kind());
            report_error(&e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Load `favgen.toml` (if any) and apply CLI overrides on top.
fn resolve_config(cli: &Cli) -> Result<FavgenConfig, FaviconError> {
    let root = cli.root.clone().unwrap_or_else(|| PathBuf::from("."));
    let config = load_config(cli.config.as_deref(), &root)?;

    let overrides = CliOverrides {
        public: cli.public_dir.clone(),
        backend: cli.backend,
        program: cli.tool.clone(),
        density: cli.density,
    };
    Ok(merge_cli_overrides(config, &overrides)?)
}

/// Public directory as seen from the current working directory.
///
/// Without `--root` the configured path is used as-is, so messages read
/// `public/favicon-48x48.png` rather than `./public/...`.
fn public_dir(root: Option<&Path>, public: &Path) -> PathBuf {
    match root {
        Some(root) => root.join(public),
        None => public.to_path_buf(),
    }
}

fn report_error(err: &FaviconError) {
    match err {
        FaviconError::ConversionFailure { .. } => eprintln!("✗ {}", err),
        _ => eprintln!("Error: {}", err),
    }
}
