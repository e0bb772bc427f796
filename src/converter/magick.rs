//! ImageMagick backend
//!
//! Invokes the external program with fixed arguments:
//!
//! ```text
//! convert --version
//! convert -background none -density 300 -resize NxN favicon.svg favicon-NxN.png
//! convert favicon-32x32.png favicon-48x48.png favicon.ico
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use super::Converter;
use crate::error::FaviconError;

const TOOL_NAME: &str = "ImageMagick";
const INSTALL_HINT: &str = "Install it with: brew install imagemagick";

/// Converter that shells out to an ImageMagick-compatible program.
#[derive(Debug, Clone)]
pub struct MagickConverter {
    program: String,
    density: u32,
}

impl MagickConverter {
    pub fn new(program: impl Into<String>, density: u32) -> Self {
        Self { program: program.into(), density }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments for one SVG to PNG conversion.
    pub fn raster_args(&self, source: &Path, size: u32, output: &Path) -> Vec<OsString> {
        vec![
            "-background".into(),
            "none".into(),
            "-density".into(),
            self.density.to_string().into(),
            "-resize".into(),
            format!("{}x{}", size, size).into(),
            source.into(),
            output.into(),
        ]
    }

    /// Arguments for bundling PNGs into an ICO.
    pub fn bundle_args(&self, inputs: &[PathBuf], output: &Path) -> Vec<OsString> {
        inputs.iter().map(OsString::from).chain(std::iter::once(output.into())).collect()
    }

    /// Run the program, mapping spawn errors and non-zero exits to a
    /// conversion failure for `output`.
    fn run(&self, args: Vec<OsString>, output: &Path) -> Result<(), FaviconError> {
        log::debug!("running {} {:?}", self.program, args);

        let result = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                FaviconError::conversion(output, format!("could not run {}: {}", self.program, e))
            })?;

        if result.status.success() {
            Ok(())
        } else {
            Err(FaviconError::conversion(output, diagnostic(&result)))
        }
    }
}

/// Pick the most useful text from a failed invocation.
fn diagnostic(result: &Output) -> String {
    let stderr = String::from_utf8_lossy(&result.stderr);
    let stderr = stderr.trim();
    if !stderr.is_empty() {
        return stderr.to_string();
    }

    let stdout = String::from_utf8_lossy(&result.stdout);
    let stdout = stdout.trim();
    if !stdout.is_empty() {
        return stdout.to_string();
    }

    format!("process {}", result.status)
}

impl Converter for MagickConverter {
    fn name(&self) -> &str {
        "magick"
    }

    fn check_available(&self) -> Result<(), FaviconError> {
        let status = Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) if status.success() => Ok(()),
            Ok(status) => {
                log::debug!("{} --version exited with {}", self.program, status);
                Err(missing_dependency())
            }
            Err(e) => {
                log::debug!("{} --version could not start: {}", self.program, e);
                Err(missing_dependency())
            }
        }
    }

    fn rasterize(&self, source: &Path, size: u32, output: &Path) -> Result<(), FaviconError> {
        self.run(self.raster_args(source, size, output), output)
    }

    fn bundle(&self, inputs: &[PathBuf], output: &Path) -> Result<(), FaviconError> {
        self.run(self.bundle_args(inputs, output), output)
    }
}

fn missing_dependency() -> FaviconError {
    FaviconError::MissingDependency { tool: TOOL_NAME.to_string(), hint: INSTALL_HINT.to_string() }
}
