//! Raster conversion backends
//!
//! The pipeline only talks to the [`Converter`] trait. Two backends exist:
//! - [`MagickConverter`]: shells out to ImageMagick, one process per step
//! - [`NativeConverter`]: rasterizes in-process with resvg and the image crate

mod magick;
mod native;

pub use magick::MagickConverter;
pub use native::NativeConverter;

use std::path::{Path, PathBuf};

use crate::config::{Backend, ConverterConfig};
use crate::error::FaviconError;

/// A capability that turns an SVG into PNGs and PNGs into an ICO.
pub trait Converter {
    /// Short name used in log output
    fn name(&self) -> &str;

    /// Verify the capability is usable.
    ///
    /// Returns [`FaviconError::MissingDependency`] when it is not.
    fn check_available(&self) -> Result<(), FaviconError>;

    /// Render `source` onto a transparent background, fitted into a
    /// `size`x`size` box, and write it as PNG to `output`.
    fn rasterize(&self, source: &Path, size: u32, output: &Path) -> Result<(), FaviconError>;

    /// Bundle the PNG `inputs` into a multi-resolution ICO at `output`.
    fn bundle(&self, inputs: &[PathBuf], output: &Path) -> Result<(), FaviconError>;
}

/// Build the converter selected by `config`.
pub fn from_config(config: &ConverterConfig) -> Box<dyn Converter> {
    match config.backend {
        Backend::Magick => Box::new(MagickConverter::new(&config.program, config.density)),
        Backend::Native => Box::new(NativeConverter::new(config.density)),
    }
}
