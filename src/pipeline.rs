//! Favicon generation pipeline
//!
//! Runs three steps in a fixed order, stopping at the first failure:
//!
//! 1. [`Pipeline::check_capability`] - probe the converter
//! 2. [`Pipeline::generate_raster_set`] - one PNG per size (48, 96, 192, 32)
//! 3. [`Pipeline::build_icon_container`] - bundle the 32 and 48 PNGs into an ICO
//!
//! Files written before a failure are left in place.

use crate::assets::{AssetLayout, AssetRole, OutputAsset, BUNDLE_SIZES};
use crate::converter::Converter;
use crate::error::FaviconError;
use crate::progress::{ProgressEvent, ProgressReporter};

/// One favicon generation run over an [`AssetLayout`].
pub struct Pipeline<'a> {
    layout: AssetLayout,
    converter: &'a dyn Converter,
    reporter: &'a dyn ProgressReporter,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        layout: AssetLayout,
        converter: &'a dyn Converter,
        reporter: &'a dyn ProgressReporter,
    ) -> Self {
        Self { layout, converter, reporter }
    }

    pub fn layout(&self) -> &AssetLayout {
        &self.layout
    }

    /// Verify the converter is usable. Nothing is written.
    pub fn check_capability(&self) -> Result<(), FaviconError> {
        self.converter.check_available()?;
        self.reporter
            .report(ProgressEvent::CapabilityChecked { converter: self.converter.name().to_string() });
        Ok(())
    }

    /// Render the source SVG at every raster size, in order.
    ///
    /// Fails with [`FaviconError::MissingInput`] before writing anything if
    /// the source is absent.
    pub fn generate_raster_set(&self) -> Result<Vec<OutputAsset>, FaviconError> {
        let source = self.layout.source();
        if !source.is_file() {
            return Err(FaviconError::MissingInput(source));
        }

        let mut produced = Vec::new();
        for size in self.layout.raster_sizes() {
            let output = self.layout.raster(size);
            self.converter.rasterize(&source, size, &output)?;
            self.reporter.report(ProgressEvent::Generated { path: output.clone() });
            produced.push(OutputAsset { role: AssetRole::Raster(size), path: output });
        }
        Ok(produced)
    }

    /// Bundle the legacy and smallest standard rasters into the ICO.
    ///
    /// The inputs are assumed to exist from [`Self::generate_raster_set`].
    pub fn build_icon_container(&self) -> Result<OutputAsset, FaviconError> {
        let output = self.layout.bundle();
        let inputs: Vec<_> = BUNDLE_SIZES.iter().map(|&size| self.layout.raster(size)).collect();

        self.reporter.report(ProgressEvent::BundleStarted { path: output.clone() });
        self.converter.bundle(&inputs, &output)?;
        self.reporter.report(ProgressEvent::Generated { path: output.clone() });

        Ok(OutputAsset { role: AssetRole::Bundle, path: output })
    }

    /// Run every step and return the produced outputs.
    pub fn run(&self) -> Result<Vec<OutputAsset>, FaviconError> {
        log::debug!(
            "generating favicons in {} with {} converter",
            self.layout.public_dir().display(),
            self.converter.name()
        );

        self.check_capability()?;
        let mut outputs = self.generate_raster_set()?;
        outputs.push(self.build_icon_container()?);

        self.reporter.report(ProgressEvent::Finished { outputs: outputs.len() });
        Ok(outputs)
    }
}
