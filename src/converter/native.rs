//! In-process backend built on resvg
//!
//! The SVG is rendered at `density` DPI (CSS pixels are 96 DPI), onto a
//! transparent pixmap, then downsampled into the target square. This matches
//! how ImageMagick treats `-density` followed by `-resize`.

use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg;

use super::Converter;
use crate::error::FaviconError;
use crate::output::{fit_square, save_png, write_ico};

/// DPI that usvg maps one user unit to
const CSS_DPI: f32 = 96.0;

/// Cap on the intermediate render edge, in pixels
const MAX_RENDER_EDGE: f32 = 4096.0;

/// Converter that rasterizes SVG in-process.
#[derive(Debug, Clone)]
pub struct NativeConverter {
    density: u32,
}

impl NativeConverter {
    pub fn new(density: u32) -> Self {
        Self { density }
    }

    /// Render the SVG at the configured density.
    fn render(&self, source: &Path, output: &Path) -> Result<RgbaImage, FaviconError> {
        let data = fs::read(source)?;

        let mut options = usvg::Options::default();
        options.dpi = self.density as f32;
        options.resources_dir =
            fs::canonicalize(source).ok().and_then(|p| p.parent().map(Path::to_path_buf));

        let tree = usvg::Tree::from_data(&data, &options)
            .map_err(|e| FaviconError::conversion(output, format!("invalid SVG: {}", e)))?;

        let size = tree.size();
        if (size.width() - size.height()).abs() > f32::EPSILON {
            log::warn!(
                "{} is {}x{}, rasters will not be square",
                source.display(),
                size.width(),
                size.height()
            );
        }
        let mut scale = self.density as f32 / CSS_DPI;
        let longest = size.width().max(size.height()) * scale;
        if longest > MAX_RENDER_EDGE {
            scale *= MAX_RENDER_EDGE / longest;
        }
        let width = ((size.width() * scale).round() as u32).max(1);
        let height = ((size.height() * scale).round() as u32).max(1);

        let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
            FaviconError::conversion(output, format!("cannot allocate {}x{} pixmap", width, height))
        })?;
        resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

        log::debug!("rendered {} at {}x{} ({} dpi)", source.display(), width, height, self.density);
        Ok(pixmap_to_rgba(&pixmap))
    }
}

/// Convert a premultiplied pixmap into a straight-alpha image.
fn pixmap_to_rgba(pixmap: &Pixmap) -> RgbaImage {
    let mut image = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    image
}

impl Converter for NativeConverter {
    fn name(&self) -> &str {
        "native"
    }

    fn check_available(&self) -> Result<(), FaviconError> {
        Ok(())
    }

    fn rasterize(&self, source: &Path, size: u32, output: &Path) -> Result<(), FaviconError> {
        let rendered = self.render(source, output)?;
        let fitted = fit_square(rendered, size);
        save_png(&fitted, output).map_err(|e| FaviconError::conversion(output, e.to_string()))
    }

    fn bundle(&self, inputs: &[PathBuf], output: &Path) -> Result<(), FaviconError> {
        write_ico(inputs, output).map_err(|e| FaviconError::conversion(output, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CIRCLE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="64" height="64" viewBox="0 0 64 64">
<circle cx="32" cy="32" r="28" fill="#1e88e5"/>
</svg>"##;

    const WIDE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="96" height="48">
<rect width="96" height="48" fill="#43a047"/>
</svg>"##;

    fn write_svg(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("favicon.svg");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_rasterize_square() {
        let temp = TempDir::new().unwrap();
        let svg = write_svg(temp.path(), CIRCLE_SVG);
        let out = temp.path().join("favicon-48x48.png");

        NativeConverter::new(300).rasterize(&svg, 48, &out).unwrap();

        let image = image::open(&out).unwrap().to_rgba8();
        assert_eq!(image.dimensions(), (48, 48));
        // Corners lie outside the circle and stay transparent
        assert_eq!(image.get_pixel(0, 0)[3], 0);
        // Centre is opaque
        assert!(image.get_pixel(24, 24)[3] > 250);
    }

    #[test]
    fn test_rasterize_keeps_aspect_ratio() {
        let temp = TempDir::new().unwrap();
        let svg = write_svg(temp.path(), WIDE_SVG);
        let out = temp.path().join("wide.png");

        // At 96 dpi one user unit is one pixel, so the render is 96x48
        NativeConverter::new(96).rasterize(&svg, 48, &out).unwrap();

        let image = image::open(&out).unwrap();
        assert_eq!((image.width(), image.height()), (48, 24));
    }

    #[test]
    fn test_rasterize_is_deterministic() {
        let temp = TempDir::new().unwrap();
        let svg = write_svg(temp.path(), CIRCLE_SVG);
        let a = temp.path().join("a.png");
        let b = temp.path().join("b.png");

        let converter = NativeConverter::new(300);
        converter.rasterize(&svg, 32, &a).unwrap();
        converter.rasterize(&svg, 32, &b).unwrap();

        assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
    }

    #[test]
    fn test_invalid_svg_is_conversion_failure() {
        let temp = TempDir::new().unwrap();
        let svg = write_svg(temp.path(), "this is not svg");
        let out = temp.path().join("out.png");

        let err = NativeConverter::new(300).rasterize(&svg, 48, &out).unwrap_err();
        assert!(matches!(err, FaviconError::ConversionFailure { .. }));
        assert!(!out.exists());
    }

    #[test]
    fn test_bundle_builds_ico() {
        let temp = TempDir::new().unwrap();
        let svg = write_svg(temp.path(), CIRCLE_SVG);
        let converter = NativeConverter::new(300);

        let small = temp.path().join("favicon-32x32.png");
        let large = temp.path().join("favicon-48x48.png");
        converter.rasterize(&svg, 32, &small).unwrap();
        converter.rasterize(&svg, 48, &large).unwrap();

        let ico = temp.path().join("favicon.ico");
        converter.bundle(&[small, large], &ico).unwrap();

        let decoded = image::open(&ico).unwrap();
        // The decoder picks the largest entry
        assert_eq!((decoded.width(), decoded.height()), (48, 48));
    }

    #[test]
    fn test_always_available() {
        assert!(NativeConverter::new(300).check_available().is_ok());
    }
}
