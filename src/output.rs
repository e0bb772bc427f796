//! PNG and ICO output for the native backend

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::imageops::FilterType;
use image::{ColorType, DynamicImage, RgbaImage};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

/// Largest edge an ICO entry may have
pub const MAX_ICO_EDGE: u32 = 256;

/// Error type for output operations
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Image decoding or encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    /// Image too large for an ICO entry
    #[error("{} is {}x{}, ICO entries must be at most 256x256", .path.display(), .width, .height)]
    TooLargeForIco { path: PathBuf, width: u32, height: u32 },
}

/// Save an RGBA image to a PNG file.
///
/// Parent directories are created if they don't exist.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    image.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

/// Scale an image to fit inside a `size`x`size` box, keeping aspect ratio.
///
/// Uses Lanczos3, which keeps small icons sharp after downsampling from a
/// high-density render.
pub fn fit_square(image: RgbaImage, size: u32) -> RgbaImage {
    if image.width() == size && image.height() == size {
        return image;
    }
    DynamicImage::ImageRgba8(image).resize(size, size, FilterType::Lanczos3).to_rgba8()
}

/// Bundle PNG files into a single ICO at `output`, one entry per input.
pub fn write_ico(inputs: &[PathBuf], output: &Path) -> Result<(), OutputError> {
    let images = inputs
        .iter()
        .map(|path| {
            let image = image::open(path)?.to_rgba8();
            let (width, height) = image.dimensions();
            if width > MAX_ICO_EDGE || height > MAX_ICO_EDGE {
                return Err(OutputError::TooLargeForIco { path: path.clone(), width, height });
            }
            Ok(image)
        })
        .collect::<Result<Vec<_>, OutputError>>()?;

    let frames = images
        .iter()
        .map(|image| {
            IcoFrame::as_png(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let writer = BufWriter::new(File::create(output)?);
    IcoEncoder::new(writer).encode_images(&frames)?;
    Ok(())
}
