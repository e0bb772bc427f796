//! Source and output asset paths
//!
//! Every file the pipeline reads or writes lives under one public directory
//! at a fixed name:
//!
//! | Role | File |
//! |------|------|
//! | Source | `favicon.svg` |
//! | Raster N | `favicon-{N}x{N}.png` for N in 48, 96, 192, 32 |
//! | Bundle | `favicon.ico` (built from the 32 and 48 rasters) |

use std::fmt;
use std::path::{Path, PathBuf};

/// Standard raster sizes, generated in this order
pub const STANDARD_SIZES: [u32; 3] = [48, 96, 192];

/// Legacy raster size, generated after the standard sizes
pub const LEGACY_SIZE: u32 = 32;

/// Raster sizes bundled into the ICO container, smallest first
pub const BUNDLE_SIZES: [u32; 2] = [LEGACY_SIZE, 48];

/// Default public directory, relative to the project root
pub const DEFAULT_PUBLIC_DIR: &str = "public";

const SOURCE_FILE: &str = "favicon.svg";
const BUNDLE_FILE: &str = "favicon.ico";

/// What an output file is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetRole {
    /// Square PNG of the given pixel dimension
    Raster(u32),
    /// Multi-resolution ICO container
    Bundle,
}

impl fmt::Display for AssetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetRole::Raster(size) => write!(f, "{}x{} png", size, size),
            AssetRole::Bundle => write!(f, "ico bundle"),
        }
    }
}

/// A file produced by the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputAsset {
    pub role: AssetRole,
    pub path: PathBuf,
}

/// Resolves asset paths under a public directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLayout {
    public_dir: PathBuf,
}

impl AssetLayout {
    pub fn new(public_dir: impl Into<PathBuf>) -> Self {
        Self { public_dir: public_dir.into() }
    }

    pub fn public_dir(&self) -> &Path {
        &self.public_dir
    }

    /// Path of the source SVG.
    pub fn source(&self) -> PathBuf {
        self.public_dir.join(SOURCE_FILE)
    }

    /// Path of the PNG for a square `size`.
    pub fn raster(&self, size: u32) -> PathBuf {
        self.public_dir.join(raster_file_name(size))
    }

    /// Path of the ICO container.
    pub fn bundle(&self) -> PathBuf {
        self.public_dir.join(BUNDLE_FILE)
    }

    /// Raster sizes in generation order: standard sizes, then legacy.
    pub fn raster_sizes(&self) -> impl Iterator<Item = u32> {
        STANDARD_SIZES.into_iter().chain(std::iter::once(LEGACY_SIZE))
    }

    /// Every output the pipeline writes, in the order it writes them.
    pub fn outputs(&self) -> Vec<OutputAsset> {
        let mut outputs: Vec<OutputAsset> = self
            .raster_sizes()
            .map(|size| OutputAsset { role: AssetRole::Raster(size), path: self.raster(size) })
            .collect();
        outputs.push(OutputAsset { role: AssetRole::Bundle, path: self.bundle() });
        outputs
    }
}

impl Default for AssetLayout {
    fn default() -> Self {
        Self::new(DEFAULT_PUBLIC_DIR)
    }
}

/// File name for a square raster of `size` pixels.
pub fn raster_file_name(size: u32) -> String {
    format!("favicon-{}x{}.png", size, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_paths() {
        let layout = AssetLayout::default();
        assert_eq!(layout.source(), PathBuf::from("public/favicon.svg"));
        assert_eq!(layout.raster(48), PathBuf::from("public/favicon-48x48.png"));
        assert_eq!(layout.raster(192), PathBuf::from("public/favicon-192x192.png"));
        assert_eq!(layout.bundle(), PathBuf::from("public/favicon.ico"));
    }

    #[test]
    fn test_raster_sizes_order() {
        let sizes: Vec<u32> = AssetLayout::default().raster_sizes().collect();
        assert_eq!(sizes, vec![48, 96, 192, 32]);
    }

    #[test]
    fn test_outputs_are_five_files_bundle_last() {
        let outputs = AssetLayout::new("site/static").outputs();
        assert_eq!(outputs.len(), 5);
        assert_eq!(outputs[3].path, PathBuf::from("site/static/favicon-32x32.png"));
        assert_eq!(outputs[4].role, AssetRole::Bundle);
        assert_eq!(outputs[4].path, PathBuf::from("site/static/favicon.ico"));
    }

    #[test]
    fn test_bundle_sizes_are_produced_rasters() {
        let layout = AssetLayout::default();
        let sizes: Vec<u32> = layout.raster_sizes().collect();
        for size in BUNDLE_SIZES {
            assert!(sizes.contains(&size));
        }
    }

    #[test]
    fn test_role_display() {
        assert_eq!(AssetRole::Raster(96).to_string(), "96x96 png");
        assert_eq!(AssetRole::Bundle.to_string(), "ico bundle");
    }
}
