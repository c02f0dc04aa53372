use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, ImageError, ImageReader};

use crate::icon::IconError;

/// Load and decode a source image.
///
/// The path is checked before anything is read so a missing logo is
/// reported as `SourceNotFound` rather than a generic I/O error. The format
/// is guessed from the file contents, not the extension.
pub fn load_source(path: &Path) -> Result<DynamicImage, IconError> {
    if !path.is_file() {
        return Err(IconError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| IconError::DecodeFailed {
            path: path.to_path_buf(),
            source: ImageError::IoError(e),
        })?;

    reader.decode().map_err(|e| IconError::DecodeFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Resize to an `edge`x`edge` square with Lanczos resampling.
/// Non-square sources are stretched, not cropped.
pub fn resize_square(source: &DynamicImage, edge: u32) -> DynamicImage {
    source.resize_exact(edge, edge, FilterType::Lanczos3)
}
