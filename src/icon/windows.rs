use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::DynamicImage;

use crate::icon::layout::Layout;
use crate::icon::sizes::{MIN_MULTI_RES_ICO_BYTES, WINDOWS_ICO_SIZES};
use crate::icon::source::{load_source, resize_square};
use crate::icon::{IcoOutcome, IconError, ProgressEvent};
use crate::utils::file_ops::{ensure_parent_dir, file_len, remove_if_exists};

/// Generate `windows/runner/resources/app_icon.ico` from a source image.
///
/// All resolutions in [`WINDOWS_ICO_SIZES`] are packaged into one ICO. If
/// packaging fails, or the written file is smaller than
/// [`MIN_MULTI_RES_ICO_BYTES`], the file is replaced by one holding only the
/// largest resolution. Any pre-existing file is deleted first.
pub fn generate_windows_icon<F>(
    source: &Path,
    layout: &Layout,
    on_progress: F,
) -> Result<IcoOutcome, IconError>
where
    F: FnMut(ProgressEvent),
{
    let image = load_source(source)?;
    package_ico(
        &image,
        &layout.windows_ico_path(),
        WINDOWS_ICO_SIZES,
        MIN_MULTI_RES_ICO_BYTES,
        write_ico,
        on_progress,
    )
}

/// Package `sizes` into `output`, writing each ICO attempt with `write`.
fn package_ico<W, F>(
    image: &DynamicImage,
    output: &Path,
    sizes: &[u32],
    min_bytes: u64,
    mut write: W,
    mut on_progress: F,
) -> Result<IcoOutcome, IconError>
where
    W: FnMut(&[IconImage], &Path) -> Result<(), IconError>,
    F: FnMut(ProgressEvent),
{
    let Some(largest) = sizes.iter().copied().max() else {
        return Err(IconError::IcoFailed {
            path: output.to_path_buf(),
            reason: "no resolutions requested".to_string(),
        });
    };

    let images: Vec<IconImage> = sizes.iter().map(|&size| render_rgba(image, size)).collect();

    remove_if_exists(output).map_err(|e| IconError::WriteFailed {
        path: output.to_path_buf(),
        source: e,
    })?;
    ensure_parent_dir(output).map_err(|e| IconError::CreateDirFailed {
        path: output.parent().unwrap_or(output).to_path_buf(),
        source: e,
    })?;

    let reason = match write(&images, output) {
        Ok(()) => match file_len(output) {
            Ok(len) if len >= min_bytes => {
                on_progress(ProgressEvent::Packaged {
                    path: output.to_path_buf(),
                    sizes: sizes.to_vec(),
                });
                return Ok(IcoOutcome {
                    path: output.to_path_buf(),
                    sizes: sizes.to_vec(),
                    fallback_reason: None,
                });
            }
            Ok(len) => format!("is only {} bytes (expected at least {})", len, min_bytes),
            Err(e) => format!("could not be inspected: {}", e),
        },
        Err(e) => e.to_string(),
    };

    // Single-resolution fallback
    let single = render_rgba(image, largest);
    let fallback = remove_if_exists(output)
        .map_err(|e| e.to_string())
        .and_then(|()| write(std::slice::from_ref(&single), output).map_err(|e| e.to_string()));

    if let Err(e) = fallback {
        // Never leave a partial file behind at the fixed output path
        let _ = remove_if_exists(output);
        return Err(IconError::IcoFailed {
            path: output.to_path_buf(),
            reason: format!("{}; fallback failed: {}", reason, e),
        });
    }

    on_progress(ProgressEvent::Fallback {
        path: output.to_path_buf(),
        reason: reason.clone(),
        size: largest,
    });

    Ok(IcoOutcome {
        path: output.to_path_buf(),
        sizes: vec![largest],
        fallback_reason: Some(reason),
    })
}

fn render_rgba(image: &DynamicImage, size: u32) -> IconImage {
    let rgba = resize_square(image, size).to_rgba8();
    IconImage::from_rgba_data(size, size, rgba.into_raw())
}

fn write_ico(images: &[IconImage], output: &Path) -> Result<(), IconError> {
    let mut icon_dir = IconDir::new(ResourceType::Icon);

    for image in images {
        let entry = IconDirEntry::encode(image).map_err(|e| IconError::EncodeFailed {
            path: output.to_path_buf(),
            reason: format!("{}x{} entry: {}", image.width(), image.height(), e),
        })?;
        icon_dir.add_entry(entry);
    }

    let write_failed = |e| IconError::WriteFailed {
        path: output.to_path_buf(),
        source: e,
    };

    let file = File::create(output).map_err(write_failed)?;
    let mut writer = BufWriter::new(file);
    icon_dir.write(&mut writer).map_err(write_failed)?;
    writer.flush().map_err(write_failed)?;

    Ok(())
}
