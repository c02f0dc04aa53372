use std::path::Path;

use image::{DynamicImage, ImageError, ImageFormat};

use crate::icon::layout::Layout;
use crate::icon::sizes::{ADAPTIVE_FOREGROUND_SIZES, LAUNCHER_SIZES, SizeSpec};
use crate::icon::source::{load_source, resize_square};
use crate::icon::{BatchReport, GeneratedIcon, IconError, ProgressEvent, SizeFailure};
use crate::utils::file_ops::ensure_parent_dir;

/// Generate the legacy launcher icons (`ic_launcher.png`) for every density.
pub fn generate_launcher_icons<F>(
    source: &Path,
    layout: &Layout,
    on_progress: F,
) -> Result<BatchReport, IconError>
where
    F: FnMut(ProgressEvent),
{
    generate_batch(source, layout, LAUNCHER_SIZES, on_progress)
}

/// Generate adaptive icon foregrounds (`ic_launcher_foreground.png`) for
/// every density, next to the launcher icons.
pub fn generate_adaptive_icons<F>(
    source: &Path,
    layout: &Layout,
    on_progress: F,
) -> Result<BatchReport, IconError>
where
    F: FnMut(ProgressEvent),
{
    generate_batch(source, layout, ADAPTIVE_FOREGROUND_SIZES, on_progress)
}

/// Decode the source once, then write every size of the batch.
///
/// A missing or undecodable source fails before any directory is created.
/// After that each size is independent: a failure is recorded in the report
/// and the remaining sizes are still written.
fn generate_batch<F>(
    source: &Path,
    layout: &Layout,
    specs: &[SizeSpec],
    on_progress: F,
) -> Result<BatchReport, IconError>
where
    F: FnMut(ProgressEvent),
{
    let image = load_source(source)?;
    Ok(write_batch(&image, layout, specs, on_progress))
}

fn write_batch<F>(
    image: &DynamicImage,
    layout: &Layout,
    specs: &[SizeSpec],
    mut on_progress: F,
) -> BatchReport
where
    F: FnMut(ProgressEvent),
{
    let mut report = BatchReport::default();

    for spec in specs {
        let path = layout.android_icon_path(spec);

        match write_png(image, spec.edge, &path) {
            Ok(()) => {
                on_progress(ProgressEvent::Generated {
                    path: path.clone(),
                    size: spec.edge,
                });
                report.generated.push(GeneratedIcon {
                    path,
                    size: spec.edge,
                });
            }
            Err(e) => {
                let reason = e.to_string();
                on_progress(ProgressEvent::Failed {
                    path: path.clone(),
                    size: spec.edge,
                    reason: reason.clone(),
                });
                report.failed.push(SizeFailure {
                    path,
                    size: spec.edge,
                    reason,
                });
            }
        }
    }

    report
}

fn write_png(image: &DynamicImage, edge: u32, path: &Path) -> Result<(), IconError> {
    ensure_parent_dir(path).map_err(|e| IconError::CreateDirFailed {
        path: path.parent().unwrap_or(path).to_path_buf(),
        source: e,
    })?;

    resize_square(image, edge)
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| match e {
            ImageError::IoError(source) => IconError::WriteFailed {
                path: path.to_path_buf(),
                source,
            },
            other => IconError::EncodeFailed {
                path: path.to_path_buf(),
                reason: other.to_string(),
            },
        })
}
