pub mod android;
pub mod layout;
pub mod sizes;
pub mod source;
pub mod windows;

use std::fmt;
use std::io;
use std::path::PathBuf;

use image::ImageError;

/// Error type for icon generation.
#[derive(Debug)]
pub enum IconError {
    SourceNotFound { path: PathBuf },
    DecodeFailed { path: PathBuf, source: ImageError },
    CreateDirFailed { path: PathBuf, source: io::Error },
    EncodeFailed { path: PathBuf, reason: String },
    WriteFailed { path: PathBuf, source: io::Error },
    IcoFailed { path: PathBuf, reason: String },
    ReportFailed { path: PathBuf, source: io::Error },
}

impl fmt::Display for IconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconError::SourceNotFound { path } => {
                write!(f, "{} not found!", path.display())
            }
            IconError::DecodeFailed { path, source } => {
                write!(f, "failed to decode '{}': {}", path.display(), source)
            }
            IconError::CreateDirFailed { path, source } => {
                write!(f, "failed to create directory '{}': {}", path.display(), source)
            }
            IconError::EncodeFailed { path, reason } => {
                write!(f, "failed to encode '{}': {}", path.display(), reason)
            }
            IconError::WriteFailed { path, source } => {
                write!(f, "failed to write '{}': {}", path.display(), source)
            }
            IconError::IcoFailed { path, reason } => {
                write!(f, "failed to produce '{}': {}", path.display(), reason)
            }
            IconError::ReportFailed { path, source } => {
                write!(f, "failed to write report '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for IconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IconError::DecodeFailed { source, .. } => Some(source),
            IconError::CreateDirFailed { source, .. }
            | IconError::WriteFailed { source, .. }
            | IconError::ReportFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Progress event emitted while icons are generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// A square PNG was written
    Generated { path: PathBuf, size: u32 },
    /// A single size of a batch could not be produced
    Failed { path: PathBuf, size: u32, reason: String },
    /// An ICO container was written with these resolutions
    Packaged { path: PathBuf, sizes: Vec<u32> },
    /// The multi-resolution ICO was discarded and rebuilt from one size
    Fallback { path: PathBuf, reason: String, size: u32 },
}

/// An output file written to a fixed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub path: PathBuf,
    pub size: u32,
}

/// A size of a batch that could not be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeFailure {
    pub path: PathBuf,
    pub size: u32,
    pub reason: String,
}

/// Outcome of one Android batch. Sizes are processed independently, so a
/// batch can be partially written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub generated: Vec<GeneratedIcon>,
    pub failed: Vec<SizeFailure>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Outcome of Windows icon packaging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcoOutcome {
    pub path: PathBuf,
    /// Edge lengths embedded in the written file
    pub sizes: Vec<u32>,
    /// Set when the single-resolution fallback produced the file
    pub fallback_reason: Option<String>,
}
