//! Fixed input and output locations, resolved against a project root

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Serialize;

use crate::icon::sizes::SizeSpec;

pub const LOGO_SOURCE: &str = "assets/logo/logo.png";
pub const AGENIX_ANDROID_SOURCE: &str = "assets/logo/agenix-android.png";
pub const AGENIX_WINDOWS_SOURCE: &str = "assets/logo/agenix-windows.png";

pub const ANDROID_RES_DIR: &str = "android/app/src/main/res";
pub const WINDOWS_ICO_PATH: &str = "windows/runner/resources/app_icon.ico";

/// Which source logos to read and which outputs to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// One logo for every platform; launcher icons and the Windows ICO
    Logo,
    /// Separate Android and Windows logos; also adaptive foregrounds
    Agenix,
}

/// A generation step of a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    AndroidLauncher,
    AndroidAdaptive,
    WindowsIcon,
}

impl Phase {
    pub fn description(self) -> &'static str {
        match self {
            Phase::AndroidLauncher => "Android launcher icons",
            Phase::AndroidAdaptive => "Android adaptive icons",
            Phase::WindowsIcon => "Windows ICO",
        }
    }
}

impl Profile {
    /// Phases in execution order, each with its source relative to the root
    pub fn phases(self) -> &'static [(Phase, &'static str)] {
        match self {
            Profile::Logo => &[
                (Phase::AndroidLauncher, LOGO_SOURCE),
                (Phase::WindowsIcon, LOGO_SOURCE),
            ],
            Profile::Agenix => &[
                (Phase::AndroidLauncher, AGENIX_ANDROID_SOURCE),
                (Phase::AndroidAdaptive, AGENIX_ANDROID_SOURCE),
                (Phase::WindowsIcon, AGENIX_WINDOWS_SOURCE),
            ],
        }
    }
}

/// Project directory that holds `assets/`, `android/` and `windows/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Layout { root: root.into() }
    }

    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn android_res_dir(&self) -> PathBuf {
        self.root.join(ANDROID_RES_DIR)
    }

    /// Output path for an Android size, e.g. `.../mipmap-hdpi/ic_launcher.png`
    pub fn android_icon_path(&self, spec: &SizeSpec) -> PathBuf {
        self.android_res_dir()
            .join(spec.density.dir_name())
            .join(spec.file_name)
    }

    pub fn windows_ico_path(&self) -> PathBuf {
        self.root.join(WINDOWS_ICO_PATH)
    }

    /// Path relative to the root for display and reports; falls back to the
    /// full path when it lies outside the root.
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}
