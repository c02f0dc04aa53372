//! Fixed output size tables

/// Android screen density tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DensityBucket {
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl DensityBucket {
    /// Resource directory name for this bucket (e.g., "mipmap-hdpi")
    pub fn dir_name(self) -> &'static str {
        match self {
            DensityBucket::Mdpi => "mipmap-mdpi",
            DensityBucket::Hdpi => "mipmap-hdpi",
            DensityBucket::Xhdpi => "mipmap-xhdpi",
            DensityBucket::Xxhdpi => "mipmap-xxhdpi",
            DensityBucket::Xxxhdpi => "mipmap-xxxhdpi",
        }
    }
}

/// A square output: where it goes and how large it is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpec {
    pub density: DensityBucket,
    /// File name inside the density directory
    pub file_name: &'static str,
    /// Edge length in pixels
    pub edge: u32,
}

pub const LAUNCHER_FILE_NAME: &str = "ic_launcher.png";
pub const FOREGROUND_FILE_NAME: &str = "ic_launcher_foreground.png";

/// Legacy launcher icons
pub const LAUNCHER_SIZES: &[SizeSpec] = &[
    SizeSpec { density: DensityBucket::Mdpi, file_name: LAUNCHER_FILE_NAME, edge: 48 },
    SizeSpec { density: DensityBucket::Hdpi, file_name: LAUNCHER_FILE_NAME, edge: 72 },
    SizeSpec { density: DensityBucket::Xhdpi, file_name: LAUNCHER_FILE_NAME, edge: 96 },
    SizeSpec { density: DensityBucket::Xxhdpi, file_name: LAUNCHER_FILE_NAME, edge: 144 },
    SizeSpec { density: DensityBucket::Xxxhdpi, file_name: LAUNCHER_FILE_NAME, edge: 192 },
];

/// Adaptive icon foreground layers (108dp canvas per density)
pub const ADAPTIVE_FOREGROUND_SIZES: &[SizeSpec] = &[
    SizeSpec { density: DensityBucket::Mdpi, file_name: FOREGROUND_FILE_NAME, edge: 108 },
    SizeSpec { density: DensityBucket::Hdpi, file_name: FOREGROUND_FILE_NAME, edge: 162 },
    SizeSpec { density: DensityBucket::Xhdpi, file_name: FOREGROUND_FILE_NAME, edge: 216 },
    SizeSpec { density: DensityBucket::Xxhdpi, file_name: FOREGROUND_FILE_NAME, edge: 324 },
    SizeSpec { density: DensityBucket::Xxxhdpi, file_name: FOREGROUND_FILE_NAME, edge: 432 },
];

/// Resolutions embedded in the Windows app icon, smallest first
pub const WINDOWS_ICO_SIZES: &[u32] = &[16, 32, 48, 64, 128, 256];

/// A multi-resolution ICO smaller than this holds at most the smallest size.
pub const MIN_MULTI_RES_ICO_BYTES: u64 = 2 * 1024;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launcher_sizes_cover_every_bucket_once() {
        let dirs: Vec<_> = LAUNCHER_SIZES.iter().map(|s| s.density.dir_name()).collect();
        assert_eq!(
            dirs,
            vec!["mipmap-mdpi", "mipmap-hdpi", "mipmap-xhdpi", "mipmap-xxhdpi", "mipmap-xxxhdpi"]
        );
    }

    #[test]
    fn adaptive_sizes_are_launcher_sizes_scaled() {
        // 108dp foreground canvas vs 48dp legacy icon
        for (launcher, foreground) in LAUNCHER_SIZES.iter().zip(ADAPTIVE_FOREGROUND_SIZES) {
            assert_eq!(launcher.density, foreground.density);
            assert_eq!(launcher.edge * 108 / 48, foreground.edge);
            assert_eq!(foreground.file_name, "ic_launcher_foreground.png");
        }
    }

    #[test]
    fn ico_sizes_ascend_to_256() {
        assert!(WINDOWS_ICO_SIZES.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(WINDOWS_ICO_SIZES.last(), Some(&256));
    }
}
