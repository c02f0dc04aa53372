use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

use crate::icon::layout::{Phase, Profile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Generated,
    Failed,
}

/// One output file (or one failed phase) in a generation report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub phase: Phase,
    /// Path relative to the project root
    pub file: String,
    pub status: EntryStatus,
    /// Edge lengths contained in the file
    pub sizes: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Summary of a generation run, written as JSON with `--report`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub profile: Profile,
    pub success: bool,
    pub entries: Vec<ReportEntry>,
}

impl Report {
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn save_produces_valid_json() {
        let report = Report {
            profile: Profile::Agenix,
            success: false,
            entries: vec![
                ReportEntry {
                    phase: Phase::WindowsIcon,
                    file: "windows/runner/resources/app_icon.ico".to_string(),
                    status: EntryStatus::Generated,
                    sizes: vec![256],
                    sha256: Some("abc123".to_string()),
                    fallback: Some("undersized".to_string()),
                    error: None,
                },
                ReportEntry {
                    phase: Phase::AndroidAdaptive,
                    file: "assets/logo/agenix-android.png".to_string(),
                    status: EntryStatus::Failed,
                    sizes: vec![],
                    sha256: None,
                    fallback: None,
                    error: Some("not found".to_string()),
                },
            ],
        };

        let temp_file = NamedTempFile::new().unwrap();
        report.save(temp_file.path()).unwrap();

        let content = fs::read_to_string(temp_file.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert_eq!(value["profile"], "agenix");
        assert_eq!(value["success"], false);
        assert_eq!(value["entries"][0]["phase"], "windows_icon");
        assert_eq!(value["entries"][0]["status"], "generated");
        assert_eq!(value["entries"][0]["sha256"], "abc123");
        assert!(value["entries"][0].get("error").is_none());
        assert_eq!(value["entries"][1]["status"], "failed");
        assert!(value["entries"][1].get("sha256").is_none());
    }

    #[test]
    fn save_to_missing_directory_errors() {
        let report = Report {
            profile: Profile::Logo,
            success: true,
            entries: Vec::new(),
        };

        assert!(report.save(Path::new("/nonexistent/dir/report.json")).is_err());
    }
}
