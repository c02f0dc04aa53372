use std::path::{Path, PathBuf};

use crate::icon::android::{generate_adaptive_icons, generate_launcher_icons};
use crate::icon::layout::{Layout, Phase, Profile};
use crate::icon::windows::generate_windows_icon;
use crate::icon::{BatchReport, IcoOutcome, IconError, ProgressEvent};
use crate::utils::hash::hash_file;
use crate::utils::report::{EntryStatus, Report, ReportEntry};

/// What a successful phase produced
#[derive(Debug)]
pub enum PhaseOutput {
    Android(BatchReport),
    Windows(IcoOutcome),
}

/// Result of one phase of a profile
#[derive(Debug)]
pub struct PhaseOutcome {
    pub phase: Phase,
    pub source: PathBuf,
    pub result: Result<PhaseOutput, IconError>,
}

impl PhaseOutcome {
    pub fn is_success(&self) -> bool {
        match &self.result {
            Ok(PhaseOutput::Android(batch)) => batch.is_success(),
            Ok(PhaseOutput::Windows(_)) => true,
            Err(_) => false,
        }
    }
}

#[derive(Debug)]
pub struct RunSummary {
    pub profile: Profile,
    pub phases: Vec<PhaseOutcome>,
}

impl RunSummary {
    pub fn success(&self) -> bool {
        self.phases.iter().all(PhaseOutcome::is_success)
    }
}

/// Generate every icon of `profile` under the project `layout`.
///
/// Phases run in order and never stop each other; a failed phase is
/// reported and the next one still runs. Returns true only if every phase
/// succeeded and the report (when requested) was written.
pub fn run(layout: &Layout, profile: Profile, report_path: Option<&Path>) -> bool {
    let mut phases = Vec::new();

    for (index, &(phase, source)) in profile.phases().iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("Generating {}...", phase.description());

        let outcome = run_phase(layout, phase, source, |event| print_event(layout, &event));
        if let Err(e) = &outcome.result {
            print_phase_error(layout, phase, e);
        }
        phases.push(outcome);
    }

    let summary = RunSummary { profile, phases };
    let mut success = summary.success();

    if let Some(path) = report_path {
        match write_report(&summary, layout, path) {
            Ok(()) => println!("\nReport written to {}", path.display()),
            Err(e) => {
                eprintln!("\nError: {}", e);
                success = false;
            }
        }
    }

    if success {
        println!("\n[SUCCESS] All icons generated successfully!");
    } else {
        println!("\n[ERROR] Some icons failed to generate");
    }

    success
}

/// Run a single phase, reading `source` relative to the layout root.
pub fn run_phase<F>(layout: &Layout, phase: Phase, source: &str, on_progress: F) -> PhaseOutcome
where
    F: FnMut(ProgressEvent),
{
    let source = layout.resolve(source);

    let result = match phase {
        Phase::AndroidLauncher => {
            generate_launcher_icons(&source, layout, on_progress).map(PhaseOutput::Android)
        }
        Phase::AndroidAdaptive => {
            generate_adaptive_icons(&source, layout, on_progress).map(PhaseOutput::Android)
        }
        Phase::WindowsIcon => {
            generate_windows_icon(&source, layout, on_progress).map(PhaseOutput::Windows)
        }
    };

    PhaseOutcome {
        phase,
        source,
        result,
    }
}

fn print_event(layout: &Layout, event: &ProgressEvent) {
    match event {
        ProgressEvent::Generated { path, size } => {
            println!("Generated: {} ({}x{})", layout.relative(path).display(), size, size);
        }
        ProgressEvent::Failed { path, size, reason } => {
            println!(
                "Failed: {} ({}x{}): {}",
                layout.relative(path).display(),
                size,
                size,
                reason
            );
        }
        ProgressEvent::Packaged { path, sizes } => {
            println!("Generated: {} with sizes {:?}", layout.relative(path).display(), sizes);
        }
        ProgressEvent::Fallback { path, reason, size } => {
            println!(
                "Warning: {} {}; regenerated with {}x{} only",
                layout.relative(path).display(),
                reason,
                size,
                size
            );
        }
    }
}

fn print_phase_error(layout: &Layout, phase: Phase, error: &IconError) {
    match error {
        IconError::SourceNotFound { path } => {
            println!("Error: {} not found!", layout.relative(path).display());
        }
        other => println!("Error generating {}: {}", phase.description(), other),
    }
}

fn write_report(summary: &RunSummary, layout: &Layout, path: &Path) -> Result<(), IconError> {
    build_report(summary, layout)
        .save(path)
        .map_err(|e| IconError::ReportFailed {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Build the JSON report for a run. Generated files are hashed from disk.
pub fn build_report(summary: &RunSummary, layout: &Layout) -> Report {
    let display = |path: &Path| layout.relative(path).display().to_string();
    let generated = |phase: Phase, path: &Path, sizes: Vec<u32>, fallback: Option<String>| {
        let (sha256, error) = match hash_file(path) {
            Ok(hash) => (Some(hash), None),
            Err(e) => (None, Some(format!("failed to hash generated file: {}", e))),
        };
        ReportEntry {
            phase,
            file: display(path),
            status: EntryStatus::Generated,
            sizes,
            sha256,
            fallback,
            error,
        }
    };
    let failed = |phase: Phase, path: &Path, sizes: Vec<u32>, error: String| ReportEntry {
        phase,
        file: display(path),
        status: EntryStatus::Failed,
        sizes,
        sha256: None,
        fallback: None,
        error: Some(error),
    };

    let mut entries = Vec::new();

    for outcome in &summary.phases {
        match &outcome.result {
            Ok(PhaseOutput::Android(batch)) => {
                for icon in &batch.generated {
                    entries.push(generated(outcome.phase, &icon.path, vec![icon.size], None));
                }
                for failure in &batch.failed {
                    entries.push(failed(
                        outcome.phase,
                        &failure.path,
                        vec![failure.size],
                        failure.reason.clone(),
                    ));
                }
            }
            Ok(PhaseOutput::Windows(ico)) => {
                entries.push(generated(
                    outcome.phase,
                    &ico.path,
                    ico.sizes.clone(),
                    ico.fallback_reason.clone(),
                ));
            }
            Err(e) => {
                entries.push(failed(outcome.phase, &outcome.source, Vec::new(), e.to_string()));
            }
        }
    }

    Report {
        profile: summary.profile,
        success: summary.success(),
        entries,
    }
}
