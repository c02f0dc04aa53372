use std::path::PathBuf;
use std::process;

use clap::Parser;

use launcher_icons::commands::generate;
use launcher_icons::icon::layout::{Layout, Profile};

#[derive(Parser)]
#[command(name = "launcher-icons")]
#[command(about = "Generate Android launcher icons and the Windows app icon from a source logo")]
struct Cli {
    /// Project root containing assets/, android/ and windows/
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Source logo set and outputs to generate
    #[arg(long, value_enum, default_value_t = Profile::Logo)]
    profile: Profile,

    /// Write a JSON summary of the generated files
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    let layout = Layout::new(cli.root);

    if !generate::run(&layout, cli.profile, cli.report.as_deref()) {
        process::exit(1);
    }
}
