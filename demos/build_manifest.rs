//! Build `cars.json` and copy photos for the quiz page.
//!
//! Run with:
//!   cargo run --example build_manifest -- --source <dir> [--dest public] [--limit N] [--dry-run] [--skip-copy]
//!
//! With `--dry-run` nothing is written; the first ten parsed entries are
//! listed instead.

use std::path::PathBuf;
use std::process::ExitCode;

use car_picker::quiz_engine::catalog::{build_manifest, BuildOptions};
use clap::Parser;

/// Generate cars.json and copy JPGs for the car quiz.
#[derive(Debug, Parser)]
#[command(name = "build_manifest")]
pub struct Cli {
    /// Directory that holds the *.JPG photos.
    #[arg(long)]
    pub source: PathBuf,

    /// Web root that receives images/cars/ and data/cars.json.
    #[arg(long, default_value = "public")]
    pub dest: PathBuf,

    /// Process at most this many photos.
    #[arg(long)]
    pub limit: Option<usize>,

    /// List what would be done without copying or writing anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Only update cars.json; do not copy photos.
    #[arg(long)]
    pub skip_copy: bool,
}

impl From<Cli> for BuildOptions {
    fn from(cli: Cli) -> Self {
        BuildOptions {
            limit: cli.limit,
            dry_run: cli.dry_run,
            skip_copy: cli.skip_copy,
            ..BuildOptions::new(cli.source, cli.dest)
        }
    }
}

fn main() -> ExitCode {
    pretty_env_logger::init();

    let options = BuildOptions::from(Cli::parse());
    let report = match build_manifest(&options) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("[ERROR] {e}");
            return ExitCode::FAILURE;
        }
    };

    if report.dry_run {
        println!("=== Dry Run Summary ===");
        println!("Source: {}", options.source.display());
        println!("Destination: {}", options.dest.display());
        println!("Total candidates: {}", report.records.len());
        for record in report.records.iter().take(10) {
            println!("- {} -> {}", record.label, record.image_path);
        }
        if report.records.len() > 10 {
            println!("... and {} more", report.records.len() - 10);
        }
        return ExitCode::SUCCESS;
    }

    if !options.skip_copy {
        println!("[DONE] Copied {} image(s) to {}", report.records.len(), report.images_dir.display());
    }
    println!(
        "[DONE] Wrote manifest with {} entries to {}",
        report.records.len(),
        report.manifest_path.display()
    );
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_onto_build_options() {
        let cli = Cli::try_parse_from([
            "build_manifest", "--source", "photos", "--dest", "out", "--limit", "3", "--dry-run",
        ])
        .unwrap();
        let options = BuildOptions::from(cli);
        assert_eq!(options.source, PathBuf::from("photos"));
        assert_eq!(options.dest, PathBuf::from("out"));
        assert_eq!(options.limit, Some(3));
        assert!(options.dry_run);
        assert!(!options.skip_copy);
    }

    #[test]
    fn dest_defaults_to_public() {
        let cli = Cli::try_parse_from(["build_manifest", "--source", "photos", "--skip-copy"]).unwrap();
        assert_eq!(cli.dest, PathBuf::from("public"));
        assert!(cli.skip_copy);
    }

    #[test]
    fn help_and_unknown_flags_are_not_paths() {
        let help = Cli::try_parse_from(["build_manifest", "--help"]).unwrap_err();
        assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);
        assert!(Cli::try_parse_from(["build_manifest", "--source", "a", "--bogus"]).is_err());
        assert!(Cli::try_parse_from(["build_manifest"]).is_err(), "--source is required");
    }
}
