//! # skillstats
//!
//! Keeps the statistics table and skill distribution chart of a skill
//! collection's README in sync with the repository.
//!
//! ## Usage
//!
//! ```bash
//! # Update README.md at the repository root
//! skillstats
//!
//! # Point at a repository explicitly
//! skillstats --root ~/src/skills
//!
//! # Fail (exit 1) if README.md is stale, without writing it
//! skillstats --check
//!
//! # Skip another path segment, with debug logging
//! skillstats --exclude vendor -v
//! ```
//!
//! Without `--root`, the repository is the parent of the directory holding
//! the binary, falling back to the current directory.

mod console;
mod render;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use skillstatslib::config::CONFIG_FILE_NAME;
use skillstatslib::{
    candidate_roots, collect_stats, locate_root, patch_file, PatchMode, SkillstatsError,
    StatsConfig,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::console::Console;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("skillstats")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Update the repository statistics in a skill collection's README")
        .arg(
            Arg::new("root")
                .short('r')
                .long("root")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Repository root (defaults to the binary's parent dir, then the current dir)"),
        )
        .arg(
            Arg::new("document")
                .short('d')
                .long("document")
                .default_value("README.md")
                .help("Document to patch, relative to the root"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Config file (defaults to skillstats.toml at the root, if present)"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Skip files under this path segment (can be specified multiple times)"),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .action(ArgAction::SetTrue)
                .help("Do not write; exit with status 1 if the document is out of date"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log more (-v debug, -vv trace); RUST_LOG overrides"),
        )
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

/// Assemble the stats config: defaults, then the config file, then flags.
fn build_config(matches: &ArgMatches, root: &Path) -> anyhow::Result<StatsConfig> {
    let mut config = StatsConfig::new();

    let config_path = match matches.get_one::<PathBuf>("config") {
        Some(path) => Some(path.clone()),
        None => Some(root.join(CONFIG_FILE_NAME)).filter(|p| p.is_file()),
    };
    if let Some(path) = config_path {
        debug!("loading config from {}", path.display());
        config = config.merge_file(&path)?;
    }

    if let Some(excludes) = matches.get_many::<String>("exclude") {
        for name in excludes {
            config = config.exclude(name.clone());
        }
    }

    Ok(config)
}

/// Whether the run should exit non-zero.
#[derive(Debug, PartialEq, Eq)]
enum Status {
    Done,
    Stale,
}

fn run(matches: &ArgMatches, console: &Console) -> anyhow::Result<Status> {
    let document = matches
        .get_one::<String>("document")
        .map(|s| s.as_str())
        .unwrap_or("README.md");
    let check = matches.get_flag("check");

    let exe = std::env::current_exe().ok();
    let cwd = std::env::current_dir().ok();
    let candidates = candidate_roots(
        matches.get_one::<PathBuf>("root").map(PathBuf::as_path),
        exe.as_deref(),
        cwd.as_deref(),
    );
    let root = locate_root(&candidates, document)?;
    render::render_root(console, &root)?;

    let config = build_config(matches, &root)?;
    let stats = collect_stats(&root, &config)
        .with_context(|| format!("failed to collect stats in {}", root.display()))?;
    render::render_stats(console, &stats)?;

    let mode = if check {
        PatchMode::Check
    } else {
        PatchMode::Write
    };
    let outcome = patch_file(root.join(document), &stats, mode)?;
    info!(
        "applied {} rules, skipped {}",
        outcome.report.applied.len(),
        outcome.report.skipped.len()
    );
    for name in &outcome.report.skipped {
        debug!("no target for rule '{name}'");
    }
    render::render_outcome(console, document, outcome.changed, check)?;

    if check && outcome.changed {
        Ok(Status::Stale)
    } else {
        Ok(Status::Done)
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_count("verbose"));
    let console = Console::setup();

    match run(&matches, &console) {
        Ok(Status::Done) => ExitCode::SUCCESS,
        Ok(Status::Stale) => ExitCode::FAILURE,
        Err(err) => {
            match err.downcast_ref::<SkillstatsError>() {
                Some(SkillstatsError::DocumentNotFound { document, .. }) => {
                    console.error(format!(
                        "Could not find {document}. Run from repository root."
                    ));
                    debug!("{err}");
                }
                _ => console.error(format!("{err:#}")),
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_command_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn test_build_config_reads_root_file_and_flags() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "marker = \"AGENT.md\"\n").unwrap();

        let matches = build_command().get_matches_from(["skillstats", "--exclude", "vendor"]);
        let config = build_config(&matches, temp.path()).unwrap();

        assert_eq!(config.marker, "AGENT.md");
        assert!(config.excludes.contains("vendor"));
        assert!(config.excludes.contains("node_modules"));
    }

    #[test]
    fn test_build_config_explicit_file_missing() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("nope.toml");

        let matches = build_command().get_matches_from([
            "skillstats".to_string(),
            "--config".to_string(),
            missing.display().to_string(),
        ]);

        assert!(build_config(&matches, temp.path()).is_err());
    }
}
