//! # skillstatslib
//!
//! Repository statistics for skill collections, and the README patcher that
//! keeps them current.
//!
//! ## Overview
//!
//! A skill collection is a tree of category directories (`frontend/`,
//! `general/`, ...) where every skill is marked by a `SKILL.md` file. This
//! library runs a three-stage pipeline over such a tree:
//!
//! - **Source**: discover files once, pruning excluded path segments
//! - **Data**: count markers, docs, scripts and lines; break markers down by category
//! - **Patch**: rewrite the stats table and skill chart of the README in place
//!
//! Patching is a pure function from text to text, so it is idempotent and
//! testable without touching the filesystem.
//!
//! ## Example
//!
//! ```rust
//! use skillstatslib::{collect_stats, patch_text, StatsConfig};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::create_dir_all(dir.path().join("frontend/react")).unwrap();
//! fs::write(dir.path().join("frontend/react/SKILL.md"), "# React\n").unwrap();
//!
//! let stats = collect_stats(dir.path(), &StatsConfig::new()).unwrap();
//! assert_eq!(stats.markers, 1);
//!
//! let readme = "| 🎯 **Total Skills** | 0 |\n";
//! let report = patch_text(readme, &stats).unwrap();
//! assert_eq!(report.text, "| 🎯 **Total Skills** | 1 |\n");
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod locate;
pub mod output;
pub mod patch;
pub mod source;

pub use config::{Category, StatsConfig};
pub use data::{
    collect_stats, count_file_lines, count_files, count_lines, CategoryStats, Inventory, RepoStats,
};
pub use error::SkillstatsError;
pub use locate::{candidate_roots, locate_root};
pub use output::{bar_units, chart_line, format_number, pluralize_skills, render_bar};
pub use patch::{patch_file, patch_text, PatchMode, PatchOutcome, PatchReport, ReplacementRule};
pub use source::{discover_files, ExcludeSet, FilePattern};

/// Result type for skillstatslib operations
pub type Result<T> = std::result::Result<T, SkillstatsError>;
