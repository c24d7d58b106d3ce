//! Data collection: scan files and aggregate statistics.
//!
//! Second stage of the pipeline:
//!
//! - **Scanning**: file and line counts over a discovered [`Inventory`]
//! - **Statistics**: [`RepoStats`] and per-category [`CategoryStats`]
//! - **Aggregation**: [`collect_stats`], the one-call entry point

pub mod counter;
pub mod scan;
pub mod stats;

pub use counter::collect_stats;
pub use scan::{count_file_lines, count_files, count_lines, Inventory};
pub use stats::{percent_of, CategoryStats, RepoStats, ScriptCount};
