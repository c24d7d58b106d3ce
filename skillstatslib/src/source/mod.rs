//! Source discovery: find files to count.
//!
//! First stage of the pipeline. Walks the repository once and prunes
//! excluded path segments; everything downstream filters the resulting list.

pub mod filter;

pub use filter::{discover_files, ExcludeSet, FilePattern, DEFAULT_EXCLUDES, DEFAULT_MAX_DEPTH};
