//! Error types for skillstatslib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while collecting stats or patching the document
#[derive(Error, Debug)]
pub enum SkillstatsError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Invalid replacement rule pattern
    #[error("invalid replacement pattern for '{rule}': {source}")]
    InvalidPattern { rule: String, source: regex::Error },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Target document not present in any candidate root
    #[error("could not find {document} in: {}", display_paths(.searched))]
    DocumentNotFound {
        document: String,
        searched: Vec<PathBuf>,
    },

    /// Malformed configuration file
    #[error("invalid config '{path}': {message}")]
    Config { path: PathBuf, message: String },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
