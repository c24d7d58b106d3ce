//! File discovery with path-segment exclusion.
//!
//! Exclusion works on whole path components relative to the scan root:
//! excluding `cli` prunes `cli/` and `tools/cli/` but leaves `client/` alone.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use glob::Pattern;
use tracing::trace;
use walkdir::WalkDir;

use crate::error::SkillstatsError;
use crate::Result;

/// Path segments skipped by default.
pub const DEFAULT_EXCLUDES: &[&str] = &["node_modules", ".git", ".claude", "__pycache__", "cli"];

/// Default bound on traversal depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Set of path-segment names whose subtrees are never counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludeSet {
    names: BTreeSet<String>,
}

impl Default for ExcludeSet {
    fn default() -> Self {
        Self::from_names(DEFAULT_EXCLUDES.iter().copied())
    }
}

impl ExcludeSet {
    /// An exclude set with nothing in it.
    pub fn empty() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    /// Build from an iterator of segment names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Add a segment name.
    pub fn with(mut self, name: impl Into<String>) -> Self {
        self.names.insert(name.into());
        self
    }

    /// Segment names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Check a single segment name.
    pub fn contains(&self, segment: &str) -> bool {
        self.names.contains(segment)
    }

    /// Check whether any component of `rel_path` is excluded.
    ///
    /// `rel_path` is expected to be relative to the scan root; components of
    /// the root itself are not inspected.
    pub fn is_excluded(&self, rel_path: &Path) -> bool {
        rel_path.components().any(|component| match component {
            Component::Normal(os_str) => os_str.to_str().is_some_and(|s| self.contains(s)),
            _ => false,
        })
    }
}

/// A validated glob matched against file names only (`SKILL.md`, `*.md`).
#[derive(Debug, Clone)]
pub struct FilePattern {
    pattern: Pattern,
}

impl FilePattern {
    /// Compile a file-name glob.
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = Pattern::new(pattern).map_err(|e| SkillstatsError::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { pattern })
    }

    /// Pattern matching any file whose name ends with `ext` (e.g. `.md`).
    pub fn extension(ext: &str) -> Result<Self> {
        Self::new(&format!("*{}", Pattern::escape(ext)))
    }

    /// The source glob.
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }

    /// Check the file name of `path` against the glob.
    pub fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.pattern.matches(name))
    }
}

/// Discover every non-excluded file under `root`.
///
/// Excluded directories are pruned rather than filtered, so their contents
/// are never read. Symlinks are followed, so a marker linked into several
/// categories counts once per link; walkdir reports link loops as errors,
/// which are skipped like any other unreadable entry (permissions, races
/// with deletion). Paths are returned sorted.
pub fn discover_files(
    root: impl AsRef<Path>,
    excludes: &ExcludeSet,
    max_depth: usize,
) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(SkillstatsError::PathNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();

    if root.is_file() {
        files.push(root.to_path_buf());
        return Ok(files);
    }

    let walker = WalkDir::new(root)
        .follow_links(true)
        .max_depth(max_depth)
        .into_iter();

    for entry in walker.filter_entry(|e| {
        // Always include the root directory
        if e.depth() == 0 {
            return true;
        }
        e.path()
            .strip_prefix(root)
            .is_ok_and(|rel| !excludes.is_excluded(rel))
    }) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                trace!("skipping unreadable entry: {err}");
                continue;
            }
        };

        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    // Sort for deterministic output
    files.sort();

    Ok(files)
}
