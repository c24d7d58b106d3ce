//! Scanner: file counts and line counts over a discovered tree.

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, trace};

use crate::source::{discover_files, ExcludeSet, FilePattern, DEFAULT_MAX_DEPTH};
use crate::Result;

/// Count the lines of a text file.
///
/// Lines are split the way [`str::lines`] splits them, so a trailing newline
/// does not start an extra line. Files that cannot be read as UTF-8 text,
/// for whatever reason, count as zero.
pub fn count_file_lines(path: impl AsRef<Path>) -> u64 {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => content.lines().count() as u64,
        Err(err) => {
            debug!("not counting lines of {}: {err}", path.display());
            0
        }
    }
}

/// Every non-excluded file under a root, discovered once.
///
/// Paths are stored relative to the root so category lookups and exclusion
/// never see components above it.
#[derive(Debug, Clone)]
pub struct Inventory {
    root: PathBuf,
    files: Vec<PathBuf>,
}

impl Inventory {
    /// Walk `root` and record every file not under an excluded segment.
    pub fn discover(
        root: impl AsRef<Path>,
        excludes: &ExcludeSet,
        max_depth: usize,
    ) -> Result<Self> {
        let root = root.as_ref();
        let files = discover_files(root, excludes, max_depth)?
            .into_iter()
            .map(|path| match path.strip_prefix(root) {
                Ok(rel) => rel.to_path_buf(),
                Err(_) => path,
            })
            .collect::<Vec<_>>();

        debug!("discovered {} files under {}", files.len(), root.display());

        Ok(Self {
            root: root.to_path_buf(),
            files,
        })
    }

    /// Root the inventory was built from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Relative paths of all discovered files, sorted.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Number of files whose name matches `pattern`.
    pub fn count_matching(&self, pattern: &FilePattern) -> u64 {
        self.files.iter().filter(|p| pattern.matches(p)).count() as u64
    }

    /// Number of files under the top-level directory `subdir` whose name
    /// matches `pattern`. A missing directory simply yields zero.
    pub fn count_matching_under(&self, subdir: &str, pattern: &FilePattern) -> u64 {
        self.files
            .iter()
            .filter(|p| first_component_is(p, subdir) && pattern.matches(p))
            .count() as u64
    }

    /// Total line count of the files matching any of `patterns`.
    pub fn line_count(&self, patterns: &[FilePattern]) -> u64 {
        self.files
            .iter()
            .filter(|p| patterns.iter().any(|pattern| pattern.matches(p)))
            .map(|p| {
                let lines = count_file_lines(self.root.join(p));
                trace!("{}: {lines} lines", p.display());
                lines
            })
            .sum()
    }
}

fn first_component_is(path: &Path, name: &str) -> bool {
    // A parent-level component means the file is not inside the subdirectory
    let mut components = path.components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(first)), Some(_)) => first == name,
        _ => false,
    }
}

/// Count files matching a name glob under `root`, skipping excluded segments.
pub fn count_files(root: impl AsRef<Path>, pattern: &str, excludes: &ExcludeSet) -> Result<u64> {
    let pattern = FilePattern::new(pattern)?;
    let inventory = Inventory::discover(root, excludes, DEFAULT_MAX_DEPTH)?;
    Ok(inventory.count_matching(&pattern))
}

/// Total line count across files with the given extensions under `root`.
pub fn count_lines(
    root: impl AsRef<Path>,
    extensions: &[&str],
    excludes: &ExcludeSet,
) -> Result<u64> {
    let patterns = extensions
        .iter()
        .map(|ext| FilePattern::extension(ext))
        .collect::<Result<Vec<_>>>()?;
    let inventory = Inventory::discover(root, excludes, DEFAULT_MAX_DEPTH)?;
    Ok(inventory.line_count(&patterns))
}
