//! Aggregated repository statistics.

use crate::output::bar_units;

/// Number of files with one script extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptCount {
    /// Extension including the dot (`.py`)
    pub extension: String,
    pub count: u64,
}

/// Marker count for one category, with its derived share of the total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryStats {
    /// Category directory name
    pub dir: String,
    /// Display label
    pub label: String,
    /// Marker files found under the directory
    pub count: u64,
    /// `floor(100 * count / total)`, or 0 when the total is 0
    pub percent: u64,
    /// Bar chart length in `█` units
    pub bar_units: usize,
}

impl CategoryStats {
    /// Derive percentage and bar length from a category count.
    ///
    /// Percentages are floored per category and are not corrected to sum
    /// to 100.
    pub fn new(
        dir: impl Into<String>,
        label: impl Into<String>,
        count: u64,
        total: u64,
        bar_width: usize,
    ) -> Self {
        let percent = percent_of(count, total);
        Self {
            dir: dir.into(),
            label: label.into(),
            count,
            percent,
            bar_units: bar_units(count, percent, bar_width),
        }
    }
}

/// `floor(100 * part / total)`, 0 for an empty total.
pub fn percent_of(part: u64, total: u64) -> u64 {
    if total == 0 {
        0
    } else {
        part.saturating_mul(100) / total
    }
}

/// Everything the document patcher needs to know about the repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoStats {
    /// Marker files anywhere in the tree
    pub markers: u64,
    /// Documentation files (markers included)
    pub docs: u64,
    /// Script files, one entry per configured extension
    pub scripts: Vec<ScriptCount>,
    /// Lines across documentation and script files
    pub total_lines: u64,
    /// Per-category breakdown in configured order
    pub categories: Vec<CategoryStats>,
}

impl RepoStats {
    /// All script files across extensions.
    pub fn script_total(&self) -> u64 {
        self.scripts.iter().map(|s| s.count).sum()
    }

    /// Look up a category by directory name.
    pub fn category(&self, dir: &str) -> Option<&CategoryStats> {
        self.categories.iter().find(|c| c.dir == dir)
    }

    /// `"<n> (<Label>, <Label>)"`, naming only categories with markers.
    pub fn category_summary(&self) -> String {
        let names: Vec<&str> = self
            .categories
            .iter()
            .filter(|c| c.count > 0)
            .map(|c| c.label.as_str())
            .collect();
        format!("{} ({})", names.len(), names.join(", "))
    }
}
