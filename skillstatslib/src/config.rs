//! Configuration for a stats run.
//!
//! `StatsConfig` is built with consuming setters. A `skillstats.toml` file can
//! override any subset of the defaults:
//!
//! ```toml
//! marker = "SKILL.md"
//! doc_extensions = [".md"]
//! script_extensions = [".py", ".js", ".ts"]
//! exclude = ["node_modules", ".git", "vendor"]
//!
//! [[category]]
//! dir = "frontend"
//! label = "Frontend"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::SkillstatsError;
use crate::source::{ExcludeSet, DEFAULT_MAX_DEPTH};
use crate::Result;

/// Config file looked up at the repository root.
pub const CONFIG_FILE_NAME: &str = "skillstats.toml";

/// Default bar chart width, in `█` units.
pub const DEFAULT_BAR_WIDTH: usize = 24;

/// A category directory and its display label.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Category {
    /// Top-level subdirectory holding the category's skills
    pub dir: String,
    /// Display label used in the summary and chart (`Frontend`)
    pub label: String,
}

impl Category {
    pub fn new(dir: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            label: label.into(),
        }
    }
}

/// Options controlling what gets counted.
#[derive(Debug, Clone)]
pub struct StatsConfig {
    /// File name that marks one skill
    pub marker: String,
    /// Extensions counted as documentation
    pub doc_extensions: Vec<String>,
    /// Extensions counted as utility scripts, reported separately
    pub script_extensions: Vec<String>,
    /// Categories in chart order
    pub categories: Vec<Category>,
    /// Path segments never counted
    pub excludes: ExcludeSet,
    /// Width of a 100% bar
    pub bar_width: usize,
    /// Traversal depth bound
    pub max_depth: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            marker: "SKILL.md".to_string(),
            doc_extensions: vec![".md".to_string()],
            script_extensions: vec![".py".to_string(), ".js".to_string()],
            categories: vec![
                Category::new("frontend", "Frontend"),
                Category::new("general", "General"),
                Category::new("auth", "Auth"),
            ],
            excludes: ExcludeSet::default(),
            bar_width: DEFAULT_BAR_WIDTH,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// On-disk shape of `skillstats.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    marker: Option<String>,
    doc_extensions: Option<Vec<String>>,
    script_extensions: Option<Vec<String>>,
    #[serde(rename = "category")]
    categories: Option<Vec<Category>>,
    exclude: Option<Vec<String>>,
    bar_width: Option<usize>,
    max_depth: Option<usize>,
}

impl StatsConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the marker file name.
    pub fn marker(mut self, name: impl Into<String>) -> Self {
        self.marker = name.into();
        self
    }

    /// Replace the documentation extensions.
    pub fn doc_extensions(mut self, exts: Vec<String>) -> Self {
        self.doc_extensions = exts;
        self
    }

    /// Replace the script extensions.
    pub fn script_extensions(mut self, exts: Vec<String>) -> Self {
        self.script_extensions = exts;
        self
    }

    /// Replace the category list.
    pub fn categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    /// Replace the exclude set.
    pub fn excludes(mut self, excludes: ExcludeSet) -> Self {
        self.excludes = excludes;
        self
    }

    /// Add one excluded path segment.
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.excludes = self.excludes.with(name);
        self
    }

    /// Set the bar width.
    pub fn bar_width(mut self, width: usize) -> Self {
        self.bar_width = width;
        self
    }

    /// Set the traversal depth bound.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Doc and script extensions together, in that order.
    pub fn content_extensions(&self) -> Vec<&str> {
        self.doc_extensions
            .iter()
            .chain(&self.script_extensions)
            .map(String::as_str)
            .collect()
    }

    /// Overlay the keys present in a TOML document onto `self`.
    ///
    /// `origin` is only used for error messages.
    pub fn merge_toml(mut self, source: &str, origin: &Path) -> Result<Self> {
        let file: ConfigFile = toml::from_str(source).map_err(|e| SkillstatsError::Config {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;

        if let Some(marker) = file.marker {
            self.marker = marker;
        }
        if let Some(exts) = file.doc_extensions {
            self.doc_extensions = exts;
        }
        if let Some(exts) = file.script_extensions {
            self.script_extensions = exts;
        }
        if let Some(categories) = file.categories {
            self.categories = categories;
        }
        if let Some(names) = file.exclude {
            self.excludes = ExcludeSet::from_names(names);
        }
        if let Some(width) = file.bar_width {
            self.bar_width = width;
        }
        if let Some(depth) = file.max_depth {
            self.max_depth = depth;
        }

        Ok(self)
    }

    /// Overlay a config file onto `self`.
    pub fn merge_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| SkillstatsError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.merge_toml(&source, path)
    }
}
