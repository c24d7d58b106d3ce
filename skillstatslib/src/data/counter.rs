//! Aggregator: fold a scan of the repository into [`RepoStats`].

use std::path::Path;

use tracing::debug;

use crate::config::StatsConfig;
use crate::source::FilePattern;
use crate::Result;

use super::scan::Inventory;
use super::stats::{CategoryStats, RepoStats, ScriptCount};

/// Collect every statistic the document carries.
///
/// The tree is walked once; each count is a filter over the same inventory.
///
/// # Example
///
/// ```rust,ignore
/// use skillstatslib::{collect_stats, StatsConfig};
///
/// let stats = collect_stats(".", &StatsConfig::new())?;
/// println!("{} skills in {}", stats.markers, stats.category_summary());
/// ```
pub fn collect_stats(root: impl AsRef<Path>, config: &StatsConfig) -> Result<RepoStats> {
    let root = root.as_ref();
    let inventory = Inventory::discover(root, &config.excludes, config.max_depth)?;

    let marker = FilePattern::new(&config.marker)?;
    let doc_patterns = extension_patterns(&config.doc_extensions)?;
    let script_patterns = extension_patterns(&config.script_extensions)?;

    let markers = inventory.count_matching(&marker);
    let docs: u64 = doc_patterns
        .iter()
        .map(|p| inventory.count_matching(p))
        .sum();
    let scripts: Vec<ScriptCount> = config
        .script_extensions
        .iter()
        .zip(&script_patterns)
        .map(|(ext, pattern)| ScriptCount {
            extension: ext.clone(),
            count: inventory.count_matching(pattern),
        })
        .collect();

    let content_patterns: Vec<FilePattern> =
        doc_patterns.into_iter().chain(script_patterns).collect();
    let total_lines = inventory.line_count(&content_patterns);

    let categories: Vec<CategoryStats> = config
        .categories
        .iter()
        .map(|category| {
            let count = inventory.count_matching_under(&category.dir, &marker);
            debug!("category {}: {count} markers", category.dir);
            CategoryStats::new(
                &category.dir,
                &category.label,
                count,
                markers,
                config.bar_width,
            )
        })
        .collect();

    Ok(RepoStats {
        markers,
        docs,
        scripts,
        total_lines,
        categories,
    })
}

fn extension_patterns(extensions: &[String]) -> Result<Vec<FilePattern>> {
    extensions
        .iter()
        .map(|ext| FilePattern::extension(ext))
        .collect()
}
