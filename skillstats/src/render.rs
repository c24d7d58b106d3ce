//! Human-readable report of a stats run.

use std::io;
use std::path::Path;

use skillstatslib::RepoStats;

use crate::console::{Console, INFO, OK, STATS, WARN};

/// Display name for a script extension.
fn script_kind(extension: &str) -> String {
    match extension {
        ".py" => "Python".to_string(),
        ".js" => "JS".to_string(),
        ".ts" => "TypeScript".to_string(),
        ".sh" => "Shell".to_string(),
        other => other.trim_start_matches('.').to_uppercase(),
    }
}

/// `"Frontend: 2, General: 1, Auth: 0"`.
fn category_breakdown(stats: &RepoStats) -> String {
    stats
        .categories
        .iter()
        .map(|c| format!("{}: {}", c.label, c.count))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn render_root(console: &Console, root: &Path) -> io::Result<()> {
    console.tagged(&INFO, format!("Repository: {}", root.display()))
}

pub fn render_stats(console: &Console, stats: &RepoStats) -> io::Result<()> {
    console.tagged(&STATS, "Current Stats:")?;
    console.line(format!("   Skills: {}", stats.markers))?;
    console.line(format!("   Docs: {}", stats.docs))?;
    for script in &stats.scripts {
        console.line(format!(
            "   {} Scripts: {}",
            script_kind(&script.extension),
            script.count
        ))?;
    }
    console.line(format!("   Lines: {}", stats.total_lines))?;
    if !stats.categories.is_empty() {
        console.line(format!("   {}", category_breakdown(stats)))?;
    }
    Ok(())
}

/// Final status line. `check` selects check-mode wording.
pub fn render_outcome(
    console: &Console,
    document: &str,
    changed: bool,
    check: bool,
) -> io::Result<()> {
    match (check, changed) {
        (false, true) => console.tagged(&OK, format!("{document} updated successfully!")),
        (_, false) => console.tagged(&OK, format!("{document} is up to date")),
        (true, true) => console.tagged(&WARN, format!("{document} is out of date")),
    }
}
