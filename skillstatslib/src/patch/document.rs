//! Patch the target document in memory, then optionally on disk.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::data::RepoStats;
use crate::error::SkillstatsError;
use crate::output::chart_line;
use crate::Result;

use super::rules::{chart_pattern, chart_rule, table_rules};

/// Whether [`patch_file`] may write the result back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatchMode {
    /// Overwrite the document when its text changed
    #[default]
    Write,
    /// Compute the result without touching the file
    Check,
}

/// Result of patching document text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    /// The patched document
    pub text: String,
    /// Rules that matched (including inserted chart lines)
    pub applied: Vec<String>,
    /// Rules whose target was not found
    pub skipped: Vec<String>,
}

/// Result of patching a document on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    /// Whether the patched text differs from what was on disk
    pub changed: bool,
    /// Whether the file was actually rewritten
    pub written: bool,
    pub report: PatchReport,
}

/// Rewrite the stats table and skill chart of `text`.
///
/// Table rows are replaced wherever their labels occur. Chart lines are
/// only touched when the repository has at least one marker: an existing
/// line is rewritten, a missing line for a non-empty category is inserted
/// after the previous category's line, and anything without a target is
/// left alone. The function is idempotent for fixed `stats`.
pub fn patch_text(text: &str, stats: &RepoStats) -> Result<PatchReport> {
    let mut report = PatchReport {
        text: text.to_string(),
        applied: Vec::new(),
        skipped: Vec::new(),
    };

    for rule in table_rules(stats)? {
        match rule.apply(&report.text) {
            Some(patched) => {
                report.text = patched.into_owned();
                report.applied.push(rule.name);
            }
            None => {
                debug!("no match for table row '{}'", rule.name);
                report.skipped.push(rule.name);
            }
        }
    }

    if stats.markers == 0 {
        debug!("no markers found, leaving chart untouched");
        return Ok(report);
    }

    for (index, category) in stats.categories.iter().enumerate() {
        let rule = chart_rule(category)?;
        if let Some(patched) = rule.apply(&report.text) {
            report.text = patched.into_owned();
            report.applied.push(rule.name);
            continue;
        }

        let anchor = match index.checked_sub(1) {
            Some(prev) if category.count > 0 => &stats.categories[prev],
            _ => {
                debug!("no chart line for '{}'", category.label);
                report.skipped.push(rule.name);
                continue;
            }
        };

        let anchor_end = chart_pattern(&anchor.label)?
            .find(&report.text)
            .map(|m| m.end());
        match anchor_end {
            Some(end) => {
                debug!(
                    "inserting chart line for '{}' after '{}'",
                    category.label, anchor.label
                );
                report
                    .text
                    .insert_str(end, &format!("\n\n{}", chart_line(category)));
                report.applied.push(format!("{} (inserted)", rule.name));
            }
            None => {
                debug!(
                    "no anchor line '{}' for new chart line '{}'",
                    anchor.label, category.label
                );
                report.skipped.push(rule.name);
            }
        }
    }

    Ok(report)
}

/// Patch the document at `path` with `stats`.
///
/// In [`PatchMode::Write`] the file is overwritten when the text changed;
/// in [`PatchMode::Check`] it is never written.
pub fn patch_file(
    path: impl AsRef<Path>,
    stats: &RepoStats,
    mode: PatchMode,
) -> Result<PatchOutcome> {
    let path = path.as_ref();
    let original = fs::read_to_string(path).map_err(|e| SkillstatsError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let report = patch_text(&original, stats)?;
    let changed = report.text != original;
    let written = changed && mode == PatchMode::Write;

    if written {
        fs::write(path, &report.text).map_err(|e| SkillstatsError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!("wrote {}", path.display());
    }

    Ok(PatchOutcome {
        changed,
        written,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{CategoryStats, ScriptCount};
    use tempfile::tempdir;

    const README: &str = "\
# Skills

| Metric | Count |
|--------|-------|
| 🎯 **Total Skills** | 1 |
| 📄 **Documentation Files** | 3 |
| 🐍 **Utility Scripts** | 0 |
| 📝 **Lines of Content** | 12 |
| 📂 **Categories** | 1 (Frontend) |

## Distribution

```
Frontend Skills     ████████████████████████  1 skill (100%)

General Skills                            0 skills (0%)
```
";

    fn repo_stats(frontend: u64, general: u64, auth: u64) -> RepoStats {
        let total = frontend + general + auth;
        RepoStats {
            markers: total,
            docs: total + 2,
            scripts: vec![ScriptCount {
                extension: ".py".to_string(),
                count: 1,
            }],
            total_lines: 1500,
            categories: vec![
                CategoryStats::new("frontend", "Frontend", frontend, total, 24),
                CategoryStats::new("general", "General", general, total, 24),
                CategoryStats::new("auth", "Auth", auth, total, 24),
            ],
        }
    }

    #[test]
    fn test_patch_text_updates_table_and_chart() {
        let report = patch_text(README, &repo_stats(2, 1, 0)).unwrap();

        assert!(report.text.contains("| 🎯 **Total Skills** | 3 |"));
        assert!(report.text.contains("| 📄 **Documentation Files** | 5 |"));
        assert!(report.text.contains("| 🐍 **Utility Scripts** | 1 |"));
        assert!(report.text.contains("| 📝 **Lines of Content** | 1,500+ |"));
        assert!(report.text.contains("| 📂 **Categories** | 2 (Frontend, General) |"));
        assert!(report
            .text
            .contains(&format!("Frontend Skills     {}     2 skills (66%)", "█".repeat(15))));
        assert!(report
            .text
            .contains(&format!("General Skills      {}             1 skill (33%)", "█".repeat(7))));
        assert!(!report.text.contains("Auth Skills"));
        assert_eq!(report.skipped, vec!["auth chart".to_string()]);
    }

    #[test]
    fn test_patch_text_is_idempotent() {
        let stats = repo_stats(2, 1, 1);

        let first = patch_text(README, &stats).unwrap();
        let second = patch_text(&first.text, &stats).unwrap();

        assert_eq!(first.text, second.text);
    }

    #[test]
    fn test_patch_text_inserts_missing_category_after_anchor() {
        let report = patch_text(README, &repo_stats(2, 1, 1)).unwrap();

        let general = format!("General Skills      {}              1 skill (25%)", "█".repeat(6));
        let auth = format!("Auth Skills         {}              1 skill (25%)", "█".repeat(6));
        assert!(report.text.contains(&format!("{general}\n\n{auth}\n```")));
        assert!(report.applied.contains(&"auth chart (inserted)".to_string()));

        // A second run updates the inserted line instead of inserting again
        let again = patch_text(&report.text, &repo_stats(2, 1, 1)).unwrap();
        assert_eq!(again.text.matches("Auth Skills").count(), 1);
        assert!(again.applied.contains(&"auth chart".to_string()));
    }

    #[test]
    fn test_patch_text_label_suffix_does_not_steal_line() {
        let stats = RepoStats {
            markers: 4,
            categories: vec![
                CategoryStats::new("devops", "DevOps", 3, 4, 24),
                CategoryStats::new("ops", "Ops", 1, 4, 24),
            ],
            ..RepoStats::default()
        };
        let doc = "```\nDevOps Skills       █  1 skill (100%)\n\nOps Skills                 0 skills (0%)\n```\n";

        let report = patch_text(doc, &stats).unwrap();

        assert!(report.text.contains(&format!(
            "DevOps Skills       {}  3 skills (75%)",
            "█".repeat(18)
        )));
        assert!(report
            .text
            .contains(&format!("Ops Skills          {}              1 skill (25%)", "█".repeat(6))));
        assert_eq!(report.text.matches("Skills").count(), 2);
        assert!(report.skipped.iter().all(|name| !name.ends_with("chart")));
    }

    #[test]
    fn test_patch_text_skips_insert_without_anchor() {
        let doc = "| 🎯 **Total Skills** | 0 |\n";

        let report = patch_text(doc, &repo_stats(0, 0, 2)).unwrap();

        assert_eq!(report.text, "| 🎯 **Total Skills** | 2 |\n");
        assert!(report.skipped.contains(&"auth chart".to_string()));
    }

    #[test]
    fn test_patch_text_zero_markers_leaves_chart() {
        let report = patch_text(README, &repo_stats(0, 0, 0)).unwrap();

        assert!(report.text.contains("Frontend Skills     ████████████████████████  1 skill (100%)"));
        assert!(report.text.contains("| 🎯 **Total Skills** | 0 |"));
        assert!(report.text.contains("| 📂 **Categories** | 0 () |"));
    }

    #[test]
    fn test_patch_text_without_fields_is_noop() {
        let doc = "# Nothing to see\n";

        let report = patch_text(doc, &repo_stats(1, 0, 0)).unwrap();

        assert_eq!(report.text, doc);
        assert!(report.applied.is_empty());
        assert_eq!(report.skipped.len(), 8);
    }

    #[test]
    fn test_patch_file_writes_changes() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("README.md");
        fs::write(&path, README).unwrap();

        let outcome = patch_file(&path, &repo_stats(2, 1, 0), PatchMode::Write).unwrap();

        assert!(outcome.changed);
        assert!(outcome.written);
        assert_eq!(fs::read_to_string(&path).unwrap(), outcome.report.text);

        let rerun = patch_file(&path, &repo_stats(2, 1, 0), PatchMode::Write).unwrap();
        assert!(!rerun.changed);
        assert!(!rerun.written);
    }

    #[test]
    fn test_patch_file_check_mode_never_writes() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("README.md");
        fs::write(&path, README).unwrap();

        let outcome = patch_file(&path, &repo_stats(2, 1, 0), PatchMode::Check).unwrap();

        assert!(outcome.changed);
        assert!(!outcome.written);
        assert_eq!(fs::read_to_string(&path).unwrap(), README);
    }

    #[test]
    fn test_patch_file_missing() {
        let temp = tempdir().unwrap();

        let result = patch_file(
            temp.path().join("README.md"),
            &repo_stats(1, 0, 0),
            PatchMode::Write,
        );

        assert!(matches!(result, Err(SkillstatsError::FileRead { .. })));
    }
}
