//! Replacement rules for the README stats table and skill chart.
//!
//! The labels below are a contract with the document: a row or chart line is
//! only updated when its label text appears exactly as written here.

use std::borrow::Cow;

use regex::Regex;

use crate::data::{CategoryStats, RepoStats};
use crate::error::SkillstatsError;
use crate::output::{chart_line, format_number};
use crate::Result;

/// Stats table label cells.
pub const TOTAL_SKILLS_LABEL: &str = "🎯 **Total Skills**";
pub const DOC_FILES_LABEL: &str = "📄 **Documentation Files**";
pub const SCRIPTS_LABEL: &str = "🐍 **Utility Scripts**";
pub const LINES_LABEL: &str = "📝 **Lines of Content**";
pub const CATEGORIES_LABEL: &str = "📂 **Categories**";

/// A named regex substitution applied to the whole document.
#[derive(Debug, Clone)]
pub struct ReplacementRule {
    /// Short name used in reports and logs
    pub name: String,
    pub pattern: Regex,
    /// Replacement template; `${1}` refers to the first capture group
    pub replacement: String,
}

impl ReplacementRule {
    /// Compile a rule.
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        let pattern = Regex::new(pattern).map_err(|source| SkillstatsError::InvalidPattern {
            rule: name.clone(),
            source,
        })?;
        Ok(Self {
            name,
            pattern,
            replacement: replacement.into(),
        })
    }

    /// Apply to `text`; `None` when the pattern does not occur.
    pub fn apply<'t>(&self, text: &'t str) -> Option<Cow<'t, str>> {
        if !self.pattern.is_match(text) {
            return None;
        }
        Some(self.pattern.replace_all(text, self.replacement.as_str()))
    }
}

/// Escape `$` so a computed value is inserted literally by a template.
fn literal(value: &str) -> String {
    value.replace('$', "$$")
}

/// Rule rewriting the value cell of a `| <label> | <value> |` row.
fn table_row_rule(
    name: &str,
    label: &str,
    value_pattern: &str,
    value: &str,
) -> Result<ReplacementRule> {
    let pattern = format!(
        r"(\| {}\s*\|)\s*{}\s*\|",
        regex::escape(label),
        value_pattern
    );
    ReplacementRule::new(name, &pattern, format!("${{1}} {} |", literal(value)))
}

/// The five stats-table rules, in document order.
pub fn table_rules(stats: &RepoStats) -> Result<Vec<ReplacementRule>> {
    Ok(vec![
        table_row_rule(
            "total skills",
            TOTAL_SKILLS_LABEL,
            r"\d+",
            &stats.markers.to_string(),
        )?,
        table_row_rule(
            "documentation files",
            DOC_FILES_LABEL,
            r"\d+",
            &stats.docs.to_string(),
        )?,
        table_row_rule(
            "utility scripts",
            SCRIPTS_LABEL,
            r"\d+",
            &stats.script_total().to_string(),
        )?,
        table_row_rule(
            "lines of content",
            LINES_LABEL,
            r"[\d,]+\+?",
            &format_number(stats.total_lines),
        )?,
        table_row_rule(
            "categories",
            CATEGORIES_LABEL,
            r"[^|]+",
            &stats.category_summary(),
        )?,
    ])
}

/// Pattern matching the chart line of the category labelled `label`.
///
/// The label must start its line (after optional indentation, kept in
/// group 1), so `Ops` never matches inside `DevOps Skills`.
pub fn chart_pattern(label: &str) -> Result<Regex> {
    let pattern = format!(
        r"(?m)^([ \t]*){} Skills\s+█*\s+\d+ skills? \(\d+%\)",
        regex::escape(label)
    );
    Regex::new(&pattern).map_err(|source| SkillstatsError::InvalidPattern {
        rule: format!("{label} chart"),
        source,
    })
}

/// Rule rewriting a category's chart line in place.
pub fn chart_rule(category: &CategoryStats) -> Result<ReplacementRule> {
    let pattern = chart_pattern(&category.label)?;
    Ok(ReplacementRule {
        name: format!("{} chart", category.label.to_lowercase()),
        pattern,
        replacement: format!("${{1}}{}", literal(&chart_line(category))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ScriptCount;

    fn sample_stats() -> RepoStats {
        RepoStats {
            markers: 3,
            docs: 5,
            scripts: vec![
                ScriptCount {
                    extension: ".py".to_string(),
                    count: 1,
                },
                ScriptCount {
                    extension: ".js".to_string(),
                    count: 2,
                },
            ],
            total_lines: 4321,
            categories: vec![
                CategoryStats::new("frontend", "Frontend", 2, 3, 24),
                CategoryStats::new("general", "General", 1, 3, 24),
            ],
        }
    }

    fn apply_all(rules: &[ReplacementRule], text: &str) -> String {
        rules.iter().fold(text.to_string(), |acc, rule| {
            rule.apply(&acc).map(Cow::into_owned).unwrap_or(acc)
        })
    }

    #[test]
    fn test_table_rules_rewrite_values() {
        let doc = "\
| Metric | Count |
|--------|-------|
| 🎯 **Total Skills** | 1 |
| 📄 **Documentation Files** |  2  |
| 🐍 **Utility Scripts** | 0 |
| 📝 **Lines of Content** | 1,000+ |
| 📂 **Categories** | 1 (Frontend) |
";
        let rules = table_rules(&sample_stats()).unwrap();
        let out = apply_all(&rules, doc);

        assert!(out.contains("| 🎯 **Total Skills** | 3 |\n"));
        assert!(out.contains("| 📄 **Documentation Files** | 5 |\n"));
        assert!(out.contains("| 🐍 **Utility Scripts** | 3 |\n"));
        assert!(out.contains("| 📝 **Lines of Content** | 4,321+ |\n"));
        assert!(out.contains("| 📂 **Categories** | 2 (Frontend, General) |\n"));
        assert!(out.starts_with("| Metric | Count |\n"));
    }

    #[test]
    fn test_rule_without_match_is_none() {
        let rules = table_rules(&sample_stats()).unwrap();

        assert!(rules[0].apply("no table here").is_none());
    }

    #[test]
    fn test_label_must_match_exactly() {
        let rules = table_rules(&sample_stats()).unwrap();

        assert!(rules[0].apply("| **Total Skills** | 1 |").is_none());
        assert!(rules[0].apply("| 🎯 Total Skills | 1 |").is_none());
    }

    #[test]
    fn test_dollar_in_value_is_literal() {
        let mut stats = sample_stats();
        stats.categories[0].label = "Front$1".to_string();

        let rules = table_rules(&stats).unwrap();
        let out = apply_all(&rules, "| 📂 **Categories** | 0 () |");

        assert_eq!(out, "| 📂 **Categories** | 2 (Front$1, General) |");
    }

    #[test]
    fn test_chart_pattern_matches_empty_and_full_bars() {
        let pattern = chart_pattern("Auth").unwrap();

        assert!(pattern.is_match("Auth Skills                     0 skills (0%)"));
        assert!(pattern.is_match("Auth Skills         ███  1 skill (12%)"));
        assert!(!pattern.is_match("Auth Skills are great"));
    }

    #[test]
    fn test_chart_rule_rewrites_line() {
        let stats = sample_stats();
        let rule = chart_rule(&stats.categories[0]).unwrap();
        let doc = "```\nFrontend Skills     ████████████████████████  1 skill (100%)\n```\n";

        let out = rule.apply(doc).unwrap();

        assert_eq!(rule.name, "frontend chart");
        assert_eq!(
            out,
            format!(
                "```\nFrontend Skills     {}     2 skills (66%)\n```\n",
                "█".repeat(15)
            )
        );
    }

    #[test]
    fn test_chart_pattern_requires_label_at_line_start() {
        let pattern = chart_pattern("Ops").unwrap();

        assert!(!pattern.is_match("DevOps Skills       ███  3 skills (75%)"));
        assert!(pattern.is_match("DevOps Skills  ███  3 skills (75%)\nOps Skills  █  1 skill (25%)"));
        assert!(pattern.is_match("    Ops Skills  █  1 skill (25%)"));
    }

    #[test]
    fn test_chart_rule_keeps_overlapping_labels_apart() {
        let devops = CategoryStats::new("devops", "DevOps", 3, 4, 24);
        let ops = CategoryStats::new("ops", "Ops", 1, 4, 24);
        let doc = "DevOps Skills       █  0 skills (0%)\n\nOps Skills          █  0 skills (0%)\n";

        let out = chart_rule(&ops).unwrap().apply(doc).unwrap().into_owned();
        let out = chart_rule(&devops).unwrap().apply(&out).unwrap().into_owned();

        assert_eq!(out, format!("{}\n\n{}\n", chart_line(&devops), chart_line(&ops)));
        assert!(out.contains("3 skills (75%)"));
        assert!(out.contains("1 skill (25%)"));
    }

    #[test]
    fn test_chart_rule_keeps_indentation() {
        let ops = CategoryStats::new("ops", "Ops", 1, 1, 24);
        let doc = "  Ops Skills  █  0 skills (0%)\n";

        let out = chart_rule(&ops).unwrap().apply(doc).unwrap().into_owned();

        assert_eq!(out, format!("  {}\n", chart_line(&ops)));
    }

    #[test]
    fn test_invalid_rule_pattern() {
        let result = ReplacementRule::new("broken", "(unclosed", "x");

        match result {
            Err(SkillstatsError::InvalidPattern { rule, .. }) => assert_eq!(rule, "broken"),
            other => panic!("Expected InvalidPattern error, got {other:?}"),
        }
    }
}
