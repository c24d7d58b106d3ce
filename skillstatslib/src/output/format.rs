//! Number, bar and chart-line formatting for the document.

use crate::data::CategoryStats;

/// Character drawn for one bar unit.
pub const BAR_CHAR: char = '█';

/// Column the bar starts at in a chart line.
const CHART_LABEL_WIDTH: usize = 19;

/// Bars are padded to this width; longer bars push the count right.
const CHART_BAR_WIDTH: usize = 18;

/// Format a count for the stats table.
///
/// Below 1000 the number is printed as is. From 1000 up it is grouped with
/// commas and suffixed with `+`, marking it as approximate.
///
/// ```
/// use skillstatslib::format_number;
///
/// assert_eq!(format_number(999), "999");
/// assert_eq!(format_number(12345), "12,345+");
/// ```
pub fn format_number(n: u64) -> String {
    if n < 1000 {
        return n.to_string();
    }
    format!("{}+", group_thousands(n))
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Bar length for a category: proportional to `percent` of `width`, at least
/// one unit when the category has any markers, and none when it has zero.
pub fn bar_units(count: u64, percent: u64, width: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let scaled = (width as u64).saturating_mul(percent) / 100;
    (scaled as usize).max(1)
}

/// Draw a bar of `units` blocks.
pub fn render_bar(units: usize) -> String {
    BAR_CHAR.to_string().repeat(units)
}

/// `"1 skill"`, `"0 skills"`, `"12 skills"`.
pub fn pluralize_skills(n: u64) -> String {
    if n == 1 {
        "1 skill".to_string()
    } else {
        format!("{n} skills")
    }
}

/// Full chart line for a category.
///
/// ```text
/// Frontend Skills     ███████████████     2 skills (66%)
/// ```
pub fn chart_line(category: &CategoryStats) -> String {
    let label = format!("{} Skills", category.label);
    format!(
        "{:<label_width$} {:<bar_width$}  {} ({}%)",
        label,
        render_bar(category.bar_units),
        pluralize_skills(category.count),
        category.percent,
        label_width = CHART_LABEL_WIDTH,
        bar_width = CHART_BAR_WIDTH,
    )
}
