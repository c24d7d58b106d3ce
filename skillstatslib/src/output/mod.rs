//! Presentation helpers shared by the patcher and the CLI report.

pub mod format;

pub use format::{bar_units, chart_line, format_number, pluralize_skills, render_bar, BAR_CHAR};
