//! Document patching: rewrite placeholder fields of the README.
//!
//! Third stage of the pipeline. Rules are plain regex substitutions over the
//! whole text; [`patch_text`] is pure, [`patch_file`] adds the read and the
//! single write.

pub mod document;
pub mod rules;

pub use document::{patch_file, patch_text, PatchMode, PatchOutcome, PatchReport};
pub use rules::{chart_pattern, chart_rule, table_rules, ReplacementRule};
