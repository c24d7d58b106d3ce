//! Resolve the repository root that holds the target document.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::SkillstatsError;
use crate::Result;

/// Directories to search for the document, in priority order.
///
/// An explicit root is the only candidate. Otherwise the parent of the
/// directory holding the executable comes first (the tool living in
/// `<repo>/scripts/`), then the current working directory.
pub fn candidate_roots(
    explicit: Option<&Path>,
    exe: Option<&Path>,
    cwd: Option<&Path>,
) -> Vec<PathBuf> {
    if let Some(root) = explicit {
        return vec![root.to_path_buf()];
    }

    let mut candidates = Vec::new();
    if let Some(parent) = exe.and_then(Path::parent).and_then(Path::parent) {
        candidates.push(parent.to_path_buf());
    }
    if let Some(cwd) = cwd {
        if !candidates.iter().any(|c| c == cwd) {
            candidates.push(cwd.to_path_buf());
        }
    }
    candidates
}

/// First candidate directory containing `document`.
pub fn locate_root(candidates: &[PathBuf], document: &str) -> Result<PathBuf> {
    for candidate in candidates {
        let path = candidate.join(document);
        if path.is_file() {
            debug!("found {}", path.display());
            return Ok(candidate.clone());
        }
        debug!("no {document} in {}", candidate.display());
    }

    Err(SkillstatsError::DocumentNotFound {
        document: document.to_string(),
        searched: candidates.to_vec(),
    })
}
