//! Resolves the path of the single master roster document.

use crate::config::Config;
use std::fs;
use std::path::PathBuf;

/// Locate the master document: the configured file name under the schedule
/// folder when it exists, otherwise the first `*.json` document found there.
/// `None` means "no roster document configured", a negative result the
/// caller reports to the user, not an error.
pub fn master_document_path(cfg: &Config) -> Option<PathBuf> {
    let folder = PathBuf::from(&cfg.schedule_folder);

    if let Some(name) = &cfg.master_file {
        let path = folder.join(name);
        if path.exists() {
            return Some(path);
        }
    }

    // Fallback: first matching document in the folder, sorted for
    // deterministic resolution.
    let mut candidates: Vec<PathBuf> = fs::read_dir(&folder)
        .ok()?
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    candidates.sort();

    candidates.into_iter().next()
}
