use crate::constants::SUPPORTED_IMAGE_EXTENSIONS;
use crate::error::Result;
use crate::ledger::Ledger;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Check whether a path carries a recognized image extension.
///
/// # Example
/// ```
/// use std::path::Path;
/// use img_shrink::scan::is_image_file;
///
/// assert!(is_image_file(Path::new("photo.PNG")));
/// assert!(!is_image_file(Path::new("notes.txt")));
/// ```
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// Recursively collects every image file under `root`, skipping hidden
/// entries. No ordering guarantee beyond what the walker yields.
pub fn collect_candidates(root: &Path) -> Result<Vec<PathBuf>> {
    let mut candidates = Vec::new();

    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let entry = entry?;
        if entry.file_type().is_file() && is_image_file(entry.path()) {
            candidates.push(entry.path().to_path_buf());
        }
    }

    Ok(candidates)
}

/// Collects the candidates under `root` whose current content is not yet
/// recorded in the ledger.
pub async fn pending_candidates(root: &Path, ledger: &Ledger) -> Result<Vec<PathBuf>> {
    let mut pending = Vec::new();

    for file in collect_candidates(root)? {
        if !ledger.contains(&file).await? {
            pending.push(file);
        }
    }

    Ok(pending)
}
