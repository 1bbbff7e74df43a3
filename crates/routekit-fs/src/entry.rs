//! Fixed-extension entry-file probing.

use std::path::{Path, PathBuf};

/// Extensions probed when locating a logical entry file, in priority order.
pub const ENTRY_EXTENSIONS: [&str; 4] = ["js", "jsx", "ts", "tsx"];

/// Locate the source file for `basename` under `dir`.
///
/// Probes `<basename>.<ext>` for each entry extension in order and returns
/// the first that exists as a regular file, as a path relative to `dir`.
/// Returns `None` when no candidate exists. No side effects; the result is
/// only as fresh as the filesystem at call time.
pub fn find_entry(dir: &Path, basename: &str) -> Option<PathBuf> {
    for ext in ENTRY_EXTENSIONS {
        let relative = format!("{basename}.{ext}");
        let candidate = dir.join(&relative);
        if candidate.is_file() {
            tracing::debug!(?candidate, "located entry file");
            return Some(PathBuf::from(relative));
        }
    }
    None
}
