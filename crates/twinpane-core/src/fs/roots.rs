//! Filesystem root discovery.

use std::path::{Path, PathBuf};

/// Returns the filesystem roots, in a stable order.
///
/// On Unix this is always `/`. On Windows every drive letter whose root
/// directory exists is returned, `A:\` through `Z:\`.
pub fn filesystem_roots() -> Vec<PathBuf> {
    #[cfg(windows)]
    {
        let roots: Vec<PathBuf> = (b'A'..=b'Z')
            .map(|letter| PathBuf::from(format!("{}:\\", letter as char)))
            .filter(|root| root.is_dir())
            .collect();
        if !roots.is_empty() {
            return roots;
        }
    }

    vec![PathBuf::from(std::path::MAIN_SEPARATOR_STR)]
}

/// Returns the first filesystem root; the default start directory of both panes.
pub fn first_root() -> PathBuf {
    filesystem_roots()
        .into_iter()
        .next()
        .unwrap_or_else(|| PathBuf::from(std::path::MAIN_SEPARATOR_STR))
}

/// Returns `true` if `path` has no parent, i.e. it is a filesystem root.
pub fn is_root(path: &Path) -> bool {
    path.parent().is_none()
}
