//! File entry representation.

use std::fs::Metadata;
use std::path::{Path, PathBuf};

use unicode_normalization::UnicodeNormalization;

/// A single file or directory entry as listed in a pane.
///
/// `FileEntry` is immutable. `is_dir` follows symlinks, so a link to a
/// directory sorts and navigates like a directory while still reporting
/// [`FileEntry::is_symlink`].
///
/// # Examples
///
/// ```no_run
/// use twinpane_core::FileEntry;
/// use std::fs;
///
/// let metadata = fs::metadata("Cargo.toml").unwrap();
/// let entry = FileEntry::new("Cargo.toml".into(), &metadata);
/// assert_eq!(entry.name(), "Cargo.toml");
/// assert!(!entry.is_dir());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    path: PathBuf,
    name: String,
    is_dir: bool,
    is_hidden: bool,
    is_symlink: bool,
}

impl FileEntry {
    /// Creates a new `FileEntry` from a path and its metadata.
    pub fn new(path: PathBuf, metadata: &Metadata) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().nfc().collect::<String>())
            .unwrap_or_default();
        let is_hidden = is_hidden(&name, metadata);

        Self {
            path,
            name,
            is_dir: metadata.is_dir(),
            is_hidden,
            is_symlink: metadata.is_symlink(),
        }
    }

    /// Builds an entry for a directory child, resolving symlinks.
    ///
    /// `link_metadata` is the metadata of the entry itself (not followed).
    /// When it is a symlink the target's metadata decides `is_dir`; a
    /// dangling link is kept as a non-directory entry.
    pub fn from_link_metadata(path: PathBuf, link_metadata: &Metadata) -> Self {
        if !link_metadata.is_symlink() {
            return Self::new(path, link_metadata);
        }
        let entry = match std::fs::metadata(&path) {
            Ok(target) => Self::new(path, &target),
            Err(_) => Self::new(path, link_metadata),
        };
        Self {
            is_symlink: true,
            ..entry
        }
    }

    /// Returns the full path of this entry.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the file or directory name (last component of the path).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if this entry is (or links to) a directory.
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Returns `true` if the filesystem flags this entry as hidden.
    pub fn is_hidden(&self) -> bool {
        self.is_hidden
    }

    /// Returns `true` if this entry is a symbolic link.
    pub fn is_symlink(&self) -> bool {
        self.is_symlink
    }
}

/// Dot-prefixed names are hidden everywhere; Windows also honours the
/// hidden attribute.
fn is_hidden(name: &str, metadata: &Metadata) -> bool {
    if name.starts_with('.') {
        return true;
    }

    #[cfg(windows)]
    {
        use std::os::windows::fs::MetadataExt;
        const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;
        if metadata.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0 {
            return true;
        }
    }
    #[cfg(not(windows))]
    let _ = metadata;

    false
}
