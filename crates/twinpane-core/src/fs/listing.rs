//! Directory listing for panes.
//!
//! [`read_directory`] is the strict reader; [`DirectoryLister`] layers the
//! pane rules on top of it (hidden filtering, directories-first order,
//! fail-soft on unreadable directories).

use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::FileEntry;
use crate::nav::filter::{filter_hidden, sort_entries};

/// Reads the immediate contents of a directory and returns them as [`FileEntry`] values.
///
/// The returned entries are **unsorted** and include hidden entries.
/// Children whose metadata cannot be read are skipped. `.` and `..` are
/// never yielded.
///
/// # Errors
///
/// - [`CoreError::NotFound`] if the path does not exist.
/// - [`CoreError::NotADirectory`] if the path is not a directory.
/// - [`CoreError::OperationFailed`] on denied read access or any other I/O error.
pub fn read_directory(path: &Path) -> CoreResult<Vec<FileEntry>> {
    if !path.exists() {
        return Err(CoreError::NotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(CoreError::NotADirectory(path.to_path_buf()));
    }

    let read_dir = std::fs::read_dir(path).map_err(|e| CoreError::from_io(path, e))?;

    let mut entries = Vec::new();
    for dir_entry in read_dir {
        let Ok(dir_entry) = dir_entry else { continue };
        let Ok(link_metadata) = dir_entry.metadata() else {
            continue;
        };
        entries.push(FileEntry::from_link_metadata(dir_entry.path(), &link_metadata));
    }

    Ok(entries)
}

/// Settings that shape a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingOptions {
    /// Include entries the filesystem flags as hidden.
    pub show_hidden: bool,
}

/// Produces the ordered entry list a pane displays.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryLister {
    options: ListingOptions,
}

impl DirectoryLister {
    pub fn new(options: ListingOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ListingOptions {
        self.options
    }

    /// Lists `dir`: hidden entries removed (unless enabled), directories
    /// first, then byte-wise by name.
    ///
    /// Never fails. An unreadable or vanished directory yields an empty
    /// list so the pane stays usable and can still go to its parent.
    pub fn list(&self, dir: &Path) -> Vec<FileEntry> {
        match read_directory(dir) {
            Ok(raw) => {
                let visible = filter_hidden(&raw, self.options.show_hidden);
                let sorted = sort_entries(&visible);
                tracing::debug!(dir = %dir.display(), count = sorted.len(), "listed directory");
                sorted
            }
            Err(e) => {
                tracing::warn!(dir = %dir.display(), "cannot list directory: {e}");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn read_directory_returns_entries() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("file1.txt"), "hello").unwrap();
        fs::write(tmp.path().join("file2.rs"), "fn main() {}").unwrap();
        fs::create_dir(tmp.path().join("subdir")).unwrap();

        let entries = read_directory(tmp.path()).unwrap();
        assert_eq!(entries.len(), 3);

        let names: Vec<&str> = entries.iter().map(|e| e.name()).collect();
        assert!(names.contains(&"file1.txt"));
        assert!(names.contains(&"file2.rs"));
        assert!(names.contains(&"subdir"));
    }

    #[test]
    fn read_directory_nonexistent_returns_not_found() {
        let result = read_directory(Path::new("/nonexistent/path/that/does/not/exist"));
        assert!(matches!(result.unwrap_err(), CoreError::NotFound(_)));
    }

    #[test]
    fn read_directory_on_file_returns_not_a_directory() {
        let tmp = TempDir::new().unwrap();
        let file_path = tmp.path().join("file.txt");
        fs::write(&file_path, "content").unwrap();

        let result = read_directory(&file_path);
        assert!(matches!(result.unwrap_err(), CoreError::NotADirectory(_)));
    }

    #[test]
    fn read_directory_includes_hidden_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".hidden"), "secret").unwrap();
        fs::write(tmp.path().join("visible.txt"), "public").unwrap();

        let entries = read_directory(tmp.path()).unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn list_hides_hidden_entries_by_default() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".hidden"), "").unwrap();
        fs::create_dir(tmp.path().join(".cache")).unwrap();
        fs::write(tmp.path().join("shown.txt"), "").unwrap();

        let entries = DirectoryLister::default().list(tmp.path());
        let names: Vec<&str> = entries.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["shown.txt"]);
    }

    #[test]
    fn list_never_contains_dot_or_dotdot() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a"), "").unwrap();
        let lister = DirectoryLister::new(ListingOptions { show_hidden: true });

        let entries = lister.list(tmp.path());
        assert!(entries.iter().all(|e| e.name() != "." && e.name() != ".."));
    }

    #[test]
    fn list_shows_hidden_when_enabled() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".hidden"), "").unwrap();
        fs::write(tmp.path().join("shown.txt"), "").unwrap();
        let lister = DirectoryLister::new(ListingOptions { show_hidden: true });

        assert_eq!(lister.list(tmp.path()).len(), 2);
    }

    #[test]
    fn list_orders_directories_first() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("aaa.txt"), "").unwrap();
        fs::create_dir(tmp.path().join("zzz")).unwrap();
        fs::create_dir(tmp.path().join("mmm")).unwrap();
        fs::write(tmp.path().join("bbb.txt"), "").unwrap();

        let entries = DirectoryLister::default().list(tmp.path());
        let names: Vec<&str> = entries.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["mmm", "zzz", "aaa.txt", "bbb.txt"]);
    }

    #[test]
    fn list_of_missing_directory_is_empty() {
        let tmp = TempDir::new().unwrap();
        let gone = tmp.path().join("gone");

        assert!(DirectoryLister::default().list(&gone).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn list_of_unreadable_directory_is_empty() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let locked = tmp.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("inside.txt"), "").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Root ignores permission bits; only assert when the read really fails.
        let readable = fs::read_dir(&locked).is_ok();
        let entries = DirectoryLister::default().list(&locked);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        if !readable {
            assert!(entries.is_empty());
        }
    }
}
