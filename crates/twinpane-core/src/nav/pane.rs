//! State of one browser pane.
//!
//! A [`PaneState`] owns its current directory, the listing shown for it,
//! and at most one [`Selection`]. Every refresh recomputes the listing and
//! drops the selection, so a selection never outlives the rows it was made
//! from.

use std::path::{Component, Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::FileEntry;
use crate::fs::listing::{DirectoryLister, ListingOptions};
use crate::fs::roots::is_root;

/// Name of the synthetic row that leads to the parent directory.
pub const PARENT_MARKER: &str = "..";

/// What the user has highlighted in a pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The synthetic `..` row.
    Parent,
    /// A real entry, by name.
    Entry(String),
}

impl Selection {
    /// Maps a displayed row name back to a selection.
    pub fn from_row(name: &str) -> Self {
        if name == PARENT_MARKER {
            Self::Parent
        } else {
            Self::Entry(name.to_string())
        }
    }
}

/// Result of entering something in a pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The pane now shows this directory.
    Entered(PathBuf),
    /// The target is not a directory; the caller should hand it to the
    /// system opener. The pane is unchanged.
    OpenExternally(PathBuf),
    /// Nothing happened (no selection, or already at a root).
    Unchanged,
}

/// One side of the dual-pane browser.
#[derive(Debug, Clone)]
pub struct PaneState {
    current_dir: PathBuf,
    entries: Vec<FileEntry>,
    selection: Option<Selection>,
    lister: DirectoryLister,
}

impl PaneState {
    /// Opens a pane on `dir` and lists it.
    ///
    /// The stored path is absolute with `.` and `..` components resolved, so
    /// [`PaneState::navigate_to_parent`] always goes one level up.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if `dir` does not exist.
    /// - [`CoreError::NotADirectory`] if `dir` is not a directory.
    pub fn open(dir: impl Into<PathBuf>, options: ListingOptions) -> CoreResult<Self> {
        let dir = dir.into();
        let meta = std::fs::metadata(&dir).map_err(|e| CoreError::from_io(&dir, e))?;
        if !meta.is_dir() {
            return Err(CoreError::NotADirectory(dir));
        }
        let current_dir = normalize(&std::path::absolute(&dir).unwrap_or(dir));

        let mut pane = Self {
            current_dir,
            entries: Vec::new(),
            selection: None,
            lister: DirectoryLister::new(options),
        };
        pane.refresh();
        Ok(pane)
    }

    /// Returns the directory currently being displayed.
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    /// Returns the real entries of the current directory, in display order.
    ///
    /// The synthetic `..` row is not included; see [`PaneState::listed_names`].
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Returns `true` if the current directory is a filesystem root.
    pub fn is_root(&self) -> bool {
        is_root(&self.current_dir)
    }

    /// Returns `true` if the listing starts with the `..` row.
    pub fn shows_parent(&self) -> bool {
        !self.is_root()
    }

    /// Returns the displayed rows: `..` (unless at a root) followed by the
    /// entry names.
    pub fn listed_names(&self) -> Vec<&str> {
        let parent = self.shows_parent().then_some(PARENT_MARKER);
        parent
            .into_iter()
            .chain(self.entries.iter().map(FileEntry::name))
            .collect()
    }

    /// Returns the current selection, if any.
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Re-reads the current directory and clears the selection.
    ///
    /// Never fails: an unreadable directory shows as empty.
    pub fn refresh(&mut self) {
        self.entries = self.lister.list(&self.current_dir);
        self.selection = None;
    }

    /// Highlights `selection`.
    ///
    /// Returns `false` (and leaves the selection unchanged) if the row is
    /// not part of the current listing.
    pub fn select(&mut self, selection: Selection) -> bool {
        let listed = match &selection {
            Selection::Parent => self.shows_parent(),
            Selection::Entry(name) => self.entry(name).is_some(),
        };
        if listed {
            self.selection = Some(selection);
        }
        listed
    }

    /// Highlights the row at `index` of [`PaneState::listed_names`].
    ///
    /// Returns `false` if the index is out of bounds.
    pub fn select_index(&mut self, index: usize) -> bool {
        let offset = usize::from(self.shows_parent());
        let selection = if index < offset {
            Selection::Parent
        } else {
            match self.entries.get(index - offset) {
                Some(entry) => Selection::Entry(entry.name().to_string()),
                None => return false,
            }
        };
        self.selection = Some(selection);
        true
    }

    /// Drops the selection without re-listing.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Returns the absolute path of the selected entry.
    ///
    /// `None` when nothing or only `..` is selected. The path is not
    /// checked for existence; the entry may have vanished since listing.
    pub fn resolve_selection(&self) -> Option<PathBuf> {
        match self.selection.as_ref()? {
            Selection::Parent => None,
            Selection::Entry(name) => Some(self.resolve(name)),
        }
    }

    /// Moves to the parent directory. No-op at a filesystem root.
    pub fn navigate_to_parent(&mut self) -> Navigation {
        let Some(parent) = self.current_dir.parent() else {
            return Navigation::Unchanged;
        };
        self.current_dir = parent.to_path_buf();
        self.refresh();
        tracing::debug!(dir = %self.current_dir.display(), "navigated to parent");
        Navigation::Entered(self.current_dir.clone())
    }

    /// Enters `name` within the current directory.
    ///
    /// A directory (or a link to one) becomes the current directory.
    /// Anything else is returned as [`Navigation::OpenExternally`] without
    /// changing the pane.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the entry no longer exists.
    pub fn navigate_into(&mut self, name: &str) -> CoreResult<Navigation> {
        if name == PARENT_MARKER {
            return Ok(self.navigate_to_parent());
        }
        let target = self.resolve(name);
        let meta = std::fs::metadata(&target).map_err(|e| CoreError::from_io(&target, e))?;

        if !meta.is_dir() {
            return Ok(Navigation::OpenExternally(target));
        }
        self.current_dir = target;
        self.refresh();
        tracing::debug!(dir = %self.current_dir.display(), "entered directory");
        Ok(Navigation::Entered(self.current_dir.clone()))
    }

    /// Enters the current selection: `..` goes to the parent, an entry is
    /// passed to [`PaneState::navigate_into`].
    ///
    /// # Errors
    ///
    /// See [`PaneState::navigate_into`].
    pub fn activate(&mut self) -> CoreResult<Navigation> {
        match self.selection.clone() {
            None => Ok(Navigation::Unchanged),
            Some(Selection::Parent) => Ok(self.navigate_to_parent()),
            Some(Selection::Entry(name)) => self.navigate_into(&name),
        }
    }

    fn entry(&self, name: &str) -> Option<&FileEntry> {
        self.entries.iter().find(|e| e.name() == name)
    }

    /// Listed entries keep their on-disk path (names are NFC-normalised
    /// for display); unknown names are joined onto the current directory.
    fn resolve(&self, name: &str) -> PathBuf {
        self.entry(name)
            .map(|e| e.path().to_path_buf())
            .unwrap_or_else(|| self.current_dir.join(name))
    }
}

/// Drops `.` components and folds each `..` into its parent.
///
/// `..` at a root stays at the root, as it does on disk.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}
