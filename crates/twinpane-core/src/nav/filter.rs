//! Ordering and filtering for pane listings.

use std::cmp::Ordering;

use crate::fs::entry::FileEntry;

/// Compares two entries in listing order.
///
/// Directories come before everything else; within each group names are
/// compared byte-wise (no case folding, no locale collation).
pub fn listing_order(a: &FileEntry, b: &FileEntry) -> Ordering {
    b.is_dir()
        .cmp(&a.is_dir())
        .then_with(|| a.name().as_bytes().cmp(b.name().as_bytes()))
}

/// Sorts entries directories-first, then by name.
///
/// Returns a **new** sorted `Vec<FileEntry>`; the input slice is never
/// mutated. The sort is stable, so equal names keep their read order.
pub fn sort_entries(entries: &[FileEntry]) -> Vec<FileEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(listing_order);
    sorted
}

/// Filters out hidden entries when `show_hidden` is `false`.
///
/// When `show_hidden` is `true` all entries are returned unchanged.
pub fn filter_hidden(entries: &[FileEntry], show_hidden: bool) -> Vec<FileEntry> {
    if show_hidden {
        return entries.to_vec();
    }
    entries.iter().filter(|e| !e.is_hidden()).cloned().collect()
}
