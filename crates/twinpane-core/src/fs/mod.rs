//! File system abstractions for twinpane.
//!
//! This module provides the entry type shown in a pane ([`entry::FileEntry`]),
//! directory listing ([`listing::DirectoryLister`]), filesystem root discovery
//! ([`roots`]), and the create/copy/move/delete engine ([`ops`]).

pub mod entry;
pub mod listing;
pub mod ops;
pub mod roots;
