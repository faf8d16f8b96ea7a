//! twinpane core library: UI-agnostic dual-pane file browser logic.
//!
//! `twinpane-core` lists directories, keeps the state of two browser panes,
//! and copies, moves, creates and deletes filesystem entries between them.
//! It draws nothing itself. Dialogs, focus and launching files are borrowed
//! from the embedding frontend through the traits in [`interaction`].
//!
//! # Modules
//!
//! - [`fs`]: directory listing ([`DirectoryLister`]), [`FileEntry`], filesystem roots, file operations.
//! - [`nav`]: per-pane state ([`PaneState`]), sorting and hidden-entry filtering.
//! - [`coordinator`]: [`DualPaneCoordinator`], which runs user requests against the active pane.
//! - [`interaction`]: frontend capabilities ([`UserInteraction`], [`ActivePaneSelector`]).
//! - [`config`]: TOML-based settings.
//! - [`event`]: [`Command`]s sent from the frontend.
//! - [`error`]: unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod config;
pub mod coordinator;
pub mod error;
pub mod event;
pub mod fs;
pub mod interaction;
pub mod nav;

#[cfg(test)]
mod test_support;

pub use config::settings::Config;
pub use coordinator::{DualPaneCoordinator, Outcome};
pub use error::{CoreError, CoreResult, ErrorKind};
pub use event::Command;
pub use fs::entry::FileEntry;
pub use fs::listing::{read_directory, DirectoryLister, ListingOptions};
pub use fs::ops::{
    copy_to, create_directory, create_file, delete, move_to, OperationKind, OperationRequest,
};
pub use fs::roots::{filesystem_roots, first_root};
pub use interaction::{ActivePaneSelector, PaneSide, UserInteraction};
pub use nav::pane::{Navigation, PaneState, Selection};
