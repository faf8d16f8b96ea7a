//! Capabilities the core borrows from the frontend.
//!
//! The core never draws anything. Dialogs, focus tracking, and launching
//! files with the desktop's default application are supplied by whichever
//! frontend embeds it, through the two traits below.

use std::path::Path;

use async_trait::async_trait;

use crate::error::CoreError;

/// Identifies one of the two panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaneSide {
    Left,
    Right,
}

impl PaneSide {
    /// The pane across from this one.
    pub fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Dialogs and platform hooks provided by the frontend.
///
/// Every method is awaited to completion before the core continues, so a
/// blocking frontend can resolve immediately and an event-driven one can
/// resolve when the user answers.
#[async_trait]
pub trait UserInteraction: Send + Sync {
    /// Shows a human-readable error message.
    async fn show_error(&self, message: &str);

    /// Shows an error raised outside a file operation (e.g. opening a file).
    async fn show_exception(&self, error: &CoreError);

    /// Asks for a file or directory name. `None` means the user cancelled.
    async fn prompt_for_name(&self, title: &str) -> Option<String>;

    /// Asks whether `path` should really be deleted.
    async fn confirm_delete(&self, path: &Path) -> bool;

    /// Opens a non-directory entry with the desktop's default application.
    async fn open_with_system_default(&self, path: &Path) -> std::io::Result<()>;
}

/// Reports which pane currently holds input focus.
///
/// A pane counts as focused when its list or its path display has focus.
/// Both may report `false` (e.g. while a toolbar button is focused).
pub trait ActivePaneSelector: Send + Sync {
    fn is_focused(&self, side: PaneSide) -> bool;
}
