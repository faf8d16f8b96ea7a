//! Commands sent from the frontend to the core.
//!
//! The frontend translates clicks and key presses into [`Command`]s and
//! hands them to [`DualPaneCoordinator::dispatch`](crate::DualPaneCoordinator::dispatch),
//! which answers with an [`Outcome`](crate::Outcome). This keeps every
//! frontend on the same code path.

use crate::interaction::PaneSide;
use crate::nav::pane::Selection;

/// An action the UI requests the core to perform.
///
/// Commands flow **UI → Core**. The core never creates commands itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create an empty file in the active pane (prompts for a name).
    CreateFile,
    /// Create a directory in the active pane (prompts for a name).
    CreateDirectory,
    /// Copy the active pane's selection into the other pane's directory.
    Copy,
    /// Move the active pane's selection into the other pane's directory.
    Move,
    /// Delete the active pane's selection (after confirmation).
    Delete,
    /// Highlight a row in a pane.
    Select(PaneSide, Selection),
    /// Enter the highlighted row of a pane (double-click / Enter).
    Activate(PaneSide),
    /// Move a pane to its parent directory.
    GoParent(PaneSide),
    /// Re-read both panes.
    Refresh,
}
