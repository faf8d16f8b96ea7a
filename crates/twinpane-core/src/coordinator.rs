//! The dual-pane coordinator.
//!
//! [`DualPaneCoordinator`] owns the left and right [`PaneState`]s, asks the
//! frontend which one is active, turns the active selection into an
//! [`OperationRequest`], runs it, and refreshes both panes afterwards.
//! Every entry point returns an [`Outcome`], including the silent no-ops.

use std::path::PathBuf;

use crate::config::settings::Config;
use crate::error::{CoreError, CoreResult, ErrorKind};
use crate::event::Command;
use crate::fs::listing::ListingOptions;
use crate::fs::ops::{OperationKind, OperationRequest};
use crate::fs::roots::first_root;
use crate::interaction::{ActivePaneSelector, PaneSide, UserInteraction};
use crate::nav::pane::{Navigation, PaneState};

/// How a user-triggered call ended.
#[derive(Debug)]
pub enum Outcome {
    /// The request ran (or the navigation happened).
    Completed,
    /// Neither pane has focus; nothing was done.
    NoActivePane,
    /// The active pane has no usable selection; nothing was done.
    NoSelection,
    /// The user dismissed the name prompt; nothing was done.
    Cancelled,
    /// The user declined the delete confirmation. Panes were refreshed.
    Declined,
    /// The request failed. The error has already been shown to the user.
    Failed(CoreError),
}

impl Outcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Two panes plus the frontend capabilities they need.
pub struct DualPaneCoordinator<U, S> {
    left: PaneState,
    right: PaneState,
    ui: U,
    focus: S,
    confirm_delete: bool,
}

impl<U, S> DualPaneCoordinator<U, S>
where
    U: UserInteraction,
    S: ActivePaneSelector,
{
    /// Creates a coordinator over two already opened panes.
    ///
    /// Delete confirmation is enabled.
    pub fn new(left: PaneState, right: PaneState, ui: U, focus: S) -> Self {
        Self {
            left,
            right,
            ui,
            focus,
            confirm_delete: true,
        }
    }

    /// Enables or disables the delete confirmation prompt.
    #[must_use]
    pub fn with_confirm_delete(self, confirm_delete: bool) -> Self {
        Self {
            confirm_delete,
            ..self
        }
    }

    /// Opens both panes at the first filesystem root.
    ///
    /// # Errors
    ///
    /// Propagates [`PaneState::open`] errors for the root directory.
    pub fn at_first_root(options: ListingOptions, ui: U, focus: S) -> CoreResult<Self> {
        let root = first_root();
        let left = PaneState::open(&root, options)?;
        let right = PaneState::open(&root, options)?;
        Ok(Self::new(left, right, ui, focus))
    }

    /// Opens the panes described by `config`.
    ///
    /// A configured start directory that cannot be opened is logged and
    /// replaced by the first filesystem root.
    ///
    /// # Errors
    ///
    /// Propagates [`PaneState::open`] errors for the root directory.
    pub fn from_config(config: &Config, ui: U, focus: S) -> CoreResult<Self> {
        let options = config.listing_options();
        let left = open_start_dir(config.panes.left.as_ref(), options)?;
        let right = open_start_dir(config.panes.right.as_ref(), options)?;
        Ok(Self::new(left, right, ui, focus).with_confirm_delete(config.general.confirm_delete))
    }

    pub fn left(&self) -> &PaneState {
        &self.left
    }

    pub fn right(&self) -> &PaneState {
        &self.right
    }

    pub fn pane(&self, side: PaneSide) -> &PaneState {
        match side {
            PaneSide::Left => &self.left,
            PaneSide::Right => &self.right,
        }
    }

    pub fn pane_mut(&mut self, side: PaneSide) -> &mut PaneState {
        match side {
            PaneSide::Left => &mut self.left,
            PaneSide::Right => &mut self.right,
        }
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn focus(&self) -> &S {
        &self.focus
    }

    /// Returns the focused side; the left pane wins if both claim focus.
    pub fn active_side(&self) -> Option<PaneSide> {
        [PaneSide::Left, PaneSide::Right]
            .into_iter()
            .find(|side| self.focus.is_focused(*side))
    }

    /// Returns the focused pane, if any.
    pub fn active_pane(&self) -> Option<&PaneState> {
        self.active_side().map(|side| self.pane(side))
    }

    /// Re-lists both panes. Both selections are cleared.
    pub fn refresh_both(&mut self) {
        self.left.refresh();
        self.right.refresh();
    }

    /// Prompts for a name and creates an empty file in the active pane.
    pub async fn create_file(&mut self) -> Outcome {
        self.create("Create file", |dir, name| OperationRequest::CreateFile { dir, name })
            .await
    }

    /// Prompts for a name and creates a directory in the active pane.
    pub async fn create_directory(&mut self) -> Outcome {
        self.create("Create directory", |dir, name| {
            OperationRequest::CreateDirectory { dir, name }
        })
        .await
    }

    async fn create(
        &mut self,
        title: &str,
        request: fn(PathBuf, String) -> OperationRequest,
    ) -> Outcome {
        let Some(side) = self.active_side() else {
            return Outcome::NoActivePane;
        };
        let Some(name) = self.ui.prompt_for_name(title).await else {
            return Outcome::Cancelled;
        };

        let dir = self.pane(side).current_dir().to_path_buf();
        self.run(request(dir, name)).await
    }

    /// Copies (`should_copy`) or moves the active pane's selection into the
    /// other pane's directory.
    pub async fn copy_or_move(&mut self, should_copy: bool) -> Outcome {
        let Some(side) = self.active_side() else {
            return Outcome::NoActivePane;
        };
        let Some(source) = self.pane(side).resolve_selection() else {
            return Outcome::NoSelection;
        };
        let target_dir = self.pane(side.other()).current_dir().to_path_buf();

        let request = if should_copy {
            OperationRequest::Copy { source, target_dir }
        } else {
            OperationRequest::Move { source, target_dir }
        };
        self.run(request).await
    }

    /// Deletes the active pane's selection after confirmation.
    ///
    /// Both panes are refreshed even when the user declines.
    pub async fn delete(&mut self) -> Outcome {
        let Some(side) = self.active_side() else {
            return Outcome::NoActivePane;
        };
        let Some(path) = self.pane(side).resolve_selection() else {
            return Outcome::NoSelection;
        };

        if self.confirm_delete && !self.ui.confirm_delete(&path).await {
            tracing::debug!(path = %path.display(), "delete declined");
            self.refresh_both();
            return Outcome::Declined;
        }
        self.run(OperationRequest::Delete { path }).await
    }

    /// Enters the selection of the pane on `side`.
    ///
    /// Directories are navigated into; files go to the system opener, whose
    /// failures are reported through `show_exception`.
    pub async fn activate(&mut self, side: PaneSide) -> Outcome {
        if self.pane(side).selection().is_none() {
            return Outcome::NoSelection;
        }
        match self.pane_mut(side).activate() {
            Ok(Navigation::OpenExternally(path)) => self.open_externally(path).await,
            Ok(_) => Outcome::Completed,
            Err(e) => {
                self.ui.show_exception(&e).await;
                Outcome::Failed(e)
            }
        }
    }

    async fn open_externally(&mut self, path: PathBuf) -> Outcome {
        match self.ui.open_with_system_default(&path).await {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "opened with system default");
                Outcome::Completed
            }
            Err(e) => {
                let err = CoreError::failed(&path, e);
                self.ui.show_exception(&err).await;
                Outcome::Failed(err)
            }
        }
    }

    /// Executes a frontend [`Command`].
    pub async fn dispatch(&mut self, command: Command) -> Outcome {
        match command {
            Command::CreateFile => self.create_file().await,
            Command::CreateDirectory => self.create_directory().await,
            Command::Copy => self.copy_or_move(true).await,
            Command::Move => self.copy_or_move(false).await,
            Command::Delete => self.delete().await,
            Command::Select(side, selection) => {
                if self.pane_mut(side).select(selection) {
                    Outcome::Completed
                } else {
                    Outcome::NoSelection
                }
            }
            Command::Activate(side) => self.activate(side).await,
            Command::GoParent(side) => {
                self.pane_mut(side).navigate_to_parent();
                Outcome::Completed
            }
            Command::Refresh => {
                self.refresh_both();
                Outcome::Completed
            }
        }
    }

    /// Runs `request`, refreshes both panes, and reports a failure to the user.
    async fn run(&mut self, request: OperationRequest) -> Outcome {
        let kind = request.kind();
        let result = request.execute();
        self.refresh_both();

        match result {
            Ok(()) => Outcome::Completed,
            Err(e) => {
                tracing::warn!(
                    op = kind.label(),
                    path = %request.subject().display(),
                    "operation failed: {e}"
                );
                self.ui.show_error(&failure_message(kind, &e)).await;
                Outcome::Failed(e)
            }
        }
    }
}

fn open_start_dir(configured: Option<&PathBuf>, options: ListingOptions) -> CoreResult<PaneState> {
    if let Some(dir) = configured {
        match PaneState::open(dir, options) {
            Ok(pane) => return Ok(pane),
            Err(e) => tracing::warn!(dir = %dir.display(), "start directory unusable: {e}"),
        }
    }
    PaneState::open(first_root(), options)
}

/// Message shown to the user when `kind` failed with `err`.
pub fn failure_message(kind: OperationKind, err: &CoreError) -> String {
    match (kind, err.kind()) {
        (OperationKind::CreateFile, ErrorKind::AlreadyExists) => {
            "A file with this name already exists.".to_string()
        }
        (OperationKind::CreateDirectory, ErrorKind::AlreadyExists) => {
            "A directory with this name already exists.".to_string()
        }
        (OperationKind::Copy | OperationKind::Move, ErrorKind::AlreadyExists) => {
            "A file or directory with this name already exists in the target directory."
                .to_string()
        }
        _ => format!("Could not {}: {err}", kind.label()),
    }
}
