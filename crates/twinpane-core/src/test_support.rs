//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::CoreError;
use crate::interaction::{ActivePaneSelector, PaneSide, UserInteraction};

/// A frontend stand-in that answers prompts from a script and records
/// everything the core asks it to show.
pub struct ScriptedInteraction {
    names: Mutex<VecDeque<Option<String>>>,
    confirm: bool,
    open_fails: bool,
    prompts: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
    exceptions: Mutex<Vec<String>>,
    confirmations: Mutex<Vec<PathBuf>>,
    opened: Mutex<Vec<PathBuf>>,
}

impl ScriptedInteraction {
    pub fn new() -> Self {
        Self {
            names: Mutex::new(VecDeque::new()),
            confirm: true,
            open_fails: false,
            prompts: Mutex::new(Vec::new()),
            errors: Mutex::new(Vec::new()),
            exceptions: Mutex::new(Vec::new()),
            confirmations: Mutex::new(Vec::new()),
            opened: Mutex::new(Vec::new()),
        }
    }

    /// Answers for successive name prompts. `None` cancels; an exhausted
    /// script cancels too.
    pub fn with_names<'a>(self, names: impl IntoIterator<Item = Option<&'a str>>) -> Self {
        let names = names.into_iter().map(|n| n.map(str::to_string)).collect();
        Self {
            names: Mutex::new(names),
            ..self
        }
    }

    pub fn confirming(self, confirm: bool) -> Self {
        Self { confirm, ..self }
    }

    pub fn failing_open(self) -> Self {
        Self {
            open_fails: true,
            ..self
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn exceptions(&self) -> Vec<String> {
        self.exceptions.lock().unwrap().clone()
    }

    pub fn confirmations(&self) -> Vec<PathBuf> {
        self.confirmations.lock().unwrap().clone()
    }

    pub fn opened(&self) -> Vec<PathBuf> {
        self.opened.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserInteraction for ScriptedInteraction {
    async fn show_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    async fn show_exception(&self, error: &CoreError) {
        self.exceptions.lock().unwrap().push(error.to_string());
    }

    async fn prompt_for_name(&self, title: &str) -> Option<String> {
        self.prompts.lock().unwrap().push(title.to_string());
        self.names.lock().unwrap().pop_front().flatten()
    }

    async fn confirm_delete(&self, path: &Path) -> bool {
        self.confirmations.lock().unwrap().push(path.to_path_buf());
        self.confirm
    }

    async fn open_with_system_default(&self, path: &Path) -> std::io::Result<()> {
        if self.open_fails {
            return Err(std::io::Error::other("no application registered"));
        }
        self.opened.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}

/// Focus that tests can move between panes.
pub struct SwitchableFocus {
    left: AtomicBool,
    right: AtomicBool,
}

impl SwitchableFocus {
    pub fn none() -> Self {
        Self {
            left: AtomicBool::new(false),
            right: AtomicBool::new(false),
        }
    }

    pub fn on(side: PaneSide) -> Self {
        let focus = Self::none();
        focus.set(Some(side));
        focus
    }

    /// Both panes claim focus at once.
    pub fn both() -> Self {
        Self {
            left: AtomicBool::new(true),
            right: AtomicBool::new(true),
        }
    }

    pub fn set(&self, side: Option<PaneSide>) {
        self.left
            .store(side == Some(PaneSide::Left), Ordering::SeqCst);
        self.right
            .store(side == Some(PaneSide::Right), Ordering::SeqCst);
    }
}

impl ActivePaneSelector for SwitchableFocus {
    fn is_focused(&self, side: PaneSide) -> bool {
        match side {
            PaneSide::Left => self.left.load(Ordering::SeqCst),
            PaneSide::Right => self.right.load(Ordering::SeqCst),
        }
    }
}
