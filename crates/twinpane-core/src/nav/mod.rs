//! Navigation logic for twinpane.
//!
//! This module contains the per-pane [`pane::PaneState`] and the entry
//! [`filter`]ing and sorting applied to every listing.

pub mod filter;
pub mod pane;
