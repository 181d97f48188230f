//! Shared types and system ordering labels.

use bevy::prelude::*;

/// Which group of views is on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    /// Single-planet interactive view.
    #[default]
    Detail,
    /// All planets on a pannable, zoomable strip.
    Overview,
}

/// Where a planet selection came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SelectionOrigin {
    /// A chip in the selector bar.
    SelectorBar,
    /// The "view in detail" action of the overview modal.
    Overview,
}

/// System sets for ordering per-frame work in `Update`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ViewSystemSet {
    /// Sample mouse and touch state into `PointerInput`.
    Input,
    /// Apply selection and view-mode requests to `ViewState`.
    ApplyRequests,
    /// Spawn and despawn scene entities for the active view.
    Mount,
    /// Per-frame interaction and animation.
    Animate,
}
