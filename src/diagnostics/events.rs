// SPDX-License-Identifier: MPL-2.0
//! Gallery activity event types.
//!
//! These actions describe meaningful state changes of a gallery so that a
//! host can reconstruct what the shopper did before something looked wrong.

use serde::{Deserialize, Serialize};

/// What moved the current index.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NavigationSource {
    Dot,
    Swipe,
    Scroll,
    /// Host called `select`.
    Programmatic,
}

/// Gallery state changes captured for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum GalleryAction {
    // ==========================================================================
    // Lifecycle
    // ==========================================================================
    /// Controller bound to its container.
    Mounted { slides: usize, mode: String },

    /// Viewport crossed the breakpoint.
    ModeSwitched { from: String, to: String },

    /// Listeners released.
    Destroyed { listeners_released: usize },

    // ==========================================================================
    // Navigation
    // ==========================================================================
    /// Current index changed.
    Navigated {
        from: usize,
        to: usize,
        source: NavigationSource,
    },

    // ==========================================================================
    // Zoom
    // ==========================================================================
    /// Hover zoom switched on or off for a slide.
    ZoomToggled { slide: usize, zoomed: bool },

    /// Lightbox shown for a slide.
    LightboxOpened { slide: usize },

    /// Lightbox hidden.
    LightboxClosed,

    /// A pinch gesture finished and its scale became the new baseline.
    PinchCommitted { scale: f32 },
}

/// An action with its position in the gallery's history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityEntry {
    pub sequence: u64,
    #[serde(flatten)]
    pub action: GalleryAction,
}
