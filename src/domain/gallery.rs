// SPDX-License-Identifier: MPL-2.0
//! Gallery data types.

use super::newtypes::Breakpoint;

/// One image of the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    pub url: String,
    pub alt: String,
}

impl ImageEntry {
    #[must_use]
    pub fn new(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: alt.into(),
        }
    }
}

/// Interaction mode derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Vertical panel with slider, wheel scrolling and hover zoom.
    #[default]
    Desktop,
    /// Horizontal swipe carousel with dots and a pinch lightbox.
    Mobile,
}

impl LayoutMode {
    /// Mobile when the viewport is at most `breakpoint` wide.
    #[must_use]
    pub fn for_viewport(width: f32, breakpoint: Breakpoint) -> Self {
        if width <= breakpoint.as_f32() {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }

    #[must_use]
    pub fn is_mobile(self) -> bool {
        self == LayoutMode::Mobile
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutMode::Desktop => "desktop",
            LayoutMode::Mobile => "mobile",
        }
    }
}

/// Step direction of the prev/next controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    Previous,
    Next,
}

impl NavigationDirection {
    /// `-1.0` for previous, `1.0` for next.
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            NavigationDirection::Previous => -1.0,
            NavigationDirection::Next => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_width_is_mobile() {
        let breakpoint = Breakpoint::new(767);
        assert_eq!(LayoutMode::for_viewport(767.0, breakpoint), LayoutMode::Mobile);
        assert_eq!(LayoutMode::for_viewport(320.0, breakpoint), LayoutMode::Mobile);
        assert_eq!(LayoutMode::for_viewport(767.5, breakpoint), LayoutMode::Desktop);
        assert_eq!(LayoutMode::for_viewport(1280.0, breakpoint), LayoutMode::Desktop);
    }

    #[test]
    fn direction_sign() {
        assert_eq!(NavigationDirection::Previous.sign(), -1.0);
        assert_eq!(NavigationDirection::Next.sign(), 1.0);
    }
}
