// SPDX-License-Identifier: MPL-2.0
//! Hover zoom sub-component.
//!
//! Desktop images zoom in place on click. While zoomed, the transform origin
//! follows the cursor so the magnified region tracks the pointer.

use crate::dom::Origin;
use iced_core::{Point, Rectangle};

/// Zoom sub-component state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    zoomed: Option<usize>,
}

/// Messages for the zoom sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Image of a slide clicked.
    Toggle(usize),
    /// Pointer moved over a slide.
    Track {
        slide: usize,
        position: Point,
        image_bounds: Rectangle,
    },
    /// Pointer left a slide.
    Leave(usize),
    /// Drop any zoom, e.g. before a mode switch.
    Clear,
}

/// Effects produced by zoom changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    /// `slide` zoomed in; `previous` must return to idle first.
    ZoomIn {
        slide: usize,
        previous: Option<usize>,
    },
    /// `slide` back to idle with a centered origin.
    ZoomOut(usize),
    /// Move the focal point of the zoomed slide.
    Focus { slide: usize, origin: Origin },
}

impl State {
    /// Handle a zoom message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Toggle(slide) => {
                if self.zoomed == Some(slide) {
                    self.zoomed = None;
                    Effect::ZoomOut(slide)
                } else {
                    let previous = self.zoomed.replace(slide);
                    Effect::ZoomIn { slide, previous }
                }
            }
            Message::Track {
                slide,
                position,
                image_bounds,
            } => {
                if self.zoomed != Some(slide) {
                    return Effect::None;
                }
                match focal_point(position, image_bounds) {
                    Some(origin) => Effect::Focus { slide, origin },
                    None => Effect::None,
                }
            }
            Message::Leave(slide) => {
                if self.zoomed == Some(slide) {
                    self.zoomed = None;
                    Effect::ZoomOut(slide)
                } else {
                    Effect::None
                }
            }
            Message::Clear => match self.zoomed.take() {
                Some(slide) => Effect::ZoomOut(slide),
                None => Effect::None,
            },
        }
    }

    /// Slide currently zoomed, if any.
    #[must_use]
    pub fn zoomed(&self) -> Option<usize> {
        self.zoomed
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.zoomed.is_some()
    }
}

/// Cursor position as percentages of the image box, or `None` for a box
/// without area.
#[must_use]
pub fn focal_point(position: Point, bounds: Rectangle) -> Option<Origin> {
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return None;
    }
    Some(Origin {
        x_percent: (position.x - bounds.x) / bounds.width * 100.0,
        y_percent: (position.y - bounds.y) / bounds.height * 100.0,
    })
}
