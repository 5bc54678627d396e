// SPDX-License-Identifier: MPL-2.0
//! Transient gesture state.
//!
//! At most one gesture is in flight per gallery. Encoding it as a single enum
//! makes combinations such as dragging while pinching unrepresentable.

/// Gesture currently tracked by a gallery.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    /// Slider thumb held down.
    Dragging {
        /// Pointer Y when the thumb was pressed.
        start_y: f32,
        /// Thumb offset top when it was pressed.
        thumb_start_top: f32,
    },
    /// Finger moving the carousel.
    Swiping {
        start_x: f32,
        current_x: f32,
        /// Carousel translation in px when the finger went down.
        start_offset: f32,
    },
    /// Two fingers on the lightbox image.
    Pinching { initial_distance: f32 },
}

impl Interaction {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Interaction::Dragging { .. })
    }

    #[must_use]
    pub fn is_swiping(&self) -> bool {
        matches!(self, Interaction::Swiping { .. })
    }

    #[must_use]
    pub fn is_pinching(&self) -> bool {
        matches!(self, Interaction::Pinching { .. })
    }

    /// Ends whatever gesture is in flight, returning it.
    pub fn cancel(&mut self) -> Interaction {
        std::mem::take(self)
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Interaction::Idle => "idle",
            Interaction::Dragging { .. } => "dragging",
            Interaction::Swiping { .. } => "swiping",
            Interaction::Pinching { .. } => "pinching",
        }
    }
}
