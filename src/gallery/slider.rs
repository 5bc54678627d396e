// SPDX-License-Identifier: MPL-2.0
//! Vertical slider sub-component.
//!
//! The thumb mirrors the panel's scroll fraction; dragging the thumb drives
//! the panel's scroll offset in the opposite direction.

use super::interaction::Interaction;
use crate::dom::Metrics;

/// Heights of the slider track and its thumb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub track_height: f32,
    pub thumb_height: f32,
}

impl Track {
    /// Distance the thumb can travel; never negative.
    #[must_use]
    pub fn travel(&self) -> f32 {
        (self.track_height - self.thumb_height).max(0.0)
    }
}

/// Thumb top matching the panel's scroll position.
///
/// Content that does not scroll pins the thumb to the top.
#[must_use]
pub fn thumb_top(panel: &Metrics, track: Track) -> f32 {
    let scrollable = panel.scrollable_height();
    if scrollable <= 0.0 {
        return 0.0;
    }
    panel.scroll_top / scrollable * track.travel()
}

/// Panel scroll offset matching a thumb position, or `None` when the panel
/// cannot scroll.
#[must_use]
pub fn scroll_top_for_thumb(thumb_top: f32, panel: &Metrics, track: Track) -> Option<f32> {
    let scrollable = panel.scrollable_height();
    if scrollable <= 0.0 {
        return None;
    }
    let travel = track.travel();
    let fraction = if travel > 0.0 {
        thumb_top / travel
    } else {
        0.0
    };
    Some(fraction * scrollable)
}

/// Messages for the slider sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Thumb pressed at `pointer_y` while sitting at `thumb_top`.
    Press { pointer_y: f32, thumb_top: f32 },
    /// Pointer moved anywhere in the document.
    Drag { pointer_y: f32 },
    /// Pointer released anywhere in the document.
    Release,
}

/// Effects produced by slider gestures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    /// Drag started; show the grabbed look.
    Grab,
    /// Scroll the panel to this offset.
    ScrollPanel(f32),
    /// Thumb moved while the panel cannot scroll.
    Hold,
    /// Drag ended; restore the idle look.
    Release,
}

/// Handle a slider message against the gallery's gesture state.
pub fn handle(interaction: &mut Interaction, msg: Message, panel: &Metrics, track: Track) -> Effect {
    match msg {
        Message::Press {
            pointer_y,
            thumb_top,
        } => {
            *interaction = Interaction::Dragging {
                start_y: pointer_y,
                thumb_start_top: thumb_top,
            };
            Effect::Grab
        }
        Message::Drag { pointer_y } => {
            let Interaction::Dragging {
                start_y,
                thumb_start_top,
            } = *interaction
            else {
                return Effect::None;
            };
            let top = (thumb_start_top + pointer_y - start_y).clamp(0.0, track.travel());
            match scroll_top_for_thumb(top, panel, track) {
                Some(scroll_top) => Effect::ScrollPanel(scroll_top),
                None => Effect::Hold,
            }
        }
        Message::Release => {
            if interaction.is_dragging() {
                *interaction = Interaction::Idle;
                Effect::Release
            } else {
                Effect::None
            }
        }
    }
}
