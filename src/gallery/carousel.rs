// SPDX-License-Identifier: MPL-2.0
//! Swipe carousel sub-component.

use super::interaction::Interaction;
use crate::domain::SwipeThreshold;

/// Messages for the carousel sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// First finger down at `x`; `slide_width` is the width of one slide.
    Start { x: f32, slide_width: f32 },
    /// Finger moved to `x`.
    Move { x: f32 },
    /// Finger lifted.
    End,
}

/// Effects produced by swipe gestures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    /// Follow the finger without animation, starting from this offset.
    Follow,
    /// Translate the track by this many pixels.
    Translate(f32),
    /// Animate to `index`.
    Settle { index: usize },
}

/// Handle a carousel message for a gallery of `count` slides showing `index`.
pub fn handle(
    interaction: &mut Interaction,
    msg: Message,
    index: usize,
    count: usize,
    threshold: SwipeThreshold,
) -> Effect {
    match msg {
        Message::Start { x, slide_width } => {
            #[allow(clippy::cast_precision_loss)]
            let start_offset = -(index as f32) * slide_width;
            *interaction = Interaction::Swiping {
                start_x: x,
                current_x: x,
                start_offset,
            };
            Effect::Follow
        }
        Message::Move { x } => match interaction {
            Interaction::Swiping {
                start_x,
                current_x,
                start_offset,
            } => {
                *current_x = x;
                Effect::Translate(*start_offset + x - *start_x)
            }
            _ => Effect::None,
        },
        Message::End => {
            let Interaction::Swiping {
                start_x, current_x, ..
            } = *interaction
            else {
                return Effect::None;
            };
            *interaction = Interaction::Idle;
            Effect::Settle {
                index: settle_index(index, count, current_x - start_x, threshold),
            }
        }
    }
}

/// Index the carousel settles on after moving by `moved_by` pixels.
///
/// A leftward move past the threshold advances, a rightward one goes back;
/// both stop at the ends.
#[must_use]
pub fn settle_index(index: usize, count: usize, moved_by: f32, threshold: SwipeThreshold) -> usize {
    let limit = threshold.value();
    if moved_by < -limit && index + 1 < count {
        index + 1
    } else if moved_by > limit && index > 0 {
        index - 1
    } else {
        index
    }
}
