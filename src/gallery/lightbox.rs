// SPDX-License-Identifier: MPL-2.0
//! Lightbox sub-component with pinch zoom.

use super::interaction::Interaction;
use crate::domain::PinchScale;
use iced_core::Point;

/// Lightbox sub-component state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct State {
    /// Slide shown in the lightbox, when open.
    open: Option<usize>,
    /// Scale committed by the last finished pinch.
    baseline: PinchScale,
    /// Scale currently rendered.
    displayed: PinchScale,
}

/// Messages for the lightbox sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    Open(usize),
    Close,
    PinchStart(Vec<Point>),
    PinchMove(Vec<Point>),
    PinchEnd,
}

/// Effects produced by lightbox changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    /// Show `slide`. Pinch listeners are needed only on a fresh opening.
    Show { slide: usize, fresh: bool },
    /// Hide the overlay and render the natural scale.
    Hide,
    /// Render the image at this scale.
    Scale(PinchScale),
    /// Pinch finished; the displayed scale is the new baseline.
    Commit(PinchScale),
}

impl State {
    /// Handle a lightbox message against the gallery's gesture state.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, interaction: &mut Interaction, msg: Message) -> Effect {
        match msg {
            Message::Open(slide) => {
                let fresh = self.open.is_none();
                self.open = Some(slide);
                Effect::Show { slide, fresh }
            }
            Message::Close => {
                self.open = None;
                self.baseline = PinchScale::NATURAL;
                self.displayed = PinchScale::NATURAL;
                if interaction.is_pinching() {
                    *interaction = Interaction::Idle;
                }
                Effect::Hide
            }
            Message::PinchStart(touches) => match pinch_distance(&touches) {
                Some(initial_distance) if self.open.is_some() => {
                    *interaction = Interaction::Pinching { initial_distance };
                    Effect::None
                }
                _ => Effect::None,
            },
            Message::PinchMove(touches) => {
                let Interaction::Pinching { initial_distance } = *interaction else {
                    return Effect::None;
                };
                let Some(distance) = pinch_distance(&touches) else {
                    return Effect::None;
                };
                self.displayed = PinchScale::from_pinch(initial_distance, distance, self.baseline);
                Effect::Scale(self.displayed)
            }
            Message::PinchEnd => {
                if !interaction.is_pinching() {
                    return Effect::None;
                }
                *interaction = Interaction::Idle;
                self.baseline = self.displayed;
                Effect::Commit(self.baseline)
            }
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Slide shown in the lightbox, if open.
    #[must_use]
    pub fn slide(&self) -> Option<usize> {
        self.open
    }

    #[must_use]
    pub fn displayed_scale(&self) -> PinchScale {
        self.displayed
    }

    #[must_use]
    pub fn baseline(&self) -> PinchScale {
        self.baseline
    }
}

/// Distance between the first two touch points; `None` unless exactly two
/// fingers are down.
#[must_use]
pub fn pinch_distance(touches: &[Point]) -> Option<f32> {
    match touches {
        [first, second] => Some((first.x - second.x).hypot(first.y - second.y)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn fingers(gap: f32) -> Vec<Point> {
        vec![Point::new(100.0, 200.0), Point::new(100.0 + gap, 200.0)]
    }

    fn opened() -> (State, Interaction) {
        let mut state = State::default();
        let mut interaction = Interaction::Idle;
        state.handle(&mut interaction, Message::Open(0));
        (state, interaction)
    }

    #[test]
    fn reopening_does_not_request_new_listeners() {
        let mut state = State::default();
        let mut interaction = Interaction::Idle;
        assert_eq!(
            state.handle(&mut interaction, Message::Open(1)),
            Effect::Show {
                slide: 1,
                fresh: true
            }
        );
        assert_eq!(
            state.handle(&mut interaction, Message::Open(2)),
            Effect::Show {
                slide: 2,
                fresh: false
            }
        );
        assert_eq!(state.slide(), Some(2));
    }

    #[test]
    fn pinch_scales_from_committed_baseline() {
        let (mut state, mut interaction) = opened();

        state.handle(&mut interaction, Message::PinchStart(fingers(100.0)));
        assert!(interaction.is_pinching());
        state.handle(&mut interaction, Message::PinchMove(fingers(200.0)));
        assert_eq!(
            state.handle(&mut interaction, Message::PinchEnd),
            Effect::Commit(PinchScale::new(2.0))
        );

        state.handle(&mut interaction, Message::PinchStart(fingers(100.0)));
        match state.handle(&mut interaction, Message::PinchMove(fingers(150.0))) {
            Effect::Scale(scale) => assert_relative_eq!(scale.value(), 3.0),
            other => panic!("expected scale, got {other:?}"),
        }
    }

    #[test]
    fn pinching_in_never_goes_below_natural() {
        let (mut state, mut interaction) = opened();
        state.handle(&mut interaction, Message::PinchStart(fingers(300.0)));
        assert_eq!(
            state.handle(&mut interaction, Message::PinchMove(fingers(10.0))),
            Effect::Scale(PinchScale::NATURAL)
        );
    }

    #[test]
    fn single_finger_does_not_pinch() {
        let (mut state, mut interaction) = opened();
        state.handle(
            &mut interaction,
            Message::PinchStart(vec![Point::new(0.0, 0.0)]),
        );
        assert!(interaction.is_idle());
        assert_eq!(state.handle(&mut interaction, Message::PinchEnd), Effect::None);
    }

    #[test]
    fn close_resets_scale_and_gesture() {
        let (mut state, mut interaction) = opened();
        state.handle(&mut interaction, Message::PinchStart(fingers(100.0)));
        state.handle(&mut interaction, Message::PinchMove(fingers(250.0)));

        assert_eq!(state.handle(&mut interaction, Message::Close), Effect::Hide);
        assert!(interaction.is_idle());
        assert!(!state.is_open());
        assert!(state.displayed_scale().is_natural());
        assert!(state.baseline().is_natural());
    }
}
