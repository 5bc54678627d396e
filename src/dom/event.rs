// SPDX-License-Identifier: MPL-2.0
//! Events delivered by the host document.

use super::{NodeId, Target};
use iced_core::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Resize,
    Click,
    Scroll,
    Wheel,
    MouseDown,
    MouseMove,
    MouseUp,
    MouseLeave,
    TouchStart,
    TouchMove,
    TouchEnd,
}

impl EventKind {
    /// Whether the event propagates from its target up to the document and window.
    #[must_use]
    pub fn bubbles(self) -> bool {
        !matches!(
            self,
            EventKind::Resize | EventKind::Scroll | EventKind::MouseLeave
        )
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            EventKind::Resize => "resize",
            EventKind::Click => "click",
            EventKind::Scroll => "scroll",
            EventKind::Wheel => "wheel",
            EventKind::MouseDown => "mousedown",
            EventKind::MouseMove => "mousemove",
            EventKind::MouseUp => "mouseup",
            EventKind::MouseLeave => "mouseleave",
            EventKind::TouchStart => "touchstart",
            EventKind::TouchMove => "touchmove",
            EventKind::TouchEnd => "touchend",
        }
    }
}

/// Payload carried by an event.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EventData {
    #[default]
    None,
    /// Pointer position in viewport coordinates.
    Pointer(Point),
    /// Active touch points, in viewport coordinates.
    Touches(Vec<Point>),
    Wheel { delta_y: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DomEvent {
    pub target: Target,
    pub kind: EventKind,
    pub data: EventData,
}

impl DomEvent {
    #[must_use]
    pub fn new(target: Target, kind: EventKind, data: EventData) -> Self {
        Self { target, kind, data }
    }

    #[must_use]
    pub fn resize() -> Self {
        Self::new(Target::Window, EventKind::Resize, EventData::None)
    }

    #[must_use]
    pub fn click(node: NodeId) -> Self {
        Self::new(Target::Node(node), EventKind::Click, EventData::None)
    }

    #[must_use]
    pub fn scroll(node: NodeId) -> Self {
        Self::new(Target::Node(node), EventKind::Scroll, EventData::None)
    }

    #[must_use]
    pub fn wheel(node: NodeId, delta_y: f32) -> Self {
        Self::new(
            Target::Node(node),
            EventKind::Wheel,
            EventData::Wheel { delta_y },
        )
    }

    #[must_use]
    pub fn pointer(kind: EventKind, target: Target, position: Point) -> Self {
        Self::new(target, kind, EventData::Pointer(position))
    }

    #[must_use]
    pub fn touch(kind: EventKind, node: NodeId, touches: Vec<Point>) -> Self {
        Self::new(Target::Node(node), kind, EventData::Touches(touches))
    }

    /// Pointer position, if the event carries one.
    #[must_use]
    pub fn pointer_position(&self) -> Option<Point> {
        match &self.data {
            EventData::Pointer(position) => Some(*position),
            _ => None,
        }
    }

    #[must_use]
    pub fn touches(&self) -> &[Point] {
        match &self.data {
            EventData::Touches(touches) => touches,
            _ => &[],
        }
    }

    #[must_use]
    pub fn wheel_delta(&self) -> Option<f32> {
        match self.data {
            EventData::Wheel { delta_y } => Some(delta_y),
            _ => None,
        }
    }
}
