// SPDX-License-Identifier: MPL-2.0
//! DOM port.
//!
//! The gallery controller never talks to a browser directly. Everything it
//! reads (structure, geometry, viewport width) and everything it writes
//! (classes, inline styles, scroll offsets, listeners) goes through the [`Dom`]
//! trait. A browser host implements it over its element handles; the crate
//! ships [`MemoryDom`] for tests, benchmarks and scenario replay.
//!
//! Implementations are expected to be cheap handles (clones share the same
//! document), mirroring how element references behave in a browser.

pub mod event;
pub mod memory;

pub use event::{DomEvent, EventData, EventKind};
pub use memory::MemoryDom;

use crate::domain::ImageEntry;
use iced_core::{Color, Rectangle};
use std::fmt;

/// Opaque handle to an element of the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

/// Where a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Window,
    Document,
    Node(NodeId),
}

/// Host-side identity of a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(pub u64);

/// Listener registration options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListenerOptions {
    /// A passive listener promises never to cancel the default action.
    pub passive: bool,
}

impl ListenerOptions {
    pub const ACTIVE: Self = Self { passive: false };
    pub const PASSIVE: Self = Self { passive: true };
}

/// Structural roles of the gallery markup, identified by class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    GalleryWrapper,
    ImageStack,
    ImageWrapper,
    ZoomImage,
    PrevButton,
    NextButton,
    SliderTrack,
    SliderThumb,
    DotContainer,
    Dot,
    Lightbox,
    LightboxImage,
    LightboxClose,
}

impl Role {
    /// Class name carried by elements playing this role.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Role::GalleryWrapper => "pgs-gallery-wrapper",
            Role::ImageStack => "pgs-image-stack",
            Role::ImageWrapper => "pgs-image-container",
            Role::ZoomImage => "pgs-image-to-zoom",
            Role::PrevButton => "pgs-prev-btn",
            Role::NextButton => "pgs-next-btn",
            Role::SliderTrack => "pgs-slider-track",
            Role::SliderThumb => "pgs-slider-thumb",
            Role::DotContainer => "pgs-mobile-nav-dots",
            Role::Dot => "dot",
            Role::Lightbox => "pgs-lightbox",
            Role::LightboxImage => "pgs-lightbox-img",
            Role::LightboxClose => "pgs-lightbox-close",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// State classes toggled by the controller.
pub mod class {
    pub const CAROUSEL_TRACK: &str = "carousel-track";
    pub const CAROUSEL_ITEM: &str = "carousel-item";
    pub const ACTIVE: &str = "active";
    pub const ZOOMED: &str = "zoomed";
}

/// Layout read-back of an element, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Metrics {
    pub client_width: f32,
    pub client_height: f32,
    pub scroll_height: f32,
    pub scroll_top: f32,
    pub offset_top: f32,
    pub offset_width: f32,
}

impl Metrics {
    /// Distance the content can scroll vertically; zero or negative when it fits.
    #[must_use]
    pub fn scrollable_height(&self) -> f32 {
        self.scroll_height - self.client_height
    }
}

/// How a programmatic scroll should be animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Instant,
    Smooth,
}

/// Focal point of a transform, in percent of the element box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Origin {
    pub x_percent: f32,
    pub y_percent: f32,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% {}%", self.x_percent, self.y_percent)
    }
}

/// Value of the `transform-origin` property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformOrigin {
    /// Resting origin, `center center`.
    Center,
    /// Origin following the pointer.
    Focus(Origin),
}

impl fmt::Display for TransformOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformOrigin::Center => f.write_str("center center"),
            TransformOrigin::Focus(origin) => write!(f, "{origin}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    None,
    TranslateXPercent(f32),
    TranslateXPx(f32),
    Scale(f32),
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::None => f.write_str("none"),
            Transform::TranslateXPercent(percent) => write!(f, "translateX({percent}%)"),
            Transform::TranslateXPx(px) => write!(f, "translateX({px}px)"),
            Transform::Scale(scale) => write!(f, "scale({scale})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    None,
    /// `transform <duration> ease-out`
    EaseOut { duration_ms: u32 },
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::None => f.write_str("none"),
            Transition::EaseOut { duration_ms } => {
                write!(f, "transform {}s ease-out", *duration_ms as f32 / 1000.0)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Default,
    Grab,
    Grabbing,
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Cursor::Default => "default",
            Cursor::Grab => "grab",
            Cursor::Grabbing => "grabbing",
        })
    }
}

/// Inline style declarations the controller writes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Style {
    Transform(Transform),
    Transition(Transition),
    TransformOrigin(TransformOrigin),
    Top(f32),
    BackgroundColor(Color),
    Cursor(Cursor),
}

impl Style {
    /// CSS property name of the declaration.
    #[must_use]
    pub fn property(&self) -> &'static str {
        match self {
            Style::Transform(_) => "transform",
            Style::Transition(_) => "transition",
            Style::TransformOrigin(_) => "transform-origin",
            Style::Top(_) => "top",
            Style::BackgroundColor(_) => "background-color",
            Style::Cursor(_) => "cursor",
        }
    }

    /// CSS value text of the declaration.
    #[must_use]
    pub fn css_value(&self) -> String {
        match self {
            Style::Transform(transform) => transform.to_string(),
            Style::Transition(transition) => transition.to_string(),
            Style::TransformOrigin(origin) => origin.to_string(),
            Style::Top(px) => format!("{px}px"),
            Style::BackgroundColor(color) => color_to_hex(*color),
            Style::Cursor(cursor) => cursor.to_string(),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property(), self.css_value())
    }
}

/// Formats a color as `#rrggbb`.
#[must_use]
pub fn color_to_hex(color: Color) -> String {
    let [r, g, b, _] = color.into_rgba8();
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Description of an element to create, with its subtree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewElement {
    pub tag: &'static str,
    pub classes: Vec<&'static str>,
    pub attributes: Vec<(&'static str, String)>,
    pub children: Vec<NewElement>,
}

impl NewElement {
    #[must_use]
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    #[must_use]
    pub fn child(mut self, child: NewElement) -> Self {
        self.children.push(child);
        self
    }
}

/// Markup for one slide: `div.pgs-image-container > img.pgs-image-to-zoom`.
#[must_use]
pub fn image_wrapper(index: usize, image: &ImageEntry) -> NewElement {
    NewElement::new("div")
        .class(Role::ImageWrapper.class_name())
        .child(
            NewElement::new("img")
                .class(Role::ZoomImage.class_name())
                .attr("src", image.url.clone())
                .attr("alt", image.alt.clone())
                .attr("data-index", index.to_string()),
        )
}

/// Access to the host document.
///
/// Queries return elements in document order. Mutating a scroll offset must
/// not invoke listeners synchronously; hosts deliver the resulting `scroll`
/// event later, as browsers do.
pub trait Dom {
    /// Width of the layout viewport in CSS pixels.
    fn viewport_width(&self) -> f32;

    /// Root element of the document.
    fn document_element(&self) -> NodeId;

    /// The `<body>` element.
    fn body(&self) -> NodeId;

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Looks an element up by its `id` attribute.
    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    /// First descendant of `root` carrying `class`.
    fn query(&self, root: NodeId, class: &str) -> Option<NodeId>;

    /// All descendants of `root` carrying `class`.
    fn query_all(&self, root: NodeId, class: &str) -> Vec<NodeId>;

    fn has_class(&self, node: NodeId, class: &str) -> bool;

    fn set_class(&mut self, node: NodeId, class: &str, enabled: bool);

    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    fn set_style(&mut self, node: NodeId, style: Style);

    fn metrics(&self, node: NodeId) -> Metrics;

    /// Border box in viewport coordinates.
    fn bounding_rect(&self, node: NodeId) -> Rectangle;

    /// Sets the vertical scroll offset, clamped to the scrollable range.
    fn set_scroll_top(&mut self, node: NodeId, top: f32);

    fn scroll_to(&mut self, node: NodeId, top: f32, behavior: ScrollBehavior);

    fn clear_children(&mut self, node: NodeId);

    fn append_element(&mut self, parent: NodeId, element: &NewElement) -> NodeId;

    fn add_listener(
        &mut self,
        target: Target,
        kind: EventKind,
        options: ListenerOptions,
    ) -> ListenerId;

    fn remove_listener(&mut self, id: ListenerId);
}
