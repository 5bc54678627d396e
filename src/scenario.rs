// SPDX-License-Identifier: MPL-2.0
//! Scripted replay of gallery interactions.
//!
//! A scenario renders one gallery into a [`MemoryDom`], mounts a controller on
//! it and plays a list of user steps against it. The resulting [`Report`]
//! captures the final state, which makes scenarios handy both for reproducing
//! bug reports and for checking configuration changes.
//!
//! ```json
//! {
//!   "viewport_width": 375,
//!   "images": [{ "url": "a.jpg", "alt": "A" }, { "url": "b.jpg", "alt": "B" }],
//!   "steps": [
//!     { "step": "swipe", "from_x": 300, "to_x": 200 },
//!     { "step": "click_image", "slide": 1 },
//!     { "step": "pinch", "from_distance": 100, "to_distance": 180 }
//!   ]
//! }
//! ```

use crate::config::GalleryConfig;
use crate::diagnostics::ActivityEntry;
use crate::dom::memory::GalleryGeometry;
use crate::dom::{class, Dom, DomEvent, EventKind, MemoryDom, NodeId, Target};
use crate::domain::ImageEntry;
use crate::error::{Error, Result};
use crate::gallery::Gallery;
use iced_core::Point;
use serde::{Deserialize, Serialize};

/// Container id given to the replayed gallery.
const GALLERY_ID: &str = "scenario-gallery";

/// Upper bound on rounds of document-generated events delivered after a step.
const MAX_PUMP_ROUNDS: usize = 16;

#[derive(Debug, Clone, Deserialize, PartialEq)]
struct ImageDto {
    url: String,
    #[serde(default)]
    alt: String,
}

/// Which step button to press.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Button {
    Previous,
    Next,
}

/// One user action.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    Resize { width: f32 },
    ClickDot { index: usize },
    ClickImage { slide: usize },
    Button { direction: Button },
    Wheel { delta_y: f32 },
    Scroll { top: f32 },
    DragThumb { from_y: f32, to_y: f32 },
    Swipe { from_x: f32, to_x: f32 },
    PointerMove { slide: usize, x: f32, y: f32 },
    PointerLeave { slide: usize },
    Pinch { from_distance: f32, to_distance: f32 },
    CloseLightbox,
}

#[derive(Debug, Deserialize)]
struct ScenarioDto {
    viewport_width: f32,
    images: Vec<ImageDto>,
    #[serde(default)]
    geometry: GalleryGeometry,
    #[serde(default)]
    steps: Vec<Step>,
}

/// A gallery setup and the steps to play against it.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub viewport_width: f32,
    pub images: Vec<ImageEntry>,
    pub geometry: GalleryGeometry,
    pub steps: Vec<Step>,
}

/// Final state of a replayed gallery.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Report {
    pub mode: String,
    pub current_index: usize,
    pub active_dot: Option<usize>,
    pub zoomed_slide: Option<usize>,
    pub lightbox_open: bool,
    pub pinch_scale: f32,
    pub thumb_top: f32,
    pub track_transform: Option<String>,
    pub listeners: usize,
    pub default_prevented: usize,
    pub activity: Vec<ActivityEntry>,
}

impl Scenario {
    /// Parses a scenario document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Scenario`] if the document is not a valid scenario.
    pub fn from_json(json: &str) -> Result<Self> {
        let dto: ScenarioDto =
            serde_json::from_str(json).map_err(|err| Error::Scenario(err.to_string()))?;
        Ok(Self {
            viewport_width: dto.viewport_width,
            images: dto
                .images
                .into_iter()
                .map(|image| ImageEntry::new(image.url, image.alt))
                .collect(),
            geometry: dto.geometry,
            steps: dto.steps,
        })
    }

    /// Renders the gallery, plays every step and reports the final state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Scenario`] when a step refers to a dot or slide that
    /// does not exist.
    pub fn run(&self, config: &GalleryConfig) -> Result<Report> {
        let dom = MemoryDom::new(self.viewport_width);
        let container = dom.render_gallery(dom.body(), GALLERY_ID, &self.images, &self.geometry);
        let mut gallery = Gallery::mount(dom.clone(), Some(container), config)?
            .ok_or_else(|| Error::Scenario("gallery container vanished".to_string()))?;

        let mut player = Player {
            dom,
            gallery: &mut gallery,
            default_prevented: 0,
        };
        for (position, step) in self.steps.iter().enumerate() {
            tracing::trace!(position, ?step, "replaying step");
            player.play(step)?;
        }
        Ok(player.report())
    }
}

struct Player<'a> {
    dom: MemoryDom,
    gallery: &'a mut Gallery<MemoryDom>,
    default_prevented: usize,
}

impl Player<'_> {
    fn play(&mut self, step: &Step) -> Result<()> {
        let elements = self.gallery.elements().clone();
        match *step {
            Step::Resize { width } => {
                self.dom.set_viewport_width(width);
                self.send(DomEvent::resize());
            }
            Step::ClickDot { index } => {
                let dot = *self
                    .gallery
                    .dots()
                    .get(index)
                    .ok_or_else(|| Error::Scenario(format!("no dot at index {index}")))?;
                self.send(DomEvent::click(dot));
            }
            Step::ClickImage { slide } => {
                let target = self.slide_target(slide)?;
                self.send(DomEvent::click(target));
            }
            Step::Button { direction } => {
                let button = match direction {
                    Button::Previous => elements.prev_button,
                    Button::Next => elements.next_button,
                };
                self.send(DomEvent::click(button));
            }
            Step::Wheel { delta_y } => {
                self.send(DomEvent::wheel(elements.stack, delta_y));
            }
            Step::Scroll { top } => {
                self.dom.set_scroll_top(elements.stack, top);
                self.pump();
            }
            Step::DragThumb { from_y, to_y } => {
                self.send(DomEvent::pointer(
                    EventKind::MouseDown,
                    Target::Node(elements.thumb),
                    Point::new(0.0, from_y),
                ));
                self.send(DomEvent::pointer(
                    EventKind::MouseMove,
                    Target::Document,
                    Point::new(0.0, to_y),
                ));
                self.send(DomEvent::pointer(
                    EventKind::MouseUp,
                    Target::Document,
                    Point::new(0.0, to_y),
                ));
            }
            Step::Swipe { from_x, to_x } => {
                let stack = elements.stack;
                self.send(DomEvent::touch(
                    EventKind::TouchStart,
                    stack,
                    vec![Point::new(from_x, 0.0)],
                ));
                self.send(DomEvent::touch(
                    EventKind::TouchMove,
                    stack,
                    vec![Point::new(to_x, 0.0)],
                ));
                self.send(DomEvent::touch(EventKind::TouchEnd, stack, Vec::new()));
            }
            Step::PointerMove { slide, x, y } => {
                let target = self.slide_target(slide)?;
                self.send(DomEvent::pointer(
                    EventKind::MouseMove,
                    Target::Node(target),
                    Point::new(x, y),
                ));
            }
            Step::PointerLeave { slide } => {
                let wrapper = self.slide(slide)?.wrapper;
                self.send(DomEvent::pointer(
                    EventKind::MouseLeave,
                    Target::Node(wrapper),
                    Point::ORIGIN,
                ));
            }
            Step::Pinch {
                from_distance,
                to_distance,
            } => {
                let image = elements.lightbox_image;
                let fingers = |gap: f32| vec![Point::new(0.0, 0.0), Point::new(gap, 0.0)];
                self.send(DomEvent::touch(
                    EventKind::TouchStart,
                    image,
                    fingers(from_distance),
                ));
                self.send(DomEvent::touch(
                    EventKind::TouchMove,
                    image,
                    fingers(to_distance),
                ));
                self.send(DomEvent::touch(EventKind::TouchEnd, image, Vec::new()));
            }
            Step::CloseLightbox => {
                self.send(DomEvent::click(elements.lightbox_close));
            }
        }
        Ok(())
    }

    fn slide(&self, slide: usize) -> Result<&crate::gallery::Slide> {
        self.gallery
            .elements()
            .slides
            .get(slide)
            .ok_or_else(|| Error::Scenario(format!("no slide at index {slide}")))
    }

    /// The slide's image, or its wrapper when it has none.
    fn slide_target(&self, slide: usize) -> Result<NodeId> {
        let slide = self.slide(slide)?;
        Ok(slide.image.unwrap_or(slide.wrapper))
    }

    fn send(&mut self, event: DomEvent) {
        if self.gallery.dispatch(&event).default_prevented {
            self.default_prevented += 1;
        }
        self.pump();
    }

    /// Delivers the events the document queued itself, such as `scroll`.
    fn pump(&mut self) {
        for _ in 0..MAX_PUMP_ROUNDS {
            let pending = self.dom.take_events();
            if pending.is_empty() {
                return;
            }
            for event in pending {
                self.gallery.dispatch(&event);
            }
        }
    }

    fn report(&self) -> Report {
        let elements = self.gallery.elements();
        Report {
            mode: self.gallery.mode().as_str().to_string(),
            current_index: self.gallery.current_index(),
            active_dot: self
                .gallery
                .dots()
                .iter()
                .position(|dot| self.dom.has_class(*dot, class::ACTIVE)),
            zoomed_slide: self.gallery.zoomed_slide(),
            lightbox_open: self.gallery.lightbox_open(),
            pinch_scale: self.gallery.pinch_scale().value(),
            thumb_top: self.dom.metrics(elements.thumb).offset_top,
            track_transform: self
                .dom
                .style(elements.stack, "transform")
                .map(|style| style.css_value()),
            listeners: self.gallery.subscription_count(),
            default_prevented: self.default_prevented,
            activity: self.gallery.activity().entries().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_swipe_scenario_advances() {
        let scenario = Scenario::from_json(
            r#"{
                "viewport_width": 375,
                "images": [{"url": "a.jpg"}, {"url": "b.jpg"}, {"url": "c.jpg"}],
                "steps": [
                    {"step": "click_dot", "index": 1},
                    {"step": "swipe", "from_x": 300, "to_x": 220}
                ]
            }"#,
        )
        .unwrap();

        let report = scenario.run(&GalleryConfig::default()).unwrap();
        assert_eq!(report.mode, "mobile");
        assert_eq!(report.current_index, 2);
        assert_eq!(report.active_dot, Some(2));
        assert_eq!(report.track_transform.as_deref(), Some("translateX(-200%)"));
    }

    #[test]
    fn desktop_scroll_moves_thumb() {
        let scenario = Scenario::from_json(
            r#"{
                "viewport_width": 1280,
                "images": [{"url": "a.jpg"}, {"url": "b.jpg"}, {"url": "c.jpg"}],
                "geometry": {"panel_height": 600, "slide_width": 400, "track_height": 500, "thumb_height": 100},
                "steps": [{"step": "scroll", "top": 900}]
            }"#,
        )
        .unwrap();

        let report = scenario.run(&GalleryConfig::default()).unwrap();
        assert_eq!(report.mode, "desktop");
        assert!((report.thumb_top - 300.0).abs() < 1e-3);
        assert_eq!(report.current_index, 2);
    }

    #[test]
    fn unknown_dot_is_reported() {
        let scenario = Scenario::from_json(
            r#"{"viewport_width": 375, "images": [{"url": "a.jpg"}],
                "steps": [{"step": "click_dot", "index": 4}]}"#,
        )
        .unwrap();
        let err = scenario.run(&GalleryConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Scenario(_)));
    }

    #[test]
    fn unknown_step_is_a_scenario_error() {
        let err = Scenario::from_json(
            r#"{"viewport_width": 375, "images": [], "steps": [{"step": "teleport"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Scenario(_)));
    }
}
