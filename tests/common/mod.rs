// SPDX-License-Identifier: MPL-2.0
//! Shared fixtures for the gallery integration tests.
#![allow(dead_code)]

use product_gallery::config::GalleryConfig;
use product_gallery::dom::memory::GalleryGeometry;
use product_gallery::dom::{class, Dom, DomEvent, EventKind, MemoryDom, NodeId, Target};
use product_gallery::domain::ImageEntry;
use product_gallery::{DispatchOutcome, Gallery};
use iced_core::Point;

pub const DESKTOP_WIDTH: f32 = 1280.0;
pub const MOBILE_WIDTH: f32 = 375.0;

pub fn images(count: usize) -> Vec<ImageEntry> {
    (0..count)
        .map(|i| ImageEntry::new(format!("https://shop.test/img-{i}.jpg"), format!("Photo {i}")))
        .collect()
}

/// A rendered gallery with its controller.
pub struct Fixture {
    pub dom: MemoryDom,
    pub container: NodeId,
    pub gallery: Gallery<MemoryDom>,
}

impl Fixture {
    pub fn new(viewport_width: f32, count: usize) -> Self {
        Self::with_config(viewport_width, count, &GalleryConfig::default())
    }

    pub fn with_config(viewport_width: f32, count: usize, config: &GalleryConfig) -> Self {
        Self::with_geometry(viewport_width, count, GalleryGeometry::default(), config)
    }

    pub fn with_geometry(
        viewport_width: f32,
        count: usize,
        geometry: GalleryGeometry,
        config: &GalleryConfig,
    ) -> Self {
        let dom = MemoryDom::new(viewport_width);
        let container = dom.render_gallery(dom.body(), "gallery-1", &images(count), &geometry);
        let gallery = Gallery::mount(dom.clone(), Some(container), config)
            .expect("markup is complete")
            .expect("container exists");
        Self {
            dom,
            container,
            gallery,
        }
    }

    /// Dispatches `event`, then delivers whatever the document queued.
    pub fn send(&mut self, event: DomEvent) -> DispatchOutcome {
        let outcome = self.gallery.dispatch(&event);
        self.pump();
        outcome
    }

    pub fn pump(&mut self) {
        loop {
            let pending = self.dom.take_events();
            if pending.is_empty() {
                break;
            }
            for event in pending {
                self.gallery.dispatch(&event);
            }
        }
    }

    pub fn resize(&mut self, width: f32) -> DispatchOutcome {
        self.dom.set_viewport_width(width);
        self.send(DomEvent::resize())
    }

    pub fn stack(&self) -> NodeId {
        self.gallery.elements().stack
    }

    pub fn thumb(&self) -> NodeId {
        self.gallery.elements().thumb
    }

    pub fn wrapper(&self, slide: usize) -> NodeId {
        self.gallery.elements().slides[slide].wrapper
    }

    pub fn image(&self, slide: usize) -> NodeId {
        self.gallery.elements().slides[slide]
            .image
            .expect("slide has an image")
    }

    pub fn click_dot(&mut self, index: usize) -> DispatchOutcome {
        let dot = self.gallery.dots()[index];
        self.send(DomEvent::click(dot))
    }

    pub fn click_image(&mut self, slide: usize) -> DispatchOutcome {
        let image = self.image(slide);
        self.send(DomEvent::click(image))
    }

    pub fn swipe(&mut self, from_x: f32, to_x: f32) {
        let target = self.wrapper(self.gallery.current_index());
        self.send(DomEvent::touch(
            EventKind::TouchStart,
            target,
            vec![Point::new(from_x, 10.0)],
        ));
        self.send(DomEvent::touch(
            EventKind::TouchMove,
            target,
            vec![Point::new(to_x, 10.0)],
        ));
        self.send(DomEvent::touch(EventKind::TouchEnd, target, Vec::new()));
    }

    pub fn pinch(&mut self, from_distance: f32, to_distance: f32) {
        let image = self.gallery.elements().lightbox_image;
        let fingers = |gap: f32| vec![Point::new(50.0, 50.0), Point::new(50.0 + gap, 50.0)];
        self.send(DomEvent::touch(EventKind::TouchStart, image, fingers(from_distance)));
        self.send(DomEvent::touch(EventKind::TouchMove, image, fingers(to_distance)));
        self.send(DomEvent::touch(EventKind::TouchEnd, image, Vec::new()));
    }

    pub fn pointer(&mut self, kind: EventKind, target: Target, x: f32, y: f32) -> DispatchOutcome {
        self.send(DomEvent::pointer(kind, target, Point::new(x, y)))
    }

    /// Indices of the dots carrying the active class.
    pub fn active_dots(&self) -> Vec<usize> {
        self.gallery
            .dots()
            .iter()
            .enumerate()
            .filter(|(_, dot)| self.dom.has_class(**dot, class::ACTIVE))
            .map(|(index, _)| index)
            .collect()
    }

    pub fn thumb_top(&self) -> f32 {
        self.dom.metrics(self.thumb()).offset_top
    }

    pub fn style_of(&self, node: NodeId, property: &str) -> Option<String> {
        self.dom.style(node, property).map(|style| style.css_value())
    }
}
