// SPDX-License-Identifier: MPL-2.0
//! In-memory document.
//!
//! A small element tree with classes, attributes, inline styles, scroll
//! offsets and a listener table. Layout is not computed: geometry is assigned
//! explicitly with [`MemoryDom::set_layout`] (or [`MemoryDom::layout_gallery`]
//! for the gallery markup), which is enough to drive the controller
//! deterministically.
//!
//! `MemoryDom` is a handle: clones share the same document.

use super::{
    image_wrapper, Dom, DomEvent, EventKind, ListenerId, ListenerOptions, Metrics, NewElement,
    NodeId, Role, ScrollBehavior, Style, Target,
};
use crate::domain::ImageEntry;
use iced_core::Rectangle;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt;
use std::rc::Rc;

/// Geometry assigned to an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub client_width: f32,
    pub client_height: f32,
    pub scroll_height: f32,
    pub offset_top: f32,
    pub rect: Rectangle,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            client_width: 0.0,
            client_height: 0.0,
            scroll_height: 0.0,
            offset_top: 0.0,
            rect: Rectangle {
                x: 0.0,
                y: 0.0,
                width: 0.0,
                height: 0.0,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ListenerRecord {
    target: Target,
    kind: EventKind,
    options: ListenerOptions,
}

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<&'static str, Style>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    layout: Layout,
    scroll_top: f32,
    last_scroll_behavior: Option<ScrollBehavior>,
}

impl Node {
    fn new(tag: &str, parent: Option<NodeId>) -> Self {
        Self {
            tag: tag.to_string(),
            classes: BTreeSet::new(),
            attributes: BTreeMap::new(),
            styles: BTreeMap::new(),
            parent,
            children: Vec::new(),
            layout: Layout::default(),
            scroll_top: 0.0,
            last_scroll_behavior: None,
        }
    }

    fn max_scroll_top(&self) -> f32 {
        (self.layout.scroll_height - self.layout.client_height).max(0.0)
    }
}

#[derive(Debug)]
struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    body: NodeId,
    viewport_width: f32,
    listeners: BTreeMap<ListenerId, ListenerRecord>,
    next_listener: u64,
    pending: VecDeque<DomEvent>,
}

impl Document {
    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0 as usize]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0 as usize]
    }

    fn push_node(&mut self, tag: &str, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
        self.nodes.push(Node::new(tag, parent));
        if let Some(parent) = parent {
            self.node_mut(parent).children.push(id);
        }
        id
    }

    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.node(root).children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.node(id).children.iter().rev().copied());
        }
        out
    }

    fn build(&mut self, parent: NodeId, element: &NewElement) -> NodeId {
        let id = self.push_node(element.tag, Some(parent));
        {
            let node = self.node_mut(id);
            node.classes
                .extend(element.classes.iter().map(|c| (*c).to_string()));
            for (name, value) in &element.attributes {
                node.attributes.insert((*name).to_string(), value.clone());
            }
        }
        for child in &element.children {
            self.build(id, child);
        }
        id
    }

    fn scroll(&mut self, id: NodeId, top: f32, behavior: ScrollBehavior) {
        let node = self.node_mut(id);
        let clamped = top.min(node.max_scroll_top()).max(0.0);
        let changed = (clamped - node.scroll_top).abs() > f32::EPSILON;
        node.scroll_top = clamped;
        node.last_scroll_behavior = Some(behavior);
        if changed {
            self.pending.push_back(DomEvent::scroll(id));
        }
    }
}

/// Shared handle to an in-memory document.
#[derive(Clone)]
pub struct MemoryDom {
    inner: Rc<RefCell<Document>>,
}

impl fmt::Debug for MemoryDom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let doc = self.inner.borrow();
        f.debug_struct("MemoryDom")
            .field("nodes", &doc.nodes.len())
            .field("listeners", &doc.listeners.len())
            .field("viewport_width", &doc.viewport_width)
            .finish()
    }
}

impl MemoryDom {
    /// Creates a document with `<html>` and `<body>` for the given viewport width.
    #[must_use]
    pub fn new(viewport_width: f32) -> Self {
        let mut doc = Document {
            nodes: Vec::new(),
            root: NodeId(0),
            body: NodeId(0),
            viewport_width,
            listeners: BTreeMap::new(),
            next_listener: 1,
            pending: VecDeque::new(),
        };
        doc.root = doc.push_node("html", None);
        doc.body = doc.push_node("body", Some(doc.root));
        Self {
            inner: Rc::new(RefCell::new(doc)),
        }
    }

    pub fn set_viewport_width(&self, width: f32) {
        self.inner.borrow_mut().viewport_width = width;
    }

    /// Appends an empty element with the given classes.
    pub fn create_element(&self, parent: NodeId, tag: &str, classes: &[&str]) -> NodeId {
        let mut doc = self.inner.borrow_mut();
        let id = doc.push_node(tag, Some(parent));
        doc.node_mut(id)
            .classes
            .extend(classes.iter().map(|c| (*c).to_string()));
        id
    }

    pub fn set_layout(&self, node: NodeId, layout: Layout) {
        let mut doc = self.inner.borrow_mut();
        let target = doc.node_mut(node);
        target.layout = layout;
        target.scroll_top = target.scroll_top.min(target.max_scroll_top()).max(0.0);
    }

    #[must_use]
    pub fn layout(&self, node: NodeId) -> Layout {
        self.inner.borrow().node(node).layout
    }

    #[must_use]
    pub fn tag(&self, node: NodeId) -> String {
        self.inner.borrow().node(node).tag.clone()
    }

    #[must_use]
    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.inner.borrow().node(node).children.clone()
    }

    #[must_use]
    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.inner.borrow().node(node).classes.iter().cloned().collect()
    }

    /// Inline style currently set for a CSS property.
    #[must_use]
    pub fn style(&self, node: NodeId, property: &str) -> Option<Style> {
        self.inner.borrow().node(node).styles.get(property).copied()
    }

    #[must_use]
    pub fn scroll_top(&self, node: NodeId) -> f32 {
        self.inner.borrow().node(node).scroll_top
    }

    #[must_use]
    pub fn last_scroll_behavior(&self, node: NodeId) -> Option<ScrollBehavior> {
        self.inner.borrow().node(node).last_scroll_behavior
    }

    /// Number of listeners currently attached anywhere in the document.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Number of listeners attached to `target` for `kind`.
    #[must_use]
    pub fn listener_count_for(&self, target: Target, kind: EventKind) -> usize {
        self.inner
            .borrow()
            .listeners
            .values()
            .filter(|record| record.target == target && record.kind == kind)
            .count()
    }

    /// Whether the listener registered for `target`/`kind` is passive, if any.
    #[must_use]
    pub fn listener_is_passive(&self, target: Target, kind: EventKind) -> Option<bool> {
        self.inner
            .borrow()
            .listeners
            .values()
            .find(|record| record.target == target && record.kind == kind)
            .map(|record| record.options.passive)
    }

    /// Total number of listeners ever registered, including removed ones.
    #[must_use]
    pub fn listeners_registered_total(&self) -> u64 {
        self.inner.borrow().next_listener - 1
    }

    /// Drains the events the document generated itself (scroll offset changes).
    pub fn take_events(&self) -> Vec<DomEvent> {
        self.inner.borrow_mut().pending.drain(..).collect()
    }

    pub fn set_element_id(&self, node: NodeId, id: &str) {
        self.inner
            .borrow_mut()
            .node_mut(node)
            .attributes
            .insert("id".to_string(), id.to_string());
    }

    /// Renders the gallery markup for `images` under `parent`, the way the
    /// templating collaborator does, and assigns it `geometry`.
    pub fn render_gallery(
        &self,
        parent: NodeId,
        id: &str,
        images: &[ImageEntry],
        geometry: &GalleryGeometry,
    ) -> NodeId {
        let wrapper = self.create_element(parent, "div", &[Role::GalleryWrapper.class_name()]);
        self.set_element_id(wrapper, id);

        let stack = self.create_element(wrapper, "div", &[Role::ImageStack.class_name()]);
        for (index, image) in images.iter().enumerate() {
            self.inner
                .borrow_mut()
                .build(stack, &image_wrapper(index, image));
        }
        self.create_element(wrapper, "button", &[Role::PrevButton.class_name()]);
        self.create_element(wrapper, "button", &[Role::NextButton.class_name()]);
        let track = self.create_element(wrapper, "div", &[Role::SliderTrack.class_name()]);
        self.create_element(track, "div", &[Role::SliderThumb.class_name()]);
        self.create_element(wrapper, "div", &[Role::DotContainer.class_name()]);
        let lightbox = self.create_element(wrapper, "div", &[Role::Lightbox.class_name()]);
        self.create_element(lightbox, "img", &[Role::LightboxImage.class_name()]);
        self.create_element(lightbox, "span", &[Role::LightboxClose.class_name()]);

        self.layout_gallery(wrapper, geometry);
        wrapper
    }

    /// Assigns geometry to the gallery markup under `container`.
    ///
    /// The image panel is one slide wide and one panel high, with every slide
    /// stacked below the previous one. Slide rects are given unscrolled;
    /// [`Dom::bounding_rect`] shifts them by the scroll offsets of their
    /// ancestors.
    pub fn layout_gallery(&self, container: NodeId, geometry: &GalleryGeometry) {
        let Some(stack) = self.query(container, Role::ImageStack.class_name()) else {
            return;
        };
        let wrappers = self.query_all(stack, Role::ImageWrapper.class_name());
        #[allow(clippy::cast_precision_loss)]
        let count = wrappers.len() as f32;

        self.set_layout(
            stack,
            Layout {
                client_width: geometry.slide_width,
                client_height: geometry.panel_height,
                scroll_height: geometry.panel_height * count,
                offset_top: 0.0,
                rect: Rectangle {
                    x: 0.0,
                    y: 0.0,
                    width: geometry.slide_width,
                    height: geometry.panel_height,
                },
            },
        );
        for (index, wrapper) in wrappers.into_iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let top = index as f32 * geometry.panel_height;
            let slide = Layout {
                client_width: geometry.slide_width,
                client_height: geometry.panel_height,
                scroll_height: geometry.panel_height,
                offset_top: top,
                rect: Rectangle {
                    x: 0.0,
                    y: top,
                    width: geometry.slide_width,
                    height: geometry.panel_height,
                },
            };
            self.set_layout(wrapper, slide);
            if let Some(image) = self.query(wrapper, Role::ZoomImage.class_name()) {
                self.set_layout(image, slide);
            }
        }
        if let Some(track) = self.query(container, Role::SliderTrack.class_name()) {
            self.set_layout(
                track,
                Layout {
                    client_height: geometry.track_height,
                    scroll_height: geometry.track_height,
                    ..Layout::default()
                },
            );
        }
        if let Some(thumb) = self.query(container, Role::SliderThumb.class_name()) {
            let offset_top = self.layout(thumb).offset_top;
            self.set_layout(
                thumb,
                Layout {
                    client_height: geometry.thumb_height,
                    scroll_height: geometry.thumb_height,
                    offset_top,
                    ..Layout::default()
                },
            );
        }
    }
}

/// Geometry of a rendered gallery, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GalleryGeometry {
    pub panel_height: f32,
    pub slide_width: f32,
    pub track_height: f32,
    pub thumb_height: f32,
}

impl Default for GalleryGeometry {
    fn default() -> Self {
        Self {
            panel_height: 600.0,
            slide_width: 400.0,
            track_height: 600.0,
            thumb_height: 100.0,
        }
    }
}

impl Dom for MemoryDom {
    fn viewport_width(&self) -> f32 {
        self.inner.borrow().viewport_width
    }

    fn document_element(&self) -> NodeId {
        self.inner.borrow().root
    }

    fn body(&self) -> NodeId {
        self.inner.borrow().body
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.inner.borrow().node(node).parent
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let doc = self.inner.borrow();
        doc.descendants(doc.root)
            .into_iter()
            .find(|node| doc.node(*node).attributes.get("id").map(String::as_str) == Some(id))
    }

    fn query(&self, root: NodeId, class: &str) -> Option<NodeId> {
        let doc = self.inner.borrow();
        doc.descendants(root)
            .into_iter()
            .find(|node| doc.node(*node).classes.contains(class))
    }

    fn query_all(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        let doc = self.inner.borrow();
        doc.descendants(root)
            .into_iter()
            .filter(|node| doc.node(*node).classes.contains(class))
            .collect()
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.inner.borrow().node(node).classes.contains(class)
    }

    fn set_class(&mut self, node: NodeId, class: &str, enabled: bool) {
        let mut doc = self.inner.borrow_mut();
        let classes = &mut doc.node_mut(node).classes;
        if enabled {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.inner.borrow().node(node).attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        self.inner
            .borrow_mut()
            .node_mut(node)
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn set_style(&mut self, node: NodeId, style: Style) {
        let mut doc = self.inner.borrow_mut();
        let target = doc.node_mut(node);
        if let Style::Top(top) = style {
            target.layout.offset_top = top;
        }
        target.styles.insert(style.property(), style);
    }

    fn metrics(&self, node: NodeId) -> Metrics {
        let doc = self.inner.borrow();
        let node = doc.node(node);
        Metrics {
            client_width: node.layout.client_width,
            client_height: node.layout.client_height,
            scroll_height: node.layout.scroll_height,
            scroll_top: node.scroll_top,
            offset_top: node.layout.offset_top,
            offset_width: node.layout.client_width,
        }
    }

    fn bounding_rect(&self, node: NodeId) -> Rectangle {
        let doc = self.inner.borrow();
        let mut rect = doc.node(node).layout.rect;
        let mut ancestor = doc.node(node).parent;
        while let Some(id) = ancestor {
            let parent = doc.node(id);
            rect.y -= parent.scroll_top;
            ancestor = parent.parent;
        }
        rect
    }

    fn set_scroll_top(&mut self, node: NodeId, top: f32) {
        self.inner
            .borrow_mut()
            .scroll(node, top, ScrollBehavior::Instant);
    }

    fn scroll_to(&mut self, node: NodeId, top: f32, behavior: ScrollBehavior) {
        self.inner.borrow_mut().scroll(node, top, behavior);
    }

    fn clear_children(&mut self, node: NodeId) {
        let mut doc = self.inner.borrow_mut();
        let children = std::mem::take(&mut doc.node_mut(node).children);
        for child in children {
            doc.node_mut(child).parent = None;
        }
    }

    fn append_element(&mut self, parent: NodeId, element: &NewElement) -> NodeId {
        self.inner.borrow_mut().build(parent, element)
    }

    fn add_listener(
        &mut self,
        target: Target,
        kind: EventKind,
        options: ListenerOptions,
    ) -> ListenerId {
        let mut doc = self.inner.borrow_mut();
        let id = ListenerId(doc.next_listener);
        doc.next_listener += 1;
        doc.listeners.insert(
            id,
            ListenerRecord {
                target,
                kind,
                options,
            },
        );
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.inner.borrow_mut().listeners.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(count: usize) -> Vec<ImageEntry> {
        (0..count)
            .map(|i| ImageEntry::new(format!("https://shop.test/{i}.jpg"), format!("image {i}")))
            .collect()
    }

    #[test]
    fn query_all_returns_document_order() {
        let dom = MemoryDom::new(1024.0);
        let wrapper = dom.render_gallery(dom.body(), "g", &images(3), &GalleryGeometry::default());

        let found = dom.query_all(wrapper, Role::ZoomImage.class_name());
        let indices: Vec<_> = found
            .iter()
            .filter_map(|node| dom.attribute(*node, "data-index"))
            .collect();
        assert_eq!(indices, vec!["0", "1", "2"]);
    }

    #[test]
    fn element_by_id_finds_rendered_gallery() {
        let dom = MemoryDom::new(1024.0);
        let wrapper = dom.render_gallery(dom.body(), "gallery-7", &images(1), &GalleryGeometry::default());
        assert_eq!(dom.element_by_id("gallery-7"), Some(wrapper));
        assert_eq!(dom.element_by_id("missing"), None);
    }

    #[test]
    fn scroll_top_is_clamped_and_queues_scroll_event() {
        let mut dom = MemoryDom::new(1024.0);
        let wrapper = dom.render_gallery(dom.body(), "g", &images(3), &GalleryGeometry::default());
        let stack = dom.query(wrapper, Role::ImageStack.class_name()).unwrap();

        dom.set_scroll_top(stack, 5000.0);
        assert_eq!(dom.scroll_top(stack), 1200.0);
        assert_eq!(dom.take_events(), vec![DomEvent::scroll(stack)]);

        // No change, no event.
        dom.set_scroll_top(stack, 1200.0);
        assert!(dom.take_events().is_empty());
    }

    #[test]
    fn clear_children_detaches_subtree_from_queries() {
        let mut dom = MemoryDom::new(1024.0);
        let wrapper = dom.render_gallery(dom.body(), "g", &images(2), &GalleryGeometry::default());
        let stack = dom.query(wrapper, Role::ImageStack.class_name()).unwrap();

        dom.clear_children(stack);
        assert!(dom.query_all(wrapper, Role::ImageWrapper.class_name()).is_empty());
    }

    #[test]
    fn listeners_are_tracked_until_removed() {
        let mut dom = MemoryDom::new(1024.0);
        let id = dom.add_listener(Target::Window, EventKind::Resize, ListenerOptions::default());
        assert_eq!(dom.listener_count(), 1);
        assert_eq!(dom.listener_count_for(Target::Window, EventKind::Resize), 1);

        dom.remove_listener(id);
        dom.remove_listener(id);
        assert_eq!(dom.listener_count(), 0);
        assert_eq!(dom.listeners_registered_total(), 1);
    }

    #[test]
    fn slide_rects_stack_and_follow_panel_scroll() {
        let mut dom = MemoryDom::new(1280.0);
        let wrapper = dom.render_gallery(dom.body(), "g", &images(3), &GalleryGeometry::default());
        let stack = dom.query(wrapper, Role::ImageStack.class_name()).unwrap();
        let slides = dom.query_all(stack, Role::ImageWrapper.class_name());

        assert_eq!(dom.bounding_rect(slides[1]).y, 600.0);
        assert_eq!(dom.bounding_rect(slides[2]).y, 1200.0);

        dom.set_scroll_top(stack, 600.0);
        assert_eq!(dom.bounding_rect(slides[0]).y, -600.0);
        assert_eq!(dom.bounding_rect(slides[1]).y, 0.0);
    }

    #[test]
    fn top_style_moves_offset_top() {
        let mut dom = MemoryDom::new(1024.0);
        let node = dom.create_element(dom.body(), "div", &[]);
        dom.set_style(node, Style::Top(42.0));
        assert_eq!(dom.metrics(node).offset_top, 42.0);
    }
}
