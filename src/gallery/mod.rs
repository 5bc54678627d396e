// SPDX-License-Identifier: MPL-2.0
//! Gallery controller.
//!
//! A [`Gallery`] binds to one rendered gallery container, derives its layout
//! mode from the viewport width and attaches the listener set of that mode.
//! The host routes every event it receives to [`Gallery::dispatch`], which
//! walks the propagation path of the event and runs the handlers this gallery
//! registered along it.
//!
//! ## Architecture
//!
//! ```text
//! mod.rs (orchestrator)
//!     ├── elements      - Typed binding of the markup
//!     ├── subscriptions - Listener bookkeeping
//!     ├── interaction   - In-flight gesture
//!     ├── slider        - Thumb position and drag
//!     ├── zoom          - Desktop hover zoom
//!     ├── carousel      - Mobile swipe
//!     ├── lightbox      - Mobile lightbox and pinch
//!     └── dots          - Dot indicators
//! ```
//!
//! Sub-components follow the same shape: a message goes in, an effect comes
//! out, and the orchestrator turns effects into DOM writes.

pub mod carousel;
pub mod dots;
pub mod elements;
pub mod interaction;
pub mod lightbox;
pub mod slider;
pub mod subscriptions;
pub mod zoom;

pub use elements::{GalleryElements, Slide};
pub use interaction::Interaction;
pub use subscriptions::{Handler, Scope, Subscription};

use crate::config::GalleryConfig;
use crate::diagnostics::{ActivityLog, GalleryAction, NavigationSource};
use crate::dom::{
    class, Cursor, Dom, DomEvent, EventKind, ListenerOptions, NodeId, ScrollBehavior, Style,
    Target, Transform, TransformOrigin, Transition,
};
use crate::domain::{
    Breakpoint, ImageEntry, LayoutMode, NavigationDirection, PinchScale, SettleDuration,
    SwipeThreshold,
};
use crate::error::Result;
use iced_core::Color;
use subscriptions::Subscriptions;

/// Tunables resolved from the configuration when a gallery is mounted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub breakpoint: Breakpoint,
    pub swipe_threshold: SwipeThreshold,
    pub settle_duration: SettleDuration,
    pub thumb_color: Color,
    pub thumb_active_color: Color,
}

impl Settings {
    #[must_use]
    pub fn from_config(config: &GalleryConfig) -> Self {
        Self {
            breakpoint: config.breakpoint(),
            swipe_threshold: config.swipe_threshold(),
            settle_duration: config.settle_duration(),
            thumb_color: config.thumb_color(),
            thumb_active_color: config.thumb_active_color(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&GalleryConfig::default())
    }
}

/// Result of routing one event through a gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchOutcome {
    /// An active listener cancelled the browser's default action.
    pub default_prevented: bool,
    /// Number of handlers that acted on the event.
    pub handled: usize,
}

impl DispatchOutcome {
    /// Combines the outcomes of several galleries seeing the same event.
    #[must_use]
    pub fn merge(self, other: DispatchOutcome) -> DispatchOutcome {
        DispatchOutcome {
            default_prevented: self.default_prevented || other.default_prevented,
            handled: self.handled + other.handled,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reaction {
    Ignored,
    Handled,
    PreventDefault,
}

/// Interaction controller of one gallery container.
#[derive(Debug)]
pub struct Gallery<D: Dom> {
    dom: D,
    elements: GalleryElements,
    settings: Settings,
    mode: LayoutMode,
    index: usize,
    dots: Vec<NodeId>,
    interaction: Interaction,
    zoom: zoom::State,
    lightbox: lightbox::State,
    subscriptions: Subscriptions,
    activity: ActivityLog,
    destroyed: bool,
}

impl<D: Dom> Gallery<D> {
    /// Binds a controller to `container`.
    ///
    /// Returns `Ok(None)` when there is no container. A container without
    /// slides is bound but stays inert: no dots, no listeners.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::MissingElement`] when the markup lacks a
    /// required role.
    pub fn mount(mut dom: D, container: Option<NodeId>, config: &GalleryConfig) -> Result<Option<Self>> {
        let Some(container) = container else {
            tracing::debug!("no gallery container, nothing to mount");
            return Ok(None);
        };

        let elements = GalleryElements::bind(&dom, container)
            .inspect_err(|err| tracing::warn!(%err, "gallery markup is incomplete"))?;
        let settings = Settings::from_config(config);
        let mode = LayoutMode::for_viewport(dom.viewport_width(), settings.breakpoint);
        let dots = dots::generate(&mut dom, elements.dot_container, elements.slide_count());

        let mut gallery = Self {
            dom,
            elements,
            settings,
            mode,
            index: 0,
            dots,
            interaction: Interaction::Idle,
            zoom: zoom::State::default(),
            lightbox: lightbox::State::default(),
            subscriptions: Subscriptions::default(),
            activity: ActivityLog::new(config.activity_capacity()),
            destroyed: false,
        };

        if gallery.slide_count() > 0 {
            gallery.register_listeners();
            gallery.apply_layout();
        }

        tracing::debug!(
            slides = gallery.slide_count(),
            mode = mode.as_str(),
            listeners = gallery.subscriptions.len(),
            "gallery mounted"
        );
        gallery.activity.record(GalleryAction::Mounted {
            slides: gallery.slide_count(),
            mode: mode.as_str().to_string(),
        });
        Ok(Some(gallery))
    }

    /// Detaches every listener this gallery registered and drops any gesture
    /// in flight. Calling it again does nothing.
    pub fn destroy(&mut self) {
        let released = self.subscriptions.release_all(&mut self.dom);
        self.cancel_gesture();
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        tracing::debug!(released, "gallery destroyed");
        self.activity.record(GalleryAction::Destroyed {
            listeners_released: released,
        });
    }

    /// Routes an event through the handlers registered along its path.
    pub fn dispatch(&mut self, event: &DomEvent) -> DispatchOutcome {
        let mut outcome = DispatchOutcome::default();
        if self.subscriptions.is_empty() {
            return outcome;
        }

        for target in self.propagation_path(event) {
            for subscription in self.subscriptions.matching(target, event.kind) {
                // A handler earlier in this dispatch may have detached it.
                if !self.subscriptions.contains(subscription.id) {
                    continue;
                }
                match self.run(subscription.handler, event) {
                    Reaction::Ignored => {}
                    Reaction::Handled => outcome.handled += 1,
                    Reaction::PreventDefault => {
                        outcome.handled += 1;
                        if !subscription.options.passive {
                            outcome.default_prevented = true;
                        }
                    }
                }
            }
        }
        outcome
    }

    /// Shows the slide at `index`, clamped to the last slide.
    pub fn select(&mut self, index: usize) {
        if self.destroyed || self.slide_count() == 0 {
            return;
        }
        self.navigate(index, NavigationSource::Programmatic);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.elements.slide_count()
    }

    #[must_use]
    pub fn images(&self) -> Vec<ImageEntry> {
        self.elements.images()
    }

    /// Slide whose image is zoomed in place, if any.
    #[must_use]
    pub fn zoomed_slide(&self) -> Option<usize> {
        self.zoom.zoomed()
    }

    #[must_use]
    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    #[must_use]
    pub fn lightbox_open(&self) -> bool {
        self.lightbox.is_open()
    }

    #[must_use]
    pub fn lightbox_slide(&self) -> Option<usize> {
        self.lightbox.slide()
    }

    /// Scale currently rendered in the lightbox.
    #[must_use]
    pub fn pinch_scale(&self) -> PinchScale {
        self.lightbox.displayed_scale()
    }

    #[must_use]
    pub fn dots(&self) -> &[NodeId] {
        &self.dots
    }

    #[must_use]
    pub fn elements(&self) -> &GalleryElements {
        &self.elements
    }

    #[must_use]
    pub fn container(&self) -> NodeId {
        self.elements.container
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    /// Number of listeners currently attached by this gallery.
    #[must_use]
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn subscriptions(&self) -> impl Iterator<Item = &Subscription> {
        self.subscriptions.iter()
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    // =========================================================================
    // Listener wiring
    // =========================================================================

    fn subscribe(
        &mut self,
        scope: Scope,
        target: NodeId,
        kind: EventKind,
        options: ListenerOptions,
        handler: Handler,
    ) {
        self.subscriptions.add(
            &mut self.dom,
            scope,
            Target::Node(target),
            kind,
            options,
            handler,
        );
    }

    fn register_listeners(&mut self) {
        let elements = self.elements.clone();

        self.subscriptions.add(
            &mut self.dom,
            Scope::Base,
            Target::Window,
            EventKind::Resize,
            ListenerOptions::ACTIVE,
            Handler::Resize,
        );
        self.subscribe(
            Scope::Base,
            elements.lightbox_close,
            EventKind::Click,
            ListenerOptions::ACTIVE,
            Handler::CloseLightbox,
        );
        for (index, dot) in self.dots.clone().into_iter().enumerate() {
            self.subscribe(
                Scope::Base,
                dot,
                EventKind::Click,
                ListenerOptions::ACTIVE,
                Handler::DotClick(index),
            );
        }

        match self.mode {
            LayoutMode::Mobile => {
                self.subscribe(
                    Scope::Mode,
                    elements.stack,
                    EventKind::TouchStart,
                    ListenerOptions::PASSIVE,
                    Handler::SwipeStart,
                );
                self.subscribe(
                    Scope::Mode,
                    elements.stack,
                    EventKind::TouchMove,
                    ListenerOptions::PASSIVE,
                    Handler::SwipeMove,
                );
                self.subscribe(
                    Scope::Mode,
                    elements.stack,
                    EventKind::TouchEnd,
                    ListenerOptions::ACTIVE,
                    Handler::SwipeEnd,
                );
                for (index, slide) in elements.slides.iter().enumerate() {
                    self.subscribe(
                        Scope::Mode,
                        slide.wrapper,
                        EventKind::Click,
                        ListenerOptions::ACTIVE,
                        Handler::ImageClick(index),
                    );
                }
            }
            LayoutMode::Desktop => {
                self.subscribe(
                    Scope::Mode,
                    elements.stack,
                    EventKind::Scroll,
                    ListenerOptions::ACTIVE,
                    Handler::PanelScroll,
                );
                self.subscribe(
                    Scope::Mode,
                    elements.container,
                    EventKind::Wheel,
                    ListenerOptions::ACTIVE,
                    Handler::Wheel,
                );
                self.subscribe(
                    Scope::Mode,
                    elements.prev_button,
                    EventKind::Click,
                    ListenerOptions::ACTIVE,
                    Handler::Step(NavigationDirection::Previous),
                );
                self.subscribe(
                    Scope::Mode,
                    elements.next_button,
                    EventKind::Click,
                    ListenerOptions::ACTIVE,
                    Handler::Step(NavigationDirection::Next),
                );
                self.subscribe(
                    Scope::Mode,
                    elements.thumb,
                    EventKind::MouseDown,
                    ListenerOptions::ACTIVE,
                    Handler::ThumbPress,
                );
                // Document level, so a drag survives the pointer leaving the thumb.
                self.subscriptions.add(
                    &mut self.dom,
                    Scope::Mode,
                    Target::Document,
                    EventKind::MouseMove,
                    ListenerOptions::ACTIVE,
                    Handler::ThumbDrag,
                );
                self.subscriptions.add(
                    &mut self.dom,
                    Scope::Mode,
                    Target::Document,
                    EventKind::MouseUp,
                    ListenerOptions::ACTIVE,
                    Handler::ThumbRelease,
                );
                for (index, slide) in elements.slides.iter().enumerate() {
                    self.subscribe(
                        Scope::Mode,
                        slide.wrapper,
                        EventKind::Click,
                        ListenerOptions::ACTIVE,
                        Handler::ImageClick(index),
                    );
                    self.subscribe(
                        Scope::Mode,
                        slide.wrapper,
                        EventKind::MouseMove,
                        ListenerOptions::ACTIVE,
                        Handler::ZoomTrack(index),
                    );
                    self.subscribe(
                        Scope::Mode,
                        slide.wrapper,
                        EventKind::MouseLeave,
                        ListenerOptions::ACTIVE,
                        Handler::ZoomLeave(index),
                    );
                }
            }
        }
    }

    /// Targets an event visits: the target itself, then (for bubbling
    /// events) its ancestors, the document and the window.
    fn propagation_path(&self, event: &DomEvent) -> Vec<Target> {
        let bubbles = event.kind.bubbles();
        match event.target {
            Target::Window => vec![Target::Window],
            Target::Document if bubbles => vec![Target::Document, Target::Window],
            Target::Document => vec![Target::Document],
            Target::Node(node) => {
                let mut path = vec![Target::Node(node)];
                if bubbles {
                    let mut current = node;
                    while let Some(parent) = self.dom.parent(current) {
                        path.push(Target::Node(parent));
                        current = parent;
                    }
                    path.push(Target::Document);
                    path.push(Target::Window);
                }
                path
            }
        }
    }

    fn run(&mut self, handler: Handler, event: &DomEvent) -> Reaction {
        match handler {
            Handler::Resize => self.on_resize(),
            Handler::CloseLightbox => self.close_lightbox(),
            Handler::DotClick(index) => {
                self.navigate(index, NavigationSource::Dot);
                Reaction::Handled
            }
            Handler::SwipeStart => self.on_swipe_start(event),
            Handler::SwipeMove => self.on_swipe_move(event),
            Handler::SwipeEnd => self.on_swipe_end(),
            Handler::ImageClick(slide) => self.on_image_click(slide),
            Handler::PinchStart => {
                let msg = lightbox::Message::PinchStart(event.touches().to_vec());
                self.update_lightbox(msg)
            }
            Handler::PinchMove => {
                let msg = lightbox::Message::PinchMove(event.touches().to_vec());
                self.update_lightbox(msg)
            }
            Handler::PinchEnd => self.update_lightbox(lightbox::Message::PinchEnd),
            Handler::PanelScroll => self.on_panel_scroll(),
            Handler::Wheel => self.on_wheel(event),
            Handler::Step(direction) => self.on_step(direction),
            Handler::ThumbPress => self.on_thumb_press(event),
            Handler::ThumbDrag => self.on_thumb_drag(event),
            Handler::ThumbRelease => self.on_thumb_release(),
            Handler::ZoomTrack(slide) => self.on_zoom_track(slide, event),
            Handler::ZoomLeave(slide) => {
                let effect = self.zoom.handle(zoom::Message::Leave(slide));
                self.apply_zoom(effect)
            }
        }
    }

    // =========================================================================
    // Lifecycle & mode management
    // =========================================================================

    fn on_resize(&mut self) -> Reaction {
        let mode = LayoutMode::for_viewport(self.dom.viewport_width(), self.settings.breakpoint);
        if mode == self.mode {
            return Reaction::Ignored;
        }
        self.switch_mode(mode);
        Reaction::Handled
    }

    fn switch_mode(&mut self, mode: LayoutMode) {
        let from = self.mode;

        let effect = self.zoom.handle(zoom::Message::Clear);
        self.apply_zoom(effect);
        self.cancel_gesture();
        if self.lightbox.is_open() {
            self.close_lightbox();
        }

        let released = self.subscriptions.release_all(&mut self.dom);
        self.mode = mode;
        self.register_listeners();
        self.apply_layout();

        tracing::debug!(
            from = from.as_str(),
            to = mode.as_str(),
            released,
            registered = self.subscriptions.len(),
            "gallery mode switched"
        );
        self.activity.record(GalleryAction::ModeSwitched {
            from: from.as_str().to_string(),
            to: mode.as_str().to_string(),
        });
    }

    fn cancel_gesture(&mut self) {
        if self.interaction.cancel().is_dragging() {
            self.show_thumb_idle();
        }
    }

    fn apply_layout(&mut self) {
        let stack = self.elements.stack;
        let mobile = self.mode.is_mobile();

        self.dom.set_class(stack, class::CAROUSEL_TRACK, mobile);
        for slide in &self.elements.slides {
            self.dom.set_class(slide.wrapper, class::CAROUSEL_ITEM, mobile);
        }

        #[allow(clippy::cast_precision_loss)]
        let index = self.index as f32;
        if mobile {
            self.dom.set_style(
                stack,
                Style::Transform(Transform::TranslateXPercent(0.0 - index * 100.0)),
            );
        } else {
            self.dom.set_style(stack, Style::Transform(Transform::None));
            let panel_height = self.dom.metrics(stack).client_height;
            self.dom.set_scroll_top(stack, index * panel_height);
            self.update_thumb();
        }
        dots::sync(&mut self.dom, &self.dots, self.index);
    }

    fn navigate(&mut self, index: usize, source: NavigationSource) {
        let target = index.min(self.slide_count().saturating_sub(1));
        let from = self.index;
        self.index = target;
        self.apply_layout();
        self.record_navigation(from, source);
    }

    fn record_navigation(&mut self, from: usize, source: NavigationSource) {
        if from == self.index {
            return;
        }
        tracing::trace!(from, to = self.index, ?source, "gallery navigated");
        self.activity.record(GalleryAction::Navigated {
            from,
            to: self.index,
            source,
        });
    }

    fn slide_image(&self, slide: usize) -> Option<NodeId> {
        self.elements.slides.get(slide).and_then(|slide| slide.image)
    }

    fn on_image_click(&mut self, slide: usize) -> Reaction {
        if self.slide_image(slide).is_none() {
            return Reaction::Ignored;
        }
        if self.mode.is_mobile() {
            self.update_lightbox(lightbox::Message::Open(slide))
        } else {
            let effect = self.zoom.handle(zoom::Message::Toggle(slide));
            self.apply_zoom(effect)
        }
    }

    // =========================================================================
    // Desktop: slider, wheel, buttons, zoom
    // =========================================================================

    fn track(&self) -> slider::Track {
        slider::Track {
            track_height: self.dom.metrics(self.elements.track).client_height,
            thumb_height: self.dom.metrics(self.elements.thumb).client_height,
        }
    }

    fn update_thumb(&mut self) {
        let panel = self.dom.metrics(self.elements.stack);
        let top = slider::thumb_top(&panel, self.track());
        self.dom.set_style(self.elements.thumb, Style::Top(top));
    }

    fn on_panel_scroll(&mut self) -> Reaction {
        self.update_thumb();

        let panel = self.dom.metrics(self.elements.stack);
        let count = self.slide_count();
        if panel.client_height > 0.0 && count > 0 {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let nearest = (panel.scroll_top / panel.client_height).round().max(0.0) as usize;
            let nearest = nearest.min(count - 1);
            if nearest != self.index {
                let from = self.index;
                self.index = nearest;
                dots::sync(&mut self.dom, &self.dots, self.index);
                self.record_navigation(from, NavigationSource::Scroll);
            }
        }
        Reaction::Handled
    }

    fn on_wheel(&mut self, event: &DomEvent) -> Reaction {
        // A zoomed image lets the page scroll normally.
        if self.zoom.is_zoomed() {
            return Reaction::Ignored;
        }
        let Some(delta_y) = event.wheel_delta() else {
            return Reaction::Ignored;
        };
        let stack = self.elements.stack;
        let scroll_top = self.dom.metrics(stack).scroll_top;
        self.dom.set_scroll_top(stack, scroll_top + delta_y);
        Reaction::PreventDefault
    }

    fn on_step(&mut self, direction: NavigationDirection) -> Reaction {
        let stack = self.elements.stack;
        let panel = self.dom.metrics(stack);
        let top = panel.scroll_top + direction.sign() * panel.client_height;
        tracing::trace!(?direction, top, "slider step");
        self.dom.scroll_to(stack, top, ScrollBehavior::Smooth);
        Reaction::Handled
    }

    fn on_thumb_press(&mut self, event: &DomEvent) -> Reaction {
        let Some(position) = event.pointer_position() else {
            return Reaction::Ignored;
        };
        let thumb_top = self.dom.metrics(self.elements.thumb).offset_top;
        self.update_slider(slider::Message::Press {
            pointer_y: position.y,
            thumb_top,
        })
    }

    fn on_thumb_drag(&mut self, event: &DomEvent) -> Reaction {
        if !self.interaction.is_dragging() {
            return Reaction::Ignored;
        }
        let Some(position) = event.pointer_position() else {
            return Reaction::Ignored;
        };
        self.update_slider(slider::Message::Drag {
            pointer_y: position.y,
        })
    }

    fn on_thumb_release(&mut self) -> Reaction {
        self.update_slider(slider::Message::Release)
    }

    fn update_slider(&mut self, msg: slider::Message) -> Reaction {
        let panel = self.dom.metrics(self.elements.stack);
        let track = self.track();
        match slider::handle(&mut self.interaction, msg, &panel, track) {
            slider::Effect::None => Reaction::Ignored,
            slider::Effect::Grab => {
                let thumb = self.elements.thumb;
                let body = self.dom.body();
                self.dom.set_style(
                    thumb,
                    Style::BackgroundColor(self.settings.thumb_active_color),
                );
                self.dom.set_style(body, Style::Cursor(Cursor::Grabbing));
                self.dom.set_style(thumb, Style::Cursor(Cursor::Grabbing));
                tracing::trace!("slider drag started");
                Reaction::PreventDefault
            }
            slider::Effect::ScrollPanel(top) => {
                self.dom.set_scroll_top(self.elements.stack, top);
                Reaction::PreventDefault
            }
            slider::Effect::Hold => Reaction::PreventDefault,
            slider::Effect::Release => {
                self.show_thumb_idle();
                tracing::trace!("slider drag ended");
                Reaction::Handled
            }
        }
    }

    fn show_thumb_idle(&mut self) {
        let thumb = self.elements.thumb;
        let body = self.dom.body();
        self.dom
            .set_style(thumb, Style::BackgroundColor(self.settings.thumb_color));
        self.dom.set_style(body, Style::Cursor(Cursor::Default));
        self.dom.set_style(thumb, Style::Cursor(Cursor::Grab));
    }

    fn on_zoom_track(&mut self, slide: usize, event: &DomEvent) -> Reaction {
        if self.zoom.zoomed() != Some(slide) {
            return Reaction::Ignored;
        }
        let (Some(image), Some(position)) = (self.slide_image(slide), event.pointer_position())
        else {
            return Reaction::Ignored;
        };
        let effect = self.zoom.handle(zoom::Message::Track {
            slide,
            position,
            image_bounds: self.dom.bounding_rect(image),
        });
        self.apply_zoom(effect)
    }

    fn apply_zoom(&mut self, effect: zoom::Effect) -> Reaction {
        match effect {
            zoom::Effect::None => Reaction::Ignored,
            zoom::Effect::ZoomIn { slide, previous } => {
                if let Some(previous) = previous {
                    self.show_unzoomed(previous);
                }
                if let Some(image) = self.slide_image(slide) {
                    self.dom.set_class(image, class::ZOOMED, true);
                }
                self.activity.record(GalleryAction::ZoomToggled {
                    slide,
                    zoomed: true,
                });
                Reaction::Handled
            }
            zoom::Effect::ZoomOut(slide) => {
                self.show_unzoomed(slide);
                self.activity.record(GalleryAction::ZoomToggled {
                    slide,
                    zoomed: false,
                });
                Reaction::Handled
            }
            zoom::Effect::Focus { slide, origin } => {
                if let Some(image) = self.slide_image(slide) {
                    self.dom
                        .set_style(image, Style::TransformOrigin(TransformOrigin::Focus(origin)));
                }
                Reaction::Handled
            }
        }
    }

    fn show_unzoomed(&mut self, slide: usize) {
        if let Some(image) = self.slide_image(slide) {
            self.dom.set_class(image, class::ZOOMED, false);
            self.dom
                .set_style(image, Style::TransformOrigin(TransformOrigin::Center));
        }
    }

    // =========================================================================
    // Mobile: carousel and lightbox
    // =========================================================================

    fn update_carousel(&mut self, msg: carousel::Message) -> Reaction {
        let count = self.slide_count();
        let effect = carousel::handle(
            &mut self.interaction,
            msg,
            self.index,
            count,
            self.settings.swipe_threshold,
        );
        let stack = self.elements.stack;
        match effect {
            carousel::Effect::None => Reaction::Ignored,
            carousel::Effect::Follow => {
                self.dom.set_style(stack, Style::Transition(Transition::None));
                Reaction::Handled
            }
            carousel::Effect::Translate(px) => {
                self.dom
                    .set_style(stack, Style::Transform(Transform::TranslateXPx(px)));
                Reaction::Handled
            }
            carousel::Effect::Settle { index } => {
                self.dom.set_style(
                    stack,
                    Style::Transition(Transition::EaseOut {
                        duration_ms: self.settings.settle_duration.millis(),
                    }),
                );
                tracing::trace!(from = self.index, to = index, "swipe settled");
                self.navigate(index, NavigationSource::Swipe);
                Reaction::Handled
            }
        }
    }

    fn on_swipe_start(&mut self, event: &DomEvent) -> Reaction {
        let Some(first) = event.touches().first() else {
            return Reaction::Ignored;
        };
        let slide_width = self.dom.metrics(self.elements.stack).offset_width;
        self.update_carousel(carousel::Message::Start {
            x: first.x,
            slide_width,
        })
    }

    fn on_swipe_move(&mut self, event: &DomEvent) -> Reaction {
        let Some(first) = event.touches().first() else {
            return Reaction::Ignored;
        };
        self.update_carousel(carousel::Message::Move { x: first.x })
    }

    fn on_swipe_end(&mut self) -> Reaction {
        self.update_carousel(carousel::Message::End)
    }

    fn close_lightbox(&mut self) -> Reaction {
        self.update_lightbox(lightbox::Message::Close)
    }

    fn update_lightbox(&mut self, msg: lightbox::Message) -> Reaction {
        let was_open = self.lightbox.is_open();
        let effect = self.lightbox.handle(&mut self.interaction, msg);
        let image = self.elements.lightbox_image;
        match effect {
            lightbox::Effect::None => Reaction::Ignored,
            lightbox::Effect::Show { slide, fresh } => {
                let entry = self
                    .elements
                    .slides
                    .get(slide)
                    .and_then(|slide| slide.entry.clone());
                if let Some(entry) = entry {
                    self.dom.set_attribute(image, "src", &entry.url);
                    self.dom.set_attribute(image, "alt", &entry.alt);
                }
                self.dom.set_class(self.elements.lightbox, class::ACTIVE, true);
                if fresh && !self.subscriptions.has_scope(Scope::Lightbox) {
                    for (kind, handler) in [
                        (EventKind::TouchStart, Handler::PinchStart),
                        (EventKind::TouchMove, Handler::PinchMove),
                        (EventKind::TouchEnd, Handler::PinchEnd),
                    ] {
                        self.subscribe(Scope::Lightbox, image, kind, ListenerOptions::ACTIVE, handler);
                    }
                }
                tracing::trace!(slide, "lightbox opened");
                self.activity.record(GalleryAction::LightboxOpened { slide });
                Reaction::Handled
            }
            lightbox::Effect::Hide => {
                self.dom.set_class(self.elements.lightbox, class::ACTIVE, false);
                self.dom.set_style(
                    image,
                    Style::Transform(Transform::Scale(PinchScale::NATURAL.value())),
                );
                self.subscriptions.release(&mut self.dom, Scope::Lightbox);
                if was_open {
                    tracing::trace!("lightbox closed");
                    self.activity.record(GalleryAction::LightboxClosed);
                }
                Reaction::Handled
            }
            lightbox::Effect::Scale(scale) => {
                self.dom
                    .set_style(image, Style::Transform(Transform::Scale(scale.value())));
                Reaction::Handled
            }
            lightbox::Effect::Commit(scale) => {
                self.activity.record(GalleryAction::PinchCommitted {
                    scale: scale.value(),
                });
                Reaction::Handled
            }
        }
    }
}

impl<D: Dom> Drop for Gallery<D> {
    fn drop(&mut self) {
        self.destroy();
    }
}
