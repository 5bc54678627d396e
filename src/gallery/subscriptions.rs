// SPDX-License-Identifier: MPL-2.0
//! Listener bookkeeping.
//!
//! Every listener a gallery attaches is recorded together with the handler it
//! stands for, so the whole set (or one scope of it) can be detached in one
//! call and events can be routed back to the right handler.

use crate::dom::{Dom, EventKind, ListenerId, ListenerOptions, Target};
use crate::domain::NavigationDirection;

/// Lifetime group of a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Resize, lightbox close and dot clicks; present in both modes.
    Base,
    /// Listeners of the current layout mode.
    Mode,
    /// Pinch listeners, present while the lightbox is open.
    Lightbox,
}

/// What a listener does when its event fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    Resize,
    CloseLightbox,
    DotClick(usize),
    // Mobile
    SwipeStart,
    SwipeMove,
    SwipeEnd,
    ImageClick(usize),
    PinchStart,
    PinchMove,
    PinchEnd,
    // Desktop
    PanelScroll,
    Wheel,
    Step(NavigationDirection),
    ThumbPress,
    ThumbDrag,
    ThumbRelease,
    ZoomTrack(usize),
    ZoomLeave(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Subscription {
    pub id: ListenerId,
    pub target: Target,
    pub kind: EventKind,
    pub options: ListenerOptions,
    pub handler: Handler,
    pub scope: Scope,
}

/// Listeners attached by one gallery, in registration order.
#[derive(Debug, Clone, Default)]
pub struct Subscriptions {
    entries: Vec<Subscription>,
}

impl Subscriptions {
    pub fn add<D: Dom>(
        &mut self,
        dom: &mut D,
        scope: Scope,
        target: Target,
        kind: EventKind,
        options: ListenerOptions,
        handler: Handler,
    ) {
        let id = dom.add_listener(target, kind, options);
        self.entries.push(Subscription {
            id,
            target,
            kind,
            options,
            handler,
            scope,
        });
    }

    /// Detaches the listeners of `scope` and returns how many were removed.
    pub fn release<D: Dom>(&mut self, dom: &mut D, scope: Scope) -> usize {
        let before = self.entries.len();
        self.entries.retain(|subscription| {
            if subscription.scope == scope {
                dom.remove_listener(subscription.id);
                false
            } else {
                true
            }
        });
        before - self.entries.len()
    }

    /// Detaches every listener and returns how many were removed.
    pub fn release_all<D: Dom>(&mut self, dom: &mut D) -> usize {
        for subscription in &self.entries {
            dom.remove_listener(subscription.id);
        }
        let released = self.entries.len();
        self.entries.clear();
        released
    }

    /// Listeners for `kind` on `target`, in registration order.
    #[must_use]
    pub fn matching(&self, target: Target, kind: EventKind) -> Vec<Subscription> {
        self.entries
            .iter()
            .filter(|subscription| subscription.target == target && subscription.kind == kind)
            .copied()
            .collect()
    }

    #[must_use]
    pub fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|subscription| subscription.id == id)
    }

    #[must_use]
    pub fn has_scope(&self, scope: Scope) -> bool {
        self.entries.iter().any(|subscription| subscription.scope == scope)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Subscription> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDom;

    #[test]
    fn release_scope_keeps_other_scopes() {
        let mut dom = MemoryDom::new(1024.0);
        let mut subscriptions = Subscriptions::default();
        subscriptions.add(
            &mut dom,
            Scope::Base,
            Target::Window,
            EventKind::Resize,
            ListenerOptions::ACTIVE,
            Handler::Resize,
        );
        subscriptions.add(
            &mut dom,
            Scope::Lightbox,
            Target::Document,
            EventKind::TouchStart,
            ListenerOptions::ACTIVE,
            Handler::PinchStart,
        );

        assert_eq!(subscriptions.release(&mut dom, Scope::Lightbox), 1);
        assert_eq!(subscriptions.len(), 1);
        assert_eq!(dom.listener_count(), 1);
        assert!(!subscriptions.has_scope(Scope::Lightbox));
    }

    #[test]
    fn release_all_is_idempotent() {
        let mut dom = MemoryDom::new(1024.0);
        let mut subscriptions = Subscriptions::default();
        subscriptions.add(
            &mut dom,
            Scope::Mode,
            Target::Document,
            EventKind::MouseMove,
            ListenerOptions::ACTIVE,
            Handler::ThumbDrag,
        );

        assert_eq!(subscriptions.release_all(&mut dom), 1);
        assert_eq!(subscriptions.release_all(&mut dom), 0);
        assert_eq!(dom.listener_count(), 0);
    }

    #[test]
    fn matching_preserves_registration_order() {
        let mut dom = MemoryDom::new(1024.0);
        let mut subscriptions = Subscriptions::default();
        for handler in [Handler::ThumbDrag, Handler::ThumbRelease, Handler::ThumbDrag] {
            subscriptions.add(
                &mut dom,
                Scope::Mode,
                Target::Document,
                EventKind::MouseMove,
                ListenerOptions::ACTIVE,
                handler,
            );
        }

        let handlers: Vec<_> = subscriptions
            .matching(Target::Document, EventKind::MouseMove)
            .iter()
            .map(|subscription| subscription.handler)
            .collect();
        assert_eq!(
            handlers,
            vec![Handler::ThumbDrag, Handler::ThumbRelease, Handler::ThumbDrag]
        );
    }
}
