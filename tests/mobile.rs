// SPDX-License-Identifier: MPL-2.0
//! Mobile mode: swipe carousel, dots, lightbox and pinch zoom.

mod common;

use approx::assert_relative_eq;
use common::{Fixture, MOBILE_WIDTH};
use product_gallery::config::{GalleryConfig, GestureConfig};
use product_gallery::dom::{class, Dom, DomEvent, EventKind, Target};
use product_gallery::domain::LayoutMode;
use iced_core::Point;

#[test]
fn mounts_as_carousel() {
    let fx = Fixture::new(MOBILE_WIDTH, 3);
    let stack = fx.stack();

    assert_eq!(fx.gallery.mode(), LayoutMode::Mobile);
    assert!(fx.dom.has_class(stack, class::CAROUSEL_TRACK));
    for slide in 0..3 {
        assert!(fx.dom.has_class(fx.wrapper(slide), class::CAROUSEL_ITEM));
    }
    assert_eq!(fx.style_of(stack, "transform").as_deref(), Some("translateX(0%)"));
    assert_eq!(fx.active_dots(), vec![0]);
}

#[test]
fn swipe_left_past_threshold_advances() {
    let mut fx = Fixture::new(MOBILE_WIDTH, 3);
    fx.click_dot(1);
    assert_eq!(fx.gallery.current_index(), 1);
    assert_eq!(fx.style_of(fx.stack(), "transform").as_deref(), Some("translateX(-100%)"));

    fx.swipe(300.0, 220.0);

    assert_eq!(fx.gallery.current_index(), 2);
    assert_eq!(fx.style_of(fx.stack(), "transform").as_deref(), Some("translateX(-200%)"));
    assert_eq!(
        fx.style_of(fx.stack(), "transition").as_deref(),
        Some("transform 0.3s ease-out")
    );
    assert_eq!(fx.active_dots(), vec![2]);
}

#[test]
fn carousel_follows_the_finger_without_animation() {
    let mut fx = Fixture::new(MOBILE_WIDTH, 3);
    fx.click_dot(1);
    let wrapper = fx.wrapper(1);

    fx.send(DomEvent::touch(EventKind::TouchStart, wrapper, vec![Point::new(300.0, 0.0)]));
    assert_eq!(fx.style_of(fx.stack(), "transition").as_deref(), Some("none"));
    assert!(fx.gallery.interaction().is_swiping());

    fx.send(DomEvent::touch(EventKind::TouchMove, wrapper, vec![Point::new(220.0, 0.0)]));
    assert_eq!(fx.style_of(fx.stack(), "transform").as_deref(), Some("translateX(-480px)"));
    assert_eq!(fx.gallery.current_index(), 1);
}

#[test]
fn swipe_right_past_threshold_goes_back() {
    let mut fx = Fixture::new(MOBILE_WIDTH, 3);
    fx.click_dot(2);

    fx.swipe(100.0, 260.0);

    assert_eq!(fx.gallery.current_index(), 1);
    assert_eq!(fx.active_dots(), vec![1]);
}

#[test]
fn short_swipes_snap_back() {
    let mut fx = Fixture::new(MOBILE_WIDTH, 3);
    fx.click_dot(1);

    fx.swipe(300.0, 250.0);
    assert_eq!(fx.gallery.current_index(), 1);
    fx.swipe(300.0, 350.0);
    assert_eq!(fx.gallery.current_index(), 1);

    assert_eq!(fx.style_of(fx.stack(), "transform").as_deref(), Some("translateX(-100%)"));
}

#[test]
fn swipes_stop_at_both_ends() {
    let mut fx = Fixture::new(MOBILE_WIDTH, 3);

    fx.swipe(100.0, 300.0);
    assert_eq!(fx.gallery.current_index(), 0);

    fx.click_dot(2);
    fx.swipe(300.0, 0.0);
    assert_eq!(fx.gallery.current_index(), 2);
}

#[test]
fn configured_threshold_is_honored() {
    let config = GalleryConfig {
        gestures: GestureConfig {
            swipe_threshold_px: Some(100.0),
            settle_duration_ms: Some(500),
        },
        ..GalleryConfig::default()
    };
    let mut fx = Fixture::with_config(MOBILE_WIDTH, 3, &config);

    fx.swipe(300.0, 220.0);
    assert_eq!(fx.gallery.current_index(), 0);

    fx.swipe(300.0, 150.0);
    assert_eq!(fx.gallery.current_index(), 1);
    assert_eq!(
        fx.style_of(fx.stack(), "transition").as_deref(),
        Some("transform 0.5s ease-out")
    );
}

#[test]
fn touch_end_without_start_is_ignored() {
    let mut fx = Fixture::new(MOBILE_WIDTH, 3);
    let stack = fx.stack();

    let outcome = fx.send(DomEvent::touch(EventKind::TouchEnd, stack, Vec::new()));

    assert_eq!(outcome.handled, 0);
    assert_eq!(fx.gallery.current_index(), 0);
}

#[test]
fn swipe_listeners_are_passive_except_touch_end() {
    let fx = Fixture::new(MOBILE_WIDTH, 2);
    let stack = Target::Node(fx.stack());

    assert_eq!(fx.dom.listener_is_passive(stack, EventKind::TouchStart), Some(true));
    assert_eq!(fx.dom.listener_is_passive(stack, EventKind::TouchMove), Some(true));
    assert_eq!(fx.dom.listener_is_passive(stack, EventKind::TouchEnd), Some(false));
}

#[test]
fn tapping_an_image_opens_the_lightbox_once() {
    let mut fx = Fixture::new(MOBILE_WIDTH, 3);
    let elements = fx.gallery.elements().clone();
    let lightbox_image = Target::Node(elements.lightbox_image);

    fx.click_image(1);

    assert!(fx.gallery.lightbox_open());
    assert!(fx.dom.has_class(elements.lightbox, class::ACTIVE));
    assert_eq!(
        fx.dom.attribute(elements.lightbox_image, "src").as_deref(),
        Some("https://shop.test/img-1.jpg")
    );
    assert_eq!(fx.dom.listener_count_for(lightbox_image, EventKind::TouchStart), 1);

    fx.click_image(2);
    assert_eq!(fx.gallery.lightbox_slide(), Some(2));
    assert_eq!(fx.dom.listener_count_for(lightbox_image, EventKind::TouchStart), 1);
    assert_eq!(fx.dom.listener_count_for(lightbox_image, EventKind::TouchMove), 1);
    assert_eq!(fx.dom.listener_count_for(lightbox_image, EventKind::TouchEnd), 1);
}

#[test]
fn pinch_scales_relative_to_the_committed_baseline() {
    let mut fx = Fixture::new(MOBILE_WIDTH, 2);
    let image = fx.gallery.elements().lightbox_image;
    fx.click_image(0);

    fx.pinch(100.0, 200.0);
    assert_relative_eq!(fx.gallery.pinch_scale().value(), 2.0);
    assert_eq!(fx.style_of(image, "transform").as_deref(), Some("scale(2)"));

    fx.pinch(100.0, 150.0);
    assert_relative_eq!(fx.gallery.pinch_scale().value(), 3.0);
}

#[test]
fn pinching_in_never_shrinks_below_natural_size() {
    let mut fx = Fixture::new(MOBILE_WIDTH, 2);
    let image = fx.gallery.elements().lightbox_image;
    fx.click_image(0);

    fx.pinch(300.0, 20.0);

    assert_relative_eq!(fx.gallery.pinch_scale().value(), 1.0);
    assert_eq!(fx.style_of(image, "transform").as_deref(), Some("scale(1)"));
}

#[test]
fn closing_the_lightbox_resets_zoom_and_listeners() {
    let mut fx = Fixture::new(MOBILE_WIDTH, 2);
    let elements = fx.gallery.elements().clone();
    fx.click_image(0);
    let with_lightbox = fx.dom.listener_count();
    fx.pinch(100.0, 250.0);

    fx.send(DomEvent::click(elements.lightbox_close));

    assert!(!fx.gallery.lightbox_open());
    assert!(!fx.dom.has_class(elements.lightbox, class::ACTIVE));
    assert_relative_eq!(fx.gallery.pinch_scale().value(), 1.0);
    assert_eq!(
        fx.style_of(elements.lightbox_image, "transform").as_deref(),
        Some("scale(1)")
    );
    assert_eq!(fx.dom.listener_count(), with_lightbox - 3);

    // Next pinch starts from natural size again.
    fx.click_image(0);
    fx.pinch(100.0, 150.0);
    assert_relative_eq!(fx.gallery.pinch_scale().value(), 1.5);
}

#[test]
fn pinch_on_a_closed_lightbox_does_nothing() {
    let mut fx = Fixture::new(MOBILE_WIDTH, 2);
    let image = fx.gallery.elements().lightbox_image;

    fx.pinch(100.0, 300.0);

    assert!(fx.gallery.interaction().is_idle());
    assert_relative_eq!(fx.gallery.pinch_scale().value(), 1.0);
    assert_eq!(fx.style_of(image, "transform"), None);
}

#[test]
fn one_finger_on_the_lightbox_is_not_a_pinch() {
    let mut fx = Fixture::new(MOBILE_WIDTH, 2);
    let image = fx.gallery.elements().lightbox_image;
    fx.click_image(0);

    fx.send(DomEvent::touch(EventKind::TouchStart, image, vec![Point::new(5.0, 5.0)]));
    fx.send(DomEvent::touch(EventKind::TouchMove, image, vec![Point::new(80.0, 5.0)]));

    assert!(fx.gallery.interaction().is_idle());
    assert_relative_eq!(fx.gallery.pinch_scale().value(), 1.0);
}
