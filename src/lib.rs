// SPDX-License-Identifier: MPL-2.0
//! `product_gallery` drives a responsive product image gallery.
//!
//! On wide viewports the gallery is a vertical panel with a draggable slider
//! thumb, wheel scrolling, step buttons and click-to-zoom. On narrow viewports
//! it becomes a swipe carousel with dot indicators and a pinch-zoom lightbox.
//! The controller reaches the page through the [`dom::Dom`] port, so a host
//! binds it to real elements while tests drive it with [`dom::MemoryDom`].

#![doc(html_root_url = "https://docs.rs/product_gallery/0.1.0")]

pub mod config;
pub mod diagnostics;
pub mod dom;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod registry;
pub mod scenario;
pub mod variations;

pub use error::{Error, Result};
pub use gallery::{DispatchOutcome, Gallery};
pub use registry::GalleryRegistry;
