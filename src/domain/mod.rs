// SPDX-License-Identifier: MPL-2.0
//! Domain layer - gallery value types with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`gallery`]: Gallery data ([`ImageEntry`], [`LayoutMode`])
//! - [`newtypes`]: Clamped value objects ([`Breakpoint`], [`SwipeThreshold`],
//!   [`SettleDuration`], [`PinchScale`], [`BufferCapacity`])

pub mod gallery;
pub mod newtypes;

pub use gallery::{ImageEntry, LayoutMode, NavigationDirection};
pub use newtypes::{
    breakpoint_bounds, buffer_capacity_bounds, settle_bounds, swipe_bounds, Breakpoint,
    BufferCapacity, PinchScale, SettleDuration, SwipeThreshold,
};
