// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the gallery. Constants are organized by category.
//!
//! # Categories
//!
//! - **Layout**: Mobile/desktop breakpoint
//! - **Gestures**: Swipe threshold and settle animation
//! - **Slider**: Thumb colors
//! - **Diagnostics**: Activity log capacity

use crate::domain::{breakpoint_bounds, buffer_capacity_bounds, settle_bounds, swipe_bounds};

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Widest viewport (CSS px) rendered with the mobile carousel.
pub const DEFAULT_MOBILE_MAX_WIDTH: u32 = breakpoint_bounds::DEFAULT;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Horizontal distance (CSS px) a swipe must exceed to change slide.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = swipe_bounds::DEFAULT;

/// Duration of the eased settle transition after a swipe.
pub const DEFAULT_SETTLE_DURATION_MS: u32 = settle_bounds::DEFAULT;

// ==========================================================================
// Slider Defaults
// ==========================================================================

/// Thumb color at rest.
pub const DEFAULT_THUMB_COLOR: &str = "#6b7280";

/// Thumb color while being dragged.
pub const DEFAULT_THUMB_ACTIVE_COLOR: &str = "#4b5563";

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of activity entries kept per gallery.
pub const DEFAULT_ACTIVITY_CAPACITY: usize = buffer_capacity_bounds::DEFAULT;
