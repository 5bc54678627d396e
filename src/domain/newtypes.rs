// SPDX-License-Identifier: MPL-2.0
//! Gallery newtypes.
//!
//! This module provides type-safe wrappers for tunable gallery values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Breakpoint
// =============================================================================

/// Mobile breakpoint bounds (CSS pixels).
pub mod breakpoint_bounds {
    /// Minimum breakpoint.
    pub const MIN: u32 = 240;
    /// Maximum breakpoint.
    pub const MAX: u32 = 4096;
    /// Default breakpoint, matching `(max-width: 767px)`.
    pub const DEFAULT: u32 = 767;
}

/// Widest viewport, in CSS pixels, that still uses the mobile layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint(u32);

impl Breakpoint {
    /// Creates a new breakpoint, clamping to valid range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(breakpoint_bounds::MIN, breakpoint_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f32(self) -> f32 {
        self.0 as f32
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self(breakpoint_bounds::DEFAULT)
    }
}

// =============================================================================
// SwipeThreshold
// =============================================================================

/// Swipe distance bounds (CSS pixels).
pub mod swipe_bounds {
    /// Minimum swipe distance.
    pub const MIN: f32 = 1.0;
    /// Maximum swipe distance.
    pub const MAX: f32 = 500.0;
    /// Default swipe distance.
    pub const DEFAULT: f32 = 50.0;
}

/// Horizontal distance a swipe must exceed to change slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold, clamping to valid range.
    #[must_use]
    pub fn new(px: f32) -> Self {
        Self(px.clamp(swipe_bounds::MIN, swipe_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(swipe_bounds::DEFAULT)
    }
}

// =============================================================================
// SettleDuration
// =============================================================================

/// Settle animation bounds (milliseconds).
pub mod settle_bounds {
    /// Minimum settle duration.
    pub const MIN: u32 = 0;
    /// Maximum settle duration.
    pub const MAX: u32 = 2000;
    /// Default settle duration.
    pub const DEFAULT: u32 = 300;
}

/// Duration of the eased transition that settles the carousel after a swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleDuration(u32);

impl SettleDuration {
    /// Creates a new duration in milliseconds, clamping to valid range.
    #[must_use]
    pub fn new(ms: u32) -> Self {
        Self(ms.clamp(settle_bounds::MIN, settle_bounds::MAX))
    }

    #[must_use]
    pub fn millis(self) -> u32 {
        self.0
    }
}

impl Default for SettleDuration {
    fn default() -> Self {
        Self(settle_bounds::DEFAULT)
    }
}

// =============================================================================
// PinchScale
// =============================================================================

/// Lightbox zoom factor. Never below natural size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchScale(f32);

impl PinchScale {
    pub const NATURAL: Self = Self(1.0);

    /// Creates a scale, flooring it at 1.0. Non-finite input yields 1.0.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        if scale.is_finite() {
            Self(scale.max(1.0))
        } else {
            Self::NATURAL
        }
    }

    /// Scale for a pinch whose finger distance went from `initial` to
    /// `current`, relative to the committed `baseline`.
    #[must_use]
    pub fn from_pinch(initial: f32, current: f32, baseline: PinchScale) -> Self {
        if initial <= 0.0 {
            return baseline;
        }
        Self::new(current / initial * baseline.0)
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn is_natural(self) -> bool {
        self.0 <= 1.0
    }
}

impl Default for PinchScale {
    fn default() -> Self {
        Self::NATURAL
    }
}

// =============================================================================
// BufferCapacity
// =============================================================================

/// Activity buffer capacity bounds (entries).
pub mod buffer_capacity_bounds {
    /// Minimum buffer capacity.
    pub const MIN: usize = 10;
    /// Maximum buffer capacity.
    pub const MAX: usize = 10_000;
    /// Default buffer capacity.
    pub const DEFAULT: usize = 200;
}

/// Capacity of a gallery's activity log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a new buffer capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(buffer_capacity_bounds::MIN, buffer_capacity_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(buffer_capacity_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_clamps_to_bounds() {
        assert_eq!(Breakpoint::new(10).value(), breakpoint_bounds::MIN);
        assert_eq!(Breakpoint::new(100_000).value(), breakpoint_bounds::MAX);
        assert_eq!(Breakpoint::default().value(), 767);
    }

    #[test]
    fn swipe_threshold_clamps_to_bounds() {
        assert_eq!(SwipeThreshold::new(0.0).value(), swipe_bounds::MIN);
        assert_eq!(SwipeThreshold::new(80.0).value(), 80.0);
        assert_eq!(SwipeThreshold::default().value(), 50.0);
    }

    #[test]
    fn settle_duration_clamps_to_bounds() {
        assert_eq!(SettleDuration::default().millis(), 300);
        assert_eq!(SettleDuration::new(9000).millis(), settle_bounds::MAX);
    }

    #[test]
    fn pinch_scale_never_below_natural() {
        assert_eq!(PinchScale::new(0.3).value(), 1.0);
        assert_eq!(PinchScale::new(f32::NAN).value(), 1.0);
        assert_eq!(PinchScale::new(2.5).value(), 2.5);
    }

    #[test]
    fn pinch_scale_multiplies_baseline() {
        let baseline = PinchScale::new(2.0);
        assert_eq!(PinchScale::from_pinch(100.0, 150.0, baseline).value(), 3.0);
        // Pinching in from a zoomed baseline stops at natural size.
        assert_eq!(PinchScale::from_pinch(100.0, 10.0, baseline).value(), 1.0);
        // Degenerate start distance keeps the baseline.
        assert_eq!(PinchScale::from_pinch(0.0, 50.0, baseline), baseline);
    }

    #[test]
    fn buffer_capacity_clamps_to_bounds() {
        assert_eq!(BufferCapacity::new(1).value(), buffer_capacity_bounds::MIN);
        assert_eq!(BufferCapacity::new(1_000_000).value(), buffer_capacity_bounds::MAX);
    }
}
