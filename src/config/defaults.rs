// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Gesture**: Swipe-to-dismiss threshold
//! - **Motion**: Slide distance and animation duration
//! - **Surface**: Safe-area inset of the overlay
//! - **Ticks**: Frame and polling intervals

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// A release dismisses when `translation_y + velocity_y` exceeds this.
pub const DEFAULT_DISMISS_THRESHOLD: f32 = 100.0;

pub const MIN_DISMISS_THRESHOLD: f32 = 20.0;

pub const MAX_DISMISS_THRESHOLD: f32 = 400.0;

// ==========================================================================
// Motion Defaults
// ==========================================================================

/// Distance below rest that toasts slide in from and out to.
pub const DEFAULT_SLIDE_DISTANCE: f32 = 150.0;

pub const MIN_SLIDE_DISTANCE: f32 = 40.0;

pub const MAX_SLIDE_DISTANCE: f32 = 400.0;

/// Duration of entrance, exit and restacking animations (milliseconds).
pub const DEFAULT_ANIMATION_MS: u64 = 350;

pub const MIN_ANIMATION_MS: u64 = 50;

pub const MAX_ANIMATION_MS: u64 = 2000;

// ==========================================================================
// Surface Defaults
// ==========================================================================

/// Top safe-area inset of the overlay surface. Desktop windows have none.
pub const DEFAULT_SAFE_AREA_TOP: f32 = 0.0;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Tick interval while something is moving (~60 fps).
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Tick interval while idle: deadlines and handle requests are polled.
pub const POLL_INTERVAL_MS: u64 = 100;
