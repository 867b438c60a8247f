// SPDX-License-Identifier: MPL-2.0
//! Swipe-to-dismiss tracking.
//!
//! The tracker follows one press from start to release and reports the
//! vertical travel and the release velocity. Only the release is evaluated:
//! a toast is dismissed when `translation_y + velocity_y` exceeds the
//! threshold, so a short fast flick and a slow long drag both work.

use iced::Point;
use std::time::Instant;

/// Vertical travel and velocity at the moment of release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Release {
    /// Downward travel since the press (negative when dragged upward).
    pub translation_y: f32,
    /// Downward velocity in logical pixels per second.
    pub velocity_y: f32,
}

impl Release {
    /// Whether this release should dismiss the toast.
    #[must_use]
    pub fn should_dismiss(&self, threshold: f32) -> bool {
        self.translation_y + self.velocity_y > threshold
    }
}

/// Tracks an in-progress drag.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    /// Whether a drag is currently active.
    pub is_dragging: bool,

    /// Position where the drag started.
    pub start_position: Option<Point>,

    /// Latest sample.
    last: Option<(Point, Instant)>,

    /// Velocity computed from the two most recent samples.
    velocity_y: f32,
}

impl SwipeTracker {
    /// Starts a drag.
    pub fn start(&mut self, position: Point, at: Instant) {
        self.is_dragging = true;
        self.start_position = Some(position);
        self.last = Some((position, at));
        self.velocity_y = 0.0;
    }

    /// Records a cursor or finger move.
    pub fn update(&mut self, position: Point, at: Instant) {
        if !self.is_dragging {
            return;
        }
        self.sample(position, at);
    }

    /// Current downward travel, or `None` when not dragging.
    #[must_use]
    pub fn translation_y(&self) -> Option<f32> {
        if !self.is_dragging {
            return None;
        }
        let start = self.start_position?;
        let (last, _) = self.last?;
        Some(last.y - start.y)
    }

    /// Ends the drag and returns the release measurements.
    pub fn release(&mut self, position: Point, at: Instant) -> Option<Release> {
        if !self.is_dragging {
            return None;
        }
        self.sample(position, at);
        let release = self.translation_y().map(|translation_y| Release {
            translation_y,
            velocity_y: self.velocity_y,
        });
        self.stop();
        release
    }

    /// Abandons the drag without a release.
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.start_position = None;
        self.last = None;
        self.velocity_y = 0.0;
    }

    fn sample(&mut self, position: Point, at: Instant) {
        if let Some((previous, previous_at)) = self.last {
            let dt = at.saturating_duration_since(previous_at).as_secs_f32();
            // Same-instant samples keep the previous velocity
            if dt > 0.0 {
                self.velocity_y = (position.y - previous.y) / dt;
            }
        }
        self.last = Some((position, at));
    }
}
