// SPDX-License-Identifier: MPL-2.0
//! Per-toast lifecycle.
//!
//! ```text
//! Pending ──tick──▶ Entering ──slide done──▶ Visible ──deadline──┐
//!    │                  │                       │                ▼
//!    └──────────────────┴──────dismiss──────────┴──────────▶ Exiting ──slide done──▶ Removed
//! ```
//!
//! Cells advance only when ticked with the current instant. Dismiss
//! requests while already exiting are ignored, and starting an exit
//! cancels the pending deadline.

use super::animation::Tween;
use super::layout::StackTransform;
use std::time::{Duration, Instant};

/// Lifecycle phase of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Pending,
    Entering,
    Visible,
    Exiting,
    Removed,
}

/// What a tick changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellEvent {
    EntranceStarted,
    BecameVisible,
    /// The auto-dismiss deadline elapsed and the exit began.
    TimerElapsed,
    ExitFinished,
}

/// Motion parameters shared by every cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    /// Distance below the rest position a toast enters from and exits to.
    pub slide_distance: f32,
    /// Duration of entrance, exit and restacking animations.
    pub duration: Duration,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            slide_distance: crate::config::DEFAULT_SLIDE_DISTANCE,
            duration: Duration::from_millis(crate::config::DEFAULT_ANIMATION_MS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Cell {
    phase: Phase,
    timing: Duration,
    slide: Tween,
    offset: Tween,
    scale: Tween,
    deadline: Option<Instant>,
    drag_offset: f32,
}

impl Cell {
    /// Creates a pending cell parked below its rest position.
    #[must_use]
    pub fn new(timing: Duration, transform: StackTransform, motion: Motion, now: Instant) -> Self {
        Self {
            phase: Phase::Pending,
            timing,
            slide: Tween::settled(motion.slide_distance, now),
            offset: Tween::settled(transform.offset_y, now),
            scale: Tween::settled(transform.scale, now),
            deadline: None,
            drag_offset: 0.0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Pending auto-dismiss deadline, if armed.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Advances the state machine to `now`.
    pub fn tick(&mut self, now: Instant, motion: Motion) -> Option<CellEvent> {
        match self.phase {
            Phase::Pending => {
                self.slide = Tween::new(motion.slide_distance, 0.0, now, motion.duration);
                self.phase = Phase::Entering;
                Some(CellEvent::EntranceStarted)
            }
            Phase::Entering if self.slide.is_finished(now) => {
                self.phase = Phase::Visible;
                self.deadline = Some(now + self.timing);
                Some(CellEvent::BecameVisible)
            }
            Phase::Visible if self.deadline.is_some_and(|deadline| now >= deadline) => {
                self.begin_exit(now, motion);
                Some(CellEvent::TimerElapsed)
            }
            Phase::Exiting if self.slide.is_finished(now) => {
                self.phase = Phase::Removed;
                Some(CellEvent::ExitFinished)
            }
            _ => None,
        }
    }

    /// Starts the exit unless one is already running.
    ///
    /// Returns `true` when this call started the exit.
    pub fn request_dismiss(&mut self, now: Instant, motion: Motion) -> bool {
        match self.phase {
            Phase::Pending | Phase::Entering | Phase::Visible => {
                self.begin_exit(now, motion);
                true
            }
            Phase::Exiting | Phase::Removed => false,
        }
    }

    /// Eases the stack transform towards a new rank.
    pub fn restack(&mut self, target: StackTransform, now: Instant, duration: Duration) {
        if self.offset.target() != target.offset_y {
            self.offset.retarget(target.offset_y, now, duration);
        }
        if self.scale.target() != target.scale {
            self.scale.retarget(target.scale, now, duration);
        }
    }

    /// Follows a drag; upward travel is ignored.
    pub fn set_drag_offset(&mut self, translation_y: f32) {
        if matches!(self.phase, Phase::Entering | Phase::Visible) {
            self.drag_offset = translation_y.max(0.0);
        }
    }

    /// Eases a released drag back to the rest position.
    pub fn snap_back(&mut self, now: Instant, motion: Motion) {
        if self.drag_offset == 0.0 || self.phase == Phase::Exiting {
            return;
        }
        let from = self.displacement(now);
        self.slide = Tween::new(from, 0.0, now, motion.duration);
        self.drag_offset = 0.0;
    }

    #[must_use]
    pub fn displacement(&self, now: Instant) -> f32 {
        self.slide.value(now) + self.drag_offset
    }

    #[must_use]
    pub fn transform(&self, now: Instant) -> StackTransform {
        StackTransform {
            offset_y: self.offset.value(now),
            scale: self.scale.value(now),
        }
    }

    /// Whether anything about this cell is still moving at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        matches!(self.phase, Phase::Pending)
            || !self.slide.is_finished(now)
            || !self.offset.is_finished(now)
            || !self.scale.is_finished(now)
    }

    fn begin_exit(&mut self, now: Instant, motion: Motion) {
        let from = self.displacement(now);
        self.slide = Tween::new(from, motion.slide_distance, now, motion.duration);
        self.drag_offset = 0.0;
        self.deadline = None;
        self.phase = Phase::Exiting;
    }
}
