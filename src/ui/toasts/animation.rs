// SPDX-License-Identifier: MPL-2.0
//! Time-based tweens driven by frame ticks.
//!
//! A [`Tween`] never advances by itself: callers pass the current instant,
//! which keeps the toast lifecycle deterministic under test.

use std::time::{Duration, Instant};

/// Ease-out cubic: fast start, gentle landing.
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Interpolates a scalar between two values over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl Tween {
    #[must_use]
    pub fn new(from: f32, to: f32, started_at: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    /// A tween already resting at `value`.
    #[must_use]
    pub fn settled(value: f32, now: Instant) -> Self {
        Self::new(value, value, now, Duration::ZERO)
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Eased value at `now`.
    #[must_use]
    pub fn value(&self, now: Instant) -> f32 {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * ease_out(progress)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Restarts towards `to` from wherever the tween is at `now`.
    pub fn retarget(&mut self, to: f32, now: Instant, duration: Duration) {
        *self = Self::new(self.value(now), to, now, duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_350: Duration = Duration::from_millis(350);

    #[test]
    fn ease_out_is_bounded_and_monotonic() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert_eq!(ease_out(2.0), 1.0);
        assert!(ease_out(0.5) > 0.5);
        assert!(ease_out(0.6) > ease_out(0.5));
    }

    #[test]
    fn tween_runs_from_start_to_end() {
        let t0 = Instant::now();
        let tween = Tween::new(150.0, 0.0, t0, MS_350);

        assert_eq!(tween.value(t0), 150.0);
        assert!(!tween.is_finished(t0 + Duration::from_millis(100)));
        assert!(tween.is_finished(t0 + MS_350));
        assert_eq!(tween.value(t0 + Duration::from_secs(5)), 0.0);
    }

    #[test]
    fn settled_tween_is_finished_immediately() {
        let t0 = Instant::now();
        let tween = Tween::settled(3.0, t0);
        assert!(tween.is_finished(t0));
        assert_eq!(tween.value(t0), 3.0);
    }

    #[test]
    fn retarget_starts_from_current_value() {
        let t0 = Instant::now();
        let mut tween = Tween::new(0.0, 100.0, t0, MS_350);
        let mid = t0 + Duration::from_millis(175);
        let current = tween.value(mid);

        tween.retarget(0.0, mid, MS_350);
        assert_eq!(tween.value(mid), current);
        assert_eq!(tween.target(), 0.0);
        assert!(tween.is_finished(mid + MS_350));
    }
}
