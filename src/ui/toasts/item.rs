// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! A [`ToastItem`] is created once per [`ToastRequest`] and never mutated
//! afterwards. Everything that changes while a toast is on screen lives in
//! its cell.

use iced::{Color, Theme};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How long a toast stays visible before it dismisses itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastTime {
    /// 1 second.
    Short,
    /// 2 seconds.
    #[default]
    Medium,
    /// 3 seconds.
    Long,
}

impl ToastTime {
    #[must_use]
    pub fn seconds(self) -> f32 {
        match self {
            ToastTime::Short => 1.0,
            ToastTime::Medium => 2.0,
            ToastTime::Long => 3.0,
        }
    }

    #[must_use]
    pub fn duration(self) -> Duration {
        Duration::from_secs_f32(self.seconds())
    }
}

/// Text color of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Tint {
    /// The theme's primary foreground color.
    #[default]
    Primary,
    Custom(Color),
}

impl Tint {
    /// Resolves the tint against the active theme.
    #[must_use]
    pub fn color(self, theme: &Theme) -> Color {
        match self {
            Tint::Primary => theme.palette().text,
            Tint::Custom(color) => color,
        }
    }
}

impl From<Color> for Tint {
    fn from(color: Color) -> Self {
        Tint::Custom(color)
    }
}

/// Built-in glyphs that can lead a toast title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Checkmark,
    Cross,
    Info,
    Warning,
    ChevronLeft,
    ChevronRight,
    Bell,
}

/// Parameters of a single `present` call.
///
/// ```
/// use iced_toasts::ui::toasts::{Symbol, ToastRequest, ToastTime};
///
/// let request = ToastRequest::new("Saved")
///     .symbol(Symbol::Checkmark)
///     .timing(ToastTime::Short);
/// assert_eq!(request.title(), "Saved");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ToastRequest {
    title: String,
    symbol: Option<Symbol>,
    tint: Tint,
    interactive: bool,
    timing: Option<ToastTime>,
}

impl ToastRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            symbol: None,
            tint: Tint::Primary,
            interactive: false,
            timing: None,
        }
    }

    #[must_use]
    pub fn symbol(mut self, symbol: Symbol) -> Self {
        self.symbol = Some(symbol);
        self
    }

    #[must_use]
    pub fn tint(mut self, tint: impl Into<Tint>) -> Self {
        self.tint = tint.into();
        self
    }

    /// Lets a tap on the toast dismiss it. Every toast can be swiped away.
    #[must_use]
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    #[must_use]
    pub fn timing(mut self, timing: ToastTime) -> Self {
        self.timing = Some(timing);
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Builds the item, falling back to `default_timing` when the request
    /// did not pick one.
    #[must_use]
    pub fn into_item(self, default_timing: ToastTime) -> ToastItem {
        ToastItem {
            id: ToastId::new(),
            title: self.title,
            symbol: self.symbol,
            tint: self.tint,
            interactive: self.interactive,
            timing: self.timing.unwrap_or(default_timing),
        }
    }
}

/// A toast as stored in the active list.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastItem {
    id: ToastId,
    title: String,
    symbol: Option<Symbol>,
    tint: Tint,
    interactive: bool,
    timing: ToastTime,
}

impl ToastItem {
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn symbol(&self) -> Option<Symbol> {
        self.symbol
    }

    #[must_use]
    pub fn tint(&self) -> Tint {
        self.tint
    }

    /// Whether a tap dismisses the toast.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    #[must_use]
    pub fn timing(&self) -> ToastTime {
        self.timing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_ids_are_unique() {
        let a = ToastRequest::new("a").into_item(ToastTime::Medium);
        let b = ToastRequest::new("a").into_item(ToastTime::Medium);
        assert_ne!(a.id(), b.id());
        assert!(b.id() > a.id());
    }

    #[test]
    fn timing_durations_match_classes() {
        assert_eq!(ToastTime::Short.duration(), Duration::from_secs(1));
        assert_eq!(ToastTime::Medium.duration(), Duration::from_secs(2));
        assert_eq!(ToastTime::Long.duration(), Duration::from_secs(3));
    }

    #[test]
    fn request_defaults_are_primary_medium() {
        let item = ToastRequest::new("hello").into_item(ToastTime::default());
        assert_eq!(item.title(), "hello");
        assert_eq!(item.symbol(), None);
        assert_eq!(item.tint(), Tint::Primary);
        assert!(!item.is_interactive());
        assert_eq!(item.timing(), ToastTime::Medium);
    }

    #[test]
    fn explicit_timing_wins_over_default() {
        let item = ToastRequest::new("x")
            .timing(ToastTime::Long)
            .into_item(ToastTime::Short);
        assert_eq!(item.timing(), ToastTime::Long);
    }

    #[test]
    fn builder_sets_every_field() {
        let red = Color::from_rgb(1.0, 0.0, 0.0);
        let item = ToastRequest::new("Deleted")
            .symbol(Symbol::Cross)
            .tint(red)
            .interactive(true)
            .into_item(ToastTime::Medium);

        assert_eq!(item.symbol(), Some(Symbol::Cross));
        assert_eq!(item.tint(), Tint::Custom(red));
        assert!(item.is_interactive());
    }

    #[test]
    fn primary_tint_follows_theme_text() {
        let theme = Theme::Dark;
        assert_eq!(Tint::Primary.color(&theme), theme.palette().text);
    }

    #[test]
    fn timing_parses_from_lowercase() {
        let timing: ToastTime = toml::from_str::<std::collections::HashMap<String, ToastTime>>(
            "value = \"short\"",
        )
        .expect("valid toml")["value"];
        assert_eq!(timing, ToastTime::Short);
    }
}
