// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::design_tokens::palette;
use crate::ui::theming::ThemeMode;
use crate::ui::toasts::{Symbol, ToastMessage, ToastRequest, ToastTime};
use iced::{window, Size};

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Toasts(ToastMessage),
    /// The main window reported itself; the toast overlay can be installed.
    WindowOpened {
        window: window::Id,
        size: Size,
    },
    WindowResized {
        window: window::Id,
        size: Size,
    },
    Present(Sample),
    /// Present a toast from a background task after a short delay.
    PresentDelayed,
    /// The background task finished; `false` if the presenter was gone.
    DelayedPresented(bool),
    DismissAll,
    /// Click on the content underneath the overlay.
    Increment,
}

/// Canned toasts offered by the demo buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    Saved,
    Copied,
    Reminder,
    Swipeable,
}

impl Sample {
    pub const ALL: [Sample; 4] = [
        Sample::Saved,
        Sample::Copied,
        Sample::Reminder,
        Sample::Swipeable,
    ];

    /// Button label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Sample::Saved => "Short",
            Sample::Copied => "Medium",
            Sample::Reminder => "Long",
            Sample::Swipeable => "Interactive",
        }
    }

    #[must_use]
    pub fn request(self) -> ToastRequest {
        match self {
            Sample::Saved => ToastRequest::new("Saved")
                .symbol(Symbol::Checkmark)
                .tint(palette::SUCCESS_500)
                .timing(ToastTime::Short),
            Sample::Copied => ToastRequest::new("Copied to clipboard")
                .symbol(Symbol::Info)
                .tint(palette::INFO_500)
                .timing(ToastTime::Medium),
            Sample::Reminder => ToastRequest::new("Reminder set for tomorrow")
                .symbol(Symbol::Bell)
                .timing(ToastTime::Long),
            Sample::Swipeable => ToastRequest::new("Swipe me down")
                .symbol(Symbol::ChevronRight)
                .tint(palette::PRIMARY_500)
                .interactive(true)
                .timing(ToastTime::Long),
        }
    }
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TOASTS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Theme override; the configured theme is used when absent.
    pub theme: Option<ThemeMode>,
}
