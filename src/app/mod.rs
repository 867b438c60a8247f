// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting the toast overlay.
//!
//! The `App` owns the toast [`Presenter`] and forwards overlay messages and
//! timer ticks to it. Buttons on the sample screen present toasts of each
//! timing class; the click counter underneath shows that presses outside
//! the toasts reach the application.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message, Sample};

use crate::config::{self, Config};
use crate::ui::design_tokens::palette;
use crate::ui::theming::ThemeMode;
use crate::ui::toasts::{Presenter, Settings, Symbol, ToastRequest, ToastTime};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::{Duration, Instant};

/// Delay before the background task presents its toast.
const DELAYED_PRESENT: Duration = Duration::from_secs(1);

pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Root Iced application state.
pub struct App {
    presenter: Presenter,
    theme_mode: ThemeMode,
    window_id: Option<window::Id>,
    /// Presses that reached the content beneath the overlay.
    clicks: u32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("toasts", &self.presenter.toasts().len())
            .field("overlay_installed", &self.presenter.overlay().is_installed())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            presenter: Presenter::default(),
            theme_mode: ThemeMode::System,
            window_id: None,
            clicks: 0,
        }
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are consumed on first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration and builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir);
        let (config, warning) = config::load();
        (Self::from_config(flags.theme, &config, warning), Task::none())
    }

    fn from_config(theme: Option<ThemeMode>, config: &Config, warning: Option<String>) -> Self {
        let mut app = App {
            presenter: Presenter::new(Settings::from(&config.toasts)),
            theme_mode: theme.unwrap_or(config.general.theme_mode),
            ..Self::default()
        };

        // Queued until the overlay is installed
        if let Some(warning) = warning {
            app.presenter.present(
                ToastRequest::new(warning)
                    .symbol(Symbol::Warning)
                    .tint(palette::WARNING_500)
                    .timing(ToastTime::Long),
            );
        }

        app
    }

    fn title(&self) -> String {
        let count = self.presenter.toasts().len();
        if count == 0 {
            "Iced Toasts".to_string()
        } else {
            format!("Iced Toasts ({count})")
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.presenter.tick_interval()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Toasts(toast_message) => {
                self.presenter.update(toast_message);
                Task::none()
            }
            Message::WindowOpened { window, size } => {
                self.attach(window, size);
                Task::none()
            }
            Message::WindowResized { window, size } => {
                if self.presenter.overlay().is_installed() {
                    self.presenter.resize(window, size);
                } else {
                    self.attach(window, size);
                }
                Task::none()
            }
            Message::Present(sample) => {
                self.presenter.present(sample.request());
                Task::none()
            }
            Message::PresentDelayed => {
                let handle = self.presenter.handle();
                Task::perform(
                    async move {
                        tokio::time::sleep(DELAYED_PRESENT).await;
                        handle.present(
                            ToastRequest::new("Background task finished")
                                .symbol(Symbol::Bell)
                                .timing(ToastTime::Medium),
                        )
                    },
                    Message::DelayedPresented,
                )
            }
            Message::DelayedPresented(delivered) => {
                if !delivered {
                    tracing::warn!("delayed toast was not delivered");
                }
                Task::none()
            }
            Message::DismissAll => {
                self.presenter.dismiss_all(Instant::now());
                Task::none()
            }
            Message::Increment => {
                self.clicks = self.clicks.saturating_add(1);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            presenter: &self.presenter,
            clicks: self.clicks,
        })
    }

    /// Installs the overlay on the first window that reports itself.
    fn attach(&mut self, window: window::Id, size: iced::Size) {
        if self.window_id.is_some_and(|id| id != window) {
            return;
        }
        match self.presenter.install(window, size) {
            Ok(_) => self.window_id = Some(window),
            Err(err) => tracing::warn!(%err, "toast overlay not installed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToastConfig;
    use crate::ui::toasts::ToastMessage;
    use iced::Size;

    const VIEWPORT: Size = Size {
        width: 640.0,
        height: 480.0,
    };

    fn app() -> App {
        App::from_config(None, &Config::default(), None)
    }

    #[test]
    fn default_app_has_no_toasts() {
        let app = app();
        assert!(app.presenter.toasts().is_empty());
        assert!(!app.presenter.overlay().is_installed());
        assert_eq!(app.title(), "Iced Toasts");
    }

    #[test]
    fn config_warning_is_queued_as_toast() {
        let app = App::from_config(
            None,
            &Config::default(),
            Some(config::LOAD_WARNING.to_string()),
        );
        assert_eq!(app.presenter.toasts().len(), 1);
        assert_eq!(app.presenter.toasts()[0].title(), config::LOAD_WARNING);
        assert_eq!(app.presenter.toasts()[0].symbol(), Some(Symbol::Warning));
    }

    #[test]
    fn theme_flag_overrides_config() {
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Light;

        let app = App::from_config(Some(ThemeMode::Dark), &config, None);
        assert_eq!(app.theme_mode, ThemeMode::Dark);

        let app = App::from_config(None, &config, None);
        assert_eq!(app.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn toast_settings_come_from_config() {
        let config = Config {
            toasts: ToastConfig {
                default_timing: Some(ToastTime::Long),
                max_queue: Some(1),
                ..ToastConfig::default()
            },
            ..Config::default()
        };
        let mut app = App::from_config(None, &config, None);

        let _ = app.update(Message::Present(Sample::Saved));
        let _ = app.update(Message::Present(Sample::Copied));
        assert_eq!(app.presenter.toasts().len(), 1);
    }

    #[test]
    fn window_opened_installs_overlay_once() {
        let mut app = app();
        let main = window::Id::unique();

        let _ = app.update(Message::WindowOpened {
            window: main,
            size: VIEWPORT,
        });
        assert!(app.presenter.overlay().is_installed());
        assert_eq!(app.window_id, Some(main));

        let _ = app.update(Message::WindowOpened {
            window: window::Id::unique(),
            size: Size::new(10.0, 10.0),
        });
        assert_eq!(app.window_id, Some(main));
        assert_eq!(
            app.presenter.overlay().surface().map(|s| s.viewport),
            Some(VIEWPORT)
        );
    }

    #[test]
    fn resize_before_open_still_installs() {
        let mut app = app();
        let _ = app.update(Message::WindowResized {
            window: window::Id::unique(),
            size: VIEWPORT,
        });
        assert!(app.presenter.overlay().is_installed());
    }

    #[test]
    fn empty_window_is_not_installed() {
        let mut app = app();
        let _ = app.update(Message::WindowOpened {
            window: window::Id::unique(),
            size: Size::ZERO,
        });
        assert!(!app.presenter.overlay().is_installed());
        assert_eq!(app.window_id, None);
    }

    #[test]
    fn sample_buttons_present_toasts_in_order() {
        let mut app = app();
        for sample in Sample::ALL {
            let _ = app.update(Message::Present(sample));
        }

        let titles: Vec<&str> = app
            .presenter
            .toasts()
            .iter()
            .map(|item| item.title())
            .collect();
        assert_eq!(
            titles,
            [
                "Saved",
                "Copied to clipboard",
                "Reminder set for tomorrow",
                "Swipe me down"
            ]
        );
        assert_eq!(app.title(), "Iced Toasts (4)");
    }

    #[test]
    fn dismiss_all_empties_after_exit() {
        let mut app = app();
        let _ = app.update(Message::Present(Sample::Saved));
        let _ = app.update(Message::Present(Sample::Reminder));
        let _ = app.update(Message::Toasts(ToastMessage::Tick(Instant::now())));

        let _ = app.update(Message::DismissAll);
        let later = Instant::now() + Duration::from_secs(5);
        let _ = app.update(Message::Toasts(ToastMessage::Tick(later)));

        assert!(app.presenter.toasts().is_empty());
    }

    #[test]
    fn increment_counts_clicks() {
        let mut app = app();
        let _ = app.update(Message::Increment);
        let _ = app.update(Message::Increment);
        assert_eq!(app.clicks, 2);
    }

    #[test]
    fn only_interactive_sample_is_interactive() {
        for sample in Sample::ALL {
            assert_eq!(
                sample.request().into_item(ToastTime::Medium).is_interactive(),
                sample == Sample::Swipeable
            );
        }
    }
}
