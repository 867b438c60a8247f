// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window events install and size the toast overlay; a timer drives the
//! toast animations and deadlines.

use super::Message;
use crate::ui::toasts::ToastMessage;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Routes window lifecycle events. Everything else stays with the widgets.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window::Event::Opened { size, .. }) => Some(Message::WindowOpened {
            window: window_id,
            size,
        }),
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            window: window_id,
            size,
        }),
        _ => None,
    })
}

/// Ticks the toast presenter at `interval`.
///
/// The presenter picks a frame-rate interval while something moves and a
/// slower polling interval otherwise.
pub fn create_tick_subscription(interval: Duration) -> Subscription<Message> {
    time::every(interval).map(|instant| Message::Toasts(ToastMessage::Tick(instant)))
}
