// SPDX-License-Identifier: MPL-2.0
//! Stacked toast notifications drawn above the application content.
//!
//! Toasts slide in from the bottom edge, stay for a fixed duration and slide
//! back out. Newer toasts sit in front; older ones are lifted and shrunk
//! behind them. The overlay never blocks the application except where a
//! toast is actually under the pointer.
//!
//! # Components
//!
//! - [`item`] - Toast request, durations, symbols and identifiers
//! - [`store`] - Ordered list of active toasts
//! - [`presenter`] - Lifecycle driver owned by the application state
//! - [`cell`] - Per-toast state machine (enter, wait, exit)
//! - [`layout`] - Stack offsets, scales and frames
//! - [`gesture`] - Swipe-to-dismiss tracking
//! - [`overlay`] - Passthrough canvas layer and hit testing
//!
//! # Usage
//!
//! ```ignore
//! use iced_toasts::ui::toasts::{self, Presenter, Symbol, ToastRequest, ToastTime};
//!
//! let mut presenter = Presenter::default();
//! presenter.present(
//!     ToastRequest::new("Saved")
//!         .symbol(Symbol::Checkmark)
//!         .timing(ToastTime::Short),
//! );
//!
//! // In the root view
//! toasts::host(content, &presenter, Message::Toasts)
//! ```

pub mod animation;
pub mod cell;
pub mod gesture;
pub mod item;
pub mod layout;
pub mod overlay;
pub mod presenter;
mod render;
pub mod store;

pub use cell::{CellEvent, Phase};
pub use item::{Symbol, Tint, ToastId, ToastItem, ToastRequest, ToastTime};
pub use overlay::{host, Occlusion, OverlayHost};
pub use presenter::{Message as ToastMessage, Presenter, Settings, ToastHandle, ToastSnapshot};
