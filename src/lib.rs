// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` presents stacked, auto-dismissing toast notifications on top
//! of an Iced application.
//!
//! The overlay is installed once per window and lets every input through to
//! the application except presses on a rendered toast. A small demo
//! application in [`app`] exercises the whole lifecycle.

#![doc(html_root_url = "https://docs.rs/iced_toasts/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod ui;
