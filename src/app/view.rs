// SPDX-License-Identifier: MPL-2.0
//! Demo screen rendered beneath the toast overlay.

use super::message::{Message, Sample};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::toasts::{self, Presenter};
use iced::widget::{button, text, Column, Container, Row};
use iced::{alignment, Element, Length};

/// Read-only inputs for the root view.
pub struct ViewContext<'a> {
    pub presenter: &'a Presenter,
    pub clicks: u32,
}

/// Root view: the demo controls wrapped by the toast overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let samples = Sample::ALL.iter().fold(
        Row::new().spacing(spacing::XS),
        |row, sample| {
            row.push(
                button(text(sample.label()).size(typography::BODY))
                    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                    .on_press(Message::Present(*sample)),
            )
        },
    );

    let extras = Row::new()
        .spacing(spacing::XS)
        .push(button(text("Delayed").size(typography::BODY)).on_press(Message::PresentDelayed))
        .push(
            button(text("Dismiss all").size(typography::BODY))
                .on_press_maybe(ctx.presenter.has_toasts().then_some(Message::DismissAll)),
        );

    let counter = button(text(format!("Clicked {} times", ctx.clicks)).size(typography::BODY))
        .on_press(Message::Increment);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(text("Toasts").size(typography::TITLE_MD))
        .push(samples)
        .push(extras)
        .push(counter)
        .push(
            text(format!("{} active", ctx.presenter.toasts().len())).size(typography::CAPTION),
        );

    let screen = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    toasts::host(screen, ctx.presenter, Message::Toasts)
}
