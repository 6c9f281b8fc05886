// SPDX-License-Identifier: MPL-2.0
//! Header bar above the inbox.
//!
//! Shows the page title, the unread count of the current snapshot and a
//! Refresh button. Refresh is disabled while a load is in flight.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, text, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length, Theme};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub unread_count: usize,
    pub loading: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Refresh,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Refresh,
}

/// Process a header message and return the corresponding event.
pub fn update(message: Message, loading: bool) -> Event {
    match message {
        // A refresh is already running
        Message::Refresh if loading => Event::None,
        Message::Refresh => Event::Refresh,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("header-title")).size(typography::TITLE_MD);

    let count = ctx.unread_count.to_string();
    let unread = Text::new(
        ctx.i18n
            .tr_with_args("header-unread-count", &[("count", count.as_str())]),
    )
    .size(typography::BODY)
    .style(|theme: &Theme| text::Style {
        color: Some(theme.extended_palette().secondary.base.text),
    });

    let refresh_content = Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(icons::REFRESH.sized(sizing::ICON_SM))
        .push(Text::new(ctx.i18n.tr("header-refresh")).size(typography::BODY_SM));

    let refresh_button = button(refresh_content)
        .on_press_maybe((!ctx.loading).then_some(Message::Refresh))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::primary);

    let bar = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(title)
        .push(unread)
        .push(Space::new().width(Length::Fill))
        .push(refresh_button);

    Container::new(bar)
        .width(Length::Fill)
        .padding([spacing::SM, spacing::MD])
        .style(styles::container::panel)
        .into()
}
