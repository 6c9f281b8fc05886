// SPDX-License-Identifier: MPL-2.0
//! Notification inbox.
//!
//! The inbox renders whatever snapshot the host hands it and reports two
//! intents back: mark a notification read, delete a notification. It keeps
//! no copy of the notifications and never changes what it shows on its own;
//! the host forwards intents to the notification service and supplies the
//! next snapshot.
//!
//! Rendering is split in two steps: [`projection::project`] computes an
//! [`InboxModel`] (pure, unit tested) and [`view`] turns it into widgets.

pub mod projection;
mod row;

pub use projection::{InboxModel, ItemModel, KindIcon, TimestampFormatter};

use crate::domain::notification::{Notification, NotificationId};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{scrollable, text, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};

/// Intents emitted by the inbox. Each carries the id of the target
/// notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    MarkRead(NotificationId),
    Delete(NotificationId),
}

impl Message {
    pub fn id(self) -> NotificationId {
        match self {
            Message::MarkRead(id) | Message::Delete(id) => id,
        }
    }
}

/// Contextual data needed to render the inbox.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub notifications: &'a [Notification],
    pub loading: bool,
    pub formatter: &'a TimestampFormatter,
    /// Current spinner angle, advanced by the host tick.
    pub spinner_rotation: f32,
}

/// Renders the inbox for the given snapshot.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let model = projection::project(ctx.notifications, ctx.loading, ctx.formatter);

    match model {
        InboxModel::Loading => loading_view(ctx.i18n, ctx.spinner_rotation),
        InboxModel::Empty => empty_view(ctx.i18n),
        InboxModel::List(items) => list_view(items, ctx.i18n),
    }
}

fn loading_view<'a>(i18n: &I18n, rotation: f32) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(AnimatedSpinner::new(rotation).into_element())
        .push(Text::new(i18n.tr("inbox-loading")).size(typography::BODY));

    centered(content)
}

fn empty_view<'a>(i18n: &I18n) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(icons::INFO.sized(sizing::ICON_XL))
        .push(Text::new(i18n.tr("inbox-empty-title")).size(typography::TITLE_SM))
        .push(
            Text::new(i18n.tr("inbox-empty-subtitle"))
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().secondary.base.text),
                }),
        );

    centered(content)
}

fn list_view<'a>(items: Vec<ItemModel>, i18n: &I18n) -> Element<'a, Message> {
    let labels = row::Labels {
        mark_read: i18n.tr("inbox-mark-read"),
        delete: i18n.tr("inbox-delete"),
    };

    let rows = Column::with_children(items.into_iter().map(|item| row::view(item, &labels)))
        .spacing(spacing::XS)
        .padding(spacing::MD)
        .width(Length::Fill)
        .max_width(sizing::INBOX_MAX_WIDTH);

    scrollable(
        Container::new(rows)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .height(Length::Fill)
    .into()
}

fn centered<'a>(content: Column<'a, Message>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_carries_target_id() {
        let id = NotificationId::new(42);
        assert_eq!(Message::Delete(id).id(), id);
        assert_eq!(Message::MarkRead(id).id(), id);
    }
}
