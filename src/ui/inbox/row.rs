// SPDX-License-Identifier: MPL-2.0
//! A single inbox row.

use super::projection::{ItemModel, KindIcon};
use super::Message;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons::{self, Glyph};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::font::Weight;
use iced::widget::{button, text, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Font, Length, Theme};

/// Localized button labels, resolved once per render.
pub(super) struct Labels {
    pub mark_read: String,
    pub delete: String,
}

pub(super) fn glyph(icon: KindIcon) -> Glyph {
    match icon {
        KindIcon::Danger => icons::WARNING,
        KindIcon::Confirmation => icons::CHECK,
        KindIcon::Pending => icons::HOURGLASS,
        KindIcon::General => icons::INFO,
    }
}

// [icon] [title / message / timestamp] [dot] [mark read] [delete]
pub(super) fn view<'a>(item: ItemModel, labels: &Labels) -> Element<'a, Message> {
    let title_font = Font {
        weight: if item.emphasized {
            Weight::Bold
        } else {
            Weight::Normal
        },
        ..Font::default()
    };

    let body = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(
            Text::new(item.title)
                .size(typography::BODY_LG)
                .font(title_font),
        )
        .push(Text::new(item.message).size(typography::BODY))
        .push(
            Text::new(item.timestamp)
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().secondary.base.text),
                }),
        );

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(glyph(item.icon).sized(sizing::ICON_MD)).padding(spacing::XXS))
        .push(body);

    if item.unread_dot {
        row = row.push(
            Container::new(Space::new())
                .width(Length::Fixed(sizing::UNREAD_DOT))
                .height(Length::Fixed(sizing::UNREAD_DOT))
                .style(container_styles::unread_dot),
        );
    }

    if item.can_mark_read {
        row = row.push(
            button(Text::new(labels.mark_read.clone()).size(typography::BODY_SM))
                .on_press(Message::MarkRead(item.id))
                .padding([spacing::XXS, spacing::XS])
                .style(button_styles::secondary),
        );
    }

    if item.can_delete {
        row = row.push(
            button(Text::new(labels.delete.clone()).size(typography::BODY_SM))
                .on_press(Message::Delete(item.id))
                .padding([spacing::XXS, spacing::XS])
                .style(button_styles::danger),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(container_styles::card(item.emphasized))
        .into()
}
