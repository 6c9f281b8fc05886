// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Header bar surface.
///
/// Derived from the active Iced `Theme` background, with a slight opacity,
/// so the bar stays readable in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Inbox row card. Unread rows get a brand-tinted background.
pub fn card(unread: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let extended = theme.extended_palette();
        let background = if unread {
            Color {
                a: opacity::TINT,
                ..palette::PRIMARY_500
            }
        } else {
            extended.background.base.color
        };

        container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                color: extended.background.strong.color,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            ..Default::default()
        }
    }
}

/// Round unread marker.
pub fn unread_dot(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::UNREAD_DOT)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
