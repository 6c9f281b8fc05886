// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are Unicode glyphs rendered with the default font and tinted with a
//! semantic color, so they follow the theme without per-theme assets.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `delete_notification`).

use crate::ui::design_tokens::palette;
use iced::widget::{text, Text};
use iced::{Color, Theme};

/// A glyph with its accent color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub symbol: &'static str,
    pub color: Color,
}

impl Glyph {
    pub const fn new(symbol: &'static str, color: Color) -> Self {
        Self { symbol, color }
    }

    /// Renders the glyph at `size`.
    pub fn sized<'a>(self, size: f32) -> Text<'a> {
        let color = self.color;
        Text::new(self.symbol)
            .size(size)
            .style(move |_theme: &Theme| text::Style { color: Some(color) })
    }
}

/// Warning triangle, danger red.
pub const WARNING: Glyph = Glyph::new("\u{26A0}", palette::ERROR_500);

/// Check mark, success green.
pub const CHECK: Glyph = Glyph::new("\u{2714}", palette::SUCCESS_500);

/// Hourglass, pending amber.
pub const HOURGLASS: Glyph = Glyph::new("\u{231B}", palette::WARNING_500);

/// Information mark, neutral blue.
pub const INFO: Glyph = Glyph::new("\u{2139}", palette::INFO_500);

/// Multiplication cross, used for dismiss buttons.
pub const CROSS: Glyph = Glyph::new("\u{2715}", palette::GRAY_400);

/// Circular arrow, used for refresh and reload.
pub const REFRESH: Glyph = Glyph::new("\u{21BB}", palette::PRIMARY_500);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_are_single_characters() {
        for glyph in [WARNING, CHECK, HOURGLASS, INFO, CROSS, REFRESH] {
            assert_eq!(glyph.symbol.chars().count(), 1);
        }
    }

    #[test]
    fn kind_glyphs_have_distinct_colors() {
        assert_ne!(WARNING.color, CHECK.color);
        assert_ne!(CHECK.color, HOURGLASS.color);
        assert_ne!(HOURGLASS.color, INFO.color);
    }
}
