// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used behind the grid and the compositor controls.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Column header row of the data grid.
pub fn grid_header(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.strong.color)),
        text_color: Some(palette.background.strong.text),
        ..Default::default()
    }
}

/// Body row of the data grid; odd rows get a faint stripe.
pub fn grid_row(striped: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        if !striped {
            return container::Style::default();
        }
        let weak = theme.extended_palette().background.weak.color;
        container::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..weak
            })),
            ..Default::default()
        }
    }
}

/// Bounding box of the compositor stage. Content overflowing it is clipped.
pub fn stage(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_rows_are_not_striped() {
        let style = grid_row(false)(&Theme::Dark);
        assert!(style.background.is_none());
    }

    #[test]
    fn odd_rows_are_striped() {
        let style = grid_row(true)(&Theme::Light);
        assert!(style.background.is_some());
    }
}
