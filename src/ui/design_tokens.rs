// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the grid, the compositor stage and the toasts.
//!
//! Styles and views read sizes and colors from here instead of hard-coding
//! them. Spacing follows a 4 px step.
//!
//! ```
//! use iced_vitrine::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let stripe = Color {
//!     a: opacity::OVERLAY_SUBTLE,
//!     ..palette::GRAY_400
//! };
//! let gutter = spacing::SM;
//! # let _ = (stripe, gutter);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Selected tab and primary action.
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Toast severities.
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

pub mod opacity {
    /// Striped grid rows, pressed tabs.
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Disabled buttons, borders on dark surfaces.
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Panels behind the toolbar and pager.
    pub const SURFACE: f32 = 0.95;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
}

pub mod sizing {
    // Data grid
    pub const PAGE_SIZE_INPUT_WIDTH: f32 = 72.0;
    pub const COLUMN_ID_WIDTH: f32 = 64.0;
    pub const COLUMN_DATE_WIDTH: f32 = 150.0;

    // Compositor
    pub const SLIDER_WIDTH: f32 = 240.0;

    pub const TOAST_WIDTH: f32 = 320.0;
}

pub mod typography {
    /// Search field and page size input.
    pub const BODY_LG: f32 = 16.0;
    /// Buttons, tabs, table cells.
    pub const BODY: f32 = 14.0;
    /// Range label, size label, toast text.
    pub const BODY_SM: f32 = 13.0;
    /// Compositor hint.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Toast accent.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::COLUMN_DATE_WIDTH > sizing::COLUMN_ID_WIDTH);

    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
