// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! Two tabs switch between the data grid and the compositor. The tab for the
//! current screen is highlighted and inert.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current: Screen,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Select(Screen),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    SwitchTo(Screen),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, current: Screen) -> Event {
    match message {
        Message::Select(screen) if screen == current => Event::None,
        Message::Select(screen) => Event::SwitchTo(screen),
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::XS)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(tab(&ctx, Screen::DataGrid, "nav-data-grid"))
        .push(tab(&ctx, Screen::Compositor, "nav-compositor"));

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(styles::container::panel)
        .into()
}

fn tab<'a>(ctx: &ViewContext<'a>, screen: Screen, label_key: &str) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr(label_key)).size(typography::BODY);
    let tab = button(label).padding([spacing::XXS, spacing::MD]);

    if ctx.current == screen {
        tab.style(styles::button::selected).into()
    } else {
        tab.on_press(Message::Select(screen))
            .style(styles::button::unselected)
            .into()
    }
}
