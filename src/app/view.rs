// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::compositor;
use crate::ui::data_grid;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager, Toast};
use iced::{
    widget::{Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub data_grid: &'a data_grid::State,
    pub compositor: &'a compositor::State,
    pub notifications: &'a Manager,
}

/// Renders the navbar, the active screen and the toast overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::DataGrid => data_grid::view(
            ctx.data_grid,
            data_grid::ViewContext { i18n: ctx.i18n },
        )
        .map(Message::DataGrid),
        Screen::Compositor => compositor::view(
            ctx.compositor,
            compositor::ViewContext { i18n: ctx.i18n },
        )
        .map(Message::Compositor),
    };

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        current: ctx.screen,
    })
    .map(Message::Navbar);

    let column = Column::new().push(navbar_view).push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(column.width(Length::Fill).height(Length::Fill))
        .push(toasts)
        .into()
}
