// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module handles routing of native events (mouse, timer) to the
//! appropriate screen components based on the current application state.

use super::{Message, Screen};
use crate::domain::compositor::Point;
use crate::ui::compositor;
use iced::{event, mouse, time, Subscription};
use std::time::Duration;

/// Interval of the housekeeping tick (toast expiry, diagnostics draining).
const TICK_INTERVAL: Duration = Duration::from_millis(500);

/// Creates the appropriate event subscription based on the current screen.
///
/// The compositor follows the pointer across the whole window so a drag
/// keeps tracking when the cursor leaves the logo; the data grid only uses
/// widget events.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Compositor => event::listen_with(|event, _status, _window_id| match event {
            event::Event::Mouse(mouse::Event::CursorMoved { position }) => Some(
                Message::Compositor(compositor::Message::CursorMoved(Point::new(
                    position.x, position.y,
                ))),
            ),
            event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | event::Event::Mouse(mouse::Event::CursorLeft) => {
                Some(Message::Compositor(compositor::Message::DragEnded))
            }
            _ => None,
        }),
        Screen::DataGrid => Subscription::none(),
    }
}

/// Creates the periodic housekeeping tick.
pub fn create_tick_subscription() -> Subscription<Message> {
    time::every(TICK_INTERVAL).map(Message::Tick)
}
