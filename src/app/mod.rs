// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the data grid and the
//! compositor.
//!
//! The `App` struct wires together the components, the remote page source,
//! the rasterizer and the notification layer, and translates component events
//! into side effects like page fetches, file dialogs or exports.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::port::{FetchError, PageSource, Rasterizer};
use crate::config::{self, Config};
use crate::diagnostics::{DiagnosticsCollector, DiagnosticsHandle, WarningType};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{HttpPageSource, SoftwareRasterizer};
use crate::media::background;
use crate::ui::compositor;
use crate::ui::data_grid;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    theme_mode: ThemeMode,
    config: Config,
    data_grid: data_grid::State,
    compositor: compositor::State,
    /// `Err` when the HTTP client could not be built; every fetch then fails
    /// with that error.
    page_source: Result<Arc<dyn PageSource>, FetchError>,
    rasterizer: Arc<dyn Rasterizer>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
    diagnostics_handle: DiagnosticsHandle,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("page", &self.data_grid.page())
            .field("logo_placed", &self.compositor.overlay().is_placed())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the flags are consumed on the
    // first call and defaults are used should it ever run again.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings, builds the adapters and kicks off the first page fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load();
        if let Some(endpoint) = flags.endpoint {
            config.data_grid.endpoint = Some(endpoint);
        }
        let i18n = I18n::new(flags.lang, &config);

        let page_source = HttpPageSource::new(
            config.data_grid.endpoint(),
            config.data_grid.request_timeout(),
        )
        .map(|source| Arc::new(source) as Arc<dyn PageSource>);
        if let Err(err) = &page_source {
            log::error!("Data service client unavailable: {}", err);
        }

        let (stage_background, background_error) =
            background::resolve(config.compositor.background_path.as_deref());

        let mut app = App::with_adapters(
            i18n,
            config,
            page_source,
            Arc::new(SoftwareRasterizer::default()),
            stage_background,
        );

        if let Some(key) = config_warning {
            app.notifications.push(
                notifications::Notification::warning(&key)
                    .with_warning_type(WarningType::ConfigWarning),
            );
        }
        if background_error.is_some() {
            app.notifications.push(
                notifications::Notification::warning("notification-background-load-error")
                    .with_warning_type(WarningType::ConfigWarning),
            );
        }

        let task = app.refresh_grid();
        (app, task)
    }

    /// Assembles the app around explicit adapters.
    fn with_adapters(
        i18n: I18n,
        config: Config,
        page_source: Result<Arc<dyn PageSource>, FetchError>,
        rasterizer: Arc<dyn Rasterizer>,
        stage_background: crate::domain::media::RawImage,
    ) -> Self {
        let diagnostics = DiagnosticsCollector::default();
        let diagnostics_handle = diagnostics.handle();
        let mut notifications = notifications::Manager::new();
        notifications.set_diagnostics(diagnostics_handle.clone());

        App {
            i18n,
            screen: Screen::default(),
            theme_mode: config.general.theme_mode,
            data_grid: data_grid::State::new(
                config.data_grid.page_size(),
                config.data_grid.reset_page_on_search(),
            ),
            compositor: compositor::State::new(stage_background, config.compositor.logo_size()),
            config,
            page_source,
            rasterizer,
            notifications,
            diagnostics,
            diagnostics_handle,
        }
    }

    fn refresh_grid(&mut self) -> Task<Message> {
        let event = self.data_grid.refresh();
        let mut ctx = self.update_context();
        update::handle_data_grid_event(&mut ctx, event)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("app-title");
        let screen_name = match self.screen {
            Screen::DataGrid => self.i18n.tr("nav-data-grid"),
            Screen::Compositor => self.i18n.tr("nav-compositor"),
        };
        format!("{screen_name} - {app_name}")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let tick_sub = subscription::create_tick_subscription();

        Subscription::batch([event_sub, tick_sub])
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            screen: &mut self.screen,
            config: &self.config,
            data_grid: &mut self.data_grid,
            compositor: &mut self.compositor,
            page_source: &self.page_source,
            rasterizer: &self.rasterizer,
            notifications: &mut self.notifications,
            diagnostics: &self.diagnostics_handle,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                self.diagnostics.process_pending();
                Task::none()
            }
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut self.update_context(), navbar_message)
            }
            Message::DataGrid(grid_message) => {
                update::handle_data_grid_message(&mut self.update_context(), grid_message)
            }
            Message::Compositor(compositor_message) => {
                update::handle_compositor_message(&mut self.update_context(), compositor_message)
            }
            Message::LogoFileSelected(path) => update::handle_logo_file_selected(path),
            Message::ExportFinished(result) => {
                update::handle_export_finished(&mut self.update_context(), result)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            data_grid: &self.data_grid,
            compositor: &self.compositor,
            notifications: &self.notifications,
        })
    }
}
