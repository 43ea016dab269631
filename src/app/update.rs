// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Components report [`Event`](crate::ui::data_grid::Event)s; the handlers
//! here turn them into tasks (fetches, dialogs, exports) and notifications.

use super::{notifications, Message, Screen};
use crate::application::port::{FetchError, PageSource, Rasterizer};
use crate::config::Config;
use crate::diagnostics::{DiagnosticsHandle, ErrorType, UserAction, WarningEvent, WarningType};
use crate::domain::compositor::Scene;
use crate::domain::paging::{PageQuery, PageRequest};
use crate::error::Error;
use crate::media;
use crate::ui::compositor::{self, Event as CompositorEvent};
use crate::ui::data_grid::{self, Event as DataGridEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use iced::Task;
use std::path::PathBuf;
use std::sync::Arc;

/// Mutable view of the app state handed to each handler.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub config: &'a Config,
    pub data_grid: &'a mut data_grid::State,
    pub compositor: &'a mut compositor::State,
    pub page_source: &'a Result<Arc<dyn PageSource>, FetchError>,
    pub rasterizer: &'a Arc<dyn Rasterizer>,
    pub notifications: &'a mut notifications::Manager,
    pub diagnostics: &'a DiagnosticsHandle,
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, *ctx.screen) {
        NavbarEvent::None => {}
        NavbarEvent::SwitchTo(screen) => {
            ctx.diagnostics.log_action(UserAction::SwitchScreen {
                screen: screen.to_string(),
            });
            *ctx.screen = screen;
        }
    }
    Task::none()
}

pub fn handle_data_grid_message(
    ctx: &mut UpdateContext<'_>,
    message: data_grid::Message,
) -> Task<Message> {
    // Responses are not user intents; keep everything else for logging.
    let intent = match &message {
        data_grid::Message::PageLoaded { .. } => None,
        other => Some(other.clone()),
    };

    let event = ctx.data_grid.update(message);

    if let (Some(intent), DataGridEvent::Fetch(request)) = (intent, &event) {
        if let Some(action) = grid_action(&intent, &request.query) {
            ctx.diagnostics.log_action(action);
        }
    }

    handle_data_grid_event(ctx, event)
}

pub fn handle_data_grid_event(ctx: &mut UpdateContext<'_>, event: DataGridEvent) -> Task<Message> {
    match event {
        DataGridEvent::None => Task::none(),
        DataGridEvent::Fetch(request) => fetch_page(ctx.page_source, request),
        DataGridEvent::FetchFailed { request, error } => {
            log::warn!("Page request #{} failed: {}", request.value(), error);
            let mut notification = notifications::Notification::error(error.i18n_key())
                .with_error_type(ErrorType::FetchError);
            if let FetchError::Status(status) = error {
                notification = notification.with_arg("status", status.to_string());
            }
            ctx.notifications.push(notification);
            Task::none()
        }
        DataGridEvent::StaleResponse { request, latest } => {
            ctx.diagnostics.log_warning(WarningEvent::new(
                WarningType::StaleResponse,
                format!(
                    "Dropped response #{} (latest is #{})",
                    request.value(),
                    latest.value()
                ),
            ));
            Task::none()
        }
    }
}

fn grid_action(intent: &data_grid::Message, query: &PageQuery) -> Option<UserAction> {
    match intent {
        data_grid::Message::SearchChanged(_) => Some(UserAction::Search),
        data_grid::Message::PageSizeInputChanged(_) => Some(UserAction::ChangePageSize {
            page_size: query.page_size.value(),
        }),
        data_grid::Message::FirstPage
        | data_grid::Message::PreviousPage
        | data_grid::Message::NextPage
        | data_grid::Message::LastPage => Some(UserAction::RequestPage {
            page: query.page.value(),
        }),
        data_grid::Message::Refresh | data_grid::Message::PageLoaded { .. } => None,
    }
}

/// Runs `request` on the page source and answers with `PageLoaded`.
fn fetch_page(
    page_source: &Result<Arc<dyn PageSource>, FetchError>,
    request: PageRequest,
) -> Task<Message> {
    let PageRequest { id, query } = request;
    match page_source {
        Ok(source) => Task::perform(source.fetch(query), move |result| {
            Message::DataGrid(data_grid::Message::PageLoaded {
                request: id,
                result,
            })
        }),
        Err(error) => Task::done(Message::DataGrid(data_grid::Message::PageLoaded {
            request: id,
            result: Err(error.clone()),
        })),
    }
}

pub fn handle_compositor_message(
    ctx: &mut UpdateContext<'_>,
    message: compositor::Message,
) -> Task<Message> {
    if let compositor::Message::SizeChanged(size) = &message {
        ctx.diagnostics
            .log_action(UserAction::ResizeLogo { size: *size });
    }

    match ctx.compositor.update(message) {
        CompositorEvent::None | CompositorEvent::LogoPlaced => Task::none(),
        CompositorEvent::PickLogo => {
            ctx.diagnostics.log_action(UserAction::UploadLogo);
            open_logo_dialog()
        }
        CompositorEvent::DecodeFailed(error) => {
            log::warn!("Logo rejected: {}", error);
            ctx.notifications.push(
                notifications::Notification::error("notification-logo-decode-error")
                    .with_error_type(ErrorType::DecodeError),
            );
            Task::none()
        }
        CompositorEvent::Export(scene) => {
            ctx.diagnostics.log_action(UserAction::ExportComposite);
            export_design(
                Arc::clone(ctx.rasterizer),
                scene,
                ctx.config.compositor.export_path(),
            )
        }
    }
}

fn open_logo_dialog() -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter("Image", media::LOGO_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::LogoFileSelected,
    )
}

/// Reads and decodes the chosen logo off the UI thread.
pub fn handle_logo_file_selected(path: Option<PathBuf>) -> Task<Message> {
    match path {
        Some(path) => Task::perform(async move { media::load_logo(&path) }, |result| {
            Message::Compositor(compositor::Message::LogoDecoded(result))
        }),
        None => Task::none(),
    }
}

fn export_design(rasterizer: Arc<dyn Rasterizer>, scene: Scene, path: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            media::export_scene(rasterizer.as_ref(), &scene, &path).map(|_| path)
        },
        Message::ExportFinished,
    )
}

/// Rendering failures and write failures are tracked apart.
fn export_error_type(error: &Error) -> ErrorType {
    match error {
        Error::Rasterization(_) => ErrorType::RasterizationError,
        _ => ErrorType::ExportError,
    }
}

pub fn handle_export_finished(
    ctx: &mut UpdateContext<'_>,
    result: Result<PathBuf, Error>,
) -> Task<Message> {
    match result {
        Ok(path) => {
            log::info!("Design exported to {}", path.display());
            ctx.notifications.push(
                notifications::Notification::success("notification-export-success")
                    .with_arg("path", path.display().to_string()),
            );
        }
        Err(error) => {
            log::error!("Export failed: {}", error);
            ctx.notifications.push(
                notifications::Notification::error("notification-export-error")
                    .with_error_type(export_error_type(&error)),
            );
        }
    }
    Task::none()
}
