// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::compositor;
use crate::ui::data_grid;
use crate::ui::navbar;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    DataGrid(data_grid::Message),
    Compositor(compositor::Message),
    Notification(notifications::NotificationMessage),
    /// Result from the logo file dialog; `None` when cancelled.
    LogoFileSelected(Option<PathBuf>),
    /// Result of rasterizing and writing the design.
    ExportFinished(Result<PathBuf, Error>),
    Tick(Instant), // Periodic tick for toast auto-dismiss and diagnostics draining
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_VITRINE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional data service URL, overriding `[data_grid] endpoint`.
    pub endpoint: Option<String>,
}
