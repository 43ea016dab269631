// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.
//!
//! This module defines the events captured while the grid pages through
//! remote data and the compositor places and exports logos.

use std::fmt;
use std::time::Instant;

/// User-initiated actions that can be captured for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    // ==========================================================================
    // Screen Navigation
    // ==========================================================================
    /// Switch between the data grid and the compositor.
    SwitchScreen {
        /// Target screen name.
        screen: String,
    },

    // ==========================================================================
    // Data Grid Actions
    // ==========================================================================
    /// Edit the search term.
    Search,

    /// Change the number of records per page.
    ChangePageSize {
        /// New page size.
        page_size: u32,
    },

    /// Request a specific page (pagination buttons or refresh).
    RequestPage {
        /// Requested 1-based page.
        page: u32,
    },

    // ==========================================================================
    // Compositor Actions
    // ==========================================================================
    /// Pick a logo file.
    UploadLogo,

    /// Move the logo size slider.
    ResizeLogo {
        /// New logo width in pixels.
        size: u32,
    },

    /// Rasterize and save the composite.
    ExportComposite,
}

/// Categories of warnings that can occur in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningType {
    /// A page response arrived after a newer request was issued.
    StaleResponse,
    /// The configuration file could not be used.
    ConfigWarning,
    /// Other warning type not covered by specific categories.
    Other,
}

/// Categories of errors that can occur in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// Remote page query failed.
    FetchError,
    /// Logo file could not be decoded.
    DecodeError,
    /// Composite could not be rendered.
    RasterizationError,
    /// Exported image could not be written.
    ExportError,
    /// Other error type not covered by specific categories.
    Other,
}

/// A categorized warning.
#[derive(Debug, Clone, PartialEq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// A categorized error.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    #[must_use]
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock)
    pub timestamp: Instant,
    /// The type and data of the event
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticEventKind {
    /// User-initiated action.
    UserAction {
        action: UserAction,
        details: Option<String>,
    },

    /// Non-critical warning.
    Warning { event: WarningEvent },

    /// Operation failure.
    Error { event: ErrorEvent },
}

impl DiagnosticEventKind {
    /// Level the event is mirrored to the `log` facade at.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        match self {
            DiagnosticEventKind::UserAction { .. } => log::Level::Debug,
            DiagnosticEventKind::Warning { .. } => log::Level::Warn,
            DiagnosticEventKind::Error { .. } => log::Level::Error,
        }
    }
}

impl fmt::Display for DiagnosticEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticEventKind::UserAction {
                action,
                details: Some(details),
            } => write!(f, "action {:?} ({})", action, details),
            DiagnosticEventKind::UserAction { action, .. } => write!(f, "action {:?}", action),
            DiagnosticEventKind::Warning { event } => {
                write!(f, "{:?}: {}", event.warning_type, event.message)
            }
            DiagnosticEventKind::Error { event } => {
                write!(f, "{:?}: {}", event.error_type, event.message)
            }
        }
    }
}
