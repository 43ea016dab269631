// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting recent application activity.
//!
//! This module captures diagnostic events during application usage (screen
//! switches, page requests, stale responses, failures) and stores them in a
//! memory-bounded circular buffer. Every recorded event is also forwarded to
//! the `log` facade so it shows up in the `env_logger` output.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event with a [`DiagnosticEventKind`]
//! - [`DiagnosticsCollector`]: Owns the buffer and drains the event channel
//! - [`DiagnosticsHandle`]: Cheap, cloneable sender for any component

mod buffer;
mod collector;
mod events;

pub use buffer::{buffer_capacity_bounds, BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, UserAction, WarningEvent,
    WarningType,
};
