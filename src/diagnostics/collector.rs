// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! The collector owns the circular buffer. Components log through a
//! [`DiagnosticsHandle`] which sends over a bounded channel; the app drains
//! the channel on each tick with [`DiagnosticsCollector::process_pending`].

use crossbeam_channel::{bounded, Receiver, Sender};

use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType,
    UserAction, WarningEvent, WarningType,
};

/// Handle for sending diagnostic events to the collector.
///
/// This handle is cheap to clone and can be shared across threads.
/// Events are sent via a bounded channel to avoid blocking the UI thread.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs a user action event.
    pub fn log_action(&self, action: UserAction) {
        self.log_action_with_details(action, None);
    }

    /// Logs a user action event with optional details.
    pub fn log_action_with_details(&self, action: UserAction, details: Option<String>) {
        self.send(DiagnosticEventKind::UserAction { action, details });
    }

    /// Logs a warning event with full details.
    pub fn log_warning(&self, event: WarningEvent) {
        self.send(DiagnosticEventKind::Warning { event });
    }

    /// Logs a warning with `WarningType::Other` as the category.
    pub fn log_warning_simple(&self, message: impl Into<String>) {
        self.log_warning(WarningEvent::new(WarningType::Other, message));
    }

    /// Logs an error event with full details.
    pub fn log_error(&self, event: ErrorEvent) {
        self.send(DiagnosticEventKind::Error { event });
    }

    /// Logs an error with `ErrorType::Other` as the category.
    pub fn log_error_simple(&self, message: impl Into<String>) {
        self.log_error(ErrorEvent::new(ErrorType::Other, message));
    }

    fn send(&self, kind: DiagnosticEventKind) {
        log::log!(kind.log_level(), "{}", kind);
        // Non-blocking send - drop if channel is full
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Central collector storing the most recent diagnostic events.
///
/// Old events are evicted when the buffer reaches capacity.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
}

/// Default channel capacity for event buffering.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

impl DiagnosticsCollector {
    /// Creates a new diagnostics collector with the specified buffer capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every queued event from the channel into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Logs an action directly to the buffer (bypassing the channel).
    ///
    /// Use this from the main update loop where the collector is at hand.
    pub fn log_action(&mut self, action: UserAction) {
        let kind = DiagnosticEventKind::UserAction {
            action,
            details: None,
        };
        log::log!(kind.log_level(), "{}", kind);
        self.buffer.push(DiagnosticEvent::new(kind));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns an iterator over all stored events (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("len", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collector_new_creates_empty_buffer() {
        let collector = DiagnosticsCollector::new(BufferCapacity::new(100));
        assert!(collector.is_empty());
        assert_eq!(collector.capacity(), 100);
    }

    #[test]
    fn collector_log_action_stores_event() {
        let mut collector = DiagnosticsCollector::default();
        collector.log_action(UserAction::Search);

        assert_eq!(collector.len(), 1);
        let event = collector.iter().next().expect("event stored");
        assert!(matches!(
            event.kind,
            DiagnosticEventKind::UserAction {
                action: UserAction::Search,
                ..
            }
        ));
    }

    #[test]
    fn handle_events_arrive_after_process_pending() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_action(UserAction::RequestPage { page: 2 });
        handle.log_warning(WarningEvent::new(WarningType::StaleResponse, "request 1"));
        handle.log_error(ErrorEvent::new(ErrorType::FetchError, "timeout"));

        assert!(collector.is_empty());
        collector.process_pending();
        assert_eq!(collector.len(), 3);

        let kinds: Vec<_> = collector.iter().map(|event| event.kind.clone()).collect();
        assert!(matches!(kinds[0], DiagnosticEventKind::UserAction { .. }));
        assert!(matches!(kinds[1], DiagnosticEventKind::Warning { .. }));
        assert!(matches!(kinds[2], DiagnosticEventKind::Error { .. }));
    }

    #[test]
    fn simple_helpers_use_other_category() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_warning_simple("odd");
        handle.log_error_simple("bad");
        collector.process_pending();

        let kinds: Vec<_> = collector.iter().map(|event| event.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticEventKind::Warning {
                    event: WarningEvent::new(WarningType::Other, "odd"),
                },
                DiagnosticEventKind::Error {
                    event: ErrorEvent::new(ErrorType::Other, "bad"),
                },
            ]
        );
    }

    #[test]
    fn full_channel_drops_events_without_blocking() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        for _ in 0..(DEFAULT_CHANNEL_CAPACITY + 20) {
            handle.log_action(UserAction::Search);
        }
        collector.process_pending();

        assert_eq!(collector.len(), DEFAULT_CHANNEL_CAPACITY);
    }

    #[test]
    fn handle_is_clone() {
        let mut collector = DiagnosticsCollector::default();
        let first = collector.handle();
        let second = first.clone();

        first.log_action(UserAction::UploadLogo);
        second.log_action(UserAction::ExportComposite);
        collector.process_pending();

        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn collector_clear_removes_all_events() {
        let mut collector = DiagnosticsCollector::default();
        collector.log_action(UserAction::Search);
        collector.clear();
        assert!(collector.is_empty());
    }

    #[test]
    fn buffer_evicts_oldest_when_full() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(100));
        for page in 1..=150 {
            collector.log_action(UserAction::RequestPage { page });
        }

        assert_eq!(collector.len(), 100);
        let first = collector.iter().next().expect("event stored");
        assert!(matches!(
            first.kind,
            DiagnosticEventKind::UserAction {
                action: UserAction::RequestPage { page: 51 },
                ..
            }
        ));
    }
}
