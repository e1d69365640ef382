use crate::events::ApiEvent;
use std::backtrace::Backtrace;
use tokio::sync::broadcast;

/// Debug-only error sink shared by a client and the handles it creates.
///
/// Handles get a copy at creation time, so toggling debug mode on the client
/// only affects requests created afterwards.
#[derive(Clone, Debug)]
pub(crate) struct ErrorReporter {
    debug: bool,
    event_tx: broadcast::Sender<ApiEvent>,
}

impl ErrorReporter {
    pub fn new(debug: bool, event_tx: broadcast::Sender<ApiEvent>) -> Self {
        Self { debug, event_tx }
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// Surfaces `message` on every debug sink: a warning log line, a stack
    /// trace at error level and a [`ApiEvent::DebugMessage`] for on-screen
    /// display. Does nothing outside debug mode.
    pub fn report(&self, message: &str) {
        if !self.debug {
            return;
        }

        log::warn!("{message}");
        log::error!("stack backtrace:\n{}", Backtrace::force_capture());
        self.publish(ApiEvent::DebugMessage {
            message: message.to_string(),
        });
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ApiEvent> {
        self.event_tx.subscribe()
    }

    /// Sends an event; having no subscribers is not an error.
    pub fn publish(&self, event: ApiEvent) {
        let _ = self.event_tx.send(event);
    }
}
