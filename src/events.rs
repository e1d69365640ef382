//! Events published by a [`RestApi`](crate::RestApi).
//!
//! Hosts subscribe through [`RestApi::subscribe_events`](crate::RestApi::subscribe_events)
//! and receive a copy of every event sent after subscribing. Events are
//! informational; nothing in the request pipeline waits for a subscriber.
//!
//! - [`ApiEvent::RequestDispatched`]: a handle was run and handed to the transport.
//! - [`ApiEvent::RequestCompleted`]: the transport produced a response.
//! - [`ApiEvent::RequestDropped`]: the callback will not run (transport or JSON failure).
//! - [`ApiEvent::DebugMessage`]: an error message for on-screen display, only sent in debug mode.

use crate::net::Verb;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// A unique identifier for a single request handle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for RequestId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiEvent {
    RequestDispatched {
        request_id: RequestId,
        verb: Verb,
        url: String,
    },
    RequestCompleted {
        request_id: RequestId,
        status: u16,
    },
    RequestDropped {
        request_id: RequestId,
        reason: String,
    },
    DebugMessage {
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_ids_are_unique() {
        let a = RequestId::new();
        let b = RequestId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn request_id_displays_uuid() {
        let uuid = Uuid::new_v4();
        assert_eq!(RequestId::from(uuid).to_string(), uuid.to_string());
    }
}
