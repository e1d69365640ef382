use crate::errors::TransportError;
use crate::net::{HttpRequest, Response};
use std::sync::Arc;

/// Continuation a transport calls exactly once when a request finishes.
pub type Completion = Box<dyn FnOnce(Result<Response, TransportError>) + Send + 'static>;

/// Shared handle to a transport, cloned into every request handle.
pub type TransportHandle = Arc<dyn Transport>;

/// The host's HTTP subsystem.
///
/// Implementations own the I/O: `dispatch` must return without waiting for
/// the network and must invoke `on_complete` exactly once, from whatever
/// thread the transport finishes on.
pub trait Transport: Send + Sync {
    /// Human readable name, used in logs.
    fn name(&self) -> &str;

    /// Starts the request and arranges for `on_complete` to be called.
    fn dispatch(&self, request: HttpRequest, on_complete: Completion);
}
