//! Single-use request handles.
//!
//! A [`RequestHandle`] wraps exactly one request/response cycle:
//!
//! ```text
//! Created --run()--> Dispatched --+--> valid JSON ------------> continuation(Ok(value))
//!                                 +--> transport failure -----> dropped / continuation(Err)
//!                                 +--> JSON failure ----------> dropped / continuation(Err)
//! ```
//!
//! `run` and `run_with` consume the handle, so a request can never be sent
//! twice. Failures are always logged through the client's debug sink and
//! published as [`ApiEvent::RequestDropped`]; whether the caller sees them
//! depends on the continuation: [`then`](RequestHandle::then) only fires on
//! success, [`then_result`](RequestHandle::then_result) fires either way.

use crate::debug::ErrorReporter;
use crate::errors::{RequestError, TransportError};
use crate::events::{ApiEvent, RequestId};
use crate::net::{HttpRequest, Response, TransportHandle};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

type Continuation<R> = Box<dyn FnOnce(Result<R, RequestError>) + Send + 'static>;

/// One in-flight request, typed by its response `R` and payload `P`.
pub struct RequestHandle<R, P = R> {
    id: RequestId,
    request: HttpRequest,
    transport: TransportHandle,
    reporter: ErrorReporter,
    continuation: Option<Continuation<R>>,
    _payload: PhantomData<fn(&P)>,
}

impl<R, P> std::fmt::Debug for RequestHandle<R, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestHandle")
            .field("id", &self.id)
            .field("request", &self.request)
            .field("transport", &self.transport.name())
            .field("continuation", &self.continuation.is_some())
            .finish()
    }
}

impl<R, P> RequestHandle<R, P> {
    pub(crate) fn new(request: HttpRequest, transport: TransportHandle, reporter: ErrorReporter) -> Self {
        Self {
            id: RequestId::new(),
            request,
            transport,
            reporter,
            continuation: None,
            _payload: PhantomData,
        }
    }

    pub fn id(&self) -> RequestId {
        self.id
    }

    /// The request as it will be dispatched.
    pub fn request(&self) -> &HttpRequest {
        &self.request
    }

    /// Registers the callback invoked with the decoded response.
    ///
    /// The callback runs at most once, and only when the transport produced a
    /// response whose body decodes into `R`. Registering again replaces the
    /// previous continuation.
    pub fn then<F>(self, on_json_converted: F) -> Self
    where
        F: FnOnce(R) + Send + 'static,
    {
        self.then_result(move |result| {
            if let Ok(value) = result {
                on_json_converted(value);
            }
        })
    }

    /// Like [`then`](Self::then), but the callback also receives failures.
    pub fn then_result<F>(mut self, on_complete: F) -> Self
    where
        F: FnOnce(Result<R, RequestError>) + Send + 'static,
    {
        self.continuation = Some(Box::new(on_complete));
        self
    }
}

impl<R, P> RequestHandle<R, P>
where
    R: DeserializeOwned + Send + 'static,
{
    /// Dispatches the request as built. Returns immediately; the continuation
    /// runs on whatever thread the transport completes on.
    pub fn run(self) {
        let Self {
            id,
            request,
            transport,
            reporter,
            continuation,
            ..
        } = self;

        log::debug!("[{id}] {} {} via {}", request.verb(), request.url(), transport.name());
        reporter.publish(ApiEvent::RequestDispatched {
            request_id: id,
            verb: request.verb(),
            url: request.url().to_string(),
        });

        transport.dispatch(
            request,
            Box::new(move |result| complete(id, &reporter, result, continuation)),
        );
    }

    /// Serializes `payload` as the body and dispatches. A payload that fails
    /// to serialize is skipped and the request goes out with whatever body it
    /// already had.
    pub fn run_with(mut self, payload: &P)
    where
        P: Serialize,
    {
        match serde_json::to_string(payload) {
            Ok(body) => self.request.set_content_as_string(body),
            Err(e) => log::debug!("[{}] payload not serialized, sending without it: {e}", self.id),
        }
        self.run();
    }
}

fn complete<R: DeserializeOwned>(
    id: RequestId,
    reporter: &ErrorReporter,
    result: Result<Response, TransportError>,
    continuation: Option<Continuation<R>>,
) {
    let outcome = match result {
        Ok(response) => {
            reporter.publish(ApiEvent::RequestCompleted {
                request_id: id,
                status: response.status,
            });
            decode::<R>(&response)
        }
        Err(e) => Err(RequestError::Transport(e)),
    };

    if let Err(e) = &outcome {
        let reason = e.to_string();
        reporter.report(&format!("request {id} dropped: {reason}"));
        reporter.publish(ApiEvent::RequestDropped {
            request_id: id,
            reason,
        });
    }

    match continuation {
        Some(continuation) => continuation(outcome),
        None => log::debug!("[{id}] completed without a continuation"),
    }
}

/// Decodes the body regardless of status code.
fn decode<R: DeserializeOwned>(response: &Response) -> Result<R, RequestError> {
    Ok(serde_json::from_slice(&response.body)?)
}
