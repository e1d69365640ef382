use crate::errors::TransportError;
use crate::net::{Completion, HttpRequest, Response, Transport};
use http::HeaderMap;
use std::sync::{Mutex, PoisonError};

/// What a [`CannedTransport`] answers with.
#[derive(Clone, Debug)]
pub enum CannedReply {
    /// Complete with a response carrying this status and body.
    Respond { status: u16, body: String },
    /// Complete with [`TransportError::NoResponse`].
    Fail,
}

/// Transport that never touches the network.
///
/// Every dispatched request is recorded and answered immediately, on the
/// dispatching thread, with the configured [`CannedReply`].
pub struct CannedTransport {
    reply: CannedReply,
    dispatched: Mutex<Vec<HttpRequest>>,
}

impl CannedTransport {
    pub fn new(reply: CannedReply) -> Self {
        Self {
            reply,
            dispatched: Mutex::new(Vec::new()),
        }
    }

    /// Answers every request with `status` and `body`.
    pub fn respond(status: u16, body: impl Into<String>) -> Self {
        Self::new(CannedReply::Respond {
            status,
            body: body.into(),
        })
    }

    /// Fails every request as if the host got no response.
    pub fn failing() -> Self {
        Self::new(CannedReply::Fail)
    }

    /// Snapshot of all requests dispatched so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.dispatched
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn reply_for(&self, request: &HttpRequest) -> Result<Response, TransportError> {
        match &self.reply {
            CannedReply::Fail => Err(TransportError::NoResponse),
            CannedReply::Respond { status, body } => {
                let url = url::Url::parse(request.url())
                    .map_err(|e| TransportError::Other(format!("invalid URL {}: {e}", request.url())))?;
                Ok(Response::new(url, *status, HeaderMap::new(), body.clone().into_bytes()))
            }
        }
    }
}

impl Transport for CannedTransport {
    fn name(&self) -> &str {
        "CannedTransport"
    }

    fn dispatch(&self, request: HttpRequest, on_complete: Completion) {
        let result = self.reply_for(&request);

        self.dispatched
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        on_complete(result);
    }
}
