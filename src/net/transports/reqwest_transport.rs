use crate::net::{fetch, Completion, HttpRequest, Transport};
use anyhow::Result;
use std::sync::Arc;
use tokio::runtime::{Handle, Runtime};

/// Transport backed by `reqwest`, running requests on a tokio runtime.
///
/// The runtime is either owned by the transport ([`ReqwestTransport::new`]) or
/// borrowed from the host ([`ReqwestTransport::with_handle`]). An owned runtime
/// must not be dropped from inside an async context; hosts that already run
/// tokio should hand in their own handle instead.
pub struct ReqwestTransport {
    client: reqwest::Client,
    handle: Handle,
    /// Keeps an owned runtime alive for as long as the transport lives.
    _runtime: Option<Arc<Runtime>>,
}

impl ReqwestTransport {
    /// Creates a transport with its own multi-threaded runtime.
    pub fn new() -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .thread_name("rest-api-io")
            .enable_all()
            .build()?;

        Ok(Self {
            client: reqwest::Client::new(),
            handle: runtime.handle().clone(),
            _runtime: Some(Arc::new(runtime)),
        })
    }

    /// Creates a transport that spawns onto an existing runtime.
    pub fn with_handle(handle: Handle) -> Self {
        Self::with_client(reqwest::Client::new(), handle)
    }

    /// Same as [`with_handle`](Self::with_handle) but with a preconfigured client
    /// (proxies, timeouts, TLS roots...).
    pub fn with_client(client: reqwest::Client, handle: Handle) -> Self {
        Self {
            client,
            handle,
            _runtime: None,
        }
    }
}

impl Transport for ReqwestTransport {
    fn name(&self) -> &str {
        "ReqwestTransport"
    }

    fn dispatch(&self, request: HttpRequest, on_complete: Completion) {
        let client = self.client.clone();

        self.handle.spawn(async move {
            let verb = request.verb();
            let url = request.url().to_string();

            let result = fetch(&client, request).await;
            match &result {
                Ok(resp) => log::debug!("{verb} {url} -> {}", resp.status),
                Err(e) => log::debug!("{verb} {url} failed: {e}"),
            }

            on_complete(result);
        });
    }
}
