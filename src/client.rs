//! The REST client.
//!
//! [`RestApi`] is a plain value: clone it to hand copies to other systems.
//! Clones share the transport and the event channel but own their base URL,
//! default headers and debug flag.

use crate::config::ClientConfig;
use crate::debug::ErrorReporter;
use crate::events::ApiEvent;
use crate::handle::RequestHandle;
use crate::net::{Header, HttpRequest, TransportHandle, Verb};
use serde::Serialize;
use tokio::sync::broadcast;

#[derive(Clone)]
pub struct RestApi {
    /// Prefix for every request path
    base_url: String,
    /// Headers copied onto every new request, in order
    default_headers: Vec<Header>,
    /// Host HTTP subsystem
    transport: TransportHandle,
    /// Debug sink and event sender
    reporter: ErrorReporter,
}

impl std::fmt::Debug for RestApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestApi")
            .field("base_url", &self.base_url)
            .field("default_headers", &self.default_headers)
            .field("transport", &self.transport.name())
            .field("debug", &self.reporter.is_debug())
            .finish()
    }
}

impl RestApi {
    /// Creates a client with [`ClientConfig::default`]: empty base URL, debug
    /// mode on and a `User-Agent` default header.
    pub fn new(transport: TransportHandle) -> Self {
        Self::with_config(ClientConfig::default(), transport)
    }

    pub fn with_config(config: ClientConfig, transport: TransportHandle) -> Self {
        let (event_tx, _first_rx) = broadcast::channel::<ApiEvent>(config.event_capacity.max(1));
        let default_headers = config.initial_headers();

        Self {
            base_url: config.base_url,
            default_headers,
            transport,
            reporter: ErrorReporter::new(config.debug, event_tx),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replaces the base URL. No validation is done; the value is prepended
    /// verbatim to request paths.
    pub fn set_base_url(&mut self, url: impl Into<String>) {
        self.base_url = url.into();
    }

    pub fn default_headers(&self) -> &[Header] {
        &self.default_headers
    }

    /// Appends a header sent with every request created from now on.
    pub fn add_default_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.default_headers.push(Header::new(name, value));
    }

    pub fn is_debug(&self) -> bool {
        self.reporter.is_debug()
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.reporter.set_debug(debug);
    }

    pub fn transport_name(&self) -> &str {
        self.transport.name()
    }

    /// Receive [`ApiEvent`]s sent from this point on.
    pub fn subscribe_events(&self) -> broadcast::Receiver<ApiEvent> {
        self.reporter.subscribe()
    }

    /// Debug-only error output. In debug mode the message is logged as a
    /// warning together with a stack trace and published as
    /// [`ApiEvent::DebugMessage`]; otherwise nothing happens.
    pub fn on_error(&self, message: &str) {
        self.reporter.report(message);
    }

    /// Builds a request for `base_url + path`.
    ///
    /// All default headers are copied onto the request. A payload is only
    /// serialized for POST and PUT; if serialization fails the body stays
    /// empty and the request is still returned.
    pub fn create_request<R, P>(&self, verb: Verb, path: &str, payload: Option<&P>) -> RequestHandle<R, P>
    where
        P: Serialize,
    {
        let mut request = HttpRequest::new();
        request.set_url(format!("{}{}", self.base_url, path));
        request.set_verb(verb);

        for header in &self.default_headers {
            request.set_header(header.name.clone(), header.value.clone());
        }

        if let Some(payload) = payload.filter(|_| verb.carries_body()) {
            match serde_json::to_string(payload) {
                Ok(body) => request.set_content_as_string(body),
                Err(e) => log::debug!("{verb} {}: payload not serialized: {e}", request.url()),
            }
        }

        RequestHandle::new(request, self.transport.clone(), self.reporter.clone())
    }

    pub fn get<R>(&self, path: &str) -> RequestHandle<R, ()> {
        self.create_request(Verb::Get, path, None)
    }

    pub fn delete<R>(&self, path: &str) -> RequestHandle<R, ()> {
        self.create_request(Verb::Delete, path, None)
    }

    pub fn post<R, P: Serialize>(&self, path: &str, payload: &P) -> RequestHandle<R, P> {
        self.create_request(Verb::Post, path, Some(payload))
    }

    pub fn put<R, P: Serialize>(&self, path: &str, payload: &P) -> RequestHandle<R, P> {
        self.create_request(Verb::Put, path, Some(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_USER_AGENT;
    use crate::net::transports::CannedTransport;
    use serde::Deserialize;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Item {
        id: u32,
        name: String,
    }

    fn item() -> Item {
        Item { id: 3, name: "sword".into() }
    }

    fn api(transport: Arc<CannedTransport>) -> RestApi {
        let mut api = RestApi::new(transport);
        api.set_base_url("http://localhost:8080/api");
        api
    }

    #[test]
    fn new_client_has_user_agent_and_debug() {
        let api = RestApi::new(Arc::new(CannedTransport::failing()));
        assert!(api.is_debug());
        assert_eq!(api.base_url(), "");
        assert_eq!(api.default_headers(), &[Header::new("User-Agent", DEFAULT_USER_AGENT)]);
        assert_eq!(api.transport_name(), "CannedTransport");
    }

    #[test]
    fn url_is_base_plus_path() {
        let api = api(Arc::new(CannedTransport::failing()));
        let h = api.create_request::<Item, Item>(Verb::Get, "/items/3", None);
        assert_eq!(h.request().url(), "http://localhost:8080/api/items/3");

        // plain concatenation, no slash fixing
        let h = api.get::<Item>("items");
        assert_eq!(h.request().url(), "http://localhost:8080/apiitems");
    }

    #[test]
    fn set_base_url_replaces_previous() {
        let mut api = api(Arc::new(CannedTransport::failing()));
        api.set_base_url("https://other.test");
        assert_eq!(api.get::<Item>("/x").request().url(), "https://other.test/x");
    }

    #[test]
    fn default_headers_copied_in_order() {
        let mut api = api(Arc::new(CannedTransport::failing()));
        api.add_default_header("Accept", "application/json");
        api.add_default_header("X-Session", "s1");
        api.add_default_header("X-Build", "42");

        let h = api.get::<Item>("/items");
        let names: Vec<_> = h.request().headers().iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["User-Agent", "Accept", "X-Session", "X-Build"]);
        assert_eq!(h.request().header("x-session"), Some("s1"));
    }

    #[test]
    fn headers_added_later_do_not_touch_existing_handles() {
        let mut api = api(Arc::new(CannedTransport::failing()));
        let before = api.get::<Item>("/a");
        api.add_default_header("X-Late", "1");
        let after = api.get::<Item>("/a");

        assert!(before.request().header("X-Late").is_none());
        assert_eq!(after.request().header("X-Late"), Some("1"));
    }

    #[test]
    fn only_post_and_put_serialize_payload() {
        let api = api(Arc::new(CannedTransport::failing()));
        let payload = item();

        for verb in [Verb::Get, Verb::Delete] {
            let h = api.create_request::<Item, Item>(verb, "/items/3", Some(&payload));
            assert!(h.request().body().is_none(), "{verb} must not carry a body");
        }

        for verb in [Verb::Post, Verb::Put] {
            let h = api.create_request::<Item, Item>(verb, "/items/3", Some(&payload));
            let body: Item = serde_json::from_str(h.request().body().unwrap()).unwrap();
            assert_eq!(body, payload);
        }

        let h = api.create_request::<Item, Item>(Verb::Post, "/items", None);
        assert!(h.request().body().is_none());
    }

    #[test]
    fn unserializable_payload_leaves_body_unset() {
        let api = api(Arc::new(CannedTransport::failing()));
        let mut payload = std::collections::HashMap::new();
        payload.insert(vec![1u8], 1u8);

        let h = api.post::<Item, _>("/items", &payload);
        assert_eq!(h.request().verb(), Verb::Post);
        assert!(h.request().body().is_none());
    }

    #[test]
    fn post_round_trip_through_transport() {
        let transport = Arc::new(CannedTransport::respond(201, r#"{"id":9,"name":"shield"}"#));
        let api = api(transport.clone());

        let created = Arc::new(Mutex::new(None));
        let c = created.clone();
        api.post::<Item, _>("/items", &Item { id: 0, name: "shield".into() })
            .then(move |item| *c.lock().unwrap() = Some(item))
            .run();

        assert_eq!(*created.lock().unwrap(), Some(Item { id: 9, name: "shield".into() }));

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].verb(), Verb::Post);
        assert_eq!(sent[0].url(), "http://localhost:8080/api/items");
        assert_eq!(sent[0].body(), Some(r#"{"id":0,"name":"shield"}"#));
    }

    #[test]
    fn failed_request_never_calls_back() {
        let api = api(Arc::new(CannedTransport::failing()));
        let calls = Arc::new(AtomicUsize::new(0));
        let c = calls.clone();

        api.delete::<Item>("/items/3")
            .then(move |_| {
                c.fetch_add(1, Ordering::SeqCst);
            })
            .run();

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn on_error_respects_debug_flag() {
        let mut api = api(Arc::new(CannedTransport::failing()));
        let mut rx = api.subscribe_events();

        api.on_error("Api Error");
        assert_eq!(
            rx.try_recv().unwrap(),
            ApiEvent::DebugMessage { message: "Api Error".into() }
        );

        api.set_debug(false);
        api.on_error("Api Error");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn debug_flag_is_snapshotted_per_handle() {
        let mut api = api(Arc::new(CannedTransport::failing()));
        api.set_debug(false);
        let quiet = api.get::<Item>("/a");
        api.set_debug(true);

        let mut rx = api.subscribe_events();
        quiet.run();

        let got_debug = std::iter::from_fn(|| rx.try_recv().ok())
            .any(|e| matches!(e, ApiEvent::DebugMessage { .. }));
        assert!(!got_debug);
    }

    #[test]
    fn with_config_applies_settings() {
        let cfg = ClientConfig::builder()
            .base_url("http://cfg.test")
            .no_user_agent()
            .default_header("Accept", "application/json")
            .debug(false)
            .build()
            .unwrap();
        let api = RestApi::with_config(cfg, Arc::new(CannedTransport::failing()));

        assert_eq!(api.base_url(), "http://cfg.test");
        assert!(!api.is_debug());
        assert_eq!(api.default_headers(), &[Header::new("Accept", "application/json")]);
    }
}
