//! Client configuration.
//!
//! `ClientConfig` controls the initial state of a [`RestApi`](crate::RestApi):
//! base URL, the headers every request starts with, debug mode and the
//! capacity of the event channel.
//!
//! # Examples
//!
//! ```rust
//! use rest_api_helper::ClientConfig;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = ClientConfig::builder()
//!     .base_url("https://api.example.com/v1")
//!     .default_header("Accept", "application/json")
//!     .debug(false)
//!     .build()?;
//! assert_eq!(cfg.initial_headers().len(), 2); // user agent + accept
//! # Ok(()) }
//! ```
//!
//! # Errors
//!
//! The builder rejects header names or values that cannot go on the wire
//! and a zero event capacity. Headers added later through
//! [`RestApi::add_default_header`](crate::RestApi::add_default_header) are
//! not validated.

use crate::net::Header;
use crate::DEFAULT_CHANNEL_CAPACITY;
use std::fmt;

/// User agent sent by every client unless configured otherwise.
pub const DEFAULT_USER_AGENT: &str = "X-RestApiHelper-Agent";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Prefix for every request path. Concatenated as-is.
    pub base_url: String,
    /// Sent as the first default header when set.
    pub user_agent: Option<String>,
    /// Further default headers, in the order they are sent.
    pub default_headers: Vec<Header>,
    /// Surface errors to the log and event channel.
    pub debug: bool,
    /// Buffer size of the [`ApiEvent`](crate::ApiEvent) broadcast channel.
    pub event_capacity: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            user_agent: Some(DEFAULT_USER_AGENT.to_string()),
            default_headers: Vec::new(),
            debug: true,
            event_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// The default header list a client starts with: user agent first, then
    /// `default_headers` in order.
    pub fn initial_headers(&self) -> Vec<Header> {
        let mut headers = Vec::with_capacity(self.default_headers.len() + 1);
        if let Some(ua) = &self.user_agent {
            headers.push(Header::new("User-Agent", ua.clone()));
        }
        headers.extend(self.default_headers.iter().cloned());
        headers
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    inner: ClientConfig,
}

impl ClientConfigBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut ClientConfig)) -> Self {
        f(&mut self.inner);
        self
    }

    pub fn base_url<S: Into<String>>(self, url: S) -> Self { self.map(|c| c.base_url = url.into()) }
    pub fn user_agent<S: Into<String>>(self, ua: S) -> Self { self.map(|c| c.user_agent = Some(ua.into())) }
    pub fn no_user_agent(self) -> Self { self.map(|c| c.user_agent = None) }
    pub fn debug(self, on: bool) -> Self { self.map(|c| c.debug = on) }
    pub fn event_capacity(self, n: usize) -> Self { self.map(|c| c.event_capacity = n) }

    pub fn default_header<N: Into<String>, V: Into<String>>(self, name: N, value: V) -> Self {
        self.map(|c| c.default_headers.push(Header::new(name, value)))
    }

    /// Apply multiple changes in one go.
    pub fn with(self, f: impl FnOnce(&mut ClientConfig)) -> Self { self.map(f) }

    /// Validate and build the final config.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        validate(&self.inner)?;
        Ok(self.inner)
    }
}

// ---------- Validation ----------

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidHeaderName(String),
    InvalidHeaderValue { name: String },
    ZeroEventCapacity,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidHeaderName(name) =>
                write!(f, "invalid header name {name:?}"),
            ConfigError::InvalidHeaderValue { name } =>
                write!(f, "invalid value for header {name:?}"),
            ConfigError::ZeroEventCapacity =>
                write!(f, "event_capacity must be at least 1"),
        }
    }
}
impl std::error::Error for ConfigError {}

fn validate(c: &ClientConfig) -> Result<(), ConfigError> {
    for header in c.initial_headers() {
        if http::HeaderName::from_bytes(header.name.as_bytes()).is_err() {
            return Err(ConfigError::InvalidHeaderName(header.name));
        }
        if http::HeaderValue::from_str(&header.value).is_err() {
            return Err(ConfigError::InvalidHeaderValue { name: header.name });
        }
    }
    if c.event_capacity == 0 {
        return Err(ConfigError::ZeroEventCapacity);
    }
    Ok(())
}
