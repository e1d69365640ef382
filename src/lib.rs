//! Typed JSON-over-HTTP requests for host engines.
//!
//! A [`RestApi`] holds a base URL and a list of default headers. Every call to
//! [`RestApi::create_request`] snapshots those into a single-use
//! [`RequestHandle`], which serializes an optional payload, hands the request
//! to the host's [`Transport`](net::Transport) and, once the transport
//! completes, deserializes the JSON body and invokes the registered callback.
//!
//! ```no_run
//! use rest_api_helper::{RestApi, Verb};
//! use rest_api_helper::net::transports::ReqwestTransport;
//! use serde::{Deserialize, Serialize};
//! use std::sync::Arc;
//!
//! #[derive(Debug, Serialize, Deserialize)]
//! struct Player { id: u32, name: String }
//!
//! # fn main() -> anyhow::Result<()> {
//! let transport = Arc::new(ReqwestTransport::new()?);
//! let mut api = RestApi::new(transport);
//! api.set_base_url("https://game.example.com/api");
//! api.add_default_header("Accept", "application/json");
//!
//! api.create_request::<Player, Player>(Verb::Get, "/players/1", None)
//!     .then(|player| println!("loaded {}", player.name))
//!     .run();
//! # Ok(()) }
//! ```

pub mod client;
pub mod config;
pub mod errors;
pub mod events;
pub mod handle;
pub mod net;

mod debug;

pub use client::RestApi;
pub use config::{ClientConfig, ConfigError};
pub use errors::{RequestError, TransportError};
pub use events::{ApiEvent, RequestId};
pub use handle::RequestHandle;
pub use net::{Header, HttpRequest, Response, Verb};

/// Capacity of the broadcast channel used for [`ApiEvent`]s.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 128;
