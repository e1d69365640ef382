//! Bundled [`Transport`](crate::net::Transport) implementations.

mod canned;
mod reqwest_transport;

pub use canned::{CannedReply, CannedTransport};
pub use reqwest_transport::ReqwestTransport;
