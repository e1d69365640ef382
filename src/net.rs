//! Request/response model and the host transport seam.

mod fetch;
mod header;
mod request;
mod response;
mod transport;
mod verb;

pub mod transports;

pub use header::Header;
pub use request::HttpRequest;
pub use response::Response;
pub use transport::{Completion, Transport, TransportHandle};
pub use verb::{ParseVerbError, Verb};

pub(crate) use fetch::fetch;
