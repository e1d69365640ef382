/// Errors reported by a [`Transport`](crate::net::Transport) when a request
/// could not produce a response.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error(transparent)]
    Net(#[from] reqwest::Error),

    #[error("no response received")]
    NoResponse,

    #[error("transport error: {0}")]
    Other(String),
}

/// Why a request did not yield a typed value.
///
/// Only surfaced through [`RequestHandle::then_result`](crate::RequestHandle::then_result);
/// [`RequestHandle::then`](crate::RequestHandle::then) drops these.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("request failed: {0}")]
    Transport(#[from] TransportError),

    #[error("cannot convert response body: {0}")]
    Deserialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_display() {
        assert_eq!(TransportError::NoResponse.to_string(), "no response received");
        assert_eq!(
            TransportError::Other("host shut down".into()).to_string(),
            "transport error: host shut down"
        );
    }

    #[test]
    fn request_error_wraps_sources() {
        let err: RequestError = TransportError::NoResponse.into();
        assert_eq!(err.to_string(), "request failed: no response received");

        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: RequestError = json_err.into();
        assert!(matches!(err, RequestError::Deserialize(_)));
        assert!(err.to_string().starts_with("cannot convert response body:"));
    }
}
