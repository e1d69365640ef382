use crate::errors::TransportError;
use crate::net::{HttpRequest, Response};

// Sends a request and returns the fully buffered response
pub async fn fetch(client: &reqwest::Client, request: HttpRequest) -> Result<Response, TransportError> {
    let mut builder = client.request(request.verb().into(), request.url());

    for header in request.headers() {
        builder = builder.header(header.name.as_str(), header.value.as_str());
    }

    if let Some(body) = request.body() {
        builder = builder.body(body.to_string());
    }

    let res = builder.send().await?;

    // Fetch results
    let final_url = res.url().clone();
    let status = res.status().as_u16();
    let headers = res.headers().clone();

    // Fetch body. We don't do streaming
    let body = res.bytes().await?.to_vec();

    Ok(Response::new(final_url, status, headers, body))
}
