use reqwest::header::{CONTENT_TYPE, HeaderValue};
use std::time::{Duration, Instant};

use super::error::RequestError;
use super::request::PreparedRequest;
use super::response::{NormalizedResponse, RawResponse, normalize};

/// Performs exactly one outbound call and normalizes whatever comes back.
///
/// HTTP error statuses still produce `Ok`; only transport problems are `Err`.
pub async fn send_request(request: PreparedRequest) -> Result<NormalizedResponse, RequestError> {
    let client = reqwest::Client::new();
    let outbound = build_request(&client, &request)?;

    tracing::info!(method = %request.method, url = %request.url, "sending request");

    let started = Instant::now();
    let response = client
        .execute(outbound)
        .await
        .map_err(|e| RequestError::transport(&e))?;

    let status = response.status();
    let headers = collect_headers(response.headers());
    let body = response
        .bytes()
        .await
        .map_err(|e| RequestError::ReadBody(e.to_string()))?;
    let elapsed_ms = elapsed_millis(started.elapsed());

    tracing::debug!(status = status.as_u16(), elapsed_ms, bytes = body.len(), "response received");

    Ok(normalize(RawResponse {
        http_status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
        headers,
        body: body.to_vec(),
        elapsed_ms,
    }))
}

pub fn build_request(
    client: &reqwest::Client,
    request: &PreparedRequest,
) -> Result<reqwest::Request, RequestError> {
    let url = reqwest::Url::parse(&request.url).map_err(|e| RequestError::InvalidUrl(e.to_string()))?;
    let mut builder = client.request(request.method.into(), url);

    if let Some(body) = &request.body {
        builder = builder
            .header(CONTENT_TYPE, HeaderValue::from_static(body.content_type))
            .body(body.text.clone());
    }

    builder.build().map_err(|e| RequestError::InvalidUrl(e.to_string()))
}

/// Whole milliseconds, rounded to nearest.
fn elapsed_millis(elapsed: Duration) -> u64 {
    (elapsed.as_secs_f64() * 1000.0).round() as u64
}

fn collect_headers(headers: &reqwest::header::HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let value = value.to_str().unwrap_or("<binary>");
            (name.to_string(), value.to_string())
        })
        .collect()
}
