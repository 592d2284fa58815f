//! The `/api` image proxy handler.
//!
//! One linear pass per invocation: extract the target URL, decode and
//! validate it, forge browser headers, perform a single upstream fetch, then
//! relay the bytes or emit a structured error. No state survives the
//! request.

use std::time::Instant;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, Uri};
use axum::response::{IntoResponse, Response};
use percent_encoding::percent_decode_str;
use url::{form_urlencoded, Url};

use crate::http::error::ProxyError;
use crate::http::response::{relay_image, DEFAULT_CONTENT_TYPE};
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::upstream;

/// Entry point for `/api`.
///
/// Registered for any method: OPTIONS flows through the same path and picks
/// up the same CORS headers as GET.
pub async fn proxy_image(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();

    let response = match handle(&state, request.uri()).await {
        Ok(response) => response,
        Err(err) => {
            tracing::error!(error = %err, "Image proxy request failed");
            err.into_response()
        }
    };

    metrics::record_request(&method, response.status().as_u16(), start);
    response
}

async fn handle(state: &AppState, uri: &Uri) -> Result<Response, ProxyError> {
    // 1. Extract the target URL from the query.
    let raw = extract_target_url(uri).ok_or(ProxyError::MissingUrl)?;

    // 2. Decode and validate before touching the network.
    let (target_url, target) = decode_and_parse(&raw)?;

    tracing::debug!(target = %target_url, "Proxying image request");

    // 3. Forge browser headers; the Referer matches the target's own origin.
    let origin = upstream::origin_of(&target);
    let headers = upstream::browser_headers(&origin)
        .map_err(|e| ProxyError::internal(e, state.development))?;

    // 4. Single outbound fetch, redirects followed transparently.
    let upstream_response = upstream::fetch(&state.client, &target, headers)
        .await
        .map_err(|e| ProxyError::internal(e, state.development))?;

    // 5. Mirror upstream failure statuses without reading the body.
    let status = upstream_response.status();
    if !status.is_success() {
        return Err(ProxyError::Upstream {
            status,
            status_text: status.canonical_reason().unwrap_or("").to_string(),
            target_url,
        });
    }

    // 6. Buffer the whole payload and relay it with CORS + cache headers.
    let content_type = upstream_response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_string();

    let body = upstream_response
        .bytes()
        .await
        .map_err(|e| ProxyError::internal(e, state.development))?;

    tracing::debug!(
        target = %target_url,
        bytes = body.len(),
        content_type = %content_type,
        "Relaying image"
    );

    Ok(relay_image(&content_type, body))
}

/// Pull the target URL out of the request.
///
/// The parsed query map is consulted first; if that yields nothing, the raw
/// URI string is split by hand. Some hosting environments do not populate a
/// parsed query map uniformly, so both paths are kept.
fn extract_target_url(uri: &Uri) -> Option<String> {
    if let Some(value) = uri.query().and_then(from_query_map) {
        return Some(value);
    }
    from_raw_split(&uri.to_string())
}

fn from_query_map(query: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "url")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Fallback extraction: split on the literal `?url=` and cut at the next
/// `&`. Fragile when the target itself contains `?url=`; kept as-is for
/// compatibility across hosting environments.
fn from_raw_split(raw: &str) -> Option<String> {
    raw.split_once("?url=")
        .and_then(|(_, rest)| rest.split('&').next())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Percent-decode the extracted value and parse it as an absolute URL.
///
/// Returns both the decoded string (reported back to callers verbatim) and
/// the parsed form. The decode runs on top of whatever the query parser
/// already undid, so doubly-encoded targets come out clean.
fn decode_and_parse(raw: &str) -> Result<(String, Url), ProxyError> {
    let invalid = || ProxyError::InvalidUrl {
        provided: raw.to_string(),
    };

    let decoded = percent_decode_str(raw)
        .decode_utf8()
        .map_err(|_| invalid())?
        .into_owned();

    let target = Url::parse(&decoded).map_err(|_| invalid())?;

    // Scheme-only URLs (mailto:, data:) have no host to forge a Referer for.
    if target.host_str().is_none() {
        return Err(invalid());
    }

    Ok((decoded, target))
}
