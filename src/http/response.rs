//! Success-path response envelope.
//!
//! The relayed image goes back with permissive CORS headers so any page can
//! embed it, plus long-lived cache headers so browsers and CDN edges reuse
//! the bytes instead of hitting the proxy again.

use axum::body::Bytes;
use axum::http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

/// Fallback when the upstream omits Content-Type.
pub const DEFAULT_CONTENT_TYPE: &str = "image/jpeg";

/// Browser/shared cache policy: one day fresh, half a day stale-while-revalidate.
pub const CACHE_POLICY: &str =
    "public, max-age=86400, s-maxage=86400, stale-while-revalidate=43200";

/// Cache-control variant interpreted by CDN edge layers.
pub const CDN_CACHE_CONTROL: HeaderName = HeaderName::from_static("cdn-cache-control");

/// Edge cache policy value.
pub const CDN_CACHE_POLICY: &str = "public, max-age=86400";

/// Build the 200 relay response around the buffered image bytes.
pub fn relay_image(content_type: &str, body: Bytes) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers.insert(
        header::CONTENT_TYPE,
        content_type
            .parse()
            .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_CONTENT_TYPE)),
    );
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(CACHE_POLICY));
    headers.insert(CDN_CACHE_CONTROL, HeaderValue::from_static(CDN_CACHE_POLICY));
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(body.len()));

    (StatusCode::OK, headers, body).into_response()
}
