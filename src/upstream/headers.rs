//! Forged browser headers for the upstream fetch.
//!
//! Hotlink protection rejects image requests whose `Referer` does not match
//! an allowed origin, so every outbound request carries a `Referer`
//! synthesized from the target URL's own origin. The rest of the set mimics
//! a desktop Chrome loading an `<img>` and is identical for every call.

use reqwest::header::{self, HeaderMap, HeaderValue, InvalidHeaderValue};
use url::Url;

/// Desktop Chrome user agent.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Image-first Accept line, as Chrome sends for `<img>` loads.
pub const ACCEPT: &str = "image/avif,image/webp,image/apng,image/svg+xml,image/*,*/*;q=0.8";

/// Accept-Language sent upstream.
pub const ACCEPT_LANGUAGE: &str = "zh-CN,zh;q=0.9,en;q=0.8";

/// Accept-Encoding sent upstream, verbatim. The client performs no
/// transparent decompression, so the relayed body stays byte-identical.
pub const ACCEPT_ENCODING: &str = "gzip, deflate, br";

/// Origin (scheme + host + explicit port) of the target URL.
///
/// The port appears only when the URL spells it out, matching how a browser
/// renders an origin.
pub fn origin_of(target: &Url) -> String {
    let scheme = target.scheme();
    let host = target.host_str().unwrap_or_default();
    match target.port() {
        Some(port) => format!("{scheme}://{host}:{port}"),
        None => format!("{scheme}://{host}"),
    }
}

/// Build the fixed outbound header set.
///
/// Only the `Referer` varies per target: it is the target's origin plus a
/// trailing slash.
pub fn browser_headers(origin: &str) -> Result<HeaderMap, InvalidHeaderValue> {
    let mut headers = HeaderMap::new();
    headers.insert(header::REFERER, HeaderValue::from_str(&format!("{origin}/"))?);
    headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
    headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static(ACCEPT_LANGUAGE),
    );
    headers.insert(
        header::ACCEPT_ENCODING,
        HeaderValue::from_static(ACCEPT_ENCODING),
    );
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    Ok(headers)
}
