//! Outbound HTTP client.

use reqwest::header::HeaderMap;
use reqwest::redirect::Policy;
use url::Url;

/// Build the process-wide upstream client.
///
/// Redirects are followed transparently; the final response after all
/// redirects is what gets evaluated and relayed. No client-level timeout is
/// set: the server's request timeout bounds the whole invocation.
pub fn build_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .redirect(Policy::limited(10))
        .build()
}

/// Perform the single upstream GET. One attempt, no retries.
pub async fn fetch(
    client: &reqwest::Client,
    target: &Url,
    headers: HeaderMap,
) -> Result<reqwest::Response, reqwest::Error> {
    client.get(target.clone()).headers(headers).send().await
}
