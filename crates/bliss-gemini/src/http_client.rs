use std::time::Duration;

use reqwest::Client;

/// Build the HTTP client used for every `generateContent` call
///
/// One client per [`crate::GeminiClient`] keeps provider connections warm
/// across message and song requests.
pub(crate) fn build_http_client(timeout: Duration) -> reqwest::Result<Client> {
    let mut headers = http::HeaderMap::new();
    headers.insert(http::header::CONNECTION, http::HeaderValue::from_static("keep-alive"));

    Client::builder()
        .timeout(timeout)
        .pool_idle_timeout(Some(Duration::from_secs(5)))
        .tcp_nodelay(true)
        .tcp_keepalive(Some(Duration::from_secs(60)))
        .default_headers(headers)
        .build()
}
