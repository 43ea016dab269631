// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter implementing the [`PageSource`] port.
//!
//! Each query becomes one `GET {endpoint}?paginate=..&search=..&page=..`.
//! The search term is passed through untouched; `reqwest` does the URL
//! encoding.
//!
//! [`PageSource`]: crate::application::port::PageSource

mod wire;

use std::time::Duration;

use futures_util::future::{BoxFuture, FutureExt};

use crate::application::port::{FetchError, FetchResult, PageSource};
use crate::domain::paging::PageQuery;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// `reqwest`-backed page source.
///
/// The underlying client is reference-counted, so clones share one
/// connection pool.
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpPageSource {
    /// Creates a page source for `endpoint` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Network`] if the TLS backend cannot be set up.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| FetchError::Network(err.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PageSource for HttpPageSource {
    fn fetch(&self, query: PageQuery) -> BoxFuture<'static, FetchResult> {
        let request = self.client.get(&self.endpoint).query(&[
            ("paginate", query.page_size.value().to_string()),
            ("search", query.search_term),
            ("page", query.page.value().to_string()),
        ]);

        async move {
            let response = request
                .send()
                .await
                .map_err(|err| FetchError::Network(err.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            let body = response
                .bytes()
                .await
                .map_err(|err| FetchError::Network(err.to_string()))?;

            wire::parse_envelope(&body).map_err(FetchError::Parse)
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::paging::{PageNumber, PageSize};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    const ENVELOPE: &str = r#"{"data":[{"id":1,"name":"Ann Lee","email":"ann@example.com","email_verified_at":null,"created_at":null,"updated_at":null}],"current_page":2,"per_page":10,"total":11,"last_page":2,"next_page_url":null,"prev_page_url":null}"#;

    /// Serves one canned response and reports the request line it received.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut chunk).await.expect("read");
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }
            let request = String::from_utf8_lossy(&buf);
            let request_line = request.lines().next().unwrap_or_default().to_string();
            let _ = tx.send(request_line);

            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket
                .write_all(response.as_bytes())
                .await
                .expect("write");
            let _ = socket.shutdown().await;
        });

        (format!("http://{addr}/"), rx)
    }

    fn query() -> PageQuery {
        PageQuery::new(PageNumber::new(2), PageSize::new(10), "ann lee")
    }

    #[tokio::test]
    async fn sends_query_parameters_and_parses_envelope() {
        let (endpoint, request_line) = serve_once("200 OK", ENVELOPE).await;
        let source = HttpPageSource::new(endpoint, Duration::from_secs(5)).expect("client");

        let envelope = source.fetch(query()).await.expect("fetch should succeed");
        let request_line = request_line.await.expect("request line");

        assert!(request_line.starts_with("GET /?"));
        assert!(request_line.contains("paginate=10"));
        assert!(request_line.contains("search=ann+lee"));
        assert!(request_line.contains("page=2"));
        assert_eq!(envelope.current_page.value(), 2);
        assert_eq!(envelope.total_items, 11);
        assert_eq!(envelope.items[0].name, "Ann Lee");
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let (endpoint, _rx) = serve_once("503 Service Unavailable", "{}").await;
        let source = HttpPageSource::new(endpoint, Duration::from_secs(5)).expect("client");

        let result = source.fetch(query()).await;
        assert_eq!(result, Err(FetchError::Status(503)));
    }

    #[tokio::test]
    async fn malformed_body_is_a_parse_error() {
        let (endpoint, _rx) = serve_once("200 OK", "not json").await;
        let source = HttpPageSource::new(endpoint, Duration::from_secs(5)).expect("client");

        let result = source.fetch(query()).await;
        assert!(matches!(result, Err(FetchError::Parse(_))));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        // Bind then drop to get a port nobody listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let source = HttpPageSource::new(format!("http://{addr}/"), Duration::from_secs(2))
            .expect("client");
        let result = source.fetch(query()).await;
        assert!(matches!(result, Err(FetchError::Network(_))));
    }
}
