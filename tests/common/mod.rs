//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use image_proxy::{HttpServer, ProxyConfig, Shutdown};

/// Header lists observed by the mock upstream, one entry per request.
pub type SeenHeaders = Arc<Mutex<Vec<Vec<(String, String)>>>>;

/// Start a mock image upstream returning a fixed status/content-type/body.
///
/// Returns the header log so tests can assert on what the proxy sent.
pub async fn start_image_upstream(
    addr: SocketAddr,
    status: u16,
    content_type: Option<&'static str>,
    body: &'static [u8],
) -> SeenHeaders {
    let listener = TcpListener::bind(addr).await.unwrap();
    let seen: SeenHeaders = Arc::new(Mutex::new(Vec::new()));
    let log = seen.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let log = log.clone();
                    tokio::spawn(async move {
                        let mut buf = vec![0u8; 8192];
                        let mut head = Vec::new();
                        loop {
                            match socket.read(&mut buf).await {
                                Ok(0) => break,
                                Ok(n) => {
                                    head.extend_from_slice(&buf[..n]);
                                    if head.windows(4).any(|w| w == b"\r\n\r\n") {
                                        break;
                                    }
                                }
                                Err(_) => break,
                            }
                        }
                        log.lock().unwrap().push(parse_headers(&head));

                        let status_line = match status {
                            200 => "200 OK",
                            403 => "403 Forbidden",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let mut response = format!(
                            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n",
                            status_line,
                            body.len()
                        );
                        if let Some(ct) = content_type {
                            response.push_str(&format!("Content-Type: {}\r\n", ct));
                        }
                        response.push_str("\r\n");

                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.write_all(body).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    seen
}

fn parse_headers(head: &[u8]) -> Vec<(String, String)> {
    String::from_utf8_lossy(head)
        .lines()
        .skip(1)
        .take_while(|line| !line.is_empty())
        .filter_map(|line| {
            line.split_once(": ")
                .map(|(k, v)| (k.to_lowercase(), v.to_string()))
        })
        .collect()
}

/// Look up a header from the most recent request the upstream saw.
pub fn last_header(seen: &SeenHeaders, name: &str) -> Option<String> {
    seen.lock()
        .unwrap()
        .last()
        .and_then(|headers| headers.iter().find(|(k, _)| k == name).map(|(_, v)| v.clone()))
}

/// Spawn the proxy on the given address and hand back its shutdown handle.
pub async fn start_proxy(addr: SocketAddr, development: bool) -> Shutdown {
    let mut config = ProxyConfig::default();
    config.listener.bind_address = addr.to_string();
    config.observability.metrics_enabled = false;
    config.development = development;

    let shutdown = Shutdown::new();
    let shutdown_rx = shutdown.subscribe();
    let server = HttpServer::new(config).unwrap();
    let listener = TcpListener::bind(addr).await.unwrap();

    tokio::spawn(async move {
        let _ = server.run(listener, shutdown_rx).await;
    });

    shutdown
}
