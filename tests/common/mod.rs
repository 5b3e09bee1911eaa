// tests/common/mod.rs
// Mock Semrush upstream for integration tests

#![allow(dead_code)]

use semrush_mcp::config::Config;
use semrush_mcp::http::create_shared_client;
use semrush_mcp::semrush::SemrushClient;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const TEST_KEY: &str = "integration-key";

/// Canned HTTP response served by [`MockUpstream`]
pub struct CannedResponse {
    pub status_line: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl CannedResponse {
    pub fn text(body: &str) -> Self {
        Self {
            status_line: "200 OK",
            content_type: "text/plain; charset=utf-8",
            body: body.to_string(),
        }
    }

    pub fn json(body: &str) -> Self {
        Self {
            status_line: "200 OK",
            content_type: "application/json",
            body: body.to_string(),
        }
    }

    pub fn status(status_line: &'static str, body: &str) -> Self {
        Self {
            status_line,
            content_type: "text/plain",
            body: body.to_string(),
        }
    }

    fn to_http(&self) -> String {
        format!(
            "HTTP/1.1 {}\r\n\
             Content-Type: {}\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\r\n\
             {}",
            self.status_line,
            self.content_type,
            self.body.len(),
            self.body
        )
    }
}

/// Local upstream that answers `connections` requests with the same response
pub struct MockUpstream {
    pub base_url: String,
    handle: JoinHandle<Vec<String>>,
}

impl MockUpstream {
    pub async fn start(response: CannedResponse, connections: usize) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let raw = response.to_http();

        let handle = tokio::spawn(async move {
            let mut requests = Vec::with_capacity(connections);
            for _ in 0..connections {
                let (mut stream, _) = listener.accept().await.unwrap();
                let mut buf = vec![0u8; 16384];
                let n = stream.read(&mut buf).await.unwrap();
                requests.push(String::from_utf8_lossy(&buf[..n]).to_string());
                stream.write_all(raw.as_bytes()).await.unwrap();
                stream.flush().await.unwrap();
            }
            requests
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}"),
            handle,
        }
    }

    pub fn client(&self) -> SemrushClient {
        SemrushClient::new(&Config::new(TEST_KEY, &self.base_url), create_shared_client())
    }

    /// Request lines (`GET /path?query HTTP/1.1`) received so far
    pub async fn request_lines(self) -> Vec<String> {
        self.handle
            .await
            .unwrap()
            .into_iter()
            .map(|req| req.lines().next().unwrap_or_default().to_string())
            .collect()
    }
}
