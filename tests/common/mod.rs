//! Local stand-in for the remote service, shared by the integration tests.

#![allow(dead_code)]

use std::io::Read;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use browshot::{BrowshotClient, ClientConfig};
use tiny_http::{Header, Response, Server};

pub const TEST_KEY: &str = "test_key";

/// A request as seen by the mock service
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub url: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl Recorded {
    /// Path below the mock's `/api/v1/` prefix, without the query
    pub fn action(&self) -> &str {
        let path = self.url.split('?').next().unwrap_or_default();
        path.trim_start_matches("/api/v1/")
    }

    /// Query pairs in wire order, still percent-encoded
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let query = self.url.split_once('?').map(|(_, q)| q).unwrap_or_default();
        query
            .split('&')
            .filter(|p| !p.is_empty())
            .map(|p| {
                let (k, v) = p.split_once('=').unwrap_or((p, ""));
                (k.to_string(), v.to_string())
            })
            .collect()
    }

    pub fn values_of(&self, key: &str) -> Vec<String> {
        self.query_pairs()
            .into_iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v)
            .collect()
    }
}

pub struct MockService {
    pub base: String,
    pub requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockService {
    pub fn recorded(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn client(&self) -> BrowshotClient {
        client_for(&self.base)
    }
}

/// Start a server that answers each request with `handler(request) -> (status, body)`
pub fn start<F>(handler: F) -> MockService
where
    F: Fn(&Recorded) -> (u16, Vec<u8>) + Send + 'static,
{
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&requests);

    std::thread::spawn(move || {
        for mut request in server.incoming_requests() {
            let mut body = Vec::new();
            let _ = request.as_reader().read_to_end(&mut body);
            let recorded = Recorded {
                method: request.method().to_string(),
                url: request.url().to_string(),
                content_type: request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("Content-Type"))
                    .map(|h| h.value.as_str().to_string()),
                body,
            };

            let (status, payload) = handler(&recorded);
            seen.lock().unwrap().push(recorded);

            let response = Response::from_data(payload)
                .with_status_code(status)
                .with_header("Content-Type: application/octet-stream".parse::<Header>().unwrap());
            let _ = request.respond(response);
        }
    });

    MockService {
        base: format!("http://{}/api/v1/", addr),
        requests,
    }
}

/// Serve the same JSON body for every request
pub fn start_json(status: u16, body: &'static str) -> MockService {
    start(move |_| (status, body.as_bytes().to_vec()))
}

/// Base URL on a port nothing is listening on
pub fn closed_base() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api/v1/", addr)
}

pub fn client_for(base: &str) -> BrowshotClient {
    BrowshotClient::with_config(ClientConfig {
        api_key: TEST_KEY.to_string(),
        base_url: base.to_string(),
        timeout_ms: 5000,
        ..Default::default()
    })
    .expect("Failed to create client")
}
