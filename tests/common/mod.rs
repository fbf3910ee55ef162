//! In-process WAHA stand-in for integration tests.
//!
//! Binds an axum server to a random local port on a background tokio
//! runtime, answers every request with one canned reply and records what it
//! received so tests can assert on the wire format.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use serde_json::Value;
use waha_rs::{Client, Configuration};

/// Request as seen by the server
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Recorded {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }

    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .get(name)
            .map(|v| v.to_str().unwrap().to_string())
    }

    /// Percent-decoded query pairs
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let url = reqwest::Url::parse(&format!(
            "http://mock/?{}",
            self.query.as_deref().unwrap_or("")
        ))
        .unwrap();
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }
}

/// Canned reply
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub content_type: Option<&'static str>,
    pub body: Vec<u8>,
    pub delay: Option<Duration>,
}

impl Reply {
    pub fn json(status: u16, value: Value) -> Self {
        Reply {
            status,
            content_type: Some("application/json; charset=utf-8"),
            body: serde_json::to_vec(&value).unwrap(),
            delay: None,
        }
    }

    pub fn raw(status: u16, content_type: &'static str, body: &[u8]) -> Self {
        Reply {
            status,
            content_type: Some(content_type),
            body: body.to_vec(),
            delay: None,
        }
    }

    pub fn ok() -> Self {
        Self::json(200, serde_json::json!({ "ok": true }))
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

struct Shared {
    reply: Reply,
    requests: Mutex<Vec<Recorded>>,
}

pub struct MockServer {
    pub base_url: String,
    shared: Arc<Shared>,
}

impl MockServer {
    pub fn start(reply: Reply) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = std_listener.local_addr().unwrap();
        std_listener.set_nonblocking(true).unwrap();

        let shared = Arc::new(Shared {
            reply,
            requests: Mutex::new(Vec::new()),
        });
        let app = Router::new().fallback(record).with_state(shared.clone());

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async {
                let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
                axum::serve(listener, app).await
            })
            .unwrap();
        });

        MockServer {
            base_url: format!("http://{}", addr),
            shared,
        }
    }

    pub fn client(&self) -> Client {
        Client::with_configuration(Configuration::new(&self.base_url)).unwrap()
    }

    pub fn client_with_key(&self, api_key: &str) -> Client {
        let mut config = Configuration::new(&self.base_url);
        config.set_api_key(api_key);
        Client::with_configuration(config).unwrap()
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.shared.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> Recorded {
        self.requests()
            .pop()
            .expect("server received no requests")
    }
}

async fn record(
    State(shared): State<Arc<Shared>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    shared.requests.lock().unwrap().push(Recorded {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers,
        body: body.to_vec(),
    });

    let reply = shared.reply.clone();
    if let Some(delay) = reply.delay {
        tokio::time::sleep(delay).await;
    }

    let status = StatusCode::from_u16(reply.status).unwrap();
    let mut response = (status, reply.body).into_response();
    response.headers_mut().remove(header::CONTENT_TYPE);
    if let Some(content_type) = reply.content_type {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    }
    response
}
