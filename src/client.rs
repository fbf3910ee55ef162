use log::{debug, error};
use reqwest::blocking::Client as ReqwestClient;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use std::sync::RwLock;

use crate::configuration::Configuration;
use crate::error::Error;
use crate::request::{Method, Request};
use crate::resources::{Channels, Chats, Contacts, Groups, Profile, Sessions, Status, Messages};
use crate::response::{self, Payload};

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// HTTP client for communicating with a WAHA server.
///
/// Every resource facade funnels through [`Client::execute`]. The pooled
/// HTTP session is created here and released by [`Client::close`] or when
/// the client is dropped, whichever comes first.
pub struct Client {
    config: Configuration,
    session: RwLock<Option<ReqwestClient>>,
}

impl Client {
    /// Create a client from the process-wide default configuration
    pub fn new() -> Result<Self, Error> {
        Self::with_configuration(Configuration::global())
    }

    /// Create a client from an explicit configuration
    pub fn with_configuration(config: Configuration) -> Result<Self, Error> {
        config.validate()?;

        let session = ReqwestClient::builder()
            .timeout(config.timeout())
            .default_headers(default_headers(config.api_key())?)
            .build()
            .map_err(|e| Error::configuration(format!("Failed to build HTTP client: {}", e)))?;

        debug!("Created WAHA client for {}", config.base_url());

        Ok(Client {
            config,
            session: RwLock::new(Some(session)),
        })
    }

    /// Server address without a trailing slash
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Configuration the client was built with
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Dispatch a request and classify the response.
    ///
    /// Exactly one network attempt is made. Transport failures are returned
    /// as [`Error::Client`] without a status code.
    pub fn execute(&self, request: Request) -> Result<Payload, Error> {
        if !request.path.starts_with('/') {
            return Err(Error::client(format!(
                "Request path must start with '/': {}",
                request.path
            )));
        }

        let session = self.session()?;
        let url = format!("{}{}", self.config.base_url(), request.path);
        debug!("{} {}", request.method, url);

        let mut builder = session.request(request.method.into(), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        if !request.headers.is_empty() {
            // Applied after the body so overrides replace what `json` set
            builder = builder.headers(header_overrides(&request.headers)?);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let resp = builder.send().map_err(|e| {
            error!("{} {} failed: {}", request.method, url, e);
            Error::transport(e)
        })?;

        let status = resp.status().as_u16();
        let final_url = resp.url().to_string();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        debug!("Received status {} from {}", status, final_url);

        let body = resp.bytes().map_err(|e| {
            error!("Failed to read response body from {}: {}", final_url, e);
            Error::transport(e)
        })?;

        response::classify(status, &content_type, &final_url, body.to_vec())
    }

    /// Make a GET request
    pub fn get(&self, path: &str) -> Result<Payload, Error> {
        self.execute(Request::get(path))
    }

    /// Make a POST request, with an optional JSON body
    pub fn post<T: Serialize + ?Sized>(&self, path: &str, body: Option<&T>) -> Result<Payload, Error> {
        self.execute(with_body(Method::Post, path, body)?)
    }

    /// Make a PUT request, with an optional JSON body
    pub fn put<T: Serialize + ?Sized>(&self, path: &str, body: Option<&T>) -> Result<Payload, Error> {
        self.execute(with_body(Method::Put, path, body)?)
    }

    /// Make a DELETE request
    pub fn delete(&self, path: &str) -> Result<Payload, Error> {
        self.execute(Request::delete(path))
    }

    /// Release the pooled HTTP session.
    ///
    /// Returns `true` if this call released it, `false` if it was already closed.
    pub fn close(&self) -> bool {
        let mut guard = match self.session.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let released = guard.take().is_some();
        if released {
            debug!("Released HTTP session for {}", self.config.base_url());
            #[cfg(test)]
            tests::RELEASES.with(|count| count.set(count.get() + 1));
        }
        released
    }

    /// Whether the HTTP session has been released
    pub fn is_closed(&self) -> bool {
        match self.session.read() {
            Ok(guard) => guard.is_none(),
            Err(poisoned) => poisoned.into_inner().is_none(),
        }
    }

    /// Session management
    pub fn sessions(&self) -> Sessions<'_> {
        Sessions::new(self)
    }

    /// Sending and managing messages
    pub fn messages(&self) -> Messages<'_> {
        Messages::new(self)
    }

    /// Chats of a session
    pub fn chats(&self) -> Chats<'_> {
        Chats::new(self)
    }

    /// Contacts and address book
    pub fn contacts(&self) -> Contacts<'_> {
        Contacts::new(self)
    }

    /// Group management
    pub fn groups(&self) -> Groups<'_> {
        Groups::new(self)
    }

    /// Status updates
    pub fn status(&self) -> Status<'_> {
        Status::new(self)
    }

    /// Profile of the account behind a session
    pub fn profile(&self) -> Profile<'_> {
        Profile::new(self)
    }

    /// WhatsApp channels
    pub fn channels(&self) -> Channels<'_> {
        Channels::new(self)
    }

    /// Handle to the pooled session; cloning shares the connection pool
    fn session(&self) -> Result<ReqwestClient, Error> {
        let guard = match self.session.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.clone().ok_or_else(|| Error::client("Client is closed"))
    }
}

impl Drop for Client {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.config.base_url())
            .field("timeout", &self.config.timeout())
            .field("closed", &self.is_closed())
            .finish()
    }
}

fn with_body<T: Serialize + ?Sized>(method: Method, path: &str, body: Option<&T>) -> Result<Request, Error> {
    let request = Request::new(method, path);
    match body {
        Some(body) => request.json(body),
        None => Ok(request),
    }
}

/// Per-call headers; a later value for the same name wins
fn header_overrides(headers: &[(String, String)]) -> Result<HeaderMap, Error> {
    let mut map = HeaderMap::new();
    for (key, value) in headers {
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|e| Error::client(format!("Invalid header name '{}': {}", key, e)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| Error::client(format!("Invalid value for header '{}': {}", key, e)))?;
        map.insert(name, value);
    }
    Ok(map)
}

/// Headers attached to every call
fn default_headers(api_key: Option<&str>) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    if let Some(key) = api_key.filter(|k| !k.is_empty()) {
        let mut value = HeaderValue::from_str(key)
            .map_err(|_| Error::configuration("API key contains invalid header characters"))?;
        value.set_sensitive(true);
        headers.insert(HeaderName::from_static("x-api-key"), value);
    }

    Ok(headers)
}
