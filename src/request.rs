//! Request description handed to the transport core.
//!
//! A `Request` is plain data: method, path relative to the base URL, query
//! pairs, an optional JSON body, header overrides and an optional timeout.
//! Optional inputs are only recorded when present, so an absent value never
//! reaches the wire as `null`.

use std::fmt;
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use crate::error::Error;

/// HTTP method of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Method name as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A single call against the WAHA API
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
    pub timeout: Option<Duration>,
}

impl Request {
    /// Request with no query, body or overrides
    pub fn new<P: Into<String>>(method: Method, path: P) -> Self {
        Request {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            headers: Vec::new(),
            timeout: None,
        }
    }

    /// GET request
    pub fn get<P: Into<String>>(path: P) -> Self {
        Self::new(Method::Get, path)
    }

    /// POST request
    pub fn post<P: Into<String>>(path: P) -> Self {
        Self::new(Method::Post, path)
    }

    /// PUT request
    pub fn put<P: Into<String>>(path: P) -> Self {
        Self::new(Method::Put, path)
    }

    /// DELETE request
    pub fn delete<P: Into<String>>(path: P) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Add a query parameter
    pub fn query<K: Into<String>, V: ToString>(mut self, key: K, value: V) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Add a query parameter only when a value is present
    pub fn query_opt<K: Into<String>, V: ToString>(self, key: K, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Add a query parameter only when `flag` is set, rendered as `true`
    pub fn query_flag<K: Into<String>>(self, key: K, flag: bool) -> Self {
        if flag {
            self.query(key, true)
        } else {
            self
        }
    }

    /// Attach a JSON body
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, Error> {
        let value = serde_json::to_value(body)
            .map_err(|e| Error::client(format!("Failed to serialize request body: {}", e)))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Override a default header for this call only
    pub fn header<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Override the client timeout for this call only
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
