use serde::Serialize;
use serde_json::{json, Value};

use crate::client::Client;
use crate::error::Error;
use crate::media::ResponseMode;
use crate::request::Request;
use crate::response::Payload;

/// Parameters for creating a session
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewSession {
    /// Generated by the server when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
    /// The server starts new sessions unless told otherwise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<bool>,
}

impl NewSession {
    /// Session with the given name
    pub fn named<S: Into<String>>(name: S) -> Self {
        NewSession {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

/// Format of the pairing QR code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QrFormat {
    #[default]
    Image,
    Raw,
}

impl QrFormat {
    /// Value of the `format` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            QrFormat::Image => "image",
            QrFormat::Raw => "raw",
        }
    }
}

/// Session management: a session is one WhatsApp account on the server
pub struct Sessions<'a> {
    client: &'a Client,
}

impl<'a> Sessions<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Sessions { client }
    }

    /// List sessions; `all` includes stopped ones
    pub fn list(&self, all: bool) -> Result<Payload, Error> {
        self.client
            .execute(Request::get("/api/sessions").query_flag("all", all))
    }

    /// Get one session
    pub fn get(&self, name: &str) -> Result<Payload, Error> {
        self.client.get(&format!("/api/sessions/{}", name))
    }

    /// Create a session
    pub fn create(&self, session: &NewSession) -> Result<Payload, Error> {
        self.client.post("/api/sessions", Some(session))
    }

    /// Replace the configuration of a session
    pub fn update(&self, name: &str, config: &Value) -> Result<Payload, Error> {
        let body = json!({ "name": name, "config": config });
        self.client.put(&format!("/api/sessions/{}", name), Some(&body))
    }

    /// Delete a session
    pub fn delete(&self, name: &str) -> Result<Payload, Error> {
        self.client.delete(&format!("/api/sessions/{}", name))
    }

    /// Start a session
    pub fn start(&self, name: &str) -> Result<Payload, Error> {
        self.action(name, "start")
    }

    /// Stop a session
    pub fn stop(&self, name: &str) -> Result<Payload, Error> {
        self.action(name, "stop")
    }

    /// Restart a session
    pub fn restart(&self, name: &str) -> Result<Payload, Error> {
        self.action(name, "restart")
    }

    /// Log the account out of a session
    pub fn logout(&self, name: &str) -> Result<Payload, Error> {
        self.action(name, "logout")
    }

    /// Account behind the session; JSON `null` when not authenticated
    pub fn me(&self, name: &str) -> Result<Payload, Error> {
        self.client.get(&format!("/api/sessions/{}/me", name))
    }

    /// Pairing QR code. The raw format is only served as JSON.
    pub fn qr(&self, name: &str, format: QrFormat, mode: ResponseMode) -> Result<Payload, Error> {
        let mode = match format {
            QrFormat::Raw => ResponseMode::Json,
            QrFormat::Image => mode,
        };
        self.client.execute(
            Request::get(format!("/api/{}/auth/qr", name))
                .query("format", format.as_str())
                .header("Accept", mode.accept()),
        )
    }

    /// Request a pairing code for `phone_number` instead of scanning a QR code
    pub fn request_code(&self, name: &str, phone_number: &str) -> Result<Payload, Error> {
        let body = json!({ "phoneNumber": phone_number });
        self.client
            .post(&format!("/api/{}/auth/request-code", name), Some(&body))
    }

    /// Screenshot of the session's browser
    pub fn screenshot(&self, name: &str, mode: ResponseMode) -> Result<Payload, Error> {
        self.client.execute(
            Request::get("/api/screenshot")
                .query("session", name)
                .header("Accept", mode.accept()),
        )
    }

    fn action(&self, name: &str, action: &str) -> Result<Payload, Error> {
        self.client
            .execute(Request::post(format!("/api/sessions/{}/{}", name, action)))
    }
}
