use serde::Serialize;

use crate::client::Client;
use crate::error::Error;
use crate::request::Request;
use crate::response::Payload;

#[derive(Serialize)]
struct NewChannel<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

/// WhatsApp channels (newsletters)
pub struct Channels<'a> {
    client: &'a Client,
}

impl<'a> Channels<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Channels { client }
    }

    /// List channels
    pub fn list(&self, session: &str) -> Result<Payload, Error> {
        self.client.get(&format!("/api/{}/channels", session))
    }

    /// Get one channel
    pub fn get(&self, session: &str, channel_id: &str) -> Result<Payload, Error> {
        self.client
            .get(&format!("/api/{}/channels/{}", session, channel_id))
    }

    /// Create a channel
    pub fn create(&self, session: &str, name: &str, description: Option<&str>) -> Result<Payload, Error> {
        let body = NewChannel { name, description };
        self.client
            .post(&format!("/api/{}/channels", session), Some(&body))
    }

    /// Delete a channel
    pub fn delete(&self, session: &str, channel_id: &str) -> Result<Payload, Error> {
        self.client
            .delete(&format!("/api/{}/channels/{}", session, channel_id))
    }

    /// Channel posts are read through the chats endpoint
    pub fn messages(&self, session: &str, channel_id: &str, limit: Option<u32>) -> Result<Payload, Error> {
        self.client.execute(
            Request::get(format!("/api/{}/chats/{}/messages", session, channel_id))
                .query_opt("limit", limit),
        )
    }
}
