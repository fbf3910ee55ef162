use serde_json::json;

use crate::client::Client;
use crate::error::Error;
use crate::media::{MediaSource, DEFAULT_IMAGE_MIME};
use crate::response::Payload;

/// Profile of the account behind a session
pub struct Profile<'a> {
    client: &'a Client,
}

impl<'a> Profile<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Profile { client }
    }

    /// Address of the profile picture. No request is made.
    pub fn picture_url(&self, session: &str) -> String {
        format!("{}{}/picture", self.client.base_url(), profile_path(session))
    }

    /// Name, status and picture of the account
    pub fn get(&self, session: &str) -> Result<Payload, Error> {
        self.client.get(&profile_path(session))
    }

    /// Set the display name
    pub fn set_name(&self, session: &str, name: &str) -> Result<Payload, Error> {
        self.client.put(
            &format!("{}/name", profile_path(session)),
            Some(&json!({ "name": name })),
        )
    }

    /// Set the "about" text
    pub fn set_status(&self, session: &str, status: &str) -> Result<Payload, Error> {
        self.client.put(
            &format!("{}/status", profile_path(session)),
            Some(&json!({ "status": status })),
        )
    }

    /// Replace the profile picture
    pub fn set_picture<F: Into<MediaSource>>(&self, session: &str, file: F) -> Result<Payload, Error> {
        let file = file.into().resolve(DEFAULT_IMAGE_MIME)?;
        self.client.put(
            &format!("{}/picture", profile_path(session)),
            Some(&json!({ "file": file })),
        )
    }

    /// Remove the profile picture
    pub fn delete_picture(&self, session: &str) -> Result<Payload, Error> {
        self.client
            .delete(&format!("{}/picture", profile_path(session)))
    }
}

fn profile_path(session: &str) -> String {
    format!("/api/{}/profile", session)
}
