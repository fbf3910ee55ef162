use serde::Serialize;
use serde_json::json;

use crate::client::Client;
use crate::error::Error;
use crate::media::{MediaFile, MediaSource, DEFAULT_IMAGE_MIME, DEFAULT_VIDEO_MIME, DEFAULT_VOICE_MIME};
use crate::request::Request;
use crate::response::Payload;

#[derive(Serialize)]
struct StatusMedia<'a> {
    file: MediaFile,
    #[serde(skip_serializing_if = "Option::is_none")]
    caption: Option<&'a str>,
}

/// Status updates (stories)
pub struct Status<'a> {
    client: &'a Client,
}

impl<'a> Status<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Status { client }
    }

    /// Post a text status
    pub fn send_text(&self, session: &str, text: &str) -> Result<Payload, Error> {
        self.client
            .post(&status_path(session, "text"), Some(&json!({ "text": text })))
    }

    /// Post an image status
    pub fn send_image<F: Into<MediaSource>>(
        &self,
        session: &str,
        file: F,
        caption: Option<&str>,
    ) -> Result<Payload, Error> {
        let file = file.into().resolve(DEFAULT_IMAGE_MIME)?;
        self.client
            .post(&status_path(session, "image"), Some(&StatusMedia { file, caption }))
    }

    /// Post a voice status
    pub fn send_voice<F: Into<MediaSource>>(&self, session: &str, file: F) -> Result<Payload, Error> {
        let file = file.into().resolve(DEFAULT_VOICE_MIME)?;
        let body = StatusMedia {
            file,
            caption: None,
        };
        self.client.post(&status_path(session, "voice"), Some(&body))
    }

    /// Post a video status
    pub fn send_video<F: Into<MediaSource>>(
        &self,
        session: &str,
        file: F,
        caption: Option<&str>,
    ) -> Result<Payload, Error> {
        let file = file.into().resolve(DEFAULT_VIDEO_MIME)?;
        self.client
            .post(&status_path(session, "video"), Some(&StatusMedia { file, caption }))
    }

    /// Delete a posted status
    pub fn delete(&self, session: &str, message_id: &str) -> Result<Payload, Error> {
        self.client.post(
            &status_path(session, "delete"),
            Some(&json!({ "messageId": message_id })),
        )
    }

    /// Id to use for the next status, so it can be deleted later
    pub fn new_message_id(&self, session: &str) -> Result<Payload, Error> {
        self.client
            .execute(Request::get(status_path(session, "new-message-id")))
    }
}

fn status_path(session: &str, action: &str) -> String {
    format!("/api/{}/status/{}", session, action)
}
