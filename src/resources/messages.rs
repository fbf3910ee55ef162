use serde::Serialize;
use serde_json::json;

use crate::client::Client;
use crate::error::Error;
use crate::media::{
    MediaFile, MediaSource, DEFAULT_FILE_MIME, DEFAULT_IMAGE_MIME, DEFAULT_VIDEO_MIME,
    DEFAULT_VOICE_MIME,
};
use crate::request::Request;
use crate::response::Payload;

/// Optional parameters of a text message
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextOptions {
    /// Id of the message being replied to
    #[serde(rename = "reply_to", skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    /// Chat ids to mention in a group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_preview: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_preview_high_quality: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeenOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_ids: Option<Vec<String>>,
    /// Sender of the message in a group chat
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ImageOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Send as a round video note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_note: Option<bool>,
    /// Let the server convert the video to a supported format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub convert: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct VoiceOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub convert: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FileOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// A contact shared as a vCard
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactCard {
    pub full_name: String,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    pub name: String,
    pub options: Vec<String>,
    pub multiple_answers: bool,
}

/// Body shared by every message sent to a chat
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Outgoing<'a, T: Serialize> {
    session: &'a str,
    chat_id: &'a str,
    #[serde(flatten)]
    content: T,
}

#[derive(Serialize)]
struct Text<'a> {
    text: &'a str,
    #[serde(flatten)]
    options: &'a TextOptions,
}

#[derive(Serialize)]
struct Media<'a, O: Serialize> {
    file: MediaFile,
    #[serde(flatten)]
    options: &'a O,
}

/// Sending and managing messages
pub struct Messages<'a> {
    client: &'a Client,
}

impl<'a> Messages<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Messages { client }
    }

    /// Send a text message
    pub fn send_text(
        &self,
        session: &str,
        chat_id: &str,
        text: &str,
        options: &TextOptions,
    ) -> Result<Payload, Error> {
        self.send("/api/sendText", session, chat_id, Text { text, options })
    }

    /// Mark messages in a chat as seen
    pub fn send_seen(&self, session: &str, chat_id: &str, options: &SeenOptions) -> Result<Payload, Error> {
        self.send("/api/sendSeen", session, chat_id, options)
    }

    /// Send an image
    pub fn send_image<F: Into<MediaSource>>(
        &self,
        session: &str,
        chat_id: &str,
        file: F,
        options: &ImageOptions,
    ) -> Result<Payload, Error> {
        let file = file.into().resolve(DEFAULT_IMAGE_MIME)?;
        self.send("/api/sendImage", session, chat_id, Media { file, options })
    }

    /// Send a video
    pub fn send_video<F: Into<MediaSource>>(
        &self,
        session: &str,
        chat_id: &str,
        file: F,
        options: &VideoOptions,
    ) -> Result<Payload, Error> {
        let file = file.into().resolve(DEFAULT_VIDEO_MIME)?;
        self.send("/api/sendVideo", session, chat_id, Media { file, options })
    }

    /// Send a voice message
    pub fn send_voice<F: Into<MediaSource>>(
        &self,
        session: &str,
        chat_id: &str,
        file: F,
        options: &VoiceOptions,
    ) -> Result<Payload, Error> {
        let file = file.into().resolve(DEFAULT_VOICE_MIME)?;
        self.send("/api/sendVoice", session, chat_id, Media { file, options })
    }

    /// Send a document
    pub fn send_file<F: Into<MediaSource>>(
        &self,
        session: &str,
        chat_id: &str,
        file: F,
        options: &FileOptions,
    ) -> Result<Payload, Error> {
        let file = file.into().resolve(DEFAULT_FILE_MIME)?;
        self.send("/api/sendFile", session, chat_id, Media { file, options })
    }

    /// Send a location pin
    pub fn send_location(
        &self,
        session: &str,
        chat_id: &str,
        latitude: f64,
        longitude: f64,
        title: Option<&str>,
    ) -> Result<Payload, Error> {
        let mut content = json!({ "latitude": latitude, "longitude": longitude });
        if let Some(title) = title {
            content["title"] = json!(title);
        }
        self.send("/api/sendLocation", session, chat_id, content)
    }

    /// Share contacts as vCards
    pub fn send_contact_vcard(
        &self,
        session: &str,
        chat_id: &str,
        contacts: &[ContactCard],
    ) -> Result<Payload, Error> {
        self.send(
            "/api/sendContactVcard",
            session,
            chat_id,
            json!({ "contacts": contacts }),
        )
    }

    /// Send a poll
    pub fn send_poll(&self, session: &str, chat_id: &str, poll: &Poll) -> Result<Payload, Error> {
        self.send("/api/sendPoll", session, chat_id, json!({ "poll": poll }))
    }

    /// Forward `message_id` to `chat_id`
    pub fn forward(&self, session: &str, chat_id: &str, message_id: &str) -> Result<Payload, Error> {
        self.send(
            "/api/forwardMessage",
            session,
            chat_id,
            json!({ "messageId": message_id }),
        )
    }

    /// React to a message; an empty reaction removes it
    pub fn react(&self, session: &str, message_id: &str, reaction: &str) -> Result<Payload, Error> {
        let body = json!({ "session": session, "messageId": message_id, "reaction": reaction });
        self.client.put("/api/reaction", Some(&body))
    }

    /// Star (`true`) or unstar (`false`) a message
    pub fn star(&self, session: &str, chat_id: &str, message_id: &str, star: bool) -> Result<Payload, Error> {
        let body = json!({
            "session": session,
            "chatId": chat_id,
            "messageId": message_id,
            "star": star,
        });
        self.client.put("/api/star", Some(&body))
    }

    /// Replace the text of a sent message
    pub fn edit(
        &self,
        session: &str,
        chat_id: &str,
        message_id: &str,
        text: &str,
        link_preview: Option<bool>,
    ) -> Result<Payload, Error> {
        let mut body = json!({ "text": text });
        if let Some(link_preview) = link_preview {
            body["linkPreview"] = json!(link_preview);
        }
        self.client
            .put(&message_path(session, chat_id, message_id), Some(&body))
    }

    /// Delete a message
    pub fn delete(&self, session: &str, chat_id: &str, message_id: &str) -> Result<Payload, Error> {
        self.client.delete(&message_path(session, chat_id, message_id))
    }

    /// Pin a message in its chat
    pub fn pin(&self, session: &str, chat_id: &str, message_id: &str) -> Result<Payload, Error> {
        self.client.execute(Request::post(format!(
            "{}/pin",
            message_path(session, chat_id, message_id)
        )))
    }

    /// Unpin a message
    pub fn unpin(&self, session: &str, chat_id: &str, message_id: &str) -> Result<Payload, Error> {
        self.client.execute(Request::post(format!(
            "{}/unpin",
            message_path(session, chat_id, message_id)
        )))
    }

    fn send<T: Serialize>(
        &self,
        path: &str,
        session: &str,
        chat_id: &str,
        content: T,
    ) -> Result<Payload, Error> {
        let body = Outgoing {
            session,
            chat_id,
            content,
        };
        self.client.execute(Request::post(path).json(&body)?)
    }
}

fn message_path(session: &str, chat_id: &str, message_id: &str) -> String {
    format!("/api/{}/chats/{}/messages/{}", session, chat_id, message_id)
}
