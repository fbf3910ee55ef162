use serde::Serialize;

use crate::client::Client;
use crate::error::Error;
use crate::media::ResponseMode;
use crate::request::Request;
use crate::response::Payload;

/// Pagination for list endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl Page {
    /// Page with both limit and offset set
    pub fn new(limit: u32, offset: u32) -> Self {
        Page {
            limit: Some(limit),
            offset: Some(offset),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReadMessages<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    message_ids: Option<&'a [String]>,
}

/// Chats of a session
pub struct Chats<'a> {
    client: &'a Client,
}

impl<'a> Chats<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Chats { client }
    }

    /// List chats
    pub fn list(&self, session: &str, page: &Page) -> Result<Payload, Error> {
        self.client.execute(
            Request::get(format!("/api/{}/chats", session))
                .query_opt("limit", page.limit)
                .query_opt("offset", page.offset),
        )
    }

    /// Chats with last message and picture
    pub fn overview(&self, session: &str) -> Result<Payload, Error> {
        self.client.get(&format!("/api/{}/chats/overview", session))
    }

    /// Chat picture
    pub fn picture(&self, session: &str, chat_id: &str, mode: ResponseMode) -> Result<Payload, Error> {
        self.client.execute(
            Request::get(format!("{}/picture", chat_path(session, chat_id)))
                .header("Accept", mode.accept()),
        )
    }

    /// Mark a chat as unread
    pub fn unread(&self, session: &str, chat_id: &str) -> Result<Payload, Error> {
        self.action(session, chat_id, "unread")
    }

    /// Archive a chat
    pub fn archive(&self, session: &str, chat_id: &str) -> Result<Payload, Error> {
        self.action(session, chat_id, "archive")
    }

    /// Unarchive a chat
    pub fn unarchive(&self, session: &str, chat_id: &str) -> Result<Payload, Error> {
        self.action(session, chat_id, "unarchive")
    }

    /// Delete a chat
    pub fn delete(&self, session: &str, chat_id: &str) -> Result<Payload, Error> {
        self.client.delete(&chat_path(session, chat_id))
    }

    /// Mark messages as read: the given ones, or all unread when `None`
    pub fn read_messages(
        &self,
        session: &str,
        chat_id: &str,
        message_ids: Option<&[String]>,
    ) -> Result<Payload, Error> {
        let body = ReadMessages {
            message_ids: message_ids.filter(|ids| !ids.is_empty()),
        };
        self.client.post(
            &format!("{}/messages/read", chat_path(session, chat_id)),
            Some(&body),
        )
    }

    /// Messages in a chat, newest first
    pub fn messages(
        &self,
        session: &str,
        chat_id: &str,
        limit: Option<u32>,
        download_media: bool,
    ) -> Result<Payload, Error> {
        self.client.execute(
            Request::get(format!("{}/messages", chat_path(session, chat_id)))
                .query_opt("limit", limit)
                .query_flag("downloadMedia", download_media),
        )
    }

    /// One message from a chat
    pub fn message(
        &self,
        session: &str,
        chat_id: &str,
        message_id: &str,
        download_media: bool,
    ) -> Result<Payload, Error> {
        self.client.execute(
            Request::get(format!(
                "{}/messages/{}",
                chat_path(session, chat_id),
                message_id
            ))
            .query_flag("downloadMedia", download_media),
        )
    }

    fn action(&self, session: &str, chat_id: &str, action: &str) -> Result<Payload, Error> {
        self.client.execute(Request::post(format!(
            "{}/{}",
            chat_path(session, chat_id),
            action
        )))
    }
}

fn chat_path(session: &str, chat_id: &str) -> String {
    format!("/api/{}/chats/{}", session, chat_id)
}
