use std::fmt;

use serde_json::json;

use crate::client::Client;
use crate::error::Error;
use crate::request::Request;
use crate::response::Payload;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    Id,
    Name,
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortBy::Id => "id",
            SortBy::Name => "name",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        })
    }
}

/// Filters for listing all contacts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
}

/// Contacts and the address book
pub struct Contacts<'a> {
    client: &'a Client,
}

impl<'a> Contacts<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Contacts { client }
    }

    /// List all contacts
    pub fn all(&self, session: &str, query: &ContactQuery) -> Result<Payload, Error> {
        self.client.execute(
            Request::get("/api/contacts/all")
                .query("session", session)
                .query_opt("limit", query.limit)
                .query_opt("offset", query.offset)
                .query_opt("sortBy", query.sort_by)
                .query_opt("sortOrder", query.sort_order),
        )
    }

    /// `contact_id` is a phone number or chat id
    pub fn get(&self, session: &str, contact_id: &str) -> Result<Payload, Error> {
        self.client.execute(
            Request::get("/api/contacts")
                .query("session", session)
                .query("contactId", contact_id),
        )
    }

    /// Rename a contact in the address book
    pub fn update(
        &self,
        session: &str,
        chat_id: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Payload, Error> {
        let body = json!({ "firstName": first_name, "lastName": last_name });
        self.client
            .put(&format!("/api/{}/contacts/{}", session, chat_id), Some(&body))
    }

    /// Whether `phone` is registered on WhatsApp
    pub fn check_exists(&self, session: &str, phone: &str) -> Result<Payload, Error> {
        self.client.execute(
            Request::get("/api/contacts/check-exists")
                .query("session", session)
                .query("phone", phone),
        )
    }

    /// "About" text of a contact
    pub fn about(&self, session: &str, contact_id: &str) -> Result<Payload, Error> {
        self.client.execute(
            Request::get("/api/contacts/about")
                .query("session", session)
                .query("contactId", contact_id),
        )
    }

    /// Profile picture URL; `refresh` bypasses the server cache
    pub fn profile_picture(&self, session: &str, contact_id: &str, refresh: bool) -> Result<Payload, Error> {
        self.client.execute(
            Request::get("/api/contacts/profile-picture")
                .query("session", session)
                .query("contactId", contact_id)
                .query_flag("refresh", refresh),
        )
    }

    /// Block a contact
    pub fn block(&self, session: &str, chat_id: &str) -> Result<Payload, Error> {
        self.blocking("block", session, chat_id)
    }

    /// Unblock a contact
    pub fn unblock(&self, session: &str, chat_id: &str) -> Result<Payload, Error> {
        self.blocking("unblock", session, chat_id)
    }

    fn blocking(&self, action: &str, session: &str, chat_id: &str) -> Result<Payload, Error> {
        let body = json!({ "session": session, "chatId": chat_id });
        self.client
            .post(&format!("/api/contacts/{}", action), Some(&body))
    }
}
