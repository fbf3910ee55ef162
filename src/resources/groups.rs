use serde::Serialize;
use serde_json::json;

use crate::client::Client;
use crate::error::Error;
use crate::media::ResponseMode;
use crate::request::Request;
use crate::response::Payload;

#[derive(Serialize)]
struct NewGroup<'a> {
    subject: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    participants: Option<&'a [String]>,
}

/// Group chats of a session
pub struct Groups<'a> {
    client: &'a Client,
}

impl<'a> Groups<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Groups { client }
    }

    /// List groups
    pub fn list(&self, session: &str) -> Result<Payload, Error> {
        self.client.get(&format!("/api/{}/groups", session))
    }

    /// Number of groups
    pub fn count(&self, session: &str) -> Result<Payload, Error> {
        self.client.get(&format!("/api/{}/groups/count", session))
    }

    /// Get one group
    pub fn get(&self, session: &str, group_id: &str) -> Result<Payload, Error> {
        self.client.get(&group_path(session, group_id))
    }

    /// Create a group named `subject`, optionally with initial participants
    pub fn create(&self, session: &str, subject: &str, participants: &[String]) -> Result<Payload, Error> {
        let body = NewGroup {
            subject,
            participants: Some(participants).filter(|p| !p.is_empty()),
        };
        self.client
            .post(&format!("/api/{}/groups", session), Some(&body))
    }

    /// Leave a group
    pub fn leave(&self, session: &str, group_id: &str) -> Result<Payload, Error> {
        self.client
            .execute(Request::post(format!("{}/leave", group_path(session, group_id))))
    }

    /// Rename a group
    pub fn set_subject(&self, session: &str, group_id: &str, subject: &str) -> Result<Payload, Error> {
        self.client.put(
            &format!("{}/subject", group_path(session, group_id)),
            Some(&json!({ "subject": subject })),
        )
    }

    /// Set the group description
    pub fn set_description(&self, session: &str, group_id: &str, description: &str) -> Result<Payload, Error> {
        self.client.put(
            &format!("{}/description", group_path(session, group_id)),
            Some(&json!({ "description": description })),
        )
    }

    /// Current invite code
    pub fn invite_code(&self, session: &str, group_id: &str) -> Result<Payload, Error> {
        self.client
            .get(&format!("{}/invite-code", group_path(session, group_id)))
    }

    /// Revoke the invite code and issue a new one
    pub fn revoke_invite_code(&self, session: &str, group_id: &str) -> Result<Payload, Error> {
        self.client.execute(Request::post(format!(
            "{}/invite-code/revoke",
            group_path(session, group_id)
        )))
    }

    /// Group picture
    pub fn picture(&self, session: &str, group_id: &str, mode: ResponseMode) -> Result<Payload, Error> {
        self.client.execute(
            Request::get(format!("{}/picture", group_path(session, group_id)))
                .header("Accept", mode.accept()),
        )
    }

    /// List participants
    pub fn participants(&self, session: &str, group_id: &str) -> Result<Payload, Error> {
        self.client
            .get(&format!("{}/participants", group_path(session, group_id)))
    }

    /// Add participants
    pub fn add_participants(&self, session: &str, group_id: &str, participants: &[String]) -> Result<Payload, Error> {
        self.members(session, group_id, "participants/add", participants)
    }

    /// Remove participants
    pub fn remove_participants(
        &self,
        session: &str,
        group_id: &str,
        participants: &[String],
    ) -> Result<Payload, Error> {
        self.members(session, group_id, "participants/remove", participants)
    }

    /// Make participants admins
    pub fn promote_admins(&self, session: &str, group_id: &str, participants: &[String]) -> Result<Payload, Error> {
        self.members(session, group_id, "admin/promote", participants)
    }

    /// Revoke admin rights
    pub fn demote_admins(&self, session: &str, group_id: &str, participants: &[String]) -> Result<Payload, Error> {
        self.members(session, group_id, "admin/demote", participants)
    }

    fn members(
        &self,
        session: &str,
        group_id: &str,
        action: &str,
        participants: &[String],
    ) -> Result<Payload, Error> {
        self.client.post(
            &format!("{}/{}", group_path(session, group_id), action),
            Some(&json!({ "participants": participants })),
        )
    }
}

fn group_path(session: &str, group_id: &str) -> String {
    format!("/api/{}/groups/{}", session, group_id)
}
