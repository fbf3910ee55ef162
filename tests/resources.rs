mod common;

use std::io::Write;

use common::{MockServer, Reply};
use serde_json::json;
use waha_rs::{
    ContactQuery, FileOptions, ImageOptions, MediaFile, NewSession, Page, Payload, QrFormat,
    ResponseMode, SortBy, SortOrder, TextOptions, VideoOptions,
};

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn send_text_minimal_body() {
    let server = MockServer::start(Reply::json(201, json!({ "id": "msg-1" })));
    let payload = server
        .client()
        .messages()
        .send_text("default", "123@c.us", "Hello", &TextOptions::default())
        .unwrap();
    assert_eq!(payload, Payload::Json(json!({ "id": "msg-1" })));

    let req = server.last();
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/api/sendText");
    assert_eq!(
        req.json(),
        json!({ "session": "default", "chatId": "123@c.us", "text": "Hello" })
    );
}

#[test]
fn send_text_with_options() {
    let server = MockServer::start(Reply::ok());
    let options = TextOptions {
        reply_to: Some("false_123@c.us_AAA".to_string()),
        mentions: Some(vec!["456@c.us".to_string()]),
        link_preview: Some(false),
        link_preview_high_quality: None,
    };
    server
        .client()
        .messages()
        .send_text("default", "123@g.us", "Hi @456", &options)
        .unwrap();

    assert_eq!(
        server.last().json(),
        json!({
            "session": "default",
            "chatId": "123@g.us",
            "text": "Hi @456",
            "reply_to": "false_123@c.us_AAA",
            "mentions": ["456@c.us"],
            "linkPreview": false,
        })
    );
}

#[test]
fn send_image_from_local_file() {
    let mut tmp = tempfile::Builder::new().suffix(".jpg").tempfile().unwrap();
    tmp.write_all(&[0xff, 0xd8, 0xff]).unwrap();

    let server = MockServer::start(Reply::ok());
    let options = ImageOptions {
        caption: Some("look".to_string()),
    };
    server
        .client()
        .messages()
        .send_image("default", "123@c.us", tmp.path(), &options)
        .unwrap();

    let body = server.last().json();
    let name = tmp.path().file_name().unwrap().to_string_lossy().into_owned();
    assert_eq!(body["caption"], json!("look"));
    assert_eq!(
        body["file"],
        json!({ "mimetype": "image/jpeg", "filename": name, "data": "/9j/" })
    );
}

#[test]
fn send_file_unknown_type_falls_back() {
    let mut tmp = tempfile::Builder::new().suffix(".qqunknown").tempfile().unwrap();
    tmp.write_all(b"payload").unwrap();

    let server = MockServer::start(Reply::ok());
    server
        .client()
        .messages()
        .send_file("default", "123@c.us", tmp.path(), &FileOptions::default())
        .unwrap();

    let body = server.last().json();
    assert_eq!(body["file"]["mimetype"], json!("application/octet-stream"));
    assert!(body.get("caption").is_none());
}

#[test]
fn send_video_by_url() {
    let server = MockServer::start(Reply::ok());
    let options = VideoOptions {
        as_note: Some(true),
        ..Default::default()
    };
    server
        .client()
        .messages()
        .send_video(
            "default",
            "123@c.us",
            MediaFile::from_url("https://example.com/v.mp4", "video/mp4"),
            &options,
        )
        .unwrap();

    let req = server.last();
    assert_eq!(req.path, "/api/sendVideo");
    assert_eq!(
        req.json(),
        json!({
            "session": "default",
            "chatId": "123@c.us",
            "file": { "mimetype": "video/mp4", "url": "https://example.com/v.mp4" },
            "asNote": true,
        })
    );
}

#[test]
fn missing_local_file_never_reaches_the_server() {
    let server = MockServer::start(Reply::ok());
    let err = server
        .client()
        .messages()
        .send_image(
            "default",
            "123@c.us",
            std::path::Path::new("/no/such/file.png"),
            &ImageOptions::default(),
        )
        .unwrap_err();
    assert!(matches!(err, waha_rs::Error::File { .. }));
    assert!(server.requests().is_empty());
}

#[test]
fn message_management_paths() {
    let server = MockServer::start(Reply::ok());
    let client = server.client();
    let messages = client.messages();

    messages.react("default", "msg-1", "👍").unwrap();
    let req = server.last();
    assert_eq!((req.method.as_str(), req.path.as_str()), ("PUT", "/api/reaction"));
    assert_eq!(
        req.json(),
        json!({ "session": "default", "messageId": "msg-1", "reaction": "👍" })
    );

    messages.edit("default", "1@c.us", "msg-1", "fixed", None).unwrap();
    let req = server.last();
    assert_eq!(req.method, "PUT");
    assert_eq!(req.path, "/api/default/chats/1@c.us/messages/msg-1");
    assert_eq!(req.json(), json!({ "text": "fixed" }));

    messages.pin("default", "1@c.us", "msg-1").unwrap();
    assert_eq!(server.last().path, "/api/default/chats/1@c.us/messages/msg-1/pin");

    messages.delete("default", "1@c.us", "msg-1").unwrap();
    assert_eq!(server.last().method, "DELETE");
}

#[test]
fn session_lifecycle_requests() {
    let server = MockServer::start(Reply::ok());
    let client = server.client();
    let sessions = client.sessions();

    sessions.list(false).unwrap();
    assert_eq!(server.last().query, None);

    sessions.list(true).unwrap();
    assert_eq!(server.last().query_pairs(), pairs(&[("all", "true")]));

    let new_session = NewSession {
        start: Some(false),
        ..NewSession::named("bot")
    };
    sessions.create(&new_session).unwrap();
    assert_eq!(server.last().json(), json!({ "name": "bot", "start": false }));

    sessions.restart("bot").unwrap();
    let req = server.last();
    assert_eq!((req.method.as_str(), req.path.as_str()), ("POST", "/api/sessions/bot/restart"));

    sessions.update("bot", &json!({ "debug": true })).unwrap();
    assert_eq!(
        server.last().json(),
        json!({ "name": "bot", "config": { "debug": true } })
    );

    sessions.request_code("bot", "12132132130").unwrap();
    let req = server.last();
    assert_eq!(req.path, "/api/bot/auth/request-code");
    assert_eq!(req.json(), json!({ "phoneNumber": "12132132130" }));
}

#[test]
fn qr_and_screenshot_modes() {
    let server = MockServer::start(Reply::raw(200, "image/png", b"\x89PNG"));
    let client = server.client();

    let payload = client
        .sessions()
        .qr("default", QrFormat::Image, ResponseMode::Binary)
        .unwrap();
    assert_eq!(payload.into_media_bytes().unwrap(), b"\x89PNG".to_vec());
    let req = server.last();
    assert_eq!(req.path, "/api/default/auth/qr");
    assert_eq!(req.query_pairs(), pairs(&[("format", "image")]));
    assert_eq!(req.header("accept").as_deref(), Some("image/*"));

    client
        .sessions()
        .qr("default", QrFormat::Raw, ResponseMode::Binary)
        .unwrap();
    assert_eq!(server.last().header("accept").as_deref(), Some("application/json"));

    client
        .sessions()
        .screenshot("default", ResponseMode::Json)
        .unwrap();
    let req = server.last();
    assert_eq!(req.path, "/api/screenshot");
    assert_eq!(req.query_pairs(), pairs(&[("session", "default")]));
    assert_eq!(req.header("accept").as_deref(), Some("application/json"));
}

#[test]
fn wrapped_json_picture() {
    let server = MockServer::start(Reply::json(200, json!({ "mimetype": "image/jpeg", "data": "AQID" })));
    let payload = server
        .client()
        .groups()
        .picture("default", "1@g.us", ResponseMode::Json)
        .unwrap();
    assert_eq!(payload.into_media_bytes().unwrap(), vec![1, 2, 3]);
    assert_eq!(server.last().path, "/api/default/groups/1@g.us/picture");
}

#[test]
fn chats_queries_and_bodies() {
    let server = MockServer::start(Reply::ok());
    let client = server.client();
    let chats = client.chats();

    chats.list("default", &Page::default()).unwrap();
    assert_eq!(server.last().query, None);

    chats.list("default", &Page::new(20, 40)).unwrap();
    assert_eq!(server.last().query_pairs(), pairs(&[("limit", "20"), ("offset", "40")]));

    chats.messages("default", "1@c.us", Some(10), true).unwrap();
    let req = server.last();
    assert_eq!(req.path, "/api/default/chats/1@c.us/messages");
    assert_eq!(req.query_pairs(), pairs(&[("limit", "10"), ("downloadMedia", "true")]));

    chats.read_messages("default", "1@c.us", None).unwrap();
    let req = server.last();
    assert_eq!(req.path, "/api/default/chats/1@c.us/messages/read");
    assert_eq!(req.json(), json!({}));

    chats.archive("default", "1@c.us").unwrap();
    assert_eq!(server.last().path, "/api/default/chats/1@c.us/archive");
}

#[test]
fn contacts_queries() {
    let server = MockServer::start(Reply::ok());
    let client = server.client();
    let contacts = client.contacts();

    let query = ContactQuery {
        limit: Some(50),
        sort_by: Some(SortBy::Name),
        sort_order: Some(SortOrder::Desc),
        ..Default::default()
    };
    contacts.all("default", &query).unwrap();
    let req = server.last();
    assert_eq!(req.path, "/api/contacts/all");
    assert_eq!(
        req.query_pairs(),
        pairs(&[
            ("session", "default"),
            ("limit", "50"),
            ("sortBy", "name"),
            ("sortOrder", "desc"),
        ])
    );

    contacts.check_exists("default", "1234567890").unwrap();
    assert_eq!(
        server.last().query_pairs(),
        pairs(&[("session", "default"), ("phone", "1234567890")])
    );

    contacts.block("default", "1@c.us").unwrap();
    let req = server.last();
    assert_eq!(req.path, "/api/contacts/block");
    assert_eq!(req.json(), json!({ "session": "default", "chatId": "1@c.us" }));

    contacts.update("default", "1@c.us", "John", "Doe").unwrap();
    let req = server.last();
    assert_eq!((req.method.as_str(), req.path.as_str()), ("PUT", "/api/default/contacts/1@c.us"));
    assert_eq!(req.json(), json!({ "firstName": "John", "lastName": "Doe" }));
}

#[test]
fn groups_requests() {
    let server = MockServer::start(Reply::ok());
    let client = server.client();
    let groups = client.groups();

    groups.create("default", "Team", &[]).unwrap();
    assert_eq!(server.last().json(), json!({ "subject": "Team" }));

    let members = vec!["2@c.us".to_string()];
    groups.promote_admins("default", "1@g.us", &members).unwrap();
    let req = server.last();
    assert_eq!(req.path, "/api/default/groups/1@g.us/admin/promote");
    assert_eq!(req.json(), json!({ "participants": ["2@c.us"] }));

    groups.revoke_invite_code("default", "1@g.us").unwrap();
    assert_eq!(server.last().path, "/api/default/groups/1@g.us/invite-code/revoke");
}

#[test]
fn status_profile_and_channels() {
    let server = MockServer::start(Reply::ok());
    let client = server.client();

    client.status().delete("default", "status-1").unwrap();
    let req = server.last();
    assert_eq!((req.method.as_str(), req.path.as_str()), ("POST", "/api/default/status/delete"));
    assert_eq!(req.json(), json!({ "messageId": "status-1" }));

    client
        .status()
        .send_image("default", MediaFile::from_url("https://example.com/a.jpg", "image/jpeg"), None)
        .unwrap();
    assert!(server.last().json().get("caption").is_none());

    assert_eq!(
        client.profile().picture_url("default"),
        format!("{}/api/default/profile/picture", server.base_url)
    );

    client.channels().create("default", "News", None).unwrap();
    assert_eq!(server.last().json(), json!({ "name": "News" }));

    client.channels().messages("default", "123@newsletter", Some(5)).unwrap();
    let req = server.last();
    assert_eq!(req.path, "/api/default/chats/123@newsletter/messages");
    assert_eq!(req.query_pairs(), pairs(&[("limit", "5")]));
}
