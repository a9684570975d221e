//! `users.*` methods against a mock Slack server

mod common;

use httpmock::prelude::*;
use serde_json::json;
use slack_users::{ErrorKind, SlackError, USERS_PAGE_SIZE};

use common::client_for;

#[tokio::test]
async fn get_user_info_flat_payload() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/users.info")
            .body_includes("token=xoxp-test")
            .body_includes("user=U1");
        then.status(200).json_body(json!({
            "ok": true,
            "id": "U1",
            "name": "alice",
            "real_name": "Alice Liddell",
            "is_admin": true
        }));
    });

    let user = client_for(&server).get_user_info("U1").await.unwrap();

    mock.assert();
    assert_eq!(user.id, "U1");
    assert_eq!(user.name, "alice");
    assert_eq!(user.real_name, "Alice Liddell");
    assert!(user.is_admin);
}

#[tokio::test]
async fn get_user_info_nested_payload() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/users.info").body_includes("user=U2");
        then.status(200).json_body(json!({
            "ok": true,
            "user": {
                "id": "U2",
                "name": "bob",
                "profile": {"email": "bob@example.com", "title": "Ops"}
            }
        }));
    });

    let user = client_for(&server).get_user_info("U2").await.unwrap();

    assert_eq!(user.id, "U2");
    assert_eq!(user.name, "bob");
    assert_eq!(user.profile.email, "bob@example.com");
}

#[tokio::test]
async fn get_user_info_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/users.info");
        then.status(200)
            .json_body(json!({"ok": false, "error": "user_not_found"}));
    });

    let err = client_for(&server)
        .get_user_info("U_MISSING")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.to_string(), "user_not_found");
}

#[tokio::test]
async fn user_ids_are_not_validated_locally() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/users.info")
            .body_includes("user=not+a+user+id");
        then.status(200)
            .json_body(json!({"ok": false, "error": "user_not_found"}));
    });

    let err = client_for(&server)
        .get_user_info("not a user id")
        .await
        .unwrap_err();

    mock.assert();
    assert_eq!(err.api_code(), Some("user_not_found"));
}

#[tokio::test]
async fn get_user_presence() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/users.getPresence")
            .body_includes("user=U1");
        then.status(200).json_body(json!({
            "ok": true,
            "presence": "active",
            "online": true,
            "auto_away": false,
            "manual_away": false,
            "connection_count": 1,
            "last_activity": 1419027078
        }));
    });

    let presence = client_for(&server).get_user_presence("U1").await.unwrap();

    assert_eq!(presence.presence, "active");
    assert!(presence.online);
    assert_eq!(presence.connection_count, 1);
    assert_eq!(presence.last_activity.as_secs(), 1419027078);
}

#[tokio::test]
async fn get_users_first_page_sends_empty_offset() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/users.list")
            .body("token=xoxp-test&limit=1000&offset=");
        then.status(200).json_body(json!({
            "ok": true,
            "members": [{"id": "U1", "name": "alice"}, {"id": "U2", "name": "bob"}],
            "offset": "U2"
        }));
    });

    let page = client_for(&server).get_users("").await.unwrap();

    mock.assert();
    assert_eq!(USERS_PAGE_SIZE, 1000);
    assert_eq!(page.members.len(), 2);
    assert_eq!(page.members[0].name, "alice");
    assert_eq!(page.offset, "U2");
    assert!(page.has_more());
}

#[tokio::test]
async fn get_users_same_offset_same_page() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/users.list")
            .body_includes("offset=U2");
        then.status(200).json_body(json!({
            "ok": true,
            "members": [{"id": "U3", "name": "carol"}],
            "offset": ""
        }));
    });

    let client = client_for(&server);
    let first = client.get_users("U2").await.unwrap();
    let second = client.get_users("U2").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.members[0].id, "U3");
    // Last page carries an empty offset
    assert_eq!(first.offset, "");
    assert!(!first.has_more());
}

#[tokio::test]
async fn walking_pages_until_offset_is_empty() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/users.list")
            .body("token=xoxp-test&limit=1000&offset=");
        then.status(200).json_body(json!({
            "ok": true,
            "members": [{"id": "U1"}],
            "offset": "U1"
        }));
    });
    server.mock(|when, then| {
        when.method(POST)
            .path("/users.list")
            .body_includes("offset=U1");
        then.status(200).json_body(json!({
            "ok": true,
            "members": [{"id": "U2"}],
            "offset": ""
        }));
    });

    let client = client_for(&server);
    let mut ids = Vec::new();
    let mut offset = String::new();
    loop {
        let page = client.get_users(&offset).await.unwrap();
        ids.extend(page.members.into_iter().map(|u| u.id));
        if page.offset.is_empty() {
            break;
        }
        offset = page.offset;
    }

    assert_eq!(ids, vec!["U1", "U2"]);
}

#[tokio::test]
async fn set_user_presence_sends_value_verbatim() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/users.setPresence")
            .body("token=xoxp-test&presence=away");
        then.status(200).json_body(json!({"ok": true}));
    });

    client_for(&server).set_user_presence("away").await.unwrap();

    mock.assert();
}

#[tokio::test]
async fn set_user_active_sends_only_token() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/users.setActive")
            .body("token=xoxp-test");
        then.status(200).json_body(json!({"ok": true, "warning": "superfluous_charset"}));
    });

    client_for(&server).set_user_active().await.unwrap();

    mock.assert();
}

#[tokio::test]
async fn get_user_identity() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/users.identity");
        then.status(200).json_body(json!({
            "ok": true,
            "user": {"id": "U0G9QF9C6", "name": "Sonny Whether", "email": "sonny@example.com"},
            "team": {"id": "T0G9PQBBK", "name": "Naval Supply", "domain": "naval"}
        }));
    });

    let identity = client_for(&server).get_user_identity().await.unwrap();

    assert_eq!(identity.user.id, "U0G9QF9C6");
    assert_eq!(identity.user.email, "sonny@example.com");
    assert_eq!(identity.team.domain, "naval");
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/users.getPresence");
        then.status(200).body("this is not json");
    });

    let err = client_for(&server)
        .get_user_presence("U1")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Decode);
    assert!(matches!(err, SlackError::Decode { .. }));
}

#[tokio::test]
async fn server_error_is_transport_kind() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/users.list");
        then.status(503).body("Service Unavailable");
    });

    let err = client_for(&server).get_users("").await.unwrap_err();

    assert!(err.is_transport());
    assert!(matches!(err, SlackError::Status { status: 503, .. }));
}

#[tokio::test]
async fn get_user_info_malformed_nested_record_is_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/users.info");
        then.status(200).json_body(json!({
            "ok": true,
            "user": {"id": "U1", "name": "alice", "tz_offset": "bad"}
        }));
    });

    let err = client_for(&server).get_user_info("U1").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Decode);
    assert!(err.to_string().contains("users.info"));
}

#[tokio::test]
async fn get_user_info_nested_record_with_null_field() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/users.info");
        then.status(200).json_body(json!({
            "ok": true,
            "user": {"id": "U1", "name": "alice", "color": null}
        }));
    });

    let user = client_for(&server).get_user_info("U1").await.unwrap();

    assert_eq!(user.id, "U1");
    assert_eq!(user.name, "alice");
    assert_eq!(user.color, "");
}

#[tokio::test]
async fn get_users_page_with_null_profile_field() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/users.list");
        then.status(200).json_body(json!({
            "ok": true,
            "members": [
                {"id": "U1", "name": "alice", "profile": {"phone": null}},
                {"id": "U2", "name": "bob"}
            ],
            "offset": ""
        }));
    });

    let page = client_for(&server).get_users("").await.unwrap();

    assert_eq!(page.members.len(), 2);
    assert_eq!(page.members[0].profile.phone, "");
    assert_eq!(page.members[1].name, "bob");
}
