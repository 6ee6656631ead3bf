//! Integration tests for the event catalog and event signup.

mod helpers;

use http::StatusCode;

use helpers::{TestApp, unique_suffix};

/// Provision, activate, and log in a fresh student; returns the token.
async fn login_fresh_student(app: &TestApp, sfx: &str) -> String {
    let email = format!("student-{sfx}@campus.test");
    app.import_student("E. Student", &format!("N-{sfx}"), &format!("S-{sfx}"))
        .await;
    app.activate_student(
        "E. Student",
        &format!("N-{sfx}"),
        &format!("S-{sfx}"),
        &email,
        "password123",
    )
    .await;
    app.login(&email, "password123").await
}

#[tokio::test]
async fn test_free_event_stores_price_zero() {
    let Some(app) = TestApp::try_new().await else { return };

    let response = app
        .request_multipart(
            "/api/admin/events",
            &[
                ("name", "Free Concert"),
                ("venue", "Quad"),
                ("date", "2026-10-01"),
                ("time", "19:00"),
                ("is_free", "true"),
                ("price", "5000"),
            ],
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["is_free"], true);
    assert_eq!(data["price"], 0);
}

#[tokio::test]
async fn test_create_event_missing_fields_rejected() {
    let Some(app) = TestApp::try_new().await else { return };

    let response = app
        .request_multipart(
            "/api/admin/events",
            &[("name", "No Venue"), ("date", "2026-10-01"), ("time", "19:00")],
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_event_photo_url_materialization() {
    let Some(app) = TestApp::try_new().await else { return };

    let with_photo = app
        .request_multipart(
            "/api/admin/events",
            &[
                ("name", "Photo Event"),
                ("venue", "Hall B"),
                ("date", "2026-10-02"),
                ("time", "12:00"),
            ],
            Some(("photo", "poster.png", b"fake-png-bytes".as_slice())),
        )
        .await;

    assert_eq!(with_photo.status, StatusCode::OK);
    let url = with_photo.body["data"]["photo"]
        .as_str()
        .expect("photo url present");
    assert!(url.starts_with("http://campushub.test/uploads/"));
    assert!(url.ends_with(".png"));

    // Without a photo the reference stays null, not an empty string.
    let without_photo = app
        .request_multipart(
            "/api/admin/events",
            &[
                ("name", "Plain Event"),
                ("venue", "Hall C"),
                ("date", "2026-10-03"),
                ("time", "12:00"),
            ],
            None,
        )
        .await;

    assert_eq!(without_photo.status, StatusCode::OK);
    assert!(without_photo.body["data"]["photo"].is_null());
}

#[tokio::test]
async fn test_get_unknown_event_is_not_found() {
    let Some(app) = TestApp::try_new().await else { return };

    let response = app
        .request(
            "GET",
            "/api/events/00000000-0000-0000-0000-000000000000",
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_signup_rejected_without_token() {
    let Some(app) = TestApp::try_new().await else { return };
    let event_id = app.create_event("Token Required").await;

    let missing = app
        .request("POST", &format!("/api/events/{event_id}/signup"), None, None)
        .await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);

    let garbage = app
        .request(
            "POST",
            &format!("/api/events/{event_id}/signup"),
            None,
            Some("not-a-real-token"),
        )
        .await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_signup_once_then_conflict() {
    let Some(app) = TestApp::try_new().await else { return };
    let sfx = unique_suffix();
    let token = login_fresh_student(&app, &sfx).await;
    let event_id = app.create_event(&format!("Signup Event {sfx}")).await;

    let first = app
        .request(
            "POST",
            &format!("/api/events/{event_id}/signup"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(app.attendee_count(&event_id).await, 1);

    let second = app
        .request(
            "POST",
            &format!("/api/events/{event_id}/signup"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(app.attendee_count(&event_id).await, 1);
}

#[tokio::test]
async fn test_concurrent_signups_yield_one_membership() {
    let Some(app) = TestApp::try_new().await else { return };
    let sfx = unique_suffix();
    let token = login_fresh_student(&app, &sfx).await;
    let event_id = app.create_event(&format!("Race Event {sfx}")).await;

    let path = format!("/api/events/{event_id}/signup");
    let (a, b) = tokio::join!(
        app.request("POST", &path, None, Some(&token)),
        app.request("POST", &path, None, Some(&token)),
    );

    // However the race interleaves, exactly one signup wins.
    let statuses = [a.status, b.status];
    assert!(statuses.contains(&StatusCode::OK), "one attempt must succeed");
    assert!(
        statuses.contains(&StatusCode::CONFLICT),
        "one attempt must be rejected"
    );
    assert_eq!(app.attendee_count(&event_id).await, 1);
}

#[tokio::test]
async fn test_event_detail_expands_attendees_without_secrets() {
    let Some(app) = TestApp::try_new().await else { return };
    let sfx = unique_suffix();
    let token = login_fresh_student(&app, &sfx).await;
    let event_id = app.create_event(&format!("Detail Event {sfx}")).await;

    app.request(
        "POST",
        &format!("/api/events/{event_id}/signup"),
        None,
        Some(&token),
    )
    .await;

    let response = app
        .request("GET", &format!("/api/events/{event_id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let attendees = response.body["data"]["attendees"]
        .as_array()
        .expect("attendees array");
    assert_eq!(attendees.len(), 1);

    let attendee = &attendees[0];
    assert_eq!(attendee["name"], "E. Student");
    assert_eq!(attendee["national_id"], format!("N-{sfx}"));
    assert_eq!(attendee["student_number"], format!("S-{sfx}"));
    assert_eq!(attendee["email"], format!("student-{sfx}@campus.test"));
    // The projection stops there: no hash, nothing else.
    assert!(attendee.get("password_hash").is_none());
    assert_eq!(attendee.as_object().expect("object").len(), 5);
}

#[tokio::test]
async fn test_list_events_includes_created_event() {
    let Some(app) = TestApp::try_new().await else { return };
    let sfx = unique_suffix();
    let name = format!("Listed Event {sfx}");
    app.create_event(&name).await;

    let response = app.request("GET", "/api/events", None, None).await;
    assert_eq!(response.status, StatusCode::OK);

    let events = response.body["data"].as_array().expect("events array");
    assert!(events.iter().any(|e| e["name"] == name.as_str()));
}
