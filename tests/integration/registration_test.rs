//! Integration tests for the activation and login flow.

mod helpers;

use http::StatusCode;

use helpers::{TestApp, unique_suffix};

#[tokio::test]
async fn test_activation_requires_provisioned_student() {
    let Some(app) = TestApp::try_new().await else { return };
    let sfx = unique_suffix();

    let response = app
        .activate_student(
            "Ghost Student",
            &format!("N-{sfx}"),
            &format!("S-{sfx}"),
            &format!("ghost-{sfx}@campus.test"),
            "password123",
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    // The allow-list miss must not create a record either.
    assert_eq!(
        app.student_count(&format!("N-{sfx}"), &format!("S-{sfx}")).await,
        0
    );
}

#[tokio::test]
async fn test_activation_succeeds_exactly_once() {
    let Some(app) = TestApp::try_new().await else { return };
    let sfx = unique_suffix();
    let (nid, snum) = (format!("N-{sfx}"), format!("S-{sfx}"));
    let email = format!("a-{sfx}@campus.test");

    app.import_student("A. Student", &nid, &snum).await;

    let first = app
        .activate_student("A. Student", &nid, &snum, &email, "password123")
        .await;
    assert_eq!(first.status, StatusCode::OK);

    // Re-activation is rejected, not treated as a no-op.
    let second = app
        .activate_student("A. Student", &nid, &snum, &email, "password123")
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);

    // Even with entirely different data.
    let third = app
        .activate_student(
            "Someone Else",
            &nid,
            &snum,
            &format!("other-{sfx}@campus.test"),
            "different-password",
        )
        .await;
    assert_eq!(third.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_activation_missing_fields_rejected() {
    let Some(app) = TestApp::try_new().await else { return };

    let response = app
        .request(
            "POST",
            "/api/students/signup",
            Some(serde_json::json!({
                "name": "",
                "national_id": "N1",
                "student_number": "S1",
                "email": "a@campus.test",
                "password": "pw",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_email_conflict_between_students() {
    let Some(app) = TestApp::try_new().await else { return };
    let sfx = unique_suffix();
    let email = format!("shared-{sfx}@campus.test");

    app.import_student("First", &format!("N1-{sfx}"), &format!("S1-{sfx}"))
        .await;
    app.import_student("Second", &format!("N2-{sfx}"), &format!("S2-{sfx}"))
        .await;

    let first = app
        .activate_student("First", &format!("N1-{sfx}"), &format!("S1-{sfx}"), &email, "pw1")
        .await;
    assert_eq!(first.status, StatusCode::OK);

    // Same email on a different student surfaces as a conflict, not a 500.
    let second = app
        .activate_student("Second", &format!("N2-{sfx}"), &format!("S2-{sfx}"), &email, "pw2")
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_login_returns_token() {
    let Some(app) = TestApp::try_new().await else { return };
    let sfx = unique_suffix();
    let email = format!("login-{sfx}@campus.test");

    app.import_student("L. Student", &format!("N-{sfx}"), &format!("S-{sfx}"))
        .await;
    app.activate_student(
        "L. Student",
        &format!("N-{sfx}"),
        &format!("S-{sfx}"),
        &email,
        "password123",
    )
    .await;

    let response = app
        .request(
            "POST",
            "/api/students/login",
            Some(serde_json::json!({ "email": email, "password": "password123" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert!(data["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(data["name"], "L. Student");
    assert!(data["student_id"].as_str().is_some());
    assert!(data["expires_at"].as_str().is_some());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let Some(app) = TestApp::try_new().await else { return };
    let sfx = unique_suffix();
    let email = format!("anti-enum-{sfx}@campus.test");

    app.import_student("A. Student", &format!("N-{sfx}"), &format!("S-{sfx}"))
        .await;
    app.activate_student(
        "A. Student",
        &format!("N-{sfx}"),
        &format!("S-{sfx}"),
        &email,
        "password123",
    )
    .await;

    let wrong_password = app
        .request(
            "POST",
            "/api/students/login",
            Some(serde_json::json!({ "email": email, "password": "wrong" })),
            None,
        )
        .await;

    let unknown_email = app
        .request(
            "POST",
            "/api/students/login",
            Some(serde_json::json!({
                "email": format!("nobody-{sfx}@campus.test"),
                "password": "password123",
            })),
            None,
        )
        .await;

    // Identical status, error code, and message for both failure modes.
    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_email.body);
}

#[tokio::test]
async fn test_provisioned_student_cannot_login() {
    let Some(app) = TestApp::try_new().await else { return };
    let sfx = unique_suffix();

    app.import_student("P. Student", &format!("N-{sfx}"), &format!("S-{sfx}"))
        .await;

    // No activation happened, so there is no email to find; the response
    // must be the same generic rejection.
    let response = app
        .request(
            "POST",
            "/api/students/login",
            Some(serde_json::json!({
                "email": format!("p-{sfx}@campus.test"),
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
