use salvo::http::StatusCode;
use salvo::test::TestClient;
use serde_json::{Value, json};

use super::helpers::*;

fn message_payload() -> Value {
    json!({
        "name": "Ravi",
        "email": "ravi@example.com",
        "phone": "+91 98765 43210",
        "message": "Please advise on my plot"
    })
}

#[test_log::test(tokio::test)]
async fn contact_without_phone_is_rejected() {
    let app = TestApp::new().with_admin().await;
    let mut payload = message_payload();
    payload.as_object_mut().expect("object").remove("phone");

    let res = app
        .send(TestClient::post(url("/api/contact")).json(&payload))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(res.error_fields(), vec!["phone"]);

    let stored = app
        .send(app.admin(TestClient::get(url("/api/contact"))))
        .await
        .assert_status(StatusCode::OK);
    assert_eq!(stored.body, json!([]));
}

#[test_log::test(tokio::test)]
async fn contact_triage_flow() {
    let app = TestApp::new().with_admin().await;

    let created = app
        .send(TestClient::post(url("/api/contact")).json(&message_payload()))
        .await
        .assert_status(StatusCode::CREATED);
    assert_eq!(created.body["isRead"], false);
    let id = created.id();

    // Listing is admin only.
    app.send(TestClient::get(url("/api/contact")))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    let read = app
        .send(app.admin(TestClient::put(url(&format!("/api/contact/{id}/read")))))
        .await
        .assert_status(StatusCode::OK);
    assert_eq!(read.body["isRead"], true);

    app.send(app.admin(TestClient::delete(url(&format!("/api/contact/{id}")))))
        .await
        .assert_status(StatusCode::OK)
        .assert_message("Message deleted successfully");

    app.send(app.admin(TestClient::put(url(&format!("/api/contact/{id}/read")))))
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .assert_message("Message not found");
}

#[test_log::test(tokio::test)]
async fn contact_rejects_invalid_email() {
    let app = TestApp::new();
    let mut payload = message_payload();
    payload["email"] = json!("ravi-at-example");

    let res = app
        .send(TestClient::post(url("/api/contact")).json(&payload))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(res.error_fields(), vec!["email"]);
}
