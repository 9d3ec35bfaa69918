//! Workshop participant confirmations.

use salvo::http::StatusCode;
use salvo::test::TestClient;
use serde_json::{Value, json};

use super::helpers::*;

fn confirmation_payload(accepted: bool) -> Value {
    json!({
        "name": "Meera",
        "organization": "Acme Builders",
        "position": "Architect",
        "email": "meera@example.com",
        "phone": "12345",
        "acceptedTerms": accepted
    })
}

#[test_log::test(tokio::test)]
async fn terms_must_be_accepted() {
    let app = TestApp::new();

    let res = app
        .send(TestClient::post(url("/api/confirmations")).json(&confirmation_payload(false)))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(res.error_fields(), vec!["acceptedTerms"]);
}

#[test_log::test(tokio::test)]
async fn confirmations_are_admin_reviewable() {
    let app = TestApp::new().with_admin().await;

    let created = app
        .send(TestClient::post(url("/api/confirmations")).json(&confirmation_payload(true)))
        .await
        .assert_status(StatusCode::CREATED);
    let id = created.id();

    app.send(TestClient::get(url(&format!("/api/confirmations/{id}"))))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    let fetched = app
        .send(app.admin(TestClient::get(url(&format!("/api/confirmations/{id}")))))
        .await
        .assert_status(StatusCode::OK);
    assert_eq!(fetched.body["organization"], "Acme Builders");
    assert_eq!(fetched.body["acceptedTerms"], true);

    let listed = app
        .send(app.admin(TestClient::get(url("/api/confirmations"))))
        .await
        .assert_status(StatusCode::OK);
    assert_eq!(listed.body.as_array().map(Vec::len), Some(1));

    app.send(app.admin(TestClient::delete(url(&format!("/api/confirmations/{id}")))))
        .await
        .assert_status(StatusCode::OK);
    app.send(app.admin(TestClient::get(url(&format!("/api/confirmations/{id}")))))
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .assert_message("Confirmation not found");
}
