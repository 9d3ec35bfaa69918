use salvo::http::StatusCode;
use salvo::test::TestClient;
use serde_json::json;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn gallery_create_defaults_and_public_reads() {
    let app = TestApp::new().with_admin().await;

    let created = app
        .send(
            app.admin(TestClient::post(url("/api/gallery")))
                .json(&json!({ "image": "http://img/1.jpg", "caption": "Opening" })),
        )
        .await
        .assert_status(StatusCode::CREATED);
    assert_eq!(created.body["category"], "events");
    assert_eq!(created.body["isActive"], true);
    let id = created.id();

    app.send(TestClient::get(url(&format!("/api/gallery/{id}"))))
        .await
        .assert_status(StatusCode::OK);

    let listed = app.send(TestClient::get(url("/api/gallery"))).await;
    assert_eq!(listed.body.as_array().map(Vec::len), Some(1));
}

#[test_log::test(tokio::test)]
async fn gallery_filter_and_visibility() {
    let app = TestApp::new().with_admin().await;
    for category in ["seminar", "awards"] {
        app.send(
            app.admin(TestClient::post(url("/api/gallery")))
                .json(&json!({ "image": format!("http://img/{category}.jpg"), "category": category })),
        )
        .await
        .assert_status(StatusCode::CREATED);
    }

    let seminars = app
        .send(TestClient::get(url("/api/gallery?category=seminar")))
        .await
        .assert_status(StatusCode::OK);
    let items = seminars.body.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["category"], "seminar");

    app.send(TestClient::get(url("/api/gallery?category=vastu")))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let id = items[0]["id"].as_str().expect("id").to_string();
    app.send(
        app.admin(TestClient::put(url(&format!("/api/gallery/{id}"))))
            .json(&json!({ "isActive": false })),
    )
    .await
    .assert_status(StatusCode::OK);

    app.send(TestClient::get(url(&format!("/api/gallery/{id}"))))
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .assert_message("Gallery item not found");
}

#[test_log::test(tokio::test)]
async fn gallery_writes_require_admin() {
    let app = TestApp::new();

    app.send(TestClient::post(url("/api/gallery")).json(&json!({ "image": "http://img/x.jpg" })))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}
