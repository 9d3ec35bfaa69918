use salvo::http::StatusCode;
use salvo::test::TestClient;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn health_reports_ok_with_timestamp() {
    let app = TestApp::new();

    let res = app
        .send(TestClient::get(url("/api/health")))
        .await
        .assert_status(StatusCode::OK);

    assert_eq!(res.body["status"], "OK");
    let timestamp = res.body["timestamp"].as_str().expect("timestamp string");
    assert!(timestamp.contains('T'), "not RFC 3339: {timestamp}");
}

#[test_log::test(tokio::test)]
async fn unknown_route_is_not_found() {
    let app = TestApp::new();

    let res = app.send(TestClient::get(url("/api/horoscopes"))).await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
}
