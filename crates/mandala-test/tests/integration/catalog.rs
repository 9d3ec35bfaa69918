//! Catalog scenarios across the services, awards, news and workshops families.

use salvo::http::StatusCode;
use salvo::test::TestClient;
use serde_json::json;

use super::helpers::*;
use mandala_test::component::config::Settings;

// ============================================================================
// Scope enforcement
// ============================================================================

#[test_log::test(tokio::test)]
async fn awards_create_forces_awards_category() {
    let app = TestApp::new().with_admin().await;

    let item = app
        .create_item(
            "awards",
            &content_payload_with("award-x", &json!({ "category": "news" })),
        )
        .await;
    assert_eq!(item["category"], "awards");

    let item = app.create_item("awards", &content_payload("award-y")).await;
    assert_eq!(item["category"], "awards");
}

#[test_log::test(tokio::test)]
async fn news_slug_lookup_miss_names_the_resource() {
    let app = TestApp::new();

    app.send(TestClient::get(url("/api/news/slug/does-not-exist")))
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .assert_message("News not found");
}

#[test_log::test(tokio::test)]
async fn award_update_cannot_touch_news_item() {
    let app = TestApp::new().with_admin().await;
    let news = app.create_item("news", &content_payload("launch")).await;
    let id = news["id"].as_str().expect("id");

    app.send(
        app.admin(TestClient::put(url(&format!("/api/awards/{id}"))))
            .json(&json!({ "title": "Hijacked" })),
    )
    .await
    .assert_status(StatusCode::NOT_FOUND)
    .assert_message("Award not found");

    let res = app
        .send(TestClient::get(url(&format!("/api/news/id/{id}"))))
        .await
        .assert_status(StatusCode::OK);
    assert_eq!(res.body["title"], news["title"]);
    assert_eq!(res.body["category"], "news");
}

#[test_log::test(tokio::test)]
async fn award_delete_cannot_remove_news_item() {
    let app = TestApp::new().with_admin().await;
    let news = app.create_item("news", &content_payload("keep-me")).await;
    let id = news["id"].as_str().expect("id");

    app.send(app.admin(TestClient::delete(url(&format!("/api/awards/{id}")))))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    app.send(TestClient::get(url("/api/news/slug/keep-me")))
        .await
        .assert_status(StatusCode::OK);
}

#[test_log::test(tokio::test)]
async fn scoped_lists_only_show_their_categories() {
    let app = TestApp::new().with_admin().await;
    app.create_item("news", &content_payload("n1")).await;
    app.create_item("awards", &content_payload("a1")).await;
    app.create_item("workshops", &content_payload("w1")).await;
    app.create_item(
        "workshops",
        &content_payload_with("s1", &json!({ "category": "seminar" })),
    )
    .await;

    let news = app.send(TestClient::get(url("/api/news"))).await;
    assert_eq!(news.slugs(), vec!["n1"]);

    let workshops = app.send(TestClient::get(url("/api/workshops"))).await;
    assert_eq!(workshops.slugs(), vec!["s1", "w1"]);

    let all = app.send(TestClient::get(url("/api/services"))).await;
    assert_eq!(all.slugs(), vec!["s1", "w1", "a1", "n1"]);
}

#[test_log::test(tokio::test)]
async fn workshops_reject_categories_outside_family() {
    let app = TestApp::new().with_admin().await;

    let res = app
        .send(
            app.admin(TestClient::post(url("/api/workshops")))
                .json(&content_payload_with("w", &json!({ "category": "vastu" }))),
        )
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(res.error_fields(), vec!["category"]);
}

// ============================================================================
// Validation and uniqueness
// ============================================================================

#[test_log::test(tokio::test)]
async fn duplicate_slug_across_categories_is_rejected() {
    let app = TestApp::new().with_admin().await;
    app.create_item("news", &content_payload("shared")).await;

    let res = app
        .send(
            app.admin(TestClient::post(url("/api/services")))
                .json(&content_payload_with("shared", &json!({ "category": "vastu" }))),
        )
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_message("slug already exists");
    assert_eq!(res.error_fields(), vec!["slug"]);

    let all = app.send(TestClient::get(url("/api/services"))).await;
    assert_eq!(all.slugs(), vec!["shared"]);
}

#[test_log::test(tokio::test)]
async fn invalid_category_is_rejected_and_not_persisted() {
    let app = TestApp::new().with_admin().await;

    let res = app
        .send(
            app.admin(TestClient::post(url("/api/services")))
                .json(&content_payload_with("tarot", &json!({ "category": "tarot" }))),
        )
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_message("Validation failed");
    assert_eq!(res.error_fields(), vec!["category"]);

    app.send(TestClient::get(url("/api/services/slug/tarot")))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_log::test(tokio::test)]
async fn missing_required_fields_are_all_reported() {
    let app = TestApp::new().with_admin().await;

    let res = app
        .send(
            app.admin(TestClient::post(url("/api/news")))
                .json(&json!({ "title": "Only a title" })),
        )
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(
        res.error_fields(),
        vec!["content", "description", "image", "slug"]
    );
}

#[test_log::test(tokio::test)]
async fn malformed_json_body_is_bad_request() {
    let app = TestApp::new().with_admin().await;

    app.send(raw_json(
        app.admin(TestClient::post(url("/api/news"))),
        "{ not json",
    ))
    .await
    .assert_status(StatusCode::BAD_REQUEST)
    .assert_message("Invalid request body");
}

#[test_log::test(tokio::test)]
async fn features_and_price_round_trip() {
    let app = TestApp::new().with_admin().await;
    app.create_item(
        "services",
        &content_payload_with(
            "premium",
            &json!({ "category": "numerology", "features": ["a", "b"], "price": 100 }),
        ),
    )
    .await;

    let res = app
        .send(TestClient::get(url("/api/services/slug/premium")))
        .await
        .assert_status(StatusCode::OK);

    assert_eq!(res.body["features"], json!(["a", "b"]));
    assert_eq!(res.body["price"].as_f64(), Some(100.0));
    assert_eq!(res.body["isActive"], true);
}

// ============================================================================
// Visibility and grouping
// ============================================================================

#[test_log::test(tokio::test)]
async fn inactive_items_are_hidden_from_public_reads() {
    let app = TestApp::new().with_admin().await;
    let item = app
        .create_item(
            "services",
            &content_payload_with("quiet", &json!({ "category": "astrology" })),
        )
        .await;
    let id = item["id"].as_str().expect("id");

    app.send(
        app.admin(TestClient::put(url(&format!("/api/services/{id}"))))
            .json(&json!({ "isActive": false })),
    )
    .await
    .assert_status(StatusCode::OK);

    assert!(app.send(TestClient::get(url("/api/services"))).await.slugs().is_empty());
    assert!(
        app.send(TestClient::get(url("/api/services/category/astrology")))
            .await
            .slugs()
            .is_empty()
    );
    app.send(TestClient::get(url("/api/services/slug/quiet")))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let grouped = app.send(TestClient::get(url("/api/services/categories"))).await;
    assert_eq!(grouped.body, json!({}));

    app.send(TestClient::get(url(&format!("/api/services/id/{id}"))))
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .assert_message("Service not found");
}

#[test_log::test(tokio::test)]
async fn create_ignores_requested_inactive_flag() {
    let app = TestApp::new().with_admin().await;

    let item = app
        .create_item(
            "awards",
            &content_payload_with("gold", &json!({ "isActive": false })),
        )
        .await;
    assert_eq!(item["isActive"], true);

    assert_eq!(
        app.send(TestClient::get(url("/api/awards"))).await.slugs(),
        vec!["gold"]
    );
    assert_eq!(
        app.send(TestClient::get(url("/api/services"))).await.slugs(),
        vec!["gold"]
    );
}

#[test_log::test(tokio::test)]
async fn grouped_listing_is_a_partition_of_the_flat_listing() {
    let app = TestApp::new().with_admin().await;
    for (slug, category) in [
        ("home", "vastu"),
        ("chart", "astrology"),
        ("office", "vastu"),
        ("plot", "types-of-vastu"),
    ] {
        app.create_item(
            "services",
            &content_payload_with(slug, &json!({ "category": category })),
        )
        .await;
    }
    app.create_item("news", &content_payload("headline")).await;

    let flat = app.send(TestClient::get(url("/api/services"))).await;
    let grouped = app
        .send(TestClient::get(url("/api/services/categories")))
        .await
        .assert_status(StatusCode::OK);

    let groups = grouped.body.as_object().expect("object keyed by category");
    let mut keys: Vec<&str> = groups.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["astrology", "news", "types-of-vastu", "vastu"]);

    let flat_items = flat.body.as_array().expect("array");
    let total: usize = groups
        .values()
        .map(|bucket| bucket.as_array().map_or(0, Vec::len))
        .sum();
    assert_eq!(total, flat_items.len());

    let vastu: Vec<&str> = groups["vastu"]
        .as_array()
        .expect("bucket")
        .iter()
        .filter_map(|i| i["slug"].as_str())
        .collect();
    assert_eq!(vastu, vec!["office", "home"]);
}

#[test_log::test(tokio::test)]
async fn category_lookup_rejects_unknown_category() {
    let app = TestApp::new();

    let res = app
        .send(TestClient::get(url("/api/services/category/palmistry")))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(res.error_fields(), vec!["category"]);
}

#[test_log::test(tokio::test)]
async fn malformed_id_is_not_found() {
    let app = TestApp::new();

    app.send(TestClient::get(url("/api/workshops/id/not-a-uuid")))
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .assert_message("Workshop not found");
}

// ============================================================================
// Write access
// ============================================================================

#[test_log::test(tokio::test)]
async fn scoped_writes_require_admin_token() {
    let app = TestApp::new();

    for family in ["awards", "news", "workshops", "services"] {
        app.send(TestClient::post(url(&format!("/api/{family}"))).json(&content_payload("x")))
            .await
            .assert_status(StatusCode::UNAUTHORIZED)
            .assert_message("No token, authorization denied");
    }
}

#[test_log::test(tokio::test)]
async fn forged_token_is_rejected() {
    let app = TestApp::new();

    app.send(
        TestClient::post(url("/api/news"))
            .add_header(
                salvo::http::header::AUTHORIZATION,
                "Bearer not.a.token",
                true,
            )
            .json(&content_payload("x")),
    )
    .await
    .assert_status(StatusCode::UNAUTHORIZED)
    .assert_message("Token is not valid");
}

#[test_log::test(tokio::test)]
async fn open_service_writes_admit_anonymous_callers() {
    let settings = Settings {
        catalog: mandala_test::component::config::CatalogConfig {
            open_service_writes: true,
        },
        ..test_config()
    };
    let app = TestApp::with_config(settings);

    let res = app
        .send(
            TestClient::post(url("/api/services"))
                .json(&content_payload_with("open", &json!({ "category": "education" }))),
        )
        .await
        .assert_status(StatusCode::CREATED);
    let id = res.id();

    app.send(TestClient::delete(url(&format!("/api/services/{id}"))))
        .await
        .assert_status(StatusCode::OK)
        .assert_message("Service deleted successfully");

    // The other families stay closed.
    app.send(TestClient::post(url("/api/awards")).json(&content_payload("closed")))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[test_log::test(tokio::test)]
async fn delete_is_permanent() {
    let app = TestApp::new().with_admin().await;
    let item = app.create_item("awards", &content_payload("gone")).await;
    let id = item["id"].as_str().expect("id");

    app.send(app.admin(TestClient::delete(url(&format!("/api/awards/{id}")))))
        .await
        .assert_status(StatusCode::OK)
        .assert_message("Award deleted successfully");

    app.send(TestClient::get(url(&format!("/api/awards/id/{id}"))))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    app.send(app.admin(TestClient::delete(url(&format!("/api/awards/{id}")))))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_log::test(tokio::test)]
async fn update_rejects_slug_taken_by_other_item() {
    let app = TestApp::new().with_admin().await;
    app.create_item("news", &content_payload("first")).await;
    let second = app.create_item("news", &content_payload("second")).await;
    let id = second["id"].as_str().expect("id");

    app.send(
        app.admin(TestClient::put(url(&format!("/api/news/{id}"))))
            .json(&json!({ "slug": "first" })),
    )
    .await
    .assert_status(StatusCode::BAD_REQUEST)
    .assert_message("slug already exists");
}
