mod common;

use axum::http::StatusCode;
use common::{TestApp, TEST_USER_ID};
use mongodb::bson::doc;
use serde_json::json;
use user_service::services::ViewedRecipesService;

#[tokio::test]
async fn unknown_user_has_no_view_history() {
    let app = TestApp::spawn().await;
    let viewed = ViewedRecipesService::new(app.db.clone());

    assert!(!viewed
        .has_been_viewed("nobody", "recipe_1")
        .await
        .expect("has_been_viewed failed"));
    assert!(viewed
        .list_viewed("nobody")
        .await
        .expect("list_viewed failed")
        .is_empty());

    app.cleanup().await;
}

#[tokio::test]
async fn first_view_creates_single_entry() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/viewed", app.address))
        .header("X-User-ID", TEST_USER_ID)
        .json(&json!({ "recipe_id": "recipe_1" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::CREATED, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Added new viewed recipe");

    let stored = app
        .db
        .view_histories()
        .find_one(doc! { "user_id": TEST_USER_ID }, None)
        .await
        .unwrap()
        .expect("View history not found in DB");
    assert_eq!(stored.viewed_recipes.len(), 1);
    assert_eq!(stored.viewed_recipes[0].recipe_id, "recipe_1");

    let viewed = ViewedRecipesService::new(app.db.clone());
    assert!(viewed
        .has_been_viewed(TEST_USER_ID, "recipe_1")
        .await
        .unwrap());

    app.cleanup().await;
}

#[tokio::test]
async fn re_view_touches_timestamp_without_duplicating() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let first = client
        .post(format!("{}/viewed", app.address))
        .header("X-User-ID", TEST_USER_ID)
        .json(&json!({ "recipe_id": "recipe_1" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::CREATED, first.status());

    let viewed = ViewedRecipesService::new(app.db.clone());
    let before = viewed.list_viewed(TEST_USER_ID).await.unwrap()[0].viewed_at;

    tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;

    let second = client
        .post(format!("{}/viewed", app.address))
        .header("X-User-ID", TEST_USER_ID)
        .json(&json!({ "recipe_id": "recipe_1" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::OK, second.status());

    let body: serde_json::Value = second.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Updated view time for recipe");

    let entries = viewed.list_viewed(TEST_USER_ID).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].recipe_id, "recipe_1");
    assert!(entries[0].viewed_at > before);

    app.cleanup().await;
}

#[tokio::test]
async fn touch_on_missing_pair_is_silent_noop() {
    let app = TestApp::spawn().await;
    let viewed = ViewedRecipesService::new(app.db.clone());

    viewed
        .touch_view("nobody", "recipe_1")
        .await
        .expect("touch_view should not fail on missing pair");

    // Nothing was created
    let stored = app
        .db
        .view_histories()
        .find_one(doc! { "user_id": "nobody" }, None)
        .await
        .unwrap();
    assert!(stored.is_none());

    // Touching a recipe the user never viewed leaves the history unchanged
    viewed.record_view(TEST_USER_ID, "recipe_1").await.unwrap();
    viewed
        .touch_view(TEST_USER_ID, "recipe_2")
        .await
        .expect("touch_view should not fail on absent recipe");

    let entries = viewed.list_viewed(TEST_USER_ID).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].recipe_id, "recipe_1");

    app.cleanup().await;
}

#[tokio::test]
async fn list_viewed_is_newest_first_after_views_and_touches() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    // View recipe_1 at T1, recipe_2 at T2 > T1, then re-view recipe_1 at T3 > T2
    for recipe_id in ["recipe_1", "recipe_2", "recipe_1"] {
        let response = client
            .post(format!("{}/viewed", app.address))
            .header("X-User-ID", TEST_USER_ID)
            .json(&json!({ "recipe_id": recipe_id }))
            .send()
            .await
            .expect("Failed to execute request");
        assert!(response.status().is_success());
        tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
    }

    let response = client
        .get(format!("{}/viewed", app.address))
        .header("X-User-ID", TEST_USER_ID)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::OK, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let entries = body["viewed_recipes"]
        .as_array()
        .expect("viewed_recipes should be an array");

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["recipe_id"], "recipe_1");
    assert_eq!(entries[1]["recipe_id"], "recipe_2");

    app.cleanup().await;
}

#[tokio::test]
async fn missing_user_header_is_unauthorized() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/viewed", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::UNAUTHORIZED, response.status());

    app.cleanup().await;
}
