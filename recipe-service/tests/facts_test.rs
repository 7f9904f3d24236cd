mod common;

use axum::http::StatusCode;
use common::TestApp;
use mongodb::bson::doc;
use serde_json::json;

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "recipe-service");

    app.cleanup().await;
}

#[tokio::test]
async fn create_fact_works() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/facts", app.address))
        .json(&json!({ "quote": "Honey never spoils." }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::CREATED, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["quote"], "Honey never spoils.");

    // Verify DB state directly
    let stored = app
        .db
        .facts()
        .find_one(doc! { "quote": "Honey never spoils." }, None)
        .await
        .unwrap();
    assert!(stored.is_some());

    app.cleanup().await;
}

#[tokio::test]
async fn duplicate_quote_is_a_conflict() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let first = client
        .post(format!("{}/facts", app.address))
        .json(&json!({ "quote": "Carrots were originally purple." }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::CREATED, first.status());

    let second = client
        .post(format!("{}/facts", app.address))
        .json(&json!({ "quote": "Carrots were originally purple." }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::CONFLICT, second.status());

    app.cleanup().await;
}

#[tokio::test]
async fn list_facts_returns_all() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    for quote in ["Fact one.", "Fact two."] {
        let response = client
            .post(format!("{}/facts", app.address))
            .json(&json!({ "quote": quote }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(StatusCode::CREATED, response.status());
    }

    let response = client
        .get(format!("{}/facts", app.address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::OK, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["facts"].as_array().unwrap().len(), 2);

    app.cleanup().await;
}

#[tokio::test]
async fn random_fact_on_empty_collection_is_not_found() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/facts/random", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::NOT_FOUND, response.status());

    app.cleanup().await;
}

#[tokio::test]
async fn random_fact_returns_an_inserted_fact() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/facts", app.address))
        .json(&json!({ "quote": "Tomatoes are berries." }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::CREATED, response.status());

    let response = client
        .get(format!("{}/facts/random", app.address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::OK, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["quote"], "Tomatoes are berries.");

    app.cleanup().await;
}

#[tokio::test]
async fn empty_quote_fails_validation() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/facts", app.address))
        .json(&json!({ "quote": "" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, response.status());

    app.cleanup().await;
}
