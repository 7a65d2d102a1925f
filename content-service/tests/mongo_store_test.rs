//! Runs against a live MongoDB (`MONGODB_URI`, default
//! `mongodb://localhost:27017`). Each test uses its own database.
//! Run with `cargo test -- --ignored`.

mod common;

use axum::http::StatusCode;
use common::TestApp;
use content_service::services::ContentStore;
use mongodb::bson::doc;
use serde_json::json;
use std::collections::HashSet;

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn first_read_seeds_once() {
    let app = TestApp::spawn_mongo().await;

    let first = app.get("/api/config/promo").await;
    assert_eq!(first.status, StatusCode::OK);
    assert!(first.body.get("_id").is_none());

    let second = app.get("/api/config/promo").await;
    let third = app.get("/api/config/promo").await;
    assert_eq!(second.body["message"], first.body["message"]);
    assert_eq!(second.body["_id"].as_str().unwrap().len(), 24);
    assert_eq!(second.body["_id"], third.body["_id"]);
    assert_eq!(app.count("promo").await, 1);

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn read_returns_most_recent_insert() {
    let app = TestApp::spawn_mongo().await;
    let store = app.store();

    store
        .insert("campaign", doc! { "title": "Older", "image": "/a.jpg" })
        .await
        .unwrap();
    let newest = store
        .insert("campaign", doc! { "title": "Newer", "image": "/b.jpg" })
        .await
        .unwrap();

    let response = app.get("/api/campaign").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["title"], "Newer");
    assert_eq!(response.body["_id"], newest.to_hex());
    assert_eq!(app.count("campaign").await, 2);

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn update_merges_and_keeps_absent_fields() {
    let app = TestApp::spawn_mongo().await;

    let created = app
        .put_json(
            "/api/featured-rail",
            &json!({ "items": [], "headline": "Old headline" }),
        )
        .await;
    let updated = app
        .put_json("/api/featured-rail", &json!({ "items": [{ "name": "Totes" }] }))
        .await;

    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["_id"], created.body["_id"]);
    assert_eq!(updated.body["items"], json!([{ "name": "Totes" }]));
    assert_eq!(updated.body["headline"], "Old headline");
    assert_eq!(app.count("featured_rail").await, 1);

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn empty_update_leaves_document_unchanged() {
    let app = TestApp::spawn_mongo().await;

    let created = app
        .put_json("/api/featured-rail", &json!({ "headline": "Kept" }))
        .await;
    let response = app
        .put_json("/api/featured-rail", &json!({ "_id": "ignored" }))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, created.body);

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn collection_list_seeds_six_entries_once() {
    let app = TestApp::spawn_mongo().await;

    let first = app.get("/api/collections").await;
    let second = app.get("/api/collections").await;

    assert_eq!(first.status, StatusCode::OK);
    let items = first.body["items"].as_array().unwrap();
    assert_eq!(items.len(), 6);

    let ids: HashSet<_> = items.iter().map(|i| i["_id"].as_str().unwrap()).collect();
    assert_eq!(ids.len(), 6);

    let slugs: HashSet<_> = items.iter().map(|i| i["slug"].as_str().unwrap()).collect();
    assert_eq!(
        slugs,
        HashSet::from(["eco", "home", "clothing", "blu", "bags", "kitchen"])
    );

    assert_eq!(second.body["items"].as_array().unwrap().len(), 6);
    assert_eq!(app.count("collection").await, 6);

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn insert_many_returns_ids_in_input_order() {
    let app = TestApp::spawn_mongo().await;
    let store = app.store();

    let ids = store
        .insert_many(
            "collection",
            vec![doc! { "name": "A" }, doc! { "name": "B" }, doc! { "name": "C" }],
        )
        .await
        .unwrap();

    assert_eq!(ids.len(), 3);
    for (id, name) in ids.iter().zip(["A", "B", "C"]) {
        let stored = store.find_by_id("collection", *id).await.unwrap().unwrap();
        assert_eq!(stored.get_str("name").unwrap(), name);
    }
    assert_eq!(store.list("collection").await.unwrap().len(), 3);

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn diagnostics_report_connected_store() {
    let app = TestApp::spawn_mongo().await;
    app.get("/api/hero").await;

    let response = app.get("/test").await;

    assert_eq!(response.body["database"], "connected");
    assert_eq!(response.body["database_url"], "set");
    assert_eq!(response.body["database_name"], "set");
    let collections = response.body["collections"].as_array().unwrap();
    assert!(collections.contains(&json!("hero")));

    app.cleanup().await;
}
