#![allow(clippy::unwrap_used, clippy::panic, missing_debug_implementations, unreachable_pub)]
use axum::http::StatusCode;
mod common;

async fn seed(app: &common::TestApp) {
    // Two senders; m2/m3 share a timestamp to exercise the tie-break.
    for (id, from, ts, text) in [
        ("m1", "+15551230001", "2024-01-01T00:00:00Z", Some("hi there")),
        ("m3", "+15551230009", "2024-01-02T00:00:00Z", None),
        ("m2", "+15551230001", "2024-01-02T00:00:00Z", Some("Good Morning")),
        ("m4", "+15551230009", "2024-01-03T00:00:00Z", Some("bye")),
    ] {
        let body = common::message_body(id, from, ts, text);
        assert_eq!(app.post_signed(&body).await.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn listing_orders_by_ts_then_message_id() {
    let app = common::TestApp::spawn().await;
    seed(&app).await;

    let resp = app.get("/messages").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value = resp.json().await.unwrap();

    assert_eq!(json["total"], 4);
    let ids: Vec<&str> =
        json["data"].as_array().unwrap().iter().map(|m| m["message_id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["m1", "m2", "m3", "m4"]);
}

#[tokio::test]
async fn listing_is_stable_across_repeated_calls() {
    let app = common::TestApp::spawn().await;
    seed(&app).await;

    let first: serde_json::Value = app.get("/messages?limit=3&offset=1").await.json().await.unwrap();
    let second: serde_json::Value = app.get("/messages?limit=3&offset=1").await.json().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn pagination_slices_while_total_ignores_it() {
    let app = common::TestApp::spawn().await;
    seed(&app).await;

    let json: serde_json::Value = app.get("/messages?limit=2&offset=1").await.json().await.unwrap();
    assert_eq!(json["total"], 4);
    assert_eq!(json["limit"], 2);
    assert_eq!(json["offset"], 1);
    let ids: Vec<&str> =
        json["data"].as_array().unwrap().iter().map(|m| m["message_id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["m2", "m3"]);

    let json: serde_json::Value = app.get("/messages?limit=10&offset=100").await.json().await.unwrap();
    assert_eq!(json["total"], 4);
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn default_pagination_is_limit_50_offset_0() {
    let app = common::TestApp::spawn().await;

    let json: serde_json::Value = app.get("/messages").await.json().await.unwrap();
    assert_eq!(json["limit"], 50);
    assert_eq!(json["offset"], 0);
}

#[tokio::test]
async fn out_of_range_pagination_is_rejected_without_results() {
    let app = common::TestApp::spawn().await;

    for query in ["limit=0", "limit=101", "limit=-5", "offset=-1"] {
        let resp = app.get(&format!("/messages?{query}")).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "{query} should be rejected");
    }
}

#[tokio::test]
async fn sender_filter_matches_exactly() {
    let app = common::TestApp::spawn().await;
    seed(&app).await;

    let json: serde_json::Value = app.get("/messages?from=%2B15551230001").await.json().await.unwrap();
    assert_eq!(json["total"], 2);
    for message in json["data"].as_array().unwrap() {
        assert_eq!(message["from"], "+15551230001");
    }
}

#[tokio::test]
async fn since_filter_is_an_inclusive_lower_bound() {
    let app = common::TestApp::spawn().await;
    seed(&app).await;

    let json: serde_json::Value =
        app.get("/messages?since=2024-01-02T00:00:00Z").await.json().await.unwrap();
    assert_eq!(json["total"], 3);
    let ids: Vec<&str> =
        json["data"].as_array().unwrap().iter().map(|m| m["message_id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["m2", "m3", "m4"]);
}

#[tokio::test]
async fn text_search_is_case_insensitive_and_never_matches_null_text() {
    let app = common::TestApp::spawn().await;
    seed(&app).await;

    let json: serde_json::Value = app.get("/messages?q=HI").await.json().await.unwrap();
    assert_eq!(json["total"], 1);
    assert_eq!(json["data"][0]["message_id"], "m1");

    // "morning" only appears in m2; m3 has no text and must not match.
    let json: serde_json::Value = app.get("/messages?q=morning").await.json().await.unwrap();
    assert_eq!(json["total"], 1);
    assert_eq!(json["data"][0]["message_id"], "m2");
}

#[tokio::test]
async fn filters_compose_conjunctively() {
    let app = common::TestApp::spawn().await;
    seed(&app).await;

    let json: serde_json::Value = app
        .get("/messages?from=%2B15551230001&since=2024-01-02T00:00:00Z&q=good")
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(json["total"], 1);
    assert_eq!(json["data"][0]["message_id"], "m2");
}

#[tokio::test]
async fn null_text_round_trips_as_null() {
    let app = common::TestApp::spawn().await;
    let body = common::message_body("m1", "+15551230001", "2024-01-01T00:00:00Z", None);
    assert_eq!(app.post_signed(&body).await.status(), StatusCode::OK);

    let json: serde_json::Value = app.get("/messages").await.json().await.unwrap();
    assert!(json["data"][0]["text"].is_null());
}
