mod common;

use axum::http::StatusCode;
use concert_api::{models::Seat, AppState};
use serde_json::json;

use common::{database_url, get_json, spawn_app, test_config};

const UNUSED_UPSTREAM: &str = "http://127.0.0.1:9";

fn seed_rows(mut seats: Vec<Seat>) -> Vec<(String, String, i64, f64, bool)> {
    seats.sort_by_key(|s| s.id);
    seats
        .into_iter()
        .map(|s| (s.section, s.row, s.seat_number, s.price, s.is_available))
        .collect()
}

#[tokio::test]
async fn fresh_store_lists_three_seed_seats() {
    let app = spawn_app(UNUSED_UPSTREAM, None).await;

    let seats = Seat::list_all(&app.state.db).await.unwrap();

    assert_eq!(
        seed_rows(seats),
        vec![
            ("Floor".to_string(), "A".to_string(), 1, 150.0, true),
            ("A".to_string(), "B".to_string(), 5, 120.0, true),
            ("B".to_string(), "C".to_string(), 10, 95.0, false),
        ]
    );
}

#[tokio::test]
async fn seat_ids_are_unique() {
    let app = spawn_app(UNUSED_UPSTREAM, None).await;

    let mut ids: Vec<i64> = Seat::list_all(&app.state.db)
        .await
        .unwrap()
        .iter()
        .map(|s| s.id)
        .collect();
    ids.sort_unstable();
    ids.dedup();

    assert_eq!(ids.len(), 3);
}

#[tokio::test]
async fn bootstrap_twice_keeps_three_rows() {
    let app = spawn_app(UNUSED_UPSTREAM, None).await;

    app.state.db.bootstrap().await.unwrap();
    app.state.db.bootstrap().await.unwrap();

    let seats = Seat::list_all(&app.state.db).await.unwrap();
    assert_eq!(seats.len(), 3);
}

#[tokio::test]
async fn restart_on_existing_store_does_not_reseed() {
    let app = spawn_app(UNUSED_UPSTREAM, None).await;
    let url = database_url(&app.dir);

    let restarted = AppState::new(test_config(url, UNUSED_UPSTREAM, None))
        .await
        .unwrap();

    let seats = Seat::list_all(&restarted.db).await.unwrap();
    assert_eq!(seats.len(), 3);
}

#[tokio::test]
async fn get_seats_returns_seed_records() {
    let app = spawn_app(UNUSED_UPSTREAM, None).await;

    let (status, body) = get_json(&app.router, "/api/seats").await;

    assert_eq!(status, StatusCode::OK);
    let mut records = body.as_array().unwrap().clone();
    records.sort_by_key(|r| r["id"].as_i64().unwrap());
    assert_eq!(records.len(), 3);

    for record in &records {
        let mut keys: Vec<_> = record.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["id", "is_available", "price", "row", "seat_number", "section"]
        );
    }

    let without_ids: Vec<_> = records
        .iter()
        .map(|r| {
            json!({
                "section": r["section"],
                "row": r["row"],
                "seat_number": r["seat_number"],
                "price": r["price"],
                "is_available": r["is_available"],
            })
        })
        .collect();
    assert_eq!(
        without_ids,
        vec![
            json!({"section": "Floor", "row": "A", "seat_number": 1, "price": 150.0, "is_available": true}),
            json!({"section": "A", "row": "B", "seat_number": 5, "price": 120.0, "is_available": true}),
            json!({"section": "B", "row": "C", "seat_number": 10, "price": 95.0, "is_available": false}),
        ]
    );
}

#[tokio::test]
async fn closed_storage_returns_machine_readable_error() {
    let app = spawn_app(UNUSED_UPSTREAM, None).await;
    app.state.db.pool.close().await;

    let (status, body) = get_json(&app.router, "/api/seats").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "STORAGE_UNAVAILABLE");
    assert_eq!(body["message"], "Failed to read from storage");
}

#[tokio::test]
async fn home_returns_message() {
    let app = spawn_app(UNUSED_UPSTREAM, None).await;

    let (status, body) = get_json(&app.router, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Concert API homepage"}));
}
