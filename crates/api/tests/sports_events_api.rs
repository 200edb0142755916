//! Integration tests for the `/api/v1/sports-events` endpoints.
//!
//! Mirrors the races suite over the string category dimension. Row-count
//! assertions rely on the migration fixtures (8 events, 7 sport types).

mod common;

use axum::http::StatusCode;
use chrono::DateTime;
use common::{body_json, build_test_app, get};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Test: listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_events_sorted_by_start_time_with_status(pool: SqlitePool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/sports-events").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let events = json["data"].as_array().unwrap();
    assert_eq!(events.len(), 8);

    let starts: Vec<_> = events
        .iter()
        .map(|e| {
            DateTime::parse_from_rfc3339(e["advertised_start_time"].as_str().unwrap()).unwrap()
        })
        .collect();
    assert!(starts.windows(2).all(|w| w[0] <= w[1]));

    assert!(events
        .iter()
        .all(|e| e["status"] == "OPEN" || e["status"] == "CLOSED"));
}

// ---------------------------------------------------------------------------
// Test: filtering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn sport_types_filter_restricts_results(pool: SqlitePool) {
    let app = build_test_app(pool);
    let json = body_json(get(app, "/api/v1/sports-events?sport_types=tennis").await).await;

    let events = json["data"].as_array().unwrap();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e["sport_type"] == "tennis"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn multiple_sport_types_are_a_membership_test(pool: SqlitePool) {
    let app = build_test_app(pool);
    let json =
        body_json(get(app, "/api/v1/sports-events?sport_types=tennis,hockey").await).await;

    let events = json["data"].as_array().unwrap();
    assert_eq!(events.len(), 3);
    assert!(events
        .iter()
        .all(|e| e["sport_type"] == "tennis" || e["sport_type"] == "hockey"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn visible_only_filter_restricts_results(pool: SqlitePool) {
    let app = build_test_app(pool);
    let json = body_json(get(app, "/api/v1/sports-events?visible_only=true").await).await;

    let events = json["data"].as_array().unwrap();
    assert_eq!(events.len(), 6);
    assert!(events.iter().all(|e| e["visible"] == true));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn sport_type_sort_ascending(pool: SqlitePool) {
    let app = build_test_app(pool);
    let json = body_json(get(app, "/api/v1/sports-events?sort_field=sport_type").await).await;

    let types: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["sport_type"].as_str().unwrap())
        .collect();
    assert!(types.windows(2).all(|w| w[0] <= w[1]));
}

// ---------------------------------------------------------------------------
// Test: validation failures never reach storage
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_sport_type_fails_validation(pool: SqlitePool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/sports-events?sport_types=tennis,%20").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("empty value in sport_types at position 1"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_sport_types_fail_validation(pool: SqlitePool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/sports-events?sport_types=tennis,tennis").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("duplicate value in sport_types: tennis"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn sport_type_count_over_limit_fails_validation(pool: SqlitePool) {
    let types: Vec<String> = (1..=51).map(|i| format!("sport{i}")).collect();
    let uri = format!("/api/v1/sports-events?sport_types={}", types.join(","));

    let app = build_test_app(pool);
    let response = get(app, &uri).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("too many sport_types"));
}

// ---------------------------------------------------------------------------
// Test: lookup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_event_by_id_returns_record(pool: SqlitePool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/sports-events/5").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Winter Faceoff");
    assert_eq!(json["data"]["venue"], "Dome E");
    assert_eq!(json["data"]["status"], "OPEN");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_past_event_is_closed(pool: SqlitePool) {
    // Fixture 1 started in 2024.
    let app = build_test_app(pool);
    let json = body_json(get(app, "/api/v1/sports-events/1").await).await;
    assert_eq!(json["data"]["status"], "CLOSED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_event_with_negative_id_fails_validation(pool: SqlitePool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/sports-events/-3").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_unknown_event_returns_404(pool: SqlitePool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/sports-events/424242").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "SportsEvent with id 424242 not found");
}
