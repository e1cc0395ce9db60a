use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

const PUZZLE: &str =
    "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";
const SOLUTION: &str =
    "135762984946381257728459613694517832812936745357824196473298561581673429269145378";

async fn post(uri: &str, body: Value) -> Value {
    let response = sudoku_solver::api::router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    // logical failures still come back as 200 with an error body
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn solve_valid_puzzle() {
    let body = post("/api/solve", json!({ "puzzle": PUZZLE })).await;
    assert_eq!(body, json!({ "solution": SOLUTION }));
}

#[tokio::test]
async fn solve_missing_puzzle() {
    let body = post("/api/solve", json!({})).await;
    assert_eq!(body, json!({ "error": "Required field missing" }));
}

#[tokio::test]
async fn solve_empty_puzzle_counts_as_missing() {
    let body = post("/api/solve", json!({ "puzzle": "" })).await;
    assert_eq!(body, json!({ "error": "Required field missing" }));
}

#[tokio::test]
async fn solve_invalid_characters() {
    let puzzle =
        "1.5..2.84..63.12.7.Z..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.Z7.";
    let body = post("/api/solve", json!({ "puzzle": puzzle })).await;
    assert_eq!(body, json!({ "error": "Invalid characters in puzzle" }));
}

#[tokio::test]
async fn solve_incorrect_length() {
    let body = post("/api/solve", json!({ "puzzle": "1.5..2.84..63.12.7." })).await;
    assert_eq!(body, json!({ "error": "Expected puzzle to be 81 characters long" }));
}

#[tokio::test]
async fn solve_unsolvable_puzzle() {
    let puzzle =
        "9.9..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";
    let body = post("/api/solve", json!({ "puzzle": puzzle })).await;
    assert_eq!(body, json!({ "error": "Puzzle cannot be solved" }));
}

#[tokio::test]
async fn check_with_all_fields() {
    let body = post(
        "/api/check",
        json!({ "puzzle": PUZZLE, "coordinate": "A2", "value": "3" }),
    )
    .await;
    assert_eq!(body, json!({ "valid": true }));
}

#[tokio::test]
async fn check_value_already_placed() {
    let body = post(
        "/api/check",
        json!({ "puzzle": PUZZLE, "coordinate": "A1", "value": "1" }),
    )
    .await;
    assert_eq!(body, json!({ "valid": true }));
}

#[tokio::test]
async fn check_single_conflict() {
    let body = post(
        "/api/check",
        json!({ "puzzle": PUZZLE, "coordinate": "A2", "value": "4" }),
    )
    .await;
    assert_eq!(body, json!({ "valid": false, "conflict": ["row"] }));
}

#[tokio::test]
async fn check_multiple_conflicts() {
    let body = post(
        "/api/check",
        json!({ "puzzle": PUZZLE, "coordinate": "A3", "value": "2" }),
    )
    .await;
    assert_eq!(
        body,
        json!({ "valid": false, "conflict": ["row", "column", "region"] })
    );
}

#[tokio::test]
async fn check_all_conflicts() {
    let body = post(
        "/api/check",
        json!({ "puzzle": PUZZLE, "coordinate": "A1", "value": "2" }),
    )
    .await;
    assert_eq!(
        body,
        json!({ "valid": false, "conflict": ["row", "column", "region"] })
    );
}

#[tokio::test]
async fn check_missing_fields() {
    let body = post("/api/check", json!({})).await;
    assert_eq!(body, json!({ "error": "Required field(s) missing" }));

    let body = post("/api/check", json!({ "puzzle": PUZZLE, "coordinate": "A1" })).await;
    assert_eq!(body, json!({ "error": "Required field(s) missing" }));
}

#[tokio::test]
async fn check_invalid_characters() {
    let puzzle =
        "1.5..2.84..63.12.7.Z..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.Z7.";
    let body = post(
        "/api/check",
        json!({ "puzzle": puzzle, "coordinate": "A2", "value": "3" }),
    )
    .await;
    assert_eq!(body, json!({ "error": "Invalid characters in puzzle" }));
}

#[tokio::test]
async fn check_incorrect_length() {
    let body = post(
        "/api/check",
        json!({ "puzzle": "1.5..2.84..63.12.7.", "coordinate": "A2", "value": "3" }),
    )
    .await;
    assert_eq!(body, json!({ "error": "Expected puzzle to be 81 characters long" }));
}

#[tokio::test]
async fn check_puzzle_errors_win_over_coordinate_errors() {
    // puzzle validity is reported before the coordinate format
    let body = post(
        "/api/check",
        json!({ "puzzle": "1.5..2.84..63.12.7.", "coordinate": "Z0", "value": "3" }),
    )
    .await;
    assert_eq!(body, json!({ "error": "Expected puzzle to be 81 characters long" }));
}

#[tokio::test]
async fn check_invalid_coordinate() {
    let body = post(
        "/api/check",
        json!({ "puzzle": PUZZLE, "coordinate": "Z9", "value": "3" }),
    )
    .await;
    assert_eq!(body, json!({ "error": "Invalid coordinate" }));
}

#[tokio::test]
async fn check_invalid_value() {
    let body = post(
        "/api/check",
        json!({ "puzzle": PUZZLE, "coordinate": "A2", "value": "0" }),
    )
    .await;
    assert_eq!(body, json!({ "error": "Invalid value" }));
}
