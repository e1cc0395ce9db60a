use axum::{routing::post, Json, Router};
use itertools::Itertools;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::checker::{self, Coordinate};
use crate::error::PuzzleError;
use crate::{board, solver};

/// The two-endpoint JSON surface. Logical failures are still HTTP 200;
/// the distinction lives in the body as `{"error": ...}`.
pub fn router() -> Router {
    Router::new()
        .route("/api/solve", post(solve))
        .route("/api/check", post(check))
}

#[derive(Debug, Deserialize)]
pub struct SolveRequest {
    #[serde(default)]
    puzzle: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    puzzle: Option<String>,
    #[serde(default)]
    coordinate: Option<String>,
    #[serde(default)]
    value: Option<String>,
}

// A field that is absent or an empty string both count as missing.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

async fn solve(Json(req): Json<SolveRequest>) -> Json<Value> {
    match solve_body(&req) {
        Ok(body) => Json(body),
        Err(err) => {
            log::debug!("solve rejected: {err}");
            Json(json!({ "error": err.to_string() }))
        }
    }
}

fn solve_body(req: &SolveRequest) -> Result<Value, PuzzleError> {
    let puzzle = present(&req.puzzle).ok_or(PuzzleError::MissingField)?;
    let solution = solver::solve(puzzle)?;
    Ok(json!({ "solution": solution }))
}

async fn check(Json(req): Json<CheckRequest>) -> Json<Value> {
    match check_body(&req) {
        Ok(body) => Json(body),
        Err(err) => {
            log::debug!("check rejected: {err}");
            Json(json!({ "error": err.to_string() }))
        }
    }
}

// Field presence, then puzzle validity, then coordinate/value format,
// then the conflict scan. The order is observable through the error body.
fn check_body(req: &CheckRequest) -> Result<Value, PuzzleError> {
    let (puzzle, coordinate, value) =
        match (present(&req.puzzle), present(&req.coordinate), present(&req.value)) {
            (Some(p), Some(c), Some(v)) => (p, c, v),
            _ => return Err(PuzzleError::MissingFields),
        };
    board::validate(puzzle)?;
    let coord = Coordinate::parse(coordinate)?;
    let value = checker::parse_value(value)?;

    let conflicts = checker::check_placement(puzzle, coord, value);
    if conflicts.is_empty() {
        Ok(json!({ "valid": true }))
    } else {
        log::debug!(
            "placement {coordinate}={value} conflicts: {}",
            conflicts.iter().join(", ")
        );
        Ok(json!({ "valid": false, "conflict": conflicts }))
    }
}
