//! HTTP routes: the JSON game API under `/api`, and static files for everything else.

use crate::error::ApiError;
use crate::state::SharedGame;
use axum::body::Bytes;
use axum::extract::State;
use axum::routing::{any, get, get_service, post, MethodRouter};
use axum::{Json, Router};
use othello_rules::{Handover, Snapshot};
use serde::Deserialize;
use std::path::Path;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

/// Body of a `POST /api/move` request, with zero-based coordinates.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct MoveRequest {
    pub row: i64,
    pub col: i64,
}

/// Build the app. Every request the API does not answer, including a known
/// path with the wrong method, gets a JSON 404. Static files are GET only.
pub fn router(game: SharedGame, static_dir: impl AsRef<Path>) -> Router {
    let static_files: MethodRouter =
        get_service(ServeDir::new(static_dir)).fallback(endpoint_not_found);

    Router::new()
        .route("/api/state", get(get_state))
        .route("/api/new_game", post(new_game))
        .route("/api/move", post(make_move))
        .route("/api", any(endpoint_not_found))
        .route("/api/", any(endpoint_not_found))
        .route("/api/{*rest}", any(endpoint_not_found))
        .method_not_allowed_fallback(endpoint_not_found)
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(game)
}

async fn get_state(State(game): State<SharedGame>) -> Json<Snapshot> {
    Json(game.snapshot())
}

async fn new_game(State(game): State<SharedGame>) -> Json<Snapshot> {
    let snapshot = game.reset();
    info!("started a new game");
    Json(snapshot)
}

async fn make_move(
    State(game): State<SharedGame>,
    body: Bytes,
) -> Result<Json<Snapshot>, ApiError> {
    let request: MoveRequest = serde_json::from_slice(&body).map_err(ApiError::MalformedBody)?;
    debug!(row = request.row, col = request.col, "processing move");

    let (placement, snapshot) = game.place_disc(request.row, request.col).map_err(|err| {
        debug!(row = request.row, col = request.col, %err, "move rejected");
        err
    })?;

    debug!(
        player = %placement.player,
        location = %placement.location,
        flipped = placement.flipped.len(),
        "move accepted"
    );
    match placement.handover {
        Handover::Opponent => {}
        Handover::Pass => {
            let skipped = !placement.player;
            info!(player = %skipped, "no legal move, turn passed");
        }
        Handover::GameOver(winner) => info!(
            %winner,
            black = snapshot.scores.black,
            white = snapshot.scores.white,
            "game over"
        ),
    }

    Ok(Json(snapshot))
}

async fn endpoint_not_found() -> ApiError {
    ApiError::NotFound
}
