// Mounted at `/`

use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value as JsonValue};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}

async fn index(State(state): State<AppState>) -> Json<JsonValue> {
    Json(json!({
        "name": state.app_name,
        "status": "ok",
    }))
}
