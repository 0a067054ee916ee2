// Mounted at `/auth/login`

use crate::state::AppState;
use axum::{http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value as JsonValue};
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(login))
}

async fn login(Json(credentials): Json<Credentials>) -> (StatusCode, Json<JsonValue>) {
    if credentials.username.is_empty() || credentials.password.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": "username and password are required" })),
        );
    }

    info!(username = %credentials.username, "login");
    (StatusCode::OK, Json(json!({ "user": credentials.username })))
}
