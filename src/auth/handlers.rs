use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{instrument, warn};

use crate::{
    auth::dto::{LoginRequest, LoginResponse},
    state::AppState,
};

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, Response> {
    // Request-shape validation runs before the authenticator.
    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "message": "invalid email" })),
        )
            .into_response());
    }

    let response = state
        .auth
        .authenticate(&payload.email, &payload.password)
        .await
        .map_err(IntoResponse::into_response)?;

    Ok(Json(response))
}
