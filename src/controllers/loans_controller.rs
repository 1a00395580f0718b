use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde_json::json;

use crate::{error::AppError, render, services::loan_service, AppState};

// GET /loans
pub async fn get_loans(State(state): State<AppState>) -> Response {
    let ctx = json!({ "schemes": loan_service::list_schemes() });

    match render::render(&state, "partials/loan_schemes", &ctx) {
        Ok(html) => (StatusCode::OK, Html(html)).into_response(),
        Err(e) => e.into_response(),
    }
}

// GET /loans/:id
pub async fn get_loan(State(state): State<AppState>, Path(id): Path<u32>) -> Response {
    let Some(scheme) = loan_service::find_scheme(id) else {
        return AppError::NotFound("Unknown loan scheme.".to_string()).into_response();
    };

    match render::render(&state, "partials/loan_detail", &json!(scheme)) {
        Ok(html) => (StatusCode::OK, Html(html)).into_response(),
        Err(e) => e.into_response(),
    }
}
