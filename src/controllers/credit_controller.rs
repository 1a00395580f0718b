use std::collections::HashMap;

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde_json::json;

use crate::{
    models::CreditAnswers,
    render,
    services::credit_service,
    AppState,
};

// POST /credit-score
pub async fn post_credit_score(
    State(state): State<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    let answers: CreditAnswers = match serde_json::from_value(json!(form)) {
        Ok(a) => a,
        Err(_) => {
            return (
                StatusCode::OK,
                Html(r#"<div class="text-danger">Please answer every question.</div>"#.to_string()),
            )
                .into_response();
        }
    };

    let result = credit_service::calculate_score(&answers);
    let ctx = json!({ "score": result.score, "category": result.category.label() });

    match render::render(&state, "partials/credit_result", &ctx) {
        Ok(html) => (StatusCode::OK, Html(html)).into_response(),
        Err(e) => e.into_response(),
    }
}
