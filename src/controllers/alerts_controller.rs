use axum::{
    extract::{Form, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    error::{esc, AppError},
    events::AppEvent,
    models::alert::fmt_price,
    render,
    AppState,
};

fn form_error(msg: &str) -> Response {
    (
        StatusCode::OK,
        Html(format!(r#"<div class="text-danger">{}</div>"#, esc(msg))),
    )
        .into_response()
}

#[derive(Deserialize)]
pub struct CreateAlertForm {
    #[serde(default)]
    pub commodity: String,
    #[serde(rename = "targetPrice", default)]
    pub target_price: String,
}

// GET /alerts/list
pub async fn get_alerts_list(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let alerts = match state.alerts.list() {
        Ok(v) => v,
        Err(e) => return e.into_response(),
    };

    if !render::is_htmx(&headers) {
        return (StatusCode::OK, Json(json!({ "alerts": alerts }))).into_response();
    }

    let items: Vec<serde_json::Value> = alerts
        .iter()
        .map(|a| {
            json!({
                "commodity": a.commodity,
                "target_price": fmt_price(a.target_price),
            })
        })
        .collect();

    let ctx = json!({ "alerts": items, "has_alerts": !items.is_empty() });

    match render::render(&state, "partials/alerts_list", &ctx) {
        Ok(html) => (StatusCode::OK, Html(html)).into_response(),
        Err(e) => e.into_response(),
    }
}

// POST /alerts
pub async fn post_create_alert(
    State(state): State<AppState>,
    Form(form): Form<CreateAlertForm>,
) -> Response {
    let commodity = form.commodity.trim();
    if commodity.is_empty() {
        return form_error("Please choose a commodity.");
    }

    let target: f64 = match form.target_price.trim().parse() {
        Ok(v) => v,
        Err(_) => return form_error("Please enter a valid target price."),
    };

    let alert = match state.alerts.add_alert(commodity, target) {
        Ok(a) => a,
        Err(AppError::InvalidInput(msg)) => return form_error(&msg),
        Err(e) => return e.into_response(),
    };

    let _ = state.events_tx.send(AppEvent::AlertsUpdated);

    let msg = format!(
        r#"<div class="text-success">🔔 Alert set for {} at ₹{}</div>"#,
        esc(&alert.commodity),
        fmt_price(alert.target_price)
    );

    (
        StatusCode::OK,
        render::hx_trigger_headers(&["alertsUpdated"]),
        Html(msg),
    )
        .into_response()
}
