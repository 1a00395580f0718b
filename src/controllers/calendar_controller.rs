use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::{error::AppError, services::calendar_service};

#[derive(Deserialize)]
pub struct CalendarText {
    #[serde(default)]
    pub calendar: String,
}

// POST /calendar/events
pub async fn post_calendar_events(Json(body): Json<CalendarText>) -> Response {
    if body.calendar.trim().is_empty() {
        return AppError::InvalidInput("calendar text is empty".to_string()).into_json_response();
    }

    let events = calendar_service::parse_calendar_events(&body.calendar);
    (StatusCode::OK, Json(json!({ "events": events }))).into_response()
}
