use axum::http::{HeaderMap, HeaderValue};

use crate::{error::AppResult, AppState};

pub fn render(state: &AppState, tpl: &str, ctx: &serde_json::Value) -> AppResult<String> {
    Ok(state.hbs.render(tpl, ctx)?)
}

pub fn is_htmx(headers: &HeaderMap) -> bool {
    headers
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// `HX-Trigger` header: a bare name for one event, a JSON object for several.
pub fn hx_trigger_value(events: &[&str]) -> HeaderValue {
    if events.len() == 1 {
        return HeaderValue::from_str(events[0]).unwrap_or_else(|_| HeaderValue::from_static(""));
    }

    let mut map = serde_json::Map::new();
    for &e in events {
        map.insert(e.to_string(), serde_json::Value::Bool(true));
    }

    let json = serde_json::Value::Object(map).to_string();
    HeaderValue::from_str(&json).unwrap_or_else(|_| HeaderValue::from_static(""))
}

pub fn hx_trigger_headers(events: &[&str]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("HX-Trigger", hx_trigger_value(events));
    headers
}
