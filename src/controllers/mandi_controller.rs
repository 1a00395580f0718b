use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    events::AppEvent,
    models::{alert::fmt_price, MarketRecord},
    render,
    services::{mandi::MandiFilters, market_service},
    AppState,
};

fn price_cell(p: Option<f64>) -> String {
    p.map(fmt_price).unwrap_or_else(|| "NA".to_string())
}

fn record_ctx(r: &MarketRecord) -> serde_json::Value {
    json!({
        "state": r.state,
        "district": r.district,
        "market": r.market,
        "commodity": r.commodity,
        "variety": r.variety,
        "min_price": price_cell(r.min_price),
        "max_price": price_cell(r.max_price),
        "modal_price": price_cell(r.modal_price),
        "arrival_date": r.arrival_date,
        "share_link": market_service::share_link(r),
    })
}

/// Stores a non-empty fetch as the new snapshot. An empty fetch keeps
/// whatever was there before.
fn remember(state: &AppState, records: &[MarketRecord]) {
    if records.is_empty() {
        return;
    }

    match state.snapshot.replace(records.to_vec()) {
        Ok(()) => {
            let _ = state.events_tx.send(AppEvent::MandiUpdated);
        }
        Err(e) => tracing::warn!("could not store market snapshot: {}", e),
    }
}

// GET /mandi-rates?state=..&district=..&commodity=..
pub async fn get_mandi_rates(
    State(state): State<AppState>,
    Query(filters): Query<MandiFilters>,
) -> Response {
    match state.mandi.fetch_records(&filters).await {
        Ok(records) => {
            remember(&state, &records);
            (StatusCode::OK, Json(json!({ "records": records }))).into_response()
        }
        Err(e) => e.into_json_response(),
    }
}

#[derive(Deserialize)]
pub struct NearbyQuery {
    pub state: Option<String>,
    pub district: Option<String>,
}

// GET /mandi-rates/nearby?state=..&district=..
pub async fn get_mandi_nearby(
    State(state): State<AppState>,
    Query(q): Query<NearbyQuery>,
) -> Response {
    match state.mandi.fetch_with_fallback(q.state, q.district).await {
        Ok((level, records)) => {
            tracing::info!("mandi rates answered at {:?} level ({} rows)", level, records.len());
            remember(&state, &records);
            (
                StatusCode::OK,
                Json(json!({ "level": level, "records": records })),
            )
                .into_response()
        }
        Err(e) => e.into_json_response(),
    }
}

#[derive(Deserialize)]
pub struct MandiViewQuery {
    #[serde(default)]
    pub commodity: String,
}

// GET /mandi?commodity=..
pub async fn get_mandi_view(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(q): Query<MandiViewQuery>,
) -> Response {
    let snapshot = match state.snapshot.current() {
        Ok(s) => s,
        Err(e) => return e.into_response(),
    };

    let commodity = q.commodity.trim();
    let records = market_service::filter_by_commodity(&snapshot, commodity);

    // the banner only makes sense once a commodity is picked
    let best = if commodity.is_empty() {
        None
    } else {
        market_service::best_mandi(&records)
    };

    if !render::is_htmx(&headers) {
        return (
            StatusCode::OK,
            Json(json!({
                "commodities": market_service::unique_commodities(&snapshot),
                "records": records,
                "best": best,
            })),
        )
            .into_response();
    }

    let rows: Vec<serde_json::Value> = records.iter().map(record_ctx).collect();
    let ctx = json!({
        "records": rows,
        "has_records": !rows.is_empty(),
        "best": best.map(record_ctx),
    });

    match render::render(&state, "partials/mandi_table", &ctx) {
        Ok(html) => (StatusCode::OK, Html(html)).into_response(),
        Err(e) => e.into_response(),
    }
}
