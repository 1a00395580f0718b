use axum::{Router, routing::get};
use crate::{AppState, controllers::mandi_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/mandi-rates", get(mandi_controller::get_mandi_rates))
        .route("/mandi-rates/nearby", get(mandi_controller::get_mandi_nearby))
        .route("/mandi", get(mandi_controller::get_mandi_view))
}
