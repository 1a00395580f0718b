use axum::{Router, routing::{get, post}};
use crate::{AppState, controllers::alerts_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/alerts/list", get(alerts_controller::get_alerts_list))
        .route("/alerts", post(alerts_controller::post_create_alert))
}
