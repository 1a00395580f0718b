use axum::{Router, routing::post};
use crate::{AppState, controllers::calendar_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router.route("/calendar/events", post(calendar_controller::post_calendar_events))
}
