use axum::{Router, routing::{get, post}};
use crate::{AppState, controllers::{credit_controller, loans_controller}};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/credit-score", post(credit_controller::post_credit_score))
        .route("/loans", get(loans_controller::get_loans))
        .route("/loans/:id", get(loans_controller::get_loan))
}
