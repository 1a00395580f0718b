use std::sync::Arc;

use agrisaarthi::{
    config,
    controllers::{credit_controller, loans_controller},
    models::{
        credit::{ActiveLoans, IncomeLevel, IncomeSource, YesNo},
        CreditAnswers, CreditCategory,
    },
    services::{credit_service, loan_service},
    store::MemoryStore,
    templates, AppState,
};
use axum::{
    http::{header, Request, StatusCode},
    routing::{get, post},
    Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn test_state() -> AppState {
    let mut settings = config::load();
    settings.data_gov_api_key = String::new();

    let hbs = templates::build_handlebars(concat!(env!("CARGO_MANIFEST_DIR"), "/templates"))
        .expect("templates");

    AppState::new(settings, hbs, Arc::new(MemoryStore::new())).expect("app state")
}

fn app() -> Router {
    Router::new()
        .route("/credit-score", post(credit_controller::post_credit_score))
        .route("/loans", get(loans_controller::get_loans))
        .route("/loans/:id", get(loans_controller::get_loan))
        .with_state(test_state())
}

async fn response_body_string(res: axum::response::Response) -> String {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&bytes).to_string()
}

fn answers(
    income: IncomeLevel,
    defaulted: YesNo,
    land: YesNo,
    source: IncomeSource,
    loans: ActiveLoans,
) -> CreditAnswers {
    CreditAnswers {
        income,
        defaulted,
        land,
        source,
        loans,
    }
}

#[test]
fn best_profile_is_capped_at_850() {
    let r = credit_service::calculate_score(&answers(
        IncomeLevel::High,
        YesNo::No,
        YesNo::Yes,
        IncomeSource::Farming,
        ActiveLoans::Zero,
    ));
    assert_eq!(r.score, 850);
    assert_eq!(r.category, CreditCategory::Excellent);
}

#[test]
fn worst_profile_scores_320() {
    let r = credit_service::calculate_score(&answers(
        IncomeLevel::Low,
        YesNo::Yes,
        YesNo::No,
        IncomeSource::Labor,
        ActiveLoans::Multiple,
    ));
    assert_eq!(r.score, 320);
    assert_eq!(r.category, CreditCategory::Poor);
}

#[test]
fn mixed_profile() {
    // 600 + 50 + 50 - 50 + 0 + 20
    let r = credit_service::calculate_score(&answers(
        IncomeLevel::Medium,
        YesNo::No,
        YesNo::No,
        IncomeSource::Business,
        ActiveLoans::One,
    ));
    assert_eq!(r.score, 670);
    assert_eq!(r.category, CreditCategory::Good);
}

#[test]
fn category_boundaries() {
    assert_eq!(credit_service::categorize(750), CreditCategory::Excellent);
    assert_eq!(credit_service::categorize(749), CreditCategory::Good);
    assert_eq!(credit_service::categorize(650), CreditCategory::Good);
    assert_eq!(credit_service::categorize(649), CreditCategory::Average);
    assert_eq!(credit_service::categorize(550), CreditCategory::Average);
    assert_eq!(credit_service::categorize(549), CreditCategory::Poor);
}

#[tokio::test]
async fn post_credit_score_renders_result() {
    let req = Request::builder()
        .method("POST")
        .uri("/credit-score")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(axum::body::Body::from(
            "income=high&default=no&land=yes&source=business&loans=one",
        ))
        .unwrap();

    let res = app().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // 600 + 100 + 50 + 50 + 0 + 20
    let body = response_body_string(res).await;
    assert!(body.contains("820"));
    assert!(body.contains("Excellent (750+)"));
}

#[tokio::test]
async fn post_credit_score_incomplete_form_renders_error() {
    for form in [
        "income=high&default=no&land=yes&source=business",
        "income=rich&default=no&land=yes&source=business&loans=one",
    ] {
        let req = Request::builder()
            .method("POST")
            .uri("/credit-score")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(axum::body::Body::from(form))
            .unwrap();

        let res = app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let body = response_body_string(res).await;
        assert!(body.contains("Please answer every question."));
    }
}

#[test]
fn loan_catalog_lookup() {
    assert_eq!(loan_service::list_schemes().len(), 5);
    assert_eq!(
        loan_service::find_scheme(2).map(|s| s.title),
        Some("PM Kisan Samman Nidhi")
    );
    assert!(loan_service::find_scheme(42).is_none());
}

#[tokio::test]
async fn get_loans_lists_every_scheme() {
    let req = Request::builder()
        .uri("/loans")
        .body(axum::body::Body::empty())
        .unwrap();

    let res = app().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = response_body_string(res).await;
    for scheme in loan_service::list_schemes() {
        assert!(body.contains(scheme.title), "missing {}", scheme.title);
    }
}

#[tokio::test]
async fn get_loan_detail_and_unknown_id() {
    let req = Request::builder()
        .uri("/loans/3")
        .body(axum::body::Body::empty())
        .unwrap();
    let res = app().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = response_body_string(res).await;
    assert!(body.contains("Crop insurance scheme"));

    let req = Request::builder()
        .uri("/loans/99")
        .body(axum::body::Body::empty())
        .unwrap();
    let res = app().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
