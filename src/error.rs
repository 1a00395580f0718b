use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("template error: {0}")]
    Template(#[from] handlebars::RenderError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Http(_) | AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// What a user gets to see. Upstream and store details stay in the log.
    pub fn public_message(&self) -> String {
        match self {
            AppError::InvalidInput(m) | AppError::NotFound(m) => m.clone(),
            AppError::Http(_) | AppError::Upstream(_) => {
                "Market data unavailable right now.".to_string()
            }
            _ => "Something went wrong.".to_string(),
        }
    }

    fn log(&self) {
        if self.status().is_server_error() {
            tracing::error!("request failed: {}", self);
        }
    }

    pub fn into_json_response(self) -> Response {
        self.log();
        let body = Json(json!({ "error": self.public_message() }));
        (self.status(), body).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let html = format!(r#"<div class="text-danger">{}</div>"#, esc(&self.public_message()));
        (self.status(), Html(html)).into_response()
    }
}

pub fn esc(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
