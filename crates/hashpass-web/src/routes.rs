//! HTTP route handlers for the web front end.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};

use hashpass_core::derive;

use crate::form::{FormError, GenerateForm, Utf8Form};
use crate::templates::{about_page, error_page, form_page, result_page};

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /
pub async fn home() -> Html<String> {
    Html(form_page())
}

/// GET /about
pub async fn about() -> Html<String> {
    Html(about_page())
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// POST /generate
///
/// Derives exactly one password per request. Every failure renders the
/// error page with a 500 status.
pub async fn generate(
    Utf8Form(form): Utf8Form<GenerateForm>,
) -> Result<Html<String>, FormError> {
    let request = form.into_request()?;
    let password = derive(request)?;
    tracing::info!("password generated");
    Ok(Html(result_page(password.expose())))
}

impl IntoResponse for FormError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "generate request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(error_page(self.headline(), &self.to_string())),
        )
            .into_response()
    }
}
