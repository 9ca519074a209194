use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use folio_models::contact::ValidationReport;

use crate::models::{ApiError, ApiValidationError};

pub mod contact;
pub mod pages;

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

fn validation_error(report: &ValidationReport) -> Response {
    let fields = report
        .error_messages()
        .map(|(field, message)| (field.as_str(), message))
        .collect();

    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiValidationError {
            detail: "Invalid contact form",
            fields,
        }),
    )
        .into_response()
}

fn error(code: StatusCode, detail: &'static str) -> Response {
    (code, Json(ApiError { detail })).into_response()
}
