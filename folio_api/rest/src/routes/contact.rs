use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_contact_contracts::{ContactRelayError, ContactService, ContactValidationError};
use folio_models::{contact::QuickContact, status::SubmissionStatus};

use super::{error, validation_error};
use crate::models::{
    contact::{ApiContactForm, ApiContactInfo, ApiHandoff},
    ApiMessage,
};

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::get(info))
        .route("/api/contact/mailto", routing::post(mailto))
        .route("/api/contact/whatsapp", routing::post(whatsapp))
        .route("/api/contact/relay", routing::post(relay))
        .route("/api/contact/quick/:action", routing::get(quick_contact))
        .with_state(service)
}

async fn info(service: State<Arc<impl ContactService>>) -> Response {
    Json(ApiContactInfo::from(service.info())).into_response()
}

async fn mailto(
    service: State<Arc<impl ContactService>>,
    Json(form): Json<ApiContactForm>,
) -> Response {
    match service.mailto(&form.into()) {
        Ok(handoff) => Json(ApiHandoff::from(handoff)).into_response(),
        Err(ContactValidationError(report)) => validation_error(&report),
    }
}

async fn whatsapp(
    service: State<Arc<impl ContactService>>,
    Json(form): Json<ApiContactForm>,
) -> Response {
    match service.whatsapp(&form.into()) {
        Ok(handoff) => Json(ApiHandoff::from(handoff)).into_response(),
        Err(ContactValidationError(report)) => validation_error(&report),
    }
}

async fn relay(
    service: State<Arc<impl ContactService>>,
    Json(form): Json<ApiContactForm>,
) -> Response {
    match service.relay(form.into()).await {
        Ok(()) => Json(ApiMessage {
            message: SubmissionStatus::RELAY_SUCCESS_MESSAGE,
        })
        .into_response(),
        Err(ContactRelayError::Invalid(report)) => validation_error(&report),
        Err(ContactRelayError::Send) => {
            error(StatusCode::BAD_GATEWAY, SubmissionStatus::RELAY_FAILURE_MESSAGE)
        }
    }
}

async fn quick_contact(
    service: State<Arc<impl ContactService>>,
    Path(action): Path<String>,
) -> Response {
    match action.parse::<QuickContact>() {
        Ok(action) => Json(ApiHandoff::from(service.quick_contact(action))).into_response(),
        Err(_) => error(StatusCode::NOT_FOUND, "Unknown quick contact action"),
    }
}
