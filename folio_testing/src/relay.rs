use std::{net::IpAddr, sync::Arc};

use anyhow::Context;
use axum::{extract::State, http::StatusCode, routing, Json, Router};
use folio_extern_contracts::relay::RelayTemplateParams;
use parking_lot::Mutex;
use serde::Deserialize;
use tokio::net::TcpListener;
use tracing::info;

pub const SEND_ROUTE: &str = "/api/v1.0/email/send";

/// The credentials the testing relay accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayAccount {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// Every message accepted by the testing relay, in order of arrival.
#[derive(Debug, Clone, Default)]
pub struct Outbox(Arc<Mutex<Vec<RelayTemplateParams>>>);

impl Outbox {
    pub fn messages(&self) -> Vec<RelayTemplateParams> {
        self.0.lock().clone()
    }
}

pub async fn start_server(host: IpAddr, port: u16, account: RelayAccount) -> anyhow::Result<()> {
    info!("Starting email relay testing server on {host}:{port}");
    info!("Email relay send endpoint: http://{host}:{port}{SEND_ROUTE}");
    info!("Account: {account:?}");

    let router = router(account, Outbox::default());

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router)
        .await
        .context("Failed to start HTTP server")
}

pub fn router(account: RelayAccount, outbox: Outbox) -> Router<()> {
    Router::new()
        .route(SEND_ROUTE, routing::post(send))
        .with_state(Arc::new(RelayState { account, outbox }))
}

struct RelayState {
    account: RelayAccount,
    outbox: Outbox,
}

#[derive(Deserialize)]
struct SendRequest {
    service_id: String,
    template_id: String,
    user_id: String,
    template_params: RelayTemplateParams,
}

async fn send(
    state: State<Arc<RelayState>>,
    Json(request): Json<SendRequest>,
) -> (StatusCode, &'static str) {
    let account = &state.account;

    if request.user_id != account.public_key {
        return (StatusCode::UNAUTHORIZED, "The Public Key is invalid");
    }
    if request.service_id != account.service_id {
        return (StatusCode::BAD_REQUEST, "The service ID is invalid");
    }
    if request.template_id != account.template_id {
        return (StatusCode::BAD_REQUEST, "The template ID is invalid");
    }

    info!(
        "Relaying {:?} from {} <{}> to {}",
        request.template_params.subject,
        request.template_params.from_name,
        request.template_params.from_email,
        request.template_params.to_email,
    );
    state.outbox.0.lock().push(request.template_params);

    (StatusCode::OK, "OK")
}
