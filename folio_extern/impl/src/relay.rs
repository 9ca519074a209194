use std::{sync::Arc, time::Duration};

use anyhow::{bail, Context};
use folio_extern_contracts::relay::{RelayApiService, RelayTemplateParams};
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::http::HttpClient;

pub const SEND_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Clone)]
pub struct RelayApiServiceImpl {
    config: RelayApiServiceConfig,
    client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct RelayApiServiceConfig {
    endpoint: Arc<Url>,
    service_id: Arc<str>,
    template_id: Arc<str>,
    public_key: Arc<str>,
    timeout: Duration,
}

impl RelayApiServiceConfig {
    pub fn new(
        endpoint_override: Option<Url>,
        service_id: &str,
        template_id: &str,
        public_key: &str,
        timeout: Duration,
    ) -> Self {
        Self {
            endpoint: endpoint_override
                .unwrap_or_else(|| SEND_ENDPOINT.parse().unwrap())
                .into(),
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
            timeout,
        }
    }
}

impl RelayApiServiceImpl {
    pub fn new(config: RelayApiServiceConfig) -> Self {
        let client = HttpClient::new(config.timeout);
        Self { config, client }
    }
}

impl RelayApiService for RelayApiServiceImpl {
    #[tracing::instrument(skip_all, fields(endpoint = %self.config.endpoint))]
    async fn send(&self, params: RelayTemplateParams) -> anyhow::Result<()> {
        let request = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: &params,
        };

        let response = self
            .client
            .post((*self.config.endpoint).clone())
            .json(&request)
            .send()
            .await
            .context("Failed to reach the email relay")?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            bail!("Email relay responded with {status}: {detail}");
        }

        debug!(%status, "email relay accepted the message");

        Ok(())
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a RelayTemplateParams,
}
