use std::future::Future;

use serde::{Deserialize, Serialize};

/// A hosted email relay that sends templated emails on our behalf.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait RelayApiService: Send + Sync + 'static {
    /// Asks the relay to render its template with `params` and send the
    /// resulting email.
    fn send(&self, params: RelayTemplateParams)
        -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// Values available to the relay's email template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayTemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_email: String,
}

#[cfg(feature = "mock")]
impl MockRelayApiService {
    pub fn with_send(mut self, params: RelayTemplateParams, ok: bool) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(params))
            .return_once(move |_| {
                Box::pin(std::future::ready(if ok {
                    Ok(())
                } else {
                    Err(anyhow::anyhow!("relay rejected the email"))
                }))
            });
        self
    }

    /// Like [`Self::with_send`], but the returned future only completes after
    /// `delay` has passed.
    pub fn with_delayed_send(
        mut self,
        params: RelayTemplateParams,
        ok: bool,
        delay: std::time::Duration,
    ) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(params))
            .return_once(move |_| {
                Box::pin(async move {
                    tokio::time::sleep(delay).await;
                    if ok {
                        Ok(())
                    } else {
                        Err(anyhow::anyhow!("relay rejected the email"))
                    }
                })
            });
        self
    }
}
