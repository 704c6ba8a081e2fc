use crate::{
    backend::utils::{
        config::ConfirmConfigStripe,
        error::{BackendError, BackendResult},
    },
    common::checkout::{SessionId, SessionStatus},
};
use anyhow::anyhow;
use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use url::Url;

/// Service which owns the checkout sessions and knows whether they were paid.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    async fn session_status(&self, session_id: &SessionId) -> BackendResult<SessionStatus>;
}

/// Reads checkout sessions from the Stripe API.
///
/// https://docs.stripe.com/api/checkout/sessions/retrieve
pub struct StripeClient {
    client: reqwest::Client,
    api_url: Url,
    secret_key: String,
}

#[derive(Deserialize)]
struct StripeCheckoutSession {
    status: Option<SessionStatus>,
}

impl StripeClient {
    pub fn new(config: &ConfirmConfigStripe) -> BackendResult<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            api_url: Url::parse(&config.api_url)?,
            secret_key: config.secret_key.clone(),
        })
    }

    fn session_url(&self, session_id: &SessionId) -> BackendResult<Url> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("Invalid Stripe api url {}", self.api_url))?
            .pop_if_empty()
            .extend(["v1", "checkout", "sessions", session_id.as_str()]);
        Ok(url)
    }
}

#[async_trait]
impl PaymentProvider for StripeClient {
    async fn session_status(&self, session_id: &SessionId) -> BackendResult<SessionStatus> {
        let url = self.session_url(session_id)?;
        debug!("Fetching checkout session from {url}");
        let res = self
            .client
            .get(url)
            .bearer_auth(&self.secret_key)
            .send()
            .await?;
        let status = res.status();
        if !status.is_success() {
            let text = res.text().await?;
            return Err(anyhow!(
                "Stripe returned {status} for checkout session {session_id}: {text}"
            )
            .into());
        }
        let session: StripeCheckoutSession = res.json().await?;
        session
            .status
            .ok_or_else(|| BackendError(anyhow!("Checkout session {session_id} has no status")))
    }
}
