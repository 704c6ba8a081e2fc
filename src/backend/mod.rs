use crate::common::checkout::{SessionId, SessionStatus};
use cache::SessionStatusCache;
use log::{debug, warn};
use server::start_server;
use std::{net::SocketAddr, sync::Arc};
use stripe::{PaymentProvider, StripeClient};
use tokio::sync::oneshot;
use utils::error::BackendResult;

pub use utils::config::ConfirmConfig;

pub mod api;
pub mod cache;
mod server;
pub mod stripe;
pub mod utils;

pub struct CheckoutContext {
    pub config: ConfirmConfig,
    pub provider: Arc<dyn PaymentProvider>,
    pub cache: SessionStatusCache,
}

impl CheckoutContext {
    pub fn init(config: ConfirmConfig) -> BackendResult<Self> {
        let provider = Arc::new(StripeClient::new(&config.stripe)?);
        Ok(Self::new(config, provider))
    }

    pub fn new(config: ConfirmConfig, provider: Arc<dyn PaymentProvider>) -> Self {
        let cache = SessionStatusCache::new(&config.cache);
        Self {
            config,
            provider,
            cache,
        }
    }

    /// Current status of the checkout session, from cache if it cannot change anymore.
    pub async fn session_status(&self, session_id: &SessionId) -> BackendResult<SessionStatus> {
        if let Some(status) = self.cache.get(session_id) {
            debug!("Using cached status {status} for checkout session {session_id}");
            return Ok(status);
        }
        let status = self.provider.session_status(session_id).await?;
        self.cache.insert(session_id, &status);
        Ok(status)
    }
}

pub async fn start(
    config: ConfirmConfig,
    override_hostname: Option<SocketAddr>,
    notify_start: Option<oneshot::Sender<()>>,
) -> BackendResult<()> {
    if config.stripe.secret_key.is_empty() {
        warn!("No Stripe secret key configured, checkout sessions cannot be verified");
    }
    let context = CheckoutContext::init(config)?;
    start_server(context, override_hostname, notify_start).await?;

    Ok(())
}
