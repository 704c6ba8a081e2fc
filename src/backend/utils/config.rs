use crate::backend::utils::error::BackendResult;
use config::Config;
use doku::Document;
use serde::Deserialize;
use smart_default::SmartDefault;

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Document, SmartDefault)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct ConfirmConfig {
    /// Access to the Stripe API, used to look up checkout sessions
    pub stripe: ConfirmConfigStripe,
    /// Caching of checkout session status which cannot change anymore
    pub cache: ConfirmConfigCache,
}

impl ConfirmConfig {
    pub fn read() -> BackendResult<Self> {
        let config = Config::builder()
            .add_source(config::File::with_name("config.toml").required(false))
            // Cant use _ as separator due to https://github.com/mehcode/config-rs/issues/391
            .add_source(config::Environment::with_prefix("CHECKOUT").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Document, SmartDefault)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct ConfirmConfigStripe {
    /// Base url of the Stripe API
    #[default("https://api.stripe.com")]
    #[doku(example = "https://api.stripe.com")]
    pub api_url: String,
    /// Secret API key of the Stripe account which created the checkout sessions
    #[default("")]
    #[doku(example = "sk_test_4eC39HqLyjWDarjtT1zdp7dc")]
    pub secret_key: String,
}

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Document, SmartDefault)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct ConfirmConfigCache {
    /// How long a complete or expired session status is kept, in seconds
    #[default(300)]
    #[doku(example = "300")]
    pub time_to_live_secs: u64,
    /// Maximum number of cached sessions
    #[default(10_000)]
    #[doku(example = "10000")]
    pub max_capacity: u64,
}
