//! Composition root: wires configuration into the provider and the shared
//! preference store.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::odds_api::OddsApiClient;
use crate::application::preferences::PreferenceStore;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::odds::OddsProvider;

/// Shared dependencies handed to every command.
pub struct AppContext {
    pub config: Config,
    pub provider: Arc<dyn OddsProvider>,
    pub preferences: Arc<PreferenceStore>,
}

impl AppContext {
    /// Build the HTTP provider and preference store from configuration.
    pub fn from_config(config: Config) -> Result<Self> {
        let client = OddsApiClient::from_config(&config.api)?;
        info!(base_url = %config.api.base_url, "Odds provider ready");
        let provider: Arc<dyn OddsProvider> = Arc::new(client);
        Ok(Self::with_provider(config, provider))
    }

    /// Use an already constructed provider.
    #[must_use]
    pub fn with_provider(config: Config, provider: Arc<dyn OddsProvider>) -> Self {
        let preferences = Arc::new(PreferenceStore::new(config.preferences()));
        Self {
            config,
            provider,
            preferences,
        }
    }
}
