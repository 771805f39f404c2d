use std::sync::Arc;

use anyhow::Context;
use realty_auth::{FileStorage, SessionStore};
use realty_client::ApiClient;
use realty_config::RealtyConfig;
use realty_core::entities::Session;

use crate::cli::GlobalFlags;
use crate::notify::ConsoleNotifier;

/// Resources shared by every networked command.
pub struct AppContext {
    pub config: RealtyConfig,
    pub session: SessionStore,
}

impl AppContext {
    /// Build the client and session store, then restore and verify the
    /// stored session.
    pub async fn init(config: RealtyConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let client = ApiClient::from_config(&config).context("failed to build HTTP client")?;
        let storage =
            FileStorage::from_config(&config.storage).context("failed to open session storage")?;
        tracing::debug!(path = %storage.path().display(), "session storage");

        let session = SessionStore::new(
            client,
            Arc::new(storage),
            Arc::new(ConsoleNotifier::new(flags.quiet)),
        );
        let state = session.init().await;
        tracing::debug!(authenticated = state.session().is_some(), "session restored");

        Ok(Self { config, session })
    }

    pub fn client(&self) -> &ApiClient {
        self.session.client()
    }

    pub fn require_session(&self) -> anyhow::Result<Session> {
        Ok(self.session.require()?)
    }

    /// The signed-in session, which must belong to a landlord account.
    pub fn require_landlord(&self) -> anyhow::Result<Session> {
        let session = self.require_session()?;
        if !session.is_landlord() {
            anyhow::bail!(
                "only '{}' accounts can manage listings; '{}' is a '{}' account",
                realty_core::enums::UserType::LandlordAndSell,
                session.username,
                session.user_type
            );
        }
        Ok(session)
    }

    /// Row cap: `--limit`, else `general.default_limit`.
    pub fn limit(&self, flags: &GlobalFlags) -> usize {
        let limit = flags.limit.unwrap_or(self.config.general.default_limit);
        usize::try_from(limit).unwrap_or(usize::MAX)
    }
}
