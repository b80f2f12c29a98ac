#[cfg(feature = "http")]
use crate::handler::HttpRosterApi;
use crate::handler::LocalRosterApi;
use crate::model::{ActivityCatalog, ApiError, Confirmation, RosterApi};
use crate::Backend;
use crate::Config;
use async_trait::async_trait;

/// The api selected by [`Config::backend`].
#[derive(Debug)]
pub enum ConfiguredApi {
    #[cfg(feature = "http")]
    Http(HttpRosterApi),
    Local(LocalRosterApi),
}

impl ConfiguredApi {
    pub fn from_config(config: &Config) -> Self {
        match config.backend {
            #[cfg(feature = "http")]
            Backend::Http => {
                log::info!("Using roster service at '{}'", config.api_base_url);
                ConfiguredApi::Http(HttpRosterApi::new(config.api_base_url.clone()))
            }
            #[cfg(not(feature = "http"))]
            Backend::Http => {
                log::warn!("Built without the 'http' feature, serving the local roster");
                ConfiguredApi::Local(LocalRosterApi::seeded())
            }
            Backend::Local => {
                log::info!("Using the in-memory roster");
                ConfiguredApi::Local(LocalRosterApi::seeded())
            }
        }
    }
}

#[async_trait(?Send)]
impl RosterApi for ConfiguredApi {
    async fn fetch_activities(&self) -> Result<ActivityCatalog, ApiError> {
        match self {
            #[cfg(feature = "http")]
            ConfiguredApi::Http(api) => api.fetch_activities().await,
            ConfiguredApi::Local(api) => api.fetch_activities().await,
        }
    }

    async fn sign_up(&self, activity: &str, email: &str) -> Result<Confirmation, ApiError> {
        match self {
            #[cfg(feature = "http")]
            ConfiguredApi::Http(api) => api.sign_up(activity, email).await,
            ConfiguredApi::Local(api) => api.sign_up(activity, email).await,
        }
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<Confirmation, ApiError> {
        match self {
            #[cfg(feature = "http")]
            ConfiguredApi::Http(api) => api.unregister(activity, email).await,
            ConfiguredApi::Local(api) => api.unregister(activity, email).await,
        }
    }
}
