use std::sync::Arc;

use async_trait::async_trait;

use crate::{models::DevfileCatalog, state::State, user_config::UserConfigServiceState};

mod registry_client;
use registry_client::RegistryIndexClient;

#[async_trait]
pub trait DevfileCatalogClientContract {
    /// Lists devfile components of every configured registry, or only of the
    /// registry named by `registry_filter`.
    async fn list_components(
        &self,
        registry_filter: Option<&str>,
    ) -> anyhow::Result<DevfileCatalog>;
}

#[derive(Clone)]
pub struct DevfileCatalogClient {
    inner: Arc<dyn DevfileCatalogClientContract + Send + Sync + 'static>,
}

impl DevfileCatalogClient {
    #[tracing::instrument(skip(self), level = "trace")]
    pub async fn list_components(
        &self,
        registry_filter: Option<&str>,
    ) -> anyhow::Result<DevfileCatalog> {
        self.inner.list_components(registry_filter).await
    }
}

impl<T: DevfileCatalogClientContract + Send + Sync + 'static> From<T> for DevfileCatalogClient {
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

pub trait DevfileCatalogClientState {
    fn devfile_catalog_client(&self) -> DevfileCatalogClient;
}

impl DevfileCatalogClientState for State {
    fn devfile_catalog_client(&self) -> DevfileCatalogClient {
        DevfileCatalogClient::from(RegistryIndexClient::new(
            self.user_config_service(),
            reqwest::Client::default(),
        ))
    }
}
