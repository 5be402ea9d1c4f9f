use std::sync::Arc;

use async_trait::async_trait;

use crate::{models::ImageCatalog, state::State, user_config::UserConfigServiceState};

mod file_client;
use file_client::FileImageCatalogClient;

#[async_trait]
pub trait ImageCatalogClientContract {
    async fn list_components(&self) -> anyhow::Result<ImageCatalog>;
}

/// Lists the image based component types available to the current user.
#[derive(Clone)]
pub struct ImageCatalogClient {
    inner: Arc<dyn ImageCatalogClientContract + Send + Sync + 'static>,
}

impl ImageCatalogClient {
    #[tracing::instrument(skip(self), level = "trace")]
    pub async fn list_components(&self) -> anyhow::Result<ImageCatalog> {
        let catalog = self.inner.list_components().await?;

        Ok(catalog.without_hidden_components())
    }
}

impl<T: ImageCatalogClientContract + Send + Sync + 'static> From<T> for ImageCatalogClient {
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

pub trait ImageCatalogClientState {
    fn image_catalog_client(&self) -> ImageCatalogClient;
}

impl ImageCatalogClientState for State {
    fn image_catalog_client(&self) -> ImageCatalogClient {
        ImageCatalogClient::from(FileImageCatalogClient::new(self.user_config_service()))
    }
}

#[cfg(test)]
mod test {
    use crate::models::{ComponentEntry, ComponentMetadata, ComponentSpec};

    use super::*;

    struct StaticImages(ImageCatalog);

    #[async_trait]
    impl ImageCatalogClientContract for StaticImages {
        async fn list_components(&self) -> anyhow::Result<ImageCatalog> {
            Ok(self.0.clone())
        }
    }

    fn entry(name: &str, all_tags: &[&str], non_hidden_tags: &[&str]) -> ComponentEntry {
        ComponentEntry {
            metadata: ComponentMetadata {
                name: name.into(),
                namespace: "openshift".into(),
            },
            spec: ComponentSpec {
                all_tags: all_tags.iter().map(|t| t.to_string()).collect(),
                non_hidden_tags: non_hidden_tags.iter().map(|t| t.to_string()).collect(),
                ..Default::default()
            },
        }
    }

    #[tokio::test]
    async fn drops_components_with_only_hidden_tags() -> anyhow::Result<()> {
        let client = ImageCatalogClient::from(StaticImages(ImageCatalog {
            items: vec![
                entry("nodejs", &["8", "10"], &["10"]),
                entry("dotnet", &["2.0"], &[]),
            ],
        }));

        let catalog = client.list_components().await?;

        assert_eq!(vec![entry("nodejs", &["8", "10"], &["10"])], catalog.items);

        Ok(())
    }
}
