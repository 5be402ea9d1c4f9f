use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;

use crate::{
    models::{ComponentEntry, ComponentMetadata, ComponentSpec, ImageCatalog},
    user_config::UserConfigService,
};

use super::ImageCatalogClientContract;

/// Reads image streams from a snapshot of a cluster, as configured in `[image_catalog]`.
pub struct FileImageCatalogClient {
    user_config: UserConfigService,
}

impl FileImageCatalogClient {
    pub fn new(user_config: UserConfigService) -> Self {
        Self { user_config }
    }
}

#[async_trait]
impl ImageCatalogClientContract for FileImageCatalogClient {
    #[tracing::instrument(skip(self), level = "trace")]
    async fn list_components(&self) -> anyhow::Result<ImageCatalog> {
        let config = self.user_config.get_user_config().await?;

        let Some(path) = &config.image_catalog.path else {
            anyhow::bail!("not logged in to a cluster, no image catalog is configured");
        };

        read_snapshot(path).await
    }
}

async fn read_snapshot(path: &Path) -> anyhow::Result<ImageCatalog> {
    tracing::trace!(path = %path.display(), "reading image streams");

    let content = tokio::fs::read_to_string(path).await.context(format!(
        "failed to read image catalog at path: {}",
        path.display()
    ))?;

    parse_snapshot(&content)
}

fn parse_snapshot(content: &str) -> anyhow::Result<ImageCatalog> {
    let snapshot: ImageStreamSnapshot =
        toml::from_str(content).context("failed to parse image catalog")?;

    Ok(ImageCatalog {
        items: snapshot
            .image_streams
            .into_iter()
            .map(ComponentEntry::from)
            .collect(),
    })
}

#[derive(Debug, Deserialize)]
struct ImageStreamSnapshot {
    #[serde(default)]
    image_streams: Vec<ImageStream>,
}

#[derive(Debug, Deserialize)]
struct ImageStream {
    name: String,
    namespace: String,
    #[serde(default)]
    tags: Vec<ImageStreamTag>,
}

#[derive(Debug, Deserialize)]
struct ImageStreamTag {
    name: String,
    image: Option<String>,
    #[serde(default)]
    hidden: bool,
}

impl From<ImageStream> for ComponentEntry {
    fn from(value: ImageStream) -> Self {
        let all_tags = value.tags.iter().map(|t| t.name.clone()).collect();
        let non_hidden_tags = value
            .tags
            .iter()
            .filter(|t| !t.hidden)
            .map(|t| t.name.clone())
            .collect();
        let image_stream_tags = value
            .tags
            .into_iter()
            .filter_map(|t| t.image.map(|image| (t.name, image)))
            .collect();

        Self {
            metadata: ComponentMetadata {
                name: value.name,
                namespace: value.namespace,
            },
            spec: ComponentSpec {
                all_tags,
                non_hidden_tags,
                supported_tags: Vec::new(),
                image_stream_tags,
            },
        }
    }
}
