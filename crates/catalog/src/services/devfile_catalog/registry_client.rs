use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::{
    models::{DevfileCatalog, DevfileEntry, Registry},
    user_config::UserConfigService,
};

use super::DevfileCatalogClientContract;

const REGISTRY_INDEX_PATH: &str = "devfiles/index.json";

/// Reads the component index of each devfile registry configured in `[[registries]]`.
pub struct RegistryIndexClient {
    user_config: UserConfigService,
    client: reqwest::Client,
}

impl RegistryIndexClient {
    pub fn new(user_config: UserConfigService, client: reqwest::Client) -> Self {
        Self {
            user_config,
            client,
        }
    }

    async fn get_index(&self, registry: &Registry) -> anyhow::Result<Vec<IndexEntry>> {
        let url = index_url(&registry.url)?;
        tracing::trace!(registry = %registry.name, %url, "fetching registry index");

        let index = self
            .client
            .get(url.clone())
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .context(format!("failed to reach registry {} at {url}", registry.name))?
            .json::<Vec<IndexEntry>>()
            .await
            .context(format!("failed to parse index of registry {}", registry.name))?;

        Ok(index)
    }
}

#[async_trait]
impl DevfileCatalogClientContract for RegistryIndexClient {
    #[tracing::instrument(skip(self), level = "trace")]
    async fn list_components(
        &self,
        registry_filter: Option<&str>,
    ) -> anyhow::Result<DevfileCatalog> {
        let config = self.user_config.get_user_config().await?;

        let Some(registries) = &config.registries else {
            return Ok(DevfileCatalog::default());
        };

        let mut catalog = DevfileCatalog {
            registries: Some(registries.clone()),
            items: Vec::new(),
        };

        for registry in registries
            .iter()
            .filter(|r| registry_filter.is_none_or(|name| r.name == name))
        {
            let index = self.get_index(registry).await?;

            catalog.items.extend(into_entries(index, registry));
        }

        Ok(catalog)
    }
}

fn index_url(registry_url: &str) -> anyhow::Result<Url> {
    let base = Url::parse(&format!("{}/", registry_url.trim_end_matches('/')))
        .context(format!("invalid registry url: {registry_url}"))?;

    base.join(REGISTRY_INDEX_PATH)
        .context(format!("invalid registry url: {registry_url}"))
}

fn into_entries(index: Vec<IndexEntry>, registry: &Registry) -> Vec<DevfileEntry> {
    index
        .into_iter()
        .map(|entry| DevfileEntry {
            display_name: entry.display_name.unwrap_or_else(|| entry.name.clone()),
            name: entry.name,
            description: entry.description,
            link: entry.links.self_link,
            registry: registry.clone(),
            support: entry.supported,
        })
        .collect()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IndexEntry {
    name: String,
    display_name: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    links: IndexLinks,
    #[serde(default = "supported_by_default")]
    supported: bool,
}

#[derive(Debug, Default, Deserialize)]
struct IndexLinks {
    #[serde(rename = "self", default)]
    self_link: String,
}

fn supported_by_default() -> bool {
    true
}

#[cfg(test)]
mod test {
    use super::*;

    fn registry() -> Registry {
        Registry {
            name: "DefaultDevfileRegistry".into(),
            url: "https://registry.example.com/".into(),
        }
    }

    #[test]
    fn builds_index_url() -> anyhow::Result<()> {
        assert_eq!(
            "https://registry.example.com/devfiles/index.json",
            index_url("https://registry.example.com")?.as_str()
        );
        assert_eq!(
            "https://example.com/stacks/devfiles/index.json",
            index_url("https://example.com/stacks/")?.as_str()
        );
        assert!(index_url("not a url").is_err());

        Ok(())
    }

    #[test]
    fn maps_index_entries() -> anyhow::Result<()> {
        let index: Vec<IndexEntry> = serde_json::from_str(
            r#"[
                {
                    "name": "java-maven",
                    "displayName": "Maven Java",
                    "description": "Upstream Maven and OpenJDK 11",
                    "links": { "self": "devfiles/java-maven/devfile.yaml" }
                },
                { "name": "php-mysql", "supported": false }
            ]"#,
        )?;

        let entries = into_entries(index, &registry());

        assert_eq!(
            vec![
                DevfileEntry {
                    name: "java-maven".into(),
                    display_name: "Maven Java".into(),
                    description: "Upstream Maven and OpenJDK 11".into(),
                    link: "devfiles/java-maven/devfile.yaml".into(),
                    registry: registry(),
                    support: true,
                },
                DevfileEntry {
                    name: "php-mysql".into(),
                    display_name: "php-mysql".into(),
                    description: "".into(),
                    link: "".into(),
                    registry: registry(),
                    support: false,
                },
            ],
            entries
        );

        Ok(())
    }
}
