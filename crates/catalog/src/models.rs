use std::{collections::BTreeMap, fmt::Display};

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize)]
pub struct ComponentMetadata {
    pub name: String,
    pub namespace: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSpec {
    pub all_tags: Vec<String>,
    pub non_hidden_tags: Vec<String>,
    pub supported_tags: Vec<String>,
    /// tag name to the image the tag points at
    pub image_stream_tags: BTreeMap<String, String>,
}

/// An image based component type, as found in a cluster namespace.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize)]
pub struct ComponentEntry {
    pub metadata: ComponentMetadata,
    pub spec: ComponentSpec,
}

impl ComponentEntry {
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn namespace(&self) -> &str {
        &self.metadata.namespace
    }

    pub fn tags(&self) -> &[String] {
        &self.spec.non_hidden_tags
    }

    /// Projects the entry onto a subset of its tags. The source entry is left untouched.
    pub fn with_tags(&self, tags: Vec<String>) -> Self {
        Self {
            metadata: self.metadata.clone(),
            spec: ComponentSpec {
                non_hidden_tags: tags,
                ..self.spec.clone()
            },
        }
    }

    pub fn with_supported_tags(&self, supported_tags: Vec<String>) -> Self {
        Self {
            metadata: self.metadata.clone(),
            spec: ComponentSpec {
                supported_tags,
                ..self.spec.clone()
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ImageCatalog {
    pub items: Vec<ComponentEntry>,
}

impl ImageCatalog {
    /// Drops components which only carry hidden tags.
    pub fn without_hidden_components(self) -> Self {
        Self {
            items: self
                .items
                .into_iter()
                .filter(|c| !c.spec.non_hidden_tags.is_empty())
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Registry {
    pub name: String,
    pub url: String,
}

/// A devfile based component type, as listed by a devfile registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevfileEntry {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub link: String,
    pub registry: Registry,
    pub support: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DevfileCatalog {
    pub registries: Option<Vec<Registry>>,
    pub items: Vec<DevfileEntry>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Image,
    Devfile,
}

impl Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Image => f.write_str("image"),
            SourceKind::Devfile => f.write_str("devfile"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SourceStatus {
    Fetched,
    /// the fetch was never registered for this invocation
    #[default]
    Skipped,
    /// the fetch failed, and the failure was downgraded to a diagnostic
    Unavailable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PushTarget {
    #[default]
    Kube,
    Docker,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
