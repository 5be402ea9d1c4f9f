use crate::models::{DevfileCatalog, ImageCatalog, SourceKind, SourceStatus};

pub mod disambiguate;
pub mod partition;
pub mod tags;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to list {kind} components")]
    SourceUnavailable {
        kind: SourceKind,
        #[source]
        error: anyhow::Error,
    },

    #[error("no deployable components found")]
    EmptyAggregate,

    #[error(
        "no devfile registry is configured, add a [[registries]] entry with a name and url to catalog.toml to list devfile components"
    )]
    RegistryMisconfigured,
}

/// Both listings of a single invocation, with how each of them was obtained.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AggregateResult {
    pub images: ImageCatalog,
    pub image_status: SourceStatus,

    pub devfiles: DevfileCatalog,
    pub devfile_status: SourceStatus,
}

impl AggregateResult {
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.images.items.is_empty() && self.devfiles.items.is_empty() {
            return Err(CatalogError::EmptyAggregate);
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::models::{ComponentEntry, ComponentMetadata};

    use super::*;

    #[test]
    fn both_listings_empty_is_empty_aggregate() {
        let aggregate = AggregateResult {
            image_status: SourceStatus::Fetched,
            devfile_status: SourceStatus::Fetched,
            ..Default::default()
        };

        assert!(matches!(
            aggregate.validate(),
            Err(CatalogError::EmptyAggregate)
        ));
    }

    #[test]
    fn one_non_empty_listing_is_enough() {
        let aggregate = AggregateResult {
            images: ImageCatalog {
                items: vec![ComponentEntry {
                    metadata: ComponentMetadata {
                        name: "nodejs".into(),
                        namespace: "openshift".into(),
                    },
                    ..Default::default()
                }],
            },
            image_status: SourceStatus::Fetched,
            ..Default::default()
        };

        assert!(aggregate.validate().is_ok());
    }
}
