use crate::{
    catalog::{AggregateResult, CatalogError},
    models::{DevfileCatalog, ImageCatalog, PushTarget, SourceKind, SourceStatus},
    state::State,
    task_runner::TaskRunner,
};

use super::{
    devfile_catalog::{DevfileCatalogClient, DevfileCatalogClientState},
    image_catalog::{ImageCatalogClient, ImageCatalogClientState},
};

const FETCH_CONCURRENCY: usize = 2;

/// Switches which decide which sources are asked, and how their failures are treated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogOptions {
    /// enables devfile components, and tolerates an unreachable cluster
    pub experimental: bool,
    pub push_target: PushTarget,
    pub registry_filter: Option<String>,
}

pub struct CatalogService {
    options: CatalogOptions,
    images: ImageCatalogClient,
    devfiles: DevfileCatalogClient,
}

enum Fetched {
    Images(ImageCatalog, SourceStatus),
    Devfiles(DevfileCatalog),
}

impl CatalogService {
    pub fn new(
        options: CatalogOptions,
        images: ImageCatalogClient,
        devfiles: DevfileCatalogClient,
    ) -> Self {
        Self {
            options,
            images,
            devfiles,
        }
    }

    /// Fetches both listings concurrently, and fails when neither holds a single component.
    #[tracing::instrument(skip(self), fields(options = ?self.options), level = "trace")]
    pub async fn list_components(&self) -> anyhow::Result<AggregateResult> {
        let aggregate = self.fetch().await?;

        aggregate.validate()?;

        Ok(aggregate)
    }

    async fn fetch(&self) -> anyhow::Result<AggregateResult> {
        let mut runner = TaskRunner::<Fetched>::new(FETCH_CONCURRENCY);

        if self.options.push_target != PushTarget::Docker {
            runner.add(fetch_images(
                self.images.clone(),
                self.options.experimental,
            ));
        }

        if self.options.experimental {
            runner.add(fetch_devfiles(
                self.devfiles.clone(),
                self.options.registry_filter.clone(),
            ));
        }

        let mut aggregate = AggregateResult::default();
        for fetched in runner.run().await? {
            match fetched {
                Fetched::Images(images, status) => {
                    aggregate.images = images;
                    aggregate.image_status = status;
                }
                Fetched::Devfiles(devfiles) => {
                    aggregate.devfiles = devfiles;
                    aggregate.devfile_status = SourceStatus::Fetched;
                }
            }
        }

        tracing::debug!(
            images = aggregate.images.items.len(),
            image_status = ?aggregate.image_status,
            devfiles = aggregate.devfiles.items.len(),
            devfile_status = ?aggregate.devfile_status,
            "fetched component catalogs"
        );

        Ok(aggregate)
    }
}

async fn fetch_images(images: ImageCatalogClient, experimental: bool) -> anyhow::Result<Fetched> {
    match images.list_components().await {
        Ok(catalog) => Ok(Fetched::Images(catalog, SourceStatus::Fetched)),
        Err(error) if experimental => {
            tracing::debug!(
                error = format!("{error:#}"),
                "log in to a cluster to list image components"
            );

            Ok(Fetched::Images(
                ImageCatalog::default(),
                SourceStatus::Unavailable,
            ))
        }
        Err(error) => Err(CatalogError::SourceUnavailable {
            kind: SourceKind::Image,
            error,
        }
        .into()),
    }
}

async fn fetch_devfiles(
    devfiles: DevfileCatalogClient,
    registry_filter: Option<String>,
) -> anyhow::Result<Fetched> {
    let catalog = devfiles
        .list_components(registry_filter.as_deref())
        .await
        .map_err(|error| CatalogError::SourceUnavailable {
            kind: SourceKind::Devfile,
            error,
        })?;

    if catalog.registries.is_none() {
        tracing::warn!("{}", CatalogError::RegistryMisconfigured);
    }

    Ok(Fetched::Devfiles(catalog))
}

pub trait CatalogServiceState {
    fn catalog_service(&self, options: CatalogOptions) -> CatalogService;
}

impl CatalogServiceState for State {
    fn catalog_service(&self, options: CatalogOptions) -> CatalogService {
        CatalogService::new(
            options,
            self.image_catalog_client(),
            self.devfile_catalog_client(),
        )
    }
}
