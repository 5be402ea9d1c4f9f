use crate::{
    catalog::tags::SupportedImages,
    render::Renderer,
    services::catalog::CatalogServiceState,
    settings::SettingsServiceState,
    state::State,
};

#[derive(clap::Parser)]
pub struct ListComponentsCommand {
    /// List both supported and unsupported devfile components
    #[arg(long, short = 'a')]
    all: bool,
}

impl ListComponentsCommand {
    #[tracing::instrument(skip(self, state), level = "trace")]
    pub async fn execute(&self, state: &State) -> anyhow::Result<()> {
        tracing::debug!(all = self.all, "listing components");

        let settings = state.settings_service().get_settings().await?;

        let aggregate = state
            .catalog_service(settings.catalog_options())
            .list_components()
            .await?;

        let tag_support = SupportedImages::new().with_images(&settings.supported_images);
        let renderer = Renderer::new(
            settings.output,
            self.all,
            &settings.active_namespace,
            &tag_support,
        );

        renderer.render(&aggregate, std::io::stdout().lock())?;

        Ok(())
    }
}
