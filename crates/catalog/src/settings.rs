use std::{path::PathBuf, sync::Arc};

use crate::{
    models::{OutputFormat, PushTarget},
    services::catalog::CatalogOptions,
    state::State,
    user_config::{UserConfig, UserConfigService, UserConfigServiceState},
};

/// Flags available on every command. Each of them wins over `catalog.toml`.
#[derive(clap::Args, Clone, Debug, Default)]
pub struct GlobalArgs {
    /// Output format
    #[arg(long, short = 'o', env = "CATALOG_OUTPUT", global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Enable experimental features, such as devfile components
    #[arg(
        long,
        env = "CATALOG_EXPERIMENTAL",
        global = true,
        num_args = 0..=1,
        require_equals = true,
        value_parser = clap::builder::BoolishValueParser::new(),
        default_missing_value = "true"
    )]
    pub experimental: Option<bool>,

    /// Where components get pushed to
    #[arg(long, env = "CATALOG_PUSH_TARGET", global = true, value_enum)]
    pub push_target: Option<PushTarget>,

    /// The namespace you are currently working in
    #[arg(long, env = "CATALOG_PROJECT", global = true)]
    pub project: Option<String>,

    /// Path to the config file, defaults to catalog.toml in the user config dir
    #[arg(long, env = "CATALOG_CONFIG", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub output: OutputFormat,
    pub experimental: bool,
    pub push_target: PushTarget,
    /// empty when unknown, in which case no row is ever marked as ambiguous
    pub active_namespace: String,
    pub supported_images: Vec<String>,
}

impl Settings {
    pub fn resolve(args: &GlobalArgs, config: &UserConfig) -> Self {
        Self {
            output: args.output.unwrap_or_default(),
            experimental: args.experimental.unwrap_or(config.preferences.experimental),
            push_target: args.push_target.unwrap_or(config.preferences.push_target),
            active_namespace: args
                .project
                .clone()
                .or_else(|| config.user.namespace.clone())
                .unwrap_or_default(),
            supported_images: config.image_catalog.supported_images.clone(),
        }
    }

    pub fn catalog_options(&self) -> CatalogOptions {
        CatalogOptions {
            experimental: self.experimental,
            push_target: self.push_target,
            registry_filter: None,
        }
    }
}

pub struct SettingsService {
    global: Arc<GlobalArgs>,
    user_config: UserConfigService,
}

impl SettingsService {
    #[tracing::instrument(skip(self), level = "trace")]
    pub async fn get_settings(&self) -> anyhow::Result<Settings> {
        let config = self.user_config.get_user_config().await?;

        let settings = Settings::resolve(&self.global, config);
        tracing::trace!(?settings, "resolved settings");

        Ok(settings)
    }
}

pub trait SettingsServiceState {
    fn settings_service(&self) -> SettingsService;
}

impl SettingsServiceState for State {
    fn settings_service(&self) -> SettingsService {
        SettingsService {
            global: self.global.clone(),
            user_config: self.user_config_service(),
        }
    }
}
