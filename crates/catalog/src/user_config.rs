use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use serde::Deserialize;
use tokio::sync::OnceCell;

use crate::{
    models::{PushTarget, Registry},
    state::State,
    user_locations::UserLocations,
};

const USER_CONFIG_FILE: &str = "catalog.toml";

#[derive(Clone)]
pub struct UserConfigService {
    path: PathBuf,

    config: Arc<OnceCell<UserConfig>>,
}

impl UserConfigService {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(OnceCell::const_new()),
        }
    }

    pub async fn get_user_config(&self) -> anyhow::Result<&UserConfig> {
        let config = self
            .config
            .get_or_try_init(|| async {
                let config_path = &self.path;

                if !config_path.exists() {
                    tracing::trace!(
                        path = %config_path.display(),
                        "no user config found, using defaults"
                    );
                    return Ok::<_, anyhow::Error>(UserConfig::default());
                }

                let file = tokio::fs::read_to_string(config_path)
                    .await
                    .context(format!(
                        "failed to load config file at path: {}",
                        config_path.display()
                    ))?;

                let user_config: UserConfig =
                    toml::from_str(&file).context("failed to parse user config")?;

                Ok(user_config)
            })
            .await?;

        Ok(config)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UserConfig {
    #[serde(default)]
    pub user: UserSection,

    #[serde(default)]
    pub preferences: Preferences,

    #[serde(default)]
    pub image_catalog: ImageCatalogSection,

    /// `None` when the file has no registries at all, as opposed to an empty list
    #[serde(default)]
    pub registries: Option<Vec<Registry>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UserSection {
    pub namespace: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub experimental: bool,

    #[serde(default)]
    pub push_target: PushTarget,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ImageCatalogSection {
    pub path: Option<PathBuf>,

    #[serde(default)]
    pub supported_images: Vec<String>,
}

pub trait UserConfigServiceState {
    fn user_config_service(&self) -> UserConfigService;
}

impl UserConfigServiceState for State {
    fn user_config_service(&self) -> UserConfigService {
        self.user_config.clone()
    }
}

/// The config file to load, `custom` when given, else `catalog.toml` in the user config dir.
pub fn config_path(locations: &UserLocations, custom: Option<&Path>) -> PathBuf {
    match custom {
        Some(path) => path.to_path_buf(),
        None => locations.get_config().join(USER_CONFIG_FILE),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_full_config() -> anyhow::Result<()> {
        let config: UserConfig = toml::from_str(
            r#"
[user]
namespace = "myproject"

[preferences]
experimental = true
push_target = "docker"

[image_catalog]
path = "/tmp/images.toml"
supported_images = ["acme/nodejs:14"]

[[registries]]
name = "DefaultDevfileRegistry"
url = "https://registry.devfile.io"
"#,
        )?;

        assert_eq!(
            UserConfig {
                user: UserSection {
                    namespace: Some("myproject".into()),
                },
                preferences: Preferences {
                    experimental: true,
                    push_target: PushTarget::Docker,
                },
                image_catalog: ImageCatalogSection {
                    path: Some("/tmp/images.toml".into()),
                    supported_images: vec!["acme/nodejs:14".into()],
                },
                registries: Some(vec![Registry {
                    name: "DefaultDevfileRegistry".into(),
                    url: "https://registry.devfile.io".into(),
                }]),
            },
            config
        );

        Ok(())
    }

    #[test]
    fn empty_config_has_no_registries() -> anyhow::Result<()> {
        let config: UserConfig = toml::from_str("")?;

        assert_eq!(UserConfig::default(), config);
        assert_eq!(None, config.registries);
        assert_eq!(PushTarget::Kube, config.preferences.push_target);

        Ok(())
    }

    #[test]
    fn custom_config_path_wins() {
        let locations = UserLocations::new();

        assert_eq!(
            PathBuf::from("/etc/catalog.toml"),
            config_path(&locations, Some(Path::new("/etc/catalog.toml")))
        );
        assert!(config_path(&locations, None).ends_with("catalog/catalog.toml"));
    }

    #[tokio::test]
    async fn missing_file_falls_back_to_defaults() -> anyhow::Result<()> {
        let service = UserConfigService::new(PathBuf::from("/does/not/exist/catalog.toml"));

        assert_eq!(&UserConfig::default(), service.get_user_config().await?);

        Ok(())
    }
}
