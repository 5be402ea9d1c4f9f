use std::{
    path::PathBuf,
    sync::{Arc, OnceLock},
};

const APP_DIR: &str = "catalog";

#[derive(Clone, Default)]
pub struct UserLocations {
    config: Arc<OnceLock<PathBuf>>,
}

impl UserLocations {
    pub fn new() -> Self {
        Self::default()
    }

    #[tracing::instrument(skip(self), level = "trace")]
    pub fn get_config(&self) -> PathBuf {
        self.config
            .get_or_init(|| {
                tracing::trace!("initializing user locations");

                dirs::config_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(APP_DIR)
            })
            .to_path_buf()
    }
}
