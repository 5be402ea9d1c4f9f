use std::sync::Arc;

use crate::{
    settings::GlobalArgs,
    user_config::{UserConfigService, config_path},
    user_locations::UserLocations,
};

#[derive(Clone)]
pub struct State {
    pub(crate) global: Arc<GlobalArgs>,
    pub(crate) user_config: UserConfigService,
}

impl State {
    pub async fn new(global: GlobalArgs) -> anyhow::Result<Self> {
        let config_path = config_path(&UserLocations::new(), global.config.as_deref());
        tracing::trace!(config = %config_path.display(), "initializing state");

        Ok(Self {
            global: Arc::new(global),
            user_config: UserConfigService::new(config_path),
        })
    }
}
