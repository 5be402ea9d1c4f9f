use tracing_subscriber::{EnvFilter, filter::LevelFilter};

mod cli;
mod services;
mod settings;
mod state;

mod catalog;
mod models;
mod render;
mod task_runner;

mod user_config;
mod user_locations;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    cli::execute().await?;

    Ok(())
}
