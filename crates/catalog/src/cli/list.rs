use components::ListComponentsCommand;

use crate::state::State;

mod components;

#[derive(clap::Parser)]
#[command(subcommand_required = true)]
pub struct ListCommand {
    #[command(subcommand)]
    commands: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// List all available component types
    Components(ListComponentsCommand),
}

impl ListCommand {
    pub async fn execute(&self, state: &State) -> anyhow::Result<()> {
        match &self.commands {
            Commands::Components(cmd) => cmd.execute(state).await,
        }
    }
}
