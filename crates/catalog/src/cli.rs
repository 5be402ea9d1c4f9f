use clap::{Parser, Subcommand};
use list::ListCommand;

use crate::{settings::GlobalArgs, state::State};

mod list;

#[derive(Parser)]
#[command(author, version, about, long_about = None, subcommand_required = true)]
struct Command {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    List(ListCommand),
}

pub async fn execute() -> anyhow::Result<()> {
    let cli = Command::parse();
    let state = State::new(cli.global.clone()).await?;

    CommandHandler::new(cli, &state).handle().await
}

struct CommandHandler {
    state: State,
    cli: Command,
}

impl CommandHandler {
    fn new(cli: Command, state: &State) -> Self {
        Self {
            state: state.clone(),
            cli,
        }
    }

    async fn handle(&self) -> anyhow::Result<()> {
        let state = &self.state;
        let cli = &self.cli;

        match &cli.command {
            Commands::List(cmd) => cmd.execute(state).await,
        }
    }
}

#[cfg(test)]
mod test {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_is_well_formed() {
        Command::command().debug_assert();
    }

    #[test]
    fn parses_list_components() -> anyhow::Result<()> {
        let cli = Command::try_parse_from(["catalog", "list", "components", "-a", "-o", "json"])?;

        assert!(matches!(cli.command, Commands::List(_)));
        assert_eq!(Some(crate::models::OutputFormat::Json), cli.global.output);

        Ok(())
    }

    #[test]
    fn requires_a_subcommand() {
        assert!(Command::try_parse_from(["catalog"]).is_err());
    }
}
