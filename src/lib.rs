pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;

use std::io;

use crate::cli::{Cli, Commands};
use crate::client::GithubClient;
use crate::config::Config;

/// Dispatches the parsed command line to exactly one handler.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load_best_effort();
    let mut out = io::stdout();

    match cli.command {
        None => commands::root(&mut out)?,
        Some(Commands::Hello { .. }) => commands::hello::run(&config, &mut out)?,
        Some(Commands::Repo { owner, repo }) => {
            let client = GithubClient::new(&cli.api_base)?;
            commands::repo::run(&client, &owner, &repo, &mut out).await?;
        }
    }

    Ok(())
}
