pub mod app;
pub mod config;

mod report;

use config::{Cli, Command};
use ghprofile_core::error::FetchError;
use ghprofile_user::pulls::ListUserPulls;
use ghprofile_user::FetchProfileWithAvatar;

use anyhow::Context;
use std::io::Write;

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let app = app::App::init(cli.config)?;
    let mut stdout = std::io::stdout();

    match cli.command {
        Command::Avatar { username, output } => {
            let username = parse_username(&username)?;
            let fetched = app
                .fetch_profile_with_avatar(username.clone())
                .await
                .map_err(|error| describe_fetch_error(error, &username))?;

            writeln!(stdout, "{}", serde_json::to_string_pretty(&fetched.profile)?)?;

            match output {
                Some(path) => {
                    tokio::fs::write(&path, &fetched.avatar.0)
                        .await
                        .with_context(|| format!("failed writing avatar to {}", path.display()))?;
                    tracing::info!(
                        "wrote {} byte avatar of {username} to {}",
                        fetched.avatar.0.len(),
                        path.display()
                    );
                }
                None => {
                    tracing::info!(
                        "avatar of {username} is {} bytes, pass --output to save it",
                        fetched.avatar.0.len()
                    );
                }
            }
        }
        Command::Pulls { username, repo } => {
            let username = parse_username(&username)?;
            let pulls = app.list_user_pulls(repo, username).await?;

            report::write_pulls(&mut stdout, &pulls)?;
        }
    }

    Ok(())
}

/// A 404 from the profile service means there is no such user.
fn describe_fetch_error(error: FetchError, username: &str) -> anyhow::Error {
    match error.status() {
        Some(404) => anyhow::Error::new(error).context(format!("user {username} not found")),
        _ => error.into(),
    }
}

fn parse_username(input: &str) -> anyhow::Result<String> {
    let username = input.trim();
    anyhow::ensure!(!username.is_empty(), "please enter a username");

    Ok(username.to_string())
}
