use ghprofile_app::config::Cli;

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    ghprofile_app::run(Cli::parse()).await?;

    Ok(())
}
