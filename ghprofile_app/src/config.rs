use ghprofile_user::pulls::RepoName;

use std::path::PathBuf;

#[derive(clap::Parser)]
#[clap(name = "ghprofile", version, about = "Fetch a GitHub-style user profile and avatar")]
pub struct Cli {
    #[clap(flatten)]
    pub config: Config,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(clap::Args)]
pub struct Config {
    /// Base URL of the profile service
    #[clap(long, env, default_value = "https://api.github.com")]
    pub profile_base_url: url::Url,

    #[clap(long, env, default_value = concat!("ghprofile/", env!("CARGO_PKG_VERSION")))]
    pub user_agent: String,
}

#[derive(clap::Subcommand)]
pub enum Command {
    /// Print a user's profile and download their avatar
    Avatar {
        username: String,

        /// Where to write the avatar bytes
        #[clap(long, short)]
        output: Option<PathBuf>,
    },

    /// List pull requests the user authored or is assigned to
    Pulls {
        username: String,

        #[clap(long, default_value = "intel/torch-xpu-ops")]
        repo: RepoName,
    },
}
