use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};

use crate::activity::Zone;
use crate::api::DEFAULT_API_URL;

#[derive(Parser)]
#[command(name = "ghscope")]
#[command(about = "GitHub profile, repository, and commit activity dashboard for the terminal")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Debug)]
pub struct CommonArgs {
    #[arg(long, env = "GHSCOPE_API_URL", default_value = DEFAULT_API_URL, help = "Base URL of the GitHub REST API")]
    pub api_url: String,

    #[arg(long, env = "GHSCOPE_TIMEOUT", default_value = "10s", help = "Request timeout (e.g. 5s, 1m)")]
    pub timeout: humantime::Duration,

    #[arg(long, help = "Bucket commit weeks by UTC month instead of the local timezone", default_value_t = false)]
    pub utc: bool,

    #[arg(short, long, action = ArgAction::Count, global = true, help = "Increase log verbosity (-v, -vv)")]
    pub verbose: u8,
}

impl CommonArgs {
    pub fn zone(&self) -> Zone {
        if self.utc {
            Zone::Utc
        } else {
            Zone::Local
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show a user's profile card
    Profile {
        #[arg(help = "GitHub username")]
        username: String,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
    /// List a user's most recently updated repositories
    Repos {
        #[arg(help = "GitHub username")]
        username: String,

        #[arg(long, short, help = "Only repositories whose name, description, or topics contain this text")]
        filter: Option<String>,

        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,
    },
    /// Chart monthly commit activity for one repository
    Activity {
        #[arg(help = "GitHub username")]
        username: String,

        #[arg(long, help = "Repository name (defaults to the most recently updated)")]
        repo: Option<String>,

        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,
    },
    /// Interactive terminal dashboard
    #[command(alias = "tui", alias = "ui")]
    Dashboard {
        #[arg(help = "GitHub username to load on start")]
        username: Option<String>,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Profile { username, json } => crate::profile::exec(&self.common, &username, json),
            Commands::Repos { username, filter, json, ndjson } => {
                crate::repos::exec(&self.common, &username, filter.as_deref(), json, ndjson)
            }
            Commands::Activity { username, repo, json, ndjson } => {
                crate::activity::exec(&self.common, &username, repo.as_deref(), json, ndjson)
            }
            Commands::Dashboard { username } => {
                crate::tui::run(&self.common, username).map_err(|e| anyhow::anyhow!(e))
            }
        }
    }
}
