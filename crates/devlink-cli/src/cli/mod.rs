//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use devlink_core::config::Config;
use devlink_core::logging;

mod commands;

use commands::Session;

#[derive(Parser)]
#[command(name = "devlink")]
#[command(version)]
#[command(about = "Browse and edit developer profiles from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override the API base URL from config
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Read and edit profiles
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
    /// Manage work experience entries of your profile
    Experience {
        #[command(subcommand)]
        command: EntryCommands,
    },
    /// Manage education entries of your profile
    Education {
        #[command(subcommand)]
        command: EntryCommands,
    },
    /// Manage your account
    Account {
        #[command(subcommand)]
        command: AccountCommands,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Store a session token in the config file
    Login {
        /// Token sent as x-auth-token
        #[arg(long, env = "DEVLINK_TOKEN", hide_env_values = true)]
        token: String,
    },
    /// Remove the stored session token
    Logout,
}

#[derive(clap::Subcommand)]
enum ProfileCommands {
    /// Show your own profile
    Me,
    /// List all profiles
    List,
    /// Show the profile of a user
    Show {
        #[arg(value_name = "USER_ID")]
        user_id: String,
    },
    /// List the GitHub repositories of a username
    Repos {
        #[arg(value_name = "USERNAME")]
        username: String,
    },
    /// Print your profile as a form file for `save --edit`
    Form,
    /// Create or update your profile from a JSON form file
    Save {
        #[arg(long, value_name = "JSON")]
        file: PathBuf,
        /// Report the change as an update instead of a creation
        #[arg(long)]
        edit: bool,
    },
}

#[derive(clap::Subcommand)]
enum EntryCommands {
    /// Add an entry from a JSON form file
    Add {
        #[arg(long, value_name = "JSON")]
        file: PathBuf,
    },
    /// Remove an entry by id
    Remove {
        #[arg(value_name = "ID")]
        id: String,
    },
}

#[derive(clap::Subcommand)]
enum AccountCommands {
    /// Delete your account, profile and posts
    Delete {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = logging::init().context("init logging")?;

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli { command, api_url } = cli;

    let session = || -> Result<Session> {
        let config = Config::load().context("load config")?;
        Session::new(&config, api_url.as_deref())
    };

    match command {
        Commands::Profile { command } => {
            let mut session = session()?;
            match command {
                ProfileCommands::Me => commands::profile::me(&mut session).await,
                ProfileCommands::List => commands::profile::list(&mut session).await,
                ProfileCommands::Show { user_id } => {
                    commands::profile::show(&mut session, &user_id).await
                }
                ProfileCommands::Repos { username } => {
                    commands::profile::repos(&mut session, &username).await
                }
                ProfileCommands::Form => commands::profile::form(&mut session).await,
                ProfileCommands::Save { file, edit } => {
                    commands::profile::save(&mut session, &file, edit).await
                }
            }
        }

        Commands::Experience { command } => {
            let mut session = session()?;
            match command {
                EntryCommands::Add { file } => {
                    commands::entries::add_experience(&mut session, &file).await
                }
                EntryCommands::Remove { id } => {
                    commands::entries::remove_experience(&mut session, &id).await
                }
            }
        }

        Commands::Education { command } => {
            let mut session = session()?;
            match command {
                EntryCommands::Add { file } => {
                    commands::entries::add_education(&mut session, &file).await
                }
                EntryCommands::Remove { id } => {
                    commands::entries::remove_education(&mut session, &id).await
                }
            }
        }

        Commands::Account { command } => match command {
            AccountCommands::Delete { yes } => {
                let mut session = session()?;
                commands::account::delete(&mut session, yes).await
            }
        },

        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },

        Commands::Login { token } => commands::config::login(&token),
        Commands::Logout => commands::config::logout(),
    }
}
