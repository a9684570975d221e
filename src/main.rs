//! slack-users - command-line access to Slack user and team methods

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "slack-users")]
#[command(about = "Query and update Slack users from the command line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log request parameters and raw API responses (implies --verbose)
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Store an API token for later runs
    Login {
        /// Slack token (xoxp-... or xoxb-...)
        #[arg(short, long)]
        token: String,

        /// API root override, e.g. for a proxy
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Clear the stored token
    Logout,

    /// Show the authenticated user and team
    Whoami,

    /// Show a user's profile
    Info {
        /// User ID (e.g. U023BECGF)
        user: String,
    },

    /// Get a user's presence, or set your own
    Presence {
        /// User ID to query
        #[arg(required_unless_present = "set")]
        user: Option<String>,

        /// New presence for yourself: auto, away
        #[arg(short, long, conflicts_with = "user")]
        set: Option<String>,
    },

    /// Mark yourself as active
    Active,

    /// List workspace members
    List {
        /// Offset token from a previous page (empty for the first page)
        #[arg(short, long, default_value = "")]
        offset: String,

        /// Follow offsets until the last page
        #[arg(short, long)]
        all: bool,
    },

    /// Show billing status for one user or the whole team
    Billing {
        /// Only this user
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Show workspace details
    Team,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose || cli.debug {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Login { token, base_url } => {
            commands::login(token, base_url)?;
        }
        Commands::Logout => {
            tracing::info!("Logging out...");
            commands::logout()?;
        }
        Commands::Whoami => {
            commands::whoami(cli.debug).await?;
        }
        Commands::Info { user } => {
            commands::user_info(&user, cli.debug).await?;
        }
        Commands::Presence { user, set } => match set {
            Some(presence) => {
                tracing::info!("Setting presence to {}...", presence);
                commands::set_presence(&presence, cli.debug).await?;
            }
            None => {
                let user = user.unwrap_or_default();
                commands::get_presence(&user, cli.debug).await?;
            }
        },
        Commands::Active => {
            commands::set_active(cli.debug).await?;
        }
        Commands::List { offset, all } => {
            tracing::info!("Fetching users...");
            commands::list_users(offset, all, cli.debug).await?;
        }
        Commands::Billing { user } => {
            commands::billing(user.as_deref(), cli.debug).await?;
        }
        Commands::Team => {
            commands::team_info(cli.debug).await?;
        }
    }

    Ok(())
}
