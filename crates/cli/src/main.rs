//! InsightsSnap CLI - the page/form surface over the client core.
//!
//! # Usage
//!
//! ```bash
//! # User flows
//! snap-cli login --email you@example.com --password hunter2
//! snap-cli search "note-taking apps"
//! snap-cli credits
//! snap-cli logout
//!
//! # Admin flows
//! snap-cli admin login --username admin --password admin123
//! snap-cli admin plans list
//! snap-cli admin plans delete --id <uuid>
//! ```
//!
//! Every command mirrors one page or form: it collects input, runs the
//! route guard where the page is protected, invokes one identity-scoped
//! facade, and prints the resulting notification and navigation target.
//!
//! # Environment Variables
//!
//! - `INSIGHTS_API_BASE_URL` - API origin (required)
//! - `INSIGHTS_SESSION_DIR` - session directory (default: `~/.insights-snap`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use clap::{Parser, Subcommand};

use insights_snap_client::{ApiClient, ClientConfig, FileSessionStore, SessionStore};

mod commands;

use commands::{CliError, CommandOutcome, admin, user};

#[derive(Parser)]
#[command(name = "snap-cli")]
#[command(author, version, about = "InsightsSnap client CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a user account and sign in
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign in to the user dashboard
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out of the user scope
    Logout,
    /// Show the current user's profile
    Me,
    /// Show remaining usage credits
    Credits,
    /// Switch to another pricing plan
    Upgrade {
        /// Plan id to upgrade to
        #[arg(long)]
        plan_id: String,
    },
    /// Run an insights search
    Search {
        /// Search query
        query: String,
    },
    /// Export a prior search's results
    Export {
        #[arg(long)]
        search_id: String,
        /// "CSV" or "PDF"
        #[arg(long, default_value = "CSV")]
        format: String,
    },
    /// List public pricing plans
    Plans,
    /// Show SEO metadata for a page
    Seo {
        /// Page name (e.g., home, pricing)
        page: String,
    },
    /// Admin console commands
    Admin {
        #[command(subcommand)]
        action: admin::AdminAction,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match run(Cli::parse()).await {
        Ok(CommandOutcome::Done) => {}
        Ok(CommandOutcome::Failed) => std::process::exit(1),
        Err(e) => {
            tracing::error!("Command failed: {e}");
            std::process::exit(2);
        }
    }
}

async fn run(cli: Cli) -> Result<CommandOutcome, CliError> {
    let config = ClientConfig::from_env()?;
    let sessions: Arc<dyn SessionStore> = Arc::new(FileSessionStore::new(&config.session_dir)?);
    let client = ApiClient::new(&config, sessions);

    let outcome = match cli.command {
        Commands::Register {
            name,
            email,
            password,
        } => user::register(&client, &name, &email, &password).await,
        Commands::Login { email, password } => user::login(&client, &email, &password).await,
        Commands::Logout => user::logout(&client)?,
        Commands::Me => user::me(&client).await,
        Commands::Credits => user::credits(&client).await,
        Commands::Upgrade { plan_id } => user::upgrade(&client, &plan_id).await,
        Commands::Search { query } => user::search(&client, &query).await,
        Commands::Export { search_id, format } => {
            user::export(&client, &search_id, &format).await
        }
        Commands::Plans => user::public_plans(&client).await,
        Commands::Seo { page } => user::page_seo(&client, &page).await,
        Commands::Admin { action } => admin::run(&client, action).await?,
    };

    Ok(outcome)
}
