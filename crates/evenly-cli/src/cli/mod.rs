//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use evenly_core::auth::{Session, TokenStore};
use evenly_core::{config, logging};
use uuid::Uuid;

mod commands;

#[derive(Parser)]
#[command(name = "evenly")]
#[command(version = "0.1")]
#[command(about = "Terminal dashboard for the Evenly income smoothing service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log in and store the bearer token
    Login {
        /// Account email
        #[arg(long)]
        email: String,

        /// Password (prompted on stdin when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Log out (clear the stored token)
    Logout,

    /// Create an account
    Register {
        /// Account email
        #[arg(long)]
        email: String,

        /// Password (min 8 characters)
        #[arg(long)]
        password: String,

        /// Display name
        #[arg(long = "full-name")]
        full_name: String,

        /// Phone number
        #[arg(long)]
        phone: Option<String>,
    },

    /// Show the logged-in user
    Whoami,

    /// Sync transactions and regenerate predictions
    Sync,

    /// Cashflow predictions
    Predictions {
        #[command(subcommand)]
        command: PredictionsCommands,
    },

    /// Income sources breakdown
    Income,

    /// AI insights
    Insights {
        #[command(subcommand)]
        command: InsightsCommands,
    },

    /// Smoothing buffer and weekly releases
    Smoothing {
        #[command(subcommand)]
        command: SmoothingCommands,
    },

    /// Bank accounts
    Accounts {
        #[command(subcommand)]
        command: AccountsCommands,
    },

    /// Bulk-import transactions from a CSV file
    Import {
        /// Target bank account id (defaults to the only account, if one)
        #[arg(long, value_name = "ACCOUNT_ID")]
        account: Option<Uuid>,

        /// CSV file to import (template column order)
        #[arg(long, value_name = "PATH", conflicts_with = "template")]
        file: Option<String>,

        /// Write the CSV template to the current directory and exit
        #[arg(long)]
        template: bool,
    },

    /// Run server-side analysis over manually entered data
    Analyze,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum PredictionsCommands {
    /// List stored predictions
    List,
    /// Regenerate the 7/30/60-day predictions
    Generate,
}

#[derive(clap::Subcommand)]
enum InsightsCommands {
    /// List insights
    List {
        /// Only unread insights
        #[arg(long)]
        unread: bool,
    },
    /// Mark an insight as read
    Read {
        #[arg(value_name = "INSIGHT_ID")]
        id: Uuid,
    },
    /// Dismiss an insight
    Dismiss {
        #[arg(value_name = "INSIGHT_ID")]
        id: Uuid,
    },
}

#[derive(clap::Subcommand)]
enum SmoothingCommands {
    /// Show the smoothing buffer
    Buffer,
    /// List weekly releases
    Releases,
    /// Calculate this week's recommended release
    Calculate,
}

#[derive(clap::Subcommand)]
enum AccountsCommands {
    /// List bank accounts
    List,
    /// Add a bank account
    Add {
        /// Bank name
        #[arg(long)]
        bank: String,

        /// Account number
        #[arg(long)]
        number: String,

        /// Account type (savings, current, salary)
        #[arg(long, default_value = "savings")]
        account_type: String,

        /// Mark as the primary account
        #[arg(long)]
        primary: bool,
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

    // Logs go to files under EVENLY_HOME; keep the guard alive for the
    // whole process so buffered lines flush on exit.
    let _log_guard = logging::init().context("init logging")?;

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = config::Config::load().context("load config")?;

    // default to the interactive dashboard
    let Some(command) = cli.command else {
        let session = Session::restore(TokenStore::new());
        return evenly_tui::run_dashboard(&config, session);
    };

    match command {
        Commands::Login { email, password } => {
            commands::auth::login(&config, &email, password.as_deref()).await
        }
        Commands::Logout => commands::auth::logout(),
        Commands::Register {
            email,
            password,
            full_name,
            phone,
        } => commands::auth::register(&config, email, password, full_name, phone).await,
        Commands::Whoami => commands::auth::whoami(&config).await,

        Commands::Sync => commands::sync::run(&config).await,

        Commands::Predictions { command } => match command {
            PredictionsCommands::List => commands::predictions::list(&config).await,
            PredictionsCommands::Generate => commands::predictions::generate(&config).await,
        },

        Commands::Income => commands::income::list(&config).await,

        Commands::Insights { command } => match command {
            InsightsCommands::List { unread } => commands::insights::list(&config, unread).await,
            InsightsCommands::Read { id } => commands::insights::mark_read(&config, id).await,
            InsightsCommands::Dismiss { id } => commands::insights::dismiss(&config, id).await,
        },

        Commands::Smoothing { command } => match command {
            SmoothingCommands::Buffer => commands::smoothing::buffer(&config).await,
            SmoothingCommands::Releases => commands::smoothing::releases(&config).await,
            SmoothingCommands::Calculate => commands::smoothing::calculate(&config).await,
        },

        Commands::Accounts { command } => match command {
            AccountsCommands::List => commands::accounts::list(&config).await,
            AccountsCommands::Add {
                bank,
                number,
                account_type,
                primary,
            } => commands::accounts::add(&config, bank, number, account_type, primary).await,
        },

        Commands::Import {
            account,
            file,
            template,
        } => commands::import::run(&config, account, file.as_deref(), template).await,

        Commands::Analyze => commands::manual::analyze(&config).await,

        Commands::Config { command } => match command {
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
