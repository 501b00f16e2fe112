//! User Service - command-line entry point for user management.

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{error, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::{AppError, AppResult};
use domain::{CreateInterest, CreateUser, UpdateUser};
use user_service_lib::config::UserServiceConfig;
use user_service_lib::{MigrateAction, UserServices};

#[derive(Parser)]
#[command(name = "user-service")]
#[command(about = "User records management")]
struct Cli {
    /// Database URL (overrides USER_SERVICE_DATABASE_URL and DATABASE_URL)
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
    /// User records
    Users {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Standalone interests
    Interests {
        #[command(subcommand)]
        action: InterestCommands,
    },
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[derive(Subcommand)]
enum UserCommands {
    /// Create a user from a JSON document
    Create { json: String },
    /// List all users
    List,
    /// Show one user with profile, reviews and interests
    Get { id: i32 },
    /// Update a user's details and replace its reviews from a JSON document
    Update { id: i32, json: String },
    /// Delete a user
    Remove { id: i32 },
}

#[derive(Subcommand)]
enum InterestCommands {
    /// Create an interest from a JSON document
    Create { json: String },
    /// List all interests
    List,
    /// Delete an interest
    Remove { id: i32 },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries command output
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = UserServiceConfig::from_env();
    if let Some(url) = cli.database_url {
        config = config.with_database_url(url);
    }

    match cli.command {
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            user_service_lib::run_migrations(&config, migrate_action).await?;
        }
        Commands::Users { action } => {
            let services = UserServices::connect(&config).await?;
            report(run_user_command(&services, action).await);
        }
        Commands::Interests { action } => {
            let services = UserServices::connect(&config).await?;
            report(run_interest_command(&services, action).await);
        }
    }

    Ok(())
}

async fn run_user_command(services: &UserServices, action: UserCommands) -> AppResult<()> {
    match action {
        UserCommands::Create { json } => {
            let input: CreateUser = serde_json::from_str(&json)?;
            print_json(&services.users.create(input).await?)
        }
        UserCommands::List => print_json(&services.users.find_all().await?),
        UserCommands::Get { id } => print_json(&services.users.find_one(id).await?),
        UserCommands::Update { id, json } => {
            let input: UpdateUser = serde_json::from_str(&json)?;
            print_json(&services.users.update(id, input).await?)
        }
        UserCommands::Remove { id } => services.users.remove(id).await,
    }
}

async fn run_interest_command(services: &UserServices, action: InterestCommands) -> AppResult<()> {
    match action {
        InterestCommands::Create { json } => {
            let input: CreateInterest = serde_json::from_str(&json)?;
            print_json(&services.interests.create_interest(input).await?)
        }
        InterestCommands::List => print_json(&services.interests.list_interests().await?),
        InterestCommands::Remove { id } => services.interests.remove_interest(id).await,
    }
}

fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::internal(format!("failed to render output: {}", e)))?;
    println!("{}", rendered);
    Ok(())
}

/// Log a failed command and exit non-zero.
fn report(result: AppResult<()>) {
    if let Err(err) = result {
        if err.is_client_error() {
            warn!(code = err.code(), "{}", err.user_message());
        } else {
            error!(code = err.code(), "{}", err.user_message());
        }
        std::process::exit(1);
    }
}
