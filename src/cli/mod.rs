pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::config;
use crate::database::DatabaseManager;

#[derive(Parser)]
#[command(name = "movies-admin")]
#[command(about = "Administration for the movies site: schema, users and the movie catalogue")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Apply database migrations")]
    Migrate,

    #[command(about = "User account management")]
    User {
        #[command(subcommand)]
        cmd: commands::user::UserCommands,
    },

    #[command(about = "Movie catalogue management")]
    Movie {
        #[command(subcommand)]
        cmd: commands::movie::MovieCommands,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let pool = connect().await?;

    let result = match cli.command {
        Commands::Migrate => {
            DatabaseManager::migrate(&pool).await?;
            utils::output_success(&output_format, "Migrations applied", None)
        }
        Commands::User { cmd } => commands::user::handle(cmd, &pool, output_format).await,
        Commands::Movie { cmd } => commands::movie::handle(cmd, &pool, output_format).await,
    };

    pool.close().await;
    result
}

/// Pool for admin commands; migrations are left to the explicit `migrate` command
async fn connect() -> anyhow::Result<SqlitePool> {
    let mut database = config::config().database.clone();
    database.run_migrations = false;
    Ok(DatabaseManager::connect(&database).await?)
}
