use clap::Subcommand;
use serde_json::json;
use sqlx::SqlitePool;

use crate::auth;
use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::database::models::User;

#[derive(Subcommand)]
pub enum UserCommands {
    #[command(about = "Create a user account")]
    Add {
        #[arg(help = "Username")]
        username: String,
        #[arg(long, help = "Password for the new account")]
        password: String,
    },
}

pub async fn handle(cmd: UserCommands, pool: &SqlitePool, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        UserCommands::Add { username, password } => {
            let username = username.trim();
            if username.is_empty() || password.is_empty() {
                anyhow::bail!("username and password must not be empty");
            }

            let user = User::create(pool, username, &auth::hash_password(&password)?).await?;
            output_success(
                &output_format,
                &format!("Created user '{}' (id {})", user.username, user.id),
                Some(json!({ "id": user.id, "username": user.username })),
            )
        }
    }
}
