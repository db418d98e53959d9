use clap::Subcommand;
use sqlx::SqlitePool;

use crate::cli::utils::{output_empty_collection, output_success};
use crate::cli::OutputFormat;
use crate::database::models::{Movie, NewMovie};

#[derive(Subcommand)]
pub enum MovieCommands {
    #[command(about = "Add a movie to the catalogue")]
    Add {
        #[arg(help = "Movie name")]
        name: String,
        #[arg(long, default_value_t = 0, help = "Price in whole currency units")]
        price: i64,
        #[arg(long, default_value = "", help = "Short description")]
        description: String,
        #[arg(long, help = "Image path or URL")]
        image: Option<String>,
    },

    #[command(about = "List movies")]
    List {
        #[arg(long, help = "Case-insensitive name filter")]
        search: Option<String>,
    },

    #[command(about = "Remove a movie and its reviews")]
    Delete {
        #[arg(help = "Movie ID")]
        id: i64,
    },
}

pub async fn handle(cmd: MovieCommands, pool: &SqlitePool, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        MovieCommands::Add {
            name,
            price,
            description,
            image,
        } => {
            let name = name.trim().to_string();
            if name.is_empty() {
                anyhow::bail!("movie name must not be empty");
            }
            if price < 0 {
                anyhow::bail!("price must not be negative");
            }

            let movie = Movie::create(
                pool,
                &NewMovie {
                    name,
                    price,
                    description,
                    image,
                },
            )
            .await?;
            output_success(
                &output_format,
                &format!("Added movie '{}' (id {})", movie.name, movie.id),
                Some(serde_json::to_value(&movie)?),
            )
        }
        MovieCommands::List { search } => {
            let movies = Movie::list(pool, search.as_deref()).await?;
            if movies.is_empty() {
                return output_empty_collection(&output_format, "movies", "No movies found");
            }

            match output_format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&movies)?),
                OutputFormat::Text => {
                    for movie in &movies {
                        println!("{:>5}  {}  (${})", movie.id, movie.name, movie.price);
                    }
                }
            }
            Ok(())
        }
        MovieCommands::Delete { id } => {
            if !Movie::delete(pool, id).await? {
                anyhow::bail!("movie {} not found", id);
            }
            output_success(&output_format, &format!("Deleted movie {}", id), None)
        }
    }
}
