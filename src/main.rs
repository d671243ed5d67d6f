//! mflix-api - JSON HTTP API over the MongoDB `sample_mflix` movies collection

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mflix_api::api::{self, json::document_to_json, AppState, ABSENT_SEARCH_TERM, LIST_LIMIT};
use mflix_api::config::Config;
use mflix_api::store::{MongoMovieStore, MovieQuery, MovieStore};
use mflix_api::types::summarize;

#[derive(Parser)]
#[command(name = "mflix-api")]
#[command(about = "JSON HTTP API over the MongoDB sample_mflix movies collection")]
#[command(version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve {
        /// Port to listen on, overrides PORT
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print movies in natural order
    List {
        /// Maximum results
        #[arg(short, long, default_value_t = LIST_LIMIT)]
        limit: i64,
    },

    /// Search movie titles (case-insensitive regex)
    Search {
        /// Search pattern
        term: Option<String>,
    },

    /// Print one movie by ObjectId
    Get {
        /// 24-character hex identifier
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("mflix_api={},tower_http=debug", log_level).into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Fails before anything binds when DATABASE_URL is absent
    let config = Config::from_env()?;
    let store = MongoMovieStore::connect(&config).await?;

    match cli.command.unwrap_or(Commands::Serve { port: None }) {
        Commands::Serve { port } => {
            let port = port.unwrap_or(config.http_port);
            let router = api::create_router(AppState::new(Arc::new(store)));

            let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
            tracing::info!("Listening on {}", listener.local_addr()?);

            println!("mflix-api running at http://localhost:{}", port);
            println!("  Movies: http://localhost:{}/movies", port);
            println!("  Search: http://localhost:{}/movies/search?searchTerm=...", port);
            println!("  Health: http://localhost:{}/health", port);

            axum::serve(listener, router).await?;
        }

        Commands::List { limit } => {
            let movies = store.find(&MovieQuery::All, Some(limit)).await?;
            for movie in movies {
                print_json(document_to_json(movie))?;
            }
        }

        Commands::Search { term } => {
            let pattern = term.as_deref().unwrap_or(ABSENT_SEARCH_TERM);
            let movies = store.find(&MovieQuery::title_matches(pattern), None).await?;

            if movies.is_empty() {
                println!("No movies found for: {}", pattern);
            } else {
                for movie in &movies {
                    print_json(document_to_json(summarize(movie)))?;
                }
            }
        }

        Commands::Get { id } => {
            let movie = store.find_one(&MovieQuery::by_id(&id)?).await?;
            match movie {
                Some(movie) => print_json(document_to_json(movie))?,
                None => println!("null"),
            }
        }
    }

    Ok(())
}

fn print_json(value: serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
