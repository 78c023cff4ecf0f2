//! `usuarios` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve`   — ensure the schema and start the API server.
//! - `init-db` — create the `usuario` table and exit.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use db::Store;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "usuarios", about = "User registry HTTP API", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the REST API server.
    Serve {
        #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:5000")]
        bind: String,
        /// Path to the SQLite database file.
        #[arg(long, env = "DB_PATH", default_value = "usuarios.db")]
        db_path: PathBuf,
    },
    /// Create the database schema if it does not exist.
    InitDb {
        /// Path to the SQLite database file.
        #[arg(long, env = "DB_PATH", default_value = "usuarios.db")]
        db_path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,api=debug,db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { bind, db_path } => {
            let store = Store::open(db_path);
            store.ensure_schema().await?;
            info!("Starting API server on {bind} (db: {})", store.path().display());
            api::serve(&bind, store).await?;
        }
        Command::InitDb { db_path } => {
            let store = Store::open(db_path);
            store.ensure_schema().await?;
            info!("Schema ready at {}", store.path().display());
        }
    }

    Ok(())
}
