use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use tfidf_upload::config::Config;
use tfidf_upload::db::{self, Database};
use tfidf_upload::scoring::tfidf::TfIdfScorer;
use tfidf_upload::scoring::traits::WordScorer;

/// tfidf-upload: upload a text file, score its words, browse the top entries.
#[derive(Parser)]
#[command(name = "tfidf-upload", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database and upload directory
    Init,

    /// Run the web server
    Serve {
        /// Port to listen on (default: TFIDF_PORT or 8000)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (default: TFIDF_BIND or 127.0.0.1)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Score a local text file
    Score {
        /// Path to a UTF-8 text file
        file: PathBuf,

        /// Print the scores without storing them
        #[arg(long)]
        no_save: bool,

        /// How many words to print (default: 50)
        #[arg(long, default_value = "50")]
        limit: usize,
    },

    /// Print the stored top words
    Report {
        /// How many words to show (default: TFIDF_RESULT_LIMIT or 50)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show database and upload status
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tfidf_upload=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::load()?;

    match cli.command {
        Commands::Init => {
            info!("Initializing database...");
            let db = db::initialize_sqlite(&config.db_path)?;
            tfidf_upload::uploads::ensure_dir(&config.upload_dir).await?;
            let table_count = db.table_count().await?;
            println!("Database initialized at: {}", config.db_path);
            println!("Tables created: {table_count}");
            println!("Uploads will be stored in: {}", config.upload_dir.display());
            println!("\nNext: cargo run -- serve");
        }

        Commands::Serve { port, bind } => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(bind) = bind {
                config.bind = bind;
            }
            let db = db::initialize_sqlite(&config.db_path)?;
            let scorer: Arc<dyn WordScorer> =
                Arc::new(TfIdfScorer::new(config.vectorizer_params()));

            tfidf_upload::web::run_server(tfidf_upload::web::AppState {
                db,
                config: Arc::new(config),
                scorer,
            })
            .await?;
        }

        Commands::Score {
            file,
            no_save,
            limit,
        } => {
            let scorer = TfIdfScorer::new(config.vectorizer_params());

            if no_save {
                let text = tfidf_upload::uploads::read_text(&file).await?;
                let words = scorer.score(&text)?;
                tfidf_upload::output::terminal::display_scored_words(&words, limit);
                return Ok(());
            }

            let bytes = tokio::fs::read(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "upload.txt".to_string());

            let db = db::initialize_sqlite(&config.db_path)?;
            let outcome = tfidf_upload::pipeline::ingest::ingest_bytes(
                &db,
                &scorer,
                &config.upload_dir,
                &name,
                &bytes,
            )
            .await?;

            tfidf_upload::output::terminal::display_scored_words(&outcome.words, limit);
            println!(
                "{}",
                format!(
                    "Stored {} words as upload #{}.",
                    outcome.rows_inserted, outcome.upload_id
                )
                .bold()
            );
        }

        Commands::Report { limit } => {
            let db = db::open_sqlite(&config.db_path)?;
            let limit = limit.unwrap_or(config.result_limit);
            let words = db
                .get_top_words(u32::try_from(limit).unwrap_or(u32::MAX))
                .await?;
            tfidf_upload::output::terminal::display_word_table(&words);
        }

        Commands::Status => {
            if !std::path::Path::new(&config.db_path).exists() {
                println!("Database: not initialized");
                println!("\nRun `tfidf-upload init` to set up the database.");
                return Ok(());
            }
            let db: Arc<dyn Database> = db::open_sqlite(&config.db_path)?;
            tfidf_upload::status::show(&db, &config.db_path, &config.upload_dir).await?;
        }
    }

    Ok(())
}
