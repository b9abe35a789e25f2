use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use doc_search::{commands, AppError, Backend, Dependencies, Settings};
use doc_search_shared::ContentType;

#[derive(Parser)]
#[command(name = "doc-search")]
#[command(about = "Document search over an OpenSearch index", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// OpenSearch URL (overrides OPENSEARCH_URL)
    #[arg(long, global = true)]
    opensearch_url: Option<String>,

    /// Index name (overrides OPENSEARCH_INDEX)
    #[arg(long, global = true)]
    index: Option<String>,

    /// Use the in-memory engine instead of OpenSearch
    #[arg(long, global = true)]
    memory: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the index if it does not exist
    EnsureIndex,
    /// Ingest documents from a JSON array file
    Ingest {
        /// Path to the documents file
        #[arg(long)]
        file: PathBuf,
    },
    /// Search documents
    Search {
        /// Query text matched against title and content
        text: String,
        /// Only return documents of this content type
        #[arg(long)]
        content_type: Option<ContentType>,
    },
    /// Check search engine health
    Health,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn settings_for(cli: &Cli) -> Result<Settings, AppError> {
    let mut settings = Settings::from_env()?;
    if let Some(url) = &cli.opensearch_url {
        settings.opensearch_url = url.clone();
    }
    if let Some(index) = &cli.index {
        settings.index_name = index.clone();
    }
    if cli.memory {
        settings.backend = Backend::Memory;
    }
    Ok(settings)
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let settings = settings_for(&cli)?;
    let deps = Dependencies::new(&settings).await?;

    match cli.command {
        Commands::EnsureIndex => {
            commands::ensure_index(&deps.client).await?;
            info!(index = %settings.index_name, "Index ready");
        }
        Commands::Ingest { file } => {
            let inserted = commands::ingest_file(&deps.client, &file).await?;
            println!("Inserted {} documents", inserted);
        }
        Commands::Search { text, content_type } => {
            let filter = content_type.map(|ct| ct.as_str());
            let results = commands::search(&deps.client, &text, filter).await?;
            print!("{}", commands::format_results(&text, &results));
        }
        Commands::Health => {
            // Dependencies::new has already verified the cluster.
            println!("healthy");
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    if let Err(e) = run(cli).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
