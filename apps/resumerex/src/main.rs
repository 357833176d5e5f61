mod cli;
mod config;
mod errors;
mod jobs;
mod llm_client;
mod resume;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::AnalyzeArgs;
use crate::config::Config;
use crate::jobs::client::SerpApiClient;
use crate::jobs::search::JobSearchService;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[derive(Parser)]
#[command(name = "resumerex", version)]
#[command(about = "Resume analyzer and job finder")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a resume, search for matching jobs, and save them to CSV
    Analyze(AnalyzeArgs),

    /// Start the web interface
    Serve {
        /// Port to listen on (defaults to PORT)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (fails on malformed numeric env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let llm = GeminiClient::new(&config)?;
    info!("LLM client initialized (model: {})", llm.model());
    let job_search = JobSearchService::new(Arc::new(SerpApiClient::new(&config)?), &config);

    match cli.command {
        Command::Analyze(args) => {
            cli::run_analyze(args, &llm, &job_search, config.keyword_count).await
        }
        Command::Serve { port } => {
            let port = port.unwrap_or(config.port);
            let state = AppState {
                llm: Arc::new(llm),
                job_search,
                config,
            };

            let app = build_router(state)
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive());

            let addr = SocketAddr::from(([0, 0, 0, 0], port));
            info!("Starting ResumeRex v{} on {addr}", env!("CARGO_PKG_VERSION"));

            let listener = tokio::net::TcpListener::bind(addr).await?;
            axum::serve(listener, app).await?;
            Ok(())
        }
    }
}
