mod api;
mod config;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::info;

use pantryforge_agent::ChefAgent;
use pantryforge_core::{ModelConfig, PantryError};
use pantryforge_providers::{GroqProvider, OllamaProvider, ProviderRegistry};
use pantryforge_tools::DuckDuckGoImageSearch;

use api::AppState;
use config::Config;

#[derive(Parser)]
#[command(name = "pantryforge")]
#[command(about = "PantryForge — conversational pantry assistant")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the PantryForge server
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Show current server status
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    logging::init_logger(&config.log_dir, &config.log_level);

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => {
            let config = Config {
                port: port.unwrap_or(config.port),
                ..config
            };
            run_server(config).await?;
        }
        Commands::Status => {
            let client = reqwest::Client::new();
            match client
                .get(format!("http://localhost:{}/api/health", config.port))
                .send()
                .await
            {
                Ok(resp) => {
                    let body: serde_json::Value = resp.json().await?;
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                Err(_) => {
                    println!("PantryForge is not running on port {}", config.port);
                }
            }
        }
    }

    Ok(())
}

async fn run_server(config: Config) -> Result<()> {
    config.validate()?;

    info!(
        port = config.port,
        bind = %config.bind_address,
        provider = %config.provider,
        model = %config.model,
        "Starting PantryForge"
    );

    let mut registry = ProviderRegistry::new();

    if let Some(api_key) = &config.groq_api_key {
        registry.register("groq", Arc::new(GroqProvider::new(api_key)));
        info!("Registered Groq provider");
    }

    if let Some(url) = &config.ollama_url {
        registry.register("ollama", Arc::new(OllamaProvider::new().with_base_url(url)));
        info!(url = %url, "Registered Ollama provider");
    }

    let provider = registry.get(&config.provider).ok_or_else(|| {
        PantryError::ConfigError(format!("provider '{}' is not registered", config.provider))
    })?;

    let model_config = ModelConfig {
        model_name: config.model.clone(),
        ..ModelConfig::default()
    };

    let agent = ChefAgent::new(
        provider,
        Arc::new(DuckDuckGoImageSearch::new()),
        model_config,
    );

    let state = Arc::new(AppState { agent });

    // API routes, then the chat front-end for everything else.
    let app = api::build_router(state)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(CorsLayer::permissive());

    let addr = format!("{}:{}", config.bind_address, config.port);
    info!(addr = %addr, "HTTP API listening");

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
