//! weathermock - Mock weather forecast API with OpenAPI documentation and MCP integration

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;

use weathermock::api::{self, ApiDoc, AppState};
use weathermock::config::Config;
use weathermock::mcp::WeatherServer;

#[derive(Parser)]
#[command(name = "weathermock")]
#[command(about = "Mock weather forecast API with OpenAPI documentation and MCP integration")]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init,

    /// Start the HTTP server (includes MCP at /mcp)
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Disable MCP endpoint
        #[arg(long)]
        no_mcp: bool,
    },

    /// Start the MCP server (stdio mode)
    Mcp,

    /// Start the MCP server (HTTP mode only, no REST API)
    McpHttp {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the forecast for a location
    Forecast {
        /// City name, matched exactly
        location: String,
    },

    /// Print the OpenAPI document
    Openapi,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging. Stdout carries the MCP stdio transport, so logs go to stderr.
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("weathermock={},tower_http=debug", log_level).into()
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load environment
    let _ = dotenvy::dotenv();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Init => {
            let config_path = match cli.config {
                Some(path) => path,
                None => Config::config_path()?,
            };
            config.save(&config_path)?;
            println!("✓ Config written to {}", config_path.display());
        }

        Commands::Serve { port, no_mcp } => {
            let mut config = config;
            if let Some(port) = port {
                config.http_port = port;
            }

            let state = AppState::from_api_doc(&ApiDoc::openapi())?;
            let ct = CancellationToken::new();

            let router = if no_mcp {
                api::create_router(state, config.swagger_ui)
            } else {
                api::create_router_with_mcp(state, config.swagger_ui, ct.clone())
            };

            let addr = config.http_addr();
            tracing::info!("Starting HTTP server on {}", addr);
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!("Weather mock server running at http://{}", addr);
            println!("  API:      http://{}/api/weather?location=London", addr);
            if config.swagger_ui {
                println!("  API Docs: http://{}/api/docs", addr);
            }
            println!("  OpenAPI:  http://{}/api/openapi.json", addr);
            if !no_mcp {
                println!("  MCP:      http://{}/mcp", addr);
            }
            println!("  Health:   http://{}/health", addr);

            axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    tokio::signal::ctrl_c().await.ok();
                    tracing::info!("Shutting down...");
                    ct.cancel();
                })
                .await?;
        }

        Commands::Mcp => {
            let state = AppState::resolve()?;
            let server = WeatherServer::new(state.forecast);

            weathermock::mcp::server::serve_stdio(server).await?;
        }

        Commands::McpHttp { port } => {
            let mut config = config;
            if let Some(port) = port {
                config.mcp_port = port;
            }

            let state = AppState::resolve()?;
            let server = WeatherServer::new(state.forecast);

            tracing::info!("Starting MCP server (HTTP mode) on {}", config.mcp_addr());
            weathermock::mcp::server::serve_http(server, &config.mcp_addr()).await?;
        }

        Commands::Forecast { location } => {
            let state = AppState::resolve()?;
            let response = (state.forecast)(&location);
            println!("{}", serde_json::to_string_pretty(&response)?);
        }

        Commands::Openapi => {
            println!("{}", ApiDoc::openapi().to_pretty_json()?);
        }
    }

    Ok(())
}
