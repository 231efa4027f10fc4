//! Ledger API server

use std::sync::Arc;

use api_gateway::{config::AppConfig, router, AppState};
use clap::Parser;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{debug, info, Level};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter, FmtSubscriber};

/// Ledger API server
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Listening address, defaults to 127.0.0.1:$PORT
    #[clap(short, long)]
    addr: Option<String>,

    /// Log every appended statement operation
    #[clap(short, long)]
    transaction_logging: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();
    let mut config = AppConfig::from_env()?;
    if args.transaction_logging {
        config.account_service.transaction_logging = true;
    }

    // DEBUG=1 raises the default level
    let log_level = if config.debug { Level::DEBUG } else { Level::INFO };

    let env_filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .parse("tower_http=debug,api_gateway=debug,account_service=debug")?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    debug!("Debug logging enabled");

    let state = Arc::new(AppState::new(&config));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = router(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(log_level))
                .on_request(DefaultOnRequest::new().level(log_level))
                .on_response(DefaultOnResponse::new().level(log_level)),
        );

    let addr: std::net::SocketAddr = args
        .addr
        .unwrap_or_else(|| format!("127.0.0.1:{}", config.port))
        .parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!(
        "Listening on {} (customer header: {})",
        addr, config.identifier_header
    );

    // Run until interrupt signal
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
