//! Fernwood Storefront Server
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tokio::sync::watch;
use tracing_subscriber::{fmt, EnvFilter};

use storefront_api::state::AppState;
use storefront_chat::SupportDesk;
use storefront_core::config::AppConfig;
use storefront_core::error::AppError;
use storefront_notify::{LogMailer, Mailer, NotificationGateway, SmtpMailer};
use storefront_service::{OrderService, SessionRegistry, ShutdownWindow};
use storefront_store::{JsonFileBackend, ShopStore};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration for the selected environment.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("STOREFRONT_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Fernwood storefront v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Open the stock store ─────────────────────────────
    let backend = Arc::new(JsonFileBackend::new(&config.store.data_file));
    let store = Arc::new(ShopStore::open(backend).await?);
    tracing::info!(
        data_file = %config.store.data_file,
        items = store.items().await.len(),
        "Stock store loaded"
    );

    // ── Step 2: Registries and the support desk ──────────────────
    let sessions = Arc::new(SessionRegistry::new(&config.session));
    let desk = Arc::new(SupportDesk::new());
    let shutdown_window = ShutdownWindow::new();

    // ── Step 3: Notification gateway ─────────────────────────────
    let mailer: Arc<dyn Mailer> = if config.notify.enabled {
        Arc::new(SmtpMailer::new(&config.notify)?)
    } else {
        tracing::info!("Outbound mail disabled");
        Arc::new(LogMailer)
    };
    let gateway = Arc::new(NotificationGateway::new(
        mailer,
        config.notify.operator_address.clone(),
    ));

    // ── Step 4: Services ─────────────────────────────────────────
    let orders = Arc::new(OrderService::new(
        Arc::clone(&store),
        Arc::clone(&sessions),
        gateway,
    ));

    // ── Step 5: Shutdown channel ─────────────────────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // ── Step 6: Idle-session sweeper ─────────────────────────────
    let sweeper_handle = if config.session.sweeper_enabled {
        let sessions = Arc::clone(&sessions);
        let interval = std::time::Duration::from_secs(config.session.sweep_interval_minutes * 60);
        let mut cancel = shutdown_rx.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.tick().await;
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        sessions.expire_idle(sessions.idle_timeout());
                    }
                    _ = cancel.changed() => break,
                }
            }
        });
        tracing::info!(
            interval_minutes = config.session.sweep_interval_minutes,
            "Idle-session sweeper started"
        );
        Some(handle)
    } else {
        None
    };

    // ── Step 7: Build and start the HTTP server ──────────────────
    let app_state = AppState {
        config: Arc::new(config.clone()),
        store,
        sessions,
        orders,
        desk,
        shutdown: shutdown_window,
        started_at: chrono::Utc::now(),
    };

    let app = storefront_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Storefront listening on {}", addr);

    // ── Step 8: Graceful shutdown ────────────────────────────────
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    if let Some(handle) = sweeper_handle {
        let _ = tokio::time::timeout(std::time::Duration::from_secs(5), handle).await;
    }

    tracing::info!("Storefront shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
