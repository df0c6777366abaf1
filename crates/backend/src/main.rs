use backend::domain::a001_sales_transaction::generate;
use backend::routes::{configure_routes, AppState};
use backend::shared::config::load_config;
use backend::shared::format::{format_money, format_number};
use backend::system;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = load_config()?;
    let addr = config.server.socket_addr()?;

    let dataset = generate(&config.dataset.generator_settings())?;
    tracing::info!(
        "Generated {} transactions (seed {}), total revenue {}",
        format_number(dataset.len()),
        config.dataset.seed,
        format_money(dataset.view().total_revenue())
    );

    let static_dir = config.server.static_dir();
    if !static_dir.exists() {
        tracing::warn!(
            "Static directory {} not found; only the API will be served",
            static_dir.display()
        );
    }

    let app = configure_routes(AppState::new(dataset), static_dir);

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
