use robot_api::{create_router, logging, robot, AppState, Config};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    let _log_guard = logging::init(config.log_dir.as_deref());

    let address = config.server_address.clone();
    let state = Arc::new(AppState::from_config(&config));
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(l) => l,
        Err(e) => {
            error!(address = %address, error = %e, "Failed to bind listener");
            std::process::exit(1);
        }
    };

    info!("Starting Robot API server on {}", address);
    info!("Status:    http://{}{}", address, robot::STATUS_PATH);
    info!("WebSocket: ws://{}{}", address, robot::SESSION_PATH);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "Server terminated with error");
    }

    info!("Robot API server stopped");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
