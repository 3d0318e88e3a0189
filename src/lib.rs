pub mod config;
pub mod error;
pub mod logging;
pub mod robot;

pub use config::Config;
pub use error::{CommandError, ConfigError};
pub use robot::state::SharedRobotState;

use axum::{routing::get, Json, Router};
use robot::models::{RobotState, RootResponse};
use robot::telemetry::RandomJitter;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone, Debug)]
pub struct AppState {
    pub robot_state: SharedRobotState,
}

impl AppState {
    /// Builds the process-wide state from configuration.
    pub fn from_config(config: &Config) -> Self {
        let jitter = match config.jitter_seed {
            Some(seed) => RandomJitter::from_seed(seed),
            None => RandomJitter::from_entropy(),
        };
        let robot_state = SharedRobotState::new(RobotState::new(config.robot_name.clone()), jitter);

        AppState { robot_state }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route(robot::STATUS_PATH, get(robot::client_routes::get_status))
        .route(robot::SESSION_PATH, get(robot::client_routes::robot_ws))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Robot API is online".to_string(),
    })
}
