use crate::robot::models::{RobotStatus, StatusResponse};
use crate::robot::session::Session;
use crate::AppState;
use axum::{
    extract::{State, WebSocketUpgrade},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

pub async fn get_status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let robot = state.robot_state.refresh().await;

    Json(StatusResponse {
        status: RobotStatus::Online,
        secure: true,
        protocol: "https",
        timestamp: chrono::Utc::now(),
        robot,
    })
}

pub async fn robot_ws(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let session = Session::new(state.robot_state.clone());
    ws.on_upgrade(move |socket| session.run(socket))
}
