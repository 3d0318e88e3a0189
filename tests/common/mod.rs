use futures::{SinkExt, StreamExt};
use robot_api::robot::models::RobotState;
use robot_api::robot::telemetry::{JitterSource, RandomJitter};
use robot_api::{create_router, AppState, SharedRobotState};
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

pub type WsClient = WebSocketStream<MaybeTlsStream<TcpStream>>;

#[allow(dead_code)]
pub struct TestApp {
    pub router: axum::Router,
    pub state: Arc<AppState>,
}

/// Replays fixed deltas, then yields zero.
#[allow(dead_code)]
pub struct ScriptedJitter(pub VecDeque<f64>);

impl JitterSource for ScriptedJitter {
    fn sample(&mut self, _low: f64, _high: f64) -> f64 {
        self.0.pop_front().unwrap_or(0.0)
    }
}

fn build_app(robot_state: SharedRobotState) -> TestApp {
    let state = Arc::new(AppState { robot_state });

    TestApp {
        router: create_router(state.clone()),
        state,
    }
}

/// App whose telemetry is seeded and therefore reproducible.
#[allow(dead_code)]
pub fn spawn_app() -> TestApp {
    build_app(SharedRobotState::new(
        RobotState::default(),
        RandomJitter::from_seed(1234),
    ))
}

/// App whose telemetry replays exactly `deltas` (battery, temperature, ...).
#[allow(dead_code)]
pub fn spawn_app_with_deltas(deltas: &[f64]) -> TestApp {
    build_app(SharedRobotState::new(
        RobotState::default(),
        ScriptedJitter(deltas.iter().copied().collect()),
    ))
}

/// Serves `app` on an ephemeral local port.
#[allow(dead_code)]
pub async fn spawn_server(app: &TestApp) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");
    let router = app.router.clone();

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Test server failed");
    });

    addr
}

/// Opens a session and returns the client with the greeting already read.
#[allow(dead_code)]
pub async fn connect(addr: SocketAddr) -> (WsClient, serde_json::Value) {
    let url = format!("ws://{addr}/web_socker_endpoint");
    let (mut ws, _) = tokio_tungstenite::connect_async(url)
        .await
        .expect("Failed to open WebSocket");
    let greeting = recv_json(&mut ws).await;
    (ws, greeting)
}

#[allow(dead_code)]
pub async fn send_text(ws: &mut WsClient, text: &str) {
    ws.send(Message::Text(text.to_owned().into()))
        .await
        .expect("Failed to send frame");
}

#[allow(dead_code)]
pub async fn recv_json(ws: &mut WsClient) -> serde_json::Value {
    loop {
        let frame = tokio::time::timeout(std::time::Duration::from_secs(5), ws.next())
            .await
            .expect("Timed out waiting for frame")
            .expect("Stream ended")
            .expect("WebSocket error");
        match frame {
            Message::Text(text) => {
                return serde_json::from_str(text.as_str()).expect("Reply was not JSON")
            }
            Message::Ping(_) | Message::Pong(_) => continue,
            other => panic!("Unexpected frame: {other:?}"),
        }
    }
}

/// Sends one request and waits for its reply.
#[allow(dead_code)]
pub async fn request(ws: &mut WsClient, text: &str) -> serde_json::Value {
    send_text(ws, text).await;
    recv_json(ws).await
}
