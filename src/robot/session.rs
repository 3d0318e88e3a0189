use super::commands::process_message;
use super::models::SessionMessage;
use super::state::SharedRobotState;
use crate::error::CommandError;
use axum::extract::ws::{Message, WebSocket};
use futures::stream::StreamExt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Connecting,
    Open,
    Closed,
}

/// One client connection on the session channel.
pub struct Session {
    id: Uuid,
    phase: SessionPhase,
    state: SharedRobotState,
}

impl Session {
    pub fn new(state: SharedRobotState) -> Self {
        Self {
            id: Uuid::new_v4(),
            phase: SessionPhase::Connecting,
            state,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Drives the connection until the client goes away.
    pub async fn run(mut self, mut socket: WebSocket) {
        tracing::info!(session_id = %self.id, "New WebSocket connection");

        let greeting = SessionMessage::connected(self.state.snapshot().await);
        if !self.send(&mut socket, &greeting).await {
            self.close("greeting could not be delivered");
            return;
        }
        self.phase = SessionPhase::Open;

        while let Some(frame) = socket.next().await {
            let raw = match frame {
                Ok(Message::Text(text)) => text.as_str().to_owned(),
                Ok(Message::Binary(bytes)) => match std::str::from_utf8(&bytes) {
                    Ok(text) => text.to_owned(),
                    Err(_) => {
                        let lossy = String::from_utf8_lossy(&bytes);
                        let reply =
                            SessionMessage::malformed(&lossy, CommandError::InvalidJson.to_string());
                        if !self.send(&mut socket, &reply).await {
                            break;
                        }
                        continue;
                    }
                },
                Ok(Message::Close(_)) => break,
                // Ping/pong are answered by the transport.
                Ok(_) => continue,
                Err(e) => {
                    tracing::debug!(session_id = %self.id, error = %e, "WebSocket receive failed");
                    break;
                }
            };

            tracing::info!(session_id = %self.id, command = %raw, "Command received");
            let reply = process_message(&self.state, &raw).await;
            tracing::debug!(
                session_id = %self.id,
                outcome    = %reply.message,
                "Command processed"
            );

            if !self.send(&mut socket, &reply).await {
                break;
            }
        }

        self.close("client disconnected");
    }

    async fn send(&self, socket: &mut WebSocket, message: &SessionMessage) -> bool {
        let text = match serde_json::to_string(message) {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(session_id = %self.id, error = %e, "Failed to encode reply");
                return false;
            }
        };
        socket.send(Message::Text(text.into())).await.is_ok()
    }

    fn close(&mut self, reason: &str) {
        self.phase = SessionPhase::Closed;
        tracing::info!(session_id = %self.id, reason, "WebSocket connection closed");
    }
}
