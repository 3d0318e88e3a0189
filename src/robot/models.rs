use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RobotStatus {
    Online,
    // Reserved, never produced yet.
    Offline,
    Error,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct Sensors {
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RobotState {
    pub name: String,
    pub status: RobotStatus,
    pub battery: f64,
    pub position: Position,
    pub sensors: Sensors,
}

impl RobotState {
    /// Power-on defaults of the simulated robot.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: RobotStatus::Online,
            battery: 87.0,
            position: Position {
                x: 10.0,
                y: 20.0,
                z: 0.0,
            },
            sensors: Sensors {
                temperature: 25.6,
                humidity: 40.2,
                pressure: 1013.2,
            },
        }
    }
}

impl Default for RobotState {
    fn default() -> Self {
        Self::new("Test Robot")
    }
}

/// A validated session command.
#[derive(Debug, Clone, PartialEq)]
pub enum RobotCommand {
    Move { position: Position },
    GetData,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Connected,
    Response,
    Error,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReplyStatus {
    Success,
    Error,
}

/// One server-to-client frame on the session channel.
#[derive(Debug, Serialize, Clone)]
pub struct SessionMessage {
    #[serde(rename = "type")]
    pub kind: MessageType,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReplyStatus>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robot: Option<RobotState>,
}

impl SessionMessage {
    pub fn connected(robot: RobotState) -> Self {
        Self {
            kind: MessageType::Connected,
            timestamp: Utc::now(),
            received: None,
            status: None,
            message: "Connected to robot WebSocket".to_string(),
            robot: Some(robot),
        }
    }

    pub fn success(received: Value, message: impl Into<String>, robot: Option<RobotState>) -> Self {
        Self {
            kind: MessageType::Response,
            timestamp: Utc::now(),
            received: Some(received),
            status: Some(ReplyStatus::Success),
            message: message.into(),
            robot,
        }
    }

    pub fn rejected(received: Value, message: impl Into<String>) -> Self {
        Self {
            kind: MessageType::Response,
            timestamp: Utc::now(),
            received: Some(received),
            status: Some(ReplyStatus::Error),
            message: message.into(),
            robot: None,
        }
    }

    /// Reply to text that could not be decoded at all; echoes the raw input.
    pub fn malformed(raw: &str, message: impl Into<String>) -> Self {
        Self {
            kind: MessageType::Error,
            timestamp: Utc::now(),
            received: Some(Value::String(raw.to_string())),
            status: None,
            message: message.into(),
            robot: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: RobotStatus,
    pub secure: bool,
    pub protocol: &'static str,
    pub timestamp: DateTime<Utc>,
    pub robot: RobotState,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}
