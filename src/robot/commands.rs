use super::models::{Position, RobotCommand, SessionMessage};
use super::state::SharedRobotState;
use crate::error::CommandError;
use serde_json::Value;

/// Decodes one raw session message.
///
/// On success returns the parsed payload (echoed back to the client) together
/// with the validated command, or the validation error for that payload.
pub fn parse_command(raw: &str) -> Result<(Value, Result<RobotCommand, CommandError>), CommandError> {
    let payload: Value = serde_json::from_str(raw).map_err(|_| CommandError::InvalidJson)?;
    let command = validate(&payload);
    Ok((payload, command))
}

fn validate(payload: &Value) -> Result<RobotCommand, CommandError> {
    let name = payload.get("command").ok_or(CommandError::MissingCommand)?;

    match name.as_str() {
        Some("move") => {
            let position = payload
                .get("position")
                .ok_or(CommandError::MissingPosition)?;
            let position: Position = serde_json::from_value(position.clone())
                .map_err(|_| CommandError::InvalidPosition)?;
            Ok(RobotCommand::Move { position })
        }
        Some("get_data") => Ok(RobotCommand::GetData),
        Some(other) => Err(CommandError::UnknownCommand(other.to_string())),
        None => Err(CommandError::UnknownCommand(name.to_string())),
    }
}

/// Runs one inbound message against the robot and builds the single reply.
pub async fn process_message(state: &SharedRobotState, raw: &str) -> SessionMessage {
    let (received, command) = match parse_command(raw) {
        Ok(parsed) => parsed,
        Err(e) => return SessionMessage::malformed(raw, e.to_string()),
    };

    match command {
        Ok(RobotCommand::Move { position }) => {
            state.set_position(position).await;
            SessionMessage::success(received, "Robot moved to new position", None)
        }
        Ok(RobotCommand::GetData) => {
            let robot = state.refresh().await;
            SessionMessage::success(received, "Robot data retrieved", Some(robot))
        }
        Err(e) => SessionMessage::rejected(received, e.to_string()),
    }
}
