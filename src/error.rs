use thiserror::Error;

/// Why an inbound session message could not be carried out.
///
/// The `Display` text of each variant is the `message` sent back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Invalid JSON command")]
    InvalidJson,
    #[error("Missing command field")]
    MissingCommand,
    #[error("Missing position data")]
    MissingPosition,
    #[error("Invalid position data")]
    InvalidPosition,
    #[error("Unknown command: {}", escape_control(.0))]
    UnknownCommand(String),
}

impl CommandError {
    /// Malformed input is answered with a `type=error` frame, everything else
    /// with a `type=response` frame carrying `status=error`.
    pub fn is_malformed(&self) -> bool {
        matches!(self, CommandError::InvalidJson)
    }
}

/// Escapes control characters; every printable character passes through.
fn escape_control(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    out
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}
