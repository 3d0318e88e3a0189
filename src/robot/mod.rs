pub mod client_routes;
pub mod commands;
pub mod models;
pub mod session;
pub mod state;
pub mod telemetry;

/// Route of the bidirectional session channel. Existing clients connect here.
pub const SESSION_PATH: &str = "/web_socker_endpoint";
/// Route of the polling snapshot endpoint.
pub const STATUS_PATH: &str = "/api/status";
