// Tracing setup for the robot API.
//
// Every event goes to stdout. When a log directory is configured, events are
// also appended to `<log_dir>/robot_api.log` through a non-blocking writer.
//
// `RUST_LOG` overrides the default filter, e.g.
//   `RUST_LOG=info,robot_api::robot::session=debug` to see every processed command.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE: &str = "robot_api.log";
const DEFAULT_FILTER: &str = "info,hyper=warn,tungstenite=warn,tower=warn,tower_http=info";

// Installs the global subscriber.
//
// Hold on to the returned guard until shutdown; buffered file output is
// flushed when it drops.
pub fn init(log_dir: Option<&str>) -> Option<WorkerGuard> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::never(dir, LOG_FILE);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_ansi(true))
        .with(file_layer)
        .init();

    guard
}
