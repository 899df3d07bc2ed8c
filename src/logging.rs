//! Logging initialisation for termpaint.
//!
//! Stderr output is filtered by `RUST_LOG` (default `warn`). When
//! `TERMPAINT_LOG=1`, structured logs are also written to
//! `termpaint.log` in the data directory.
//!
//! Keep the returned guard alive for the duration of the process so that
//! buffered log lines are flushed on exit.

use std::path::PathBuf;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub struct LogGuard {
    _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Initialise the global tracing subscriber.
pub fn init() -> LogGuard {
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let file_guard = if std::env::var("TERMPAINT_LOG").as_deref() == Ok("1") {
        let dir = log_dir().unwrap_or_else(std::env::temp_dir);
        let _ = std::fs::create_dir_all(&dir);
        let file_appender = tracing_appender::rolling::never(dir, "termpaint.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

        tracing_subscriber::registry()
            .with(filter("debug"))
            .with(stderr_layer)
            .with(file_layer)
            .init();

        Some(guard)
    } else {
        tracing_subscriber::registry()
            .with(filter("warn"))
            .with(stderr_layer)
            .init();

        None
    };

    LogGuard {
        _file_guard: file_guard,
    }
}

/// `$XDG_DATA_HOME/termpaint`, falling back to the platform data directory.
pub fn log_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(xdg).join("termpaint"));
    }
    dirs::data_dir().map(|dir| dir.join("termpaint"))
}
