//! Diagnostic logging setup for the `dl` binary

use clap::ValueEnum;
use std::fmt;
use std::sync::OnceLock;
use tracing_subscriber::{fmt as subscriber_fmt, EnvFilter};

/// Environment variable holding a default filter directive
pub const LOG_ENV: &str = "DL_LOG";

/// Logging verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational events
    Info,
    /// Stage boundaries
    Debug,
    /// Strategy dispatch
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };
        f.write_str(text)
    }
}

/// Filter directive from the command line level, then the environment, then `warn`
pub fn directive(level: Option<LogLevel>, env: Option<&str>) -> String {
    match (level, env) {
        (Some(level), _) => level.to_string(),
        (None, Some(env)) if !env.trim().is_empty() => env.trim().to_string(),
        (None, _) => LogLevel::Warn.to_string(),
    }
}

/// Install the global subscriber writing to stderr. Later calls do nothing.
pub fn init(level: Option<LogLevel>) {
    static INITIALISED: OnceLock<()> = OnceLock::new();

    INITIALISED.get_or_init(|| {
        let env = std::env::var(LOG_ENV).ok();
        let directive = directive(level, env.as_deref());
        let filter = EnvFilter::try_new(&directive)
            .unwrap_or_else(|_| EnvFilter::new(LogLevel::Warn.to_string()));

        let subscriber = subscriber_fmt::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .compact()
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            tracing::warn!("a global subscriber is already installed");
        }
    });
}
