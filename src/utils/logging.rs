use once_cell::sync::OnceCell;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::ToolkitConfig;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

/// Log output format types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable text format with timestamp, level, target, and message
    #[default]
    Text,
    /// JSON format with structured fields: timestamp, level, target, message
    Json,
}

impl LogFormat {
    /// Parses `text` / `json` (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use seqops::utils::logging::LogFormat;
    ///
    /// assert_eq!(LogFormat::parse("JSON"), Some(LogFormat::Json));
    /// assert_eq!(LogFormat::parse("yaml"), None);
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "text" => Some(LogFormat::Text),
            _ => None,
        }
    }
}

/// Installs a global `tracing` subscriber configured from `config`.
///
/// Only the first call has any effect; later calls, or a subscriber already
/// installed by the host program, are left alone. Returns whether this call
/// installed the subscriber.
pub fn init_tracing(config: &ToolkitConfig) -> bool {
    let mut installed = false;
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
        let registry = tracing_subscriber::registry().with(filter);
        installed = match config.log_format {
            LogFormat::Json => registry
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()
                .is_ok(),
            LogFormat::Text => registry
                .with(tracing_subscriber::fmt::layer())
                .try_init()
                .is_ok(),
        };
    });
    installed
}
