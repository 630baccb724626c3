use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub recently_closed: RecentlyClosedConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Recently closed tabs settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentlyClosedConfig {
    /// Upper bound on remembered closed tabs (default: 10).
    #[serde(default = "default_max_saved_tabs")]
    pub max_saved_tabs: usize,
}

/// Logging settings. `RUST_LOG` takes precedence when set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_max_saved_tabs() -> usize {
    10
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for RecentlyClosedConfig {
    fn default() -> Self {
        Self {
            max_saved_tabs: default_max_saved_tabs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}
