// Configuration type definitions

use serde::Deserialize;
use std::time::Duration;

/// Search configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Delay before the no-results banner disappears
    #[serde(default = "default_no_results_dismiss_ms")]
    pub no_results_dismiss_ms: u64,
}

fn default_no_results_dismiss_ms() -> u64 {
    4000
}

impl SearchConfig {
    pub fn no_results_dismiss(&self) -> Duration {
        Duration::from_millis(self.no_results_dismiss_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            no_results_dismiss_ms: default_no_results_dismiss_ms(),
        }
    }
}

/// Tab bar configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct TabsConfig {
    /// Prefix labels with their number-key shortcut
    #[serde(default = "default_show_numbers")]
    pub show_numbers: bool,
}

fn default_show_numbers() -> bool {
    true
}

impl Default for TabsConfig {
    fn default() -> Self {
        TabsConfig { show_numbers: true }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub tabs: TabsConfig,
}
