use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Application configuration loaded from meal-finder-tui.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Meals shown per page (paginated mode)
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Delay before a query keystroke reaches the filter
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Show pagination controls and slice the list into pages; when false the
    /// whole filtered list is rendered at once
    #[serde(default = "default_paginated")]
    pub paginated: bool,
    /// Base URL of TheMealDB API
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_paginated() -> bool {
    true
}

fn default_base_url() -> String {
    mealdb_client::DEFAULT_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            debounce_ms: default_debounce_ms(),
            paginated: default_paginated(),
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        const CONFIG_FILE: &str = "meal-finder-tui.toml";

        // Try current directory first
        if let Ok(content) = std::fs::read_to_string(CONFIG_FILE)
            && let Ok(config) = toml::from_str(&content)
        {
            log::debug!("Loaded config from {}", CONFIG_FILE);
            return config;
        }

        // Try home directory
        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home).join(format!(".{}", CONFIG_FILE));
            if let Ok(content) = std::fs::read_to_string(&home_config)
                && let Ok(config) = toml::from_str(&content)
            {
                log::debug!("Loaded config from {}", home_config.display());
                return config;
            }
        }

        log::debug!("Using default config");
        Self::default()
    }
}
