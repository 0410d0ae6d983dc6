use crate::config::default_true;
use serde::{Deserialize, Serialize};

/// Cache-invalidation policy for the generated service worker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkboxConfig {
    #[serde(default = "default_glob_patterns")]
    pub glob_patterns: Vec<String>,
    #[serde(default = "default_true")]
    pub cleanup_outdated_caches: bool,
    #[serde(default = "default_true")]
    pub clients_claim: bool,
    #[serde(default = "default_true")]
    pub skip_waiting: bool,
}

impl Default for WorkboxConfig {
    fn default() -> Self {
        Self {
            glob_patterns: default_glob_patterns(),
            cleanup_outdated_caches: true,
            clients_claim: true,
            skip_waiting: true,
        }
    }
}

fn default_glob_patterns() -> Vec<String> {
    vec!["**/*.{js,css,html,svg,png,ico,wasm}".to_owned()]
}

/// Service worker behavior during development
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DevConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub suppress_warnings: bool,
    #[serde(default = "default_navigate_fallback")]
    pub navigate_fallback: Option<String>,
    #[serde(default = "default_allowlist")]
    pub navigate_fallback_allowlist: Vec<String>,
    #[serde(default, rename = "type")]
    pub worker: WorkerType,
}

impl Default for DevConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            suppress_warnings: false,
            navigate_fallback: default_navigate_fallback(),
            navigate_fallback_allowlist: default_allowlist(),
            worker: WorkerType::default(),
        }
    }
}

fn default_navigate_fallback() -> Option<String> {
    Some("/".to_owned())
}

fn default_allowlist() -> Vec<String> {
    vec!["/".to_owned()]
}

/// Script type of the dev service worker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkerType {
    Classic,
    #[default]
    Module,
}

/// Client-side install/update prompt behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    #[serde(default = "default_true")]
    pub install_prompt: bool,
    #[serde(default = "default_periodic_sync")]
    pub periodic_sync_for_updates: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            install_prompt: true,
            periodic_sync_for_updates: default_periodic_sync(),
        }
    }
}

// seconds between update checks from the client
fn default_periodic_sync() -> u32 {
    3600
}
