use crate::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Canonical configuration record handed, unmodified, to the build orchestrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppInfo,
    #[serde(default)]
    pub prerender: PrerenderConfig,
    #[serde(default)]
    pub https: HttpsConfig,
    #[serde(default)]
    pub pwa: PwaConfig,
}

/// Basic information about the app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppInfo {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_app_version")]
    pub version: semver::Version,
    #[serde(default)]
    pub description: Option<String>,
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
            description: None,
        }
    }
}

fn default_app_name() -> String {
    std::env::var("CARGO_PKG_NAME").unwrap_or_default()
}

fn default_app_version() -> semver::Version {
    semver::Version::new(0, 1, 0)
}

/// Paths to statically generate ahead of request time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrerenderConfig {
    #[serde(default = "default_routes")]
    pub routes: Vec<String>,
}

impl Default for PrerenderConfig {
    fn default() -> Self {
        Self {
            routes: default_routes(),
        }
    }
}

fn default_routes() -> Vec<String> {
    vec!["/".to_owned()]
}

/// TLS credential paths for the dev server listener
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpsConfig {
    #[serde(default = "default_tls_key_path")]
    pub key: PathBuf,
    #[serde(default = "default_tls_cert_path")]
    pub cert: PathBuf,
}

impl Default for HttpsConfig {
    fn default() -> Self {
        Self {
            key: default_tls_key_path(),
            cert: default_tls_cert_path(),
        }
    }
}

fn default_tls_key_path() -> PathBuf {
    PathBuf::from("./key.pem")
}

fn default_tls_cert_path() -> PathBuf {
    PathBuf::from("./cert.pem")
}

/// Options for the generated service worker and install behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PwaConfig {
    #[serde(default)]
    pub register_type: RegisterType,
    #[serde(default)]
    pub inject_register: InjectRegister,
    #[serde(default)]
    pub manifest: ManifestConfig,
    #[serde(default)]
    pub workbox: WorkboxConfig,
    #[serde(default)]
    pub dev: DevConfig,
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default = "default_true")]
    pub register_manifest_in_route_rules: bool,
    #[serde(default)]
    pub assets: AssetsConfig,
}

impl Default for PwaConfig {
    fn default() -> Self {
        Self {
            register_type: RegisterType::default(),
            inject_register: InjectRegister::default(),
            manifest: ManifestConfig::default(),
            workbox: WorkboxConfig::default(),
            dev: DevConfig::default(),
            client: ClientConfig::default(),
            register_manifest_in_route_rules: true,
            assets: AssetsConfig::default(),
        }
    }
}

/// How the generated service worker picks up new versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum RegisterType {
    #[default]
    AutoUpdate,
    Prompt,
}

/// How the service worker registration snippet reaches the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum InjectRegister {
    #[default]
    Auto,
    Script,
    None,
}

/// Whether the PWA assets generator config is picked up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AssetsConfig {
    #[serde(default)]
    pub config: bool,
}

pub(crate) fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Serialize the record for the external build tooling
    pub fn canonical_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
