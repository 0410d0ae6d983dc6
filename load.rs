use crate::*;
use std::{
    collections::HashSet,
    fs::read_to_string,
    path::{Path, PathBuf},
};
use toml::Value;

pub static ENV_TLS_CERT_PATH: &str = "TLS_CERT_PATH";
pub static ENV_TLS_KEY_PATH: &str = "TLS_KEY_PATH";

/// Default config filename in local layers
pub static CONFIG_FILE: &str = "preflight.toml";

/// Effective config plus metadata about the layers merged into it
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The merged, validated record
    pub config: AppConfig,
    /// One entry per variant file that contributed to the merge
    pub layers: Vec<ConfigLayer>,
}

/// Origin of a single config layer in the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLayerSource {
    /// User-level configuration from the OS config dir
    User,
    /// Project configuration next to the sources
    Project,
    /// Explicit override paths (highest precedence)
    Override,
}

/// Metadata about one merged config layer
#[derive(Debug, Clone)]
pub struct ConfigLayer {
    pub source: ConfigLayerSource,
    pub path: PathBuf,
}

/// Options controlling layer discovery
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Directory holding the project-level config file
    pub dir: PathBuf,
    /// User-level config path, defaults to the OS config dir
    pub user_config_path: Option<PathBuf>,
    /// Override config paths applied last, must exist
    pub override_paths: Vec<PathBuf>,
}

impl LoadOptions {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        let user_config_path = directories::ProjectDirs::from("", "", "preflight")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE));
        Self {
            dir: dir.as_ref().to_path_buf(),
            user_config_path,
            override_paths: Vec::new(),
        }
    }

    /// Add an override config path that is applied last
    pub fn with_override_path(mut self, path: impl AsRef<Path>) -> Self {
        self.override_paths.push(path.as_ref().to_path_buf());
        self
    }
}

impl AppConfig {
    /// Parse a single configuration variant without layering or validation
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Read and parse a single configuration variant from a file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::NotFound(path.to_path_buf()));
        }
        Self::from_toml_str(&read_to_string(path)?)
    }

    /// Load the layered config stack from the default locations
    pub fn load(dir: impl AsRef<Path>) -> Result<LoadedConfig> {
        Self::load_with(LoadOptions::new(dir))
    }

    /// Load, merge and validate the layered config stack.
    ///
    /// Layer precedence (low -> high): user config dir, project file,
    /// override paths. Missing user/project files are skipped, missing
    /// override paths are an error. Certificate paths from `TLS_KEY_PATH`
    /// and `TLS_CERT_PATH` (including `.env`) win over every file.
    pub fn load_with(options: LoadOptions) -> Result<LoadedConfig> {
        // pick up .env variables before reading overrides from the process env
        dotenvy::dotenv().ok();

        let mut merged = Value::Table(toml::map::Map::new());
        let mut layers = Vec::new();
        let mut seen_paths = HashSet::new();

        let project_path = options.dir.join(CONFIG_FILE);
        let optional_layers = [
            (ConfigLayerSource::User, options.user_config_path.clone()),
            (ConfigLayerSource::Project, Some(project_path)),
        ];
        for (source, path) in optional_layers {
            let Some(path) = path else { continue };
            if !path.exists() {
                debug!("skipping missing {source:?} layer at {}", path.display());
                continue;
            }
            merge_layer(source, &path, &mut merged, &mut layers, &mut seen_paths)?;
        }

        for path in &options.override_paths {
            if !path.exists() {
                return Err(Error::NotFound(path.clone()));
            }
            merge_layer(
                ConfigLayerSource::Override,
                path,
                &mut merged,
                &mut layers,
                &mut seen_paths,
            )?;
        }

        let mut config: AppConfig = merged.try_into()?;
        apply_env_overrides(&mut config);
        config.validate()?;
        info!("layered config loaded (layers={})", layers.len());
        Ok(LoadedConfig { config, layers })
    }
}

fn merge_layer(
    source: ConfigLayerSource,
    path: &Path,
    merged: &mut Value,
    layers: &mut Vec<ConfigLayer>,
    seen_paths: &mut HashSet<PathBuf>,
) -> Result {
    let unique = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    if !seen_paths.insert(unique) {
        debug!("skipping duplicate {source:?} layer at {}", path.display());
        return Ok(());
    }
    let value = read_to_string(path)?.parse::<Value>()?;
    merge_values(merged, &value);
    debug!("merged {source:?} layer from {}", path.display());
    layers.push(ConfigLayer {
        source,
        path: path.to_path_buf(),
    });
    Ok(())
}

fn apply_env_overrides(config: &mut AppConfig) {
    if let Ok(path) = std::env::var(ENV_TLS_KEY_PATH) {
        config.https.key = path.into();
    }
    if let Ok(path) = std::env::var(ENV_TLS_CERT_PATH) {
        config.https.cert = path.into();
    }
}
