use serde::{Deserialize, Serialize};

/// Descriptive metadata embedded into the generated web-app manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default = "default_theme")]
    pub theme_color: String,
    #[serde(default = "default_background")]
    pub background_color: String,
    #[serde(default)]
    pub display: DisplayMode,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default = "default_root")]
    pub start_url: String,
    #[serde(default = "default_root")]
    pub scope: String,
    #[serde(default = "default_root")]
    pub id: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub prefer_related_applications: bool,
    #[serde(default = "default_icons")]
    pub icons: Vec<Icon>,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            short_name: None,
            description: default_description(),
            theme_color: default_theme(),
            background_color: default_background(),
            display: DisplayMode::default(),
            orientation: Orientation::default(),
            start_url: default_root(),
            scope: default_root(),
            id: default_root(),
            categories: Vec::new(),
            prefer_related_applications: false,
            icons: default_icons(),
        }
    }
}

fn default_name() -> String {
    std::env::var("CARGO_PKG_NAME").unwrap_or_default()
}

fn default_description() -> String {
    "An installable web application".to_owned()
}

fn default_theme() -> String {
    "#a21caf".to_owned()
}

fn default_background() -> String {
    "#1e293b".to_owned()
}

fn default_root() -> String {
    "/".to_owned()
}

// at least one icon is required for PWA installability
fn default_icons() -> Vec<Icon> {
    vec![Icon {
        src: "logo.png".to_owned(),
        sizes: "512x512".to_owned(),
        mime_type: None,
        purpose: None,
    }]
}

/// One entry of the manifest icon list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Icon {
    pub src: String,
    pub sizes: String,
    #[serde(default, rename = "type")]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
}

/// Manifest display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    Fullscreen,
    #[default]
    Standalone,
    MinimalUi,
    Browser,
}

/// Manifest screen orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    #[default]
    Any,
    Natural,
    Portrait,
    Landscape,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_and_orientation_use_kebab_case_values() {
        let manifest: ManifestConfig = toml::from_str(
            r#"
            name = "NFC Reader/Writer"
            display = "minimal-ui"
            orientation = "portrait"
            "#,
        )
        .unwrap();
        assert_eq!(manifest.display, DisplayMode::MinimalUi);
        assert_eq!(manifest.orientation, Orientation::Portrait);
    }

    #[test]
    fn defaults_keep_installability() {
        let manifest = ManifestConfig::default();
        assert_eq!(manifest.start_url, "/");
        assert_eq!(manifest.scope, "/");
        assert_eq!(manifest.icons.len(), 1);
        assert_eq!(manifest.icons[0].sizes, "512x512");
    }

    #[test]
    fn icon_type_key_maps_to_mime_type() {
        let icon: Icon = toml::from_str(
            r#"
            src = "logo.png"
            sizes = "192x192"
            type = "image/png"
            purpose = "maskable"
            "#,
        )
        .unwrap();
        assert_eq!(icon.mime_type.as_deref(), Some("image/png"));
        assert_eq!(icon.purpose.as_deref(), Some("maskable"));
    }
}
