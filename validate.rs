use crate::*;
use globset::Glob;

/// Options controlling validation strictness
#[derive(Debug, Clone, Default)]
pub struct ValidateOptions {
    /// Also require the TLS credential files to exist on disk
    pub check_paths: bool,
}

impl AppConfig {
    /// Validate the record against the schema the external tooling expects
    pub fn validate(&self) -> Result {
        self.validate_with(&ValidateOptions::default())
    }

    pub fn validate_with(&self, options: &ValidateOptions) -> Result {
        if self.prerender.routes.is_empty() {
            return Err(Error::invalid("prerender.routes", "route list is empty"));
        }
        for route in &self.prerender.routes {
            check_route("prerender.routes", route)?;
        }

        let manifest = &self.pwa.manifest;
        if manifest.name.is_empty() {
            return Err(Error::invalid("pwa.manifest.name", "name is empty"));
        }
        check_color("pwa.manifest.theme_color", &manifest.theme_color)?;
        check_color("pwa.manifest.background_color", &manifest.background_color)?;
        check_route("pwa.manifest.start_url", &manifest.start_url)?;
        check_route("pwa.manifest.scope", &manifest.scope)?;
        check_route("pwa.manifest.id", &manifest.id)?;
        if manifest.icons.is_empty() {
            return Err(Error::invalid("pwa.manifest.icons", "icon list is empty"));
        }

        let workbox = &self.pwa.workbox;
        if !workbox.cleanup_outdated_caches {
            return Err(Error::invalid(
                "pwa.workbox.cleanup_outdated_caches",
                "cache cleanup must stay enabled",
            ));
        }
        if workbox.glob_patterns.is_empty() {
            return Err(Error::invalid(
                "pwa.workbox.glob_patterns",
                "pattern list is empty",
            ));
        }
        for pattern in &workbox.glob_patterns {
            check_glob("pwa.workbox.glob_patterns", pattern)?;
        }

        let dev = &self.pwa.dev;
        if let Some(fallback) = &dev.navigate_fallback {
            check_route("pwa.dev.navigate_fallback", fallback)?;
        }
        for pattern in &dev.navigate_fallback_allowlist {
            check_glob("pwa.dev.navigate_fallback_allowlist", pattern)?;
        }

        if self.pwa.client.periodic_sync_for_updates == 0 {
            return Err(Error::invalid(
                "pwa.client.periodic_sync_for_updates",
                "interval must be positive",
            ));
        }

        if options.check_paths {
            for (path, field) in [(&self.https.key, "https.key"), (&self.https.cert, "https.cert")]
            {
                if !path.exists() {
                    return Err(Error::invalid(field, format!("{} not found", path.display())));
                }
            }
        }

        debug!("config for {:?} passed validation", manifest.name);
        Ok(())
    }
}

// routes and manifest URLs are origin-relative, may carry glob syntax
fn check_route(field: &str, route: &str) -> Result {
    if !route.starts_with('/') {
        return Err(Error::invalid(field, format!("{route:?} must start with '/'")));
    }
    check_glob(field, route)
}

fn check_glob(field: &str, pattern: &str) -> Result {
    if let Err(err) = Glob::new(pattern) {
        return Err(Error::invalid(field, format!("{pattern:?}: {err}")));
    }
    Ok(())
}

// #rgb, #rrggbb and #rrggbbaa CSS hex colors
fn check_color(field: &str, color: &str) -> Result {
    let valid = color.strip_prefix('#').is_some_and(|hex| {
        matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
    });
    if !valid {
        return Err(Error::invalid(field, format!("{color:?} is not a hex color")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named_config(name: &str) -> AppConfig {
        let mut config = AppConfig::default();
        config.pwa.manifest.name = name.to_owned();
        config
    }

    #[test]
    fn default_record_with_name_conforms() {
        named_config("NFC Reader/Writer").validate().unwrap();
    }

    #[test]
    fn empty_route_list_is_rejected() {
        let mut config = named_config("app");
        config.prerender.routes.clear();
        let err = config.validate().unwrap_err();
        assert!(format!("{err}").contains("prerender.routes"));
    }

    #[test]
    fn empty_manifest_name_is_rejected() {
        let err = named_config("").validate().unwrap_err();
        assert!(format!("{err}").contains("pwa.manifest.name"));
    }

    #[test]
    fn disabled_cache_cleanup_is_rejected() {
        let mut config = named_config("app");
        config.pwa.workbox.cleanup_outdated_caches = false;
        let err = config.validate().unwrap_err();
        assert!(format!("{err}").contains("cleanup_outdated_caches"));
    }

    #[test]
    fn malformed_color_is_rejected() {
        let mut config = named_config("app");
        config.pwa.manifest.theme_color = "indigo".to_owned();
        let err = config.validate().unwrap_err();
        assert!(format!("{err}").contains("theme_color"));
    }

    #[test]
    fn short_and_alpha_hex_colors_pass() {
        let mut config = named_config("app");
        config.pwa.manifest.theme_color = "#fff".to_owned();
        config.pwa.manifest.background_color = "#4f46e5ff".to_owned();
        config.validate().unwrap();
    }

    #[test]
    fn relative_route_is_rejected() {
        let mut config = named_config("app");
        config.prerender.routes = vec!["about".to_owned()];
        let err = config.validate().unwrap_err();
        assert!(format!("{err}").contains("start with '/'"));
    }

    #[test]
    fn broken_glob_pattern_is_rejected() {
        let mut config = named_config("app");
        config.pwa.workbox.glob_patterns = vec!["**/*.{js,css".to_owned()];
        let err = config.validate().unwrap_err();
        assert!(format!("{err}").contains("glob_patterns"));
    }

    #[test]
    fn zero_sync_interval_is_rejected() {
        let mut config = named_config("app");
        config.pwa.client.periodic_sync_for_updates = 0;
        let err = config.validate().unwrap_err();
        assert!(format!("{err}").contains("periodic_sync_for_updates"));
    }

    #[test]
    fn missing_cert_files_fail_path_check() {
        let mut config = named_config("app");
        config.https.key = "/definitely/not/server.key".into();
        let options = ValidateOptions { check_paths: true };
        let err = config.validate_with(&options).unwrap_err();
        assert!(format!("{err}").contains("https.key"));
    }
}
