//! TOML merge helpers for layered configuration.

use toml::Value;

/// Merge overlay values into the base, recursively overriding tables.
///
/// Scalars and arrays are replaced by the overlay so that a later variant
/// can narrow a route or glob list instead of only growing it.
pub fn merge_values(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Table(base_map), Value::Table(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (base_slot, overlay_value) => {
            *base_slot = overlay_value.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(doc: &str) -> Value {
        doc.parse::<Value>().unwrap()
    }

    #[test]
    fn overlay_scalar_wins() {
        let mut base = parse("[pwa.manifest]\nname = \"base\"");
        let overlay = parse("[pwa.manifest]\nname = \"overlay\"");
        merge_values(&mut base, &overlay);
        assert_eq!(base["pwa"]["manifest"]["name"].as_str(), Some("overlay"));
    }

    #[test]
    fn tables_merge_key_wise() {
        let mut base = parse("[pwa.manifest]\nname = \"app\"\ntheme_color = \"#4f46e5\"");
        let overlay = parse("[pwa.manifest]\nshort_name = \"app\"");
        merge_values(&mut base, &overlay);
        let manifest = base["pwa"]["manifest"].as_table().unwrap();
        assert_eq!(manifest["name"].as_str(), Some("app"));
        assert_eq!(manifest["theme_color"].as_str(), Some("#4f46e5"));
        assert_eq!(manifest["short_name"].as_str(), Some("app"));
    }

    #[test]
    fn arrays_replace_instead_of_append() {
        let mut base = parse("[prerender]\nroutes = [\"/\", \"/about\"]");
        let overlay = parse("[prerender]\nroutes = [\"/\"]");
        merge_values(&mut base, &overlay);
        let routes = base["prerender"]["routes"].as_array().unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].as_str(), Some("/"));
    }

    #[test]
    fn missing_keys_come_from_overlay() {
        let mut base = parse("[https]\nkey = \"./key.pem\"");
        let overlay = parse("[https]\ncert = \"./cert.pem\"");
        merge_values(&mut base, &overlay);
        let https = base["https"].as_table().unwrap();
        assert_eq!(https["key"].as_str(), Some("./key.pem"));
        assert_eq!(https["cert"].as_str(), Some("./cert.pem"));
    }
}
