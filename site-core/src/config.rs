use serde::Deserialize;

/// Site-wide settings bundled with the build.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site_name: String,
    pub church_name: String,
    pub address: String,
    pub contact_email: String,
    pub phone: String,
    /// Google Maps Embed API key. Without one the keyless embed is used.
    pub maps_api_key: Option<String>,
    /// How long the preloader stays up, in ms.
    pub preloader_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "SCOAN".to_string(),
            church_name: "The Synagogue, Church Of All Nations (SCOAN)".to_string(),
            address: "1, Segun Irefin Street, Agodo, Egbe, Lagos, Nigeria".to_string(),
            contact_email: "info@scoan.org".to_string(),
            phone: "+234 1 000 0000".to_string(),
            maps_api_key: None,
            preloader_ms: 2000,
        }
    }
}

impl SiteConfig {
    /// Parse bundled JSON. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Replace the maps key when `key` is non-empty.
    pub fn with_maps_key(mut self, key: Option<&str>) -> Self {
        if let Some(key) = key.map(str::trim).filter(|k| !k.is_empty()) {
            self.maps_api_key = Some(key.to_string());
        }
        self
    }

    pub fn maps_key(&self) -> Option<&str> {
        self.maps_api_key.as_deref().filter(|k| !k.is_empty())
    }
}

/// Map iframe URL. `encoded_address` must already be URI-component encoded.
pub fn map_embed_url(encoded_address: &str, api_key: Option<&str>) -> String {
    match api_key {
        Some(key) => format!("https://www.google.com/maps/embed/v1/place?key={key}&q={encoded_address}"),
        None => format!("https://maps.google.com/maps?q={encoded_address}&t=&z=15&ie=UTF8&iwloc=&output=embed"),
    }
}

pub fn directions_url(encoded_address: &str) -> String {
    format!("https://www.google.com/maps/dir/?api=1&destination={encoded_address}")
}

pub fn larger_map_url(encoded_address: &str) -> String {
    format!("https://www.google.com/maps/search/?api=1&query={encoded_address}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg = SiteConfig::from_json(r#"{"phone": "+234 800"}"#).unwrap();
        assert_eq!(cfg.phone, "+234 800");
        assert_eq!(cfg.preloader_ms, 2000);
        assert!(cfg.maps_key().is_none());
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(SiteConfig::from_json("{").is_err());
    }

    #[test]
    fn test_maps_key_override() {
        let cfg = SiteConfig::default().with_maps_key(Some("  "));
        assert!(cfg.maps_key().is_none());
        let cfg = cfg.with_maps_key(Some("abc"));
        assert_eq!(cfg.maps_key(), Some("abc"));
        assert!(map_embed_url("x", cfg.maps_key()).contains("key=abc"));
        assert!(map_embed_url("x", None).ends_with("output=embed"));
    }
}
