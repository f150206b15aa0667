use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(String),
    #[error("invalid config: {0}")]
    Invalid(String),
}

fn default_gallery_attribute() -> String {
    "data-instant-gallery".to_string()
}

fn default_caption_attribute() -> String {
    "data-caption".to_string()
}

fn default_class_prefix() -> String {
    "instant-lightbox".to_string()
}

fn default_active_class() -> String {
    "active".to_string()
}

fn default_global_handle() -> Option<String> {
    Some("instantLightbox".to_string())
}

fn default_true() -> bool {
    true
}

/// Markup contract and behaviour switches for the viewer.
///
/// Every field has a default matching the stock stylesheet, so a page only
/// needs to supply the fields it wants to change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightboxConfig {
    /// Attribute on `<a>` elements naming the gallery group
    #[serde(default = "default_gallery_attribute")]
    pub gallery_attribute: String,
    /// Optional attribute on `<a>` elements holding the caption
    #[serde(default = "default_caption_attribute")]
    pub caption_attribute: String,
    /// Prefix for every class the overlay uses
    #[serde(default = "default_class_prefix")]
    pub class_prefix: String,
    /// Marker class for the visible overlay and the active image
    #[serde(default = "default_active_class")]
    pub active_class: String,
    /// Property name on `window` for the running instance. `null` disables it.
    #[serde(default = "default_global_handle")]
    pub global_handle: Option<String>,
    /// Suppress page scroll while the overlay is open
    #[serde(default = "default_true")]
    pub lock_scroll: bool,
    /// Arrow keys and Escape navigate while open
    #[serde(default = "default_true")]
    pub keyboard: bool,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            gallery_attribute: default_gallery_attribute(),
            caption_attribute: default_caption_attribute(),
            class_prefix: default_class_prefix(),
            active_class: default_active_class(),
            global_handle: default_global_handle(),
            lock_scroll: true,
            keyboard: true,
        }
    }
}

impl LightboxConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("gallery_attribute", &self.gallery_attribute),
            ("caption_attribute", &self.caption_attribute),
            ("class_prefix", &self.class_prefix),
            ("active_class", &self.active_class),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{field} must not be empty")));
            }
            if value.chars().any(char::is_whitespace) {
                return Err(ConfigError::Invalid(format!(
                    "{field} must not contain whitespace"
                )));
            }
        }
        if let Some(handle) = &self.global_handle {
            if handle.is_empty() {
                return Err(ConfigError::Invalid(
                    "global_handle must be null or a property name".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub fn root_class(&self) -> String {
        self.class_prefix.clone()
    }

    pub fn content_class(&self) -> String {
        self.class_name("content")
    }

    pub fn close_class(&self) -> String {
        self.class_name("close")
    }

    pub fn prev_class(&self) -> String {
        format!("{} {}", self.class_name("nav"), self.class_name("prev"))
    }

    pub fn next_class(&self) -> String {
        format!("{} {}", self.class_name("nav"), self.class_name("next"))
    }

    pub fn counter_class(&self) -> String {
        self.class_name("counter")
    }

    pub fn caption_class(&self) -> String {
        self.class_name("caption")
    }

    pub fn image_class(&self) -> String {
        self.class_name("image")
    }

    fn class_name(&self, part: &str) -> String {
        format!("{}-{}", self.class_prefix, part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_markup() {
        let config = LightboxConfig::default();
        assert_eq!(config.gallery_attribute, "data-instant-gallery");
        assert_eq!(config.caption_attribute, "data-caption");
        assert_eq!(config.global_handle.as_deref(), Some("instantLightbox"));
        assert_eq!(config.root_class(), "instant-lightbox");
        assert_eq!(config.image_class(), "instant-lightbox-image");
        assert_eq!(
            config.prev_class(),
            "instant-lightbox-nav instant-lightbox-prev"
        );
        assert!(config.lock_scroll);
        assert!(config.keyboard);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = LightboxConfig::from_json(r#"{ "class_prefix": "lb", "keyboard": false }"#)
            .unwrap();
        assert_eq!(config.content_class(), "lb-content");
        assert!(!config.keyboard);
        assert_eq!(config.gallery_attribute, "data-instant-gallery");
    }

    #[test]
    fn test_empty_json_object_is_default() {
        let config = LightboxConfig::from_json("{}").unwrap();
        assert_eq!(config, LightboxConfig::default());
    }

    #[test]
    fn test_null_global_handle_disables_it() {
        let config = LightboxConfig::from_json(r#"{ "global_handle": null }"#).unwrap();
        assert_eq!(config.global_handle, None);
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = LightboxConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_blank_attribute() {
        let err = LightboxConfig::from_json(r#"{ "gallery_attribute": "  " }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_class_with_space() {
        let err = LightboxConfig::from_json(r#"{ "active_class": "is active" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
