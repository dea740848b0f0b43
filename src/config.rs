//! Page-level configuration.
//!
//! Pages may override any field through a `<meta name="efish-ui">` tag whose
//! `content` is a JSON object. Missing fields keep their defaults.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::theme::ThemePreference;

/// Name of the `<meta>` tag carrying configuration overrides.
pub const CONFIG_META_NAME: &str = "efish-ui";

/// Attribute on a theme option naming the mode it selects.
pub const OPTION_ATTRIBUTE: &str = "data-theme-option";

/// How mode markers are written onto the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerStrategy {
    /// One of `light-mode` / `dark-mode` / `contrast-mode` in the class list.
    #[default]
    Class,
    /// A single attribute (`data-theme` by default) holding the preference.
    Attribute,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub storage_key: String,
    pub default_mode: ThemePreference,
    pub strategy: MarkerStrategy,
    pub theme_attribute: String,
    pub option_selector: String,
    pub logout_selector: String,
    pub logout_message: String,
    pub menu_mount_selector: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            default_mode: ThemePreference::Light,
            strategy: MarkerStrategy::Class,
            theme_attribute: "data-theme".to_string(),
            option_selector: "[data-theme-option]".to_string(),
            logout_selector: r#"a[href$="/logout"], [data-logout]"#.to_string(),
            logout_message: "Are you sure you want to logout?".to_string(),
            menu_mount_selector: "#theme-menu".to_string(),
        }
    }
}

impl UiConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: UiConfig = serde_json::from_str(raw)?;
        if config.storage_key.trim().is_empty() {
            return Err(ConfigError::Parse("storage_key must not be empty".to_string()));
        }
        validate_theme_attribute(&config.theme_attribute)?;
        Ok(config)
    }
}

/// Attributes the root element already uses for something else.
const RESERVED_ATTRIBUTES: [&str; 3] = ["class", "id", "style"];

/// The theme attribute must be a name `setAttribute` accepts and must not
/// clobber the root's class list or identity.
fn validate_theme_attribute(name: &str) -> Result<(), ConfigError> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == ':');
    let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'));
    if !valid_start || !valid_rest {
        return Err(ConfigError::Parse(format!(
            "theme_attribute {:?} is not a valid attribute name",
            name
        )));
    }

    if RESERVED_ATTRIBUTES.iter().any(|reserved| reserved.eq_ignore_ascii_case(name)) {
        return Err(ConfigError::Parse(format!(
            "theme_attribute {:?} is reserved on the root element",
            name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let config = UiConfig::from_json("{}").unwrap();
        assert_eq!(config, UiConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config =
            UiConfig::from_json(r#"{"strategy": "attribute", "storage_key": "efish-theme"}"#).unwrap();
        assert_eq!(config.strategy, MarkerStrategy::Attribute);
        assert_eq!(config.storage_key, "efish-theme");
        assert_eq!(config.theme_attribute, "data-theme");
        assert_eq!(config.logout_message, "Are you sure you want to logout?");
    }

    #[test]
    fn test_default_mode_accepts_canonical_name() {
        let config = UiConfig::from_json(r#"{"default_mode": "contrast"}"#).unwrap();
        assert_eq!(config.default_mode, ThemePreference::Contrast);
    }

    #[test]
    fn test_invalid_json_is_error() {
        let err = UiConfig::from_json("{strategy: class").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_strategy_is_error() {
        assert!(UiConfig::from_json(r#"{"strategy": "inline"}"#).is_err());
    }

    #[test]
    fn test_blank_storage_key_is_error() {
        assert!(UiConfig::from_json(r#"{"storage_key": "  "}"#).is_err());
    }

    #[test]
    fn test_empty_theme_attribute_is_error() {
        let err = UiConfig::from_json(r#"{"strategy": "attribute", "theme_attribute": ""}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_reserved_theme_attribute_is_error() {
        for name in ["class", "CLASS", "style", "id"] {
            let raw = format!(r#"{{"strategy": "attribute", "theme_attribute": "{}"}}"#, name);
            assert!(UiConfig::from_json(&raw).is_err(), "{} should be rejected", name);
        }
    }

    #[test]
    fn test_malformed_theme_attribute_is_error() {
        for name in ["data theme", "1theme", "-theme", "data=theme", "data-th\u{00e9}me"] {
            let raw = format!(r#"{{"theme_attribute": "{}"}}"#, name);
            assert!(UiConfig::from_json(&raw).is_err(), "{:?} should be rejected", name);
        }
    }

    #[test]
    fn test_custom_theme_attribute_is_accepted() {
        let config =
            UiConfig::from_json(r#"{"strategy": "attribute", "theme_attribute": "data-color-scheme"}"#).unwrap();
        assert_eq!(config.theme_attribute, "data-color-scheme");
    }
}
