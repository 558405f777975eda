//! TOML loading for host-side tooling
//!
//! Missing keys fall back to the compiled-in defaults; the result is
//! validated before it is returned.

use super::types::{ConfigError, RegisterSignConfig, StandaloneSignConfig};

impl RegisterSignConfig {
    /// Parse and validate a register sign configuration
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = ::toml::from_str(text).map_err(|_| ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }
}

impl StandaloneSignConfig {
    /// Parse and validate a standalone sign configuration
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = ::toml::from_str(text).map_err(|_| ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Font;

    #[test]
    fn test_empty_document_gives_defaults() {
        assert_eq!(
            RegisterSignConfig::from_toml_str("").unwrap(),
            RegisterSignConfig::default()
        );
    }

    #[test]
    fn test_partial_override() {
        let config = RegisterSignConfig::from_toml_str(
            r#"
            node_address = 17
            welcome_text = "Hos geldiniz"

            [panel]
            panels_wide = 2
            font = "ArialBlack16"

            [initial_registers]
            mode = 2
            scroll_speed_ms = 250
            value_a = -10
            value_b = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.node_address, 17);
        assert_eq!(config.welcome_text.as_str(), "Hos geldiniz");
        assert_eq!(config.panel.panels_wide, 2);
        assert_eq!(config.panel.panels_high, 1);
        assert_eq!(config.panel.font, Font::ArialBlack16);
        assert_eq!(config.initial_registers.value_a, -10);
        assert_eq!(config.error_hold_ms, 1000);
    }

    #[test]
    fn test_static_texts_from_toml() {
        let config = StandaloneSignConfig::from_toml_str(
            r#"
            static_texts = ["ACIK", "KAPALI"]
            rotations_per_mode = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.static_texts.len(), 2);
        assert_eq!(config.static_texts[1].as_str(), "KAPALI");
        assert_eq!(config.rotations_per_mode, 2);
    }

    #[test]
    fn test_invalid_documents() {
        assert_eq!(
            RegisterSignConfig::from_toml_str("node_address = ="),
            Err(ConfigError::Parse)
        );
        assert_eq!(
            RegisterSignConfig::from_toml_str("node_address = 0"),
            Err(ConfigError::InvalidNodeAddress)
        );
        assert_eq!(
            StandaloneSignConfig::from_toml_str("static_texts = []"),
            Err(ConfigError::NoStaticTexts)
        );
    }
}
