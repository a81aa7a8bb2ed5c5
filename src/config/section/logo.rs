//! `[logo]` section configuration.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Header logo image settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "logo")]
pub struct LogoConfig {
    /// Show the logo image instead of the site title.
    #[config(inline_doc)]
    pub enable: bool,

    /// Use logo.svg instead of logo.png.
    #[config(inline_doc)]
    pub svg: bool,

    /// Width in pixels.
    #[config(inline_doc)]
    pub width: u32,

    /// Height in pixels.
    #[config(inline_doc)]
    pub height: u32,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            enable: false,
            svg: true,
            width: 216,
            height: 46,
        }
    }
}

impl LogoConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.width == 0 {
            diag.error(Self::FIELDS.width, "must be a positive pixel count");
        }
        if self.height == 0 {
            diag.error(Self::FIELDS.height, "must be a positive pixel count");
        }
    }

    /// Asset file name for the logo.
    pub const fn file_name(&self) -> &'static str {
        if self.svg { "logo.svg" } else { "logo.png" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(!config.logo.enable);
        assert!(config.logo.svg);
        assert_eq!((config.logo.width, config.logo.height), (216, 46));
        assert_eq!(config.logo.file_name(), "logo.svg");
    }

    #[test]
    fn test_png_logo() {
        let config = test_parse_config("[logo]\nenable = true\nsvg = false");
        assert!(config.logo.enable);
        assert_eq!(config.logo.file_name(), "logo.png");
    }

    #[test]
    fn test_zero_size_rejected() {
        let logo = LogoConfig {
            width: 0,
            ..LogoConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        logo.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.find("logo.width").is_some());
    }
}
