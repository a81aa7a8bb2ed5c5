//! Site configuration for `blog.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site/      # [site] and [site.edit_post]
//! │   ├── locale     # [locale]
//! │   ├── logo       # [logo]
//! │   └── social     # [[socials]]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ValidationError
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! └── mod.rs         # ConfigStore (this file)
//! ```
//!
//! Every value has a built-in default, so [`ConfigStore::load`] works without
//! any file. A `blog.toml` only needs the keys it overrides. Both paths run the
//! same validation and the result is never modified afterwards.

pub mod section;
pub mod types;
mod util;

pub use util::{find_config_file, find_config_file_from, is_lang_tag};

pub use section::{
    DEFAULT_LANG, EditPostConfig, LocaleConfig, LogoConfig, Platform, SiteConfig, SocialLink,
    default_socials, label_for,
};

pub use types::{
    ConfigDiagnostics, ConfigError, FieldPath, ValidationError, cfg, init_config, try_cfg,
};

use crate::{debug, log};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Default config filename
pub const CONFIG_FILE: &str = "blog.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing blog.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigStore {
    /// Site metadata, pagination and toggles
    pub site: SiteConfig,

    /// Page language and locale tags
    pub locale: LocaleConfig,

    /// Header logo
    pub logo: LogoConfig,

    /// Social links in display order. A `[[socials]]` list in the file
    /// replaces the whole default catalogue.
    pub socials: Vec<SocialLink>,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            locale: LocaleConfig::default(),
            logo: LogoConfig::default(),
            socials: default_socials(),
        }
    }
}

impl ConfigStore {
    /// Build the store from the built-in literal values.
    ///
    /// Pure: no file or environment access.
    pub fn load() -> Result<Self, ConfigError> {
        Self::default().finish()
    }

    /// Build the store from explicit parts.
    pub fn new(
        site: SiteConfig,
        locale: LocaleConfig,
        logo: LogoConfig,
        socials: Vec<SocialLink>,
    ) -> Result<Self, ConfigError> {
        Self {
            site,
            locale,
            logo,
            socials,
        }
        .finish()
    }

    /// Parse configuration from a TOML string and validate it.
    ///
    /// Missing keys keep their built-in defaults.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.finish()
    }

    /// Load configuration from file path with unknown field detection.
    ///
    /// Unknown keys are reported as warnings and otherwise ignored.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        debug!("config"; "loaded {}", path.display());
        config.finish()
    }

    /// Load `config_name` if it can be found from the working directory,
    /// otherwise fall back to the built-in values.
    pub fn discover(config_name: &Path) -> Result<Self, ConfigError> {
        match find_config_file(config_name) {
            Some(path) => Self::from_path(&path),
            None => {
                debug!("config"; "{} not found, using built-in values", config_name.display());
                Self::load()
            }
        }
    }

    /// Parse TOML content, collecting any unknown fields.
    pub(crate) fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            log!("warning"; "- {}", field);
        }
    }

    /// Resolve derived values, then validate.
    fn finish(mut self) -> Result<Self, ConfigError> {
        for link in &mut self.socials {
            link.resolve_label(&self.site.title);
        }
        self.validate()?;
        debug!(
            "config";
            "{} social links, {} active",
            self.socials.len(),
            self.active_social_links().count()
        );
        Ok(self)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate every section.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.locale.validate(&mut diag);
        self.logo.validate(&mut diag);
        section::validate_socials(&self.socials, &mut diag);

        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    // ========================================================================
    // queries
    // ========================================================================

    /// Social links to render, in display order.
    ///
    /// Each call returns a fresh iterator over the same entries.
    pub fn active_social_links(&self) -> impl Iterator<Item = &SocialLink> + Clone + '_ {
        self.socials.iter().filter(|link| link.active)
    }

    /// Entry for `platform`, active or not.
    pub fn social(&self, platform: Platform) -> Option<&SocialLink> {
        self.socials.iter().find(|link| link.name == platform)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config overrides on top of the built-in values.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> ConfigStore {
    let (parsed, ignored) = ConfigStore::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
