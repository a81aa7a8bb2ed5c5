//! `[locale]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [locale]
//! lang = "en"          # html lang code, empty falls back to "en"
//! lang_tag = ["en-EN"] # BCP 47 tags, empty uses the environment default
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::config::util::is_lang_tag;

/// Fallback for an empty `lang`.
pub const DEFAULT_LANG: &str = "en";

/// Page language and date/number formatting locales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "locale")]
pub struct LocaleConfig {
    /// html lang code. Leave empty to use "en".
    #[config(inline_doc)]
    pub lang: String,

    /// BCP 47 language tags. Leave empty to use the environment default.
    #[config(inline_doc)]
    pub lang_tag: Vec<String>,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG.into(),
            lang_tag: vec!["en-EN".into()],
        }
    }
}

impl LocaleConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.lang.is_empty() && !is_lang_tag(&self.lang) {
            diag.error_with_hint(
                Self::FIELDS.lang,
                format!("'{}' is not a language code", self.lang),
                "use a code like \"en\" or leave it empty",
            );
        }

        for tag in &self.lang_tag {
            if !is_lang_tag(tag) {
                diag.error_with_hint(
                    Self::FIELDS.lang_tag,
                    format!("'{}' is not a BCP 47 language tag", tag),
                    "use tags like \"en-US\" or \"zh-Hans-CN\"",
                );
            }
        }
    }

    /// Value for `<html lang>`.
    pub fn html_lang(&self) -> &str {
        if self.lang.is_empty() {
            DEFAULT_LANG
        } else {
            &self.lang
        }
    }

    /// True when no tags are configured and formatting should follow the
    /// runtime environment.
    pub fn uses_environment_default(&self) -> bool {
        self.lang_tag.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.locale.lang, "en");
        assert_eq!(config.locale.lang_tag, vec!["en-EN".to_string()]);
        assert!(!config.locale.uses_environment_default());
    }

    #[test]
    fn test_empty_lang_falls_back() {
        let config = test_parse_config("[locale]\nlang = \"\"\nlang_tag = []");
        assert_eq!(config.locale.html_lang(), "en");
        assert!(config.locale.uses_environment_default());

        let mut diag = ConfigDiagnostics::new();
        config.locale.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_tags_keep_order() {
        let config = test_parse_config("[locale]\nlang_tag = [\"fr-FR\", \"en-US\"]");
        assert_eq!(config.locale.lang_tag, vec!["fr-FR", "en-US"]);
    }

    #[test]
    fn test_malformed_tag_rejected() {
        let locale = LocaleConfig {
            lang: "english".into(),
            lang_tag: vec!["en-US".into(), "en_US".into()],
        };
        let mut diag = ConfigDiagnostics::new();
        locale.validate(&mut diag);
        assert_eq!(diag.len(), 2);
        assert!(diag.find("locale.lang").is_some());
        assert!(diag.find("locale.lang_tag").unwrap().reason.contains("en_US"));
    }
}
