//! `[site.edit_post]` configuration.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::config::util::check_http_url;

/// Template for the per-post "edit this post" link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.edit_post")]
pub struct EditPostConfig {
    /// Base URL of the post sources in the repository web UI.
    #[config(inline_doc)]
    pub url: String,

    /// Link text.
    #[config(inline_doc)]
    pub text: String,

    /// Append the post's source path to `url`.
    #[config(inline_doc)]
    pub append_file_path: bool,
}

impl Default for EditPostConfig {
    fn default() -> Self {
        Self {
            url: "https://x.com/DevGauravJatt/edit/main/src/content/blog".into(),
            text: "Suggest Changes".into(),
            append_file_path: true,
        }
    }
}

impl EditPostConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        check_http_url(&self.url, Self::FIELDS.url, diag);
        if self.text.trim().is_empty() {
            diag.error(Self::FIELDS.text, "must not be empty");
        }
    }

    /// Build the edit link for a post source path.
    pub fn link_for(&self, relative_path: &str) -> String {
        let path = relative_path.trim_start_matches('/');
        if !self.append_file_path || path.is_empty() {
            return self.url.clone();
        }
        format!("{}/{}", self.url.trim_end_matches('/'), path)
    }
}
