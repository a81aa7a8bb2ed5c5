//! `[[socials]]` configuration.
//!
//! An ordered list of social profile links. Order is display order. Entries
//! stay in the list when inactive so they can be switched on later.
//!
//! # Example
//!
//! ```toml
//! [[socials]]
//! name = "Github"
//! href = "https://github.com/devgauravjatt"
//! active = true
//!
//! [[socials]]
//! name = "Mail"
//! href = "mailto:yourmail@gmail.com"
//! link_title = "Write to me"
//! active = false
//! ```

use macros::Config;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::ConfigDiagnostics;
use crate::config::util::{check_http_url, check_mailto};

/// Known social platforms.
///
/// Names deserialize exactly as spelled here; anything else fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Github,
    Facebook,
    Instagram,
    LinkedIn,
    Mail,
    X,
    Twitch,
    YouTube,
    WhatsApp,
    Snapchat,
    Pinterest,
    TikTok,
    CodePen,
    Discord,
    GitLab,
    Reddit,
    Skype,
    Steam,
    Telegram,
    Mastodon,
    Bluesky,
}

impl Platform {
    /// Every platform, in default display order.
    pub const ALL: [Self; 21] = [
        Self::Github,
        Self::Facebook,
        Self::Instagram,
        Self::LinkedIn,
        Self::Mail,
        Self::X,
        Self::Twitch,
        Self::YouTube,
        Self::WhatsApp,
        Self::Snapchat,
        Self::Pinterest,
        Self::TikTok,
        Self::CodePen,
        Self::Discord,
        Self::GitLab,
        Self::Reddit,
        Self::Skype,
        Self::Steam,
        Self::Telegram,
        Self::Mastodon,
        Self::Bluesky,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Github => "Github",
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
            Self::LinkedIn => "LinkedIn",
            Self::Mail => "Mail",
            Self::X => "X",
            Self::Twitch => "Twitch",
            Self::YouTube => "YouTube",
            Self::WhatsApp => "WhatsApp",
            Self::Snapchat => "Snapchat",
            Self::Pinterest => "Pinterest",
            Self::TikTok => "TikTok",
            Self::CodePen => "CodePen",
            Self::Discord => "Discord",
            Self::GitLab => "GitLab",
            Self::Reddit => "Reddit",
            Self::Skype => "Skype",
            Self::Steam => "Steam",
            Self::Telegram => "Telegram",
            Self::Mastodon => "Mastodon",
            Self::Bluesky => "Bluesky",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accessible label for a platform link.
pub fn label_for(platform: Platform, site_title: &str) -> String {
    match platform {
        Platform::Mail => format!("Send an email to {site_title}"),
        _ => format!("{site_title} on {platform}"),
    }
}

/// One social profile link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[config(section = "socials")]
pub struct SocialLink {
    /// Platform name.
    #[config(default = "Github")]
    pub name: Platform,

    /// Profile URL, or a mailto: URI for Mail.
    #[config(default = "https://github.com/you")]
    pub href: String,

    /// Accessible label. Generated from the site title when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_title: Option<String>,

    /// Render this link.
    #[serde(default)]
    #[config(default = "true")]
    pub active: bool,
}

impl SocialLink {
    pub fn new(name: Platform, href: impl Into<String>, active: bool) -> Self {
        Self {
            name,
            href: href.into(),
            link_title: None,
            active,
        }
    }

    /// Resolved label. Empty only before the owning store finished loading.
    pub fn label(&self) -> &str {
        self.link_title.as_deref().unwrap_or_default()
    }

    /// Fill in a generated label if none was configured.
    pub(crate) fn resolve_label(&mut self, site_title: &str) {
        if self.link_title.is_none() {
            self.link_title = Some(label_for(self.name, site_title));
        }
    }
}

/// The default catalogue: every platform, four of them active.
pub fn default_socials() -> Vec<SocialLink> {
    const PLACEHOLDER: &str = "https://x.com/DevGauravJatt";

    Platform::ALL
        .into_iter()
        .map(|platform| match platform {
            Platform::Github => SocialLink::new(platform, "https://github.com/devgauravjatt", true),
            Platform::Instagram => {
                SocialLink::new(platform, "https://instagram.com/devgauravjatt", true)
            }
            Platform::LinkedIn => {
                SocialLink::new(platform, "https://www.linkedin.com/in/devgauravjatt/", true)
            }
            Platform::Mail => SocialLink::new(platform, "mailto:yourmail@gmail.com", false),
            Platform::Bluesky => SocialLink::new(
                platform,
                "https://bsky.app/profile/devgauravjatt.bsky.social",
                true,
            ),
            _ => SocialLink::new(platform, PLACEHOLDER, false),
        })
        .collect()
}

/// Validate hrefs and name uniqueness across the whole list.
pub fn validate_socials(socials: &[SocialLink], diag: &mut ConfigDiagnostics) {
    let mut seen: FxHashMap<Platform, usize> = FxHashMap::default();

    for (index, link) in socials.iter().enumerate() {
        if let Some(first) = seen.get(&link.name) {
            diag.error_with_hint(
                SocialLink::FIELDS.name.indexed(index),
                format!(
                    "duplicate platform '{}', already defined at socials[{}]",
                    link.name, first
                ),
                "keep a single entry per platform",
            );
        } else {
            seen.insert(link.name, index);
        }

        let href = SocialLink::FIELDS.href.indexed(index);
        match link.name {
            Platform::Mail => check_mailto(&link.href, href, diag),
            _ => check_http_url(&link.href, href, diag),
        }

        if link.link_title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            diag.error(
                SocialLink::FIELDS.link_title.indexed(index),
                "must not be blank, omit it to use the generated label",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_default_catalogue_order() {
        let socials = default_socials();
        let names: Vec<_> = socials.iter().map(|s| s.name).collect();
        assert_eq!(names, Platform::ALL);
        assert_eq!(socials[4].href, "mailto:yourmail@gmail.com");
    }

    #[test]
    fn test_default_catalogue_active_set() {
        let active: Vec<_> = default_socials()
            .into_iter()
            .filter(|s| s.active)
            .map(|s| s.name)
            .collect();
        assert_eq!(
            active,
            [
                Platform::Github,
                Platform::Instagram,
                Platform::LinkedIn,
                Platform::Bluesky
            ]
        );
    }

    #[test]
    fn test_default_catalogue_is_valid() {
        let mut diag = ConfigDiagnostics::new();
        validate_socials(&default_socials(), &mut diag);
        assert!(diag.is_empty(), "{diag}");
    }

    #[test]
    fn test_label_for() {
        assert_eq!(
            label_for(Platform::Github, "TheJsTutorials"),
            "TheJsTutorials on Github"
        );
        assert_eq!(
            label_for(Platform::Mail, "TheJsTutorials"),
            "Send an email to TheJsTutorials"
        );
        assert_eq!(label_for(Platform::YouTube, "Blog"), "Blog on YouTube");
    }

    #[test]
    fn test_resolve_label_keeps_explicit_title() {
        let mut link = SocialLink::new(Platform::X, "https://x.com/me", true);
        link.link_title = Some("Follow me".into());
        link.resolve_label("Blog");
        assert_eq!(link.label(), "Follow me");

        let mut link = SocialLink::new(Platform::X, "https://x.com/me", true);
        assert_eq!(link.label(), "");
        link.resolve_label("Blog");
        assert_eq!(link.label(), "Blog on X");
    }

    #[test]
    fn test_parse_socials() {
        let config = test_parse_config(
            r#"[[socials]]
name = "Mastodon"
href = "https://mastodon.social/@me"
active = true

[[socials]]
name = "LinkedIn"
href = "https://www.linkedin.com/in/me/"
link_title = "Hire me""#,
        );
        assert_eq!(config.socials.len(), 2);
        assert_eq!(config.socials[0].name, Platform::Mastodon);
        assert!(config.socials[0].active);
        assert!(config.socials[0].link_title.is_none());
        assert_eq!(config.socials[1].name, Platform::LinkedIn);
        assert!(!config.socials[1].active);
        assert_eq!(config.socials[1].label(), "Hire me");
    }

    #[test]
    fn test_unknown_platform_fails_to_parse() {
        let result: Result<crate::config::ConfigStore, _> =
            toml::from_str("[[socials]]\nname = \"MySpace\"\nhref = \"https://myspace.com\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let socials = vec![
            SocialLink::new(Platform::Github, "https://github.com/a", true),
            SocialLink::new(Platform::X, "https://x.com/a", false),
            SocialLink::new(Platform::Github, "https://github.com/b", false),
        ];
        let mut diag = ConfigDiagnostics::new();
        validate_socials(&socials, &mut diag);
        assert_eq!(diag.len(), 1);
        let err = diag.find("socials[2].name").unwrap();
        assert!(err.reason.contains("socials[0]"));
    }

    #[test]
    fn test_bad_href_cites_index() {
        let socials = vec![
            SocialLink::new(Platform::Github, "https://github.com/a", true),
            SocialLink::new(Platform::Reddit, "not a url", false),
        ];
        let mut diag = ConfigDiagnostics::new();
        validate_socials(&socials, &mut diag);
        assert!(diag.find("socials[1].href").is_some());
    }

    #[test]
    fn test_mail_requires_mailto() {
        let socials = vec![SocialLink::new(
            Platform::Mail,
            "https://mail.example.com",
            true,
        )];
        let mut diag = ConfigDiagnostics::new();
        validate_socials(&socials, &mut diag);
        assert!(diag.find("socials[0].href").is_some());
    }

    #[test]
    fn test_blank_link_title_rejected() {
        let mut link = SocialLink::new(Platform::Steam, "https://steamcommunity.com/id/me", true);
        link.link_title = Some("   ".into());
        let mut diag = ConfigDiagnostics::new();
        validate_socials(&[link], &mut diag);
        assert!(diag.find("socials[0].link_title").is_some());
    }

    #[test]
    fn test_template_entry() {
        let template = SocialLink::template();
        assert!(template.contains("name = \"Github\""));
        assert!(template.contains("# link_title = \"\""));
        assert!(template.contains("active = true"));
    }
}
