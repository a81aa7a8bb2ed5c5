//! `[site]` section configuration.
//!
//! Contains site metadata, pagination and feature toggles.
//!
//! # Example
//!
//! ```toml
//! [site]
//! website = "https://thejstutorials.com/"
//! author = "Dev Gaurav Jatt"
//! title = "TheJsTutorials"
//! post_per_page = 5
//! scheduled_post_margin = 900000
//!
//! [site.edit_post]
//! url = "https://github.com/you/blog/edit/main/src/content/blog"
//! text = "Suggest Changes"
//! append_file_path = true
//! ```

mod edit;

pub use edit::EditPostConfig;

use macros::Config;
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};

use crate::config::ConfigDiagnostics;
use crate::config::util::check_http_url;

/// Site metadata, pagination and feature toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteConfig {
    /// Deployment origin (absolute URL).
    #[config(inline_doc)]
    pub website: String,

    /// Author name.
    #[config(inline_doc)]
    pub author: String,

    /// Author's public profile URL.
    #[config(inline_doc)]
    pub profile: String,

    /// Site description.
    #[config(inline_doc)]
    pub desc: String,

    /// Site title, also interpolated into social link labels.
    #[config(inline_doc)]
    pub title: String,

    /// Social preview image file name.
    #[config(inline_doc)]
    pub og_image: String,

    /// Offer a light/dark theme toggle.
    #[config(inline_doc)]
    pub light_and_dark_mode: bool,

    /// Posts shown on the index page.
    #[config(inline_doc)]
    pub post_per_index: i64,

    /// Posts per paginated listing page.
    #[config(inline_doc)]
    pub post_per_page: i64,

    /// Posts dated less than this many milliseconds ahead of now already count
    /// as published.
    pub scheduled_post_margin: i64,

    /// Show the archives page.
    #[config(inline_doc)]
    pub show_archives: bool,

    /// Show an "edit this post" link built from `[site.edit_post]`.
    #[config(inline_doc)]
    pub edit_post_is: bool,

    /// Edit link template, only honored when `edit_post_is` is true.
    #[config(sub)]
    pub edit_post: EditPostConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            website: "https://thejstutorials.com/".into(),
            author: "Dev Gaurav Jatt".into(),
            profile: "https://github.com/devgauravjatt".into(),
            desc: "A software development blog covering topics & tutorials related to the web, \
                   javascript, react, solid, svelte, bun, deno, node, developer tools and \
                   framework like nextjs, astrojs, sveltekit and much more."
                .into(),
            title: "TheJsTutorials".into(),
            og_image: "thejstutorials.png".into(),
            light_and_dark_mode: true,
            post_per_index: 5,
            post_per_page: 5,
            scheduled_post_margin: 15 * 60 * 1000,
            show_archives: false,
            edit_post_is: false,
            edit_post: EditPostConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate site configuration.
    ///
    /// # Checks
    /// - `website` and `profile` are http(s) URLs with a host
    /// - `author`, `title` and `desc` are not blank
    /// - `post_per_index` and `post_per_page` are positive
    /// - `scheduled_post_margin` is not negative
    /// - `edit_post` is checked only when `edit_post_is` is set
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        check_http_url(&self.website, Self::FIELDS.website, diag);
        check_http_url(&self.profile, Self::FIELDS.profile, diag);

        for (value, field) in [
            (&self.author, Self::FIELDS.author),
            (&self.title, Self::FIELDS.title),
            (&self.desc, Self::FIELDS.desc),
        ] {
            if value.trim().is_empty() {
                diag.error(field, "must not be empty");
            }
        }

        for (value, field) in [
            (self.post_per_index, Self::FIELDS.post_per_index),
            (self.post_per_page, Self::FIELDS.post_per_page),
        ] {
            if value <= 0 {
                diag.error_with_hint(
                    field,
                    format!("must be a positive integer, got {value}"),
                    "use a page size such as 5",
                );
            }
        }

        if self.scheduled_post_margin < 0 {
            diag.error_with_hint(
                Self::FIELDS.scheduled_post_margin,
                format!(
                    "must not be negative, got {}",
                    self.scheduled_post_margin
                ),
                "the margin is in milliseconds, e.g. 900000 for 15 minutes",
            );
        }

        if self.edit_post_is {
            self.edit_post.validate(diag);
        }
    }

    /// Scheduled post margin as a duration (zero if negative).
    pub fn scheduled_margin(&self) -> Duration {
        Duration::from_millis(u64::try_from(self.scheduled_post_margin).unwrap_or(0))
    }

    /// Whether a post dated `post_date` counts as published at `now`.
    ///
    /// A post is published once `now` is past `post_date - scheduled_margin`.
    pub fn is_published(&self, post_date: SystemTime, now: SystemTime) -> bool {
        post_date
            .checked_sub(self.scheduled_margin())
            .is_none_or(|threshold| now > threshold)
    }

    /// Number of listing pages needed for `total_posts`.
    pub fn page_count(&self, total_posts: usize) -> usize {
        let per_page = usize::try_from(self.post_per_page).unwrap_or(1).max(1);
        total_posts.div_ceil(per_page)
    }

    /// Edit link for a post source file, or `None` if editing is disabled.
    ///
    /// `relative_path` is the post's source path relative to the content
    /// root, appended only when `edit_post.append_file_path` is set.
    pub fn edit_link(&self, relative_path: &str) -> Option<String> {
        self.edit_post_is
            .then(|| self.edit_post.link_for(relative_path))
    }
}
